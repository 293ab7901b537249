//! Tests for panel layout, tight cropping and figure export

#[cfg(test)]
mod tests {
    use image::{Rgb, RgbImage};
    use statmeme::CanonicalImage;
    use statmeme::MemeError;
    use statmeme::glyph::fonts::FontChain;
    use statmeme::render::layout::{
        FigureOptions, Panel, fit_within, render_panels, save_figure, tight_crop,
    };

    const WHITE: Rgb<u8> = Rgb([255, 255, 255]);

    fn sample_panels(count: usize) -> Vec<Panel> {
        (0..count)
            .map(|i| Panel::new(format!("P{i}"), CanonicalImage::filled(20, 30, 0.5)))
            .collect()
    }

    fn small_options() -> FigureOptions {
        FigureOptions {
            dpi: 40,
            ..FigureOptions::default()
        }
    }

    // Tests defaults match the figure conventions
    // Verified by changing the default figure size
    #[test]
    fn test_default_options() {
        let options = FigureOptions::default();
        assert_eq!(options.dpi, 150);
        assert_eq!(options.background, WHITE);
        assert_eq!(options.inches_to_pixels(14.0), 2100);
        assert_eq!(options.points_to_pixels(12.0), 25);
    }

    // Tests fitting preserves aspect ratio inside the bounds
    // Verified by stretching to the bounds
    #[test]
    fn test_fit_within() {
        assert_eq!(fit_within(100, 50, 200, 200), (200, 100));
        assert_eq!(fit_within(50, 100, 200, 200), (100, 200));
        assert_eq!(fit_within(10, 10, 30, 20), (20, 20));
        assert_eq!(fit_within(1000, 1, 10, 10), (10, 1));
    }

    // Tests cropping keeps the content box plus padding
    // Verified by ignoring the padding
    #[test]
    fn test_tight_crop() {
        let mut canvas = RgbImage::from_pixel(10, 10, WHITE);
        canvas.put_pixel(5, 5, Rgb([0, 0, 0]));
        canvas.put_pixel(6, 4, Rgb([10, 10, 10]));

        let cropped = tight_crop(&canvas, WHITE, 2);
        assert_eq!(cropped.dimensions(), (6, 6));
        assert_eq!(cropped.get_pixel(2, 3), &Rgb([0, 0, 0]));

        let edge = tight_crop(&canvas, WHITE, 50);
        assert_eq!(edge.dimensions(), (10, 10));
    }

    // Tests a canvas with nothing on it is returned whole
    // Verified by cropping to an empty rectangle
    #[test]
    fn test_tight_crop_blank() {
        let canvas = RgbImage::from_pixel(7, 3, WHITE);
        assert_eq!(tight_crop(&canvas, WHITE, 1).dimensions(), (7, 3));
    }

    // Tests rendering draws borders and images and crops the figure
    // Verified by skipping the border rectangles
    #[test]
    fn test_render_panels() {
        let options = small_options();
        let figure = render_panels(&sample_panels(4), &options, &FontChain::builtin_only())
            .unwrap();

        let (width, height) = figure.dimensions();
        assert!(width <= options.inches_to_pixels(14.0));
        assert!(height < options.inches_to_pixels(4.0));
        assert!(figure.pixels().any(|p| *p == Rgb([0, 0, 0])));
        assert!(figure.pixels().any(|p| *p == Rgb([128, 128, 128])));
    }

    // Tests the background colour fills the figure margins
    // Verified by always filling white
    #[test]
    fn test_render_background() {
        let options = FigureOptions {
            background: Rgb([200, 10, 10]),
            ..small_options()
        };
        let figure = render_panels(&sample_panels(2), &options, &FontChain::builtin_only())
            .unwrap();

        assert_eq!(figure.get_pixel(0, 0), &Rgb([200, 10, 10]));
    }

    // Tests images keep a fixed intensity range without auto-contrast
    // Verified by stretching each panel to full range
    #[test]
    fn test_render_no_autocontrast() {
        let panels = vec![Panel::new("", CanonicalImage::filled(10, 10, 0.2))];
        let figure = render_panels(&panels, &small_options(), &FontChain::builtin_only())
            .unwrap();

        assert!(figure.pixels().any(|p| *p == Rgb([51, 51, 51])));
        assert!(!figure.pixels().any(|p| *p == Rgb([128, 128, 128])));
    }

    // Tests invalid figure settings are rejected
    // Verified by removing the dpi check
    #[test]
    fn test_render_invalid_settings() {
        let fonts = FontChain::builtin_only();

        let zero_dpi = FigureOptions {
            dpi: 0,
            ..FigureOptions::default()
        };
        assert!(matches!(
            render_panels(&sample_panels(1), &zero_dpi, &fonts),
            Err(MemeError::InvalidParameter { parameter: "dpi", .. })
        ));

        assert!(matches!(
            render_panels(&[], &small_options(), &fonts),
            Err(MemeError::InvalidParameter {
                parameter: "panels",
                ..
            })
        ));

        let cramped = FigureOptions {
            figure_inches: (0.2, 0.2),
            ..small_options()
        };
        assert!(matches!(
            render_panels(&sample_panels(4), &cramped, &fonts),
            Err(MemeError::InvalidParameter {
                parameter: "figure_inches",
                ..
            })
        ));
    }

    // Tests saving creates missing directories
    // Verified by removing directory creation
    #[test]
    fn test_save_figure_creates_directories() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("deeper").join("figure.png");
        let figure = RgbImage::from_pixel(4, 4, WHITE);

        save_figure(&figure, &path).unwrap();

        assert!(path.exists());
        let reloaded = image::open(&path).unwrap();
        assert_eq!((reloaded.width(), reloaded.height()), (4, 4));
    }

    // Tests unknown extensions fail with an export error
    // Verified by mapping encoder errors to filesystem errors
    #[test]
    fn test_save_figure_bad_extension() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("figure.unknownext");
        let figure = RgbImage::from_pixel(4, 4, WHITE);

        assert!(matches!(
            save_figure(&figure, &path),
            Err(MemeError::ImageExport { .. })
        ));
    }
}
