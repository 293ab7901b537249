//! Left-to-right panel figures with titles, borders and tight cropping
//!
//! Sizes follow plotting conventions: the figure is given in inches, text and
//! line widths in points, and everything is converted to pixels through the
//! output DPI. Images are drawn with a fixed [0, 1] intensity range, so an
//! image that never reaches black stays grey.

use crate::glyph::fonts::{FontChain, GlyphFont};
use crate::imaging::canonical::CanonicalImage;
use crate::io::configuration::{
    BORDER_POINTS, DEFAULT_DPI, FIGURE_SIZE_INCHES, POINTS_PER_INCH, TIGHT_PAD_INCHES,
    TITLE_FONT_POINTS, TITLE_PAD_POINTS,
};
use crate::io::error::{MemeError, Result, create_dir_error, invalid_parameter};
use image::imageops::{self, FilterType};
use image::{GrayImage, Luma, Rgb, RgbImage};
use imageproc::drawing::draw_filled_rect_mut;
use imageproc::rect::Rect;
use std::path::Path;
use tracing::{debug, info};

const BORDER_COLOR: Rgb<u8> = Rgb([0, 0, 0]);

/// A titled image occupying one slot of the figure
#[derive(Debug, Clone, PartialEq)]
pub struct Panel {
    /// Text drawn above the image
    pub title: String,
    /// Image content
    pub image: CanonicalImage,
}

impl Panel {
    /// Create a panel
    pub fn new(title: impl Into<String>, image: CanonicalImage) -> Self {
        Self {
            title: title.into(),
            image,
        }
    }
}

/// Physical figure settings
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FigureOptions {
    /// Output resolution in dots per inch
    pub dpi: u32,
    /// Figure background colour
    pub background: Rgb<u8>,
    /// Figure (width, height) in inches before cropping
    pub figure_inches: (f32, f32),
    /// Title text size in points
    pub title_points: f32,
    /// Gap between title and image in points
    pub title_pad_points: f32,
    /// Border line width in points
    pub border_points: f32,
    /// Padding around the content after tight cropping, in inches
    pub pad_inches: f32,
}

impl Default for FigureOptions {
    fn default() -> Self {
        Self {
            dpi: DEFAULT_DPI,
            background: Rgb([255, 255, 255]),
            figure_inches: FIGURE_SIZE_INCHES,
            title_points: TITLE_FONT_POINTS,
            title_pad_points: TITLE_PAD_POINTS,
            border_points: BORDER_POINTS,
            pad_inches: TIGHT_PAD_INCHES,
        }
    }
}

impl FigureOptions {
    /// Convert a length in inches to whole pixels
    pub fn inches_to_pixels(&self, inches: f32) -> u32 {
        (inches.max(0.0) * self.dpi as f32).round() as u32
    }

    /// Convert a length in points to whole pixels
    pub fn points_to_pixels(&self, points: f32) -> u32 {
        self.inches_to_pixels(points / POINTS_PER_INCH)
    }
}

// Pixel geometry shared by every panel
struct Geometry {
    gap: u32,
    title_band: u32,
    title_pad: u32,
    border: u32,
    slot_width: u32,
    slot_height: u32,
}

impl Geometry {
    fn plan(options: &FigureOptions, count: u32, title_px: u32) -> Result<Self> {
        let figure_width = options.inches_to_pixels(options.figure_inches.0);
        let figure_height = options.inches_to_pixels(options.figure_inches.1);
        let gap = options.inches_to_pixels(options.pad_inches).max(1);
        let title_pad = options.points_to_pixels(options.title_pad_points);
        let border = options.points_to_pixels(options.border_points).max(1);
        let title_band = title_px + title_pad;

        let slot_width = figure_width.saturating_sub(gap * (count + 1)) / count;
        let slot_height = figure_height.saturating_sub(2 * gap + title_band);

        if slot_width <= 2 * border || slot_height <= 2 * border {
            return Err(invalid_parameter(
                "figure_inches",
                &format!("{}x{}", options.figure_inches.0, options.figure_inches.1),
                &format!("figure leaves no room for {count} panels at {} dpi", options.dpi),
            ));
        }

        Ok(Self {
            gap,
            title_band,
            title_pad,
            border,
            slot_width,
            slot_height,
        })
    }
}

/// Largest (width, height) with the source aspect ratio that fits the bounds
pub fn fit_within(width: usize, height: usize, max_width: u32, max_height: u32) -> (u32, u32) {
    if width == 0 || height == 0 {
        return (max_width.min(1), max_height.min(1));
    }
    let scale = (f64::from(max_width) / width as f64).min(f64::from(max_height) / height as f64);
    let fitted_width = ((width as f64 * scale).round() as u32).clamp(1, max_width.max(1));
    let fitted_height = ((height as f64 * scale).round() as u32).clamp(1, max_height.max(1));
    (fitted_width, fitted_height)
}

/// Draw all panels left to right and crop the figure to its content
///
/// # Errors
///
/// Returns an invalid parameter error if the DPI is zero, if no panels are
/// given, or if the figure is too small to hold the panels.
pub fn render_panels(
    panels: &[Panel],
    options: &FigureOptions,
    fonts: &FontChain,
) -> Result<RgbImage> {
    if options.dpi == 0 {
        return Err(invalid_parameter("dpi", &options.dpi, &"must be positive"));
    }
    if panels.is_empty() {
        return Err(invalid_parameter(
            "panels",
            &0,
            &"at least one panel is required",
        ));
    }

    let count = u32::try_from(panels.len())
        .map_err(|e| invalid_parameter("panels", &panels.len(), &e))?;
    let title_px = options.points_to_pixels(options.title_points).max(1);
    let geometry = Geometry::plan(options, count, title_px)?;
    let title_font = fonts.acquire(title_px);

    let mut canvas = RgbImage::from_pixel(
        options.inches_to_pixels(options.figure_inches.0),
        options.inches_to_pixels(options.figure_inches.1),
        options.background,
    );

    for (index, panel) in panels.iter().enumerate() {
        let slot_x = geometry.gap + index as u32 * (geometry.slot_width + geometry.gap);
        let (image_width, image_height) = fit_within(
            panel.image.width(),
            panel.image.height(),
            geometry.slot_width - 2 * geometry.border,
            geometry.slot_height - 2 * geometry.border,
        );
        let image_x = slot_x + (geometry.slot_width - image_width) / 2;
        let image_y =
            geometry.gap + geometry.title_band + (geometry.slot_height - image_height) / 2;

        let scaled = imageops::resize(
            &panel.image.to_gray_image(),
            image_width,
            image_height,
            FilterType::Nearest,
        );
        for (x, y, &Luma([v])) in scaled.enumerate_pixels() {
            canvas.put_pixel(image_x + x, image_y + y, Rgb([v, v, v]));
        }

        draw_border(
            &mut canvas,
            (image_x, image_y),
            (image_width, image_height),
            geometry.border,
        );

        let title_bottom = image_y.saturating_sub(geometry.border + geometry.title_pad);
        draw_title(
            &mut canvas,
            &title_font,
            &panel.title,
            image_x + image_width / 2,
            title_bottom,
        );

        debug!(
            title = %panel.title,
            image_x,
            image_y,
            image_width,
            image_height,
            "placed panel"
        );
    }

    Ok(tight_crop(&canvas, options.background, geometry.gap))
}

fn draw_border(canvas: &mut RgbImage, origin: (u32, u32), size: (u32, u32), border: u32) {
    let (x, y) = (origin.0 as i32, origin.1 as i32);
    let (width, height) = size;
    let b = border as i32;
    let outer_width = width + 2 * border;

    let edges = [
        Rect::at(x - b, y - b).of_size(outer_width, border),
        Rect::at(x - b, y + height as i32).of_size(outer_width, border),
        Rect::at(x - b, y).of_size(border, height),
        Rect::at(x + width as i32, y).of_size(border, height),
    ];
    for edge in edges {
        draw_filled_rect_mut(canvas, edge, BORDER_COLOR);
    }
}

// Text is rasterized into a grey coverage mask and multiplied into the canvas
fn draw_title(canvas: &mut RgbImage, font: &GlyphFont, title: &str, center_x: u32, bottom: u32) {
    let (text_width, text_height) = font.measure(title);
    if text_width == 0 || text_height == 0 {
        return;
    }

    let mut coverage = GrayImage::from_pixel(text_width, text_height, Luma([255]));
    font.draw(&mut coverage, title, 0, 0, Luma([0]));

    let left = i64::from(center_x) - i64::from(text_width / 2);
    let top = i64::from(bottom) - i64::from(text_height);
    let (canvas_width, canvas_height) = canvas.dimensions();

    for (x, y, &Luma([c])) in coverage.enumerate_pixels() {
        let cx = left + i64::from(x);
        let cy = top + i64::from(y);
        if cx < 0 || cy < 0 || cx >= i64::from(canvas_width) || cy >= i64::from(canvas_height) {
            continue;
        }
        let pixel = canvas.get_pixel_mut(cx as u32, cy as u32);
        for channel in &mut pixel.0 {
            *channel = ((u16::from(*channel) * u16::from(c) + 127) / 255) as u8;
        }
    }
}

/// Crop to the bounding box of non-background pixels plus `pad` pixels
///
/// A canvas with no visible content is returned unchanged.
pub fn tight_crop(canvas: &RgbImage, background: Rgb<u8>, pad: u32) -> RgbImage {
    let mut bounds: Option<(u32, u32, u32, u32)> = None;
    for (x, y, pixel) in canvas.enumerate_pixels() {
        if *pixel == background {
            continue;
        }
        bounds = Some(match bounds {
            None => (x, y, x, y),
            Some((min_x, min_y, max_x, max_y)) => {
                (min_x.min(x), min_y.min(y), max_x.max(x), max_y.max(y))
            }
        });
    }

    let Some((min_x, min_y, max_x, max_y)) = bounds else {
        return canvas.clone();
    };

    let (width, height) = canvas.dimensions();
    let left = min_x.saturating_sub(pad);
    let top = min_y.saturating_sub(pad);
    let right = (max_x + pad).min(width - 1);
    let bottom = (max_y + pad).min(height - 1);

    imageops::crop_imm(canvas, left, top, right - left + 1, bottom - top + 1).to_image()
}

/// Write a rendered figure, creating the parent directory when needed
///
/// # Errors
///
/// Returns an error if the directory cannot be created or encoding fails.
pub fn save_figure(figure: &RgbImage, output_path: &Path) -> Result<()> {
    if let Some(parent) = output_path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| create_dir_error(parent.to_path_buf(), e))?;
    }

    figure
        .save(output_path)
        .map_err(|e| MemeError::ImageExport {
            path: output_path.to_path_buf(),
            source: e,
        })?;

    info!(
        path = %output_path.display(),
        width = figure.width(),
        height = figure.height(),
        "saved figure"
    );
    Ok(())
}
