//! Single-channel float images constrained to the unit interval

use image::{GrayImage, Luma};
use ndarray::{Array2, ArrayView2};

/// A rectangular single-channel image with every value in [0, 1]
///
/// 0.0 is ink (black) and 1.0 is background (white). Every constructor
/// clamps its input, so downstream stages can rely on the range.
#[derive(Debug, Clone, PartialEq)]
pub struct CanonicalImage {
    pixels: Array2<f32>,
}

impl CanonicalImage {
    /// Wrap an array, clamping values into [0, 1] and mapping NaN to 0
    pub fn from_clamped(mut pixels: Array2<f32>) -> Self {
        pixels.mapv_inplace(clamp_unit);
        Self { pixels }
    }

    /// All-zero (all-ink) image
    pub fn zeros(height: usize, width: usize) -> Self {
        Self {
            pixels: Array2::zeros((height, width)),
        }
    }

    /// Image filled with a single value, clamped into [0, 1]
    pub fn filled(height: usize, width: usize, value: f32) -> Self {
        Self {
            pixels: Array2::from_elem((height, width), clamp_unit(value)),
        }
    }

    /// Convert an 8-bit grayscale raster, mapping 0..=255 linearly onto [0, 1]
    pub fn from_gray_image(image: &GrayImage) -> Self {
        let (width, height) = image.dimensions();
        let pixels = Array2::from_shape_fn((height as usize, width as usize), |(row, col)| {
            let Luma([value]) = *image.get_pixel(col as u32, row as u32);
            f32::from(value) / 255.0
        });
        Self { pixels }
    }

    /// Quantize to an 8-bit grayscale raster
    pub fn to_gray_image(&self) -> GrayImage {
        let (height, width) = self.shape();
        GrayImage::from_fn(width as u32, height as u32, |x, y| {
            let value = self
                .pixels
                .get((y as usize, x as usize))
                .copied()
                .unwrap_or(1.0);
            Luma([(value * 255.0).round() as u8])
        })
    }

    /// (rows, cols)
    pub fn shape(&self) -> (usize, usize) {
        self.pixels.dim()
    }

    /// Number of rows
    pub fn height(&self) -> usize {
        self.pixels.nrows()
    }

    /// Number of columns
    pub fn width(&self) -> usize {
        self.pixels.ncols()
    }

    /// Value at (row, col), if in bounds
    pub fn get(&self, row: usize, col: usize) -> Option<f32> {
        self.pixels.get((row, col)).copied()
    }

    /// Borrow the underlying buffer
    pub fn pixels(&self) -> ArrayView2<'_, f32> {
        self.pixels.view()
    }

    /// Consume the image, returning its buffer
    pub fn into_array(self) -> Array2<f32> {
        self.pixels
    }

    /// Smallest and largest value, or `None` for an empty image
    pub fn min_max(&self) -> Option<(f32, f32)> {
        if self.pixels.is_empty() {
            return None;
        }
        Some(self.pixels.iter().fold((1.0_f32, 0.0_f32), |(lo, hi), &v| {
            (lo.min(v), hi.max(v))
        }))
    }
}

fn clamp_unit(value: f32) -> f32 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, 1.0)
    }
}
