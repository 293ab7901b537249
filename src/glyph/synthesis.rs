//! Glyph-shaped mask synthesis
//!
//! A single character is drawn in black on a white canvas of the requested
//! size, centered by its measured bounding box. The canvas is converted to a
//! canonical image by plain 8-bit scaling, without renormalization.

use crate::glyph::fonts::FontChain;
use crate::imaging::canonical::CanonicalImage;
use crate::io::configuration::{
    BACKGROUND_INTENSITY, DEFAULT_FONT_SIZE_RATIO, DEFAULT_GLYPH, INK_INTENSITY,
    MAX_FONT_SIZE_RATIO, MIN_FONT_SIZE_RATIO,
};
use crate::io::error::{MemeError, Result};
use image::{GrayImage, Luma};
use tracing::debug;

/// What to draw and how large
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GlyphSpec {
    /// Canvas height in pixels
    pub height: usize,
    /// Canvas width in pixels
    pub width: usize,
    /// Character to draw
    pub glyph: char,
    /// Glyph size relative to the smaller canvas dimension
    pub size_ratio: f32,
}

impl GlyphSpec {
    /// Build a spec from arbitrary text, keeping only its first character
    ///
    /// Empty text draws the default glyph.
    pub fn new(height: usize, width: usize, text: &str, size_ratio: f32) -> Self {
        Self {
            height,
            width,
            glyph: text.chars().next().unwrap_or(DEFAULT_GLYPH),
            size_ratio,
        }
    }

    /// Default glyph at the default ratio
    pub const fn with_defaults(height: usize, width: usize) -> Self {
        Self {
            height,
            width,
            glyph: DEFAULT_GLYPH,
            size_ratio: DEFAULT_FONT_SIZE_RATIO,
        }
    }

    /// Size ratio clamped into the accepted range; NaN behaves as the maximum
    pub fn clamped_ratio(&self) -> f32 {
        if self.size_ratio.is_nan() {
            MAX_FONT_SIZE_RATIO
        } else {
            self.size_ratio.clamp(MIN_FONT_SIZE_RATIO, MAX_FONT_SIZE_RATIO)
        }
    }

    /// Glyph pixel size: floor(min(height, width) * ratio)
    pub fn pixel_size(&self) -> u32 {
        let smaller = self.height.min(self.width) as f32;
        (smaller * self.clamped_ratio()).floor() as u32
    }

    fn canvas_extent(&self) -> Result<(u32, u32)> {
        let invalid = || MemeError::InvalidDimensions {
            height: self.height,
            width: self.width,
        };
        if self.height == 0 || self.width == 0 {
            return Err(invalid());
        }
        let height = u32::try_from(self.height).ok().ok_or_else(invalid)?;
        let width = u32::try_from(self.width).ok().ok_or_else(invalid)?;
        Ok((height, width))
    }
}

/// Top-left origin that centers a `text_width` x `text_height` box on the canvas
///
/// Uses floor division; negative origins mean the glyph overhangs and is clipped.
pub fn centered_origin(canvas: (u32, u32), text_width: u32, text_height: u32) -> (i32, i32) {
    let (height, width) = canvas;
    let x = (i64::from(width) - i64::from(text_width)).div_euclid(2);
    let y = (i64::from(height) - i64::from(text_height)).div_euclid(2);
    (x as i32, y as i32)
}

/// Render `spec` into a canonical mask using the first loadable font in `fonts`
///
/// The result always has exactly the requested shape.
///
/// # Errors
///
/// Returns [`MemeError::InvalidDimensions`] if either extent is zero or too
/// large to rasterize. Font problems never produce an error.
pub fn synthesize_mask(spec: &GlyphSpec, fonts: &FontChain) -> Result<CanonicalImage> {
    let (height, width) = spec.canvas_extent()?;
    let mut canvas = GrayImage::from_pixel(width, height, Luma([BACKGROUND_INTENSITY]));

    let pixel_size = spec.pixel_size();
    let font = fonts.acquire(pixel_size);

    let text = spec.glyph.to_string();
    let (text_width, text_height) = font.measure(&text);
    let (x, y) = centered_origin((height, width), text_width, text_height);

    debug!(
        glyph = %spec.glyph,
        pixel_size,
        text_width,
        text_height,
        x,
        y,
        builtin = font.is_builtin(),
        "drawing mask glyph"
    );

    font.draw(&mut canvas, &text, x, y, Luma([INK_INTENSITY]));

    Ok(CanonicalImage::from_gray_image(&canvas))
}

/// Render a mask with the system default font chain
///
/// # Errors
///
/// Returns [`MemeError::InvalidDimensions`] if either extent is zero.
pub fn synthesize(
    height: usize,
    width: usize,
    text: &str,
    size_ratio: f32,
) -> Result<CanonicalImage> {
    synthesize_mask(
        &GlyphSpec::new(height, width, text, size_ratio),
        &FontChain::system_default(),
    )
}
