//! Threshold masking of a continuous image by a glyph mask

use crate::imaging::canonical::CanonicalImage;
use crate::io::error::{Result, shape_mismatch};
use ndarray::{ArrayView2, Zip};

/// Erase every pixel whose mask value falls below `threshold`
///
/// Both inputs are clamped into [0, 1] first. Where `mask < threshold` the
/// output is 1.0 (background); everywhere else the continuous value is kept
/// unchanged. NaN never compares below the threshold, so a NaN mask value or
/// a NaN threshold leaves the pixel unmasked.
///
/// # Errors
///
/// Returns [`crate::MemeError::ShapeMismatch`] if the two arrays differ in shape.
pub fn apply_threshold_mask(
    continuous: ArrayView2<'_, f32>,
    mask: ArrayView2<'_, f32>,
    threshold: f32,
) -> Result<CanonicalImage> {
    if continuous.dim() != mask.dim() {
        return Err(shape_mismatch(continuous.dim(), mask.dim()));
    }

    let continuous = CanonicalImage::from_clamped(continuous.to_owned());

    // clamp keeps NaN gates as NaN
    let result = Zip::from(continuous.pixels())
        .and(mask)
        .map_collect(|&value, &gate| {
            if gate.clamp(0.0, 1.0) < threshold {
                1.0
            } else {
                value
            }
        });

    Ok(CanonicalImage::from_clamped(result))
}

/// Fraction of pixels in the masked region (`value < threshold`)
///
/// An empty mask yields 0.0.
pub fn masked_fraction(mask: ArrayView2<'_, f32>, threshold: f32) -> f32 {
    if mask.is_empty() {
        return 0.0;
    }
    let masked = mask.iter().filter(|&&gate| gate < threshold).count();
    masked as f32 / mask.len() as f32
}
