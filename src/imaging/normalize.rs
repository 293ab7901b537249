//! Canonicalization of arbitrary numeric arrays into unit-range grayscale
//!
//! Channel-last colour arrays are collapsed by an unweighted channel mean,
//! then the result is min-max rescaled so the darkest sample maps to 0 and
//! the brightest to 1. Constant images carry no contrast information and
//! become all zeros.

use crate::imaging::canonical::CanonicalImage;
use crate::io::error::{MemeError, Result};
use ndarray::{Array2, ArrayViewD, Axis, Ix2};
use num_traits::AsPrimitive;

/// Convert a raw 2D or channel-last 3D array into a [`CanonicalImage`]
///
/// # Errors
///
/// Returns [`MemeError::InvalidShape`] if the array's rank is neither 2 nor 3,
/// or if any axis has zero length.
pub fn normalize<T>(raw: ArrayViewD<'_, T>) -> Result<CanonicalImage>
where
    T: AsPrimitive<f64>,
{
    let gray = collapse_channels(raw)?;

    let (min, max) = gray
        .iter()
        .filter(|v| !v.is_nan())
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| {
            (lo.min(v), hi.max(v))
        });

    if max > min {
        let range = max - min;
        Ok(CanonicalImage::from_clamped(
            gray.mapv(|v| ((v - min) / range) as f32),
        ))
    } else {
        let (height, width) = gray.dim();
        Ok(CanonicalImage::zeros(height, width))
    }
}

/// Average a channel-last 3D array down to 2D; 2D input passes through
///
/// # Errors
///
/// Returns [`MemeError::InvalidShape`] for ranks other than 2 or 3 and for
/// arrays with an empty axis.
pub fn collapse_channels<T>(raw: ArrayViewD<'_, T>) -> Result<Array2<f64>>
where
    T: AsPrimitive<f64>,
{
    let invalid = || MemeError::InvalidShape {
        shape: raw.shape().to_vec(),
    };

    if raw.shape().contains(&0) {
        return Err(invalid());
    }

    let values = raw.mapv(AsPrimitive::<f64>::as_);
    let flattened = match values.ndim() {
        2 => values,
        3 => values.mean_axis(Axis(2)).ok_or_else(invalid)?,
        _ => return Err(invalid()),
    };

    flattened
        .into_dimensionality::<Ix2>()
        .ok()
        .ok_or_else(invalid)
}
