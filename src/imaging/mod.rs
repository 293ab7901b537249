//! Canonical grayscale images and the pure transforms over them
//!
//! This module contains:
//! - The canonical unit-range image type
//! - Normalization of raw arrays
//! - Center-crop alignment
//! - Threshold masking

/// Center-crop alignment to a common extent
pub mod align;
/// Unit-range single-channel image type
pub mod canonical;
/// Threshold masking of continuous images
pub mod masking;
/// Raw array normalization
pub mod normalize;

pub use canonical::CanonicalImage;
