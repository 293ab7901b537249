//! Four-panel selection-bias figures from stippled images and glyph masks
//!
//! Raw image arrays are normalized into unit-range grayscale, a single glyph is
//! rendered into a mask of matching size, the mask erases part of the stippled
//! image, and the four stages are laid out side by side in a titled figure.

#![forbid(unsafe_code)]

/// Glyph mask synthesis with font fallback
pub mod glyph;
/// Canonical images, normalization, alignment and masking
pub mod imaging;
/// Input/output operations and error handling
pub mod io;
/// Panel layout and figure export
pub mod render;

pub use imaging::CanonicalImage;
pub use io::error::{MemeError, Result};
