//! Glyph mask synthesis and the fonts behind it

/// Built-in bitmap font
pub mod bitmap;
/// Ordered font candidates with a guaranteed fallback
pub mod fonts;
/// Rendering a glyph into a canonical mask
pub mod synthesis;

pub use fonts::{FontChain, FontSource, GlyphFont};
pub use synthesis::{GlyphSpec, synthesize, synthesize_mask};
