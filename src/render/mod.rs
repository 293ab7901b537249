//! Figure rendering: colours, panel layout and the four-panel meme

/// Background colour parsing
pub mod color;
/// Titled, bordered panel layout and export
pub mod layout;
/// Four-panel figure assembly
pub mod meme;
