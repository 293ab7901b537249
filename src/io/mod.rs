//! Input/output: command line, image files, progress, configuration and errors

/// Command-line parsing and pipeline orchestration
pub mod cli;
/// Pipeline constants and defaults
pub mod configuration;
/// Error types
pub mod error;
/// Image file decoding and export
pub mod image;
/// Stage progress display
pub mod progress;
