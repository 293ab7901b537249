//! Error types for normalization, mask synthesis, compositing and figure export

use std::fmt;
use std::path::PathBuf;

/// Main error type for all pipeline operations
#[derive(Debug)]
pub enum MemeError {
    /// Raw input array is not a usable 2D or channel-last 3D image
    ///
    /// Raised for any rank other than 2 or 3, and for arrays with a
    /// zero-length axis.
    InvalidShape {
        /// Shape of the offending array
        shape: Vec<usize>,
    },

    /// Requested mask extents cannot be rasterized
    InvalidDimensions {
        /// Requested height in pixels
        height: usize,
        /// Requested width in pixels
        width: usize,
    },

    /// Continuous image and mask differ in shape
    ShapeMismatch {
        /// Shape (rows, cols) of the continuous image
        continuous: (usize, usize),
        /// Shape (rows, cols) of the mask image
        mask: (usize, usize),
    },

    /// Original or stipple file could not be decoded
    ImageLoad {
        /// Input file
        path: PathBuf,
        /// Decoder failure
        source: image::ImageError,
    },

    /// Figure, mask or masked stipple could not be encoded
    ImageExport {
        /// Destination file
        path: PathBuf,
        /// Encoder failure
        source: image::ImageError,
    },

    /// Output directory preparation or other I/O failed
    FileSystem {
        /// File or directory being touched
        path: PathBuf,
        /// What was being done, e.g. "create directory"
        operation: &'static str,
        /// I/O failure
        source: std::io::Error,
    },

    /// Figure option, colour or command-line value out of range
    InvalidParameter {
        /// Option name
        parameter: &'static str,
        /// Rejected value as given
        value: String,
        /// Accepted range or format
        reason: String,
    },
}

impl fmt::Display for MemeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidShape { shape } => {
                write!(
                    f,
                    "Expected a non-empty 2D or 3D array for an image, got shape {shape:?}"
                )
            }
            Self::InvalidDimensions { height, width } => {
                write!(
                    f,
                    "Invalid mask dimensions {height}x{width}: height and width must be positive"
                )
            }
            Self::ShapeMismatch { continuous, mask } => {
                write!(
                    f,
                    "Image and mask must have the same shape, got {}x{} and {}x{}",
                    continuous.0, continuous.1, mask.0, mask.1
                )
            }
            Self::ImageLoad { path, source } => {
                write!(f, "Cannot decode input image {}: {source}", path.display())
            }
            Self::ImageExport { path, source } => {
                write!(f, "Cannot write image {}: {source}", path.display())
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(f, "Cannot {operation} {}: {source}", path.display())
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid {parameter} {value:?}: {reason}")
            }
        }
    }
}

impl std::error::Error for MemeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ImageLoad { source, .. } | Self::ImageExport { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            Self::InvalidShape { .. }
            | Self::InvalidDimensions { .. }
            | Self::ShapeMismatch { .. }
            | Self::InvalidParameter { .. } => None,
        }
    }
}

/// Convenience type alias for pipeline results
pub type Result<T> = std::result::Result<T, MemeError>;

/// Reject `value` for option `parameter`, explaining the accepted range
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl fmt::Display,
    reason: &impl fmt::Display,
) -> MemeError {
    MemeError::InvalidParameter {
        parameter,
        value: format!("{value}"),
        reason: format!("{reason}"),
    }
}

/// Create a shape mismatch error from two (rows, cols) pairs
pub const fn shape_mismatch(continuous: (usize, usize), mask: (usize, usize)) -> MemeError {
    MemeError::ShapeMismatch { continuous, mask }
}

/// Attach a path to a directory-creation failure
pub fn create_dir_error(path: PathBuf, source: std::io::Error) -> MemeError {
    MemeError::FileSystem {
        path,
        operation: "create directory",
        source,
    }
}
