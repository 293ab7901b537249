//! Tests for error formatting and source chaining

#[cfg(test)]
mod tests {
    use statmeme::MemeError;
    use statmeme::io::error::{create_dir_error, invalid_parameter, shape_mismatch};
    use std::error::Error;
    use std::io;
    use std::path::PathBuf;

    // Tests shape mismatches name both shapes
    // Verified by printing only the mask shape
    #[test]
    fn test_shape_mismatch_message() {
        let err = shape_mismatch((4, 5), (6, 7));
        assert_eq!(
            err.to_string(),
            "Image and mask must have the same shape, got 4x5 and 6x7"
        );
    }

    // Tests invalid parameters carry the name, value and reason
    // Verified by dropping the reason from the message
    #[test]
    fn test_invalid_parameter_message() {
        let err = invalid_parameter("threshold", &1.5, &"must lie in [0, 1]");
        assert_eq!(
            err.to_string(),
            "Invalid threshold \"1.5\": must lie in [0, 1]"
        );
    }

    // Tests invalid dimensions report the requested extents
    // Verified by swapping height and width in the message
    #[test]
    fn test_invalid_dimensions_message() {
        let err = MemeError::InvalidDimensions {
            height: 0,
            width: 12,
        };
        assert!(err.to_string().starts_with("Invalid mask dimensions 0x12"));
    }

    // Tests I/O failures keep their source error
    // Verified by returning None from source
    #[test]
    fn test_filesystem_source_chain() {
        let err = create_dir_error(
            PathBuf::from("/no/such"),
            io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        );

        assert!(err.to_string().starts_with("Cannot create directory"));
        assert!(err.to_string().contains("/no/such"));
        assert_eq!(err.source().map(ToString::to_string), Some("denied".to_string()));
    }

    // Tests validation errors have no underlying source
    // Verified by chaining a synthetic source
    #[test]
    fn test_validation_errors_have_no_source() {
        assert!(shape_mismatch((1, 1), (2, 2)).source().is_none());
        assert!(MemeError::InvalidShape { shape: vec![0] }.source().is_none());
    }
}
