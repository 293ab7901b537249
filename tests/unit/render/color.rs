//! Tests for background colour parsing

#[cfg(test)]
mod tests {
    use image::Rgb;
    use statmeme::MemeError;
    use statmeme::render::color::parse_color;

    // Tests named colours ignore case and surrounding whitespace
    // Verified by matching names case-sensitively
    #[test]
    fn test_named_colors() {
        assert_eq!(parse_color("white").unwrap(), Rgb([255, 255, 255]));
        assert_eq!(parse_color(" Black ").unwrap(), Rgb([0, 0, 0]));
        assert_eq!(parse_color("lightgrey").unwrap(), Rgb([211, 211, 211]));
    }

    // Tests short and long hex codes
    // Verified by reading short codes as the high nibble only
    #[test]
    fn test_hex_colors() {
        assert_eq!(parse_color("#ff8000").unwrap(), Rgb([255, 128, 0]));
        assert_eq!(parse_color("#F80").unwrap(), Rgb([255, 136, 0]));
        assert!(parse_color("#12345").is_err());
        assert!(parse_color("#gggggg").is_err());
    }

    // Tests grey levels between black and white
    // Verified by inverting the grey scale
    #[test]
    fn test_grey_levels() {
        assert_eq!(parse_color("0").unwrap(), Rgb([0, 0, 0]));
        assert_eq!(parse_color("1.0").unwrap(), Rgb([255, 255, 255]));
        assert_eq!(parse_color("0.5").unwrap(), Rgb([128, 128, 128]));
        assert!(parse_color("1.5").is_err());
        assert!(parse_color("nan").is_err());
    }

    // Tests unknown names report the background parameter
    // Verified by defaulting unknown names to white
    #[test]
    fn test_unknown_color() {
        match parse_color("chartreuse-ish") {
            Err(MemeError::InvalidParameter {
                parameter, value, ..
            }) => {
                assert_eq!(parameter, "background");
                assert_eq!(value, "chartreuse-ish");
            }
            other => panic!("expected InvalidParameter, got {other:?}"),
        }
    }
}
