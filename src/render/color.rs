//! Colour specifications for figure backgrounds

use crate::io::error::{Result, invalid_parameter};
use image::Rgb;

const NAMED_COLORS: [(&str, [u8; 3]); 14] = [
    ("white", [255, 255, 255]),
    ("black", [0, 0, 0]),
    ("gray", [128, 128, 128]),
    ("grey", [128, 128, 128]),
    ("lightgray", [211, 211, 211]),
    ("lightgrey", [211, 211, 211]),
    ("darkgray", [169, 169, 169]),
    ("darkgrey", [169, 169, 169]),
    ("silver", [192, 192, 192]),
    ("whitesmoke", [245, 245, 245]),
    ("ivory", [255, 255, 240]),
    ("red", [255, 0, 0]),
    ("green", [0, 128, 0]),
    ("blue", [0, 0, 255]),
];

/// Parse a colour name, `#rgb`/`#rrggbb` hex code, or a grey level in [0, 1]
///
/// Grey levels follow the plotting convention where `"0.0"` is black and
/// `"1.0"` is white.
///
/// # Errors
///
/// Returns an invalid parameter error if the text is not a recognized colour.
pub fn parse_color(text: &str) -> Result<Rgb<u8>> {
    let trimmed = text.trim();
    let lowered = trimmed.to_lowercase();

    if let Some((_, rgb)) = NAMED_COLORS.iter().find(|(name, _)| *name == lowered) {
        return Ok(Rgb(*rgb));
    }

    if let Some(hex) = lowered.strip_prefix('#') {
        return parse_hex(hex).ok_or_else(|| {
            invalid_parameter("background", &text, &"expected #rgb or #rrggbb")
        });
    }

    if let Ok(level) = lowered.parse::<f32>() {
        if (0.0..=1.0).contains(&level) {
            let v = (level * 255.0).round() as u8;
            return Ok(Rgb([v, v, v]));
        }
        return Err(invalid_parameter(
            "background",
            &text,
            &"grey level must lie in [0, 1]",
        ));
    }

    Err(invalid_parameter("background", &text, &"unknown colour name"))
}

fn parse_hex(hex: &str) -> Option<Rgb<u8>> {
    if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    match hex.len() {
        3 => {
            let mut channels = [0u8; 3];
            for (slot, c) in channels.iter_mut().zip(hex.chars()) {
                let nibble = c.to_digit(16)? as u8;
                *slot = nibble * 17;
            }
            Some(Rgb(channels))
        }
        6 => {
            let mut channels = [0u8; 3];
            for (i, slot) in channels.iter_mut().enumerate() {
                let pair = hex.get(i * 2..i * 2 + 2)?;
                *slot = u8::from_str_radix(pair, 16).ok()?;
            }
            Some(Rgb(channels))
        }
        _ => None,
    }
}
