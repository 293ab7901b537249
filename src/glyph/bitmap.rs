//! Built-in 5x7 bitmap font used when no outline font can be loaded
//!
//! Covers `A`-`Z` (lowercase folds to uppercase), `0`-`9` and space. Any other
//! character renders as a solid block so the mask still carries a shape.

use image::{GrayImage, Luma};

/// Glyph cell width in font units
pub const CELL_WIDTH: u32 = 5;
/// Glyph cell height in font units
pub const CELL_HEIGHT: u32 = 7;

// Rows top to bottom, bit 4 is the leftmost column
const LETTERS: [[u8; 7]; 26] = [
    [0x0E, 0x11, 0x11, 0x1F, 0x11, 0x11, 0x11], // A
    [0x1E, 0x11, 0x11, 0x1E, 0x11, 0x11, 0x1E], // B
    [0x0E, 0x11, 0x10, 0x10, 0x10, 0x11, 0x0E], // C
    [0x1C, 0x12, 0x11, 0x11, 0x11, 0x12, 0x1C], // D
    [0x1F, 0x10, 0x10, 0x1E, 0x10, 0x10, 0x1F], // E
    [0x1F, 0x10, 0x10, 0x1E, 0x10, 0x10, 0x10], // F
    [0x0E, 0x11, 0x10, 0x17, 0x11, 0x11, 0x0F], // G
    [0x11, 0x11, 0x11, 0x1F, 0x11, 0x11, 0x11], // H
    [0x0E, 0x04, 0x04, 0x04, 0x04, 0x04, 0x0E], // I
    [0x07, 0x02, 0x02, 0x02, 0x02, 0x12, 0x0C], // J
    [0x11, 0x12, 0x14, 0x18, 0x14, 0x12, 0x11], // K
    [0x10, 0x10, 0x10, 0x10, 0x10, 0x10, 0x1F], // L
    [0x11, 0x1B, 0x15, 0x15, 0x11, 0x11, 0x11], // M
    [0x11, 0x11, 0x19, 0x15, 0x13, 0x11, 0x11], // N
    [0x0E, 0x11, 0x11, 0x11, 0x11, 0x11, 0x0E], // O
    [0x1E, 0x11, 0x11, 0x1E, 0x10, 0x10, 0x10], // P
    [0x0E, 0x11, 0x11, 0x11, 0x15, 0x12, 0x0D], // Q
    [0x1E, 0x11, 0x11, 0x1E, 0x14, 0x12, 0x11], // R
    [0x0F, 0x10, 0x10, 0x0E, 0x01, 0x01, 0x1E], // S
    [0x1F, 0x04, 0x04, 0x04, 0x04, 0x04, 0x04], // T
    [0x11, 0x11, 0x11, 0x11, 0x11, 0x11, 0x0E], // U
    [0x11, 0x11, 0x11, 0x11, 0x11, 0x0A, 0x04], // V
    [0x11, 0x11, 0x11, 0x15, 0x15, 0x15, 0x0A], // W
    [0x11, 0x11, 0x0A, 0x04, 0x0A, 0x11, 0x11], // X
    [0x11, 0x11, 0x0A, 0x04, 0x04, 0x04, 0x04], // Y
    [0x1F, 0x01, 0x02, 0x04, 0x08, 0x10, 0x1F], // Z
];

const DIGITS: [[u8; 7]; 10] = [
    [0x0E, 0x11, 0x13, 0x15, 0x19, 0x11, 0x0E], // 0
    [0x04, 0x0C, 0x04, 0x04, 0x04, 0x04, 0x0E], // 1
    [0x0E, 0x11, 0x01, 0x02, 0x04, 0x08, 0x1F], // 2
    [0x1F, 0x02, 0x04, 0x02, 0x01, 0x11, 0x0E], // 3
    [0x02, 0x06, 0x0A, 0x12, 0x1F, 0x02, 0x02], // 4
    [0x1F, 0x10, 0x1E, 0x01, 0x01, 0x11, 0x0E], // 5
    [0x06, 0x08, 0x10, 0x1E, 0x11, 0x11, 0x0E], // 6
    [0x1F, 0x01, 0x02, 0x04, 0x08, 0x08, 0x08], // 7
    [0x0E, 0x11, 0x11, 0x0E, 0x11, 0x11, 0x0E], // 8
    [0x0E, 0x11, 0x11, 0x0F, 0x01, 0x02, 0x0C], // 9
];

const BLANK: [u8; 7] = [0; 7];
const BLOCK: [u8; 7] = [0x1F; 7];

/// Row bitmaps for a character
pub fn glyph_rows(ch: char) -> [u8; 7] {
    let upper = ch.to_ascii_uppercase();
    match upper {
        'A'..='Z' => LETTERS
            .get(usize::from(upper as u8 - b'A'))
            .copied()
            .unwrap_or(BLOCK),
        '0'..='9' => DIGITS
            .get(usize::from(upper as u8 - b'0'))
            .copied()
            .unwrap_or(BLOCK),
        ' ' => BLANK,
        _ => BLOCK,
    }
}

/// Integer-scaled bitmap font
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BitmapFont {
    scale: u32,
}

impl BitmapFont {
    /// Font whose cell height approximates `pixel_size`, never below one unit
    pub fn with_pixel_size(pixel_size: u32) -> Self {
        Self {
            scale: (pixel_size / CELL_HEIGHT).max(1),
        }
    }

    /// Pixels per font unit
    pub const fn scale(&self) -> u32 {
        self.scale
    }

    /// Rendered (width, height) of `text`, one cell per character
    pub fn measure(&self, text: &str) -> (u32, u32) {
        let count = text.chars().count() as u32;
        if count == 0 {
            return (0, 0);
        }
        (count * CELL_WIDTH * self.scale, CELL_HEIGHT * self.scale)
    }

    /// Draw `text` with its top-left corner at (x, y), clipping to the canvas
    pub fn draw(&self, canvas: &mut GrayImage, text: &str, x: i32, y: i32, ink: Luma<u8>) {
        let (width, height) = canvas.dimensions();
        let scale = self.scale as i64;
        let advance = i64::from(CELL_WIDTH) * scale;

        for (index, ch) in text.chars().enumerate() {
            let origin_x = i64::from(x) + index as i64 * advance;
            for (row, bits) in glyph_rows(ch).iter().enumerate() {
                for col in 0..CELL_WIDTH {
                    if bits & (0x10_u8 >> col) == 0 {
                        continue;
                    }
                    let left = origin_x + i64::from(col) * scale;
                    let top = i64::from(y) + row as i64 * scale;
                    fill_block(canvas, (width, height), left, top, scale, ink);
                }
            }
        }
    }
}

fn fill_block(
    canvas: &mut GrayImage,
    (width, height): (u32, u32),
    left: i64,
    top: i64,
    size: i64,
    ink: Luma<u8>,
) {
    let x_range = left.max(0)..(left + size).min(i64::from(width));
    let y_range = top.max(0)..(top + size).min(i64::from(height));
    for py in y_range {
        for px in x_range.clone() {
            canvas.put_pixel(px as u32, py as u32, ink);
        }
    }
}
