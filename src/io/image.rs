//! Decoding image files into raw arrays and exporting canonical images

use crate::imaging::canonical::CanonicalImage;
use crate::io::error::{MemeError, Result, create_dir_error};
use image::{ColorType, DynamicImage};
use ndarray::{Array2, Array3, ArrayD};
use std::path::Path;
use tracing::{debug, info};

/// Load an image file as a raw array with samples scaled to [0, 1]
///
/// Grayscale sources become H x W arrays; every other colour type becomes an
/// H x W x 3 RGB array (alpha is dropped).
///
/// # Errors
///
/// Returns an error if:
/// - The file at the given path cannot be opened or read
/// - The file is not a supported image format
pub fn load_raw_image<P: AsRef<Path>>(path: P) -> Result<ArrayD<f32>> {
    let path = path.as_ref();
    let img = image::open(path).map_err(|e| MemeError::ImageLoad {
        path: path.to_path_buf(),
        source: e,
    })?;

    debug!(
        path = %path.display(),
        width = img.width(),
        height = img.height(),
        color = ?img.color(),
        "decoded image"
    );

    Ok(image_to_array(&img))
}

/// Convert a decoded image into a raw array, see [`load_raw_image`]
pub fn image_to_array(img: &DynamicImage) -> ArrayD<f32> {
    let (width, height) = (img.width() as usize, img.height() as usize);

    if matches!(
        img.color(),
        ColorType::L8 | ColorType::L16 | ColorType::La8 | ColorType::La16
    ) {
        let gray = img.to_luma32f();
        Array2::from_shape_fn((height, width), |(row, col)| {
            gray.get_pixel(col as u32, row as u32).0[0]
        })
        .into_dyn()
    } else {
        let rgb = img.to_rgb32f();
        Array3::from_shape_fn((height, width, 3), |(row, col, channel)| {
            rgb.get_pixel(col as u32, row as u32)
                .0
                .get(channel)
                .copied()
                .unwrap_or(0.0)
        })
        .into_dyn()
    }
}

/// Save a canonical image as an 8-bit grayscale file
///
/// # Errors
///
/// Returns an error if the parent directory cannot be created or the image
/// cannot be encoded to the path.
pub fn save_canonical_png<P: AsRef<Path>>(image: &CanonicalImage, path: P) -> Result<()> {
    let path = path.as_ref();
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| create_dir_error(parent.to_path_buf(), e))?;
    }

    image
        .to_gray_image()
        .save(path)
        .map_err(|e| MemeError::ImageExport {
            path: path.to_path_buf(),
            source: e,
        })?;

    info!(path = %path.display(), "saved image");
    Ok(())
}
