//! Center-crop alignment of differently sized images to a common extent

use crate::imaging::canonical::CanonicalImage;
use ndarray::{Axis, Slice};
use tracing::debug;

/// Smallest height and smallest width across all images
///
/// Returns `None` when `images` is empty.
pub fn common_extent(images: &[CanonicalImage]) -> Option<(usize, usize)> {
    let height = images.iter().map(CanonicalImage::height).min()?;
    let width = images.iter().map(CanonicalImage::width).min()?;
    Some((height, width))
}

/// Crop a centered `height` x `width` window out of `image`
///
/// Offsets use floor division, so odd surpluses leave the extra row or
/// column at the bottom/right. Extents larger than the image are limited to
/// the image's own size; no resampling takes place.
pub fn center_crop(image: &CanonicalImage, height: usize, width: usize) -> CanonicalImage {
    let (rows, cols) = image.shape();
    let height = height.min(rows);
    let width = width.min(cols);
    let top = (rows - height) / 2;
    let left = (cols - width) / 2;

    let window = image
        .pixels()
        .slice_axis(Axis(0), Slice::from(top..top + height))
        .slice_axis(Axis(1), Slice::from(left..left + width))
        .to_owned();
    CanonicalImage::from_clamped(window)
}

/// Center-crop every image to the common minimal extent
///
/// All returned images share one shape. Input order is preserved and each
/// image is cropped independently of the others.
pub fn align_to_common_size(images: &[CanonicalImage]) -> Vec<CanonicalImage> {
    let Some((height, width)) = common_extent(images) else {
        return Vec::new();
    };

    debug!(height, width, count = images.len(), "aligning images");

    images
        .iter()
        .map(|image| center_crop(image, height, width))
        .collect()
}
