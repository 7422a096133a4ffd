//! Resampling to the target size.

use image::{imageops, imageops::FilterType, RgbaImage};

/// Resize `img` to exactly `width` x `height`, ignoring aspect ratio.
///
/// An image already at the target size is returned untouched, so running a
/// batch twice does not resample (and soften) the output a second time.
#[must_use]
pub fn resize_to(img: RgbaImage, width: u32, height: u32, filter: FilterType) -> RgbaImage {
    if img.dimensions() == (width, height) {
        return img;
    }
    imageops::resize(&img, width, height, filter)
}
