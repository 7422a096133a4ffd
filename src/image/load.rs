//! Image loading utilities.

use std::path::Path;

use image::{ColorType, DynamicImage, ImageError, ImageReader, RgbaImage};

use crate::error::{Error, Result};

/// Load an image from disk and normalize it to 8-bit RGBA.
///
/// The format is detected from the file contents, falling back to the
/// extension, so a file named just `.png` still decodes.
///
/// Images without an alpha channel get a fully opaque one. Images that
/// already carry alpha keep it. Returns the normalized buffer together with
/// the color type the file was decoded as.
///
/// # Errors
///
/// Returns [`Error::ImageLoad`] if the file cannot be opened or decoded.
pub fn load_rgba<P: AsRef<Path>>(path: P) -> Result<(RgbaImage, ColorType)> {
    let path = path.as_ref();

    let load_err = |source: ImageError| Error::ImageLoad {
        path: path.to_path_buf(),
        source,
    };

    let img = ImageReader::open(path)
        .and_then(ImageReader::with_guessed_format)
        .map_err(|e| load_err(ImageError::IoError(e)))?
        .decode()
        .map_err(load_err)?;

    let original_color = img.color();
    Ok((to_rgba(img), original_color))
}

/// Convert any decoded image to 8-bit RGBA, reusing the buffer when it already is.
fn to_rgba(img: DynamicImage) -> RgbaImage {
    match img {
        DynamicImage::ImageRgba8(rgba) => rgba,
        other => other.into_rgba8(),
    }
}
