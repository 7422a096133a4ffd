//! Per-file resize pipeline.

use std::path::Path;

use image::ColorType;

use crate::config::Config;
use crate::error::Result;
use crate::image::{load_rgba, resize_to, save_png};

/// What happened to a file that was resized successfully.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resized {
    /// Dimensions before resizing.
    pub original_size: (u32, u32),
    /// Color type the file was decoded as.
    pub original_color: ColorType,
    /// Dimensions written back to disk.
    pub size: (u32, u32),
}

impl Resized {
    /// Whether the file had to gain an alpha channel or change bit depth.
    #[must_use]
    pub fn was_converted(&self) -> bool {
        self.original_color != ColorType::Rgba8
    }
}

/// Load `path`, normalize it to RGBA, resize it to the configured target,
/// and overwrite it as PNG.
///
/// # Errors
///
/// Returns the first load, encode, or write failure. The file on disk is
/// unchanged when an error is returned.
pub fn resize_file<P: AsRef<Path>>(path: P, config: &Config) -> Result<Resized> {
    let path = path.as_ref();

    let (img, original_color) = load_rgba(path)?;
    let original_size = img.dimensions();

    tracing::debug!(
        path = %path.display(),
        width = original_size.0,
        height = original_size.1,
        color = ?original_color,
        "Loaded image"
    );

    let (width, height) = config.target_size();
    let resized = resize_to(img, width, height, config.filter);
    save_png(&resized, path)?;

    Ok(Resized {
        original_size,
        original_color,
        size: resized.dimensions(),
    })
}
