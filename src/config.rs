//! Batch configuration.

use std::path::{Path, PathBuf};

use image::imageops::FilterType;

use crate::error::{Error, Result};

/// Default output width and height in pixels.
pub const DEFAULT_TARGET_SIZE: u32 = 512;

/// Configuration for a resize run.
#[derive(Debug, Clone)]
pub struct Config {
    /// Folder whose PNG files are resized in place. Not traversed recursively.
    pub folder: PathBuf,

    /// Output width in pixels.
    pub width: u32,

    /// Output height in pixels.
    pub height: u32,

    /// Resampling filter.
    pub filter: FilterType,
}

impl Config {
    /// Create a configuration for `folder` with the default 512x512 Lanczos3 target.
    #[must_use]
    pub fn new<P: AsRef<Path>>(folder: P) -> Self {
        Self {
            folder: folder.as_ref().to_path_buf(),
            ..Self::default()
        }
    }

    /// Target dimensions as `(width, height)`.
    #[must_use]
    pub const fn target_size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Check that the target size is usable.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidParameter`] if either dimension is zero.
    pub fn validate(&self) -> Result<()> {
        for (name, value) in [("width", self.width), ("height", self.height)] {
            if value == 0 {
                return Err(Error::InvalidParameter {
                    name: name.to_string(),
                    reason: "must be greater than zero".to_string(),
                });
            }
        }
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            folder: PathBuf::from("."),
            width: DEFAULT_TARGET_SIZE,
            height: DEFAULT_TARGET_SIZE,
            filter: FilterType::Lanczos3,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::new("assets");
        assert_eq!(config.folder, PathBuf::from("assets"));
        assert_eq!(config.target_size(), (512, 512));
        assert_eq!(config.filter, FilterType::Lanczos3);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_zero_height_rejected() {
        let config = Config {
            height: 0,
            ..Config::default()
        };
        match config.validate() {
            Err(Error::InvalidParameter { name, .. }) => assert_eq!(name, "height"),
            other => panic!("expected InvalidParameter, got {other:?}"),
        }
    }
}
