//! Custom error types for png-resizer.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for the png-resizer library.
///
/// [`Error::ReadDir`] and [`Error::InvalidParameter`] abort a batch. Every
/// other variant is scoped to a single file and ends up in that file's
/// [`FileOutcome`](crate::FileOutcome).
#[derive(Error, Debug)]
pub enum Error {
    /// Failed to list the target folder.
    #[error("failed to read folder {path}: {source}")]
    ReadDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to open or decode an image file.
    #[error("failed to load image from {path}: {source}")]
    ImageLoad {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    /// Failed to encode an image as PNG.
    #[error("failed to save image to {path}: {source}")]
    ImageSave {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    /// Failed to write the encoded image back to disk.
    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Invalid parameter value.
    #[error("invalid parameter {name}: {reason}")]
    InvalidParameter { name: String, reason: String },
}

/// Result type alias for png-resizer operations.
pub type Result<T> = std::result::Result<T, Error>;
