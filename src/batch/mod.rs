//! Batch resizing of every PNG file in one folder.

mod file;
mod report;

use std::fs;
use std::path::PathBuf;

pub use file::{resize_file, Resized};
pub use report::{BatchReport, FileOutcome};

use crate::config::Config;
use crate::error::{Error, Result};
use crate::image::is_png_name;

/// Resizes the PNG files of a single folder in place.
#[derive(Debug, Clone)]
pub struct BatchResizer {
    config: Config,
}

impl BatchResizer {
    /// Create a resizer after validating `config`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidParameter`] if the target size is invalid.
    pub fn new(config: Config) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Configuration this resizer was built with.
    #[must_use]
    pub const fn config(&self) -> &Config {
        &self.config
    }

    /// Process every PNG file in the folder, calling `on_file` as each one finishes.
    ///
    /// Files are visited in directory-listing order. A file that fails is
    /// recorded and left untouched; the batch moves on to the next one.
    /// Files without a `.png` suffix are skipped without an outcome.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ReadDir`] if the folder cannot be listed. Per-file
    /// failures never surface here.
    pub fn run<F>(&self, mut on_file: F) -> Result<BatchReport>
    where
        F: FnMut(&FileOutcome),
    {
        let candidates = self.list_pngs()?;
        tracing::debug!(
            folder = %self.config.folder.display(),
            count = candidates.len(),
            "Found PNG files"
        );

        let mut report = BatchReport::new(self.config.target_size());
        for (file_name, path) in candidates {
            let result = resize_file(&path, &self.config);
            match &result {
                Ok(resized) => tracing::debug!(
                    file = %file_name,
                    converted = resized.was_converted(),
                    "Resized"
                ),
                Err(err) => tracing::debug!(file = %file_name, error = %err, "Resize failed"),
            }

            let outcome = FileOutcome {
                file_name,
                path,
                result,
            };
            on_file(&outcome);
            report.push(outcome);
        }

        tracing::info!(
            resized = report.success_count(),
            failed = report.failure_count(),
            "Batch finished"
        );

        Ok(report)
    }

    /// Snapshot the folder listing before anything is rewritten.
    fn list_pngs(&self) -> Result<Vec<(String, PathBuf)>> {
        let folder = &self.config.folder;
        let read_dir_err = |source| Error::ReadDir {
            path: folder.clone(),
            source,
        };

        let mut pngs = Vec::new();
        for entry in fs::read_dir(folder).map_err(read_dir_err)? {
            let entry = entry.map_err(read_dir_err)?;
            let file_name = entry.file_name().to_string_lossy().into_owned();
            if is_png_name(&file_name) {
                pngs.push((file_name, entry.path()));
            }
        }
        Ok(pngs)
    }
}

/// Resize every PNG in `config.folder` and collect the outcomes.
///
/// # Errors
///
/// Returns an error if the configuration is invalid or the folder cannot be listed.
pub fn resize_images(config: Config) -> Result<BatchReport> {
    BatchResizer::new(config)?.run(|_| {})
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_folder_is_batch_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = resize_images(Config::new(dir.path().join("nope")));

        assert!(matches!(result, Err(Error::ReadDir { .. })));
    }

    #[test]
    fn test_empty_folder() {
        let dir = tempfile::tempdir().unwrap();
        let report = resize_images(Config::new(dir.path())).unwrap();

        assert!(report.is_empty());
    }

    #[test]
    fn test_invalid_size_rejected_before_listing() {
        let config = Config {
            width: 0,
            ..Config::new("does-not-matter")
        };

        assert!(matches!(
            BatchResizer::new(config),
            Err(Error::InvalidParameter { .. })
        ));
    }

    #[test]
    fn test_callback_sees_each_outcome() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("one.png"), b"junk").unwrap();
        std::fs::write(dir.path().join("two.PNG"), b"junk").unwrap();
        std::fs::write(dir.path().join("skip.gif"), b"junk").unwrap();

        let resizer = BatchResizer::new(Config::new(dir.path())).unwrap();
        let mut seen = Vec::new();
        let report = resizer.run(|o| seen.push(o.file_name.clone())).unwrap();

        seen.sort();
        assert_eq!(seen, ["one.png", "two.PNG"]);
        assert_eq!(report.failure_count(), 2);
    }
}
