//! Per-file outcomes and the batch report.

use std::fmt;
use std::path::PathBuf;

use crate::error::Error;

use super::file::Resized;

/// Result of processing one PNG file.
#[derive(Debug)]
pub struct FileOutcome {
    /// File name as listed in the folder.
    pub file_name: String,
    /// Full path of the file.
    pub path: PathBuf,
    /// Success details, or the error that left the file untouched.
    pub result: Result<Resized, Error>,
}

impl FileOutcome {
    /// Whether the file was resized and written back.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.result.is_ok()
    }
}

/// Console line for one file.
impl fmt::Display for FileOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.result {
            Ok(_) => write!(f, "✅ Resized (preserved transparency): {}", self.file_name),
            Err(err) => write!(f, "⚠️ Error resizing {}: {err}", self.file_name),
        }
    }
}

/// Outcomes of a batch, in the order the folder listed them.
#[derive(Debug)]
pub struct BatchReport {
    target_size: (u32, u32),
    outcomes: Vec<FileOutcome>,
}

impl BatchReport {
    pub(crate) const fn new(target_size: (u32, u32)) -> Self {
        Self {
            target_size,
            outcomes: Vec::new(),
        }
    }

    pub(crate) fn push(&mut self, outcome: FileOutcome) {
        self.outcomes.push(outcome);
    }

    /// All outcomes.
    #[must_use]
    pub fn outcomes(&self) -> &[FileOutcome] {
        &self.outcomes
    }

    /// Outcomes of files that were resized.
    pub fn succeeded(&self) -> impl Iterator<Item = &FileOutcome> {
        self.outcomes.iter().filter(|o| o.is_success())
    }

    /// Outcomes of files left untouched because of an error.
    pub fn failed(&self) -> impl Iterator<Item = &FileOutcome> {
        self.outcomes.iter().filter(|o| !o.is_success())
    }

    #[must_use]
    pub fn success_count(&self) -> usize {
        self.succeeded().count()
    }

    #[must_use]
    pub fn failure_count(&self) -> usize {
        self.failed().count()
    }

    /// True when the folder held no PNG files.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.outcomes.is_empty()
    }

    /// Closing console line, printed once the listing is exhausted whatever
    /// the individual outcomes were.
    #[must_use]
    pub fn banner(&self) -> String {
        let (width, height) = self.target_size;
        format!("🎉 Done! All PNGs resized to {width}x{height} pixels with transparency preserved.")
    }
}
