//! # png-resizer
//!
//! Batch-resize the PNG images of a single folder to a fixed resolution,
//! preserving alpha transparency.
//!
//! Every `*.png` file (suffix matched case-insensitively) is decoded,
//! normalized to 8-bit RGBA, resampled with a Lanczos3 filter to the target
//! size (512x512 by default), and written back over the original. Files that
//! fail are reported and left as they were; the batch always runs to the end.
//!
//! ## Example
//!
//! ```no_run
//! use png_resizer::{resize_images, Config};
//!
//! # fn main() -> png_resizer::Result<()> {
//! let report = resize_images(Config::new("assets/animals"))?;
//!
//! for outcome in report.outcomes() {
//!     println!("{outcome}");
//! }
//! # Ok(())
//! # }
//! ```

pub mod batch;
pub mod config;
pub mod error;
pub mod image;

pub use batch::{resize_file, resize_images, BatchReport, BatchResizer, FileOutcome, Resized};
pub use config::{Config, DEFAULT_TARGET_SIZE};
pub use error::{Error, Result};
