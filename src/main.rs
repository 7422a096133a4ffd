//! `png-resizer` CLI - resize the PNG files next to the executable to 512x512.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use png_resizer::{BatchResizer, Config};

/// Resize every PNG in this program's folder to 512x512, preserving transparency.
///
/// Files are overwritten in place. No backup is made.
#[derive(Parser, Debug)]
#[command(name = "png-resizer")]
#[command(version, about, long_about = None)]
struct Args {
    /// Enable verbose output.
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();

    // Initialize logging
    let log_level = if args.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("png_resizer={log_level}").into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();

    if let Err(err) = run() {
        tracing::error!("{err:#}");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}

fn run() -> Result<()> {
    // Build configuration
    let folder = executable_dir()?;
    let resizer =
        BatchResizer::new(Config::new(&folder)).context("Failed to configure resizer")?;

    // Resize in place, reporting each file as it finishes
    let report = resizer
        .run(|outcome| println!("{outcome}"))
        .with_context(|| format!("Failed to resize images in {}", folder.display()))?;

    println!("\n{}", report.banner());

    Ok(())
}

/// Folder containing the running executable.
fn executable_dir() -> Result<PathBuf> {
    let exe = std::env::current_exe().context("Failed to locate executable")?;
    let exe = exe.canonicalize().unwrap_or(exe);
    exe.parent()
        .map(PathBuf::from)
        .with_context(|| format!("Executable {} has no parent folder", exe.display()))
}
