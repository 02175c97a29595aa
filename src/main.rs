//! Remux CLI
//!
//! Remuxes a single movie file to MP4 with ffmpeg, naming the result
//! `Title (Year) Source Resolution.mp4` when the input filename allows it.
//!
//! # Usage
//!
//! ```bash
//! remux movie.mkv
//! remux --keep-audio -o /media/converted movie.mkv
//! REMUX_OUTPUT_DIR=/media/converted remux movie.mkv
//! ```

use clap::Parser;
use tracing::debug;

use remux_cli::adapters::init_logging;
use remux_cli::cli::{commands, Cli};
use remux_cli::error::RemuxError;
use remux_cli::utils::console::{emit, Level};

/// Main entry point for the remux CLI
fn main() {
    let cli = Cli::parse();
    init_logging(cli.log_level, cli.log_format);

    if let Err(e) = commands::remux(&cli) {
        debug!("remux failed: {:#}", e);
        report_failure(&e);
        std::process::exit(1);
    }
}

fn report_failure(e: &anyhow::Error) {
    match e.downcast_ref::<RemuxError>() {
        Some(RemuxError::ToolUnavailable { tool, reason }) => {
            emit(Level::Error, &format!("✗ {} not found ({})", tool, reason));
            eprintln!("Please install FFmpeg: sudo apt install ffmpeg");
        }
        Some(RemuxError::InputNotFound { path }) => {
            emit(Level::Error, &format!("Error: File not found: {}", path));
        }
        Some(RemuxError::OutputIsInput { path }) => {
            emit(
                Level::Error,
                &format!("Error: Output would overwrite the input file: {}", path),
            );
            eprintln!("Use -o or REMUX_OUTPUT_DIR to write to another directory");
        }
        Some(RemuxError::TranscodeFailed { stderr, .. }) => {
            emit(Level::Error, &format!("❌ {}", e));
            if !stderr.is_empty() {
                eprintln!("{}", stderr);
            }
        }
        _ => emit(Level::Error, &format!("Error: {:#}", e)),
    }
}
