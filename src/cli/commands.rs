//! Command implementations

use anyhow::{Context, Result};
use tracing::info;

use crate::adapters::{ProcessEnv, SystemProcessRunner};
use crate::app::{RemuxConfig, RemuxInteractor};
use crate::cli::Cli;
use crate::domain::model::{RemuxReport, RemuxRequest};

/// Execute the remux command
pub fn remux(cli: &Cli) -> Result<RemuxReport> {
    info!(input = %cli.input.display(), keep_audio = cli.keep_audio, "starting remux");

    let runner = SystemProcessRunner::new();
    let env = ProcessEnv::new();
    let config = RemuxConfig {
        ffmpeg: cli.ffmpeg.clone(),
        ffprobe: cli.ffprobe.clone(),
    };

    let interactor = RemuxInteractor::new(&runner, &env, config)
        .context("Failed to build the filename vocabulary")?;
    let request = RemuxRequest::new(&cli.input, cli.output_dir.clone(), cli.keep_audio)
        .with_overwrite(cli.overwrite);

    let report = interactor.execute(&request)?;

    info!(output = %report.output.display(), standardized = report.standardized, "remux finished");
    Ok(report)
}
