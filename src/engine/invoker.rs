//! ffmpeg process invocation

use std::time::Instant;

use tracing::{debug, error, info};

use crate::engine::EngineConfig;
use crate::error::{RemuxError, RemuxResult};
use crate::output::discard_partial_output;
use crate::ports::ProcessRunner;

/// Lines of ffmpeg stderr kept in a failure report
const STDERR_TAIL_LINES: usize = 20;

/// Runs ffmpeg through a [`ProcessRunner`]
pub struct TranscodeInvoker<'a, R: ProcessRunner> {
    runner: &'a R,
    ffmpeg: &'a str,
}

impl<'a, R: ProcessRunner> TranscodeInvoker<'a, R> {
    pub fn new(runner: &'a R, ffmpeg: &'a str) -> Self {
        Self { runner, ffmpeg }
    }

    /// Confirm ffmpeg can be run at all by querying its version.
    /// Returns the first line of the version banner.
    pub fn check_available(&self) -> RemuxResult<String> {
        let unavailable = |reason: String| RemuxError::ToolUnavailable {
            tool: self.ffmpeg.to_string(),
            reason,
        };

        let output = self
            .runner
            .run(self.ffmpeg, &["-version".to_string()])
            .map_err(|e| unavailable(e.to_string()))?;

        if !output.is_success() {
            return Err(unavailable(match output.code {
                Some(code) => format!("version query exited with code {}", code),
                None => "version query was terminated".to_string(),
            }));
        }

        let banner = output.stdout.lines().next().unwrap_or_default().to_string();
        debug!(%banner, "ffmpeg available");
        Ok(banner)
    }

    /// Run the transcode described by `config`, blocking until ffmpeg exits.
    ///
    /// On a non-zero exit any partial output ffmpeg may have written is
    /// removed before the error is returned.
    pub fn transcode(&self, config: &EngineConfig) -> RemuxResult<()> {
        let args = config.ffmpeg_args();
        let existed_before = config.output_path.exists();
        let started = Instant::now();

        info!(mode = ?config.mode, converts_audio = config.mode.converts_audio(), "running ffmpeg");
        debug!("{} {}", self.ffmpeg, args.join(" "));

        let output = self
            .runner
            .run(self.ffmpeg, &args)
            .map_err(|source| RemuxError::Spawn {
                tool: self.ffmpeg.to_string(),
                source,
            })?;

        if output.is_success() {
            info!(elapsed = ?started.elapsed(), "ffmpeg finished");
            return Ok(());
        }

        let stderr = output.stderr_tail(STDERR_TAIL_LINES);
        error!(code = ?output.code, "ffmpeg failed:\n{}", stderr);

        if discard_partial_output(
            &config.output_path,
            &config.input_path,
            existed_before,
            config.overwrite,
        ) {
            info!(path = %config.output_path.display(), "removed partial output");
        }

        Err(RemuxError::TranscodeFailed {
            code: output.code,
            stderr,
        })
    }
}
