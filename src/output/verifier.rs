//! Output verification implementation
//!
//! Reads back the codec of the first audio stream with ffprobe.

use std::path::Path;

use serde::Deserialize;
use tracing::{debug, info, warn};

use crate::domain::model::CodecCheck;
use crate::ports::ProcessRunner;

#[derive(Debug, Deserialize)]
struct ProbeReport {
    #[serde(default)]
    streams: Vec<ProbeStream>,
}

#[derive(Debug, Deserialize)]
struct ProbeStream {
    codec_name: Option<String>,
}

/// Verifies the audio codec of a produced file
pub struct AudioCodecVerifier<'a, R: ProcessRunner> {
    runner: &'a R,
    ffprobe: &'a str,
}

impl<'a, R: ProcessRunner> AudioCodecVerifier<'a, R> {
    pub fn new(runner: &'a R, ffprobe: &'a str) -> Self {
        Self { runner, ffprobe }
    }

    /// ffprobe arguments selecting the first audio stream's codec name
    pub fn probe_args(output: &Path) -> Vec<String> {
        [
            "-v",
            "error",
            "-select_streams",
            "a:0",
            "-show_entries",
            "stream=codec_name",
            "-of",
            "json",
        ]
        .iter()
        .map(|arg| arg.to_string())
        .chain(std::iter::once(output.to_string_lossy().into_owned()))
        .collect()
    }

    /// Compare the first audio stream's codec with `expected`. Never fails;
    /// problems reading the codec are reported as [`CodecCheck::Unverified`].
    pub fn verify(&self, output: &Path, expected: &str) -> CodecCheck {
        info!(output = %output.display(), expected, "verifying audio codec");

        let result = match self.runner.run(self.ffprobe, &Self::probe_args(output)) {
            Ok(result) => result,
            Err(e) => {
                warn!("failed to start {}: {}", self.ffprobe, e);
                return CodecCheck::Unverified(e.to_string());
            }
        };

        if !result.is_success() {
            let reason = result.stderr_tail(3);
            warn!(code = ?result.code, "ffprobe failed: {}", reason);
            return CodecCheck::Unverified(reason);
        }

        match parse_codec_name(&result.stdout) {
            Some(codec) => {
                debug!(%codec, "probed audio codec");
                classify(codec, expected)
            }
            None => CodecCheck::Unverified("no audio stream reported".to_string()),
        }
    }
}

/// Extract the first reported codec name from ffprobe JSON output
fn parse_codec_name(stdout: &str) -> Option<String> {
    let report: ProbeReport = match serde_json::from_str(stdout) {
        Ok(report) => report,
        Err(e) => {
            debug!("unparsable ffprobe output: {}", e);
            return None;
        }
    };
    report
        .streams
        .into_iter()
        .find_map(|stream| stream.codec_name)
        .map(|codec| codec.trim().to_string())
        .filter(|codec| !codec.is_empty())
}

fn classify(codec: String, expected: &str) -> CodecCheck {
    if codec.to_lowercase().contains(&expected.to_lowercase()) {
        CodecCheck::Matches(codec)
    } else {
        CodecCheck::Mismatch(codec)
    }
}
