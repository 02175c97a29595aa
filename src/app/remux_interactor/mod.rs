// Remux interactor - Orchestrates the single-file remux use case

use std::path::{Path, PathBuf};
use std::time::Instant;

use tracing::{info, warn};

use crate::adapters::env::OUTPUT_DIR_VAR;
use crate::domain::model::*;
use crate::domain::rules::FilenameStandardizer;
use crate::engine::{EngineConfig, TranscodeInvoker};
use crate::error::{RemuxError, RemuxResult};
use crate::output::{resolve_output_directory, same_file, AudioCodecVerifier, OverwritePolicy};
use crate::ports::{EnvPort, ProcessRunner};
use crate::utils::console::{emit, Level};
use crate::utils::format_elapsed;

/// External tool locations
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemuxConfig {
    pub ffmpeg: String,
    pub ffprobe: String,
}

impl Default for RemuxConfig {
    fn default() -> Self {
        Self {
            ffmpeg: "ffmpeg".to_string(),
            ffprobe: "ffprobe".to_string(),
        }
    }
}

/// Interactor for the remux use case
pub struct RemuxInteractor<'a, R: ProcessRunner, E: EnvPort> {
    runner: &'a R,
    env: &'a E,
    config: RemuxConfig,
    standardizer: FilenameStandardizer,
}

impl<'a, R: ProcessRunner, E: EnvPort> RemuxInteractor<'a, R, E> {
    /// Create new remux interactor with injected ports
    pub fn new(runner: &'a R, env: &'a E, config: RemuxConfig) -> RemuxResult<Self> {
        Ok(Self {
            runner,
            env,
            config,
            standardizer: FilenameStandardizer::new()?,
        })
    }

    /// Run one remux from availability check to codec verification
    pub fn execute(&self, request: &RemuxRequest) -> RemuxResult<RemuxReport> {
        let invoker = TranscodeInvoker::new(self.runner, &self.config.ffmpeg);

        let banner = invoker.check_available()?;
        emit(
            Level::Success,
            &format!("✓ Found {}", banner_or_tool(&banner, &self.config.ffmpeg)),
        );

        if !request.input.is_file() {
            return Err(RemuxError::InputNotFound {
                path: request.input.display().to_string(),
            });
        }

        let (target, standardized) = self.plan_output(request);
        let output_path = target.path();

        // ffmpeg cannot write over its own input
        if same_file(&output_path, &request.input) {
            warn!(path = %output_path.display(), "output path is the input file");
            return Err(RemuxError::OutputIsInput {
                path: output_path.display().to_string(),
            });
        }

        emit(
            Level::Success,
            &format!("\n🎬 Processing file in {} mode:", request.mode.label()),
        );
        println!("  Input:  {}", request.input.display());
        println!("  Output: {}\n", output_path.display());

        let engine_config = EngineConfig {
            input_path: request.input.clone(),
            output_path: output_path.clone(),
            mode: request.mode,
            overwrite: OverwritePolicy::from_flag(request.overwrite),
        };

        let started = Instant::now();
        invoker.transcode(&engine_config)?;

        emit(
            Level::Success,
            &format!("✅ Conversion complete in {}", format_elapsed(started.elapsed())),
        );
        println!("Output file: {}", output_path.display());

        let codec_check = match request.mode {
            InvocationMode::TranscodeAudio(target) => Some(self.verify_audio(&output_path, target)),
            InvocationMode::CopyAll => None,
        };

        Ok(RemuxReport {
            output: output_path,
            standardized,
            codec_check,
        })
    }

    /// Choose the output directory and file name. The flag reports whether
    /// the name was standardized or fell back to the input stem.
    pub fn plan_output(&self, request: &RemuxRequest) -> (OutputTarget, bool) {
        let env_dir = self.env.get_env(OUTPUT_DIR_VAR).map(PathBuf::from);
        let directory = resolve_output_directory(
            request.output_dir.as_deref(),
            env_dir.as_deref(),
            &request.input,
        );
        info!(
            source = ?directory.source,
            path = %directory.path.display(),
            "output directory resolved"
        );
        emit(
            Level::Info,
            &format!("📁 Using {}: {}", directory.source, display_dir(&directory.path)),
        );

        let (file_name, standardized) = match self.standardizer.file_name(&request.input) {
            Some(name) => (name, true),
            None => {
                let name = fallback_file_name(&request.input);
                warn!(input = %request.input.display(), "filename could not be standardized");
                emit(
                    Level::Warning,
                    &format!("Warning: Could not standardize filename. Using: {}", name),
                );
                (name, false)
            }
        };

        (OutputTarget::new(directory.path, file_name), standardized)
    }

    fn verify_audio(&self, output: &Path, target: AudioTarget) -> CodecCheck {
        println!("\nVerifying audio codec...");
        let check = AudioCodecVerifier::new(self.runner, &self.config.ffprobe)
            .verify(output, target.codec);

        match &check {
            CodecCheck::Matches(_) => emit(
                Level::Success,
                &format!("✅ Audio successfully converted to {}", target.codec.to_uppercase()),
            ),
            CodecCheck::Mismatch(codec) => emit(
                Level::Warning,
                &format!(
                    "⚠️  Audio codec is: {} (expected {})",
                    codec,
                    target.codec.to_uppercase()
                ),
            ),
            CodecCheck::Unverified(_) => {
                emit(Level::Warning, "⚠️  Could not verify audio codec")
            }
        }
        check
    }
}

fn banner_or_tool<'b>(banner: &'b str, tool: &'b str) -> &'b str {
    if banner.is_empty() {
        tool
    } else {
        banner
    }
}

fn display_dir(path: &Path) -> String {
    if path.as_os_str().is_empty() {
        ".".to_string()
    } else {
        path.display().to_string()
    }
}
