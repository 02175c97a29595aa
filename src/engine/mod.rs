//! ffmpeg invocation engine

use std::path::PathBuf;

use crate::domain::model::InvocationMode;
use crate::output::OverwritePolicy;

pub mod copy;
pub mod invoker;
pub mod reencode;

pub use invoker::TranscodeInvoker;

/// Everything needed to build one ffmpeg command line
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// Input file path
    pub input_path: PathBuf,
    /// Output file path
    pub output_path: PathBuf,
    /// Stream handling
    pub mode: InvocationMode,
    /// Behaviour when the output already exists
    pub overwrite: OverwritePolicy,
}

impl EngineConfig {
    /// Full ffmpeg argument list for this configuration
    pub fn ffmpeg_args(&self) -> Vec<String> {
        let mut args = vec![
            self.overwrite.ffmpeg_flag().to_string(),
            "-i".to_string(),
            self.input_path.to_string_lossy().into_owned(),
        ];

        match self.mode {
            InvocationMode::CopyAll => args.extend(copy::stream_args()),
            InvocationMode::TranscodeAudio(target) => args.extend(reencode::stream_args(&target)),
        }

        args.extend(["-movflags".to_string(), "+faststart".to_string()]);
        args.push(self.output_path.to_string_lossy().into_owned());
        args
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::AudioTarget;

    fn config(mode: InvocationMode) -> EngineConfig {
        EngineConfig {
            input_path: PathBuf::from("/in/The.Matrix.1999.mkv"),
            output_path: PathBuf::from("/out/The Matrix (1999) BluRay 1080p.mp4"),
            mode,
            overwrite: OverwritePolicy::Never,
        }
    }

    #[test]
    fn test_copy_mode_args() {
        let args = config(InvocationMode::CopyAll).ffmpeg_args();
        assert_eq!(
            args,
            [
                "-n",
                "-i",
                "/in/The.Matrix.1999.mkv",
                "-map",
                "0",
                "-c",
                "copy",
                "-movflags",
                "+faststart",
                "/out/The Matrix (1999) BluRay 1080p.mp4",
            ]
        );
        assert!(!args.iter().any(|arg| arg == "-c:a"));
    }

    #[test]
    fn test_transcode_audio_args() {
        let args = config(InvocationMode::TranscodeAudio(AudioTarget::AAC_STEREO)).ffmpeg_args();
        assert_eq!(
            args,
            [
                "-n",
                "-i",
                "/in/The.Matrix.1999.mkv",
                "-map",
                "0:v",
                "-map",
                "0:a",
                "-c:v",
                "copy",
                "-c:a",
                "aac",
                "-b:a",
                "320k",
                "-ac",
                "2",
                "-movflags",
                "+faststart",
                "/out/The Matrix (1999) BluRay 1080p.mp4",
            ]
        );
    }

    #[test]
    fn test_overwrite_flag() {
        let mut config = config(InvocationMode::CopyAll);
        config.overwrite = OverwritePolicy::Always;
        assert_eq!(config.ffmpeg_args()[0], "-y");
    }
}
