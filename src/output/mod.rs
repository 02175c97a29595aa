//! Output location, verification and cleanup

pub mod partial;
pub mod resolver;
pub mod verifier;

pub use partial::{discard_partial_output, same_file};
pub use resolver::{resolve_output_directory, ResolvedDirectory};
pub use verifier::AudioCodecVerifier;

/// What ffmpeg should do when the output file already exists
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverwritePolicy {
    /// Replace the existing file (`-y`)
    Always,
    /// Fail instead of replacing (`-n`)
    Never,
}

impl OverwritePolicy {
    pub fn from_flag(overwrite: bool) -> Self {
        if overwrite {
            OverwritePolicy::Always
        } else {
            OverwritePolicy::Never
        }
    }

    /// ffmpeg global option implementing the policy
    pub fn ffmpeg_flag(&self) -> &'static str {
        match self {
            OverwritePolicy::Always => "-y",
            OverwritePolicy::Never => "-n",
        }
    }
}
