// Domain models - Core types and data structures

use std::fmt;
use std::path::{Path, PathBuf};

/// Extension every produced file carries, whatever the input container
pub const OUTPUT_EXTENSION: &str = "mp4";

/// Metadata recovered from a release-style movie filename
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedName {
    pub title: String,
    pub year: String,
    pub source: String,
    pub resolution: String,
}

impl ParsedName {
    /// Standardized file name: `Title (Year) Source Resolution.mp4`
    pub fn file_name(&self) -> String {
        format!("{}.{}", self, OUTPUT_EXTENSION)
    }
}

impl fmt::Display for ParsedName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({}) {} {}",
            self.title, self.year, self.source, self.resolution
        )
    }
}

/// Fallback name used when a filename cannot be standardized: the input stem
/// with the output extension.
pub fn fallback_file_name(input: &Path) -> String {
    let stem = input
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default();
    format!("{}.{}", stem, OUTPUT_EXTENSION)
}

/// Fixed audio encoding target for transcode-audio mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AudioTarget {
    pub codec: &'static str,
    pub bitrate: &'static str,
    pub channels: u8,
}

impl AudioTarget {
    pub const AAC_STEREO: AudioTarget = AudioTarget {
        codec: "aac",
        bitrate: "320k",
        channels: 2,
    };
}

impl Default for AudioTarget {
    fn default() -> Self {
        Self::AAC_STEREO
    }
}

/// How ffmpeg should treat the input streams
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvocationMode {
    /// Remux every stream untouched
    CopyAll,
    /// Copy video, re-encode the audio to the given target
    TranscodeAudio(AudioTarget),
}

impl InvocationMode {
    /// Select the mode from the keep-audio flag
    pub fn from_keep_audio(keep_audio: bool) -> Self {
        if keep_audio {
            InvocationMode::CopyAll
        } else {
            InvocationMode::TranscodeAudio(AudioTarget::default())
        }
    }

    /// Whether the produced file should have its audio codec verified
    pub fn converts_audio(&self) -> bool {
        matches!(self, InvocationMode::TranscodeAudio(_))
    }

    /// Human readable label shown before processing
    pub fn label(&self) -> &'static str {
        match self {
            InvocationMode::CopyAll => "REMUX (keeping original audio)",
            InvocationMode::TranscodeAudio(_) => "REMUX + AAC CONVERSION",
        }
    }
}

/// Where the output directory came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DirectorySource {
    Explicit,
    Environment,
    InputDirectory,
}

impl fmt::Display for DirectorySource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            DirectorySource::Explicit => "specified output directory",
            DirectorySource::Environment => "environment variable output directory",
            DirectorySource::InputDirectory => "input file directory",
        };
        f.write_str(label)
    }
}

/// Resolved output location
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputTarget {
    pub directory: PathBuf,
    pub file_name: String,
}

impl OutputTarget {
    pub fn new(directory: impl Into<PathBuf>, file_name: impl Into<String>) -> Self {
        Self {
            directory: directory.into(),
            file_name: file_name.into(),
        }
    }

    /// Full output path (directory joined with file name)
    pub fn path(&self) -> PathBuf {
        self.directory.join(&self.file_name)
    }
}

/// A single remux job as requested on the command line
#[derive(Debug, Clone)]
pub struct RemuxRequest {
    pub input: PathBuf,
    pub output_dir: Option<PathBuf>,
    pub mode: InvocationMode,
    pub overwrite: bool,
}

impl RemuxRequest {
    pub fn new(input: impl Into<PathBuf>, output_dir: Option<PathBuf>, keep_audio: bool) -> Self {
        Self {
            input: input.into(),
            output_dir,
            mode: InvocationMode::from_keep_audio(keep_audio),
            overwrite: false,
        }
    }

    pub fn with_overwrite(mut self, overwrite: bool) -> Self {
        self.overwrite = overwrite;
        self
    }
}

/// Result of post-run audio codec verification
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CodecCheck {
    /// First audio stream uses the expected codec
    Matches(String),
    /// First audio stream uses some other codec
    Mismatch(String),
    /// The codec could not be read back
    Unverified(String),
}

/// Outcome of a successful run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemuxReport {
    pub output: PathBuf,
    pub standardized: bool,
    pub codec_check: Option<CodecCheck>,
}

#[cfg(test)]
mod tests;
