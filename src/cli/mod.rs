//! CLI module for remux
//!
//! This module handles command-line argument parsing and command execution.

use std::path::PathBuf;

use clap::Parser;

use crate::adapters::{LogFormat, LogLevel};

pub mod commands;

/// Remux a movie file to MP4 under a standardized name
///
/// The output is named `Title (Year) Source Resolution.mp4` when the input
/// filename allows it. By default the video is copied and the audio is
/// converted to stereo AAC; `--keep-audio` copies every stream instead.
#[derive(Parser, Debug)]
#[command(name = "remux")]
#[command(about = "Flexible video remuxer with AAC audio conversion option")]
#[command(version)]
#[command(after_help = "EXAMPLES:
    # Convert to AAC, save to specific directory
    remux -o /home/user/videos movie.mkv

    # Keep original audio, use environment variable
    export REMUX_OUTPUT_DIR=\"/media/converted\"
    remux --keep-audio movie.mkv

    # Simple remux to same directory
    remux movie.mkv")]
pub struct Cli {
    /// Input video file to process
    pub input: PathBuf,

    /// Keep original audio instead of converting to AAC
    #[arg(short, long)]
    pub keep_audio: bool,

    /// Output directory (overrides REMUX_OUTPUT_DIR)
    #[arg(short, long, value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Overwrite the output file if it already exists
    #[arg(long)]
    pub overwrite: bool,

    /// ffmpeg executable
    #[arg(long, env = "REMUX_FFMPEG", default_value = "ffmpeg", value_name = "PATH")]
    pub ffmpeg: String,

    /// ffprobe executable
    #[arg(long, env = "REMUX_FFPROBE", default_value = "ffprobe", value_name = "PATH")]
    pub ffprobe: String,

    /// Logging level
    #[arg(long, env = "REMUX_LOG", value_enum, default_value = "warn")]
    pub log_level: LogLevel,

    /// Log output format
    #[arg(long, value_enum, default_value = "pretty")]
    pub log_format: LogFormat,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["remux", "movie.mkv"]).unwrap();
        assert_eq!(cli.input, PathBuf::from("movie.mkv"));
        assert!(!cli.keep_audio);
        assert!(!cli.overwrite);
        assert_eq!(cli.output_dir, None);
        assert_eq!(cli.log_format, LogFormat::Pretty);
    }

    #[test]
    fn test_short_flags() {
        let cli = Cli::try_parse_from(["remux", "-k", "-o", "/srv/out", "movie.mkv"]).unwrap();
        assert!(cli.keep_audio);
        assert_eq!(cli.output_dir, Some(PathBuf::from("/srv/out")));
    }

    #[test]
    fn test_input_is_required() {
        assert!(Cli::try_parse_from(["remux"]).is_err());
    }

    #[test]
    fn test_tool_paths() {
        let cli = Cli::try_parse_from([
            "remux",
            "--ffmpeg",
            "/opt/ffmpeg/bin/ffmpeg",
            "--ffprobe",
            "/opt/ffmpeg/bin/ffprobe",
            "movie.mkv",
        ])
        .unwrap();
        assert_eq!(cli.ffmpeg, "/opt/ffmpeg/bin/ffmpeg");
        assert_eq!(cli.ffprobe, "/opt/ffmpeg/bin/ffprobe");
    }
}
