//! Error handling module for remux

use thiserror::Error;

/// Main error type for remux operations
#[derive(Error, Debug)]
pub enum RemuxError {
    /// External tool could not be run at all
    #[error("{tool} is not available: {reason}")]
    ToolUnavailable { tool: String, reason: String },

    /// Input file not found or not a regular file
    #[error("File not found: {path}")]
    InputNotFound { path: String },

    /// ffmpeg exited with a non-zero status
    #[error("ffmpeg encountered an error. Exit code: {}", exit_code_label(.code))]
    TranscodeFailed { code: Option<i32>, stderr: String },

    /// External process could not be started
    #[error("Failed to start {tool}: {source}")]
    Spawn {
        tool: String,
        #[source]
        source: std::io::Error,
    },

    /// Filename vocabulary failed to compile
    #[error("Invalid filename pattern: {0}")]
    Pattern(#[from] regex::Error),

    /// Output path resolves to the input file itself
    #[error("Output file is the input file: {path}")]
    OutputIsInput { path: String },
}

fn exit_code_label(code: &Option<i32>) -> String {
    match code {
        Some(code) => code.to_string(),
        None => "terminated by signal".to_string(),
    }
}

/// Result type alias for remux operations
pub type RemuxResult<T> = std::result::Result<T, RemuxError>;
