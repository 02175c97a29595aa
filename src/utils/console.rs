//! Styled console messages
//!
//! Colour is applied only when the target stream supports it, so the helpers
//! hold no state and are safe to call from anywhere.

use owo_colors::{OwoColorize, Stream};

/// Semantic level of a user-facing message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Info,
    Success,
    Warning,
    Error,
}

impl Level {
    /// Stream the message is printed on
    pub fn stream(&self) -> Stream {
        match self {
            Level::Error => Stream::Stderr,
            _ => Stream::Stdout,
        }
    }
}

/// Style `message` for `level`
pub fn styled(level: Level, message: &str) -> String {
    let stream = level.stream();
    match level {
        Level::Info => message.if_supports_color(stream, |t| t.blue()).to_string(),
        Level::Success => message.if_supports_color(stream, |t| t.green()).to_string(),
        Level::Warning => message
            .if_supports_color(stream, |t| t.bright_yellow())
            .to_string(),
        Level::Error => message.if_supports_color(stream, |t| t.red()).to_string(),
    }
}

/// Print a styled message on the stream matching its level
pub fn emit(level: Level, message: &str) {
    let line = styled(level, message);
    match level.stream() {
        Stream::Stderr => eprintln!("{}", line),
        _ => println!("{}", line),
    }
}
