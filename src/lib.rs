//! Remux CLI Library
//!
//! Remuxes a single movie file to MP4 with ffmpeg under a standardized
//! `Title (Year) Source Resolution.mp4` name.

pub mod adapters;
pub mod app;
pub mod cli;
pub mod domain;
pub mod engine;
pub mod error;
pub mod output;
pub mod ports;
pub mod utils;

// Re-export commonly used types
pub use domain::model::{CodecCheck, InvocationMode, ParsedName, RemuxReport, RemuxRequest};
pub use domain::rules::FilenameStandardizer;
pub use error::{RemuxError, RemuxResult};
