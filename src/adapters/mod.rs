// Adapters - External system implementations

pub mod env;
pub mod process;
pub mod tracing_log;

#[cfg(test)]
pub mod scripted;

// Re-export adapters
pub use env::ProcessEnv;
pub use process::SystemProcessRunner;
pub use tracing_log::{init_logging, LogFormat, LogLevel};
