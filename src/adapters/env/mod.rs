//! Environment adapter
//!
//! Reads process environment variables.

use crate::ports::EnvPort;

/// Environment variable naming the fallback output directory
pub const OUTPUT_DIR_VAR: &str = "REMUX_OUTPUT_DIR";

/// `EnvPort` backed by the real process environment
#[derive(Debug, Default, Clone, Copy)]
pub struct ProcessEnv;

impl ProcessEnv {
    pub fn new() -> Self {
        Self
    }
}

impl EnvPort for ProcessEnv {
    /// Unset, empty and non-unicode values are all treated as absent
    fn get_env(&self, key: &str) -> Option<String> {
        std::env::var(key).ok().filter(|value| !value.is_empty())
    }
}
