//! Process adapter
//!
//! Runs external tools through `std::process::Command`, capturing their output.

use std::io;
use std::process::{Command, Stdio};

use tracing::debug;

use crate::ports::{ProcessOutput, ProcessRunner};

/// `ProcessRunner` backed by the operating system
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemProcessRunner;

impl SystemProcessRunner {
    pub fn new() -> Self {
        Self
    }
}

impl ProcessRunner for SystemProcessRunner {
    fn run(&self, program: &str, args: &[String]) -> io::Result<ProcessOutput> {
        debug!(program, ?args, "spawning process");

        let output = Command::new(program)
            .args(args)
            .stdin(Stdio::null())
            .output()?;

        debug!(program, code = ?output.status.code(), "process exited");

        Ok(ProcessOutput {
            code: output.status.code(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        })
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;

    fn sh(script: &str) -> io::Result<ProcessOutput> {
        SystemProcessRunner::new().run("sh", &["-c".to_string(), script.to_string()])
    }

    #[test]
    fn test_captures_stdout_and_exit_code() {
        let output = sh("echo hello; echo oops >&2; exit 3").unwrap();
        assert_eq!(output.code, Some(3));
        assert_eq!(output.stdout.trim(), "hello");
        assert_eq!(output.stderr.trim(), "oops");
    }

    #[test]
    fn test_missing_program_is_an_error() {
        let result = SystemProcessRunner::new().run("/nonexistent/remux-test-tool", &[]);
        assert!(result.is_err());
    }
}
