//! Scripted process runner for tests
//!
//! Records every invocation and answers from a queue of prepared results.

use std::cell::RefCell;
use std::collections::{HashMap, VecDeque};
use std::io;

use crate::ports::{EnvPort, ProcessOutput, ProcessRunner};

/// A recorded call: program plus arguments
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedCall {
    pub program: String,
    pub args: Vec<String>,
}

/// Test double that returns scripted results in order
#[derive(Default)]
pub struct ScriptedRunner {
    responses: RefCell<VecDeque<io::Result<ProcessOutput>>>,
    calls: RefCell<Vec<RecordedCall>>,
}

impl ScriptedRunner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a completed process result
    pub fn respond(self, output: ProcessOutput) -> Self {
        self.responses.borrow_mut().push_back(Ok(output));
        self
    }

    /// Queue a spawn failure
    pub fn fail_spawn(self, kind: io::ErrorKind) -> Self {
        self.responses
            .borrow_mut()
            .push_back(Err(io::Error::new(kind, "scripted spawn failure")));
        self
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.borrow().clone()
    }
}

impl ProcessRunner for ScriptedRunner {
    fn run(&self, program: &str, args: &[String]) -> io::Result<ProcessOutput> {
        self.calls.borrow_mut().push(RecordedCall {
            program: program.to_string(),
            args: args.to_vec(),
        });
        self.responses.borrow_mut().pop_front().unwrap_or_else(|| {
            panic!("ScriptedRunner: no response queued for {} {:?}", program, args)
        })
    }
}

/// Fixed environment for tests
#[derive(Default)]
pub struct FixedEnv {
    vars: HashMap<String, String>,
}

impl FixedEnv {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, key: &str, value: impl Into<String>) -> Self {
        self.vars.insert(key.to_string(), value.into());
        self
    }
}

impl EnvPort for FixedEnv {
    fn get_env(&self, key: &str) -> Option<String> {
        self.vars.get(key).cloned()
    }
}
