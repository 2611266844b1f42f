//! A `CommandRunner` that records instead of running.

use std::{
    collections::HashMap,
    sync::{Arc, Mutex},
};

use pyhatch_core::{
    application::{
        ApplicationError,
        ports::{CommandOutcome, CommandRunner, CommandSpec},
    },
    error::PyhatchResult,
};

/// Test double: every command is recorded and succeeds unless its program
/// was scripted to fail or to be missing. Clones share the record.
#[derive(Debug, Clone, Default)]
pub struct RecordingRunner {
    inner: Arc<Mutex<Inner>>,
}

#[derive(Debug, Default)]
struct Inner {
    calls: Vec<CommandSpec>,
    exit_codes: HashMap<String, Option<i32>>,
    missing: Vec<String>,
}

impl RecordingRunner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every run of `program` exit with `code` (`None` = signal).
    pub fn exit_with(self, program: impl Into<String>, code: Option<i32>) -> Self {
        if let Ok(mut inner) = self.inner.lock() {
            inner.exit_codes.insert(program.into(), code);
        }
        self
    }

    /// Make `program` fail to start.
    pub fn missing(self, program: impl Into<String>) -> Self {
        if let Ok(mut inner) = self.inner.lock() {
            inner.missing.push(program.into());
        }
        self
    }

    /// Every command run so far, in order.
    pub fn calls(&self) -> Vec<CommandSpec> {
        self.inner
            .lock()
            .map(|inner| inner.calls.clone())
            .unwrap_or_default()
    }

    /// Display strings of every call, handy for assertions.
    pub fn command_lines(&self) -> Vec<String> {
        self.calls().iter().map(ToString::to_string).collect()
    }
}

impl CommandRunner for RecordingRunner {
    fn run(&self, spec: &CommandSpec) -> PyhatchResult<CommandOutcome> {
        let mut inner = self
            .inner
            .lock()
            .map_err(|_| ApplicationError::CommandUnavailable {
                command: spec.to_string(),
                reason: "recording runner lock poisoned".into(),
            })?;

        if inner.missing.iter().any(|p| p == spec.program()) {
            return Err(ApplicationError::CommandUnavailable {
                command: spec.to_string(),
                reason: "No such file or directory".into(),
            }
            .into());
        }

        inner.calls.push(spec.clone());
        let code = inner
            .exit_codes
            .get(spec.program())
            .copied()
            .unwrap_or(Some(0));
        Ok(CommandOutcome::new(code))
    }
}
