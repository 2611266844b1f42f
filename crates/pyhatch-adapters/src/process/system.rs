//! Runs commands with `std::process`.

use std::process::{Command, Stdio};

use tracing::debug;

use pyhatch_core::{
    application::{
        ApplicationError,
        ports::{CommandOutcome, CommandRunner, CommandSpec},
    },
    error::PyhatchResult,
};

/// Production runner: the child inherits stdin and stderr, and stdout
/// unless the command asks for quiet. Blocks until the child exits.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemCommandRunner;

impl SystemCommandRunner {
    pub fn new() -> Self {
        Self
    }
}

impl CommandRunner for SystemCommandRunner {
    fn run(&self, spec: &CommandSpec) -> PyhatchResult<CommandOutcome> {
        let mut command = Command::new(spec.program());
        command.args(spec.arguments());
        if let Some(dir) = spec.cwd() {
            command.current_dir(dir);
        }
        if spec.is_quiet() {
            command.stdout(Stdio::null());
        }

        let status = command
            .status()
            .map_err(|e| ApplicationError::CommandUnavailable {
                command: spec.to_string(),
                reason: e.to_string(),
            })?;
        debug!(command = %spec, status = %status, "Command exited");

        Ok(CommandOutcome::new(status.code()))
    }
}
