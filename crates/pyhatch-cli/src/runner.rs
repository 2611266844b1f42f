//! Command runner that shows each command line before running it.

use pyhatch_adapters::SystemCommandRunner;
use pyhatch_core::{
    application::{CommandOutcome, CommandRunner, CommandSpec},
    error::PyhatchResult,
};

use crate::output::OutputManager;

/// Decorates another runner with a dimmed `$ <command>` echo on stdout.
pub struct EchoingRunner<R = SystemCommandRunner> {
    inner: R,
    output: OutputManager,
}

impl EchoingRunner {
    pub fn system(output: OutputManager) -> Self {
        Self::new(SystemCommandRunner::new(), output)
    }
}

impl<R: CommandRunner> EchoingRunner<R> {
    pub fn new(inner: R, output: OutputManager) -> Self {
        Self { inner, output }
    }
}

impl<R: CommandRunner> CommandRunner for EchoingRunner<R> {
    fn run(&self, spec: &CommandSpec) -> PyhatchResult<CommandOutcome> {
        if let Err(e) = self.output.command(&spec.to_string()) {
            tracing::debug!("Could not echo command: {e}");
        }
        self.inner.run(spec)
    }
}
