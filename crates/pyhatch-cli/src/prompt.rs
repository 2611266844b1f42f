//! Interactive prompting and Ctrl-C handling.
//!
//! SIGINT is only acted on while a question is on screen: the cursor is
//! restored and the process exits with status 1, printing nothing. At any
//! other time the handler ignores the signal so that it reaches the running
//! child (python, pip, git, twine), whose failure is reported normally.

use std::io::{self, IsTerminal};
use std::sync::atomic::{AtomicBool, Ordering};

use pyhatch_adapters::LinePrompter;
use pyhatch_core::{
    application::{ApplicationError, Prompter, Question},
    error::PyhatchResult,
};

static PROMPTING: AtomicBool = AtomicBool::new(false);

/// Exit status for a prompt aborted with Ctrl-C.
const INTERRUPTED_EXIT: i32 = 1;

/// Install the process-wide SIGINT handler. Call once, early in `main`.
pub fn install_interrupt_handler() {
    let installed = ctrlc::set_handler(|| {
        if PROMPTING.load(Ordering::SeqCst) {
            let _ = console::Term::stderr().show_cursor();
            std::process::exit(INTERRUPTED_EXIT);
        }
    });
    if let Err(e) = installed {
        tracing::debug!("Ctrl-C handler not installed: {e}");
    }
}

/// Marks the span during which Ctrl-C aborts the process.
struct PromptingGuard;

impl PromptingGuard {
    fn enter() -> Self {
        PROMPTING.store(true, Ordering::SeqCst);
        Self
    }
}

impl Drop for PromptingGuard {
    fn drop(&mut self) {
        PROMPTING.store(false, Ordering::SeqCst);
    }
}

/// Wraps another prompter so every question runs under [`PromptingGuard`].
pub struct GuardedPrompter<P> {
    inner: P,
}

impl<P: Prompter> GuardedPrompter<P> {
    pub fn new(inner: P) -> Self {
        Self { inner }
    }
}

impl<P: Prompter> Prompter for GuardedPrompter<P> {
    fn ask(&self, question: &Question) -> PyhatchResult<String> {
        let _guard = PromptingGuard::enter();
        self.inner.ask(question)
    }
}

/// Pick the prompter for this session: a styled terminal prompt when stdin
/// is a terminal, otherwise one line per answer from stdin.
pub fn session_prompter() -> Box<dyn Prompter> {
    #[cfg(feature = "interactive")]
    if io::stdin().is_terminal() {
        return Box::new(GuardedPrompter::new(TerminalPrompter::new()));
    }
    tracing::debug!(tty = io::stdin().is_terminal(), "Using line prompter");
    Box::new(GuardedPrompter::new(LinePrompter::stdio()))
}

/// `dialoguer` input prompt on stderr showing the default in brackets.
#[cfg(feature = "interactive")]
#[derive(Default)]
pub struct TerminalPrompter {
    theme: dialoguer::theme::ColorfulTheme,
}

#[cfg(feature = "interactive")]
impl TerminalPrompter {
    pub fn new() -> Self {
        Self::default()
    }
}

#[cfg(feature = "interactive")]
impl Prompter for TerminalPrompter {
    fn ask(&self, question: &Question) -> PyhatchResult<String> {
        let answer: String = dialoguer::Input::with_theme(&self.theme)
            .with_prompt(question.prompt_text())
            .default(question.default.clone())
            .show_default(!question.default.is_empty())
            .allow_empty(true)
            .interact_text()
            .map_err(prompt_error)?;
        Ok(answer.trim().to_string())
    }
}

#[cfg(feature = "interactive")]
fn prompt_error(err: dialoguer::Error) -> ApplicationError {
    match err {
        dialoguer::Error::IO(e) => io_prompt_error(e),
        #[allow(unreachable_patterns)]
        other => ApplicationError::PromptFailed {
            reason: other.to_string(),
        },
    }
}

/// End of input and an interrupted read both abort the prompt sequence.
fn io_prompt_error(e: io::Error) -> ApplicationError {
    match e.kind() {
        io::ErrorKind::UnexpectedEof | io::ErrorKind::Interrupted => ApplicationError::Interrupted,
        _ => ApplicationError::PromptFailed {
            reason: e.to_string(),
        },
    }
}
