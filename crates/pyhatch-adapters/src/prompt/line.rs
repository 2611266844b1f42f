//! Line-oriented prompter over any reader/writer pair.

use std::cell::RefCell;
use std::io::{self, BufRead, Write};

use pyhatch_core::{
    application::{
        ApplicationError,
        ports::{Prompter, Question},
    },
    error::PyhatchResult,
};

/// Writes `question <label> [default] (options: ...): ` and reads one line.
///
/// Used when stdin is not a terminal (piped answers) and in tests. End of
/// input is reported as `ApplicationError::Interrupted`.
pub struct LinePrompter<R, W> {
    reader: RefCell<R>,
    writer: RefCell<W>,
}

impl<R: BufRead, W: Write> LinePrompter<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self {
            reader: RefCell::new(reader),
            writer: RefCell::new(writer),
        }
    }

    /// Give back the writer, e.g. to inspect what was printed.
    pub fn into_writer(self) -> W {
        self.writer.into_inner()
    }
}

impl LinePrompter<io::StdinLock<'static>, io::Stderr> {
    /// Prompts on stderr so stdout stays clean for piping.
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stderr())
    }
}

fn line_text(question: &Question) -> String {
    if question.options.is_empty() {
        format!("question {} ({}): ", question.label, question.default)
    } else {
        format!(
            "question {} ({}) (options: {}): ",
            question.label,
            question.default,
            question.options.join(", ")
        )
    }
}

fn read_failed(e: io::Error) -> ApplicationError {
    ApplicationError::PromptFailed {
        reason: e.to_string(),
    }
}

impl<R: BufRead, W: Write> Prompter for LinePrompter<R, W> {
    fn ask(&self, question: &Question) -> PyhatchResult<String> {
        {
            let mut writer = self.writer.borrow_mut();
            writer
                .write_all(line_text(question).as_bytes())
                .map_err(read_failed)?;
            writer.flush().map_err(read_failed)?;
        }

        let mut line = String::new();
        let read = self
            .reader
            .borrow_mut()
            .read_line(&mut line)
            .map_err(read_failed)?;
        if read == 0 {
            return Err(ApplicationError::Interrupted.into());
        }

        Ok(line.trim().to_string())
    }
}
