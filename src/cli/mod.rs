//! Terminal front end: prompts, rendering and the interactive game loop.

pub(crate) mod play;
mod render;

use std::error::Error;
use std::fmt;
use std::io::{BufRead, Write};
use std::time::Duration;

use rock_tcg::SetupError;

/// CLI error type.
#[derive(Debug)]
pub(crate) struct CliError {
    message: String,
}

impl CliError {
    /// Create a new CLI error.
    pub(crate) fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl Error for CliError {}

impl From<std::io::Error> for CliError {
    fn from(e: std::io::Error) -> Self {
        Self::new(e.to_string())
    }
}

impl From<SetupError> for CliError {
    fn from(e: SetupError) -> Self {
        Self::new(e.to_string())
    }
}

/// Line-oriented terminal I/O.
///
/// Generic over reader and writer so the game loop can be driven from a
/// script in tests.
pub(crate) struct Console<R, W> {
    input: R,
    output: W,
    delay: Duration,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub(crate) fn new(input: R, output: W, delay: Duration) -> Self {
        Self {
            input,
            output,
            delay,
        }
    }

    /// Print one line.
    pub(crate) fn say(&mut self, text: impl fmt::Display) -> Result<(), CliError> {
        writeln!(self.output, "{text}")?;
        Ok(())
    }

    /// Prompt and read one trimmed line. `None` at end of input.
    pub(crate) fn ask(&mut self, prompt: &str) -> Result<Option<String>, CliError> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    /// Pause between the computer's actions.
    pub(crate) fn wait(&self) {
        if !self.delay.is_zero() {
            std::thread::sleep(self.delay);
        }
    }

    #[cfg(test)]
    pub(crate) fn into_output(self) -> W {
        self.output
    }
}
