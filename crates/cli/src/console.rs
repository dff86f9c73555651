//! Line-oriented console wrapper over any reader and writer.
//!
//! Production code wraps locked stdin/stdout; tests wrap in-memory buffers.

use std::fmt::Display;
use std::io::{BufRead, Write};

use crate::error::CliError;
use crate::input::{BoundedIntError, parse_bounded_int};

/// A prompt-and-answer console.
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub const fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Give back the underlying reader and writer.
    pub fn into_parts(self) -> (R, W) {
        (self.input, self.output)
    }

    /// Write one line.
    ///
    /// # Errors
    ///
    /// Returns an error if writing fails.
    pub fn say(&mut self, line: impl Display) -> Result<(), CliError> {
        writeln!(self.output, "{line}")?;
        Ok(())
    }

    /// Write text without a newline and flush so it shows before input.
    ///
    /// # Errors
    ///
    /// Returns an error if writing fails.
    pub fn prompt(&mut self, text: &str) -> Result<(), CliError> {
        write!(self.output, "{text}")?;
        self.output.flush()?;
        Ok(())
    }

    /// Read one line without its line terminator.
    ///
    /// # Errors
    ///
    /// Returns [`CliError::InputClosed`] at end of input.
    pub fn read_line(&mut self) -> Result<String, CliError> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(CliError::InputClosed);
        }

        let trimmed_len = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed_len);
        Ok(line)
    }

    /// Prompt, then read one line.
    ///
    /// # Errors
    ///
    /// Returns an error if writing fails or input is closed.
    pub fn ask(&mut self, text: &str) -> Result<String, CliError> {
        self.prompt(text)?;
        self.read_line()
    }

    /// Prompt, then read lines until one holds something other than
    /// whitespace.
    ///
    /// # Errors
    ///
    /// Returns an error if writing fails or input is closed.
    pub fn ask_nonblank(&mut self, text: &str) -> Result<String, CliError> {
        self.prompt(text)?;
        loop {
            let line = self.read_line()?;
            if !line.trim().is_empty() {
                return Ok(line);
            }
        }
    }

    /// Read an integer in `[min, max]`, asking again until one is given.
    ///
    /// Blank lines are skipped silently. Any other bad line prints the valid
    /// range and waits for another try.
    ///
    /// # Errors
    ///
    /// Returns an error if writing fails or input is closed.
    pub fn read_bounded_int(&mut self, min: u32, max: u32) -> Result<u32, CliError> {
        loop {
            let line = self.read_line()?;
            match parse_bounded_int(&line, min, max) {
                Ok(value) => return Ok(value),
                Err(BoundedIntError::Empty) => {}
                Err(err) => {
                    tracing::debug!(%err, "Rejected numeric input");
                    self.prompt(&format!(
                        "Invalid input. Please enter a number between {min} and {max}: "
                    ))?;
                }
            }
        }
    }

    /// Prompt, then read an integer in `[min, max]`.
    ///
    /// # Errors
    ///
    /// Returns an error if writing fails or input is closed.
    pub fn ask_bounded_int(&mut self, text: &str, min: u32, max: u32) -> Result<u32, CliError> {
        self.prompt(text)?;
        self.read_bounded_int(min, max)
    }
}
