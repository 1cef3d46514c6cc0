//! Line-oriented prompts over any `BufRead`/`Write` pair.
//!
//! # Invariants
//! - Every prompt is flushed before blocking on input.
//! - `Ok(None)` means input is exhausted; callers treat it as a request to exit.
//! - Malformed numbers never fault; they are reported and the same prompt repeats.

use std::io::{self, BufRead, Write};
use std::str::FromStr;

pub const INVALID_NUMBER_MESSAGE: &str = "Please enter a valid number.";

/// Interactive console bound to an input reader and an output writer.
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Writes one full line.
    pub fn say(&mut self, line: &str) -> io::Result<()> {
        writeln!(self.output, "{line}")
    }

    /// Prints `label` and reads one line of free text.
    pub fn prompt_text(&mut self, label: &str) -> io::Result<Option<String>> {
        write!(self.output, "{label}")?;
        self.output.flush()?;
        self.read_line()
    }

    /// Prints `label` and reads a number, repeating until the input parses.
    pub fn prompt_number<T: FromStr>(&mut self, label: &str) -> io::Result<Option<T>> {
        loop {
            let Some(line) = self.prompt_text(label)? else {
                return Ok(None);
            };
            match parse_number(&line) {
                Ok(value) => return Ok(Some(value)),
                Err(_) => self.say(INVALID_NUMBER_MESSAGE)?,
            }
        }
    }

    /// Reads one line without its terminator; `None` at end of input.
    pub fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        if line.ends_with('\n') {
            line.pop();
            if line.ends_with('\r') {
                line.pop();
            }
        }
        Ok(Some(line))
    }

    #[cfg(test)]
    pub fn into_output(self) -> W {
        self.output
    }
}

/// Parses a trimmed numeric field.
pub fn parse_number<T: FromStr>(raw: &str) -> Result<T, T::Err> {
    raw.trim().parse()
}
