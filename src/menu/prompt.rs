// Line-oriented terminal I/O, generic so tests can script it.

use crate::error::{HubError, Result};
use std::fmt::Display;
use std::io::{BufRead, Write};

pub struct Prompt<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompt<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Print `label` without a newline and read one line back.
    ///
    /// The line ending is stripped; other whitespace is left for the caller.
    /// Bytes that aren't UTF-8 become U+FFFD rather than an error.
    /// End of input is `HubError::InputClosed`.
    pub fn ask(&mut self, label: &str) -> Result<String> {
        write!(self.output, "{}", label)?;
        self.output.flush()?;

        let mut line = Vec::new();
        if self.input.read_until(b'\n', &mut line)? == 0 {
            return Err(HubError::InputClosed);
        }

        let line = String::from_utf8_lossy(&line);
        Ok(line.trim_end_matches(&['\r', '\n'][..]).to_string())
    }

    /// Print one line
    pub fn say(&mut self, text: impl Display) -> Result<()> {
        writeln!(self.output, "{}", text)?;
        Ok(())
    }
}
