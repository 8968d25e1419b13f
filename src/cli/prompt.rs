//! Interactive terminal prompts.

use anyhow::Result;
use owo_colors::OwoColorize;
use std::io::{self, BufRead, StdinLock, Stdout, Write};

/// Marker printed before reading a line
const INPUT_MARKER: &str = ": ";

/// Line-oriented prompt over any reader/writer pair.
pub struct Prompt<R, W> {
    input: R,
    output: W,
}

impl Prompt<StdinLock<'static>, Stdout> {
    /// Prompt on the process terminal.
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> Prompt<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Print a full message line.
    pub fn say(&mut self, message: &str) -> Result<()> {
        writeln!(self.output, "{message}")?;
        Ok(())
    }

    /// Read one line without its terminator. `None` at end of input.
    pub fn read_line(&mut self) -> Result<Option<String>> {
        write!(self.output, "{}", INPUT_MARKER.blue().bold())?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }

    /// Ask a `(y/N)` question. Only `y` or `Y` accepts.
    pub fn confirm(&mut self, question: &str) -> Result<bool> {
        self.say(question)?;
        Ok(self
            .read_line()?
            .is_some_and(|answer| answer.eq_ignore_ascii_case("y")))
    }

    #[cfg(test)]
    pub fn into_output(self) -> W {
        self.output
    }
}
