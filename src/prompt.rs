//! Single-line question and echo.
//!
//! Both `newyear ask` and the wish prompt that closes the fireworks show
//! are an [`Exchange`]: print a question, read one line, echo it back
//! behind a fixed prefix.

use std::io::{self, BufRead, Write};

use serde::{Deserialize, Serialize};

/// A question and the prefix used to echo its answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Exchange {
    /// Printed as-is before reading (no newline is added)
    pub question: String,
    /// Printed before the answer on the echo line
    pub reply_prefix: String,
}

impl Exchange {
    pub fn new(question: impl Into<String>, reply_prefix: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            reply_prefix: reply_prefix.into(),
        }
    }

    /// The `ask` exchange.
    pub fn height() -> Self {
        Self::new("What is the height of Jonathan? ", "Jonathan's height is ")
    }

    /// The exchange that closes the fireworks show.
    pub fn wish() -> Self {
        Self::new("Enter your wish: ", "your wish is: ")
    }

    /// Ask the question, read exactly one line and echo it.
    ///
    /// Only the first line is consumed from `input`. A closed stream yields
    /// an empty answer.
    ///
    /// # Returns
    /// The answer without its line ending
    pub fn run<R, W>(&self, input: &mut R, output: &mut W) -> io::Result<String>
    where
        R: BufRead + ?Sized,
        W: Write + ?Sized,
    {
        write!(output, "{}", self.question)?;
        output.flush()?;

        let mut line = String::new();
        let read = input.read_line(&mut line)?;
        if read == 0 {
            tracing::debug!("input closed before an answer was given");
        }
        let answer = strip_line_ending(&line).to_string();

        writeln!(output, "{}", self.echo(&answer))?;
        output.flush()?;
        Ok(answer)
    }

    /// The echo line for an answer (without trailing newline).
    pub fn echo(&self, answer: &str) -> String {
        format!("{}{}", self.reply_prefix, answer)
    }
}

/// Strip a single trailing `\n` or `\r\n`.
fn strip_line_ending(line: &str) -> &str {
    let line = line.strip_suffix('\n').unwrap_or(line);
    line.strip_suffix('\r').unwrap_or(line)
}
