//! Line-oriented prompts for the interactive calculator.
//!
//! Every read re-prompts until the line parses. Typing `q` or reaching end
//! of input abandons the read with [`PromptError::Cancelled`], which callers
//! propagate with `?` back to the menu.

use std::io::{self, BufRead, Write};
use thiserror::Error;
use tracing::trace;

use crate::input::check_value;

/// Reasons a prompt returns without a value.
#[derive(Error, Debug)]
pub enum PromptError {
    #[error("input cancelled")]
    Cancelled,

    #[error(transparent)]
    Io(#[from] io::Error),
}

pub type PromptResult<T> = std::result::Result<T, PromptError>;

/// Reads answers from `R` and writes prompts to `W`.
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Sink for everything that isn't a prompt.
    pub fn out(&mut self) -> &mut W {
        &mut self.output
    }

    pub fn into_output(self) -> W {
        self.output
    }

    fn read_line(&mut self, prompt: &str) -> PromptResult<String> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            trace!(prompt, "end of input");
            return Err(PromptError::Cancelled);
        }
        let line = line.trim();
        if line.eq_ignore_ascii_case("q") {
            return Err(PromptError::Cancelled);
        }
        Ok(line.to_string())
    }

    /// Reads an integer, re-prompting on anything else.
    pub fn read_int(&mut self, prompt: &str) -> PromptResult<i64> {
        loop {
            let line = self.read_line(prompt)?;
            match line.parse::<i64>() {
                Ok(value) => return Ok(value),
                Err(_) => writeln!(self.output, "Enter a valid integer.")?,
            }
        }
    }

    /// Reads an integer in `min..=max`.
    pub fn read_int_in_range(&mut self, prompt: &str, min: i64, max: i64) -> PromptResult<i64> {
        loop {
            let value = self.read_int(prompt)?;
            if (min..=max).contains(&value) {
                return Ok(value);
            }
            writeln!(self.output, "Value must be between {min} and {max}.")?;
        }
    }

    /// Reads a matrix element: a finite number inside the accepted range.
    pub fn read_value(&mut self, prompt: &str) -> PromptResult<f64> {
        loop {
            let line = self.read_line(prompt)?;
            let Ok(value) = line.parse::<f64>() else {
                writeln!(self.output, "Enter a valid number.")?;
                continue;
            };
            match check_value(value) {
                Ok(value) => return Ok(value),
                Err(reason) => writeln!(self.output, "{reason}.")?,
            }
        }
    }
}
