use std::{
    fmt::Debug,
    io::{BufRead, Write},
    str::FromStr,
};

use crate::prelude::*;

/// Line-based questions with a fallback answer.
pub struct Prompt<R, W> {
    input: R,
    output: W,
    is_enabled: bool,
}

impl<R: BufRead, W: Write> Prompt<R, W> {
    /// Disabled prompt never asks and always takes the fallback.
    pub const fn new(input: R, output: W, is_enabled: bool) -> Self {
        Self { input, output, is_enabled }
    }

    pub fn ask_unless_given<T: FromStr + Debug>(
        &mut self,
        given: Option<T>,
        question: &str,
        fallback: T,
    ) -> Result<T> {
        match given {
            Some(value) => Ok(value),
            None => self.ask(question, fallback),
        }
    }

    /// Ask the question and parse the answer.
    ///
    /// Empty, unreadable, or unparsable answers yield the fallback.
    pub fn ask<T: FromStr + Debug>(&mut self, question: &str, fallback: T) -> Result<T> {
        if !self.is_enabled {
            return Ok(fallback);
        }
        write!(self.output, "{question}")?;
        self.output.flush()?;

        let mut answer = String::new();
        if let Err(error) = self.input.read_line(&mut answer) {
            debug!(?fallback, "failed to read the answer: {error:#}");
            return Ok(fallback);
        }
        let answer = answer.trim();
        // Decimal answers are accepted, not only whole numbers.
        if let Ok(value) = answer.parse() {
            Ok(value)
        } else {
            debug!(answer, ?fallback, "falling back");
            Ok(fallback)
        }
    }
}
