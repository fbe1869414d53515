//! Token-oriented reader over line-based input.

use std::io::BufRead;
use std::str::FromStr;

use crate::types::{GraphError, GraphResult};

/// Reads whitespace-separated tokens and rest-of-line text from any `BufRead`.
///
/// Tokens may span lines. A label is whatever follows the last token on the
/// current line, or the whole next line if nothing follows.
pub struct Prompter<R> {
    input: R,
    line: String,
    pos: usize,
}

impl<R: BufRead> Prompter<R> {
    pub fn new(input: R) -> Self {
        Self {
            input,
            line: String::new(),
            pos: 0,
        }
    }

    /// Replace the current line with the next one from input.
    fn fill(&mut self) -> GraphResult<()> {
        self.line.clear();
        self.pos = 0;
        if self.input.read_line(&mut self.line)? == 0 {
            return Err(GraphError::UnexpectedEof);
        }
        Ok(())
    }

    /// Next whitespace-separated token.
    pub fn next_token(&mut self) -> GraphResult<String> {
        loop {
            let rest = &self.line[self.pos..];
            let trimmed = rest.trim_start();
            if !trimmed.is_empty() {
                let start = self.pos + (rest.len() - trimmed.len());
                let len = trimmed
                    .find(char::is_whitespace)
                    .unwrap_or(trimmed.len());
                self.pos = start + len;
                return Ok(self.line[start..self.pos].to_owned());
            }
            self.fill()?;
        }
    }

    /// Next token parsed as an integer.
    pub fn next_int<T: FromStr>(&mut self) -> GraphResult<T> {
        let token = self.next_token()?;
        token
            .parse()
            .map_err(|_| GraphError::InvalidInteger(token))
    }

    /// Remainder of the current line, or the next line if the remainder is blank.
    pub fn rest_of_line(&mut self) -> GraphResult<String> {
        let rest = self.line[self.pos..].trim();
        if rest.is_empty() {
            self.fill()?;
        }
        let text = self.line[self.pos..].trim().to_owned();
        self.pos = self.line.len();
        Ok(text)
    }

    /// Drop whatever is left on the current line.
    pub fn discard_line(&mut self) {
        self.pos = self.line.len();
    }
}
