//! Line-based console used by every interactive prompt.

use crate::errors::AppResult;
use crate::ui::messages::warning;
use std::io::{self, BufRead, StdinLock, Stdout, Write};

pub struct Console<R, W> {
    input: R,
    out: W,
}

/// Console bound to the process' stdin/stdout.
pub fn stdio() -> Console<StdinLock<'static>, Stdout> {
    Console::new(io::stdin().lock(), io::stdout())
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, out: W) -> Self {
        Self { input, out }
    }

    pub fn out(&mut self) -> &mut W {
        &mut self.out
    }

    pub fn into_output(self) -> W {
        self.out
    }

    /// Print `prompt` and read one line, trimmed.
    /// Returns `None` once the input is exhausted.
    pub fn ask(&mut self, prompt: &str) -> AppResult<Option<String>> {
        write!(self.out, "{prompt}")?;
        self.out.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            writeln!(self.out)?;
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    /// Ask `prompt` until `parse` accepts the answer. Rejected answers print
    /// `invalid` and the prompt repeats; there is no retry limit.
    pub fn ask_until<T>(
        &mut self,
        prompt: &str,
        invalid: &str,
        parse: impl Fn(&str) -> Option<T>,
    ) -> AppResult<Option<T>> {
        loop {
            let Some(answer) = self.ask(prompt)? else {
                return Ok(None);
            };
            if let Some(v) = parse(&answer) {
                return Ok(Some(v));
            }
            writeln!(self.out)?;
            warning(&mut self.out, invalid)?;
            writeln!(self.out)?;
        }
    }

    /// `true` when the answer is exactly `word` (case-insensitive).
    pub fn answer_is(&mut self, prompt: &str, word: &str) -> AppResult<Option<bool>> {
        Ok(self.ask(prompt)?.map(|a| a.eq_ignore_ascii_case(word)))
    }
}
