//! Line-oriented prompts over any reader/writer pair.
//!
//! The binary wires this to stdin/stdout; tests drive it with in-memory
//! buffers.

use std::io::{self, BufRead, StdinLock, Stdout, Write};

use crate::error::PromptError;
use crate::model::{Lift, LiftSelection, Outcome};

const OUTCOME_PROMPT: &str = "\nDid you fail this test? (y/n/skip): ";
const INVALID_OUTCOME: &str = "Invalid response. Please enter 'y', 'n', or 'skip'.";

/// Prompts on `output` and reads answers from `input`.
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl Console<StdinLock<'static>, Stdout> {
    /// A console bound to the process's standard input and output.
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Writer for non-prompt output.
    pub fn output(&mut self) -> &mut W {
        &mut self.output
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Print `prompt` without a newline and read one line of input.
    ///
    /// The returned answer has its line terminator removed. Bytes that are
    /// not valid UTF-8 are replaced, so such a line is just an answer nobody
    /// recognises.
    pub fn ask(&mut self, prompt: &str) -> Result<String, PromptError> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;

        let mut line = Vec::new();
        if self.input.read_until(b'\n', &mut line)? == 0 {
            return Err(PromptError::InputClosed {
                prompt: prompt.trim().to_string(),
            });
        }
        Ok(String::from_utf8_lossy(&line)
            .trim_end_matches(['\r', '\n'])
            .to_string())
    }

    /// Ask a yes/no question. Anything other than `y` counts as no.
    pub fn confirm(&mut self, prompt: &str) -> Result<bool, PromptError> {
        let answer = self.ask(prompt)?;
        Ok(answer.trim().eq_ignore_ascii_case("y"))
    }

    /// Ask about each lift in turn and collect the ones confirmed.
    pub fn select_lifts(&mut self) -> Result<LiftSelection, PromptError> {
        writeln!(self.output, "\n=== LIFT SELECTION ===\n")?;
        writeln!(self.output, "Which lift(s) will you be performing today?")?;

        let mut selection = LiftSelection::new();
        for lift in Lift::ALL {
            if self.confirm(&format!("{}? (y/n): ", lift.title()))? {
                selection.insert(lift);
            }
        }

        tracing::debug!(lifts = %selection, "lifts selected");
        Ok(selection)
    }

    /// Ask whether the current test was failed, re-asking until the answer
    /// is `y`, `n` or `skip`.
    pub fn ask_outcome(&mut self) -> Result<Outcome, PromptError> {
        loop {
            let answer = self.ask(OUTCOME_PROMPT)?;
            match answer.parse::<Outcome>() {
                Ok(outcome) => return Ok(outcome),
                Err(_) => writeln!(self.output, "{INVALID_OUTCOME}")?,
            }
        }
    }
}
