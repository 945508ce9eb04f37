//! Line-oriented prompt helpers.
//!
//! # Responsibility
//! - Write prompts, read answers, re-prompt on invalid answers.
//! - Turn end-of-input into a distinct error so the session can end cleanly.

use std::error::Error;
use std::fmt::{Display, Formatter};
use std::io::{self, BufRead, Write};

pub type ConsoleResult<T> = Result<T, ConsoleError>;

#[derive(Debug)]
pub enum ConsoleError {
    /// Input reached EOF while waiting for an answer.
    InputClosed,
    Io(io::Error),
}

impl Display for ConsoleError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InputClosed => write!(f, "input closed"),
            Self::Io(err) => write!(f, "console i/o failed: {err}"),
        }
    }
}

impl Error for ConsoleError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::InputClosed => None,
            Self::Io(err) => Some(err),
        }
    }
}

impl From<io::Error> for ConsoleError {
    fn from(value: io::Error) -> Self {
        Self::Io(value)
    }
}

pub struct Prompter<I, O> {
    input: I,
    output: O,
}

impl<I: BufRead, O: Write> Prompter<I, O> {
    pub fn new(input: I, output: O) -> Self {
        Self { input, output }
    }

    pub fn into_output(self) -> O {
        self.output
    }

    /// Writes one line of output.
    pub fn say(&mut self, text: &str) -> ConsoleResult<()> {
        writeln!(self.output, "{text}")?;
        Ok(())
    }

    /// Prints `label: ` and returns the answer without its line ending.
    pub fn ask(&mut self, label: &str) -> ConsoleResult<String> {
        write!(self.output, "{label}: ")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(ConsoleError::InputClosed);
        }
        let trimmed_len = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed_len);
        Ok(line)
    }

    /// Like [`Prompter::ask`], but an empty answer yields `current`.
    pub fn ask_with_default(&mut self, label: &str, current: &str) -> ConsoleResult<String> {
        let answer = self.ask(&format!("{label} [{current}]"))?;
        if answer.trim().is_empty() {
            return Ok(current.to_string());
        }
        Ok(answer)
    }

    /// Re-asks until `accept` returns true, printing `hint` after each
    /// rejected answer.
    pub fn ask_until(
        &mut self,
        label: &str,
        hint: &str,
        accept: impl Fn(&str) -> bool,
    ) -> ConsoleResult<String> {
        loop {
            let answer = self.ask(label)?;
            if accept(answer.as_str()) {
                return Ok(answer);
            }
            self.say(hint)?;
        }
    }

    /// Shows a numbered menu and returns the zero-based index of the choice.
    pub fn choose(&mut self, title: &str, options: &[&str]) -> ConsoleResult<usize> {
        self.say(title)?;
        for (index, option) in options.iter().enumerate() {
            self.say(&format!("  {}. {option}", index + 1))?;
        }
        let range_hint = format!("Please enter a number from 1 to {}.", options.len());
        let answer = self.ask_until("Choice", range_hint.as_str(), |answer| {
            parse_choice(answer, options.len()).is_some()
        })?;
        Ok(parse_choice(answer.as_str(), options.len()).unwrap_or_default())
    }

    /// Asks a yes/no question; anything but y/yes counts as no.
    pub fn confirm(&mut self, label: &str) -> ConsoleResult<bool> {
        let answer = self.ask(&format!("{label} (y/n)"))?;
        Ok(matches!(
            answer.trim().to_lowercase().as_str(),
            "y" | "yes"
        ))
    }
}

/// Parses a 1-based menu number into a 0-based index below `count`.
pub fn parse_choice(answer: &str, count: usize) -> Option<usize> {
    let number = answer.trim().parse::<usize>().ok()?;
    (1..=count).contains(&number).then(|| number - 1)
}
