//! # Terminal Input Helper
//!
//! This module provides utilities for interacting with a line-oriented
//! terminal. A [`Terminal`] repeatedly prompts the user until the answer
//! satisfies the provided validation filters, printing the reason of every
//! rejection before asking again.
//!
//! The reader and writer are generic, so the same prompt loops run against
//! stdin/stdout in the binary and against in-memory buffers in tests.
//!
//! ## Features
//! - Continuously prompts the user until valid input is received.
//! - Supports multiple validation rules simultaneously (see [`Sanitize`]).
//! - Optional [`RetryPolicy`]: a cancel token and/or a maximum number of
//!   rejected answers.
//! - Every loop ends in a tagged [`Outcome`]: a value, an abort or an
//!   exhausted input.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use tinkerbox::utils::{Outcome, Sanitize, Terminal};
//!
//! let mut terminal = Terminal::stdio();
//! match terminal.ask("Select an option (1-4):", &[Sanitize::IsBetween(1, 4)]) {
//!     Outcome::Value(answer) => println!("The input: {}", answer),
//!     Outcome::Aborted | Outcome::Exhausted => println!("Bye"),
//! }
//! ```
//!
//! ### Driving a terminal from memory
//!
//! ```rust
//! use std::io::Cursor;
//! use tinkerbox::utils::{Outcome, Sanitize, Terminal};
//!
//! let mut terminal = Terminal::new(Cursor::new("nine\n9\n"), Vec::new());
//! let answer = terminal.ask("Pick a number:", &[Sanitize::IsBetween(1, 10)]);
//! assert_eq!(answer, Outcome::Value("9".to_string()));
//! ```

use crate::utils::sanitize::{FilterError, Sanitize};
use std::fmt::Display;
use std::io::{self, BufRead, StdinLock, Stdout, Write};
use tracing::{debug, warn};

/// Result of a prompt loop.
#[must_use]
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome<T> {
    /// The answer passed every check.
    Value(T),
    /// The user explicitly walked away (an "Exit" entry or the cancel token).
    Aborted,
    /// The loop gave up: too many rejected answers, or the input ended.
    Exhausted,
}

impl<T> Outcome<T> {
    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> Outcome<U> {
        match self {
            Outcome::Value(value) => Outcome::Value(f(value)),
            Outcome::Aborted => Outcome::Aborted,
            Outcome::Exhausted => Outcome::Exhausted,
        }
    }

    pub fn and_then<U, F: FnOnce(T) -> Outcome<U>>(self, f: F) -> Outcome<U> {
        match self {
            Outcome::Value(value) => f(value),
            Outcome::Aborted => Outcome::Aborted,
            Outcome::Exhausted => Outcome::Exhausted,
        }
    }

    pub fn value(self) -> Option<T> {
        match self {
            Outcome::Value(value) => Some(value),
            _ => None,
        }
    }

    pub fn is_value(&self) -> bool {
        matches!(self, Outcome::Value(_))
    }
}

/// What a custom check decided about one answer.
///
/// Used with [`Terminal::ask_with`].
#[derive(Debug, Clone, PartialEq)]
pub enum Verdict<T> {
    /// Stop asking and return this value.
    Accept(T),
    /// Print the error, count a rejected attempt, ask again.
    Reject(FilterError),
    /// Print the text and ask again without counting an attempt.
    Show(String),
}

impl<T> From<Result<T, FilterError>> for Verdict<T> {
    fn from(result: Result<T, FilterError>) -> Self {
        match result {
            Ok(value) => Verdict::Accept(value),
            Err(e) => Verdict::Reject(e),
        }
    }
}

/// When a prompt loop may stop without a valid answer.
///
/// The default never stops: no cancel token and no attempt limit.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RetryPolicy {
    max_attempts: Option<usize>,
    cancel_token: Option<String>,
}

impl RetryPolicy {
    pub fn unlimited() -> Self {
        Self::default()
    }

    /// Gives up with [`Outcome::Exhausted`] after `attempts` rejected answers.
    pub fn max_attempts(mut self, attempts: usize) -> Self {
        self.max_attempts = Some(attempts);
        self
    }

    /// Typing `token` (any case) at any prompt yields [`Outcome::Aborted`].
    pub fn cancel_with(mut self, token: impl Into<String>) -> Self {
        self.cancel_token = Some(token.into());
        self
    }

    fn is_cancel(&self, answer: &str) -> bool {
        self.cancel_token
            .as_deref()
            .is_some_and(|token| answer.eq_ignore_ascii_case(token))
    }

    fn is_exhausted(&self, rejected: usize) -> bool {
        self.max_attempts.is_some_and(|max| rejected >= max)
    }
}

/// A line-oriented prompt over any reader/writer pair.
pub struct Terminal<R, W> {
    reader: R,
    writer: W,
    policy: RetryPolicy,
}

impl Terminal<StdinLock<'static>, Stdout> {
    /// Terminal bound to the process stdin and stdout.
    pub fn stdio() -> Self {
        Terminal::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> Terminal<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Terminal {
            reader,
            writer,
            policy: RetryPolicy::default(),
        }
    }

    pub fn with_policy(mut self, policy: RetryPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn writer(&self) -> &W {
        &self.writer
    }

    /// Writes one line of output.
    ///
    /// A broken output stream is logged and otherwise ignored: the session
    /// keeps reading input so it can still terminate normally.
    pub fn say(&mut self, line: impl Display) {
        if let Err(e) = writeln!(self.writer, "{}", line) {
            warn!(error = %e, "couldn't write to the terminal");
        }
    }

    /// Reads one raw line.
    ///
    /// `None` once the input is closed or fails. A line that isn't valid
    /// UTF-8 has already been consumed by the reader, so it comes back as a
    /// [`FilterError::NotText`] the caller can reject and ask again.
    pub fn read_answer(&mut self) -> Option<Result<String, FilterError>> {
        if let Err(e) = self.writer.flush() {
            warn!(error = %e, "couldn't flush the terminal");
        }

        let mut answer = String::new();
        match self.reader.read_line(&mut answer) {
            Ok(0) => {
                debug!("input closed");
                None
            }
            Ok(_) => Some(Ok(answer)),
            Err(e) if e.kind() == io::ErrorKind::InvalidData => Some(Err(FilterError::NotText)),
            Err(e) => {
                warn!(error = %e, "couldn't read line");
                None
            }
        }
    }

    /// Prints a question and loops until `check` accepts the trimmed answer.
    ///
    /// The cancel token, when configured, is looked at before `check` runs.
    pub fn ask_with<T, F>(&mut self, question: &str, mut check: F) -> Outcome<T>
    where
        F: FnMut(&str) -> Verdict<T>,
    {
        let mut rejected = 0;

        loop {
            self.say(question);
            let raw = match self.read_answer() {
                Some(Ok(raw)) => raw,
                Some(Err(e)) => {
                    if self.reject(question, "", &e, &mut rejected) {
                        return Outcome::Exhausted;
                    }
                    continue;
                }
                None => return Outcome::Exhausted,
            };
            let answer = raw.trim();

            if self.policy.is_cancel(answer) {
                debug!(question, "prompt cancelled");
                return Outcome::Aborted;
            }

            match check(answer) {
                Verdict::Accept(value) => return Outcome::Value(value),
                Verdict::Show(text) => self.say(text),
                Verdict::Reject(e) => {
                    if self.reject(question, answer, &e, &mut rejected) {
                        return Outcome::Exhausted;
                    }
                }
            }
        }
    }

    /// Reports a rejected answer. `true` once the policy gives up.
    fn reject(
        &mut self,
        question: &str,
        answer: &str,
        e: &FilterError,
        rejected: &mut usize,
    ) -> bool {
        debug!(question, answer, error = %e, "answer rejected");
        self.say(e);
        *rejected += 1;

        if self.policy.is_exhausted(*rejected) {
            self.say("Too many invalid attempts, giving up.");
            return true;
        }
        false
    }

    /// Prints a question and loops until the answer passes all [`Sanitize`] filters.
    /// Returns the trimmed answer.
    pub fn ask(&mut self, question: &str, filters: &[Sanitize]) -> Outcome<String> {
        self.ask_with(question, |answer| Verdict::from(Sanitize::execute(answer, filters)))
    }

    /// Prints a titled, numbered menu and returns the 1-based index picked.
    pub fn menu(&mut self, title: &str, options: &[&str]) -> Outcome<usize> {
        self.say(title);
        for (index, option) in options.iter().enumerate() {
            self.say(format_args!("{}. {}", index + 1, option));
        }

        let filters = [Sanitize::IsBetween(1, options.len() as isize)];
        self.ask_with("Select an option:", |answer| {
            Verdict::from(Sanitize::execute(answer, &filters).and_then(|clean| {
                clean
                    .parse::<usize>()
                    .map_err(|_| FilterError::OutOfChoices(1, options.len() as isize))
            }))
        })
    }
}
