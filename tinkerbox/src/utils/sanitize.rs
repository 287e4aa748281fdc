//! # Input Sanitization & Validation
//!
//! This module provides a small, composable validation framework for
//! interactive CLI prompts. It defines a set of filters (`Sanitize`) that
//! are applied to the raw line a user typed. Filters run in order on the
//! trimmed input and short-circuit on the first failure, returning a
//! [`FilterError`] whose message is printed back to the user before the
//! prompt is repeated.
//!
//! ## Features
//! - Type validation for the values the toolbox asks for via [`DesiredType`]
//! - Lower bound (`> 0`) and upper bound (`<= max`) checks for real numbers
//! - Whole number checks for counts and quantities
//! - Inclusive range validation for numbered menus with [`Sanitize::IsBetween`]
//! - Human-readable error messages for every rejected answer
//!
//! ## Error taxonomy
//!
//! | Variant                       | Kind            |
//! |-------------------------------|-----------------|
//! | [`FilterError::Format`]       | format error    |
//! | [`FilterError::NotPositive`]  | range error     |
//! | [`FilterError::AboveMax`]     | range error     |
//! | [`FilterError::NotWhole`]     | integrality     |
//! | [`FilterError::OutOfChoices`] | selection error |
//! | [`FilterError::UnknownName`]  | selection error |
//! | [`FilterError::Empty`]        | format error    |
//!
//! None of them ever leaves the prompt loop: [`crate::utils::Terminal`]
//! prints them and asks again.
//!
//! ## Examples
//!
//! ### Validate a bounded real number
//! ```rust,no_run
//! use tinkerbox::utils::{DesiredType, Sanitize, Terminal};
//!
//! let mut terminal = Terminal::stdio();
//! let hours = terminal.ask(
//!     "Enter the hours used per day:",
//!     &[
//!         Sanitize::IsType(DesiredType::F64),
//!         Sanitize::IsPositive,
//!         Sanitize::AtMost(24.0),
//!     ],
//! );
//! println!("Accepted: {:?}", hours);
//! ```
//!
//! ### Validate a menu choice
//! ```rust,no_run
//! use tinkerbox::utils::{Sanitize, Terminal};
//!
//! let mut terminal = Terminal::stdio();
//! let choice = terminal.ask("Select an option (1-4):", &[Sanitize::IsBetween(1, 4)]);
//! println!("Picked: {:?}", choice);
//! ```
use std::fmt::Display;
use thiserror::Error;

/// Represents a validation filter that can be applied to user input.
///
/// - `IsType`: the input can be parsed into a certain [`DesiredType`].
/// - `IsPositive`: the input is a real number strictly greater than zero.
/// - `AtMost`: the input is a real number lower than or equal to the bound.
/// - `IsWhole`: the input is a real number without a fractional part.
/// - `IsBetween`: the input is an integer within the inclusive range `[min, max]`.
/// - `NotEmpty`: the input holds at least one non-whitespace character.
#[derive(Debug, Clone, PartialEq)]
pub enum Sanitize {
    IsType(DesiredType),
    IsPositive,
    AtMost(f64),
    IsWhole,
    IsBetween(isize, isize),
    NotEmpty,
}

/// Any type that implements this can validate a trimmed input and return
/// either `Ok(())` or the [`FilterError`] describing the rejection.
trait Validate {
    fn validate(&self, input: &str) -> Result<(), FilterError>;
}

/// Why an answer was rejected.
///
/// Every variant renders as a single line that is shown to the user
/// right before the question is asked again.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FilterError {
    /// Could not be parsed as the expected type.
    #[error("Invalid format, the value is not {0}. Please try again!")]
    Format(DesiredType),

    /// Parsed, but zero or negative.
    #[error("Value must be greater than 0, try again!")]
    NotPositive,

    /// Parsed, but above the inclusive upper bound.
    #[error("Value must be between 0 and {0}, try again!")]
    AboveMax(f64),

    /// Parsed, but carries a fractional part where a count was expected.
    #[error("Value must be a whole number, try again!")]
    NotWhole,

    /// Index outside the numbered options on screen.
    #[error("Invalid choice, please pick a number between {0} and {1}.")]
    OutOfChoices(isize, isize),

    /// Name not present in the list on screen.
    #[error("'{0}' is not on the list. Type one of the names shown, or 'list' to see them again.")]
    UnknownName(String),

    #[error("The value can't be empty, try again!")]
    Empty,

    /// The line read from the terminal isn't valid UTF-8.
    #[error("The answer isn't valid text, try again!")]
    NotText,
}

/// Validates that an input parses into `$t`, optionally running an extra
/// acceptance predicate on the parsed value.
///
/// # Example
/// ```rust,ignore
/// let input = "42";
/// check_type!(input, isize, Err(FilterError::Format(DesiredType::Isize)));
/// check_type!(input, f64, f64::is_finite, Err(FilterError::Format(DesiredType::F64)));
/// ```
macro_rules! check_type {
    ($input:expr, $t:ty, $err:expr) => {
        match $input.parse::<$t>() {
            Ok(_) => Ok(()),
            Err(_) => $err,
        }
    };
    ($input:expr, $t:ty, $accept:expr, $err:expr) => {
        match $input.parse::<$t>() {
            Ok(value) if $accept(value) => Ok(()),
            _ => $err,
        }
    };
}

impl Sanitize {
    /// Executes all provided filters against the given answer.
    ///
    /// - Trims whitespace before validation.
    /// - Stops and returns the first error encountered.
    /// - Returns the cleaned string if all filters pass.
    pub fn execute(answer: &str, filters: &[Sanitize]) -> Result<String, FilterError> {
        let clean_answer = answer.trim();

        for filter in filters {
            filter.validate(clean_answer)?;
        }
        Ok(clean_answer.to_string())
    }
}

/// Parses a trimmed answer as a finite real number.
///
/// `NaN` and the infinities parse fine with [`str::parse`] but are not
/// something a user can meaningfully mean by a price or a rating, so they
/// are reported as format errors.
pub(crate) fn parse_number(input: &str) -> Result<f64, FilterError> {
    match input.trim().parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(FilterError::Format(DesiredType::F64)),
    }
}

impl Validate for Sanitize {
    fn validate(&self, input: &str) -> Result<(), FilterError> {
        match self {
            Sanitize::IsType(ty) => ty.parse(input),
            Sanitize::IsPositive => {
                if parse_number(input)? > 0.0 {
                    Ok(())
                } else {
                    Err(FilterError::NotPositive)
                }
            }
            Sanitize::AtMost(max) => {
                if parse_number(input)? <= *max {
                    Ok(())
                } else {
                    Err(FilterError::AboveMax(*max))
                }
            }
            Sanitize::IsWhole => {
                if parse_number(input)?.fract() == 0.0 {
                    Ok(())
                } else {
                    Err(FilterError::NotWhole)
                }
            }
            Sanitize::IsBetween(n1, n2) => {
                DesiredType::Isize.parse(input)?;
                let input_parsed: isize = input.parse().unwrap_or_default();
                if input_parsed >= *n1 && input_parsed <= *n2 {
                    Ok(())
                } else {
                    Err(FilterError::OutOfChoices(*n1, *n2))
                }
            }
            Sanitize::NotEmpty => {
                if input.trim().is_empty() {
                    Err(FilterError::Empty)
                } else {
                    Ok(())
                }
            }
        }
    }
}

/// Represents the desired type to which the input should be parsed.
///
/// Used together with [`Sanitize::IsType`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DesiredType {
    F64,
    Isize,
}

impl DesiredType {
    fn parse(&self, input: &str) -> Result<(), FilterError> {
        match self {
            DesiredType::F64 => check_type!(
                input,
                f64,
                f64::is_finite,
                Err(FilterError::Format(DesiredType::F64))
            ),
            DesiredType::Isize => check_type!(
                input,
                isize,
                Err(FilterError::Format(DesiredType::Isize))
            ),
        }
    }
}

impl Display for DesiredType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::F64 => write!(f, "a number"),
            Self::Isize => write!(f, "an integer"),
        }
    }
}
