//! # Numeric Input
//!
//! Bounded real-number prompts. A [`NumericConstraint`] describes what is
//! acceptable (always strictly positive, optionally capped, optionally
//! whole) and [`Terminal::validate`] keeps asking until the answer fits.
//!
//! ```rust,no_run
//! use tinkerbox::utils::{NumericConstraint, Terminal};
//!
//! let mut terminal = Terminal::stdio();
//! let hours = NumericConstraint::new().at_most(24.0);
//! let hours = terminal.validate("Enter the hours used per day:", &hours);
//! let quantity = terminal.validate("Enter the quantity:", &NumericConstraint::new().whole());
//! println!("{:?} {:?}", hours, quantity);
//! ```

use crate::utils::sanitize::{DesiredType, Sanitize, parse_number};
use crate::utils::terminal::{Outcome, Terminal, Verdict};
use std::io::{BufRead, Write};

/// Constraint set for a numeric answer: `0 < value <= max`, whole when `integral`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NumericConstraint {
    max: f64,
    integral: bool,
}

impl Default for NumericConstraint {
    fn default() -> Self {
        Self {
            max: f64::MAX,
            integral: false,
        }
    }
}

impl NumericConstraint {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn at_most(mut self, max: f64) -> Self {
        self.max = max;
        self
    }

    pub fn whole(mut self) -> Self {
        self.integral = true;
        self
    }

    /// Filters in checking order: format, lower bound, upper bound, integrality.
    pub fn filters(&self) -> Vec<Sanitize> {
        let mut filters = vec![
            Sanitize::IsType(DesiredType::F64),
            Sanitize::IsPositive,
            Sanitize::AtMost(self.max),
        ];
        if self.integral {
            filters.push(Sanitize::IsWhole);
        }
        filters
    }
}

impl<R: BufRead, W: Write> Terminal<R, W> {
    /// Asks `prompt` until the answer satisfies `constraint`.
    ///
    /// With the default [`crate::utils::RetryPolicy`] this only returns
    /// [`Outcome::Value`], or [`Outcome::Exhausted`] once the input ends.
    pub fn validate(&mut self, prompt: &str, constraint: &NumericConstraint) -> Outcome<f64> {
        let filters = constraint.filters();
        self.ask_with(prompt, |answer| {
            Verdict::from(
                Sanitize::execute(answer, &filters).and_then(|clean| parse_number(&clean)),
            )
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::terminal::tests::{output, terminal};
    use std::io::Cursor;

    #[test]
    fn test_validate_returns_value_exactly() {
        for raw in ["1.5", "0.001", "42", "1e3", "  7.25  "] {
            let mut t = terminal(&format!("{raw}\n"));
            let res = t.validate("Value:", &NumericConstraint::new());
            assert_eq!(res, Outcome::Value(raw.trim().parse::<f64>().unwrap()));
        }
    }

    #[test]
    fn test_validate_reprompts_after_non_numeric() {
        for junk in ["abc", "", "1,5", "NaN", "--2", "twelve"] {
            let mut t = terminal(&format!("{junk}\n3.5\n"));
            let res = t.validate("Value:", &NumericConstraint::new());
            assert_eq!(res, Outcome::Value(3.5));
            assert_eq!(output(&t).matches("Value:").count(), 2);
        }
    }

    #[test]
    fn test_validate_rejects_non_positive() {
        let mut t = terminal("0\n-2\n2\n");
        let res = t.validate("Value:", &NumericConstraint::new());
        assert_eq!(res, Outcome::Value(2.0));
        assert_eq!(
            output(&t)
                .matches("Value must be greater than 0, try again!")
                .count(),
            2
        );
    }

    #[test]
    fn test_validate_rejects_above_max() {
        let mut t = terminal("24.01\n100\n24\n");
        let res = t.validate("Hours:", &NumericConstraint::new().at_most(24.0));
        assert_eq!(res, Outcome::Value(24.0));
        assert!(output(&t).contains("Value must be between 0 and 24, try again!"));
    }

    #[test]
    fn test_validate_integral() {
        let mut t = terminal("3.0\n");
        let res = t.validate("Quantity:", &NumericConstraint::new().whole());
        assert_eq!(res, Outcome::Value(3.0));

        let mut t = terminal("3.5\n0.7\n4\n");
        let res = t.validate("Quantity:", &NumericConstraint::new().whole());
        assert_eq!(res, Outcome::Value(4.0));
        assert_eq!(
            output(&t)
                .matches("Value must be a whole number, try again!")
                .count(),
            2
        );
    }

    #[test]
    fn test_constraint_filters_order() {
        let constraint = NumericConstraint::new().at_most(10.0).whole();
        assert_eq!(
            constraint.filters(),
            vec![
                Sanitize::IsType(DesiredType::F64),
                Sanitize::IsPositive,
                Sanitize::AtMost(10.0),
                Sanitize::IsWhole,
            ]
        );
    }

    #[test]
    fn test_validate_reprompts_after_invalid_utf8() {
        let mut t = Terminal::new(Cursor::new(b"caf\xe9\n5\n".to_vec()), Vec::new());
        let res = t.validate("Price:", &NumericConstraint::new());
        assert_eq!(res, Outcome::Value(5.0));

        let out = output(&t);
        assert_eq!(out.matches("Price:").count(), 2);
        assert!(out.contains("The answer isn't valid text, try again!"));
    }
}
