//! # Character Encoder
//!
//! Encodes letters as the 5-bit binary form of their position in the
//! alphabet: `A = 00001`, `B = 00010`, … `Z = 11010`.
//!
//! - Input is upper-cased first, so `a` and `A` encode the same.
//! - Letters outside `A..=Z` (accented or non-Latin) become `Invalid`.
//! - Everything else (digits, spaces, punctuation) is dropped.
//!
//! ```rust
//! use tinkerbox::apps::encoder::encode;
//!
//! assert_eq!(encode("Hi!"), "01000 01001");
//! ```

use crate::utils::{Outcome, Sanitize, Terminal};
use std::io::{BufRead, Write};

pub const INVALID: &str = "Invalid";

/// Code of a single character, `None` when it is dropped.
pub fn encode_char(c: char) -> Option<String> {
    match c.to_ascii_uppercase() {
        upper @ 'A'..='Z' => Some(format!("{:05b}", upper as u8 - b'A' + 1)),
        other if other.is_alphabetic() => Some(INVALID.to_string()),
        _ => None,
    }
}

/// Space separated codes of every kept character.
pub fn encode(input: &str) -> String {
    input
        .chars()
        .filter_map(encode_char)
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn run<R: BufRead, W: Write>(terminal: &mut Terminal<R, W>) {
    let input = terminal.ask("Enter a string to encode:", &[Sanitize::NotEmpty]);
    if let Outcome::Value(input) = input {
        terminal.say(format_args!("Encoded string: {}", encode(&input)));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::terminal::tests::{output, terminal};

    #[test]
    fn test_encode_alphabet_bounds() {
        assert_eq!(encode("A"), "00001");
        assert_eq!(encode("z"), "11010");
        assert_eq!(encode("abc"), "00001 00010 00011");
    }

    #[test]
    fn test_encode_drops_non_letters() {
        assert_eq!(encode("a b-1c"), "00001 00010 00011");
        assert_eq!(encode("123 !?"), "");
    }

    #[test]
    fn test_encode_marks_foreign_letters_invalid() {
        assert_eq!(encode("café"), "00011 00001 00110 Invalid");
        assert_eq!(encode_char('ß'), Some(INVALID.to_string()));
    }

    #[test]
    fn test_run_reprompts_on_empty() {
        let mut t = terminal("\nHey\n");
        run(&mut t);

        let out = output(&t);
        assert!(out.contains("The value can't be empty, try again!"));
        assert!(out.ends_with("Encoded string: 01000 00101 11001\n"));
    }
}
