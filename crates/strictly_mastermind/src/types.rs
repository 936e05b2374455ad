//! Core domain types for Mastermind.

use crate::error::MastermindError;
use derive_new::new;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A single peg: a color drawn from the palette `1..=colors`.
///
/// A peg carries no identity beyond its value; whether the value is
/// inside the palette is checked against a session's configuration
/// by [`Code::validate`].
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    derive_more::Display,
    derive_more::From,
)]
#[serde(transparent)]
pub struct Peg(u8);

impl Peg {
    /// Returns the peg's color value.
    pub fn value(self) -> u8 {
        self.0
    }

    /// Checks that the peg lies in `1..=colors`.
    pub fn in_palette(self, colors: u8) -> bool {
        (1..=colors).contains(&self.0)
    }
}

/// An ordered, fixed-length sequence of pegs (a secret or a guess).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Code(Vec<Peg>);

impl Code {
    /// Creates a code from pegs.
    pub fn new(pegs: Vec<Peg>) -> Self {
        Self(pegs)
    }

    /// Creates a code from raw color values.
    pub fn from_values(values: impl IntoIterator<Item = u8>) -> Self {
        Self(values.into_iter().map(Peg::from).collect())
    }

    /// Parses a line of player input into a guess.
    ///
    /// The first `pins` ASCII digits are taken in order and everything
    /// else on the line is ignored, so `"1 2 3 4"`, `"1234"` and
    /// `"1,2,3,4,5"` all read as `(1, 2, 3, 4)` for a four-pin game.
    ///
    /// # Errors
    ///
    /// - [`MastermindError::MalformedGuess`] when fewer than `pins` digits
    ///   are present.
    /// - [`MastermindError::OutOfRangePeg`] when an extracted digit lies
    ///   outside `1..=colors` (a `0` is always out of range).
    #[instrument]
    pub fn parse_guess(line: &str, pins: usize, colors: u8) -> Result<Self, MastermindError> {
        let digits: Vec<u8> = line
            .chars()
            .filter_map(|c| c.to_digit(10))
            .take(pins)
            .map(|d| d as u8)
            .collect();

        if digits.len() < pins {
            return Err(MastermindError::MalformedGuess {
                expected: pins,
                found: digits.len(),
            });
        }

        let code = Self::from_values(digits);
        code.validate(pins, colors)?;
        Ok(code)
    }

    /// Checks that the code has `pins` pegs, all inside the palette.
    pub fn validate(&self, pins: usize, colors: u8) -> Result<(), MastermindError> {
        if self.len() != pins {
            return Err(MastermindError::LengthMismatch {
                expected: pins,
                actual: self.len(),
            });
        }
        match self.0.iter().find(|peg| !peg.in_palette(colors)) {
            Some(peg) => Err(MastermindError::OutOfRangePeg {
                value: peg.value(),
                colors,
            }),
            None => Ok(()),
        }
    }

    /// Number of pegs.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True for the degenerate zero-length code.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates over the pegs in order.
    pub fn iter(&self) -> impl Iterator<Item = Peg> + '_ {
        self.0.iter().copied()
    }
}

impl std::fmt::Display for Code {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "(")?;
        for (i, peg) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", peg)?;
        }
        write!(f, ")")
    }
}

impl FromIterator<Peg> for Code {
    fn from_iter<I: IntoIterator<Item = Peg>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Result of comparing a guess against the secret.
///
/// `exact + value_only` never exceeds the code length, and `exact`
/// equals the code length only when the guess is the secret.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, new, derive_more::Display,
)]
#[display("{exact} exact, {value_only} value-only")]
pub struct Feedback {
    exact: usize,
    value_only: usize,
}

impl Feedback {
    /// Pegs matching in both value and position.
    pub fn exact(&self) -> usize {
        self.exact
    }

    /// Further pegs matching in value but not in position.
    pub fn value_only(&self) -> usize {
        self.value_only
    }

    /// True when every one of `pins` positions matched.
    pub fn is_solved(&self, pins: usize) -> bool {
        self.exact == pins
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_guess_ignores_separators() {
        let code = Code::parse_guess("1, 2 - 3x4", 4, 6).unwrap();
        assert_eq!(code, Code::from_values([1, 2, 3, 4]));
    }

    #[test]
    fn test_parse_guess_takes_first_digits_only() {
        let code = Code::parse_guess("123456", 4, 6).unwrap();
        assert_eq!(code, Code::from_values([1, 2, 3, 4]));
    }

    #[test]
    fn test_parse_guess_too_few_digits() {
        let err = Code::parse_guess("12 three", 4, 6).unwrap_err();
        assert_eq!(err, MastermindError::MalformedGuess { expected: 4, found: 2 });
    }

    #[test]
    fn test_parse_guess_rejects_zero_and_high_digits() {
        let err = Code::parse_guess("1023", 4, 6).unwrap_err();
        assert_eq!(err, MastermindError::OutOfRangePeg { value: 0, colors: 6 });

        let err = Code::parse_guess("1273", 4, 6).unwrap_err();
        assert_eq!(err, MastermindError::OutOfRangePeg { value: 7, colors: 6 });
    }

    #[test]
    fn test_parse_guess_empty_line() {
        let err = Code::parse_guess("", 4, 6).unwrap_err();
        assert!(err.is_recoverable());
    }

    #[test]
    fn test_validate_length() {
        let err = Code::from_values([1, 2, 3]).validate(4, 6).unwrap_err();
        assert_eq!(err, MastermindError::LengthMismatch { expected: 4, actual: 3 });
    }

    #[test]
    fn test_code_display() {
        assert_eq!(Code::from_values([3, 4, 5, 5]).to_string(), "(3, 4, 5, 5)");
        assert_eq!(Code::new(Vec::new()).to_string(), "()");
    }

    #[test]
    fn test_feedback_display() {
        assert_eq!(Feedback::new(1, 2).to_string(), "1 exact, 2 value-only");
        assert!(Feedback::new(4, 0).is_solved(4));
        assert!(!Feedback::new(3, 1).is_solved(4));
    }
}
