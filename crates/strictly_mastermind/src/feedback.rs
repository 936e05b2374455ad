//! Code comparison: exact and value-only match counting.

use crate::error::MastermindError;
use crate::types::{Code, Feedback};
use tracing::instrument;

/// One counter slot per possible peg value.
const PALETTE_SLOTS: usize = u8::MAX as usize + 1;

/// Scores `guess` against `secret`.
///
/// Positions that match exactly are removed before value-only matches
/// are counted, so a peg is never credited twice. Value-only matches are
/// the multiset intersection of the remaining pegs: for each color,
/// the smaller of its leftover counts in the secret and in the guess.
///
/// Empty codes score `(0, 0)`.
///
/// # Errors
///
/// Returns [`MastermindError::LengthMismatch`] if the codes differ in length.
#[instrument(fields(secret_len = secret.len(), guess_len = guess.len()), skip_all)]
pub fn score(secret: &Code, guess: &Code) -> Result<Feedback, MastermindError> {
    if secret.len() != guess.len() {
        return Err(MastermindError::LengthMismatch {
            expected: secret.len(),
            actual: guess.len(),
        });
    }

    let mut exact = 0;
    let mut secret_left = [0usize; PALETTE_SLOTS];
    let mut guess_left = [0usize; PALETTE_SLOTS];

    for (s, g) in secret.iter().zip(guess.iter()) {
        if s == g {
            exact += 1;
        } else {
            secret_left[usize::from(s.value())] += 1;
            guess_left[usize::from(g.value())] += 1;
        }
    }

    let value_only = secret_left
        .iter()
        .zip(guess_left.iter())
        .map(|(s, g)| (*s).min(*g))
        .sum();

    Ok(Feedback::new(exact, value_only))
}
