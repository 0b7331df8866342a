//! Feedback command
//!
//! Prints the colours a guess would receive against a secret.

use crate::core::{Alphabet, Pattern, Result, Word, evaluate};

/// Evaluate `guess` against `secret`, both given as text
///
/// # Errors
/// Returns `InvalidInput` if either word does not tokenize or their lengths differ.
pub fn feedback_between<A: Alphabet>(guess: &str, secret: &str) -> Result<Pattern> {
    evaluate(&Word::<A>::new(guess)?, &Word::<A>::new(secret)?)
}
