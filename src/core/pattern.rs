//! Feedback pattern calculation and representation
//!
//! A pattern encodes the feedback for a whole guess using base-3 digits:
//! - 0 = Gray (symbol not in the secret, or its budget is used up)
//! - 1 = Yellow (symbol in the secret, wrong position)
//! - 2 = Green (symbol in the correct position)
//!
//! Position `i` contributes `digit × 3^i`, so a pattern is a `u64` plus its length.

use super::{Alphabet, Error, MAX_WORD_LENGTH, Result, Word};
use rustc_hash::FxHashMap;
use std::fmt;

/// Feedback for a single position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum Feedback {
    Gray = 0,
    Yellow = 1,
    Green = 2,
}

impl Feedback {
    const fn digit(self) -> u64 {
        self as u64
    }

    const fn from_digit(digit: u64) -> Self {
        match digit {
            2 => Self::Green,
            1 => Self::Yellow,
            _ => Self::Gray,
        }
    }

    /// Letter used by the oracle encoding: `G`, `Y` or `N`
    #[must_use]
    pub const fn code(self) -> char {
        match self {
            Self::Green => 'G',
            Self::Yellow => 'Y',
            Self::Gray => 'N',
        }
    }

    /// Colored block used when rendering a history
    #[must_use]
    pub const fn block(self) -> char {
        match self {
            Self::Green => '🟩',
            Self::Yellow => '🟨',
            Self::Gray => '⬛',
        }
    }

    /// Parse one position of an encoded pattern
    ///
    /// Accepts `G`/`g`/🟩, `Y`/`y`/🟨 and `N`/`n`/`-`/`_`/⬛/⬜.
    #[must_use]
    pub const fn from_char(ch: char) -> Option<Self> {
        match ch {
            'G' | 'g' | '🟩' => Some(Self::Green),
            'Y' | 'y' | '🟨' => Some(Self::Yellow),
            'N' | 'n' | '-' | '_' | '⬛' | '⬜' => Some(Self::Gray),
            _ => None,
        }
    }
}

/// Feedback pattern for a guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pattern {
    value: u64,
    len: u8,
}

impl Pattern {
    /// All greens for a word of `len` symbols
    ///
    /// # Panics
    /// Panics in debug mode if `len` exceeds [`MAX_WORD_LENGTH`]
    #[must_use]
    pub fn perfect(len: usize) -> Self {
        debug_assert!(len <= MAX_WORD_LENGTH);
        let value = (0..len).fold(0, |acc, _| acc * 3 + 2);
        Self {
            value,
            len: len as u8,
        }
    }

    /// Build a pattern from per-position feedback
    ///
    /// # Errors
    /// Returns `InvalidInput` for an empty slice or one longer than [`MAX_WORD_LENGTH`].
    pub fn from_feedback(feedback: &[Feedback]) -> Result<Self> {
        if feedback.is_empty() || feedback.len() > MAX_WORD_LENGTH {
            return Err(Error::invalid(format!(
                "pattern must have 1 to {MAX_WORD_LENGTH} positions, got {}",
                feedback.len()
            )));
        }
        Ok(Self::encode(feedback))
    }

    fn encode(feedback: &[Feedback]) -> Self {
        let mut value = 0u64;
        let mut multiplier = 1u64;
        for &f in feedback {
            value += f.digit() * multiplier;
            multiplier = multiplier.wrapping_mul(3);
        }
        Self {
            value,
            len: feedback.len() as u8,
        }
    }

    /// Raw base-3 value
    #[inline]
    #[must_use]
    pub const fn value(self) -> u64 {
        self.value
    }

    #[inline]
    #[must_use]
    pub const fn len(self) -> usize {
        self.len as usize
    }

    #[inline]
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.len == 0
    }

    /// Feedback for every position, in order
    pub fn feedback(self) -> impl Iterator<Item = Feedback> {
        let mut val = self.value;
        (0..self.len).map(move |_| {
            let f = Feedback::from_digit(val % 3);
            val /= 3;
            f
        })
    }

    /// Check if this is a perfect match (all greens)
    #[must_use]
    pub fn is_perfect(self) -> bool {
        self == Self::perfect(self.len())
    }

    /// Count the number of green feedback squares
    #[must_use]
    pub fn count_greens(self) -> usize {
        self.feedback().filter(|&f| f == Feedback::Green).count()
    }

    /// Count the number of yellow feedback squares
    #[must_use]
    pub fn count_yellows(self) -> usize {
        self.feedback().filter(|&f| f == Feedback::Yellow).count()
    }

    /// Parse an oracle encoding and check it has `expected_len` positions
    ///
    /// # Errors
    /// Returns `InvalidInput` on a wrong length or an unrecognized symbol.
    ///
    /// # Examples
    /// ```
    /// use entropy_guesser::core::Pattern;
    ///
    /// let p1 = Pattern::parse("GYNGY", 5).unwrap();
    /// let p2 = Pattern::parse("🟩🟨⬛🟩🟨", 5).unwrap();
    /// assert_eq!(p1, p2);
    /// assert!(Pattern::parse("GYN", 5).is_err());
    /// assert!(Pattern::parse("GYNGX", 5).is_err());
    /// ```
    pub fn parse(text: &str, expected_len: usize) -> Result<Self> {
        let pattern: Self = text.parse()?;
        if pattern.len() != expected_len {
            return Err(Error::invalid(format!(
                "feedback '{}' has {} positions, expected {expected_len}",
                text.trim(),
                pattern.len()
            )));
        }
        Ok(pattern)
    }

    /// Oracle encoding, e.g. `GYNNG`
    #[must_use]
    pub fn to_code(self) -> String {
        self.feedback().map(Feedback::code).collect()
    }

    /// Convert pattern to a string of colored blocks
    #[must_use]
    pub fn to_emoji(self) -> String {
        self.feedback().map(Feedback::block).collect()
    }
}

impl std::str::FromStr for Pattern {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let feedback = s
            .trim()
            .chars()
            .map(|ch| {
                Feedback::from_char(ch).ok_or_else(|| {
                    Error::invalid(format!("'{ch}' is not a feedback symbol (use G, Y or N)"))
                })
            })
            .collect::<Result<Vec<_>>>()?;
        Self::from_feedback(&feedback)
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_code())
    }
}

/// Calculate the pattern when `guess` is guessed and `secret` is the hidden word
///
/// Implements Wordle's duplicate rules for any alphabet.
///
/// # Algorithm
/// 1. First pass: mark exact matches (greens) and count the secret's unmatched symbols
/// 2. Second pass, left to right: a non-green symbol is yellow while its unmatched
///    count is positive (and consumes one), otherwise gray
/// 3. Encode as base-3 number
///
/// # Errors
/// Returns `InvalidInput` when the words differ in length.
///
/// # Examples
/// ```
/// use entropy_guesser::core::{Letters, Word, evaluate};
///
/// let guess = Word::<Letters>::new("crane").unwrap();
/// let secret = Word::<Letters>::new("slate").unwrap();
///
/// // C(gray) R(gray) A(green) N(gray) E(green)
/// assert_eq!(evaluate(&guess, &secret).unwrap().to_code(), "NNGNG");
/// ```
pub fn evaluate<A: Alphabet>(guess: &Word<A>, secret: &Word<A>) -> Result<Pattern> {
    if guess.len() != secret.len() {
        return Err(Error::invalid(format!(
            "guess '{guess}' has {} symbols but the secret has {}",
            guess.len(),
            secret.len()
        )));
    }
    Ok(Pattern::calculate(guess, secret))
}

impl Pattern {
    /// Evaluate two words already known to have equal length
    pub(crate) fn calculate<A: Alphabet>(guess: &Word<A>, secret: &Word<A>) -> Self {
        debug_assert_eq!(guess.len(), secret.len());

        let guess = guess.symbols();
        let secret = secret.symbols();
        let mut result = vec![Feedback::Gray; guess.len()];
        let mut unmatched: FxHashMap<&A::Symbol, usize> = FxHashMap::default();

        // First pass: greens, and a budget of the secret's symbols they didn't use
        for (i, (g, s)) in guess.iter().zip(secret).enumerate() {
            if g == s {
                result[i] = Feedback::Green;
            } else {
                *unmatched.entry(s).or_insert(0) += 1;
            }
        }

        // Second pass: yellows drawn from the remaining budget
        for (i, g) in guess.iter().enumerate() {
            if result[i] == Feedback::Green {
                continue;
            }
            if let Some(count) = unmatched.get_mut(g)
                && *count > 0
            {
                result[i] = Feedback::Yellow;
                *count -= 1;
            }
        }

        Self::encode(&result)
    }
}
