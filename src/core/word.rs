//! Word representation
//!
//! A Word is an immutable sequence of symbols together with its canonical text.

use super::{Alphabet, Error, Result};
use rustc_hash::FxHashMap;
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

/// Longest word a pattern can describe (3^40 still fits in a `u64`)
pub const MAX_WORD_LENGTH: usize = 40;

/// A guessable word over alphabet `A`
///
/// Equality and hashing follow the symbols; ordering follows the canonical text,
/// which gives a stable lexicographic order for tie-breaking.
#[derive(Debug, Clone)]
pub struct Word<A: Alphabet> {
    text: String,
    symbols: Vec<A::Symbol>,
}

impl<A: Alphabet> Word<A> {
    /// Create a new Word from text
    ///
    /// # Errors
    /// Returns `InvalidInput` if:
    /// - The alphabet cannot tokenize the text
    /// - The word is empty
    /// - The word is longer than [`MAX_WORD_LENGTH`] symbols
    ///
    /// # Examples
    /// ```
    /// use entropy_guesser::core::{Letters, Moves, Word};
    ///
    /// let word = Word::<Letters>::new("CRANE").unwrap();
    /// assert_eq!(word.text(), "crane");
    /// assert_eq!(word.len(), 5);
    ///
    /// let opening = Word::<Moves>::new("e4 e5  Nf3").unwrap();
    /// assert_eq!(opening.text(), "e4 e5 Nf3");
    /// assert_eq!(opening.len(), 3);
    ///
    /// assert!(Word::<Letters>::new("sh0rt").is_err());
    /// ```
    pub fn new(text: &str) -> Result<Self> {
        let symbols = A::tokenize(text)?;
        Self::from_symbols(symbols)
    }

    /// Create a Word directly from symbols
    ///
    /// # Errors
    /// Returns `InvalidInput` for empty or over-long symbol sequences.
    pub fn from_symbols(symbols: Vec<A::Symbol>) -> Result<Self> {
        if symbols.is_empty() {
            return Err(Error::invalid("word must contain at least one symbol"));
        }
        if symbols.len() > MAX_WORD_LENGTH {
            return Err(Error::invalid(format!(
                "word has {} symbols, at most {MAX_WORD_LENGTH} are supported",
                symbols.len()
            )));
        }

        let text = symbols
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(A::SEPARATOR);

        Ok(Self { text, symbols })
    }

    /// Canonical text: symbols joined by the alphabet separator
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[inline]
    #[must_use]
    pub fn symbols(&self) -> &[A::Symbol] {
        &self.symbols
    }

    /// Number of symbols
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// Always false for a constructed word; present for API symmetry with `len`
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Check if the word contains a specific symbol
    #[must_use]
    pub fn contains(&self, symbol: &A::Symbol) -> bool {
        self.symbols.contains(symbol)
    }

    /// Get the count of each symbol in the word
    #[must_use]
    pub fn symbol_counts(&self) -> FxHashMap<&A::Symbol, usize> {
        let mut counts = FxHashMap::default();
        for symbol in &self.symbols {
            *counts.entry(symbol).or_insert(0) += 1;
        }
        counts
    }
}

impl<A: Alphabet> PartialEq for Word<A> {
    fn eq(&self, other: &Self) -> bool {
        self.symbols == other.symbols
    }
}

impl<A: Alphabet> Eq for Word<A> {}

impl<A: Alphabet> Hash for Word<A> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.symbols.hash(state);
    }
}

impl<A: Alphabet> PartialOrd for Word<A> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<A: Alphabet> Ord for Word<A> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.text
            .cmp(&other.text)
            .then_with(|| self.symbols.cmp(&other.symbols))
    }
}

impl<A: Alphabet> fmt::Display for Word<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

impl<A: Alphabet> std::str::FromStr for Word<A> {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::new(s)
    }
}
