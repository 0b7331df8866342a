//! Symbol alphabets
//!
//! An alphabet decides what a single comparison unit is and how text is split into
//! those units. Wordle compares letters; Chessle compares whole move tokens such as
//! `Nf3`. Everything downstream (feedback, entropy, pruning, games) is generic over it.

use super::{Error, Result};
use std::fmt;
use std::hash::Hash;

/// A family of guessable words and the rules for splitting them into symbols
pub trait Alphabet: fmt::Debug + Clone + Copy + Default + Send + Sync + 'static {
    /// The unit compared position by position
    type Symbol: Clone + Eq + Hash + Ord + fmt::Debug + fmt::Display + Send + Sync;

    /// Short name of the game played over this alphabet
    const NAME: &'static str;

    /// Placed between symbols when a word is turned back into text
    const SEPARATOR: &'static str;

    /// Number of symbols per word in the standard game
    const DEFAULT_LENGTH: usize;

    /// Number of guesses allowed in the standard game
    const DEFAULT_ROWS: usize;

    /// Precomputed maximum-entropy first guess for the standard corpus
    const OPENER: &'static str;

    /// Split text into symbols
    ///
    /// # Errors
    /// Returns `InvalidInput` if the text contains something that is not a symbol.
    fn tokenize(text: &str) -> Result<Vec<Self::Symbol>>;
}

/// Letters of a Wordle word
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Letters;

impl Alphabet for Letters {
    type Symbol = char;

    const NAME: &'static str = "wordle";
    const SEPARATOR: &'static str = "";
    const DEFAULT_LENGTH: usize = 5;
    const DEFAULT_ROWS: usize = 6;
    const OPENER: &'static str = "tares";

    /// Letters are case-insensitive and stored lower case
    fn tokenize(text: &str) -> Result<Vec<char>> {
        let text = text.trim().to_lowercase();

        if let Some(bad) = text.chars().find(|c| !c.is_alphabetic()) {
            return Err(Error::invalid(format!(
                "'{text}' contains '{bad}', which is not a letter"
            )));
        }

        Ok(text.chars().collect())
    }
}

/// Moves of a Chessle opening, in standard algebraic notation
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Moves;

impl Alphabet for Moves {
    type Symbol = String;

    const NAME: &'static str = "chessle";
    const SEPARATOR: &'static str = " ";
    const DEFAULT_LENGTH: usize = 10;
    const DEFAULT_ROWS: usize = 6;
    const OPENER: &'static str = "e4 e5 Nf3 Nc6 Bc4 Be7 Nc3 Nf6 d4 d6";

    /// Moves are whitespace separated; SAN is case-sensitive (`Bc4` is not `bc4`)
    fn tokenize(text: &str) -> Result<Vec<String>> {
        Ok(text.split_whitespace().map(str::to_string).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn letters_lowercase_and_split() {
        assert_eq!(
            Letters::tokenize(" CrAnE ").unwrap(),
            vec!['c', 'r', 'a', 'n', 'e']
        );
    }

    #[test]
    fn letters_reject_non_letters() {
        assert!(Letters::tokenize("cran3").unwrap_err().is_invalid_input());
        assert!(Letters::tokenize("cr ne").is_err());
    }

    #[test]
    fn moves_split_on_whitespace_and_keep_case() {
        let moves = Moves::tokenize("e4  e5 Nf3\tNc6").unwrap();
        assert_eq!(moves, vec!["e4", "e5", "Nf3", "Nc6"]);
    }

    #[test]
    fn openers_have_default_length() {
        assert_eq!(
            Letters::tokenize(Letters::OPENER).unwrap().len(),
            Letters::DEFAULT_LENGTH
        );
        assert_eq!(
            Moves::tokenize(Moves::OPENER).unwrap().len(),
            Moves::DEFAULT_LENGTH
        );
    }
}
