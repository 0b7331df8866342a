//! Core domain types
//!
//! Alphabets, words, feedback patterns and the error type. Everything here is pure
//! and generic over the symbol alphabet, so Wordle and Chessle share one implementation.

mod alphabet;
mod error;
mod pattern;
mod word;

pub use alphabet::{Alphabet, Letters, Moves};
pub use error::{Error, Result};
pub use pattern::{Feedback, Pattern, evaluate};
pub use word::{MAX_WORD_LENGTH, Word};
