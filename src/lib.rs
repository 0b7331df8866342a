//! Entropy Guesser
//!
//! A Wordle-style game engine and an information-theoretic solver, generic over the
//! symbols being guessed: letters for Wordle, chess moves for Chessle.
//!
//! # Quick Start
//!
//! ```rust
//! use entropy_guesser::core::{Letters, Word, evaluate};
//!
//! let guess = Word::<Letters>::new("trace").unwrap();
//! let secret = Word::<Letters>::new("crate").unwrap();
//!
//! let pattern = evaluate(&guess, &secret).unwrap();
//! assert_eq!(pattern.to_code(), "YGGYG");
//! ```

// Core domain types
pub mod core;

// Weighted word lists
pub mod corpus;

// Game state machine
pub mod game;

// Solving algorithms
pub mod solver;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
