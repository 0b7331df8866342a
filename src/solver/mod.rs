//! Solving algorithms
//!
//! Candidate pruning, entropy scoring, guess strategies and the solver that ties
//! them to a game.

mod engine;
pub mod entropy;
mod prune;
pub mod strategy;

pub use engine::{FeedbackOracle, Solver};
pub use prune::prune;
pub use strategy::{
    Fallback, FixedOpenerStrategy, MaxEntropyStrategy, RandomWeightedStrategy, Strategy,
    StrategyType,
};
