//! Word solving command
//!
//! Solves a specific target word and returns the solution path.

use crate::core::{Alphabet, Pattern, Result, Word};
use crate::game::{Game, GameStatus, Rules};
use crate::solver::entropy::calculate_metrics;
use crate::solver::{Solver, Strategy};
use rand::Rng;

/// Configuration for solving a word
#[derive(Debug, Clone)]
pub struct SolveConfig {
    pub target: String,
    pub rules: Rules,
}

impl SolveConfig {
    #[must_use]
    pub const fn new(target: String, rules: Rules) -> Self {
        Self { target, rules }
    }

    /// Standard rules for the alphabet
    #[must_use]
    pub const fn standard<A: Alphabet>(target: String) -> Self {
        Self::new(target, Rules::standard::<A>())
    }
}

/// Result of solving a word
#[derive(Debug, Clone)]
pub struct SolveResult {
    pub success: bool,
    pub guesses: Vec<GuessStep>,
    pub target: String,
}

/// A single guess step in the solution
#[derive(Debug, Clone)]
pub struct GuessStep {
    pub word: String,
    pub pattern: Pattern,
    pub candidates_before: usize,
    pub candidates_after: usize,
    pub entropy: Option<f64>,
    pub expected_remaining: Option<f64>,
}

/// Solve a specific word using the given solver and strategy
///
/// # Errors
///
/// Returns an error if:
/// - The target word is invalid for the configured rules
/// - The target is not in the corpus, so pruning eventually leaves no candidates
pub fn solve_word<A: Alphabet, S: Strategy<A>, R: Rng>(
    config: SolveConfig,
    solver: &mut Solver<'_, A, S, R>,
) -> Result<SolveResult> {
    let target_word = Word::<A>::new(&config.target)?;
    let mut game = Game::new(target_word, config.rules)?;
    let mut guesses: Vec<GuessStep> = Vec::new();

    while !game.is_over() {
        let pool = solver.candidates(game.history())?;
        let candidates_before = pool.len();

        let guess = solver.next_guess(game.history())?;

        // Entropy for this guess against remaining candidates (if applicable)
        let (entropy, expected_remaining) = if candidates_before > 1 {
            let metrics = calculate_metrics(&guess, &pool)?;
            (Some(metrics.entropy), Some(metrics.expected_remaining))
        } else {
            (None, None)
        };

        let word = guess.text().to_string();
        let pattern = game.submit_guess(guess)?;
        let candidates_after = solver.count_candidates(game.history())?;

        guesses.push(GuessStep {
            word,
            pattern,
            candidates_before,
            candidates_after,
            entropy,
            expected_remaining,
        });
    }

    Ok(SolveResult {
        success: game.status() == GameStatus::Won,
        guesses,
        target: config.target,
    })
}
