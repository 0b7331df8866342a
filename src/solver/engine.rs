//! Main solver interface

use super::prune::prune;
use super::strategy::Strategy;
use crate::core::{Alphabet, Error, Pattern, Result, Word};
use crate::corpus::{Corpus, Pool};
use crate::game::{Game, GameStatus};
use rand::Rng;
use std::io;

/// Source of feedback for a game whose secret the solver cannot see
///
/// Returns the feedback for `guess` in the `G`/`Y`/`N` encoding. A person at a
/// terminal or a bridge to a live game both fit here.
pub trait FeedbackOracle<A: Alphabet> {
    /// # Errors
    /// Returns an I/O error if the feedback could not be obtained.
    fn feedback(&mut self, guess: &Word<A>) -> io::Result<String>;
}

impl<A, F> FeedbackOracle<A> for F
where
    A: Alphabet,
    F: FnMut(&Word<A>) -> io::Result<String>,
{
    fn feedback(&mut self, guess: &Word<A>) -> io::Result<String> {
        self(guess)
    }
}

/// Main solver
///
/// Coordinates the solving process using a given strategy. Randomness comes only
/// from the injected `rng`, so a seeded generator makes whole games reproducible.
pub struct Solver<'c, A: Alphabet, S: Strategy<A>, R: Rng> {
    strategy: S,
    corpus: &'c Corpus<A>,
    rng: R,
}

impl<'c, A: Alphabet, S: Strategy<A>, R: Rng> Solver<'c, A, S, R> {
    /// Create a new solver with the given strategy, corpus and random source
    pub const fn new(strategy: S, corpus: &'c Corpus<A>, rng: R) -> Self {
        Self {
            strategy,
            corpus,
            rng,
        }
    }

    pub const fn strategy(&self) -> &S {
        &self.strategy
    }

    pub const fn corpus(&self) -> &'c Corpus<A> {
        self.corpus
    }

    /// Candidates consistent with `history`, re-derived from the full corpus
    ///
    /// # Errors
    /// Returns `InvalidInput` if the history does not match the corpus word length.
    pub fn candidates(&self, history: &[(Word<A>, Pattern)]) -> Result<Pool<'c, A>> {
        let pool = prune(&self.corpus.pool(), history)?;
        log::debug!(
            "{} of {} candidates remain after {} guesses",
            pool.len(),
            self.corpus.len(),
            history.len()
        );
        Ok(pool)
    }

    /// Count how many candidates remain given the history
    ///
    /// # Errors
    /// Same as [`Solver::candidates`].
    pub fn count_candidates(&self, history: &[(Word<A>, Pattern)]) -> Result<usize> {
        Ok(self.candidates(history)?.len())
    }

    /// Get the next guess given previous guesses and patterns
    ///
    /// # Errors
    /// Returns `EmptyPool` when the history rules out every candidate, or whatever
    /// the strategy reports.
    pub fn next_guess(&mut self, history: &[(Word<A>, Pattern)]) -> Result<Word<A>> {
        let pool = self.candidates(history)?;

        match pool.entries() {
            [] => Err(Error::EmptyPool),
            [only] => Ok(only.word().clone()),
            _ => self
                .strategy
                .select_guess(&pool, history.len(), &mut self.rng),
        }
    }

    /// Play a game with a known secret until it is won or lost
    ///
    /// # Errors
    /// Returns `EmptyPool` if the secret is not in the corpus and pruning rules
    /// everything out, or any error from guess selection.
    pub fn play(&mut self, game: &mut Game<A>) -> Result<GameStatus> {
        while !game.is_over() {
            let guess = self.next_guess(game.history())?;
            let pattern = game.submit_guess(guess)?;
            log::debug!("row {}: {}", game.row(), pattern.to_emoji());
        }

        log::info!("game {:?} in {} guesses", game.status(), game.row());
        Ok(game.status())
    }

    /// Play a game whose feedback comes from `oracle`
    ///
    /// Stops once the feedback is all green or every row is used.
    ///
    /// # Errors
    /// Returns `Io` if the oracle fails, `InvalidInput` for malformed feedback and
    /// `EmptyPool` for contradictory feedback. Nothing is retried.
    pub fn play_interactive<O: FeedbackOracle<A>>(
        &mut self,
        game: &mut Game<A>,
        oracle: &mut O,
    ) -> Result<GameStatus> {
        while !game.is_over() {
            let guess = self.next_guess(game.history())?;
            let feedback = oracle.feedback(&guess)?;
            game.record_encoded(guess, &feedback)?;
        }

        log::info!("game {:?} in {} guesses", game.status(), game.row());
        Ok(game.status())
    }
}
