//! Guess selection strategies
//!
//! Defines the Strategy trait and concrete implementations.

use super::entropy::select_best_guess;
use crate::core::{Alphabet, Error, Result, Word};
use crate::corpus::Pool;
use rand::Rng;
use rand::distr::Distribution;
use rand::distr::weighted::WeightedIndex;

/// A strategy for selecting the next guess from the current candidate pool
pub trait Strategy<A: Alphabet> {
    /// Select a guess given the pruned pool and the number of guesses already made
    ///
    /// # Errors
    /// Returns `EmptyPool` when there is nothing to choose from, or `InvalidInput`
    /// when the pool carries no probability mass.
    fn select_guess<R: Rng + ?Sized>(
        &self,
        pool: &Pool<'_, A>,
        row: usize,
        rng: &mut R,
    ) -> Result<Word<A>>;
}

/// Enum wrapper for all strategy types
///
/// Allows runtime selection of strategy while maintaining static dispatch.
#[derive(Debug, Clone)]
pub enum StrategyType<A: Alphabet> {
    /// Sample proportionally to frequency weight
    RandomWeighted(RandomWeightedStrategy),
    /// Pure entropy maximization
    MaxEntropy(MaxEntropyStrategy),
    /// Precomputed opener, then a fallback (default)
    FixedOpener(FixedOpenerStrategy<A>),
}

impl<A: Alphabet> Strategy<A> for StrategyType<A> {
    fn select_guess<R: Rng + ?Sized>(
        &self,
        pool: &Pool<'_, A>,
        row: usize,
        rng: &mut R,
    ) -> Result<Word<A>> {
        match self {
            Self::RandomWeighted(s) => s.select_guess(pool, row, rng),
            Self::MaxEntropy(s) => s.select_guess(pool, row, rng),
            Self::FixedOpener(s) => s.select_guess(pool, row, rng),
        }
    }
}

impl<A: Alphabet> StrategyType<A> {
    /// Create strategy from name string
    ///
    /// Supported names: "random", "random-weighted", "entropy", "max-entropy",
    /// "opener", "fixed-opener", "opener-random". Unrecognized names fall back to
    /// the fixed opener with max-entropy play afterwards. `opener` replaces the
    /// alphabet's precomputed first guess.
    ///
    /// # Errors
    /// Returns `InvalidInput` if the opener does not tokenize.
    pub fn from_name(name: &str, opener: Option<&str>) -> Result<Self> {
        let make_opener = || Word::new(opener.unwrap_or(A::OPENER));

        Ok(match name {
            "random" | "random-weighted" => Self::RandomWeighted(RandomWeightedStrategy),
            "entropy" | "max-entropy" => Self::MaxEntropy(MaxEntropyStrategy),
            "opener" | "fixed-opener" => {
                Self::FixedOpener(FixedOpenerStrategy::new(make_opener()?, Fallback::MaxEntropy))
            }
            "opener-random" => {
                Self::FixedOpener(FixedOpenerStrategy::new(make_opener()?, Fallback::RandomWeighted))
            }
            _ => {
                log::warn!("unknown strategy '{name}', using fixed-opener");
                Self::FixedOpener(FixedOpenerStrategy::new(make_opener()?, Fallback::MaxEntropy))
            }
        })
    }

    /// Short label for reports
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::RandomWeighted(_) => "random-weighted",
            Self::MaxEntropy(_) => "max-entropy",
            Self::FixedOpener(s) => match s.fallback {
                Fallback::MaxEntropy => "fixed-opener",
                Fallback::RandomWeighted => "opener-random",
            },
        }
    }
}

/// Weighted random strategy
///
/// Picks a candidate with probability proportional to its frequency weight.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomWeightedStrategy;

impl<A: Alphabet> Strategy<A> for RandomWeightedStrategy {
    fn select_guess<R: Rng + ?Sized>(
        &self,
        pool: &Pool<'_, A>,
        _row: usize,
        rng: &mut R,
    ) -> Result<Word<A>> {
        if pool.is_empty() {
            return Err(Error::EmptyPool);
        }

        let dist = WeightedIndex::new(pool.entries().iter().map(|e| e.weight()))
            .map_err(|e| Error::invalid(format!("cannot sample the candidate pool: {e}")))?;

        Ok(pool.entries()[dist.sample(rng)].word().clone())
    }
}

/// Pure entropy maximization strategy
///
/// Always selects the candidate with the highest Shannon entropy.
#[derive(Debug, Clone, Copy, Default)]
pub struct MaxEntropyStrategy;

impl<A: Alphabet> Strategy<A> for MaxEntropyStrategy {
    fn select_guess<R: Rng + ?Sized>(
        &self,
        pool: &Pool<'_, A>,
        _row: usize,
        _rng: &mut R,
    ) -> Result<Word<A>> {
        let best = select_best_guess(pool)?;
        log::debug!(
            "best of {} candidates: {} ({:.4} nats)",
            pool.len(),
            best.word,
            best.entropy
        );
        Ok(best.word.clone())
    }
}

/// What a [`FixedOpenerStrategy`] plays after its opener
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Fallback {
    #[default]
    MaxEntropy,
    RandomWeighted,
}

/// Fixed opener strategy
///
/// Scoring the unfiltered corpus is the most expensive step of a game, so the
/// first guess is a precomputed maximum-entropy word. Later rows use the fallback.
#[derive(Debug, Clone)]
pub struct FixedOpenerStrategy<A: Alphabet> {
    pub opener: Word<A>,
    pub fallback: Fallback,
}

impl<A: Alphabet> FixedOpenerStrategy<A> {
    #[must_use]
    pub const fn new(opener: Word<A>, fallback: Fallback) -> Self {
        Self { opener, fallback }
    }
}

impl<A: Alphabet> Strategy<A> for FixedOpenerStrategy<A> {
    fn select_guess<R: Rng + ?Sized>(
        &self,
        pool: &Pool<'_, A>,
        row: usize,
        rng: &mut R,
    ) -> Result<Word<A>> {
        if row == 0 {
            if pool.word_length() == Some(self.opener.len()) {
                return Ok(self.opener.clone());
            }
            log::warn!(
                "opener '{}' does not fit the candidates, choosing dynamically",
                self.opener
            );
        }

        match self.fallback {
            Fallback::MaxEntropy => MaxEntropyStrategy.select_guess(pool, row, rng),
            Fallback::RandomWeighted => RandomWeightedStrategy.select_guess(pool, row, rng),
        }
    }
}
