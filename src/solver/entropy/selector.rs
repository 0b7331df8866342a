//! Pure entropy-based word selection
//!
//! Scores every candidate as a hypothetical guess against the pool it belongs to,
//! in parallel. This is the O(|pool|²) heart of the solver.

use super::calculator::entropy_with;
use crate::core::{Alphabet, Error, Result, Word};
use crate::corpus::Pool;
use indicatif::{ParallelProgressIterator, ProgressBar};
use rayon::prelude::*;
use std::cmp::Ordering;

/// A candidate together with its entropy as a guess
#[derive(Debug, Clone, Copy)]
pub struct RankedWord<'c, A: Alphabet> {
    pub word: &'c Word<A>,
    /// Expected information gain in nats
    pub entropy: f64,
}

/// Higher entropy first; equal entropies fall back to lexicographic order
fn by_entropy_then_text<A: Alphabet>(a: &RankedWord<'_, A>, b: &RankedWord<'_, A>) -> Ordering {
    b.entropy
        .total_cmp(&a.entropy)
        .then_with(|| a.word.cmp(b.word))
}

/// Entropy of every candidate as a guess, in pool order
///
/// # Errors
/// - `EmptyPool` if the pool is empty
/// - `InvalidInput` if the pool has zero total weight
pub fn pool_entropies<'c, A: Alphabet>(pool: &Pool<'c, A>) -> Result<Vec<RankedWord<'c, A>>> {
    pool_entropies_with_progress(pool, &ProgressBar::hidden())
}

/// Like [`pool_entropies`], advancing `progress` once per scored candidate
///
/// # Errors
/// Same as [`pool_entropies`].
pub fn pool_entropies_with_progress<'c, A: Alphabet>(
    pool: &Pool<'c, A>,
    progress: &ProgressBar,
) -> Result<Vec<RankedWord<'c, A>>> {
    let probabilities = pool.probabilities()?;
    let words: Vec<&'c Word<A>> = pool.words().collect();

    progress.set_length(words.len() as u64);
    let scored = words
        .par_iter()
        .progress_with(progress.clone())
        .map(|&word| RankedWord {
            word,
            entropy: entropy_with(word, pool, &probabilities),
        })
        .collect();

    Ok(scored)
}

/// All candidates paired with their entropy, sorted descending
///
/// Ties are ordered lexicographically so the ranking is deterministic.
///
/// # Errors
/// Same as [`pool_entropies`].
pub fn rank_candidates<'c, A: Alphabet>(pool: &Pool<'c, A>) -> Result<Vec<RankedWord<'c, A>>> {
    rank_candidates_with_progress(pool, &ProgressBar::hidden())
}

/// Like [`rank_candidates`], reporting progress while scoring
///
/// # Errors
/// Same as [`pool_entropies`].
pub fn rank_candidates_with_progress<'c, A: Alphabet>(
    pool: &Pool<'c, A>,
    progress: &ProgressBar,
) -> Result<Vec<RankedWord<'c, A>>> {
    let mut ranked = pool_entropies_with_progress(pool, progress)?;
    ranked.sort_by(by_entropy_then_text);
    Ok(ranked)
}

/// Select best guess by maximizing entropy
///
/// Returns the candidate with the highest entropy and that value. Among equal
/// entropies the lexicographically smallest word wins.
///
/// # Errors
/// Same as [`pool_entropies`].
///
/// # Examples
/// ```
/// use entropy_guesser::core::Letters;
/// use entropy_guesser::corpus::Corpus;
/// use entropy_guesser::solver::entropy::select_best_guess;
///
/// let corpus = Corpus::<Letters>::from_records(
///     [("slate", 1.0), ("irate", 1.0), ("crate", 1.0), ("grate", 1.0)],
///     5,
/// )
/// .unwrap();
///
/// let best = select_best_guess(&corpus.pool()).unwrap();
/// assert!(best.entropy > 0.0);
/// ```
pub fn select_best_guess<'c, A: Alphabet>(pool: &Pool<'c, A>) -> Result<RankedWord<'c, A>> {
    let probabilities = pool.probabilities()?;
    let words: Vec<&'c Word<A>> = pool.words().collect();

    words
        .par_iter()
        .map(|&word| RankedWord {
            word,
            entropy: entropy_with(word, pool, &probabilities),
        })
        .min_by(by_entropy_then_text)
        .ok_or(Error::EmptyPool)
}
