//! Candidate pruning
//!
//! Keeps only the candidates that would have produced every observed pattern.

use crate::core::{Alphabet, Error, Pattern, Result, Word};
use crate::corpus::Pool;

/// Filter a pool to the candidates consistent with the guess history
///
/// A candidate survives iff `evaluate(guess, candidate) == pattern` for every
/// `(guess, pattern)` in `history`. Weights and order are preserved. An empty
/// result is returned as-is; callers that need a guess report it as `EmptyPool`.
///
/// # Errors
/// Returns `InvalidInput` if a history entry's guess or pattern length differs
/// from the candidates' length.
///
/// # Examples
/// ```
/// use entropy_guesser::core::{Letters, Word, evaluate};
/// use entropy_guesser::corpus::Corpus;
/// use entropy_guesser::solver::prune;
///
/// let corpus = Corpus::<Letters>::from_records(
///     [("irate", 1.0), ("crate", 1.0), ("grate", 1.0)],
///     5,
/// )
/// .unwrap();
/// let guess = Word::new("crane").unwrap();
/// let pattern = evaluate(&guess, &Word::new("grate").unwrap()).unwrap();
///
/// let pool = prune(&corpus.pool(), &[(guess, pattern)]).unwrap();
/// assert!(pool.contains(&Word::new("grate").unwrap()));
/// assert!(!pool.contains(&Word::new("crate").unwrap()));
/// ```
pub fn prune<'c, A: Alphabet>(
    pool: &Pool<'c, A>,
    history: &[(Word<A>, Pattern)],
) -> Result<Pool<'c, A>> {
    if let Some(length) = pool.word_length() {
        for (guess, pattern) in history {
            if guess.len() != length || pattern.len() != length {
                return Err(Error::invalid(format!(
                    "history entry '{guess}' ({pattern}) does not match candidates of {length} symbols"
                )));
            }
        }
    }

    let kept = pool
        .entries()
        .iter()
        .copied()
        .filter(|entry| {
            history
                .iter()
                .all(|(guess, observed)| Pattern::calculate(guess, entry.word()) == *observed)
        })
        .collect();

    Ok(Pool::from_entries(kept))
}
