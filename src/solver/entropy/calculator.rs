//! Shannon entropy of feedback-pattern distributions
//!
//! Given a guess and a weighted candidate pool, computes the expected information
//! gain (in nats) of making that guess.

use crate::core::{Alphabet, Error, Pattern, Result, Word};
use crate::corpus::Pool;
use rustc_hash::FxHashMap;

/// Comprehensive metrics for evaluating a guess
#[derive(Debug, Clone, Copy)]
pub struct GuessMetrics {
    /// Shannon entropy (expected information gain in nats)
    pub entropy: f64,
    /// Expected number of remaining candidates after this guess
    pub expected_remaining: f64,
    /// Maximum partition size (worst-case remaining candidates)
    pub max_partition: usize,
}

/// Probability mass and candidate count of one feedback pattern
#[derive(Debug, Clone, Copy, Default)]
struct Partition {
    mass: f64,
    count: usize,
}

/// Group candidates by the pattern they produce with the guess
fn partition<A: Alphabet>(
    guess: &Word<A>,
    pool: &Pool<'_, A>,
    probabilities: &[f64],
) -> FxHashMap<Pattern, Partition> {
    let mut groups: FxHashMap<Pattern, Partition> = FxHashMap::default();

    for (candidate, &p) in pool.words().zip(probabilities) {
        let group = groups
            .entry(Pattern::calculate(guess, candidate))
            .or_default();
        group.mass += p;
        group.count += 1;
    }

    groups
}

fn check_guess<A: Alphabet>(guess: &Word<A>, pool: &Pool<'_, A>) -> Result<()> {
    match pool.word_length() {
        Some(length) if length != guess.len() => Err(Error::invalid(format!(
            "'{guess}' has {} symbols, candidates have {length}",
            guess.len()
        ))),
        _ => Ok(()),
    }
}

/// Calculate Shannon entropy from pattern masses
///
/// H = −Σ p · ln(p / T) / T, where T is the total mass. T is 1 for normalized
/// input; dividing by it keeps floating drift from biasing the result.
///
/// # Properties
/// - Returns 0.0 for certain outcome (one pattern holds all mass)
/// - Maximized for uniform distribution
/// - Always in range [0, ln(n)] for n patterns
///
/// # Examples
/// ```
/// use entropy_guesser::solver::entropy::shannon_entropy;
///
/// let entropy = shannon_entropy([0.25, 0.25, 0.25, 0.25]);
/// assert!((entropy - 4f64.ln()).abs() < 1e-12);
/// ```
#[must_use]
pub fn shannon_entropy(masses: impl IntoIterator<Item = f64>) -> f64 {
    let masses: Vec<f64> = masses.into_iter().filter(|&p| p > 0.0).collect();
    let total: f64 = masses.iter().sum();

    if total <= 0.0 {
        return 0.0;
    }

    let entropy: f64 = masses.iter().map(|&p| -p * (p / total).ln() / total).sum();

    // A single pattern gives -0.0; report it as plain zero
    entropy.max(0.0)
}

/// Calculate the entropy of guessing `guess` against a weighted pool
///
/// The guess need not be a candidate itself.
///
/// # Errors
/// - `EmptyPool` if the pool is empty
/// - `InvalidInput` if the pool has zero total weight or the guess length differs
///
/// # Examples
/// ```
/// use entropy_guesser::core::{Letters, Word};
/// use entropy_guesser::corpus::Corpus;
/// use entropy_guesser::solver::entropy::guess_entropy;
///
/// let corpus = Corpus::<Letters>::from_records(
///     [("abcd", 1.0), ("abce", 1.0), ("abcf", 1.0)],
///     4,
/// )
/// .unwrap();
///
/// // ABDE gives each candidate a different pattern: ln(3) nats
/// let entropy = guess_entropy(&Word::new("abde").unwrap(), &corpus.pool()).unwrap();
/// assert!((entropy - 3f64.ln()).abs() < 1e-12);
/// ```
pub fn guess_entropy<A: Alphabet>(guess: &Word<A>, pool: &Pool<'_, A>) -> Result<f64> {
    let probabilities = pool.probabilities()?;
    check_guess(guess, pool)?;
    Ok(entropy_with(guess, pool, &probabilities))
}

/// Entropy of a guess when the pool's probabilities are already known
pub(crate) fn entropy_with<A: Alphabet>(
    guess: &Word<A>,
    pool: &Pool<'_, A>,
    probabilities: &[f64],
) -> f64 {
    let groups = partition(guess, pool, probabilities);
    shannon_entropy(groups.values().map(|g| g.mass))
}

/// Calculate comprehensive metrics for a guess
///
/// Returns entropy, expected remaining candidates, and max partition size.
///
/// # Errors
/// Same as [`guess_entropy`].
pub fn calculate_metrics<A: Alphabet>(guess: &Word<A>, pool: &Pool<'_, A>) -> Result<GuessMetrics> {
    let probabilities = pool.probabilities()?;
    check_guess(guess, pool)?;

    let groups = partition(guess, pool, &probabilities);
    let total: f64 = groups.values().map(|g| g.mass).sum();

    let entropy = shannon_entropy(groups.values().map(|g| g.mass));

    // Each pattern is observed with its mass and leaves its candidates behind
    let expected_remaining = groups
        .values()
        .map(|g| g.mass / total * g.count as f64)
        .sum();

    let max_partition = groups.values().map(|g| g.count).max().unwrap_or(0);

    Ok(GuessMetrics {
        entropy,
        expected_remaining,
        max_partition,
    })
}
