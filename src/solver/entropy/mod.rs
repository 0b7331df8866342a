//! Entropy-based guess scoring
//!
//! Shannon entropy (in nats) of the feedback-pattern distribution a guess induces
//! over a weighted candidate pool. This is the foundation of information-theoretic
//! solving.

mod calculator;
mod selector;

pub use calculator::{GuessMetrics, calculate_metrics, guess_entropy, shannon_entropy};
pub use selector::{
    RankedWord, pool_entropies, pool_entropies_with_progress, rank_candidates,
    rank_candidates_with_progress, select_best_guess,
};
