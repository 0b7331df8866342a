//! Word analysis command
//!
//! Analyzes the entropy and information content of a specific word.

use crate::core::{Alphabet, Error, Result, Word};
use crate::corpus::Corpus;
use crate::solver::entropy::calculate_metrics;

/// Result of analyzing a word
#[derive(Debug, Clone)]
pub struct AnalysisResult {
    pub word: String,
    /// Whether the word is itself a possible secret
    pub in_corpus: bool,
    /// Expected information gain in nats
    pub entropy: f64,
    /// Effective number of equally likely outcomes, e^entropy
    pub expected_reduction: f64,
    pub expected_remaining: f64,
    pub worst_case: usize,
    pub total_candidates: usize,
}

/// Analyze the entropy of a word against the full corpus
///
/// # Errors
///
/// Returns an error if:
/// - The word does not tokenize or has the wrong number of symbols
/// - The corpus is empty or carries no weight
pub fn analyze_word<A: Alphabet>(word: &str, corpus: &Corpus<A>) -> Result<AnalysisResult> {
    let word_obj = Word::<A>::new(word)?;
    if word_obj.len() != corpus.length() {
        return Err(Error::invalid(format!(
            "'{word_obj}' has {} symbols, the corpus has {}",
            word_obj.len(),
            corpus.length()
        )));
    }

    let pool = corpus.pool();
    let metrics = calculate_metrics(&word_obj, &pool)?;

    Ok(AnalysisResult {
        word: word_obj.text().to_string(),
        in_corpus: corpus.contains(&word_obj),
        entropy: metrics.entropy,
        expected_reduction: metrics.entropy.exp(),
        expected_remaining: metrics.expected_remaining,
        worst_case: metrics.max_partition,
        total_candidates: pool.len(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Letters, Moves};

    fn corpus() -> Corpus<Letters> {
        Corpus::from_records(
            [
                ("slate", 1.0),
                ("irate", 1.0),
                ("crate", 1.0),
                ("grate", 1.0),
                ("crane", 1.0),
            ],
            5,
        )
        .unwrap()
    }

    #[test]
    fn analyze_valid_word() {
        let result = analyze_word("CRATE", &corpus()).unwrap();

        assert_eq!(result.word, "crate");
        assert!(result.in_corpus);
        assert!(result.entropy > 0.0);
        assert!(result.expected_reduction >= 1.0);
        assert_eq!(result.total_candidates, 5);
    }

    #[test]
    fn analyze_word_outside_corpus() {
        let result = analyze_word("zzzzz", &corpus()).unwrap();
        assert!(!result.in_corpus);
        assert!(result.entropy.abs() < f64::EPSILON);
        assert_eq!(result.worst_case, 5);
    }

    #[test]
    fn analyze_invalid_word() {
        assert!(analyze_word("crates", &corpus()).unwrap_err().is_invalid_input());
        assert!(analyze_word("cr4te", &corpus()).is_err());
    }

    #[test]
    fn entropy_properties() {
        let corpus = corpus();
        let result = analyze_word("slate", &corpus).unwrap();

        assert!(result.entropy >= 0.0);
        assert!(result.entropy <= (corpus.len() as f64).ln() + 1e-12);
        assert!(result.expected_remaining >= 1.0);
        assert!(result.expected_remaining <= corpus.len() as f64);
    }

    #[test]
    fn analyze_opening() {
        let corpus = Corpus::<Moves>::from_records(
            [("e4 e5 Nf3", 3.0), ("e4 c5 Nf3", 2.0), ("d4 d5 c4", 1.0)],
            3,
        )
        .unwrap();
        let result = analyze_word("e4 e5 Nf3", &corpus).unwrap();
        assert!(result.in_corpus);
        assert!(result.entropy > 0.0);
    }
}
