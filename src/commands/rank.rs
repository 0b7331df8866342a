//! Corpus ranking command
//!
//! Scores every corpus word as an opening guess against the full pool.

use crate::core::{Alphabet, Result};
use crate::corpus::Corpus;
use crate::solver::entropy::rank_candidates_with_progress;
use indicatif::ProgressBar;

/// Ranked corpus words, best opener first
#[derive(Debug, Clone)]
pub struct RankReport {
    pub total_candidates: usize,
    /// (word, entropy in nats), sorted descending
    pub ranking: Vec<(String, f64)>,
}

/// Rank the whole corpus by entropy, keeping the best `top` words
///
/// # Errors
/// Returns `EmptyPool` for an empty corpus and `InvalidInput` if it carries no weight.
pub fn rank_corpus<A: Alphabet>(
    corpus: &Corpus<A>,
    top: Option<usize>,
    progress: &ProgressBar,
) -> Result<RankReport> {
    let pool = corpus.pool();
    let ranked = rank_candidates_with_progress(&pool, progress)?;
    progress.finish_and_clear();

    let ranking = ranked
        .into_iter()
        .take(top.unwrap_or(usize::MAX))
        .map(|r| (r.word.text().to_string(), r.entropy))
        .collect();

    Ok(RankReport {
        total_candidates: pool.len(),
        ranking,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Error, Letters};

    fn corpus() -> Corpus<Letters> {
        Corpus::from_records(
            [
                ("slate", 1.0),
                ("irate", 1.0),
                ("crate", 1.0),
                ("grate", 1.0),
                ("zzzzz", 1.0),
            ],
            5,
        )
        .unwrap()
    }

    #[test]
    fn ranks_whole_corpus_descending() {
        let report = rank_corpus(&corpus(), None, &ProgressBar::hidden()).unwrap();

        assert_eq!(report.total_candidates, 5);
        assert_eq!(report.ranking.len(), 5);
        assert!(report.ranking.windows(2).all(|w| w[0].1 >= w[1].1));
    }

    #[test]
    fn top_limits_the_report() {
        let report = rank_corpus(&corpus(), Some(2), &ProgressBar::hidden()).unwrap();
        assert_eq!(report.ranking.len(), 2);
        assert_eq!(report.total_candidates, 5);
    }

    #[test]
    fn empty_corpus_fails() {
        let corpus = Corpus::<Letters>::from_records(Vec::<(&str, f64)>::new(), 5).unwrap();
        assert!(matches!(
            rank_corpus(&corpus, None, &ProgressBar::hidden()),
            Err(Error::EmptyPool)
        ));
    }
}
