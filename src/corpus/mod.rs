//! Weighted corpora and candidate pools
//!
//! A [`Corpus`] owns every word of one game together with its frequency weight.
//! A [`Pool`] is a borrowed, order-preserving subset of a corpus: the candidates
//! still consistent with the feedback seen so far. Weights are never rescaled;
//! probabilities are derived on demand.

pub mod loader;

use crate::core::{Alphabet, Error, Result, Word};
use rustc_hash::FxHashSet;

/// A word and its relative likelihood of being the secret
#[derive(Debug, Clone)]
pub struct Entry<A: Alphabet> {
    word: Word<A>,
    weight: f64,
}

impl<A: Alphabet> Entry<A> {
    #[inline]
    #[must_use]
    pub const fn word(&self) -> &Word<A> {
        &self.word
    }

    #[inline]
    #[must_use]
    pub const fn weight(&self) -> f64 {
        self.weight
    }
}

/// Every guessable word of a game, each with a non-negative weight
#[derive(Debug, Clone)]
pub struct Corpus<A: Alphabet> {
    entries: Vec<Entry<A>>,
    length: usize,
}

impl<A: Alphabet> Corpus<A> {
    /// Build a corpus of `length`-symbol words
    ///
    /// Words of another length are skipped and duplicates keep their first weight.
    ///
    /// # Errors
    /// Returns `InvalidInput` if `length` is zero or a weight is negative or not finite.
    pub fn new(records: impl IntoIterator<Item = (Word<A>, f64)>, length: usize) -> Result<Self> {
        if length == 0 {
            return Err(Error::invalid("corpus word length must be positive"));
        }

        let mut seen = FxHashSet::default();
        let mut entries = Vec::new();
        let mut wrong_length = 0usize;
        let mut duplicates = 0usize;

        for (word, weight) in records {
            if !weight.is_finite() || weight < 0.0 {
                return Err(Error::invalid(format!(
                    "weight of '{word}' must be a non-negative number, got {weight}"
                )));
            }
            if word.len() != length {
                wrong_length += 1;
                continue;
            }
            if !seen.insert(word.clone()) {
                duplicates += 1;
                continue;
            }
            entries.push(Entry { word, weight });
        }

        if wrong_length > 0 {
            log::debug!("skipped {wrong_length} records that are not {length} symbols long");
        }
        if duplicates > 0 {
            log::warn!("skipped {duplicates} duplicate records");
        }

        Ok(Self { entries, length })
    }

    /// Build a corpus from text records, skipping records the alphabet can't parse
    ///
    /// # Errors
    /// Same as [`Corpus::new`].
    ///
    /// # Examples
    /// ```
    /// use entropy_guesser::core::Letters;
    /// use entropy_guesser::corpus::Corpus;
    ///
    /// let corpus = Corpus::<Letters>::from_records(
    ///     [("crane", 3.0), ("slate", 1.0), ("toolong", 9.0)],
    ///     5,
    /// )
    /// .unwrap();
    /// assert_eq!(corpus.len(), 2);
    /// ```
    pub fn from_records<S: AsRef<str>>(
        records: impl IntoIterator<Item = (S, f64)>,
        length: usize,
    ) -> Result<Self> {
        let mut unparsed = 0usize;
        let words: Vec<(Word<A>, f64)> = records
            .into_iter()
            .filter_map(|(text, weight)| match Word::new(text.as_ref()) {
                Ok(word) => Some((word, weight)),
                Err(_) => {
                    unparsed += 1;
                    None
                }
            })
            .collect();

        if unparsed > 0 {
            log::warn!("skipped {unparsed} records that are not valid {} words", A::NAME);
        }

        Self::new(words, length)
    }

    /// Number of symbols in every word
    #[inline]
    #[must_use]
    pub const fn length(&self) -> usize {
        self.length
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn entries(&self) -> &[Entry<A>] {
        &self.entries
    }

    /// Look up a word
    #[must_use]
    pub fn get(&self, word: &Word<A>) -> Option<&Entry<A>> {
        self.entries.iter().find(|e| e.word == *word)
    }

    #[must_use]
    pub fn contains(&self, word: &Word<A>) -> bool {
        self.get(word).is_some()
    }

    /// Keep only the first `limit` records
    pub fn truncate(&mut self, limit: usize) {
        self.entries.truncate(limit);
    }

    /// The unfiltered candidate pool
    #[must_use]
    pub fn pool(&self) -> Pool<'_, A> {
        Pool {
            entries: self.entries.iter().collect(),
        }
    }
}

/// Candidates still consistent with the feedback seen so far
#[derive(Debug, Clone)]
pub struct Pool<'c, A: Alphabet> {
    entries: Vec<&'c Entry<A>>,
}

impl<'c, A: Alphabet> Pool<'c, A> {
    pub(crate) const fn from_entries(entries: Vec<&'c Entry<A>>) -> Self {
        Self { entries }
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn entries(&self) -> &[&'c Entry<A>] {
        &self.entries
    }

    /// Candidate words in pool order
    pub fn words(&self) -> impl Iterator<Item = &'c Word<A>> + '_ {
        self.entries.iter().map(|&e| &e.word)
    }

    #[must_use]
    pub fn contains(&self, word: &Word<A>) -> bool {
        self.entries.iter().any(|e| e.word == *word)
    }

    /// Symbol count shared by every candidate, `None` for an empty pool
    #[must_use]
    pub fn word_length(&self) -> Option<usize> {
        self.entries.first().map(|e| e.word.len())
    }

    /// Sum of candidate weights
    #[must_use]
    pub fn total_weight(&self) -> f64 {
        self.entries.iter().map(|e| e.weight).sum()
    }

    /// Probability of each candidate being the secret, in pool order
    ///
    /// # Errors
    /// - `EmptyPool` if there are no candidates
    /// - `InvalidInput` if every candidate has zero weight
    pub fn probabilities(&self) -> Result<Vec<f64>> {
        if self.is_empty() {
            return Err(Error::EmptyPool);
        }

        let total = self.total_weight();
        if total <= 0.0 {
            return Err(Error::invalid(format!(
                "all {} candidates have zero weight; probabilities are undefined",
                self.len()
            )));
        }

        Ok(self.entries.iter().map(|e| e.weight / total).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Letters, Moves};

    fn corpus() -> Corpus<Letters> {
        Corpus::from_records([("crane", 2.0), ("slate", 1.0), ("irate", 1.0)], 5).unwrap()
    }

    #[test]
    fn corpus_skips_wrong_length_and_duplicates() {
        let corpus = Corpus::<Letters>::from_records(
            [("crane", 2.0), ("cranes", 1.0), ("CRANE", 7.0), ("slate", 1.0)],
            5,
        )
        .unwrap();

        assert_eq!(corpus.len(), 2);
        let crane = Word::new("crane").unwrap();
        assert!((corpus.get(&crane).unwrap().weight() - 2.0).abs() < f64::EPSILON);
    }

    #[test]
    fn corpus_skips_unparseable_records() {
        let corpus = Corpus::<Letters>::from_records([("cr4ne", 1.0), ("slate", 1.0)], 5).unwrap();
        assert_eq!(corpus.len(), 1);
    }

    #[test]
    fn corpus_rejects_bad_weights() {
        assert!(
            Corpus::<Letters>::from_records([("crane", -1.0)], 5)
                .unwrap_err()
                .is_invalid_input()
        );
        assert!(Corpus::<Letters>::from_records([("crane", f64::NAN)], 5).is_err());
        assert!(Corpus::<Letters>::from_records([("crane", 1.0)], 0).is_err());
    }

    #[test]
    fn corpus_truncate_keeps_prefix() {
        let mut corpus = corpus();
        corpus.truncate(2);
        let texts: Vec<&str> = corpus.pool().words().map(Word::text).collect();
        assert_eq!(texts, ["crane", "slate"]);
    }

    #[test]
    fn probabilities_normalize_weights() {
        let corpus = corpus();
        let probs = corpus.pool().probabilities().unwrap();
        assert_eq!(probs.len(), 3);
        assert!((probs[0] - 0.5).abs() < 1e-12);
        assert!((probs.iter().sum::<f64>() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn probabilities_of_empty_pool_fail() {
        let corpus = Corpus::<Letters>::from_records(Vec::<(&str, f64)>::new(), 5).unwrap();
        assert!(matches!(corpus.pool().probabilities(), Err(Error::EmptyPool)));
    }

    #[test]
    fn probabilities_of_zero_weight_pool_fail() {
        let corpus = Corpus::<Letters>::from_records([("crane", 0.0), ("slate", 0.0)], 5).unwrap();
        assert!(corpus.pool().probabilities().unwrap_err().is_invalid_input());
    }

    #[test]
    fn moves_corpus_uses_move_count() {
        let corpus = Corpus::<Moves>::from_records(
            [("e4 e5 Nf3", 10.0), ("d4 d5", 5.0), ("c4 e5 Nc3", 1.0)],
            3,
        )
        .unwrap();
        assert_eq!(corpus.len(), 2);
        assert_eq!(corpus.length(), 3);
    }
}
