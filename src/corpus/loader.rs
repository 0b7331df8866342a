//! Corpus loading utilities
//!
//! Reads `word,frequency` tables (extra columns ignored) and plain word lists.

use super::Corpus;
use crate::core::{Alphabet, Error, Result, Word};
use rustc_hash::FxHashMap;
use std::fs;
use std::path::Path;

fn unquote(field: &str) -> &str {
    field.trim().trim_matches(|c| c == '"' || c == '\'').trim()
}

/// Parse a `word,frequency[,...]` table
///
/// A first line whose frequency column is not numeric is treated as a header.
/// Blank lines are skipped.
///
/// # Errors
/// Returns `InvalidInput` naming the line when a data row has no frequency or a
/// frequency that is not a number.
///
/// # Examples
/// ```
/// use entropy_guesser::corpus::loader::parse_frequency_table;
///
/// let table = parse_frequency_table("word,count\ncrane,120\nslate,80\n").unwrap();
/// assert_eq!(table, vec![("crane".to_string(), 120.0), ("slate".to_string(), 80.0)]);
/// ```
pub fn parse_frequency_table(content: &str) -> Result<Vec<(String, f64)>> {
    let mut records = Vec::new();
    let mut first = true;

    for (idx, line) in content.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }

        let mut fields = line.splitn(3, ',');
        let word = unquote(fields.next().unwrap_or_default());
        let frequency = fields.next().map(unquote);
        let is_first = std::mem::replace(&mut first, false);

        let parsed = frequency.and_then(|f| f.parse::<f64>().ok());
        match parsed {
            Some(weight) => records.push((word.to_string(), weight)),
            None if is_first => log::debug!("treating '{}' as a header", line.trim()),
            None => {
                return Err(Error::invalid(format!(
                    "line {}: expected 'word,frequency', got '{}'",
                    idx + 1,
                    line.trim()
                )));
            }
        }
    }

    Ok(records)
}

/// Parse a word list separated by newlines and/or commas
///
/// Quotes and surrounding whitespace are removed, so both one-word-per-line files
/// and a single line like `'aahed', 'aalii'` are accepted.
#[must_use]
pub fn parse_word_list(content: &str) -> Vec<String> {
    content
        .lines()
        .flat_map(|line| line.split(','))
        .map(unquote)
        .filter(|w| !w.is_empty())
        .map(str::to_string)
        .collect()
}

/// Build a corpus ordered by `allowed`, with weights looked up in `table`
///
/// Allowed words missing from the table get weight zero.
///
/// # Errors
/// Same as [`Corpus::new`].
pub fn corpus_with_allowed<A: Alphabet>(
    allowed: &[String],
    table: &[(String, f64)],
    length: usize,
) -> Result<Corpus<A>> {
    let weights: FxHashMap<Word<A>, f64> = table
        .iter()
        .filter_map(|(text, weight)| Word::new(text).ok().map(|w| (w, *weight)))
        .collect();

    let mut missing = 0usize;
    let records: Vec<(Word<A>, f64)> = allowed
        .iter()
        .filter_map(|text| Word::new(text).ok())
        .map(|word| {
            let weight = weights.get(&word).copied().unwrap_or_else(|| {
                missing += 1;
                0.0
            });
            (word, weight)
        })
        .collect();

    if missing > 0 {
        log::warn!("{missing} allowed words have no frequency and were weighted 0");
    }

    Corpus::new(records, length)
}

/// Load a corpus from a `word,frequency` file
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read, or `InvalidInput` if it is malformed.
///
/// # Examples
/// ```no_run
/// use entropy_guesser::core::Moves;
/// use entropy_guesser::corpus::loader::load_corpus;
///
/// let openings = load_corpus::<Moves, _>("chessle_data/opening_frequency.csv", 10).unwrap();
/// println!("Loaded {} openings", openings.len());
/// ```
pub fn load_corpus<A: Alphabet, P: AsRef<Path>>(path: P, length: usize) -> Result<Corpus<A>> {
    let content = fs::read_to_string(path.as_ref())?;
    let table = parse_frequency_table(&content)?;
    log::info!(
        "read {} records from {}",
        table.len(),
        path.as_ref().display()
    );
    Corpus::from_records(table, length)
}

/// Load a corpus whose words come from `allowed_path` and weights from `frequency_path`
///
/// # Errors
///
/// Returns an I/O error if either file cannot be read, or `InvalidInput` if the
/// frequency table is malformed.
pub fn load_corpus_with_allowed<A: Alphabet, P: AsRef<Path>, Q: AsRef<Path>>(
    frequency_path: P,
    allowed_path: Q,
    length: usize,
) -> Result<Corpus<A>> {
    let table = parse_frequency_table(&fs::read_to_string(frequency_path)?)?;
    let allowed = parse_word_list(&fs::read_to_string(allowed_path)?);
    log::info!(
        "read {} allowed words and {} frequencies",
        allowed.len(),
        table.len()
    );
    corpus_with_allowed(&allowed, &table, length)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Letters, Moves};

    #[test]
    fn frequency_table_skips_header_and_blank_lines() {
        let table = parse_frequency_table("word,count\n\ncrane,12\n slate , 3.5 \n").unwrap();
        assert_eq!(
            table,
            vec![("crane".to_string(), 12.0), ("slate".to_string(), 3.5)]
        );
    }

    #[test]
    fn frequency_table_without_header() {
        let table = parse_frequency_table("crane,1\nslate,2").unwrap();
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn frequency_table_ignores_extra_columns() {
        let content = "opening,frequency,name\n\
                       e4 e5 Nf3 Nc6 Bb5 a6 Ba4 Nf6 O-O Be7,42,\"Ruy Lopez, Closed\"\n";
        let table = parse_frequency_table(content).unwrap();
        assert_eq!(table.len(), 1);
        assert_eq!(table[0].0, "e4 e5 Nf3 Nc6 Bb5 a6 Ba4 Nf6 O-O Be7");
        assert!((table[0].1 - 42.0).abs() < f64::EPSILON);
    }

    #[test]
    fn frequency_table_reports_bad_rows() {
        let err = parse_frequency_table("word,count\ncrane,12\nslate,lots\n").unwrap_err();
        assert!(err.is_invalid_input());
        assert!(err.to_string().contains("line 3"));

        assert!(parse_frequency_table("crane,1\nslate\n").is_err());
    }

    #[test]
    fn word_list_accepts_quoted_single_line() {
        let words = parse_word_list("'aahed', 'aalii','aargh'\n");
        assert_eq!(words, ["aahed", "aalii", "aargh"]);
    }

    #[test]
    fn word_list_accepts_one_per_line() {
        let words = parse_word_list("crane\n\nslate\r\n");
        assert_eq!(words, ["crane", "slate"]);
    }

    #[test]
    fn allowed_list_orders_and_weights_corpus() {
        let allowed = parse_word_list("slate, crane, zzzzz");
        let table = vec![("crane".to_string(), 5.0), ("slate".to_string(), 2.0)];
        let corpus = corpus_with_allowed::<Letters>(&allowed, &table, 5).unwrap();

        let weights: Vec<(&str, f64)> = corpus
            .entries()
            .iter()
            .map(|e| (e.word().text(), e.weight()))
            .collect();
        assert_eq!(weights, [("slate", 2.0), ("crane", 5.0), ("zzzzz", 0.0)]);
    }

    #[test]
    fn load_corpus_from_file() {
        let path = std::env::temp_dir().join(format!(
            "entropy_guesser_loader_{}.csv",
            std::process::id()
        ));
        fs::write(&path, "opening,frequency\ne4 e5,10\nd4 d5,4\nc4,1\n").unwrap();

        let corpus = load_corpus::<Moves, _>(&path, 2).unwrap();
        fs::remove_file(&path).unwrap();

        assert_eq!(corpus.len(), 2);
    }

    #[test]
    fn load_corpus_missing_file_is_io_error() {
        let result = load_corpus::<Letters, _>("/nonexistent/corpus.csv", 5);
        assert!(matches!(result, Err(Error::Io(_))));
    }
}
