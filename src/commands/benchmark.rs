//! Benchmark command
//!
//! Tests solver performance across multiple secrets.

use crate::core::{Alphabet, Word};
use crate::game::{Game, GameStatus, Rules};
use crate::solver::{Solver, Strategy};
use indicatif::ProgressBar;
use std::collections::HashMap;
use std::time::{Duration, Instant};

/// Result of a benchmark run
#[derive(Debug, Clone)]
pub struct BenchmarkResult {
    pub total_words: usize,
    pub solved: usize,
    /// Secrets that were lost or could not be played, with the reason
    pub failures: Vec<(String, String)>,
    /// Guesses used across solved games
    pub total_guesses: usize,
    pub average_guesses: f64,
    pub min_guesses: usize,
    pub max_guesses: usize,
    /// Guesses needed -> number of solved games
    pub distribution: HashMap<usize, usize>,
    pub duration: Duration,
    pub words_per_second: f64,
}

impl BenchmarkResult {
    /// Fraction of secrets solved within the row limit
    #[must_use]
    pub fn success_rate(&self) -> f64 {
        if self.total_words == 0 {
            0.0
        } else {
            self.solved as f64 / self.total_words as f64
        }
    }
}

/// Run benchmark on a set of secrets
///
/// Every secret is played as an autonomous game under `rules`. A game that ends in
/// an error (e.g. a secret the corpus cannot reach) counts as a failure rather
/// than aborting the run.
pub fn run_benchmark<A: Alphabet, S: Strategy<A>, R: rand::Rng>(
    solver: &mut Solver<'_, A, S, R>,
    secrets: &[Word<A>],
    rules: Rules,
    progress: &ProgressBar,
) -> BenchmarkResult {
    let start = Instant::now();
    let mut total_guesses = 0;
    let mut solved = 0;
    let mut min_guesses = usize::MAX;
    let mut max_guesses = 0;
    let mut distribution: HashMap<usize, usize> = HashMap::new();
    let mut failures = Vec::new();

    progress.set_length(secrets.len() as u64);

    for secret in secrets {
        let outcome = Game::new(secret.clone(), rules).and_then(|mut game| {
            let status = solver.play(&mut game)?;
            Ok((status, game.row()))
        });

        match outcome {
            Ok((GameStatus::Won, guesses)) => {
                solved += 1;
                total_guesses += guesses;
                min_guesses = min_guesses.min(guesses);
                max_guesses = max_guesses.max(guesses);
                *distribution.entry(guesses).or_insert(0) += 1;
            }
            Ok((status, _)) => {
                failures.push((secret.text().to_string(), format!("{status:?}")));
            }
            Err(e) => {
                log::warn!("could not play '{secret}': {e}");
                failures.push((secret.text().to_string(), e.to_string()));
            }
        }

        if solved > 0 {
            progress.set_message(format!(
                "Avg: {:.2}",
                total_guesses as f64 / solved as f64
            ));
        }
        progress.inc(1);
    }

    progress.finish_and_clear();
    let duration = start.elapsed();
    let total_words = secrets.len();

    BenchmarkResult {
        total_words,
        solved,
        failures,
        total_guesses,
        average_guesses: if solved == 0 {
            0.0
        } else {
            total_guesses as f64 / solved as f64
        },
        min_guesses: if solved == 0 { 0 } else { min_guesses },
        max_guesses,
        distribution,
        duration,
        words_per_second: total_words as f64 / duration.as_secs_f64().max(f64::EPSILON),
    }
}
