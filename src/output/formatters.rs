//! Formatting utilities for terminal output

use crate::core::{Alphabet, Pattern, Word};
use indicatif::{ProgressBar, ProgressStyle};
use std::fmt::Write;

const PROGRESS_TEMPLATE: &str =
    "{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}";

/// Numbered guess history, one `word blocks` row per guess
#[must_use]
pub fn render_history<A: Alphabet>(history: &[(Word<A>, Pattern)]) -> String {
    let mut out = String::new();
    for (i, (word, pattern)) in history.iter().enumerate() {
        let _ = writeln!(out, "{:>3}. {}  {}", i + 1, word, pattern.to_emoji());
    }
    out
}

/// Create a text progress bar
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    let ratio = if max > 0.0 { (value / max).clamp(0.0, 1.0) } else { 0.0 };
    // Cast is safe: ratio is clamped to [0, 1]
    let filled = ((ratio * width as f64).round() as usize).min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Entropy as a bar relative to the most a pool of `candidates` could give (ln n)
#[must_use]
pub fn entropy_bar(entropy: f64, candidates: usize, width: usize) -> String {
    let max_entropy = (candidates.max(1) as f64).ln();
    create_progress_bar(entropy, max_entropy, width)
}

/// Styled progress bar for long computations
#[must_use]
pub fn progress_bar(len: u64, message: &'static str) -> ProgressBar {
    let style = ProgressStyle::with_template(PROGRESS_TEMPLATE)
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▓▒░");

    let pb = ProgressBar::new(len);
    pb.set_style(style);
    pb.set_message(message);
    pb
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Letters, evaluate};

    #[test]
    fn history_lists_words_with_blocks() {
        let guess = Word::<Letters>::new("slate").unwrap();
        let pattern = evaluate(&guess, &Word::new("crane").unwrap()).unwrap();
        let rendered = render_history(&[(guess, pattern)]);
        assert_eq!(rendered, "  1. slate  ⬛⬛🟩⬛🟩\n");
    }

    #[test]
    fn empty_history_renders_nothing() {
        assert!(render_history::<Letters>(&[]).is_empty());
    }

    #[test]
    fn progress_bar_empty() {
        let bar = create_progress_bar(0.0, 100.0, 10);
        assert_eq!(bar, "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        let bar = create_progress_bar(100.0, 100.0, 10);
        assert_eq!(bar, "██████████");
    }

    #[test]
    fn progress_bar_half() {
        let bar = create_progress_bar(50.0, 100.0, 10);
        assert_eq!(bar, "█████░░░░░");
    }

    #[test]
    fn progress_bar_clamps() {
        assert_eq!(create_progress_bar(5.0, 0.0, 4), "░░░░");
        assert_eq!(create_progress_bar(500.0, 100.0, 4), "████");
    }

    #[test]
    fn entropy_bar_is_relative_to_pool_size() {
        assert_eq!(entropy_bar(4f64.ln(), 4, 8), "████████");
        assert_eq!(entropy_bar(0.0, 1, 8), "░░░░░░░░");
    }
}
