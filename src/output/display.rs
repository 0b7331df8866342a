//! Display functions for command results

use super::formatters::{create_progress_bar, entropy_bar};
use crate::commands::{AnalysisResult, BenchmarkResult, RankReport, SolveResult};
use crate::core::Pattern;
use colored::Colorize;

/// Print the result of solving a word
pub fn print_solve_result(result: &SolveResult, verbose: bool) {
    println!("\n{}", "─".repeat(60).cyan());
    println!("Solving: {}", result.target.bright_yellow().bold());
    println!("{}", "─".repeat(60).cyan());

    for (i, step) in result.guesses.iter().enumerate() {
        println!(
            "\nTurn {}: {} {}",
            i + 1,
            step.word,
            step.pattern.to_emoji()
        );

        if verbose {
            println!(
                "  Candidates: {} → {}",
                step.candidates_before, step.candidates_after
            );

            if let Some(entropy) = step.entropy {
                println!("  Entropy:    {entropy:.3} nats");
                if let Some(expected) = step.expected_remaining {
                    println!("  Expected:   {expected:.1} candidates");
                }

                if step.candidates_after > 0 {
                    let ratio = step.candidates_before as f64 / step.candidates_after as f64;
                    println!("  Info gained: {:.3} nats ({ratio:.1}x reduction)", ratio.ln());
                }
            }
        }
    }

    println!();
    if result.success {
        println!(
            "{}",
            format!("✅ Solved in {} guesses!", result.guesses.len())
                .green()
                .bold()
        );
    } else {
        println!(
            "{}",
            format!("❌ Failed to solve in {} guesses", result.guesses.len())
                .red()
                .bold()
        );
    }
}

/// Print the result of word analysis
pub fn print_analysis_result(result: &AnalysisResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "ENTROPY ANALYSIS:".bright_cyan().bold(),
        result.word.bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());

    let bar = entropy_bar(result.entropy, result.total_candidates, 30);

    println!("\n📊 Against {} candidates:", result.total_candidates);
    if !result.in_corpus {
        println!("   {}", "(not itself a possible secret)".bright_black());
    }
    println!(
        "   Entropy:     [{}] {}",
        bar.green(),
        format!("{:.3} nats", result.entropy).bright_yellow()
    );
    println!(
        "   Info gain:   {:.1}x reduction",
        result.expected_reduction
    );
    println!(
        "   Expected:    {:.1} candidates remain",
        result.expected_remaining
    );
    println!("   Worst case:  {} candidates", result.worst_case);
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BENCHMARK RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Words tested:     {}", result.total_words);
    println!(
        "   Solved:           {} ({:.1}%)",
        result.solved,
        result.success_rate() * 100.0
    );
    println!(
        "   Average guesses:  {}",
        format!("{:.2}", result.average_guesses)
            .bright_yellow()
            .bold()
    );
    println!(
        "   Best case:        {}",
        result.min_guesses.to_string().green()
    );
    println!(
        "   Worst case:       {}",
        result.max_guesses.to_string().yellow()
    );
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Words/second:     {:.1}", result.words_per_second);

    if result.solved > 0 {
        println!("\n📈 {}", "Distribution:".bright_cyan().bold());
        let mut counts: Vec<(usize, usize)> =
            result.distribution.iter().map(|(&k, &v)| (k, v)).collect();
        counts.sort_unstable();

        for (guess_count, count) in counts {
            let pct = (count as f64 / result.total_words as f64) * 100.0;
            let bar = create_progress_bar(pct, 100.0, 40);
            println!("   {guess_count}: {} {count:4} ({pct:5.1}%)", bar.green());
        }
    }

    if !result.failures.is_empty() {
        println!("\n❌ {}", "Failures:".red().bold());
        for (word, reason) in result.failures.iter().take(20) {
            println!("   {word}: {}", reason.bright_black());
        }
        if result.failures.len() > 20 {
            println!("   ... and {} more", result.failures.len() - 20);
        }
    }
}

/// Print a corpus ranking
pub fn print_rank_report(report: &RankReport) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} ({} candidates)",
        "ENTROPY RANKING".bright_cyan().bold(),
        report.total_candidates
    );
    println!("{}", "═".repeat(60).cyan());

    let width = report
        .ranking
        .iter()
        .map(|(word, _)| word.chars().count())
        .max()
        .unwrap_or(0);

    for (i, (word, entropy)) in report.ranking.iter().enumerate() {
        let bar = entropy_bar(*entropy, report.total_candidates, 20);
        println!(
            "{:>5}. {word:<width$}  [{}] {entropy:.4}",
            i + 1,
            bar.green()
        );
    }
}

/// Print the evaluator's feedback for one guess
pub fn print_feedback(guess: &str, secret: &str, pattern: Pattern) {
    println!("{guess} vs {secret}");
    println!("{}  {}", pattern.to_emoji(), pattern.to_code().bright_white().bold());
}
