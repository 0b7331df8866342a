//! Command implementations

pub mod analyze;
pub mod benchmark;
pub mod feedback;
pub mod interactive;
pub mod rank;
pub mod solve;

pub use analyze::{AnalysisResult, analyze_word};
pub use benchmark::{BenchmarkResult, run_benchmark};
pub use feedback::feedback_between;
pub use interactive::run_interactive;
pub use rank::{RankReport, rank_corpus};
pub use solve::{GuessStep, SolveConfig, SolveResult, solve_word};
