//! Entropy Guesser - CLI
//!
//! Wordle and Chessle solver using information theory.

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand, ValueEnum};
use entropy_guesser::{
    commands::{
        SolveConfig, analyze_word, feedback_between, rank_corpus, run_benchmark, run_interactive,
        solve_word,
    },
    core::{Alphabet, Letters, Moves, Word},
    corpus::{
        Corpus,
        loader::{load_corpus, load_corpus_with_allowed},
    },
    game::Rules,
    output::{
        print_analysis_result, print_benchmark_result, print_feedback, print_rank_report,
        print_solve_result, progress_bar,
    },
    solver::{Solver, StrategyType},
};
use log::LevelFilter;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::io;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "entropy_guesser",
    about = "Wordle and Chessle solver maximizing expected information gain",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Game to play: wordle (letters) or chessle (opening moves)
    #[arg(short, long, global = true, value_enum, default_value_t = GameKind::Wordle)]
    game: GameKind,

    /// `word,frequency` table of possible secrets
    #[arg(short, long, global = true)]
    corpus: Option<PathBuf>,

    /// Word list fixing which words are allowed (weights still come from --corpus)
    #[arg(short, long, global = true)]
    allowed: Option<PathBuf>,

    /// Keep only the first N corpus records
    #[arg(short, long, global = true)]
    limit: Option<usize>,

    /// Strategy: fixed-opener (default), opener-random, max-entropy, random-weighted
    #[arg(short, long, global = true, default_value = "fixed-opener")]
    strategy: String,

    /// Override the precomputed first guess
    #[arg(long, global = true)]
    opener: Option<String>,

    /// Symbols per word (default: 5 letters / 10 moves)
    #[arg(long, global = true)]
    length: Option<usize>,

    /// Guesses allowed per game
    #[arg(short, long, global = true)]
    rows: Option<usize>,

    /// Seed for the random source; a random seed is logged when omitted
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// More log output (-v info, -vv debug, -vvv trace); RUST_LOG also applies
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Clone, Copy, ValueEnum)]
enum GameKind {
    Wordle,
    Chessle,
}

#[derive(Clone, Subcommand)]
enum Commands {
    /// Interactive mode: suggests guesses and reads back the colours (default)
    Play,

    /// Solve a specific secret
    Solve {
        /// The secret to solve
        word: String,

        /// Show candidate counts and entropy per turn
        #[arg(short, long)]
        details: bool,
    },

    /// Analyze the entropy of a specific guess
    Analyze {
        /// Guess to analyze
        word: String,
    },

    /// Rank every corpus word by entropy
    Rank {
        /// Number of words to show
        #[arg(short, long, default_value = "20")]
        top: usize,
    },

    /// Benchmark solver performance
    Benchmark {
        /// Number of corpus words to play as secrets
        #[arg(short = 'n', long, default_value = "50")]
        count: usize,
    },

    /// Show the feedback a guess receives against a secret
    Feedback { guess: String, secret: String },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.game {
        GameKind::Wordle => run::<Letters>(&cli),
        GameKind::Chessle => run::<Moves>(&cli),
    }
}

fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };

    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

fn run<A: Alphabet>(cli: &Cli) -> Result<()> {
    let rules = Rules::new(
        cli.length.unwrap_or(A::DEFAULT_LENGTH),
        cli.rows.unwrap_or(A::DEFAULT_ROWS),
    );

    match cli.command.clone().unwrap_or(Commands::Play) {
        Commands::Play => {
            let corpus = load::<A>(cli, rules.length)?;
            let mut solver = build_solver(cli, &corpus)?;
            run_interactive(
                &mut solver,
                rules,
                &mut io::stdin().lock(),
                &mut io::stdout().lock(),
            )?;
        }
        Commands::Solve { word, details } => {
            let corpus = load::<A>(cli, rules.length)?;
            let mut solver = build_solver(cli, &corpus)?;
            let result = solve_word(SolveConfig::new(word, rules), &mut solver)?;
            print_solve_result(&result, details);
        }
        Commands::Analyze { word } => {
            let corpus = load::<A>(cli, rules.length)?;
            print_analysis_result(&analyze_word(&word, &corpus)?);
        }
        Commands::Rank { top } => {
            let corpus = load::<A>(cli, rules.length)?;
            let pb = progress_bar(corpus.len() as u64, "scoring");
            print_rank_report(&rank_corpus(&corpus, Some(top), &pb)?);
        }
        Commands::Benchmark { count } => {
            let corpus = load::<A>(cli, rules.length)?;
            let mut solver = build_solver(cli, &corpus)?;
            let secrets: Vec<Word<A>> = corpus
                .entries()
                .iter()
                .take(count)
                .map(|e| e.word().clone())
                .collect();

            println!(
                "Running benchmark on {} secrets with {}...",
                secrets.len(),
                solver.strategy().name()
            );
            let pb = progress_bar(secrets.len() as u64, "playing");
            let result = run_benchmark(&mut solver, &secrets, rules, &pb);
            print_benchmark_result(&result);
        }
        Commands::Feedback { guess, secret } => {
            let pattern = feedback_between::<A>(&guess, &secret)?;
            print_feedback(&guess, &secret, pattern);
        }
    }

    Ok(())
}

/// Load the corpus named on the command line
fn load<A: Alphabet>(cli: &Cli, length: usize) -> Result<Corpus<A>> {
    let Some(path) = &cli.corpus else {
        bail!("this command needs a corpus: pass --corpus <FILE>");
    };

    let mut corpus = match &cli.allowed {
        Some(allowed) => load_corpus_with_allowed::<A, _, _>(path, allowed, length),
        None => load_corpus::<A, _>(path, length),
    }
    .with_context(|| format!("failed to load corpus from {}", path.display()))?;

    if let Some(limit) = cli.limit {
        corpus.truncate(limit);
    }
    if corpus.is_empty() {
        bail!("{} has no {length}-symbol {} words", path.display(), A::NAME);
    }

    log::info!("loaded {} {} words", corpus.len(), A::NAME);
    Ok(corpus)
}

fn build_solver<'c, A: Alphabet>(
    cli: &Cli,
    corpus: &'c Corpus<A>,
) -> Result<Solver<'c, A, StrategyType<A>, StdRng>> {
    let strategy = StrategyType::from_name(&cli.strategy, cli.opener.as_deref())?;
    let seed = cli.seed.unwrap_or_else(rand::random);
    log::info!("strategy {} with seed {seed}", strategy.name());

    Ok(Solver::new(strategy, corpus, StdRng::seed_from_u64(seed)))
}
