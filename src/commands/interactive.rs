//! Interactive console mode
//!
//! Suggests guesses for a game played elsewhere and reads the colours back.

use crate::core::{Alphabet, Pattern, Result};
use crate::game::{Game, GameStatus, Rules};
use crate::output::render_history;
use crate::solver::entropy::calculate_metrics;
use crate::solver::{Solver, Strategy};
use colored::Colorize;
use rand::Rng;
use std::io::{BufRead, Write};

/// What the player typed at the feedback prompt
enum Reply {
    Feedback(Pattern),
    Undo,
    New,
    Quit,
}

/// Run the interactive console mode over `input` and `out`
///
/// Invalid feedback is reported and asked for again. End of input quits.
///
/// # Errors
///
/// Returns an error if reading or writing fails, or if the solver cannot
/// produce a guess for a non-contradictory history.
pub fn run_interactive<A, S, R, I, W>(
    solver: &mut Solver<'_, A, S, R>,
    rules: Rules,
    input: &mut I,
    out: &mut W,
) -> Result<()>
where
    A: Alphabet,
    S: Strategy<A>,
    R: Rng,
    I: BufRead,
    W: Write,
{
    writeln!(out, "\n{}", "═".repeat(64).bright_cyan())?;
    writeln!(
        out,
        "  {}",
        format!("{} solver - interactive mode", A::NAME).bright_cyan().bold()
    )?;
    writeln!(out, "{}\n", "═".repeat(64).bright_cyan())?;
    writeln!(out, "After each guess, enter the feedback pattern:")?;
    writeln!(out, "  - G/g/🟩 for green (correct position)")?;
    writeln!(out, "  - Y/y/🟨 for yellow (wrong position)")?;
    writeln!(out, "  - N/n/-/⬛ for gray (not in the secret)")?;
    writeln!(out, "  - or 'win' if the guess was right")?;
    writeln!(out, "Commands: 'quit', 'new', 'undo'\n")?;

    let mut game = Game::interactive(rules)?;

    loop {
        if game.is_over() {
            report_outcome(&game, out)?;
            match prompt(input, out, "Play again? (yes/no)")? {
                Some(answer) if matches!(answer.to_lowercase().as_str(), "yes" | "y") => {
                    game = Game::interactive(rules)?;
                    writeln!(out, "\n🔄 New game started!\n")?;
                    continue;
                }
                _ => return farewell(out),
            }
        }

        let pool = solver.candidates(game.history())?;
        if pool.is_empty() {
            writeln!(
                out,
                "\n{}",
                "❌ No candidates remain! The feedback may be incorrect.".red()
            )?;
            writeln!(out, "Type 'undo' to go back, or 'new' to start over.\n")?;

            match read_reply(input, out, "Command", rules.length)? {
                Reply::Undo => game = undo(&game, out)?,
                Reply::New => game = Game::interactive(rules)?,
                Reply::Quit => return farewell(out),
                Reply::Feedback(_) => {
                    writeln!(out, "Undo or start a new game first.\n")?;
                }
            }
            continue;
        }

        let guess = solver.next_guess(game.history())?;
        let turn = game.row() + 1;

        writeln!(out, "{}", "─".repeat(64))?;
        writeln!(out, "Turn {turn}: {} candidates remaining", pool.len())?;
        writeln!(out, "{}", "─".repeat(64))?;
        writeln!(out, "\n📊 Suggested guess: {}", guess.text().bright_white().bold())?;

        if pool.len() > 1 {
            let metrics = calculate_metrics(&guess, &pool)?;
            writeln!(out, "   Entropy:          {:.3} nats", metrics.entropy)?;
            writeln!(
                out,
                "   Expected remain:  {:.1} candidates",
                metrics.expected_remaining
            )?;
            writeln!(out, "   Worst case:       {} candidates", metrics.max_partition)?;
        }

        if pool.len() <= 10 {
            writeln!(out, "\nRemaining candidates:")?;
            for candidate in pool.words() {
                writeln!(out, "  • {candidate}")?;
            }
        }
        writeln!(out)?;

        match read_reply(input, out, "Feedback", rules.length)? {
            Reply::Feedback(pattern) => {
                game.record_feedback(guess, pattern)?;
            }
            Reply::Undo => game = undo(&game, out)?,
            Reply::New => {
                game = Game::interactive(rules)?;
                writeln!(out, "\n🔄 New game started!\n")?;
            }
            Reply::Quit => return farewell(out),
        }
    }
}

/// Read until the player types a pattern or a command; `None` at end of input
fn prompt<I: BufRead, W: Write>(input: &mut I, out: &mut W, label: &str) -> Result<Option<String>> {
    write!(out, "{label}: ")?;
    out.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

fn read_reply<I: BufRead, W: Write>(
    input: &mut I,
    out: &mut W,
    label: &str,
    length: usize,
) -> Result<Reply> {
    loop {
        let Some(line) = prompt(input, out, label)? else {
            return Ok(Reply::Quit);
        };

        match line.to_lowercase().as_str() {
            "" => continue,
            "quit" | "q" | "exit" => return Ok(Reply::Quit),
            "new" => return Ok(Reply::New),
            "undo" | "u" => return Ok(Reply::Undo),
            "win" | "correct" | "solved" => return Ok(Reply::Feedback(Pattern::perfect(length))),
            _ => match Pattern::parse(&line, length) {
                Ok(pattern) => return Ok(Reply::Feedback(pattern)),
                Err(e) => writeln!(out, "{} {e}", "❌ Invalid pattern:".red())?,
            },
        }
    }
}

/// Rebuild the game without its last guess
fn undo<A: Alphabet, W: Write>(game: &Game<A>, out: &mut W) -> Result<Game<A>> {
    let history = game.history();
    let Some((_, kept)) = history.split_last() else {
        writeln!(out, "Nothing to undo!\n")?;
        return Ok(game.clone());
    };

    let mut rebuilt = Game::interactive(game.rules())?;
    for (word, pattern) in kept {
        rebuilt.record_feedback(word.clone(), *pattern)?;
    }
    writeln!(out, "✓ Undone! Back to turn {}\n", rebuilt.row() + 1)?;
    Ok(rebuilt)
}

fn report_outcome<A: Alphabet, W: Write>(game: &Game<A>, out: &mut W) -> Result<()> {
    writeln!(out, "\n{}", "═".repeat(64).bright_cyan())?;
    if game.status() == GameStatus::Won {
        let guesses = game.row();
        writeln!(
            out,
            "{}",
            format!(
                "  🎉 Solved in {guesses} {}!",
                if guesses == 1 { "guess" } else { "guesses" }
            )
            .bright_green()
            .bold()
        )?;
    } else {
        writeln!(out, "{}", "  Out of guesses.".red().bold())?;
    }
    writeln!(out, "\n{}", render_history(game.history()))?;
    writeln!(out, "{}", "═".repeat(64).bright_cyan())?;
    Ok(())
}

fn farewell<W: Write>(out: &mut W) -> Result<()> {
    writeln!(out, "\n👋 Thanks for playing!\n")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Letters;
    use crate::corpus::Corpus;
    use crate::solver::MaxEntropyStrategy;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn corpus() -> Corpus<Letters> {
        Corpus::from_records(
            [
                ("crane", 5.0),
                ("slate", 4.0),
                ("irate", 3.0),
                ("crate", 2.0),
                ("grate", 1.0),
            ],
            5,
        )
        .unwrap()
    }

    fn session(script: &str) -> String {
        colored::control::set_override(false);
        let corpus = corpus();
        let mut solver = Solver::new(MaxEntropyStrategy, &corpus, StdRng::seed_from_u64(0));
        let mut input = script.as_bytes();
        let mut out = Vec::new();

        run_interactive(&mut solver, Rules::standard::<Letters>(), &mut input, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn win_ends_the_game() {
        let out = session("win\nno\n");
        assert!(out.contains("Solved in 1 guess!"));
        assert!(out.contains("🟩🟩🟩🟩🟩"));
        assert!(out.contains("Thanks for playing"));
    }

    #[test]
    fn invalid_feedback_is_asked_again() {
        let out = session("GYX\nGG\nquit\n");
        assert_eq!(out.matches("Invalid pattern").count(), 2);
        assert!(out.contains("Thanks for playing"));
    }

    #[test]
    fn undo_without_history() {
        let out = session("undo\nquit\n");
        assert!(out.contains("Nothing to undo"));
    }

    #[test]
    fn contradictory_feedback_reports_no_candidates() {
        // Every candidate has an 'a' in the middle, so all gray is impossible
        let out = session("NNNNN\nundo\nquit\n");
        assert!(out.contains("No candidates remain"));
        assert!(out.contains("Undone! Back to turn 1"));
    }

    #[test]
    fn end_of_input_quits() {
        let out = session("");
        assert!(out.contains("Thanks for playing"));
    }

    #[test]
    fn new_game_restarts() {
        let out = session("win\nyes\nquit\n");
        assert!(out.contains("New game started"));
        assert_eq!(out.matches("Turn 1:").count(), 2);
    }
}
