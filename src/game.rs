//! Game state machine
//!
//! Tracks one play-through: the secret (unknown in interactive games), every guess
//! with its feedback, the row limit and the win/loss status.

use crate::core::{Alphabet, Error, Pattern, Result, Word, evaluate};
use std::fmt;

/// Shape of a game: symbols per word and number of guesses allowed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rules {
    pub length: usize,
    pub rows: usize,
}

impl Rules {
    #[must_use]
    pub const fn new(length: usize, rows: usize) -> Self {
        Self { length, rows }
    }

    /// Standard rules for an alphabet (5 letters / 10 moves, 6 rows)
    #[must_use]
    pub const fn standard<A: Alphabet>() -> Self {
        Self::new(A::DEFAULT_LENGTH, A::DEFAULT_ROWS)
    }

    fn validate(self) -> Result<Self> {
        if self.length == 0 || self.rows == 0 {
            return Err(Error::invalid(format!(
                "rules need a positive length and row count, got {}x{}",
                self.length, self.rows
            )));
        }
        Ok(self)
    }
}

/// Lifecycle of a game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Won,
    Lost,
}

impl GameStatus {
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        !matches!(self, Self::InProgress)
    }
}

/// One play-through of a game over alphabet `A`
#[derive(Debug, Clone)]
pub struct Game<A: Alphabet> {
    secret: Option<Word<A>>,
    rules: Rules,
    history: Vec<(Word<A>, Pattern)>,
    status: GameStatus,
}

impl<A: Alphabet> Game<A> {
    /// Start a game with a known secret
    ///
    /// # Errors
    /// Returns `InvalidInput` if the rules are degenerate or the secret has the wrong length.
    pub fn new(secret: Word<A>, rules: Rules) -> Result<Self> {
        let rules = rules.validate()?;
        if secret.len() != rules.length {
            return Err(Error::invalid(format!(
                "secret '{secret}' has {} symbols, the game expects {}",
                secret.len(),
                rules.length
            )));
        }

        Ok(Self {
            secret: Some(secret),
            rules,
            history: Vec::new(),
            status: GameStatus::InProgress,
        })
    }

    /// Start a game whose feedback is supplied from outside (a person or a live game)
    ///
    /// # Errors
    /// Returns `InvalidInput` if the rules are degenerate.
    pub fn interactive(rules: Rules) -> Result<Self> {
        Ok(Self {
            secret: None,
            rules: rules.validate()?,
            history: Vec::new(),
            status: GameStatus::InProgress,
        })
    }

    #[must_use]
    pub const fn secret(&self) -> Option<&Word<A>> {
        self.secret.as_ref()
    }

    #[must_use]
    pub const fn rules(&self) -> Rules {
        self.rules
    }

    #[must_use]
    pub const fn status(&self) -> GameStatus {
        self.status
    }

    #[must_use]
    pub const fn is_over(&self) -> bool {
        self.status.is_terminal()
    }

    /// Number of guesses made so far
    #[must_use]
    pub fn row(&self) -> usize {
        self.history.len()
    }

    #[must_use]
    pub fn remaining_rows(&self) -> usize {
        self.rules.rows - self.row()
    }

    /// Guesses made so far with their feedback
    #[must_use]
    pub fn history(&self) -> &[(Word<A>, Pattern)] {
        &self.history
    }

    /// Guess against the known secret
    ///
    /// # Errors
    /// Returns `InvalidInput` (leaving the game untouched) if the game is over, the
    /// guess has the wrong length, every row is used, or the game has no secret.
    pub fn submit_guess(&mut self, guess: Word<A>) -> Result<Pattern> {
        self.check_accepts(&guess)?;
        let Some(secret) = &self.secret else {
            return Err(Error::invalid(
                "this game has no secret; record externally supplied feedback instead",
            ));
        };

        let pattern = evaluate(&guess, secret)?;
        let won = guess == *secret;
        self.push(guess, pattern, won);
        Ok(pattern)
    }

    /// Record a guess with feedback supplied from outside
    ///
    /// # Errors
    /// Returns `InvalidInput` for the same reasons as [`Game::submit_guess`], or when
    /// the feedback length differs from the guess length.
    pub fn record_feedback(&mut self, guess: Word<A>, pattern: Pattern) -> Result<GameStatus> {
        self.check_accepts(&guess)?;
        if pattern.len() != guess.len() {
            return Err(Error::invalid(format!(
                "feedback has {} positions but '{guess}' has {}",
                pattern.len(),
                guess.len()
            )));
        }
        if let Some(secret) = &self.secret
            && evaluate(&guess, secret)? != pattern
        {
            return Err(Error::invalid(format!(
                "feedback {pattern} does not match the secret for '{guess}'"
            )));
        }

        let won = pattern.is_perfect();
        self.push(guess, pattern, won);
        Ok(self.status)
    }

    /// Record a guess with feedback in the oracle encoding (`G`/`Y`/`N` per position)
    ///
    /// # Errors
    /// Returns `InvalidInput` for malformed feedback or a rejected guess.
    pub fn record_encoded(&mut self, guess: Word<A>, feedback: &str) -> Result<GameStatus> {
        let pattern = Pattern::parse(feedback, self.rules.length)?;
        self.record_feedback(guess, pattern)
    }

    fn check_accepts(&self, guess: &Word<A>) -> Result<()> {
        if self.is_over() {
            return Err(Error::invalid(format!(
                "the game is already {}",
                if self.status == GameStatus::Won { "won" } else { "lost" }
            )));
        }
        if guess.len() != self.rules.length {
            return Err(Error::invalid(format!(
                "'{guess}' has {} symbols, the game expects {}",
                guess.len(),
                self.rules.length
            )));
        }
        if self.row() >= self.rules.rows {
            return Err(Error::invalid(format!(
                "all {} rows have been used",
                self.rules.rows
            )));
        }
        Ok(())
    }

    fn push(&mut self, guess: Word<A>, pattern: Pattern, won: bool) {
        log::debug!("row {}: {guess} -> {pattern}", self.row() + 1);
        self.history.push((guess, pattern));

        if won {
            self.status = GameStatus::Won;
        } else if self.row() == self.rules.rows {
            self.status = GameStatus::Lost;
        }
    }
}

impl<A: Alphabet> fmt::Display for Game<A> {
    /// Guesses followed by their colored blocks
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "-------\nGuesses:\n-------")?;
        for (word, _) in &self.history {
            writeln!(f, "{word}")?;
        }
        writeln!(f, "-------\nColors:\n-------")?;
        for (_, pattern) in &self.history {
            writeln!(f, "{}", pattern.to_emoji())?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Letters, Moves};

    fn word(text: &str) -> Word<Letters> {
        Word::new(text).unwrap()
    }

    fn game(secret: &str) -> Game<Letters> {
        Game::new(word(secret), Rules::standard::<Letters>()).unwrap()
    }

    #[test]
    fn starts_in_progress() {
        let game = game("crane");
        assert_eq!(game.status(), GameStatus::InProgress);
        assert_eq!(game.row(), 0);
        assert_eq!(game.remaining_rows(), 6);
    }

    #[test]
    fn guessing_the_secret_wins() {
        let mut game = game("crane");
        game.submit_guess(word("slate")).unwrap();
        let pattern = game.submit_guess(word("crane")).unwrap();

        assert!(pattern.is_perfect());
        assert_eq!(game.status(), GameStatus::Won);
        assert_eq!(game.row(), 2);
    }

    #[test]
    fn last_row_miss_loses() {
        let mut game = Game::new(word("crane"), Rules::new(5, 2)).unwrap();
        game.submit_guess(word("slate")).unwrap();
        assert_eq!(game.status(), GameStatus::InProgress);
        game.submit_guess(word("irate")).unwrap();
        assert_eq!(game.status(), GameStatus::Lost);
    }

    #[test]
    fn winning_on_last_row_is_a_win() {
        let mut game = Game::new(word("crane"), Rules::new(5, 1)).unwrap();
        game.submit_guess(word("crane")).unwrap();
        assert_eq!(game.status(), GameStatus::Won);
    }

    #[test]
    fn no_mutation_after_terminal_state() {
        let mut game = game("crane");
        game.submit_guess(word("crane")).unwrap();

        let err = game.submit_guess(word("slate")).unwrap_err();
        assert!(err.is_invalid_input());
        assert_eq!(game.row(), 1);
        assert_eq!(game.status(), GameStatus::Won);
    }

    #[test]
    fn wrong_length_guess_is_rejected_without_change() {
        let mut game = game("crane");
        assert!(game.submit_guess(word("cranes")).unwrap_err().is_invalid_input());
        assert_eq!(game.row(), 0);
        assert!(game.history().is_empty());
    }

    #[test]
    fn secret_must_match_rules() {
        assert!(Game::new(word("cranes"), Rules::standard::<Letters>()).is_err());
        assert!(Game::new(word("crane"), Rules::new(5, 0)).is_err());
    }

    #[test]
    fn interactive_game_records_encoded_feedback() {
        let mut game = Game::<Letters>::interactive(Rules::standard::<Letters>()).unwrap();
        assert!(game.secret().is_none());

        let status = game.record_encoded(word("tares"), "nyyny").unwrap();
        assert_eq!(status, GameStatus::InProgress);
        let status = game.record_encoded(word("crane"), "GGGGG").unwrap();
        assert_eq!(status, GameStatus::Won);
        assert_eq!(game.history()[0].1.to_code(), "NYYNY");
    }

    #[test]
    fn interactive_game_rejects_bad_feedback() {
        let mut game = Game::<Letters>::interactive(Rules::standard::<Letters>()).unwrap();
        assert!(game.record_encoded(word("tares"), "GYN").unwrap_err().is_invalid_input());
        assert!(game.record_encoded(word("tares"), "GYNNX").is_err());
        assert!(game.submit_guess(word("tares")).is_err());
        assert_eq!(game.row(), 0);
    }

    #[test]
    fn recorded_feedback_must_agree_with_known_secret() {
        let mut game = game("crane");
        let wrong = Pattern::parse("GGGGG", 5).unwrap();
        assert!(game.record_feedback(word("slate"), wrong).is_err());
        assert_eq!(game.row(), 0);
    }

    #[test]
    fn interactive_game_runs_out_of_rows() {
        let mut game = Game::<Moves>::interactive(Rules::new(2, 2)).unwrap();
        let guess = Word::new("e4 e5").unwrap();
        game.record_encoded(guess.clone(), "GN").unwrap();
        assert_eq!(game.record_encoded(guess.clone(), "GY").unwrap(), GameStatus::Lost);
        assert!(game.record_encoded(guess, "GG").is_err());
    }

    #[test]
    fn display_renders_guesses_and_blocks() {
        let mut game = game("crane");
        game.submit_guess(word("slate")).unwrap();
        let rendered = game.to_string();
        assert!(rendered.contains("slate"));
        assert!(rendered.contains("⬛⬛🟩⬛🟩"));
    }
}
