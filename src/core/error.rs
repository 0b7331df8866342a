//! Error type shared by the engine and solver

use thiserror::Error;

/// Errors reported by the game engine and solver
#[derive(Debug, Error)]
pub enum Error {
    /// Malformed word or feedback, length mismatch, or a move the game rules forbid
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Pruning left no candidate consistent with the guess history
    #[error("no candidates remain; the feedback history is contradictory")]
    EmptyPool,

    /// Failure in a collaborator that reads corpora or feedback
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl Error {
    pub(crate) fn invalid(message: impl Into<String>) -> Self {
        Self::InvalidInput(message.into())
    }

    /// True for the `InvalidInput` kind
    #[must_use]
    pub const fn is_invalid_input(&self) -> bool {
        matches!(self, Self::InvalidInput(_))
    }
}

/// Result alias used throughout the crate
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_problem() {
        let err = Error::invalid("expected 5 symbols, got 4");
        assert_eq!(err.to_string(), "invalid input: expected 5 symbols, got 4");
        assert!(err.is_invalid_input());
        assert!(!Error::EmptyPool.is_invalid_input());
    }

    #[test]
    fn io_errors_convert() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing.csv");
        let err: Error = io.into();
        assert!(matches!(err, Error::Io(_)));
    }
}
