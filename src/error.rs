//! Error types for the rules engine
//!
//! Every error here is a recoverable, caller-facing condition: invalid input
//! rather than a transient failure. Nothing is retried.

use chrono::NaiveDate;
use thiserror::Error;

/// Errors raised by [`crate::core::Session::guess`]
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error("{0} has already been guessed in this player's session")]
    AlreadyGuessed(String),

    #[error("this session is over and accepts no more guesses")]
    Closed,

    #[error("guess must be {expected} letters, got {actual}")]
    WrongLength { expected: usize, actual: usize },
}

/// Errors raised while resolving a puzzle
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectError {
    #[error("puzzle #{number} is out of range (1..={available})")]
    OutOfRange { number: i64, available: usize },

    #[error("{date} is before the first puzzle date {epoch}")]
    InvalidDate { date: NaiveDate, epoch: NaiveDate },
}

/// Errors raised by a [`crate::game::SessionStore`] backend
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("session store backend error: {0}")]
    Backend(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// Errors raised while parsing a command line into [`crate::game::CommandArgs`]
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("no action given")]
    MissingAction,

    #[error("unknown action: {0}")]
    UnknownAction(String),

    #[error("expected a number for {field}, got {value:?}")]
    InvalidNumber { field: &'static str, value: String },

    #[error("unexpected argument: {0}")]
    UnexpectedArgument(String),
}

/// Errors raised while handling a player command
#[derive(Debug, Error)]
pub enum LobbyError {
    #[error(
        "You already have an active game. Keep guessing, or use `stop` to cancel the active session."
    )]
    AlreadyActive,

    #[error("You haven't started a game yet. Start one with `start`.")]
    NoActiveSession,

    #[error("No guess parameter provided")]
    MissingWord,

    #[error("'{0}' is not a valid guess")]
    InvalidGuess(String),

    #[error(
        "max guesses must be between 1 and {max}, got {0}",
        max = crate::core::MAX_GUESS_LIMIT
    )]
    InvalidMaxGuesses(i64),

    #[error(transparent)]
    Session(#[from] SessionError),

    #[error(transparent)]
    Select(#[from] SelectError),

    #[error(transparent)]
    Store(#[from] StoreError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn session_error_messages() {
        assert_eq!(
            SessionError::AlreadyGuessed("parts".to_string()).to_string(),
            "parts has already been guessed in this player's session"
        );
        assert_eq!(
            SessionError::WrongLength {
                expected: 5,
                actual: 3
            }
            .to_string(),
            "guess must be 5 letters, got 3"
        );
    }

    #[test]
    fn select_error_messages() {
        let err = SelectError::OutOfRange {
            number: -1,
            available: 10,
        };
        assert_eq!(err.to_string(), "puzzle #-1 is out of range (1..=10)");
    }

    #[test]
    fn lobby_error_wraps_session_error() {
        let err: LobbyError = SessionError::Closed.into();
        assert!(matches!(err, LobbyError::Session(SessionError::Closed)));
        assert_eq!(err.to_string(), SessionError::Closed.to_string());
    }
}
