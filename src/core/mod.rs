//! Core rules of the game
//!
//! Scoring is pure and has no state. A [`Session`] owns one player's attempt
//! at one puzzle and is the only thing that mutates.

mod feedback;
mod scorer;
mod session;

pub use feedback::{
    BLACK_SQUARE, Correctness, DEFAULT_TEXT, GREEN_SQUARE, GREEN_TEXT, RESET_TEXT, ScoredGuess,
    ScoredLetter, YELLOW_SQUARE, YELLOW_TEXT,
};
pub use scorer::{ScoringRule, score, score_naive, score_standard};
pub use session::{DEFAULT_MAX_GUESSES, MAX_GUESS_LIMIT, Session, Status};
