//! Puzzle lookup commands
//!
//! Today's puzzle and word-list membership checks.

use crate::error::SelectError;
use crate::puzzle::{Puzzle, PuzzleSelector};
use chrono::{DateTime, NaiveDate, Utc};

/// Result of looking up the current puzzle
pub struct TodayResult {
    pub date: NaiveDate,
    pub puzzle: Puzzle,
    /// Size of the solution list the day index wraps around
    pub solution_count: usize,
    /// Completed passes through the solution list before today
    pub cycle: usize,
}

/// The puzzle for `now`'s UTC day
///
/// # Errors
///
/// Returns `SelectError` if `now` precedes the first puzzle.
pub fn today(selector: &PuzzleSelector, now: DateTime<Utc>) -> Result<TodayResult, SelectError> {
    let puzzle = selector.word_of_the_day(&now)?;
    let elapsed = selector.determine_word_for_day(&now)?;
    let solution_count = selector.corpus().solution_count();

    Ok(TodayResult {
        date: now.date_naive(),
        puzzle,
        solution_count,
        cycle: elapsed / solution_count.max(1),
    })
}

/// Result of checking a word against the lists
pub struct CheckResult {
    pub word: String,
    pub valid: bool,
    /// Puzzle number when the word is itself a solution
    pub puzzle_number: Option<usize>,
}

/// Check whether `word` is an acceptable guess, and whether it is a solution
#[must_use]
pub fn check_word(selector: &PuzzleSelector, word: &str) -> CheckResult {
    let word = word.trim().to_lowercase();
    let valid = selector.is_guess_valid(&word);
    let puzzle_number = selector
        .corpus()
        .solutions()
        .iter()
        .position(|s| *s == word)
        .map(|index| index + 1);

    CheckResult {
        word,
        valid,
        puzzle_number,
    }
}
