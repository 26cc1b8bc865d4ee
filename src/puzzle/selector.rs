//! Solution lookup by day or puzzle number
//!
//! The word of the day is memoized per process. Checking whether the cached
//! pick still belongs to the current UTC day and recomputing it happen under a
//! single lock, so every caller on the same day observes the same puzzle.

use crate::config::DEFAULT_EPOCH;
use crate::error::SelectError;
use crate::wordlists::Corpus;
use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use rand::Rng;
use std::sync::{Mutex, PoisonError};

/// A resolved puzzle
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Puzzle {
    number: usize,
    solution: String,
}

impl Puzzle {
    /// 1-based puzzle number
    #[must_use]
    pub const fn number(&self) -> usize {
        self.number
    }

    /// 0-based position in the solution list
    #[must_use]
    pub const fn index(&self) -> usize {
        self.number - 1
    }

    #[must_use]
    pub fn solution(&self) -> &str {
        &self.solution
    }
}

#[derive(Debug)]
struct DailyPick {
    day: NaiveDate,
    puzzle: Puzzle,
}

/// Resolves puzzles from a corpus
#[derive(Debug)]
pub struct PuzzleSelector {
    corpus: Corpus,
    epoch: NaiveDate,
    daily: Mutex<Option<DailyPick>>,
}

impl PuzzleSelector {
    #[must_use]
    pub fn new(corpus: Corpus, epoch: NaiveDate) -> Self {
        Self {
            corpus,
            epoch,
            daily: Mutex::new(None),
        }
    }

    /// Selector over the embedded word lists with the default epoch
    #[must_use]
    pub fn embedded() -> Self {
        Self::new(Corpus::embedded(), DEFAULT_EPOCH)
    }

    #[must_use]
    pub const fn corpus(&self) -> &Corpus {
        &self.corpus
    }

    #[must_use]
    pub const fn epoch(&self) -> NaiveDate {
        self.epoch
    }

    /// Whole UTC days between the epoch and `date`
    ///
    /// The input is converted to UTC and truncated to its calendar day first,
    /// so the time of day and the caller's timezone only matter through the
    /// UTC date they land on.
    ///
    /// # Errors
    ///
    /// Returns `SelectError::InvalidDate` if the date precedes the epoch.
    pub fn determine_word_for_day<Tz: TimeZone>(
        &self,
        date: &DateTime<Tz>,
    ) -> Result<usize, SelectError> {
        let day = date.with_timezone(&Utc).date_naive();
        let elapsed = day.signed_duration_since(self.epoch).num_days();

        usize::try_from(elapsed).map_err(|_| SelectError::InvalidDate {
            date: day,
            epoch: self.epoch,
        })
    }

    /// Look up a puzzle by its 1-based number
    ///
    /// # Errors
    ///
    /// Returns `SelectError::OutOfRange` unless `1 <= number <= solution count`.
    pub fn get_specific_solution(&self, number: i64) -> Result<Puzzle, SelectError> {
        let out_of_range = || SelectError::OutOfRange {
            number,
            available: self.corpus.solution_count(),
        };

        let index = number
            .checked_sub(1)
            .and_then(|index| usize::try_from(index).ok())
            .ok_or_else(out_of_range)?;

        let solution = self.corpus.solution(index).ok_or_else(out_of_range)?;

        Ok(Puzzle {
            number: index + 1,
            solution: solution.to_string(),
        })
    }

    /// The puzzle for `now`'s UTC day
    ///
    /// Days past the end of the solution list wrap around to the start.
    ///
    /// # Errors
    ///
    /// Returns `SelectError::InvalidDate` if `now` precedes the epoch, or
    /// `SelectError::OutOfRange` if the solution list is empty.
    pub fn word_of_the_day<Tz: TimeZone>(&self, now: &DateTime<Tz>) -> Result<Puzzle, SelectError> {
        let today = now.with_timezone(&Utc).date_naive();

        let mut daily = self.daily.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(pick) = daily.as_ref()
            && pick.day == today
        {
            return Ok(pick.puzzle.clone());
        }

        let elapsed = self.determine_word_for_day(now)?;
        let count = self.corpus.solution_count().max(1);
        let puzzle = self.get_specific_solution((elapsed % count) as i64 + 1)?;

        tracing::debug!(%today, number = puzzle.number(), "selected daily puzzle");
        *daily = Some(DailyPick {
            day: today,
            puzzle: puzzle.clone(),
        });

        Ok(puzzle)
    }

    /// Pick any puzzle uniformly at random
    pub fn random_puzzle<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<Puzzle> {
        let count = self.corpus.solution_count();
        if count == 0 {
            return None;
        }
        let number = rng.random_range(1..=count);
        self.get_specific_solution(number as i64).ok()
    }

    /// Whether `word` is in the solution or allowed-guess list
    #[must_use]
    pub fn is_guess_valid(&self, word: &str) -> bool {
        self.corpus.contains(&word.trim().to_lowercase())
    }
}

impl Default for PuzzleSelector {
    fn default() -> Self {
        Self::embedded()
    }
}
