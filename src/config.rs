//! Game configuration
//!
//! Defaults for new sessions and puzzle selection. The CLI overrides these
//! from its flags.

use crate::core::{DEFAULT_MAX_GUESSES, ScoringRule};
use chrono::NaiveDate;

/// Date of puzzle #1 (index 0), in UTC
pub const DEFAULT_EPOCH: NaiveDate = match NaiveDate::from_ymd_opt(2021, 6, 19) {
    Some(date) => date,
    None => panic!("invalid epoch date"),
};

/// Settings shared by every session a lobby creates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    /// Attempt budget when a player doesn't choose one
    pub max_guesses: usize,
    /// Scoring rule for new sessions
    pub scoring: ScoringRule,
    /// First calendar day of the solution list
    pub epoch: NaiveDate,
}

impl GameConfig {
    #[must_use]
    pub const fn with_max_guesses(mut self, max_guesses: usize) -> Self {
        self.max_guesses = max_guesses;
        self
    }

    #[must_use]
    pub const fn with_scoring(mut self, scoring: ScoringRule) -> Self {
        self.scoring = scoring;
        self
    }

    #[must_use]
    pub const fn with_epoch(mut self, epoch: NaiveDate) -> Self {
        self.epoch = epoch;
        self
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            max_guesses: DEFAULT_MAX_GUESSES,
            scoring: ScoringRule::Standard,
            epoch: DEFAULT_EPOCH,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = GameConfig::default();
        assert_eq!(config.max_guesses, 6);
        assert_eq!(config.scoring, ScoringRule::Standard);
        assert_eq!(config.epoch, NaiveDate::from_ymd_opt(2021, 6, 19).unwrap());
    }

    #[test]
    fn builders_override_fields() {
        let epoch = NaiveDate::from_ymd_opt(2022, 1, 1).unwrap();
        let config = GameConfig::default()
            .with_max_guesses(4)
            .with_scoring(ScoringRule::Naive)
            .with_epoch(epoch);
        assert_eq!(config.max_guesses, 4);
        assert_eq!(config.scoring, ScoringRule::Naive);
        assert_eq!(config.epoch, epoch);
    }
}
