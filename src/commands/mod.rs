//! Command implementations

pub mod lookup;
pub mod score;
pub mod simple;

pub use lookup::{CheckResult, TodayResult, check_word, today};
pub use score::{ScoreResult, score_words};
pub use simple::{LOCAL_PLAYER, run_simple};
