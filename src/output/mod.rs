//! Terminal output formatting
//!
//! Display utilities for CLI results and coloured tiles.

pub mod display;
pub mod formatters;

pub use display::{print_check_result, print_score_result, print_today_result};
pub use formatters::{KEYBOARD_ROWS, guess_tiles, letter_tile, paint};
