//! Formatting utilities for terminal output

use crate::core::{Correctness, ScoredGuess, ScoredLetter};
use colored::{ColoredString, Colorize};

/// QWERTY layout used for the letter-state keyboard
pub const KEYBOARD_ROWS: [&str; 3] = ["qwertyuiop", "asdfghjkl", "zxcvbnm"];

/// Paint `text` the way a tile of the given correctness looks
#[must_use]
pub fn paint(text: &str, correctness: Correctness) -> ColoredString {
    match correctness {
        Correctness::Exact => text.black().on_green().bold(),
        Correctness::Present => text.black().on_yellow().bold(),
        Correctness::Absent => text.white().on_bright_black(),
    }
}

/// A scored letter as an uppercase tile, e.g. ` C `
#[must_use]
pub fn letter_tile(letter: ScoredLetter) -> String {
    let text = format!(" {} ", letter.ch().to_ascii_uppercase());
    paint(&text, letter.correctness()).to_string()
}

/// A whole guess as a row of tiles
#[must_use]
pub fn guess_tiles(guess: &ScoredGuess) -> String {
    guess.letters().iter().map(|&l| letter_tile(l)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::score;

    #[test]
    fn tiles_without_color() {
        colored::control::set_override(false);
        let scored = score("snail", "parts");
        assert_eq!(guess_tiles(&scored), " S  N  A  I  L ");
        assert_eq!(
            letter_tile(ScoredLetter::new('x', Correctness::Absent)),
            " X "
        );
    }

    #[test]
    fn keyboard_covers_alphabet() {
        let mut letters: Vec<char> = KEYBOARD_ROWS.concat().chars().collect();
        letters.sort_unstable();
        letters.dedup();
        assert_eq!(letters, ('a'..='z').collect::<Vec<_>>());
    }
}
