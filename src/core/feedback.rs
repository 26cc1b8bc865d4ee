//! Per-letter feedback for a scored guess
//!
//! Correctness is a ternary value:
//! - 0 = Absent (letter not in the solution, or every occurrence already matched)
//! - 1 = Present (letter in the solution, wrong position)
//! - 2 = Exact (letter in the correct position)
//!
//! The ordering `Absent < Present < Exact` is what the session uses to keep the
//! best result ever seen for a letter.

use std::fmt;

/// Green square for an exact match
pub const GREEN_SQUARE: &str = "🟩";
/// Yellow square for a present-but-misplaced letter
pub const YELLOW_SQUARE: &str = "🟨";
/// Black square for an absent letter
pub const BLACK_SQUARE: &str = "⬛";

/// ANSI prefix for an exact letter (bold green)
pub const GREEN_TEXT: &str = "\u{1b}[0m\u{1b}[1;32m";
/// ANSI prefix for a present letter (bold yellow)
pub const YELLOW_TEXT: &str = "\u{1b}[0m\u{1b}[1;33m";
/// ANSI prefix for an absent letter (bold white)
pub const DEFAULT_TEXT: &str = "\u{1b}[0m\u{1b}[1;37m";
/// ANSI reset
pub const RESET_TEXT: &str = "\u{1b}[0m";

/// Correctness of a single guessed character
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Correctness {
    Absent = 0,
    Present = 1,
    Exact = 2,
}

impl Correctness {
    /// Numeric value (0-2)
    #[inline]
    #[must_use]
    pub const fn value(self) -> u8 {
        self as u8
    }

    /// Square glyph used when sharing progress without letters
    #[must_use]
    pub const fn emoji(self) -> &'static str {
        match self {
            Self::Exact => GREEN_SQUARE,
            Self::Present => YELLOW_SQUARE,
            Self::Absent => BLACK_SQUARE,
        }
    }

    /// ANSI colour prefix for letter rendering
    #[must_use]
    pub const fn ansi_color(self) -> &'static str {
        match self {
            Self::Exact => GREEN_TEXT,
            Self::Present => YELLOW_TEXT,
            Self::Absent => DEFAULT_TEXT,
        }
    }
}

/// A guessed character and its correctness
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ScoredLetter {
    ch: char,
    correctness: Correctness,
}

impl ScoredLetter {
    #[inline]
    #[must_use]
    pub const fn new(ch: char, correctness: Correctness) -> Self {
        Self { ch, correctness }
    }

    #[inline]
    #[must_use]
    pub const fn ch(self) -> char {
        self.ch
    }

    #[inline]
    #[must_use]
    pub const fn correctness(self) -> Correctness {
        self.correctness
    }

    /// The letter prefixed with its ANSI colour
    #[must_use]
    pub fn colored_text(self) -> String {
        format!("{}{}", self.correctness.ansi_color(), self.ch)
    }

    /// The square glyph for this letter
    #[must_use]
    pub const fn emoji(self) -> &'static str {
        self.correctness.emoji()
    }
}

/// A fully scored guess, one letter per character of the guess
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ScoredGuess {
    letters: Vec<ScoredLetter>,
}

impl ScoredGuess {
    #[must_use]
    pub const fn new(letters: Vec<ScoredLetter>) -> Self {
        Self { letters }
    }

    #[inline]
    #[must_use]
    pub fn letters(&self) -> &[ScoredLetter] {
        &self.letters
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.letters.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    /// The guessed word, reassembled from its letters
    #[must_use]
    pub fn word(&self) -> String {
        self.letters.iter().map(|l| l.ch).collect()
    }

    /// Correctness values in position order
    #[must_use]
    pub fn correctness(&self) -> Vec<Correctness> {
        self.letters.iter().map(|l| l.correctness).collect()
    }

    /// True when every position is an exact match
    #[must_use]
    pub fn is_exact(&self) -> bool {
        !self.letters.is_empty()
            && self
                .letters
                .iter()
                .all(|l| l.correctness == Correctness::Exact)
    }

    /// ANSI-coloured letters, terminated by a reset
    #[must_use]
    pub fn to_ansi(&self) -> String {
        let mut out = String::with_capacity(self.letters.len() * 12 + RESET_TEXT.len());
        for letter in &self.letters {
            out.push_str(letter.correctness.ansi_color());
            out.push(letter.ch);
        }
        out.push_str(RESET_TEXT);
        out
    }

    /// Square glyphs only
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.letters.iter().map(|l| l.emoji()).collect()
    }
}

impl fmt::Display for ScoredGuess {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_emoji())
    }
}
