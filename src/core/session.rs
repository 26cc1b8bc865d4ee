//! A single player's attempt at one puzzle
//!
//! The session keeps the raw guesses alongside their scored form, and tracks
//! the best correctness ever observed for each letter so it doesn't have to be
//! recomputed over every guess, every time.

use super::feedback::{Correctness, RESET_TEXT, ScoredGuess};
use super::scorer::ScoringRule;
use crate::error::SessionError;

/// Default attempt budget
pub const DEFAULT_MAX_GUESSES: usize = 6;

/// Largest attempt budget a player may ask for
pub const MAX_GUESS_LIMIT: usize = 26;

const ALPHABET_LEN: usize = 26;

/// Outcome of a session so far
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    InProgress,
    Won,
    Lost,
}

/// One player's puzzle attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    puzzle_index: usize,
    solution: String,
    max_guesses: usize,
    attempts: Vec<String>,
    scored_guesses: Vec<ScoredGuess>,
    letter_state: [Option<Correctness>; ALPHABET_LEN],
    solved: bool,
    scoring: ScoringRule,
}

impl Session {
    /// Create a session around `solution`
    ///
    /// # Examples
    /// ```
    /// use wordle_rules::core::Session;
    ///
    /// let mut session = Session::new("parts", 6, 0);
    /// session.guess("snail").unwrap();
    /// assert!(session.can_play());
    /// session.guess("parts").unwrap();
    /// assert!(session.is_solved());
    /// ```
    #[must_use]
    pub fn new(solution: &str, max_guesses: usize, puzzle_index: usize) -> Self {
        Self {
            puzzle_index,
            solution: solution.trim().to_lowercase(),
            max_guesses,
            attempts: Vec::new(),
            scored_guesses: Vec::new(),
            letter_state: [None; ALPHABET_LEN],
            solved: false,
            scoring: ScoringRule::default(),
        }
    }

    /// Use a different scoring rule for this session's guesses
    #[must_use]
    pub const fn with_scoring(mut self, scoring: ScoringRule) -> Self {
        self.scoring = scoring;
        self
    }

    #[must_use]
    pub const fn puzzle_index(&self) -> usize {
        self.puzzle_index
    }

    /// 1-based puzzle number, as shown to players
    #[must_use]
    pub const fn puzzle_number(&self) -> usize {
        self.puzzle_index + 1
    }

    #[must_use]
    pub fn solution(&self) -> &str {
        &self.solution
    }

    #[must_use]
    pub const fn max_guesses(&self) -> usize {
        self.max_guesses
    }

    #[must_use]
    pub const fn scoring(&self) -> ScoringRule {
        self.scoring
    }

    #[must_use]
    pub fn attempts(&self) -> &[String] {
        &self.attempts
    }

    #[must_use]
    pub fn scored_guesses(&self) -> &[ScoredGuess] {
        &self.scored_guesses
    }

    #[must_use]
    pub fn remaining_guesses(&self) -> usize {
        self.max_guesses.saturating_sub(self.attempts.len())
    }

    /// Best correctness observed for `letter`, or `None` if it hasn't been guessed
    #[must_use]
    pub fn letter_state(&self, letter: char) -> Option<Correctness> {
        letter_slot(letter).and_then(|slot| self.letter_state[slot])
    }

    /// Whether another guess is accepted
    #[must_use]
    pub fn can_play(&self) -> bool {
        !self.solved && self.attempts.len() < self.max_guesses
    }

    #[must_use]
    pub const fn is_solved(&self) -> bool {
        self.solved
    }

    #[must_use]
    pub fn status(&self) -> Status {
        if self.solved {
            Status::Won
        } else if self.can_play() {
            Status::InProgress
        } else {
            Status::Lost
        }
    }

    /// Submit a guess
    ///
    /// The word is trimmed and lowercased. Legality against the word lists is
    /// the caller's concern; this only checks the session's own rules.
    ///
    /// # Errors
    ///
    /// Returns `SessionError` without changing any state if:
    /// - The session is solved or out of guesses (`Closed`)
    /// - The word's length differs from the solution's (`WrongLength`)
    /// - The word was already guessed in this session (`AlreadyGuessed`)
    pub fn guess(&mut self, word: &str) -> Result<&ScoredGuess, SessionError> {
        if !self.can_play() {
            return Err(SessionError::Closed);
        }

        let word = word.trim().to_lowercase();
        let expected = self.solution.chars().count();
        let actual = word.chars().count();
        if actual != expected {
            return Err(SessionError::WrongLength { expected, actual });
        }

        if self.attempts.contains(&word) {
            return Err(SessionError::AlreadyGuessed(word));
        }

        let scored = self.scoring.score(&word, &self.solution);
        for letter in scored.letters() {
            if let Some(slot) = letter_slot(letter.ch()) {
                let best = self.letter_state[slot].map_or(letter.correctness(), |existing| {
                    existing.max(letter.correctness())
                });
                self.letter_state[slot] = Some(best);
            }
        }

        if word == self.solution {
            self.solved = true;
        }
        let index = self.scored_guesses.len();
        self.attempts.push(word);
        self.scored_guesses.push(scored);

        Ok(&self.scored_guesses[index])
    }

    /// Render the guess history
    ///
    /// With `reveal_letters` each guess shows its ANSI-coloured letters;
    /// without, only the coloured squares are shown so the board can be shared
    /// without giving the answer away. The public share of a finished game,
    /// with its answer row hidden, is [`Session::share_text`].
    #[must_use]
    pub fn render(&self, reveal_letters: bool) -> String {
        if reveal_letters {
            self.render_letters()
        } else {
            self.render_emojis()
        }
    }

    /// Every guess as ANSI-coloured letters, one per line
    #[must_use]
    pub fn render_letters(&self) -> String {
        self.scored_guesses
            .iter()
            .map(ScoredGuess::to_ansi)
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Every guess as coloured squares, one per line
    #[must_use]
    pub fn render_emojis(&self) -> String {
        self.scored_guesses
            .iter()
            .map(ScoredGuess::to_emoji)
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Shareable summary: header plus the square board
    ///
    /// ```text
    /// Wordle 12 3/6
    ///
    /// ⬛🟨⬛⬛⬛
    /// 🟩🟩⬛🟩🟩
    /// 🟩🟩🟩🟩🟩
    /// ```
    #[must_use]
    pub fn share_text(&self) -> String {
        let used = if self.solved {
            self.attempts.len().to_string()
        } else if self.can_play() {
            "-".to_string()
        } else {
            "X".to_string()
        };
        format!(
            "Wordle {} {used}/{}\n\n{}",
            self.puzzle_number(),
            self.max_guesses,
            self.render_emojis()
        )
    }

    /// The letters used so far, alphabetically, coloured by their best result
    #[must_use]
    pub fn format_used_letters(&self) -> String {
        let mut out = String::new();
        for (slot, state) in self.letter_state.iter().enumerate() {
            if let Some(correctness) = state {
                out.push_str(correctness.ansi_color());
                out.push(char::from(b'a' + slot as u8));
            }
        }
        if !out.is_empty() {
            out.push_str(RESET_TEXT);
        }
        out
    }
}

fn letter_slot(letter: char) -> Option<usize> {
    let lower = letter.to_ascii_lowercase();
    lower
        .is_ascii_lowercase()
        .then(|| (lower as u8 - b'a') as usize)
}
