//! Guess scoring
//!
//! Two rules are available:
//! - [`ScoringRule::Standard`] applies Wordle's duplicate-letter handling: a
//!   repeated guess letter earns at most as many Present/Exact marks as the
//!   solution has occurrences of it.
//! - [`ScoringRule::Naive`] classifies every position independently, so a
//!   repeated letter can be marked Present more often than it occurs.
//!
//! Both agree on guesses without repeated letters. Callers are expected to
//! pass a guess with the same length as the solution.

use super::feedback::{Correctness, ScoredGuess, ScoredLetter};
use rustc_hash::FxHashMap;

/// Scoring rule applied by a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScoringRule {
    /// Exact matches first, then Present while occurrences remain
    #[default]
    Standard,
    /// Independent per-position classification
    Naive,
}

impl ScoringRule {
    /// Parse a rule name. Unknown names fall back to `Standard`.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name.to_lowercase().as_str() {
            "naive" | "simple" | "legacy" => Self::Naive,
            _ => Self::Standard,
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Standard => "standard",
            Self::Naive => "naive",
        }
    }

    /// Score `guess` against `solution` with this rule
    #[must_use]
    pub fn score(self, guess: &str, solution: &str) -> ScoredGuess {
        match self {
            Self::Standard => score_standard(guess, solution),
            Self::Naive => score_naive(guess, solution),
        }
    }
}

/// Score a guess with the standard rule
///
/// # Examples
/// ```
/// use wordle_rules::core::{Correctness, score};
///
/// let scored = score("pants", "parts");
/// assert_eq!(
///     scored.correctness(),
///     vec![
///         Correctness::Exact,
///         Correctness::Exact,
///         Correctness::Absent,
///         Correctness::Exact,
///         Correctness::Exact,
///     ]
/// );
/// ```
#[must_use]
pub fn score(guess: &str, solution: &str) -> ScoredGuess {
    score_standard(guess, solution)
}

/// Two-pass scoring with duplicate-letter handling
///
/// 1. First pass: mark exact matches and remove them from the available pool
/// 2. Second pass: mark Present only while the pool still holds that letter
#[must_use]
pub fn score_standard(guess: &str, solution: &str) -> ScoredGuess {
    let guess_chars: Vec<char> = guess.chars().collect();
    let solution_chars: Vec<char> = solution.chars().collect();

    let mut result = vec![Correctness::Absent; guess_chars.len()];
    let mut available: FxHashMap<char, usize> = FxHashMap::default();
    for &ch in &solution_chars {
        *available.entry(ch).or_insert(0) += 1;
    }

    // First pass: greens
    for (i, &ch) in guess_chars.iter().enumerate() {
        if solution_chars.get(i) == Some(&ch) {
            result[i] = Correctness::Exact;
            if let Some(count) = available.get_mut(&ch) {
                *count = count.saturating_sub(1);
            }
        }
    }

    // Second pass: yellows from whatever is left
    for (i, &ch) in guess_chars.iter().enumerate() {
        if result[i] == Correctness::Exact {
            continue;
        }
        if let Some(count) = available.get_mut(&ch)
            && *count > 0
        {
            result[i] = Correctness::Present;
            *count -= 1;
        }
    }

    ScoredGuess::new(
        guess_chars
            .into_iter()
            .zip(result)
            .map(|(ch, correctness)| ScoredLetter::new(ch, correctness))
            .collect(),
    )
}

/// Independent per-position scoring
///
/// Exact if the letter matches at this position, Present if it occurs anywhere
/// in the solution, Absent otherwise.
#[must_use]
pub fn score_naive(guess: &str, solution: &str) -> ScoredGuess {
    let solution_chars: Vec<char> = solution.chars().collect();

    ScoredGuess::new(
        guess
            .chars()
            .enumerate()
            .map(|(i, ch)| {
                let correctness = if solution_chars.get(i) == Some(&ch) {
                    Correctness::Exact
                } else if solution_chars.contains(&ch) {
                    Correctness::Present
                } else {
                    Correctness::Absent
                };
                ScoredLetter::new(ch, correctness)
            })
            .collect(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::feedback::{BLACK_SQUARE, GREEN_SQUARE, YELLOW_SQUARE};
    use super::Correctness::{Absent, Exact, Present};

    const SOLUTION: &str = "parts";

    #[test]
    fn identical_words_are_all_exact() {
        for word in ["parts", "crane", "sissy", "aaaaa"] {
            for rule in [ScoringRule::Standard, ScoringRule::Naive] {
                let scored = rule.score(word, word);
                assert!(scored.is_exact(), "{word} under {}", rule.name());
            }
        }
    }

    #[test]
    fn disjoint_words_are_all_absent() {
        for rule in [ScoringRule::Standard, ScoringRule::Naive] {
            let scored = rule.score("mucky", SOLUTION);
            assert_eq!(scored.correctness(), vec![Absent; 5]);
            assert_eq!(scored.to_emoji(), BLACK_SQUARE.repeat(5));
        }
    }

    #[test]
    fn exact_guess_renders_green() {
        let scored = score("parts", SOLUTION);
        assert_eq!(scored.to_emoji(), GREEN_SQUARE.repeat(5));
    }

    #[test]
    fn snail_against_parts() {
        for rule in [ScoringRule::Standard, ScoringRule::Naive] {
            let scored = rule.score("snail", SOLUTION);
            assert_eq!(
                scored.correctness(),
                vec![Present, Absent, Present, Absent, Absent]
            );
            assert_eq!(
                scored.to_emoji(),
                [YELLOW_SQUARE, BLACK_SQUARE, YELLOW_SQUARE, BLACK_SQUARE, BLACK_SQUARE].concat()
            );
        }
    }

    #[test]
    fn pants_against_parts() {
        for rule in [ScoringRule::Standard, ScoringRule::Naive] {
            let scored = rule.score("pants", SOLUTION);
            assert_eq!(
                scored.correctness(),
                vec![Exact, Exact, Absent, Exact, Exact]
            );
        }
    }

    #[test]
    fn letters_keep_guess_characters() {
        let scored = score("snail", SOLUTION);
        assert_eq!(scored.word(), "snail");
        assert_eq!(scored.letters()[0].ch(), 's');
    }

    #[test]
    fn standard_caps_repeated_letters() {
        // Only one 'e' in "crane" and the final 'e' of "geese" claims it
        let scored = score_standard("geese", "crane");
        assert_eq!(
            scored.correctness(),
            vec![Absent, Absent, Absent, Absent, Exact]
        );
    }

    #[test]
    fn naive_overcounts_repeated_letters() {
        let scored = score_naive("geese", "crane");
        assert_eq!(
            scored.correctness(),
            vec![Absent, Present, Present, Absent, Exact]
        );
    }

    #[test]
    fn standard_green_takes_priority_over_yellow() {
        // ROBOT vs FLOOR: first 'o' yellow, second 'o' green
        let scored = score_standard("robot", "floor");
        assert_eq!(
            scored.correctness(),
            vec![Present, Present, Absent, Exact, Absent]
        );
    }

    #[test]
    fn standard_assigns_yellows_left_to_right() {
        // "speed" vs "abide": a single 'e' in the solution, so only the first 'e' is yellow
        let scored = score_standard("speed", "abide");
        assert_eq!(
            scored.correctness(),
            vec![Absent, Absent, Present, Absent, Present]
        );
    }

    #[test]
    fn scoring_is_deterministic() {
        assert_eq!(score("crane", "slate"), score("crane", "slate"));
        assert_eq!(score_naive("crane", "slate"), score_naive("crane", "slate"));
    }

    #[test]
    fn rule_from_name() {
        assert_eq!(ScoringRule::from_name("naive"), ScoringRule::Naive);
        assert_eq!(ScoringRule::from_name("NAIVE"), ScoringRule::Naive);
        assert_eq!(ScoringRule::from_name("standard"), ScoringRule::Standard);
        assert_eq!(ScoringRule::from_name("unknown"), ScoringRule::Standard);
        assert_eq!(ScoringRule::default(), ScoringRule::Standard);
    }
}
