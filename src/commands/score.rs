//! Score command
//!
//! Scores a single guess against a given solution, outside of any session.

use crate::core::{ScoredGuess, ScoringRule};

/// Result of scoring a guess
pub struct ScoreResult {
    pub guess: String,
    pub solution: String,
    pub rule: ScoringRule,
    pub scored: ScoredGuess,
}

/// Score `guess` against `solution` with `rule`
///
/// # Errors
///
/// Returns an error if either word is empty or contains anything but letters,
/// or if their lengths differ.
pub fn score_words(guess: &str, solution: &str, rule: ScoringRule) -> Result<ScoreResult, String> {
    let guess = normalize("guess", guess)?;
    let solution = normalize("solution", solution)?;

    let (guess_len, solution_len) = (guess.chars().count(), solution.chars().count());
    if guess_len != solution_len {
        return Err(format!(
            "Guess has {guess_len} letters but the solution has {solution_len}"
        ));
    }

    let scored = rule.score(&guess, &solution);
    Ok(ScoreResult {
        guess,
        solution,
        rule,
        scored,
    })
}

fn normalize(label: &str, word: &str) -> Result<String, String> {
    let word = word.trim().to_lowercase();
    if word.is_empty() || !word.chars().all(|c| c.is_ascii_lowercase()) {
        return Err(format!("Invalid {label}: '{word}' must contain only letters"));
    }
    Ok(word)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Correctness;

    #[test]
    fn score_valid_words() {
        let result = score_words("Snail", "parts", ScoringRule::Standard).unwrap();
        assert_eq!(result.guess, "snail");
        assert_eq!(result.solution, "parts");
        assert_eq!(result.scored.letters()[0].correctness(), Correctness::Present);
    }

    #[test]
    fn score_respects_rule() {
        let standard = score_words("geese", "crane", ScoringRule::Standard).unwrap();
        let naive = score_words("geese", "crane", ScoringRule::Naive).unwrap();
        assert_ne!(standard.scored, naive.scored);
        assert_eq!(naive.rule, ScoringRule::Naive);
    }

    #[test]
    fn score_length_mismatch() {
        let err = score_words("part", "parts", ScoringRule::Standard).err().unwrap();
        assert_eq!(err, "Guess has 4 letters but the solution has 5");
    }

    #[test]
    fn score_rejects_non_letters() {
        assert!(score_words("pa1ts", "parts", ScoringRule::Standard).is_err());
        assert!(score_words("parts", "", ScoringRule::Standard).is_err());
    }
}
