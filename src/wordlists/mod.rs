//! Word lists for the puzzle
//!
//! Provides the embedded solution and allowed-guess lists compiled into the
//! binary, plus a [`Corpus`] that indexes them for lookups.

mod corpus;
mod embedded;
pub mod loader;

pub use corpus::Corpus;
pub use embedded::{ALLOWED, ALLOWED_COUNT, SOLUTIONS, SOLUTIONS_COUNT};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn solutions_count_matches_const() {
        assert_eq!(SOLUTIONS.len(), SOLUTIONS_COUNT);
    }

    #[test]
    fn allowed_count_matches_const() {
        assert_eq!(ALLOWED.len(), ALLOWED_COUNT);
    }

    #[test]
    fn solutions_are_valid_words() {
        for &word in SOLUTIONS {
            assert_eq!(word.len(), 5, "Word '{word}' is not 5 letters");
            assert!(
                word.chars().all(|c| c.is_ascii_lowercase()),
                "Word '{word}' contains non-lowercase chars"
            );
        }
    }

    #[test]
    fn allowed_are_valid_words() {
        for &word in ALLOWED {
            assert_eq!(word.len(), 5, "Word '{word}' is not 5 letters");
            assert!(
                word.chars().all(|c| c.is_ascii_lowercase()),
                "Word '{word}' contains non-lowercase chars"
            );
        }
    }

    #[test]
    fn lists_are_disjoint() {
        let solutions: std::collections::HashSet<_> = SOLUTIONS.iter().collect();
        for word in ALLOWED {
            assert!(
                !solutions.contains(word),
                "Allowed word '{word}' is also a solution"
            );
        }
    }

    #[test]
    fn solutions_are_unique() {
        let unique: std::collections::HashSet<_> = SOLUTIONS.iter().collect();
        assert_eq!(unique.len(), SOLUTIONS.len());
    }

    #[test]
    fn expected_counts() {
        assert_eq!(SOLUTIONS_COUNT, 399, "Expected 399 solution words");
        assert_eq!(ALLOWED_COUNT, 623, "Expected 623 allowed words");
    }
}
