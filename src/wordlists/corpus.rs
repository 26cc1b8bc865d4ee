//! Indexed word corpus
//!
//! Keeps the ordered solution list for puzzle lookups and a sorted,
//! deduplicated copy of solutions ∪ allowed guesses for O(log n) legality
//! checks. Both are built once and never change.

use super::loader::words_from_slice;
use super::{ALLOWED, SOLUTIONS};

/// Solutions plus allowed guesses
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Corpus {
    solutions: Vec<String>,
    lookup: Vec<String>,
}

impl Corpus {
    /// Build a corpus from an ordered solution list and extra allowed guesses
    #[must_use]
    pub fn new(solutions: Vec<String>, allowed: Vec<String>) -> Self {
        let mut lookup: Vec<String> = solutions.iter().cloned().chain(allowed).collect();
        lookup.sort_unstable();
        lookup.dedup();

        Self { solutions, lookup }
    }

    /// The word lists compiled into the binary
    #[must_use]
    pub fn embedded() -> Self {
        Self::new(words_from_slice(SOLUTIONS), words_from_slice(ALLOWED))
    }

    /// Ordered solutions; index 0 is the first puzzle
    #[must_use]
    pub fn solutions(&self) -> &[String] {
        &self.solutions
    }

    #[must_use]
    pub fn solution(&self, index: usize) -> Option<&str> {
        self.solutions.get(index).map(String::as_str)
    }

    #[must_use]
    pub fn solution_count(&self) -> usize {
        self.solutions.len()
    }

    /// Number of distinct acceptable guesses
    #[must_use]
    pub fn guess_count(&self) -> usize {
        self.lookup.len()
    }

    /// Whether `word` is a solution or an allowed guess
    ///
    /// Expects a lowercase word; the lists are stored lowercase.
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.lookup
            .binary_search_by(|probe| probe.as_str().cmp(word))
            .is_ok()
    }
}

impl Default for Corpus {
    fn default() -> Self {
        Self::embedded()
    }
}
