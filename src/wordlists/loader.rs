//! Word list loading utilities
//!
//! Provides functions to load word lists from files or use embedded constants.

use super::Corpus;
use std::fs;
use std::io;
use std::path::Path;

/// File name of the ordered solution list inside a word list directory
pub const SOLUTIONS_FILE: &str = "solutions.txt";
/// File name of the allowed-guess list inside a word list directory
pub const ALLOWED_FILE: &str = "allowed.txt";

/// Normalize a list entry: trimmed, lowercase, letters only
///
/// Returns `None` for blank or non-alphabetic entries.
#[must_use]
pub fn normalize_word(raw: &str) -> Option<String> {
    let word = raw.trim().to_lowercase();
    if word.is_empty() || !word.chars().all(|c| c.is_ascii_lowercase()) {
        return None;
    }
    Some(word)
}

/// Load words from a file, one per line
///
/// Blank lines and entries that aren't plain letters are skipped. Order is
/// preserved, which matters for the solution list.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use wordle_rules::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/solutions.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<String>> {
    let content = fs::read_to_string(path)?;
    Ok(content.lines().filter_map(normalize_word).collect())
}

/// Load a corpus from a directory holding `solutions.txt` and `allowed.txt`
///
/// # Errors
///
/// Returns an I/O error if either file cannot be read.
pub fn load_corpus<P: AsRef<Path>>(dir: P) -> io::Result<Corpus> {
    let dir = dir.as_ref();
    let solutions = load_from_file(dir.join(SOLUTIONS_FILE))?;
    let allowed = load_from_file(dir.join(ALLOWED_FILE))?;
    Ok(Corpus::new(solutions, allowed))
}

/// Convert embedded string slice to owned words
///
/// # Examples
/// ```
/// use wordle_rules::wordlists::loader::words_from_slice;
/// use wordle_rules::wordlists::SOLUTIONS;
///
/// let words = words_from_slice(SOLUTIONS);
/// assert_eq!(words.len(), SOLUTIONS.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<String> {
    slice.iter().filter_map(|&s| normalize_word(s)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn words_from_slice_converts_valid_words() {
        let input = &["crane", "SLATE", " irate "];
        let words = words_from_slice(input);

        assert_eq!(words, vec!["crane", "slate", "irate"]);
    }

    #[test]
    fn words_from_slice_skips_invalid() {
        let input = &["crane", "cran3", "", "slate"];
        let words = words_from_slice(input);

        assert_eq!(words, vec!["crane", "slate"]);
    }

    #[test]
    fn words_from_slice_empty() {
        let input: &[&str] = &[];
        assert!(words_from_slice(input).is_empty());
    }

    #[test]
    fn load_from_embedded_solutions() {
        use crate::wordlists::SOLUTIONS;

        let words = words_from_slice(SOLUTIONS);
        assert_eq!(words.len(), SOLUTIONS.len());
    }

    #[test]
    fn load_corpus_from_directory() {
        let dir = std::env::temp_dir().join(format!("wordle_rules_loader_{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join(SOLUTIONS_FILE), "zesty\n\nParts\n").unwrap();
        fs::write(dir.join(ALLOWED_FILE), "aahed\nno way\n").unwrap();

        let corpus = load_corpus(&dir).unwrap();
        assert_eq!(corpus.solutions(), ["zesty".to_string(), "parts".to_string()]);
        assert!(corpus.contains("aahed"));
        assert!(!corpus.contains("no way"));

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn load_corpus_missing_directory() {
        assert!(load_corpus("/definitely/not/a/wordlist/dir").is_err());
    }
}
