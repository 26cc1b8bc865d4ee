//! Puzzle selection
//!
//! Maps calendar days and puzzle numbers onto the ordered solution list, and
//! answers whether a word is an acceptable guess.

mod selector;

pub use selector::{Puzzle, PuzzleSelector};
