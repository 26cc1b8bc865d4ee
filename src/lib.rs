//! Wordle Rules
//!
//! Rules engine for a daily five-letter word puzzle: scoring guesses, tracking
//! a player's session, and choosing the puzzle for a given day.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_rules::core::{Correctness, Session, score};
//!
//! // Score a single guess
//! let scored = score("snail", "parts");
//! assert_eq!(scored.correctness()[0], Correctness::Present);
//!
//! // Play a session
//! let mut session = Session::new("parts", 6, 0);
//! session.guess("pants").unwrap();
//! assert!(session.can_play());
//! println!("{}", session.render(false));
//! ```

// Core rules: scoring and sessions
pub mod core;

// Error types
pub mod error;

// Game configuration
pub mod config;

// Word lists
pub mod wordlists;

// Puzzle selection
pub mod puzzle;

// Multi-player command handling
pub mod game;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
