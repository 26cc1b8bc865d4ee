//! Player commands
//!
//! A command is an [`Action`] plus its optional arguments. Text commands look
//! like `start 12 4`, `guess crane`, `stop` or `help`.

use crate::error::ParseError;
use std::fmt;
use std::str::FromStr;

/// What the player wants to do
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    Start,
    Stop,
    Guess,
    Help,
}

impl Action {
    pub const ALL: [Self; 4] = [Self::Start, Self::Stop, Self::Guess, Self::Help];

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Start => "start",
            Self::Stop => "stop",
            Self::Guess => "guess",
            Self::Help => "help",
        }
    }
}

impl FromStr for Action {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "start" | "new" => Ok(Self::Start),
            "stop" | "quit-game" => Ok(Self::Stop),
            "guess" | "g" => Ok(Self::Guess),
            "help" | "?" => Ok(Self::Help),
            "" => Err(ParseError::MissingAction),
            other => Err(ParseError::UnknownAction(other.to_string())),
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A parsed command with its arguments mapped to names
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandArgs {
    pub action: Action,
    /// Word to guess, lowercased
    pub word: Option<String>,
    /// Specific puzzle to play; defaults to the current day
    pub puzzle_number: Option<i64>,
    /// Attempt budget for a new game; defaults to the configured value
    pub max_guesses: Option<i64>,
}

impl CommandArgs {
    #[must_use]
    pub const fn new(action: Action) -> Self {
        Self {
            action,
            word: None,
            puzzle_number: None,
            max_guesses: None,
        }
    }

    #[must_use]
    pub fn start(puzzle_number: Option<i64>, max_guesses: Option<i64>) -> Self {
        Self {
            puzzle_number,
            max_guesses,
            ..Self::new(Action::Start)
        }
    }

    #[must_use]
    pub fn guess(word: &str) -> Self {
        Self {
            word: Some(word.trim().to_lowercase()),
            ..Self::new(Action::Guess)
        }
    }

    /// Parse a whitespace-separated command line
    ///
    /// # Errors
    ///
    /// Returns `ParseError` for a missing or unknown action, a non-numeric
    /// puzzle number or budget, or surplus arguments.
    ///
    /// # Examples
    /// ```
    /// use wordle_rules::game::{Action, CommandArgs};
    ///
    /// let args = CommandArgs::parse("start 12 4").unwrap();
    /// assert_eq!(args.action, Action::Start);
    /// assert_eq!(args.puzzle_number, Some(12));
    /// assert_eq!(args.max_guesses, Some(4));
    /// ```
    pub fn parse(line: &str) -> Result<Self, ParseError> {
        let mut tokens = line.split_whitespace();
        let action: Action = tokens.next().ok_or(ParseError::MissingAction)?.parse()?;

        let mut args = Self::new(action);
        match action {
            Action::Start => {
                args.puzzle_number = tokens
                    .next()
                    .map(|t| parse_number("puzzle number", t.trim_start_matches('#')))
                    .transpose()?;
                args.max_guesses = tokens
                    .next()
                    .map(|t| parse_number("max guesses", t))
                    .transpose()?;
            }
            Action::Guess => {
                args.word = tokens.next().map(str::to_lowercase);
            }
            Action::Stop | Action::Help => {}
        }

        match tokens.next() {
            Some(extra) => Err(ParseError::UnexpectedArgument(extra.to_string())),
            None => Ok(args),
        }
    }
}

impl FromStr for CommandArgs {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

fn parse_number(field: &'static str, token: &str) -> Result<i64, ParseError> {
    token.parse().map_err(|_| ParseError::InvalidNumber {
        field,
        value: token.to_string(),
    })
}
