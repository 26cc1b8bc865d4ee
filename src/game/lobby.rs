//! Command dispatch against per-player sessions
//!
//! The lobby is the game loop: it resolves puzzles, creates and retires
//! sessions in its [`SessionStore`], and turns every outcome into a [`Reply`].

use super::action::{Action, CommandArgs};
use super::store::{InMemoryStore, PlayerId, SessionStore};
use crate::config::GameConfig;
use crate::core::{MAX_GUESS_LIMIT, Session};
use crate::error::LobbyError;
use crate::puzzle::PuzzleSelector;
use chrono::{DateTime, Utc};
use std::sync::Arc;

/// Usage text for the `help` action
pub const HELP_TEXT: &str = "\
Play Wordle! Guess the hidden five-letter word.
  start [puzzle-number] [max-guesses]  begin a game (defaults: today's puzzle, 6 guesses)
  guess <word>                         submit a guess
  stop                                 give up and reveal the word
  help                                 show this message
Green means the letter is in the right spot, yellow means it is in the word
but elsewhere, and grey/black means it is not in the word.";

/// Response to a command
///
/// `private` goes only to the player who issued the command. `public` is set
/// when a game finishes and holds a share that doesn't reveal any letters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    pub private: String,
    pub public: Option<String>,
}

impl Reply {
    fn private(text: impl Into<String>) -> Self {
        Self {
            private: text.into(),
            public: None,
        }
    }
}

/// Routes player commands to their sessions
#[derive(Debug)]
pub struct Lobby<S: SessionStore = InMemoryStore> {
    store: S,
    selector: Arc<PuzzleSelector>,
    config: GameConfig,
}

impl Lobby<InMemoryStore> {
    /// Lobby with an in-memory store
    #[must_use]
    pub fn in_memory(selector: Arc<PuzzleSelector>, config: GameConfig) -> Self {
        Self::new(InMemoryStore::new(), selector, config)
    }
}

impl<S: SessionStore> Lobby<S> {
    #[must_use]
    pub const fn new(store: S, selector: Arc<PuzzleSelector>, config: GameConfig) -> Self {
        Self {
            store,
            selector,
            config,
        }
    }

    #[must_use]
    pub const fn store(&self) -> &S {
        &self.store
    }

    #[must_use]
    pub fn selector(&self) -> &PuzzleSelector {
        &self.selector
    }

    #[must_use]
    pub const fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Handle a command, turning failures into a private reply
    pub fn handle(&mut self, player: &PlayerId, args: &CommandArgs, now: DateTime<Utc>) -> Reply {
        match self.execute(player, args, now) {
            Ok(reply) => reply,
            Err(err) => {
                tracing::warn!(%player, action = %args.action, error = %err, "command rejected");
                Reply::private(err.to_string())
            }
        }
    }

    /// Handle a command
    ///
    /// # Errors
    ///
    /// Returns `LobbyError` when the command can't be carried out; no session
    /// state changes in that case.
    pub fn execute(
        &mut self,
        player: &PlayerId,
        args: &CommandArgs,
        now: DateTime<Utc>,
    ) -> Result<Reply, LobbyError> {
        match args.action {
            Action::Start => self.start(player, args, now),
            Action::Stop => self.stop(player),
            Action::Guess => self.guess_word(player, args),
            Action::Help => Ok(Reply::private(HELP_TEXT)),
        }
    }

    /// Start a new game for the player. Fails if they already have one.
    fn start(
        &mut self,
        player: &PlayerId,
        args: &CommandArgs,
        now: DateTime<Utc>,
    ) -> Result<Reply, LobbyError> {
        if self.store.contains(player)? {
            return Err(LobbyError::AlreadyActive);
        }

        let max_guesses = match args.max_guesses {
            Some(requested) => usize::try_from(requested)
                .ok()
                .filter(|n| (1..=MAX_GUESS_LIMIT).contains(n))
                .ok_or(LobbyError::InvalidMaxGuesses(requested))?,
            None => self.config.max_guesses,
        };

        let puzzle = match args.puzzle_number {
            Some(number) => self.selector.get_specific_solution(number)?,
            None => self.selector.word_of_the_day(&now)?,
        };

        let session = Session::new(puzzle.solution(), max_guesses, puzzle.index())
            .with_scoring(self.config.scoring);
        self.store.save(player, session)?;

        tracing::info!(%player, puzzle = puzzle.number(), max_guesses, "session started");
        Ok(Reply::private(format!(
            "Started Wordle #{} with {max_guesses} guesses. Submit one with `guess <word>`.",
            puzzle.number()
        )))
    }

    fn stop(&mut self, player: &PlayerId) -> Result<Reply, LobbyError> {
        let session = self
            .store
            .delete(player)?
            .ok_or(LobbyError::NoActiveSession)?;

        tracing::info!(%player, puzzle = session.puzzle_number(), "session stopped");
        Ok(Reply::private(format!(
            "Stopped Wordle #{}. The word was {}.",
            session.puzzle_number(),
            session.solution().to_uppercase()
        )))
    }

    fn guess_word(&mut self, player: &PlayerId, args: &CommandArgs) -> Result<Reply, LobbyError> {
        let mut session = self
            .store
            .load(player)?
            .ok_or(LobbyError::NoActiveSession)?;

        let word = args
            .word
            .as_deref()
            .map(str::trim)
            .filter(|w| !w.is_empty())
            .ok_or(LobbyError::MissingWord)?
            .to_lowercase();

        if !self.selector.is_guess_valid(&word) {
            return Err(LobbyError::InvalidGuess(word));
        }

        session.guess(&word)?;

        if session.is_solved() {
            // player solved the puzzle. share it
            self.store.delete(player)?;
            tracing::info!(%player, puzzle = session.puzzle_number(), attempts = session.attempts().len(), "puzzle solved");
            return Ok(Reply {
                private: format!("You guessed the word!\n{}", session.render(true)),
                public: Some(session.share_text()),
            });
        }

        if !session.can_play() {
            // out of tries, a different outcome than solving the puzzle
            self.store.delete(player)?;
            tracing::info!(%player, puzzle = session.puzzle_number(), "out of guesses");
            return Ok(Reply {
                private: format!(
                    "You ran out of guesses! The word was {}.\n{}",
                    session.solution().to_uppercase(),
                    session.render(true)
                ),
                public: Some(session.share_text()),
            });
        }

        let reply = format!(
            "{}\n{} guesses left. Letters used: {}",
            session.render(true),
            session.remaining_guesses(),
            session.format_used_letters()
        );
        self.store.save(player, session)?;
        Ok(Reply::private(reply))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{GREEN_SQUARE, ScoringRule};
    use crate::error::{SelectError, SessionError};
    use crate::wordlists::SOLUTIONS;
    use chrono::TimeZone;

    fn now() -> DateTime<Utc> {
        // Three days after the epoch: puzzle #4
        Utc.with_ymd_and_hms(2021, 6, 22, 12, 0, 0).unwrap()
    }

    fn lobby() -> Lobby {
        Lobby::in_memory(Arc::new(PuzzleSelector::embedded()), GameConfig::default())
    }

    fn player() -> PlayerId {
        PlayerId::from("player-1")
    }

    fn non_solutions(solution: &str, count: usize) -> Vec<&'static str> {
        SOLUTIONS
            .iter()
            .copied()
            .filter(|&w| w != solution)
            .take(count)
            .collect()
    }

    #[test]
    fn start_defaults_to_word_of_the_day() {
        let mut lobby = lobby();
        let reply = lobby
            .execute(&player(), &CommandArgs::new(Action::Start), now())
            .unwrap();
        assert!(reply.private.starts_with("Started Wordle #4 with 6 guesses"));
        assert!(reply.public.is_none());

        let session = lobby.store().load(&player()).unwrap().unwrap();
        assert_eq!(session.solution(), SOLUTIONS[3]);
        assert_eq!(session.max_guesses(), 6);
        assert_eq!(session.scoring(), ScoringRule::Standard);
    }

    #[test]
    fn start_specific_puzzle_and_budget() {
        let mut lobby = lobby();
        lobby
            .execute(&player(), &CommandArgs::start(Some(5), Some(3)), now())
            .unwrap();
        let session = lobby.store().load(&player()).unwrap().unwrap();
        assert_eq!(session.solution(), SOLUTIONS[4]);
        assert_eq!(session.puzzle_number(), 5);
        assert_eq!(session.max_guesses(), 3);
    }

    #[test]
    fn start_uses_configured_scoring() {
        let config = GameConfig::default().with_scoring(ScoringRule::Naive);
        let mut lobby = Lobby::in_memory(Arc::new(PuzzleSelector::embedded()), config);
        lobby
            .execute(&player(), &CommandArgs::start(Some(1), None), now())
            .unwrap();
        let session = lobby.store().load(&player()).unwrap().unwrap();
        assert_eq!(session.scoring(), ScoringRule::Naive);
    }

    #[test]
    fn start_twice_fails() {
        let mut lobby = lobby();
        let start = CommandArgs::new(Action::Start);
        lobby.execute(&player(), &start, now()).unwrap();
        assert!(matches!(
            lobby.execute(&player(), &start, now()),
            Err(LobbyError::AlreadyActive)
        ));
    }

    #[test]
    fn start_out_of_range_puzzle() {
        let mut lobby = lobby();
        let err = lobby
            .execute(&player(), &CommandArgs::start(Some(-1), None), now())
            .unwrap_err();
        assert!(matches!(
            err,
            LobbyError::Select(SelectError::OutOfRange { .. })
        ));
        assert!(!lobby.store().contains(&player()).unwrap());
    }

    #[test]
    fn start_rejects_zero_budget() {
        let mut lobby = lobby();
        assert!(matches!(
            lobby.execute(&player(), &CommandArgs::start(None, Some(0)), now()),
            Err(LobbyError::InvalidMaxGuesses(0))
        ));
    }

    #[test]
    fn start_rejects_oversized_budget() {
        let mut lobby = lobby();
        let start = CommandArgs::parse("start 1 9223372036854775807").unwrap();
        let reply = lobby.handle(&player(), &start, now());
        assert_eq!(
            reply.private,
            LobbyError::InvalidMaxGuesses(i64::MAX).to_string()
        );
        assert!(reply.public.is_none());
        assert!(!lobby.store().contains(&player()).unwrap());

        assert!(matches!(
            lobby.execute(&player(), &CommandArgs::start(Some(1), Some(27)), now()),
            Err(LobbyError::InvalidMaxGuesses(27))
        ));
        lobby
            .execute(&player(), &CommandArgs::start(Some(1), Some(26)), now())
            .unwrap();
        let session = lobby.store().load(&player()).unwrap().unwrap();
        assert_eq!(session.max_guesses(), MAX_GUESS_LIMIT);
    }

    #[test]
    fn guess_without_session() {
        let mut lobby = lobby();
        assert!(matches!(
            lobby.execute(&player(), &CommandArgs::guess("crane"), now()),
            Err(LobbyError::NoActiveSession)
        ));
    }

    #[test]
    fn guess_requires_word() {
        let mut lobby = lobby();
        lobby
            .execute(&player(), &CommandArgs::new(Action::Start), now())
            .unwrap();
        assert!(matches!(
            lobby.execute(&player(), &CommandArgs::new(Action::Guess), now()),
            Err(LobbyError::MissingWord)
        ));
    }

    #[test]
    fn guess_must_be_in_word_list() {
        let mut lobby = lobby();
        lobby
            .execute(&player(), &CommandArgs::new(Action::Start), now())
            .unwrap();
        let err = lobby
            .execute(&player(), &CommandArgs::guess("lllll"), now())
            .unwrap_err();
        assert!(matches!(err, LobbyError::InvalidGuess(ref w) if w == "lllll"));
        assert_eq!(err.to_string(), "'lllll' is not a valid guess");
    }

    #[test]
    fn repeated_guess_is_rejected_and_not_counted() {
        let mut lobby = lobby();
        lobby
            .execute(&player(), &CommandArgs::start(Some(1), None), now())
            .unwrap();
        let word = non_solutions(SOLUTIONS[0], 1)[0];
        lobby
            .execute(&player(), &CommandArgs::guess(word), now())
            .unwrap();
        assert!(matches!(
            lobby.execute(&player(), &CommandArgs::guess(word), now()),
            Err(LobbyError::Session(SessionError::AlreadyGuessed(_)))
        ));
        let session = lobby.store().load(&player()).unwrap().unwrap();
        assert_eq!(session.attempts().len(), 1);
    }

    #[test]
    fn solving_retires_the_session() {
        let mut lobby = lobby();
        lobby
            .execute(&player(), &CommandArgs::start(Some(2), None), now())
            .unwrap();
        let reply = lobby
            .execute(&player(), &CommandArgs::guess(SOLUTIONS[1]), now())
            .unwrap();

        assert!(reply.private.starts_with("You guessed the word!"));
        let public = reply.public.unwrap();
        assert!(public.starts_with("Wordle 2 1/6"));
        assert!(public.ends_with(&GREEN_SQUARE.repeat(5)));
        assert!(!public.contains(SOLUTIONS[1]));
        assert!(!lobby.store().contains(&player()).unwrap());
    }

    #[test]
    fn running_out_of_guesses_retires_the_session() {
        let mut lobby = lobby();
        lobby
            .execute(&player(), &CommandArgs::start(Some(1), Some(2)), now())
            .unwrap();
        let words = non_solutions(SOLUTIONS[0], 2);

        let first = lobby
            .execute(&player(), &CommandArgs::guess(words[0]), now())
            .unwrap();
        assert!(first.public.is_none());
        assert!(first.private.contains("1 guesses left"));

        let last = lobby
            .execute(&player(), &CommandArgs::guess(words[1]), now())
            .unwrap();
        assert!(last.private.starts_with("You ran out of guesses!"));
        assert!(last.private.contains(&SOLUTIONS[0].to_uppercase()));
        assert!(last.public.unwrap().starts_with("Wordle 1 X/2"));
        assert!(!lobby.store().contains(&player()).unwrap());
    }

    #[test]
    fn stop_reveals_and_removes() {
        let mut lobby = lobby();
        lobby
            .execute(&player(), &CommandArgs::start(Some(3), None), now())
            .unwrap();
        let reply = lobby
            .execute(&player(), &CommandArgs::new(Action::Stop), now())
            .unwrap();
        assert_eq!(
            reply.private,
            format!("Stopped Wordle #3. The word was {}.", SOLUTIONS[2].to_uppercase())
        );
        assert!(!lobby.store().contains(&player()).unwrap());

        assert!(matches!(
            lobby.execute(&player(), &CommandArgs::new(Action::Stop), now()),
            Err(LobbyError::NoActiveSession)
        ));
    }

    #[test]
    fn handle_turns_errors_into_replies() {
        let mut lobby = lobby();
        let reply = lobby.handle(&player(), &CommandArgs::guess("crane"), now());
        assert_eq!(reply.private, LobbyError::NoActiveSession.to_string());
        assert!(reply.public.is_none());
    }

    #[test]
    fn help_text() {
        let mut lobby = lobby();
        let reply = lobby.handle(&player(), &CommandArgs::new(Action::Help), now());
        assert_eq!(reply.private, HELP_TEXT);
    }

    #[test]
    fn players_play_independently() {
        let mut lobby = lobby();
        let alice = PlayerId::from("alice");
        let bob = PlayerId::from("bob");
        lobby
            .execute(&alice, &CommandArgs::start(Some(1), None), now())
            .unwrap();
        lobby
            .execute(&bob, &CommandArgs::start(Some(2), None), now())
            .unwrap();
        lobby
            .execute(&alice, &CommandArgs::guess(SOLUTIONS[0]), now())
            .unwrap();

        assert!(!lobby.store().contains(&alice).unwrap());
        assert!(lobby.store().contains(&bob).unwrap());
    }
}
