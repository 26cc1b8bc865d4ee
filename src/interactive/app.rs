//! TUI application state and logic

use crate::config::GameConfig;
use crate::core::{Session, Status};
use crate::puzzle::{Puzzle, PuzzleSelector};
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::sync::Arc;

/// Number of messages kept in the message panel
const MESSAGE_LIMIT: usize = 5;

/// Application state
pub struct App {
    pub selector: Arc<PuzzleSelector>,
    pub config: GameConfig,
    pub puzzle: Puzzle,
    pub session: Session,
    pub input_buffer: String,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub should_quit: bool,
    pub input_mode: InputMode,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Typing,
    GameOver,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

#[derive(Debug, Default, Clone)]
pub struct Statistics {
    pub total_games: usize,
    pub games_won: usize,
    pub current_streak: usize,
    /// Wins by number of guesses used; index 0 is a one-guess win
    pub guess_distribution: Vec<usize>,
}

impl Statistics {
    fn record_win(&mut self, guesses: usize) {
        self.total_games += 1;
        self.games_won += 1;
        self.current_streak += 1;
        if self.guess_distribution.len() < guesses {
            self.guess_distribution.resize(guesses, 0);
        }
        self.guess_distribution[guesses - 1] += 1;
    }

    fn record_loss(&mut self) {
        self.total_games += 1;
        self.current_streak = 0;
    }

    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.total_games == 0 {
            0.0
        } else {
            self.games_won as f64 / self.total_games as f64 * 100.0
        }
    }
}

impl App {
    #[must_use]
    pub fn new(selector: Arc<PuzzleSelector>, config: GameConfig, puzzle: Puzzle) -> Self {
        let session = Self::session_for(&config, &puzzle);
        let mut app = Self {
            selector,
            config,
            puzzle,
            session,
            input_buffer: String::new(),
            messages: Vec::new(),
            stats: Statistics::default(),
            should_quit: false,
            input_mode: InputMode::Typing,
        };
        app.announce_puzzle();
        app
    }

    fn session_for(config: &GameConfig, puzzle: &Puzzle) -> Session {
        Session::new(puzzle.solution(), config.max_guesses, puzzle.index())
            .with_scoring(config.scoring)
    }

    fn announce_puzzle(&mut self) {
        self.add_message(
            &format!(
                "Wordle #{}: guess the {}-letter word in {} tries.",
                self.puzzle.number(),
                self.word_length(),
                self.session.max_guesses()
            ),
            MessageStyle::Info,
        );
    }

    #[must_use]
    pub fn word_length(&self) -> usize {
        self.session.solution().chars().count()
    }

    /// Submit the input buffer as a guess
    pub fn submit_guess(&mut self) {
        let word = self.input_buffer.to_lowercase();

        if word.chars().count() != self.word_length() {
            self.add_message("Not enough letters", MessageStyle::Error);
            return;
        }
        if !self.selector.is_guess_valid(&word) {
            self.add_message(
                &format!("{} is not in the word list", word.to_uppercase()),
                MessageStyle::Error,
            );
            return;
        }
        if let Err(err) = self.session.guess(&word) {
            self.add_message(&err.to_string(), MessageStyle::Error);
            return;
        }
        self.input_buffer.clear();

        if self.session.is_solved() {
            let guesses = self.session.attempts().len();
            self.stats.record_win(guesses);
            self.input_mode = InputMode::GameOver;
            tracing::info!(puzzle = self.puzzle.number(), guesses, "puzzle solved");

            let celebration = match guesses {
                1 => "Genius! Solved in one.",
                2 => "Magnificent! Two guesses.",
                3 => "Impressive! Three guesses.",
                4 => "Splendid! Four guesses.",
                5 => "Great! Five guesses.",
                _ => "Phew! Solved.",
            };
            self.add_message(celebration, MessageStyle::Success);
            self.add_message("Press 'n' for a new game or 'q' to quit.", MessageStyle::Info);
        } else if !self.session.can_play() {
            self.stats.record_loss();
            self.input_mode = InputMode::GameOver;
            tracing::info!(puzzle = self.puzzle.number(), "out of guesses");

            self.add_message(
                &format!(
                    "Out of guesses! The word was {}.",
                    self.session.solution().to_uppercase()
                ),
                MessageStyle::Error,
            );
            self.add_message("Press 'n' for a new game or 'q' to quit.", MessageStyle::Info);
        }
    }

    /// Start over on a random puzzle
    pub fn new_game(&mut self) {
        if self.session.status() == Status::InProgress
            && !self.session.attempts().is_empty()
        {
            self.stats.record_loss();
        }

        let Some(puzzle) = self.selector.random_puzzle(&mut rand::rng()) else {
            self.add_message("No puzzles available", MessageStyle::Error);
            return;
        };
        self.start_puzzle(puzzle);
    }

    /// Replace the current game with `puzzle`
    pub fn start_puzzle(&mut self, puzzle: Puzzle) {
        self.session = Self::session_for(&self.config, &puzzle);
        self.puzzle = puzzle;
        self.input_buffer.clear();
        self.messages.clear();
        self.input_mode = InputMode::Typing;
        self.announce_puzzle();
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        if self.messages.len() > MESSAGE_LIMIT {
            self.messages.remove(0);
        }
    }

    /// Apply one key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        match self.input_mode {
            InputMode::GameOver => match key.code {
                KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
                KeyCode::Char('n') => self.new_game(),
                _ => {}
            },
            InputMode::Typing => match key.code {
                KeyCode::Esc => self.should_quit = true,
                KeyCode::Char(c) if c.is_ascii_alphabetic() => {
                    if self.input_buffer.chars().count() < self.word_length() {
                        self.input_buffer.push(c.to_ascii_lowercase());
                    }
                }
                KeyCode::Backspace => {
                    self.input_buffer.pop();
                }
                KeyCode::Enter => self.submit_guess(),
                _ => {}
            },
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind == KeyEventKind::Press {
                app.handle_key(key);
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
