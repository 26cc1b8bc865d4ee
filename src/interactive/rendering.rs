//! TUI rendering with ratatui
//!
//! Board, keyboard and message panels for the game.

use super::app::{App, InputMode, MessageStyle};
use crate::core::{Correctness, MAX_GUESS_LIMIT};
use crate::output::KEYBOARD_ROWS;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph},
};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Board and side panel
            Constraint::Length(3), // Input area
            Constraint::Length(1), // Status bar
        ])
        .split(f.area());

    render_header(f, app, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(chunks[1]);

    render_board(f, app, main_chunks[0]);
    render_side_panel(f, app, main_chunks[1]);

    render_input(f, app, chunks[2]);
    render_status(f, app, chunks[3]);
}

/// Tile colours for a correctness; `None` is an untried letter
fn tile_style(correctness: Option<Correctness>) -> Style {
    let base = Style::default().add_modifier(Modifier::BOLD);
    match correctness {
        Some(Correctness::Exact) => base.fg(Color::Black).bg(Color::Green),
        Some(Correctness::Present) => base.fg(Color::Black).bg(Color::Yellow),
        Some(Correctness::Absent) => base.fg(Color::White).bg(Color::DarkGray),
        None => base.fg(Color::White),
    }
}

fn tile(ch: char, correctness: Option<Correctness>) -> Span<'static> {
    Span::styled(format!(" {} ", ch.to_ascii_uppercase()), tile_style(correctness))
}

fn render_header(f: &mut Frame, app: &App, area: Rect) {
    let header = Paragraph::new(format!("WORDLE #{}", app.puzzle.number()))
        .style(
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Green)),
        );
    f.render_widget(header, area);
}

/// One line per guess slot: scored rows, then the row being typed, then blanks
fn board_lines(app: &App) -> Vec<Line<'static>> {
    let width = app.word_length();
    let mut lines: Vec<Line> = app
        .session
        .scored_guesses()
        .iter()
        .map(|guess| {
            let tiles = guess
                .letters()
                .iter()
                .flat_map(|l| [tile(l.ch(), Some(l.correctness())), Span::raw(" ")]);
            Line::from(tiles.collect::<Vec<_>>())
        })
        .collect();

    if app.session.can_play() {
        let typed = app.input_buffer.chars().map(Some);
        let typed_len = app.input_buffer.chars().count();
        let blanks = std::iter::repeat_n(None, width.saturating_sub(typed_len));
        let row = typed
            .chain(blanks)
            .flat_map(|c| [tile(c.unwrap_or('_'), None), Span::raw(" ")]);
        lines.push(Line::from(row.collect::<Vec<_>>()));
    }

    let rows = app.session.max_guesses().min(MAX_GUESS_LIMIT);
    while lines.len() < rows {
        let row = (0..width).flat_map(|_| [tile('·', None), Span::raw(" ")]);
        lines.push(Line::from(row.collect::<Vec<_>>()));
    }

    lines
}

fn render_board(f: &mut Frame, app: &App, area: Rect) {
    let board = Paragraph::new(board_lines(app))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .title(" Board ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        );
    f.render_widget(board, area);
}

fn render_side_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(5), Constraint::Min(3)])
        .split(area);

    render_keyboard(f, app, chunks[0]);
    render_messages(f, app, chunks[1]);
}

fn render_keyboard(f: &mut Frame, app: &App, area: Rect) {
    let lines: Vec<Line> = KEYBOARD_ROWS
        .iter()
        .map(|row| {
            let keys = row
                .chars()
                .map(|c| tile(c, app.session.letter_state(c)))
                .collect::<Vec<_>>();
            Line::from(keys)
        })
        .collect();

    let keyboard = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().title(" Letters ").borders(Borders::ALL));
    f.render_widget(keyboard, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_input(f: &mut Frame, app: &App, area: Rect) {
    let (title, content, color) = match app.input_mode {
        InputMode::GameOver => (
            " Game over | Press 'n' for a new game or 'q' to quit ",
            String::new(),
            Color::Green,
        ),
        InputMode::Typing => (
            " Type a guess | Enter to submit | Esc to quit ",
            app.input_buffer.to_uppercase(),
            Color::Yellow,
        ),
    };

    let input = Paragraph::new(content)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(color)),
        );

    f.render_widget(input, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(34),
            Constraint::Percentage(33),
            Constraint::Percentage(33),
        ])
        .split(area);

    let guesses = Paragraph::new(format!(
        "Guesses left: {}",
        app.session.remaining_guesses()
    ))
    .alignment(Alignment::Center);
    f.render_widget(guesses, chunks[0]);

    let stats = Paragraph::new(format!(
        "Games: {} | Win Rate: {:.0}% | Streak: {}",
        app.stats.total_games,
        app.stats.win_rate(),
        app.stats.current_streak
    ))
    .alignment(Alignment::Center);
    f.render_widget(stats, chunks[1]);

    let rule = Paragraph::new(format!("Scoring: {}", app.session.scoring().name()))
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(rule, chunks[2]);
}
