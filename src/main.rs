//! Wordle - CLI
//!
//! Play the daily puzzle in a TUI or a plain terminal, or use the rules engine
//! directly to score guesses and look up puzzles.

use anyhow::{Context, Result};
use chrono::Utc;
use clap::{Parser, Subcommand};
use std::io;
use std::sync::Arc;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;
use wordle_rules::{
    commands::{check_word, run_simple, score_words, today},
    config::GameConfig,
    core::{DEFAULT_MAX_GUESSES, MAX_GUESS_LIMIT, ScoringRule},
    game::Lobby,
    output::{print_check_result, print_score_result, print_today_result},
    puzzle::PuzzleSelector,
    wordlists::{Corpus, loader::load_corpus},
};

#[derive(Parser)]
#[command(
    name = "wordle_rules",
    about = "Daily five-letter word puzzle with a terminal board",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Number of guesses allowed per game
    #[arg(short = 'g', long, global = true, default_value_t = DEFAULT_MAX_GUESSES)]
    max_guesses: usize,

    /// Scoring rule: standard (default) or naive
    #[arg(short, long, global = true, default_value = "standard")]
    scoring: String,

    /// Wordlist: 'embedded' (default) or a directory holding solutions.txt and allowed.txt
    #[arg(short = 'w', long, global = true, default_value = "embedded")]
    wordlist: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play {
        /// Play a specific puzzle number instead of today's
        #[arg(short, long, conflicts_with = "random")]
        puzzle: Option<i64>,

        /// Play a random puzzle
        #[arg(short, long)]
        random: bool,
    },

    /// Simple CLI mode (line-based commands, no TUI)
    Simple,

    /// Show today's puzzle number
    Today {
        /// Also print the solution
        #[arg(long)]
        reveal: bool,
    },

    /// Score a guess against a solution
    Score {
        /// The guessed word
        guess: String,

        /// The word it is scored against
        solution: String,
    },

    /// Check whether a word is accepted as a guess
    Check {
        /// Word to look up
        word: String,
    },
}

/// Load the corpus selected by the -w flag
fn load_wordlist(wordlist: &str) -> Result<Corpus> {
    match wordlist {
        "embedded" => Ok(Corpus::embedded()),
        dir => load_corpus(dir).with_context(|| format!("failed to load word lists from {dir}")),
    }
}

fn main() -> Result<()> {
    // Logs go to stderr so they stay out of the board and command output.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::WARN.into())
                .from_env_lossy(),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    anyhow::ensure!(
        (1..=MAX_GUESS_LIMIT).contains(&cli.max_guesses),
        "--max-guesses must be between 1 and {MAX_GUESS_LIMIT}"
    );
    let config = GameConfig::default()
        .with_max_guesses(cli.max_guesses)
        .with_scoring(ScoringRule::from_name(&cli.scoring));

    let corpus = load_wordlist(&cli.wordlist)?;
    anyhow::ensure!(
        corpus.solution_count() > 0,
        "word list '{}' has no solutions",
        cli.wordlist
    );
    let selector = Arc::new(PuzzleSelector::new(corpus, config.epoch));

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play {
        puzzle: None,
        random: false,
    });

    match command {
        Commands::Play { puzzle, random } => run_play_command(selector, config, puzzle, random),
        Commands::Simple => run_simple_command(selector, config),
        Commands::Today { reveal } => {
            let result = today(&selector, Utc::now())?;
            print_today_result(&result, reveal);
            Ok(())
        }
        Commands::Score { guess, solution } => {
            let result =
                score_words(&guess, &solution, config.scoring).map_err(|e| anyhow::anyhow!(e))?;
            print_score_result(&result);
            Ok(())
        }
        Commands::Check { word } => {
            print_check_result(&check_word(&selector, &word));
            Ok(())
        }
    }
}

fn run_simple_command(selector: Arc<PuzzleSelector>, config: GameConfig) -> Result<()> {
    let mut lobby = Lobby::in_memory(selector, config);
    let stdin = io::stdin();
    run_simple(&mut lobby, stdin.lock(), io::stdout()).context("terminal I/O failed")
}

fn run_play_command(
    selector: Arc<PuzzleSelector>,
    config: GameConfig,
    puzzle: Option<i64>,
    random: bool,
) -> Result<()> {
    use wordle_rules::interactive::{App, run_tui};

    let puzzle = if random {
        selector
            .random_puzzle(&mut rand::rng())
            .context("no puzzles available")?
    } else if let Some(number) = puzzle {
        selector.get_specific_solution(number)?
    } else {
        selector.word_of_the_day(&Utc::now())?
    };

    let app = App::new(selector, config, puzzle);
    run_tui(app)
}
