//! Display functions for command results

use super::formatters::guess_tiles;
use crate::commands::{CheckResult, ScoreResult, TodayResult};
use colored::Colorize;

/// Print a scored guess as tiles and as a share row
pub fn print_score_result(result: &ScoreResult) {
    println!("\n{}", "─".repeat(40).cyan());
    println!(
        "Scoring {} against {} ({} rule)",
        result.guess.to_uppercase().bright_yellow().bold(),
        result.solution.to_uppercase().bright_yellow().bold(),
        result.rule.name()
    );
    println!("{}", "─".repeat(40).cyan());

    println!("\n  {}", guess_tiles(&result.scored));
    println!("  {}", result.scored.to_emoji());

    if result.scored.is_exact() {
        println!("\n{}", "✅ Exact match!".green().bold());
    }
}

/// Print the current puzzle, hiding the solution unless `reveal` is set
pub fn print_today_result(result: &TodayResult, reveal: bool) {
    println!(
        "📅 {} is {}",
        result.date,
        format!("Wordle #{}", result.puzzle.number())
            .bright_cyan()
            .bold()
    );
    if result.cycle > 0 {
        println!(
            "   The {} solutions have repeated {} times; puzzle numbers wrap around.",
            result.solution_count, result.cycle
        );
    }
    if reveal {
        println!(
            "   Solution: {}",
            result.puzzle.solution().to_uppercase().bright_yellow().bold()
        );
    }
}

/// Print whether a word is accepted as a guess
pub fn print_check_result(result: &CheckResult) {
    let word = result.word.to_uppercase();
    if result.valid {
        println!("{} {} is a valid guess", "✓".green().bold(), word.bold());
    } else {
        println!("{} {} is not in the word list", "✗".red().bold(), word.bold());
    }

    if let Some(number) = result.puzzle_number {
        println!("   It is the solution to Wordle #{number}");
    }
}
