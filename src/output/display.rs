//! Display functions for the text mode and the leaderboard command

use super::formatters::{gallows, lives_bar, spaced_mask};
use crate::core::{Snapshot, Status};
use crate::ledger::LedgerEntry;
use colored::Colorize;

/// Print the leaderboard, highest score first
pub fn print_leaderboard(entries: &[LedgerEntry]) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "LEADERBOARD".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    if entries.is_empty() {
        println!("\n   No games recorded yet.");
        return;
    }

    println!(
        "\n   {:<4} {:<16} {:>6}  {:<8} {}",
        "#".bright_black(),
        "Player".bold(),
        "Score".bold(),
        "Level".bold(),
        "Date".bold()
    );
    for (i, entry) in entries.iter().enumerate() {
        let score = format!("{:>6}", entry.score);
        let score = if entry.score < 0 {
            score.red()
        } else {
            score.bright_yellow()
        };
        println!(
            "   {:<4} {:<16} {}  {:<8} {}",
            (i + 1).to_string().bright_black(),
            entry.player,
            score,
            entry.difficulty.label(),
            entry.timestamp().bright_black()
        );
    }
}

/// Print the board for the current state of a session
pub fn print_snapshot(snapshot: &Snapshot) {
    println!("\n{}", gallows(snapshot.wrong).bright_white());
    println!(
        "\n  Word:   {}",
        spaced_mask(snapshot).bright_yellow().bold()
    );
    println!(
        "  Lives:  [{}] {}/{}",
        lives_bar(snapshot, 20).green(),
        snapshot.max_wrong.saturating_sub(snapshot.wrong),
        snapshot.max_wrong
    );
    println!("  Misses: {}", snapshot.wrong_letters.to_string().red());
    println!(
        "  Hints:  {}   Score: {}",
        snapshot.hints_left,
        snapshot.score.to_string().cyan()
    );
}

/// Print the end-of-game banner
pub fn print_outcome(snapshot: &Snapshot) {
    let answer = snapshot.answer.as_deref().unwrap_or_default().to_uppercase();
    println!("\n{}", "═".repeat(60).bright_cyan());
    match snapshot.status {
        Status::Won => println!(
            "{}",
            "    🎉  Congratulation You Win!  🎉    ".bright_green().bold()
        ),
        Status::Lost => println!("{}", "    💀  Too bad, you lose  💀    ".red().bold()),
        Status::InProgress => {}
    }
    println!("{}", "═".repeat(60).bright_cyan());
    println!(
        "\n  The word was {}, final score {}",
        answer.bright_white().bold(),
        snapshot.score.to_string().bright_yellow()
    );
}
