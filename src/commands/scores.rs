//! Leaderboard command
//!
//! Loads the ledger for display. A missing or unreadable ledger never stops
//! the game: it is shown as an empty board with a warning.

use crate::ledger::{Ledger, LedgerEntry, LedgerError};
use crate::output::print_leaderboard;
use colored::Colorize;
use log::warn;

/// Leaderboard rows plus an optional warning for the player
#[derive(Debug, Clone)]
pub struct Leaderboard {
    pub entries: Vec<LedgerEntry>,
    pub warning: Option<String>,
}

/// Load the ledger sorted by score, degrading failures to an empty board
#[must_use]
pub fn load_leaderboard(ledger: &Ledger) -> Leaderboard {
    match ledger.load_sorted() {
        Ok(entries) => Leaderboard {
            entries,
            warning: None,
        },
        Err(e @ LedgerError::MissingLedgerFile(_)) => {
            warn!("{e}");
            Leaderboard {
                entries: Vec::new(),
                warning: Some("No scores recorded yet".to_string()),
            }
        }
        Err(e) => {
            warn!("Could not read leaderboard: {e}");
            Leaderboard {
                entries: Vec::new(),
                warning: Some(format!("Could not read leaderboard: {e}")),
            }
        }
    }
}

/// Print the leaderboard to stdout
pub fn run_scores(ledger: &Ledger) {
    let board = load_leaderboard(ledger);
    if let Some(warning) = &board.warning {
        println!("{} {warning}", "⚠".yellow());
    }
    print_leaderboard(&board.entries);
}
