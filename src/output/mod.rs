//! Terminal output formatting
//!
//! Gallows art, word masks and pretty-printing for the text mode.

pub mod display;
pub mod formatters;

pub use display::{print_leaderboard, print_outcome, print_snapshot};
