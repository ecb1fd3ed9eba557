//! Command implementations

pub mod scores;
pub mod simple;

pub use scores::{Leaderboard, load_leaderboard, run_scores};
pub use simple::run_simple;
