//! Core domain types for hangman
//!
//! Pure game logic with no I/O: words, guessed letters, difficulty tiers,
//! player names, scoring policies and the session state machine.

mod difficulty;
mod error;
mod letters;
mod player;
mod scoring;
mod session;
mod word;

pub use difficulty::{Difficulty, UnknownDifficulty};
pub use error::GameError;
pub use letters::LetterSet;
pub use player::PlayerName;
pub use scoring::{HINT_PENALTY, ScoringPolicy};
pub use session::{
    DEFAULT_HINTS, DEFAULT_STAGE_COUNT, MIN_STAGE_COUNT, Session, SessionConfig, Snapshot, Status,
};
pub use word::{SecretWord, WordError};
