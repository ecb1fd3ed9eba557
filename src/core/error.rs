//! Errors raised while playing a session

use std::fmt;

use crate::ledger::LedgerError;

#[derive(Debug)]
pub enum GameError {
    /// Name rejected; carries the message shown to the player
    InvalidPlayerName(String),
    NoHintsRemaining,
    InvalidLetter(char),
    /// Hint requested for a letter that is not hidden in the word
    InvalidHint(char),
    /// Hint requested for a position outside the word
    InvalidPosition(usize),
    SessionOver,
    NoActiveSession,
    /// Session configuration with fewer stages than a playable game needs
    InvalidStageCount(usize),
    /// The session finished but its ledger row could not be written
    Ledger(LedgerError),
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidPlayerName(reason) => write!(f, "{reason}"),
            Self::NoHintsRemaining => write!(f, "You have no hint left"),
            Self::InvalidLetter(c) => write!(f, "'{c}' is not a letter"),
            Self::InvalidHint(c) => write!(f, "'{c}' is not a hidden letter of the word"),
            Self::InvalidPosition(pos) => write!(f, "Position {pos} is outside the word"),
            Self::SessionOver => write!(f, "This game is already over"),
            Self::NoActiveSession => write!(f, "No game in progress"),
            Self::InvalidStageCount(n) => {
                write!(f, "A game needs at least 2 stages, got {n}")
            }
            Self::Ledger(err) => write!(f, "Could not record the score: {err}"),
        }
    }
}

impl std::error::Error for GameError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Ledger(err) => Some(err),
            _ => None,
        }
    }
}

impl From<LedgerError> for GameError {
    fn from(err: LedgerError) -> Self {
        Self::Ledger(err)
    }
}
