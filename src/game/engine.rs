//! Guess/hint processor
//!
//! Owns the current session (if any), forwards player input to it and
//! records the result in the ledger exactly once when the session ends.

use chrono::{Local, NaiveDateTime};
use log::{debug, error, info};
use rand::Rng;

use crate::core::{Difficulty, GameError, PlayerName, Session, SessionConfig, Snapshot, Status};
use crate::ledger::{LedgerEntry, ScoreSink};
use crate::wordlists::WordSource;

/// Result of one transition
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Turn {
    pub status: Status,
    pub snapshot: Snapshot,
    /// Row written to the ledger, when this turn ended the session
    pub recorded: Option<LedgerEntry>,
}

/// Drives sessions over a fixed word table
pub struct GameEngine<'a, L: ScoreSink, R: Rng> {
    words: &'a WordSource,
    ledger: L,
    rng: R,
    config: SessionConfig,
    session: Option<Session>,
}

impl<'a, L: ScoreSink, R: Rng> GameEngine<'a, L, R> {
    pub fn new(words: &'a WordSource, ledger: L, rng: R) -> Self {
        Self {
            words,
            ledger,
            rng,
            config: SessionConfig::default(),
            session: None,
        }
    }

    #[must_use]
    pub fn with_config(mut self, config: SessionConfig) -> Self {
        self.config = config;
        self
    }

    #[must_use]
    pub const fn config(&self) -> &SessionConfig {
        &self.config
    }

    #[must_use]
    pub const fn words(&self) -> &'a WordSource {
        self.words
    }

    #[must_use]
    pub const fn ledger(&self) -> &L {
        &self.ledger
    }

    /// Validate the player and start a session on a random word
    ///
    /// Any session in progress is discarded.
    ///
    /// # Errors
    /// `InvalidPlayerName` if the name is rejected; no session is started.
    pub fn start(&mut self, difficulty: Difficulty, player: &str) -> Result<Snapshot, GameError> {
        let player = PlayerName::new(player)?;
        let word = self.words.pick(difficulty, &mut self.rng).clone();

        info!(
            "{player} started a {} game ({} letters)",
            difficulty.key(),
            word.len()
        );
        debug!("Secret word: {word}");

        let session = Session::new(player, difficulty, word, self.config);
        let snapshot = session.snapshot();
        self.session = Some(session);
        Ok(snapshot)
    }

    /// Drop the current session without recording it
    pub fn abandon(&mut self) {
        if let Some(session) = self.session.take() {
            debug!(
                "{} abandoned a {} game",
                session.player(),
                session.difficulty().key()
            );
        }
    }

    #[must_use]
    pub fn snapshot(&self) -> Option<Snapshot> {
        self.session.as_ref().map(Session::snapshot)
    }

    /// Guess a letter
    ///
    /// # Errors
    /// `NoActiveSession`, any error from [`Session::guess`], or `Ledger` if the
    /// session ended but could not be recorded.
    pub fn guess(&mut self, letter: char) -> Result<Turn, GameError> {
        self.apply(|session| session.guess(letter))
    }

    /// Spend a hint on a letter
    ///
    /// # Errors
    /// `NoActiveSession`, any error from [`Session::hint`], or `Ledger`.
    pub fn hint(&mut self, letter: char) -> Result<Turn, GameError> {
        self.apply(|session| session.hint(letter))
    }

    /// Spend a hint on the letter at a word position
    ///
    /// # Errors
    /// `NoActiveSession`, any error from [`Session::reveal`], or `Ledger`.
    pub fn reveal(&mut self, position: usize) -> Result<Turn, GameError> {
        self.apply(|session| session.reveal(position))
    }

    fn apply<F>(&mut self, transition: F) -> Result<Turn, GameError>
    where
        F: FnOnce(&mut Session) -> Result<Status, GameError>,
    {
        let session = self.session.as_mut().ok_or(GameError::NoActiveSession)?;
        let status = transition(session)?;
        let snapshot = session.snapshot();

        // A terminal session rejects further transitions, so this runs once.
        let recorded = if status.is_terminal() {
            let entry = LedgerEntry {
                player: session.player().to_string(),
                score: session.score(),
                difficulty: session.difficulty(),
                completed_at: now(),
            };
            info!(
                "{} {} with {} points",
                entry.player,
                if status == Status::Won { "won" } else { "lost" },
                entry.score
            );
            if let Err(e) = self.ledger.record(&entry) {
                error!("Failed to record score: {e}");
                return Err(e.into());
            }
            Some(entry)
        } else {
            None
        };

        Ok(Turn {
            status,
            snapshot,
            recorded,
        })
    }
}

fn now() -> NaiveDateTime {
    Local::now().naive_local()
}
