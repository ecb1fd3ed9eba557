//! Hangman
//!
//! A terminal hangman game with hints, pluggable scoring and a persisted
//! leaderboard, playable through a TUI or a plain text prompt.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use hangman::core::Difficulty;
//! use hangman::game::GameEngine;
//! use hangman::ledger::LedgerEntry;
//! use hangman::wordlists::WordSource;
//!
//! let words = WordSource::embedded().unwrap();
//! let mut engine = GameEngine::new(&words, Vec::<LedgerEntry>::new(), rand::rng());
//!
//! let snapshot = engine.start(Difficulty::Easy, "Alice").unwrap();
//! println!("{}", snapshot.masked_word());
//!
//! let turn = engine.guess('e').unwrap();
//! println!("{} ({} wrong)", turn.snapshot.masked_word(), turn.snapshot.wrong);
//! ```

// Core domain types
pub mod core;

// Session driver and ledger recording
pub mod game;

// Persisted scores
pub mod ledger;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
