//! Session orchestration
//!
//! The engine sits between the pure session state machine and the ledger.

mod engine;

pub use engine::{GameEngine, Turn};
