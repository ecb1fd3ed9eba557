//! Interactive TUI interface

mod app;
mod rendering;

pub use app::{App, MessageStyle, Popup, Screen, run_tui};
