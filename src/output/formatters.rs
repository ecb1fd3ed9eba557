//! Formatting utilities shared by the TUI and the text mode

use crate::core::{DEFAULT_STAGE_COUNT, Snapshot};

/// Gallows illustrations, one per wrong-guess count
///
/// The last frame is the losing one.
pub const GALLOWS: [&str; DEFAULT_STAGE_COUNT] = [
    "\n\n\n\n\n\n",
    "\n\n\n\n\n\n=========",
    "\n      |\n      |\n      |\n      |\n      |\n=========",
    "  +---+\n      |\n      |\n      |\n      |\n      |\n=========",
    "  +---+\n  |   |\n      |\n      |\n      |\n      |\n=========",
    "  +---+\n  |   |\n  O   |\n      |\n      |\n      |\n=========",
    "  +---+\n  |   |\n  O   |\n  |   |\n      |\n      |\n=========",
    "  +---+\n  |   |\n  O   |\n /|   |\n      |\n      |\n=========",
    "  +---+\n  |   |\n  O   |\n /|\\  |\n      |\n      |\n=========",
    "  +---+\n  |   |\n  O   |\n /|\\  |\n /    |\n      |\n=========",
    "  +---+\n  |   |\n  O   |\n /|\\  |\n / \\  |\n      |\n=========",
];

/// On-screen keyboard layout
pub const KEYBOARD_ROWS: [&str; 3] = ["qwertyuiop", "asdfghjkl", "zxcvbnm"];

/// Frame for a wrong-guess count, clamped to the last frame
#[must_use]
pub fn gallows(wrong: usize) -> &'static str {
    GALLOWS[wrong.min(GALLOWS.len() - 1)]
}

/// Word with spaced letters, e.g. `c _ t`
#[must_use]
pub fn spaced_mask(snapshot: &Snapshot) -> String {
    snapshot
        .mask
        .iter()
        .map(|slot| slot.map_or_else(|| "_".to_string(), |c| c.to_string()))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: usize, max: usize, width: usize) -> String {
    let filled = if max == 0 { 0 } else { value * width / max };
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Remaining lives as a bar
#[must_use]
pub fn lives_bar(snapshot: &Snapshot, width: usize) -> String {
    let left = snapshot.max_wrong.saturating_sub(snapshot.wrong);
    create_progress_bar(left, snapshot.max_wrong, width)
}
