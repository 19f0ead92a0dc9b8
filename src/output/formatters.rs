//! Formatting utilities for terminal output

use crate::core::{MatchResult, MatchStatus, Word};
use crate::game::{KEY_ROWS, KeyboardState};
use colored::{ColoredString, Colorize};

/// A single letter tile colored by its status
///
/// Letters with no known status are rendered plain.
#[must_use]
pub fn letter_tile(letter: char, status: Option<MatchStatus>) -> ColoredString {
    let text = format!(" {} ", letter.to_ascii_uppercase());
    match status {
        Some(MatchStatus::Match) => text.black().on_green().bold(),
        Some(MatchStatus::PartialMatch) => text.black().on_yellow().bold(),
        Some(MatchStatus::NoMatch) => text.white().on_bright_black(),
        None => text.normal(),
    }
}

/// Render a guess row as colored tiles
///
/// # Panics
/// Panics if `result` and `guess` differ in length.
#[must_use]
pub fn result_row(guess: &Word, result: &MatchResult) -> String {
    assert_eq!(guess.len(), result.len(), "result must cover every letter");
    guess
        .text()
        .chars()
        .zip(result)
        .map(|(letter, &status)| letter_tile(letter, Some(status)).to_string())
        .collect()
}

/// Render the keyboard, one string per row
///
/// The middle row is indented by half a key, bottom row by a full key.
#[must_use]
pub fn keyboard_rows(keyboard: &KeyboardState) -> Vec<String> {
    KEY_ROWS
        .iter()
        .enumerate()
        .map(|(row, keys)| {
            let indent = " ".repeat(row * 2);
            let tiles: String = keys
                .chars()
                .map(|key| letter_tile(key, keyboard.status(key)).to_string())
                .collect();
            format!("{indent}{tiles}")
        })
        .collect()
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    // Cast is safe: values are clamped to [0, width]
    let filled = if max > 0.0 {
        ((value / max) * width as f64) as usize
    } else {
        0
    };
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}
