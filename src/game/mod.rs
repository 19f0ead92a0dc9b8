//! Game flow on top of the matcher
//!
//! A reducer over player actions plus the per-letter keyboard status it
//! maintains. Persistence and rendering are left to callers.

mod keyboard;
mod state;

pub use keyboard::{KEY_ROWS, KeyboardState};
pub use state::{
    AcceptedGuess, Action, Game, GameConfig, GameError, GameState, GameStatus, GuessOutcome, Stats,
};
