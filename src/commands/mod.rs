//! Command implementations

pub mod analyze;
pub mod check;
pub mod play;
pub mod rank;

pub use analyze::{GuessSummary, analyze_guess, summarize_guess};
pub use check::{CheckResult, check_words};
pub use play::{PlayConfig, run_play};
pub use rank::{RankConfig, RankResult, rank_guesses};
