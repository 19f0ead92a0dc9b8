//! Core matching types
//!
//! This module contains the word, status and result types plus the matcher.
//! Everything here is pure: no I/O, no logging, no shared state.

mod dictionary;
mod matcher;
mod result;
mod status;
mod word;

pub use dictionary::{Dictionary, FnDictionary};
pub use matcher::{Matcher, match_words};
pub use result::MatchResult;
pub use status::MatchStatus;
pub use word::{ALPHABET_LEN, LetterCounts, Word, WordError, letter_index};
