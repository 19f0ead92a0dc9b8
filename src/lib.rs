//! Word Match
//!
//! A word-guessing game engine: scores a guess against a secret word letter by
//! letter, handling repeated letters as a multiset, against a dictionary of
//! valid words.
//!
//! # Quick Start
//!
//! ```rust
//! use word_match::core::{Matcher, MatchStatus::*};
//! use word_match::wordlists::WordList;
//!
//! let matcher = Matcher::new(WordList::embedded());
//!
//! // Both words must be in the dictionary
//! let result = matcher.evaluate("nudge", "nuked").unwrap();
//! assert_eq!(result.statuses(), &[Match, Match, NoMatch, PartialMatch, PartialMatch]);
//!
//! // Unknown words produce no result
//! assert!(matcher.evaluate("basis", "fghij").is_none());
//! ```

// Core domain types and the matcher
pub mod core;

// Game reducer and keyboard state
pub mod game;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
