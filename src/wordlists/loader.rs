//! Word list loading utilities
//!
//! Loads a dictionary from a plain text file, one word per line.

use super::WordList;
use std::fs;
use std::io;
use std::path::Path;

/// Load a dictionary from a file
///
/// Blank lines and entries that are not words are skipped.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use word_match::wordlists::loader::load_from_file;
///
/// let list = load_from_file("data/words.txt").unwrap();
/// println!("Loaded {} words", list.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<WordList> {
    let content = fs::read_to_string(path)?;
    Ok(parse_word_list(&content))
}

/// Parse newline-separated words
#[must_use]
pub fn parse_word_list(content: &str) -> WordList {
    WordList::from_words(content.lines().filter(|line| !line.trim().is_empty()))
}
