//! Word representation
//!
//! A Word stores a normalized, non-empty sequence of letters `a`-`z` and exposes
//! the per-letter occurrence table used by the matcher.

use std::fmt;
use thiserror::Error;

/// Size of the closed alphabet (`a`-`z`)
pub const ALPHABET_LEN: usize = 26;

/// Remaining-count table indexed by `letter - b'a'`
pub type LetterCounts = [usize; ALPHABET_LEN];

/// A lowercase word over the alphabet `a`-`z`
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Word {
    text: String,
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WordError {
    #[error("Word must contain at least one letter")]
    Empty,
    #[error("Word must contain only ASCII letters")]
    NonAscii,
    #[error("Word contains invalid characters")]
    InvalidCharacters,
}

impl Word {
    /// Create a new Word from a string, lowercasing it
    ///
    /// # Errors
    /// Returns `WordError` if:
    /// - The string is empty
    /// - Contains non-ASCII characters
    /// - Contains anything other than letters
    ///
    /// # Examples
    /// ```
    /// use word_match::core::Word;
    ///
    /// let word = Word::new("Basis").unwrap();
    /// assert_eq!(word.text(), "basis");
    ///
    /// assert!(Word::new("").is_err());
    /// assert!(Word::new("sh0rt").is_err());
    /// ```
    pub fn new(text: impl Into<String>) -> Result<Self, WordError> {
        let text: String = text.into().to_lowercase();

        if text.is_empty() {
            return Err(WordError::Empty);
        }

        if !text.is_ascii() {
            return Err(WordError::NonAscii);
        }

        if !text.bytes().all(|b| b.is_ascii_lowercase()) {
            return Err(WordError::InvalidCharacters);
        }

        Ok(Self { text })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the letters as bytes (`b'a'..=b'z'`)
    #[inline]
    #[must_use]
    pub fn letters(&self) -> &[u8] {
        self.text.as_bytes()
    }

    /// Number of letters
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Always false for a constructed word
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Get the letter at a specific position
    ///
    /// # Panics
    /// Panics if `position >= self.len()`
    #[inline]
    #[must_use]
    pub fn letter_at(&self, position: usize) -> u8 {
        self.letters()[position]
    }

    /// Count of each letter in the word
    #[must_use]
    pub fn letter_counts(&self) -> LetterCounts {
        let mut counts = [0; ALPHABET_LEN];
        for &ch in self.letters() {
            counts[letter_index(ch)] += 1;
        }
        counts
    }
}

/// Slot of a lowercase letter in a `LetterCounts` table
///
/// # Panics
/// Panics if `letter` is not in `b'a'..=b'z'`.
#[inline]
#[must_use]
pub const fn letter_index(letter: u8) -> usize {
    assert!(letter.is_ascii_lowercase(), "letter must be in a-z");
    (letter - b'a') as usize
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

impl std::str::FromStr for Word {
    type Err = WordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_creation_valid() {
        let word = Word::new("basis").unwrap();
        assert_eq!(word.text(), "basis");
        assert_eq!(word.letters(), b"basis");
        assert_eq!(word.len(), 5);
    }

    #[test]
    fn word_creation_any_length() {
        assert_eq!(Word::new("a").unwrap().len(), 1);
        assert_eq!(Word::new("background").unwrap().len(), 10);
    }

    #[test]
    fn word_creation_uppercase_normalized() {
        assert_eq!(Word::new("NUDGE").unwrap().text(), "nudge");
        assert_eq!(Word::new("NuDgE").unwrap().text(), "nudge");
    }

    #[test]
    fn word_creation_invalid() {
        assert_eq!(Word::new(""), Err(WordError::Empty));
        assert_eq!(Word::new("café"), Err(WordError::NonAscii));
        assert_eq!(Word::new("cran3"), Err(WordError::InvalidCharacters));
        assert_eq!(Word::new("cran "), Err(WordError::InvalidCharacters));
        assert_eq!(Word::new("cran!"), Err(WordError::InvalidCharacters));
    }

    #[test]
    fn word_letter_at() {
        let word = Word::new("angel").unwrap();
        assert_eq!(word.letter_at(0), b'a');
        assert_eq!(word.letter_at(4), b'l');
    }

    #[test]
    fn word_letter_counts() {
        let counts = Word::new("speed").unwrap().letter_counts();
        assert_eq!(counts[letter_index(b's')], 1);
        assert_eq!(counts[letter_index(b'e')], 2);
        assert_eq!(counts[letter_index(b'z')], 0);
        assert_eq!(counts.iter().sum::<usize>(), 5);
    }

    #[test]
    fn word_display_and_parse() {
        let word: Word = "Glean".parse().unwrap();
        assert_eq!(format!("{word}"), "glean");
    }

    #[test]
    fn letter_index_bounds() {
        assert_eq!(letter_index(b'a'), 0);
        assert_eq!(letter_index(b'z'), ALPHABET_LEN - 1);
    }

    #[test]
    #[should_panic(expected = "letter must be in a-z")]
    fn letter_index_rejects_uppercase() {
        let _ = letter_index(b'A');
    }

    #[test]
    #[should_panic(expected = "letter must be in a-z")]
    fn letter_index_rejects_past_z() {
        let _ = letter_index(b'{');
    }
}
