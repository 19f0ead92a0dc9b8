//! Word lists backing the dictionary
//!
//! Provides the embedded list compiled into the binary and a `WordList` type
//! that implements `Dictionary` for any loaded set of words.

mod embedded;
pub mod loader;

pub use embedded::{DICTIONARY, DICTIONARY_COUNT};

use crate::core::{Dictionary, Word};
use rand::Rng;
use rand::seq::IndexedRandom;
use rustc_hash::FxHashSet;

/// An owned, deduplicated set of normalized words
#[derive(Debug, Clone, Default)]
pub struct WordList {
    words: Vec<Word>,
    index: FxHashSet<String>,
}

impl WordList {
    /// Build from arbitrary strings, skipping entries that are not words
    ///
    /// Entries are lowercased; duplicates are kept once, first occurrence wins.
    #[must_use]
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut list = Self::default();
        for word in words.into_iter().filter_map(|w| Word::new(w.as_ref().trim()).ok()) {
            if list.index.insert(word.text().to_string()) {
                list.words.push(word);
            }
        }
        list
    }

    /// The dictionary compiled into the binary
    ///
    /// # Examples
    /// ```
    /// use word_match::core::Dictionary;
    /// use word_match::wordlists::WordList;
    ///
    /// let list = WordList::embedded();
    /// assert!(list.is_valid_word("basis"));
    /// assert!(!list.is_valid_word("abcde"));
    /// ```
    #[must_use]
    pub fn embedded() -> Self {
        Self::from_words(DICTIONARY)
    }

    /// Number of words
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Words in insertion order
    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    /// Words with exactly `len` letters, in insertion order
    pub fn words_of_len(&self, len: usize) -> impl Iterator<Item = &Word> {
        self.words.iter().filter(move |w| w.len() == len)
    }

    /// Pick a word uniformly at random, if any exist
    pub fn random_word<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<&Word> {
        self.words.choose(rng)
    }
}

impl Dictionary for WordList {
    fn is_valid_word(&self, word: &str) -> bool {
        self.index.contains(word)
    }
}
