//! Dictionary membership seam
//!
//! The matcher only needs to ask whether a word is valid; where the words come
//! from is up to the implementor.

/// Membership predicate over normalized (lowercase) words
pub trait Dictionary {
    /// Whether `word` is accepted for play, as either secret or guess
    fn is_valid_word(&self, word: &str) -> bool;
}

impl<D: Dictionary + ?Sized> Dictionary for &D {
    fn is_valid_word(&self, word: &str) -> bool {
        (**self).is_valid_word(word)
    }
}

impl Dictionary for [&str] {
    fn is_valid_word(&self, word: &str) -> bool {
        self.iter().any(|&w| w == word)
    }
}

/// Adapts any predicate closure into a `Dictionary`
#[derive(Debug, Clone, Copy)]
pub struct FnDictionary<F>(pub F);

impl<F> Dictionary for FnDictionary<F>
where
    F: Fn(&str) -> bool,
{
    fn is_valid_word(&self, word: &str) -> bool {
        (self.0)(word)
    }
}
