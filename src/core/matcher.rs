//! Dictionary-gated matching
//!
//! Validation runs before scoring: unequal lengths are a caller defect and
//! panic, while a word missing from the dictionary simply yields no result.

use super::{Dictionary, MatchResult, Word};

/// Scores guesses against secrets drawn from a dictionary
///
/// Holds no mutable state, so one matcher can be shared across threads as
/// long as its dictionary can.
#[derive(Debug, Clone)]
pub struct Matcher<D> {
    dictionary: D,
}

impl<D: Dictionary> Matcher<D> {
    #[must_use]
    pub const fn new(dictionary: D) -> Self {
        Self { dictionary }
    }

    /// The dictionary this matcher validates against
    #[must_use]
    pub const fn dictionary(&self) -> &D {
        &self.dictionary
    }

    /// Evaluate `guess` against `secret`
    ///
    /// Returns `None` when either word is not in the dictionary; matching is
    /// never attempted on an invalid word. Input case is normalized.
    ///
    /// # Panics
    /// Panics if `secret` and `guess` have different lengths. This is checked
    /// before dictionary membership.
    ///
    /// # Examples
    /// ```
    /// use word_match::core::{Matcher, MatchStatus::*};
    ///
    /// let words: &[&str] = &["baths", "basis"];
    /// let matcher = Matcher::new(words);
    ///
    /// let result = matcher.evaluate("baths", "basis").unwrap();
    /// assert_eq!(result.statuses(), &[Match, Match, NoMatch, NoMatch, Match]);
    ///
    /// assert!(matcher.evaluate("basis", "fghij").is_none());
    /// ```
    #[must_use]
    pub fn evaluate(&self, secret: &str, guess: &str) -> Option<MatchResult> {
        assert_eq!(
            secret.chars().count(),
            guess.chars().count(),
            "secret word and guess word must have equal length"
        );

        let secret = self.lookup(secret)?;
        let guess = self.lookup(guess)?;

        Some(MatchResult::calculate(&secret, &guess))
    }

    /// Normalize `text` and confirm it is a dictionary word
    ///
    /// Text that cannot form a `Word` is treated the same as an unknown word.
    #[must_use]
    pub fn lookup(&self, text: &str) -> Option<Word> {
        Word::new(text)
            .ok()
            .filter(|word| self.dictionary.is_valid_word(word.text()))
    }

    /// Whether `text` is a playable word
    #[must_use]
    pub fn is_valid_word(&self, text: &str) -> bool {
        self.lookup(text).is_some()
    }
}

/// One-shot form of [`Matcher::evaluate`]
///
/// # Panics
/// Panics if `secret` and `guess` have different lengths.
#[must_use]
pub fn match_words<D: Dictionary + ?Sized>(
    dictionary: &D,
    secret: &str,
    guess: &str,
) -> Option<MatchResult> {
    Matcher::new(dictionary).evaluate(secret, guess)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::MatchStatus::{Match, NoMatch, PartialMatch};
    use crate::wordlists::WordList;
    use pretty_assertions::assert_eq;

    fn matcher() -> Matcher<WordList> {
        Matcher::new(WordList::embedded())
    }

    #[test]
    fn absent_when_either_word_unknown() {
        let m = matcher();
        assert!(m.evaluate("abcde", "fghij").is_none());
        assert!(m.evaluate("basis", "fghij").is_none());
        assert!(m.evaluate("abcde", "basis").is_none());
        assert!(m.evaluate("baths", "basis").is_some());
    }

    #[test]
    fn absent_for_non_letters() {
        let m = matcher();
        assert!(m.evaluate("bas1s", "basis").is_none());
        assert!(m.evaluate("basis", "bas s").is_none());
    }

    #[test]
    #[should_panic(expected = "equal length")]
    fn length_mismatch_panics() {
        let _ = matcher().evaluate("basis", "background");
    }

    #[test]
    #[should_panic(expected = "equal length")]
    fn length_mismatch_panics_before_dictionary_check() {
        let _ = matcher().evaluate("abcde", "fghijk");
    }

    #[test]
    fn result_length_equals_secret_length() {
        assert_eq!(matcher().evaluate("basis", "basis").unwrap().len(), 5);
    }

    #[test]
    fn known_scenarios() {
        let m = matcher();
        assert_eq!(m.evaluate("basis", "basis").unwrap().statuses(), &[Match; 5]);
        assert_eq!(m.evaluate("ounce", "basis").unwrap().statuses(), &[NoMatch; 5]);
        assert_eq!(
            m.evaluate("angel", "glean").unwrap().statuses(),
            &[PartialMatch; 5]
        );
        assert_eq!(
            m.evaluate("nudge", "nuked").unwrap().statuses(),
            &[Match, Match, NoMatch, PartialMatch, PartialMatch]
        );
        assert_eq!(
            m.evaluate("baths", "basis").unwrap().statuses(),
            &[Match, Match, NoMatch, NoMatch, Match]
        );
    }

    #[test]
    fn input_case_is_normalized() {
        let m = matcher();
        assert_eq!(
            m.evaluate("BASIS", "Basis").unwrap().statuses(),
            &[Match; 5]
        );
    }

    #[test]
    fn match_words_with_slice_dictionary() {
        let words: &[&str] = &["nudge", "nuked"];
        let result = match_words(words, "nudge", "nuked").unwrap();
        assert_eq!(result.count(Match), 2);
        assert!(match_words(words, "nudge", "basis").is_none());
    }

    #[test]
    fn matcher_is_shareable_across_threads() {
        let m = &matcher();
        std::thread::scope(|scope| {
            let handles: Vec<_> = ["basis", "baths", "ounce"]
                .into_iter()
                .map(|guess| scope.spawn(move || m.evaluate("basis", guess)))
                .collect();
            for handle in handles {
                assert!(handle.join().unwrap().is_some());
            }
        });
    }
}
