//! Per-letter status accumulated across guesses

use crate::core::{ALPHABET_LEN, MatchResult, MatchStatus, Word, letter_index};

/// Keyboard rows in QWERTY order
pub const KEY_ROWS: [&str; 3] = ["qwertyuiop", "asdfghjkl", "zxcvbnm"];

/// Best known status for each letter
///
/// A letter only ever moves up in strength: once a letter has been seen as a
/// `Match`, later partial or missed placements do not downgrade it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyboardState {
    letters: [Option<MatchStatus>; ALPHABET_LEN],
}

impl KeyboardState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one evaluated guess into the keyboard
    ///
    /// # Panics
    /// Panics if `result` does not have one status per letter of `guess`.
    pub fn record(&mut self, guess: &Word, result: &MatchResult) {
        assert_eq!(guess.len(), result.len(), "result must cover every letter");

        for (&letter, &status) in guess.letters().iter().zip(result) {
            let slot = &mut self.letters[letter_index(letter)];
            *slot = Some(slot.map_or(status, |known| known.max(status)));
        }
    }

    /// Status of a letter, `None` if never guessed or not a letter
    #[must_use]
    pub fn status(&self, letter: char) -> Option<MatchStatus> {
        let lower = letter.to_ascii_lowercase();
        if lower.is_ascii_lowercase() {
            self.letters[letter_index(lower as u8)]
        } else {
            None
        }
    }

    /// Guessed letters with their status, alphabetical
    pub fn iter(&self) -> impl Iterator<Item = (char, MatchStatus)> + '_ {
        (b'a'..=b'z')
            .zip(self.letters.iter())
            .filter_map(|(letter, status)| status.map(|s| (char::from(letter), s)))
    }

    /// Clear all recorded statuses
    pub fn reset(&mut self) {
        self.letters = [None; ALPHABET_LEN];
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::MatchStatus::{Match, NoMatch, PartialMatch};

    fn word(s: &str) -> Word {
        Word::new(s).unwrap()
    }

    fn record(keyboard: &mut KeyboardState, secret: &str, guess: &str) {
        let guess = word(guess);
        let result = MatchResult::calculate(&word(secret), &guess);
        keyboard.record(&guess, &result);
    }

    #[test]
    fn untouched_keys_have_no_status() {
        let keyboard = KeyboardState::new();
        assert_eq!(keyboard.status('a'), None);
        assert_eq!(keyboard.iter().count(), 0);
    }

    #[test]
    fn records_each_letter() {
        let mut keyboard = KeyboardState::new();
        record(&mut keyboard, "nudge", "nuked");

        assert_eq!(keyboard.status('n'), Some(Match));
        assert_eq!(keyboard.status('u'), Some(Match));
        assert_eq!(keyboard.status('k'), Some(NoMatch));
        assert_eq!(keyboard.status('e'), Some(PartialMatch));
        assert_eq!(keyboard.status('D'), Some(PartialMatch));
        assert_eq!(keyboard.status('z'), None);
        assert_eq!(keyboard.status('1'), None);
    }

    #[test]
    fn duplicate_letter_keeps_strongest_status() {
        // basis against baths: s is NoMatch at index 2 but Match at index 4
        let mut keyboard = KeyboardState::new();
        record(&mut keyboard, "baths", "basis");
        assert_eq!(keyboard.status('s'), Some(Match));
    }

    #[test]
    fn status_never_downgrades_across_guesses() {
        let mut keyboard = KeyboardState::new();
        record(&mut keyboard, "angel", "angel");
        record(&mut keyboard, "angel", "glean");
        assert_eq!(keyboard.status('a'), Some(Match));

        record(&mut keyboard, "angel", "ounce");
        assert_eq!(keyboard.status('n'), Some(Match));
        assert_eq!(keyboard.status('o'), Some(NoMatch));
    }

    #[test]
    fn iter_is_alphabetical() {
        let mut keyboard = KeyboardState::new();
        record(&mut keyboard, "ounce", "basis");
        let letters: String = keyboard.iter().map(|(c, _)| c).collect();
        assert_eq!(letters, "abis");
    }

    #[test]
    fn reset_clears() {
        let mut keyboard = KeyboardState::new();
        record(&mut keyboard, "ounce", "basis");
        keyboard.reset();
        assert_eq!(keyboard, KeyboardState::new());
    }

    #[test]
    fn key_rows_cover_alphabet() {
        let mut all: Vec<char> = KEY_ROWS.concat().chars().collect();
        all.sort_unstable();
        assert_eq!(all.into_iter().collect::<String>(), "abcdefghijklmnopqrstuvwxyz");
    }
}
