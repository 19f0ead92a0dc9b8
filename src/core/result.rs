//! Match result calculation and representation
//!
//! A result holds one `MatchStatus` per position of the guess, in order.

use super::MatchStatus;
use super::word::{Word, letter_index};
use std::fmt;
use std::ops::Index;

/// Ordered feedback for a guess
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MatchResult(Vec<MatchStatus>);

impl MatchResult {
    /// Score `guess` against `secret`, ignoring dictionary membership
    ///
    /// Repeated letters are handled as a multiset: a letter is reported as
    /// `Match` or `PartialMatch` at most as many times as it occurs in the
    /// secret.
    ///
    /// # Algorithm
    /// 1. Count each letter of the secret
    /// 2. First pass: mark exact matches and remove them from the pool
    /// 3. Second pass, left to right: mark partial matches from the remaining pool
    ///
    /// # Panics
    /// Panics if the words differ in length.
    ///
    /// # Examples
    /// ```
    /// use word_match::core::{MatchResult, MatchStatus::*, Word};
    ///
    /// let secret = Word::new("nudge").unwrap();
    /// let guess = Word::new("nuked").unwrap();
    /// let result = MatchResult::calculate(&secret, &guess);
    ///
    /// assert_eq!(result.statuses(), &[Match, Match, NoMatch, PartialMatch, PartialMatch]);
    /// ```
    #[must_use]
    pub fn calculate(secret: &Word, guess: &Word) -> Self {
        assert_eq!(
            secret.len(),
            guess.len(),
            "secret word and guess word must have equal length"
        );

        let secret_letters = secret.letters();
        let guess_letters = guess.letters();
        let mut remaining = secret.letter_counts();
        let mut result = vec![MatchStatus::NoMatch; guess_letters.len()];

        // Exact matches consume their letter before any partial match can claim it
        for (i, (&g, &s)) in guess_letters.iter().zip(secret_letters).enumerate() {
            if g == s {
                result[i] = MatchStatus::Match;
                remaining[letter_index(g)] -= 1;
            }
        }

        for (status, &g) in result.iter_mut().zip(guess_letters) {
            if *status == MatchStatus::Match {
                continue;
            }
            let count = &mut remaining[letter_index(g)];
            if *count > 0 {
                *count -= 1;
                *status = MatchStatus::PartialMatch;
            }
        }

        Self(result)
    }

    /// Statuses in position order
    #[inline]
    #[must_use]
    pub fn statuses(&self) -> &[MatchStatus] {
        &self.0
    }

    /// Number of positions
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True when there are no positions
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over statuses in position order
    pub fn iter(&self) -> std::slice::Iter<'_, MatchStatus> {
        self.0.iter()
    }

    /// Count positions with the given status
    #[must_use]
    pub fn count(&self, status: MatchStatus) -> usize {
        self.0.iter().filter(|&&s| s == status).count()
    }

    /// Every position is an exact match
    #[must_use]
    pub fn is_solved(&self) -> bool {
        !self.0.is_empty() && self.0.iter().all(|&s| s == MatchStatus::Match)
    }

    /// Parse a result from a string like "GY-GY" or "🟩🟨⬜🟩🟨"
    ///
    /// # Examples
    /// ```
    /// use word_match::core::MatchResult;
    ///
    /// let a = MatchResult::from_str("GY-GY").unwrap();
    /// let b = MatchResult::from_str("🟩🟨⬜🟩🟨").unwrap();
    /// assert_eq!(a, b);
    /// assert_eq!(a.to_emoji(), "🟩🟨⬜🟩🟨");
    /// ```
    #[must_use]
    #[allow(clippy::should_implement_trait)] // Provides ergonomic Option API; FromStr trait also implemented below
    pub fn from_str(s: &str) -> Option<Self> {
        if s.is_empty() {
            return None;
        }
        s.chars()
            .map(MatchStatus::from_char)
            .collect::<Option<Vec<_>>>()
            .map(Self)
    }

    /// Render as emoji tiles
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.0.iter().map(|s| s.to_emoji()).collect()
    }
}

impl Index<usize> for MatchResult {
    type Output = MatchStatus;

    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl<'a> IntoIterator for &'a MatchResult {
    type Item = &'a MatchStatus;
    type IntoIter = std::slice::Iter<'a, MatchStatus>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl From<MatchResult> for Vec<MatchStatus> {
    fn from(result: MatchResult) -> Self {
        result.0
    }
}

impl fmt::Display for MatchResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for status in &self.0 {
            write!(f, "{}", status.to_char())?;
        }
        Ok(())
    }
}

impl std::str::FromStr for MatchResult {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_str(s).ok_or_else(|| format!("Invalid match string: {s}"))
    }
}
