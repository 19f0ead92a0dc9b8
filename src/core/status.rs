//! Per-position match status

use std::fmt;

/// Feedback for a single guessed letter
///
/// Ordered by strength: `NoMatch < PartialMatch < Match`, which is the order the
/// keyboard state uses when folding several guesses together.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum MatchStatus {
    /// Letter does not correspond to any unclaimed occurrence in the secret
    NoMatch,
    /// Letter occurs in the secret, but not at this position
    PartialMatch,
    /// Letter equals the secret letter at the same position
    Match,
}

impl MatchStatus {
    /// All variants, weakest first
    pub const ALL: [Self; 3] = [Self::NoMatch, Self::PartialMatch, Self::Match];

    /// Emoji tile for this status
    #[must_use]
    pub const fn to_emoji(self) -> char {
        match self {
            Self::Match => '🟩',
            Self::PartialMatch => '🟨',
            Self::NoMatch => '⬜',
        }
    }

    /// ASCII code for this status (`G`, `Y` or `-`)
    #[must_use]
    pub const fn to_char(self) -> char {
        match self {
            Self::Match => 'G',
            Self::PartialMatch => 'Y',
            Self::NoMatch => '-',
        }
    }

    /// Parse a status from its ASCII code or emoji
    ///
    /// Accepts:
    /// - 'G'/'g'/🟩 for a match
    /// - 'Y'/'y'/🟨 for a partial match
    /// - '-'/'_'/⬜ for no match
    #[must_use]
    pub const fn from_char(ch: char) -> Option<Self> {
        match ch {
            'G' | 'g' | '🟩' => Some(Self::Match),
            'Y' | 'y' | '🟨' => Some(Self::PartialMatch),
            '-' | '_' | '⬜' => Some(Self::NoMatch),
            _ => None,
        }
    }
}

impl fmt::Display for MatchStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Match => "MATCH",
            Self::PartialMatch => "PARTIAL_MATCH",
            Self::NoMatch => "NO_MATCH",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_ordering_by_strength() {
        assert!(MatchStatus::Match > MatchStatus::PartialMatch);
        assert!(MatchStatus::PartialMatch > MatchStatus::NoMatch);
        assert_eq!(MatchStatus::ALL.iter().max(), Some(&MatchStatus::Match));
    }

    #[test]
    fn status_char_codes() {
        for status in MatchStatus::ALL {
            assert_eq!(MatchStatus::from_char(status.to_char()), Some(status));
            assert_eq!(MatchStatus::from_char(status.to_emoji()), Some(status));
        }
        assert_eq!(MatchStatus::from_char('_'), Some(MatchStatus::NoMatch));
        assert_eq!(MatchStatus::from_char('x'), None);
    }

    #[test]
    fn status_display_names() {
        assert_eq!(MatchStatus::Match.to_string(), "MATCH");
        assert_eq!(MatchStatus::PartialMatch.to_string(), "PARTIAL_MATCH");
        assert_eq!(MatchStatus::NoMatch.to_string(), "NO_MATCH");
    }
}
