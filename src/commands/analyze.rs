//! Guess analysis command
//!
//! Evaluates one guess against every same-length secret in the dictionary.

use crate::core::{Dictionary, MatchResult, MatchStatus, Word};
use crate::wordlists::WordList;
use anyhow::{Result, bail};
use rayon::prelude::*;
use rustc_hash::FxHashMap;

/// Aggregate feedback of a guess over all possible secrets
#[derive(Debug, Clone, PartialEq)]
pub struct GuessSummary {
    pub word: String,
    pub total_secrets: usize,
    /// Mean number of `Match` positions per secret
    pub average_matches: f64,
    /// Mean number of `PartialMatch` positions per secret
    pub average_partials: f64,
    /// Fraction of secrets that share at least one letter with the guess
    pub hit_rate: f64,
    /// Number of distinct results the guess can produce
    pub distinct_results: usize,
    /// Size of the largest group of secrets sharing one result
    pub largest_group: usize,
}

/// Score `guess` against each secret and aggregate the feedback
///
/// Secrets of a different length are skipped.
#[must_use]
pub fn summarize_guess<'a, I>(guess: &Word, secrets: I) -> GuessSummary
where
    I: IntoParallelIterator<Item = &'a Word>,
{
    let results: Vec<MatchResult> = secrets
        .into_par_iter()
        .filter(|secret| secret.len() == guess.len())
        .map(|secret| MatchResult::calculate(secret, guess))
        .collect();

    let total_secrets = results.len();
    let mut groups: FxHashMap<&MatchResult, usize> = FxHashMap::default();
    let mut matches = 0;
    let mut partials = 0;
    let mut hits = 0;

    for result in &results {
        let m = result.count(MatchStatus::Match);
        let p = result.count(MatchStatus::PartialMatch);
        matches += m;
        partials += p;
        if m + p > 0 {
            hits += 1;
        }
        *groups.entry(result).or_insert(0) += 1;
    }

    let ratio = |n: usize| {
        if total_secrets == 0 {
            0.0
        } else {
            n as f64 / total_secrets as f64
        }
    };

    GuessSummary {
        word: guess.text().to_string(),
        total_secrets,
        average_matches: ratio(matches),
        average_partials: ratio(partials),
        hit_rate: ratio(hits),
        distinct_results: groups.len(),
        largest_group: groups.values().copied().max().unwrap_or(0),
    }
}

/// Analyze a dictionary word as a guess against the whole dictionary
///
/// # Errors
///
/// Returns an error if the word is not in the dictionary.
pub fn analyze_guess(word: &str, dictionary: &WordList) -> Result<GuessSummary> {
    let Ok(guess) = Word::new(word) else {
        bail!("'{word}' is not a word");
    };
    if !dictionary.is_valid_word(guess.text()) {
        bail!("'{word}' is not in the dictionary");
    }

    let secrets: Vec<&Word> = dictionary.words_of_len(guess.len()).collect();
    Ok(summarize_guess(&guess, secrets))
}
