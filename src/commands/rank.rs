//! Rank dictionary words as opening guesses
//!
//! Scores every candidate guess against all secrets and orders them by how
//! finely they split the secrets.

use super::analyze::{GuessSummary, summarize_guess};
use crate::core::Word;
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use std::cmp::Ordering;
use std::time::{Duration, Instant};
use tracing::info;

/// Ranking settings
#[derive(Debug, Clone, Copy)]
pub struct RankConfig {
    /// Only consider the first `limit` dictionary words as guesses
    pub limit: Option<usize>,
    /// Number of words to keep
    pub top: usize,
    pub show_progress: bool,
}

impl Default for RankConfig {
    fn default() -> Self {
        Self {
            limit: None,
            top: 10,
            show_progress: true,
        }
    }
}

/// Outcome of a ranking run
#[derive(Debug)]
pub struct RankResult {
    pub ranked: Vec<GuessSummary>,
    pub candidates: usize,
    pub duration: Duration,
}

/// Best first: more distinct results, then smaller worst case, then more hits
fn compare(a: &GuessSummary, b: &GuessSummary) -> Ordering {
    b.distinct_results
        .cmp(&a.distinct_results)
        .then(a.largest_group.cmp(&b.largest_group))
        .then(
            (b.average_matches + b.average_partials)
                .total_cmp(&(a.average_matches + a.average_partials)),
        )
        .then_with(|| a.word.cmp(&b.word))
}

/// Rank dictionary words as guesses against the whole dictionary
///
/// # Panics
///
/// Panics if the progress bar template is malformed.
#[must_use]
pub fn rank_guesses(words: &[Word], config: RankConfig) -> RankResult {
    let candidates: &[Word] = &words[..config.limit.unwrap_or(words.len()).min(words.len())];
    let start = Instant::now();

    let pb = if config.show_progress {
        ProgressBar::new(candidates.len() as u64)
    } else {
        ProgressBar::hidden()
    };
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
            .expect("valid progress template")
            .progress_chars("█▓▒░"),
    );
    pb.set_message("Scoring guesses");

    let mut ranked: Vec<GuessSummary> = candidates
        .par_iter()
        .map(|guess| {
            let summary = summarize_guess(guess, words);
            pb.inc(1);
            summary
        })
        .collect();

    pb.finish_with_message("Complete!");

    ranked.sort_by(compare);
    ranked.truncate(config.top);

    let duration = start.elapsed();
    info!(
        candidates = candidates.len(),
        elapsed_ms = duration.as_millis() as u64,
        "ranking finished"
    );

    RankResult {
        ranked,
        candidates: candidates.len(),
        duration,
    }
}
