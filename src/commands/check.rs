//! Check command
//!
//! Evaluates a single guess against a given secret.

use crate::core::{Dictionary, MatchResult, Matcher};
use anyhow::{Result, bail};

/// Outcome of checking one guess
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckResult {
    pub secret: String,
    pub guess: String,
    /// `None` when either word is not in the dictionary
    pub result: Option<MatchResult>,
}

/// Evaluate `guess` against `secret`
///
/// Unlike [`Matcher::evaluate`], unequal lengths are reported as an error so a
/// typo on the command line does not abort the process.
///
/// # Errors
///
/// Returns an error if the words differ in length.
pub fn check_words<D: Dictionary>(
    matcher: &Matcher<D>,
    secret: &str,
    guess: &str,
) -> Result<CheckResult> {
    let secret = secret.trim().to_lowercase();
    let guess = guess.trim().to_lowercase();

    let (secret_len, guess_len) = (secret.chars().count(), guess.chars().count());
    if secret_len != guess_len {
        bail!("Words must have equal length: '{secret}' has {secret_len} letters, '{guess}' has {guess_len}");
    }

    let result = matcher.evaluate(&secret, &guess);
    Ok(CheckResult {
        secret,
        guess,
        result,
    })
}
