//! Interactive play mode
//!
//! Line-based game against a secret drawn from the dictionary.

use crate::game::{Action, GameConfig, GameError, GameState, GuessOutcome, Stats};
use crate::output::formatters::{keyboard_rows, result_row};
use crate::wordlists::WordList;
use anyhow::{Context, Result};
use colored::Colorize;
use std::io::{BufRead, Write};
use tracing::debug;

/// Play mode settings
#[derive(Debug, Clone, Default)]
pub struct PlayConfig {
    /// Fixed secret for every game; a random dictionary word when `None`
    pub secret: Option<String>,
    pub game: GameConfig,
}

/// Run the interactive game until the player quits or input ends
///
/// Returns the statistics of the session.
///
/// # Errors
///
/// Returns an error on I/O failure, an empty dictionary, a fixed secret
/// that is not in the dictionary, or a game config allowing zero guesses.
pub fn run_play<R: BufRead, W: Write>(
    dictionary: &WordList,
    config: &PlayConfig,
    mut input: R,
    mut out: W,
) -> Result<Stats> {
    let mut state = GameState::new(dictionary, config.game);

    writeln!(out, "\n╔══════════════════════════════════════════════════════════════╗")?;
    writeln!(out, "║                    Word Match - Play Mode                    ║")?;
    writeln!(out, "╚══════════════════════════════════════════════════════════════╝\n")?;
    writeln!(out, "Commands: 'quit' to exit, 'new' for a new game\n")?;

    start_game(&mut state, dictionary, config, &mut out)?;

    loop {
        let Some(line) = read_line(&mut input, &mut out, "Guess")? else {
            break;
        };

        match line.as_str() {
            "" => {}
            "quit" | "q" | "exit" => break,
            "new" | "n" => start_game(&mut state, dictionary, config, &mut out)?,
            guess => {
                let outcome = state.reduce(Action::SubmitGuess {
                    guess: guess.to_string(),
                });
                let game_over = report(&state, outcome, &mut out)?;
                if game_over {
                    let again = read_line(&mut input, &mut out, "Play again? (yes/no)")?;
                    if !matches!(again.as_deref(), Some("yes" | "y")) {
                        break;
                    }
                    start_game(&mut state, dictionary, config, &mut out)?;
                }
            }
        }
    }

    let stats = state.stats();
    writeln!(
        out,
        "\n👋 Thanks for playing! Won {}, lost {}, abandoned {}\n",
        stats.won, stats.lost, stats.abandoned
    )?;
    Ok(stats)
}

fn start_game<W: Write>(
    state: &mut GameState<&WordList>,
    dictionary: &WordList,
    config: &PlayConfig,
    out: &mut W,
) -> Result<()> {
    let secret = match &config.secret {
        Some(secret) => secret.clone(),
        None => dictionary
            .random_word(&mut rand::rng())
            .map(|w| w.text().to_string())
            .context("Dictionary is empty")?,
    };

    state.reduce(Action::StartGame {
        chosen_word: secret,
    })?;

    let len = state.current_game().map_or(0, |g| g.word_len());
    writeln!(
        out,
        "🔄 New game: guess the {len}-letter word in {} tries\n",
        config.game.max_guesses
    )?;
    Ok(())
}

/// Print the outcome of a guess; returns true when the game ended
fn report<W: Write>(
    state: &GameState<&WordList>,
    outcome: Result<GuessOutcome, GameError>,
    out: &mut W,
) -> Result<bool> {
    let outcome = match outcome {
        Ok(outcome) => outcome,
        Err(e) => {
            debug!(error = %e, "guess refused");
            writeln!(out, "❌ {e}\n")?;
            return Ok(false);
        }
    };

    let Some(game) = state.current_game() else {
        return Ok(false);
    };

    match outcome {
        GuessOutcome::NotAWord => {
            writeln!(out, "❌ Not in word list\n")?;
            return Ok(false);
        }
        GuessOutcome::Accepted(_) | GuessOutcome::Won(_) | GuessOutcome::Lost(_) => {}
        GuessOutcome::Started | GuessOutcome::Abandoned => return Ok(false),
    }

    writeln!(out)?;
    for accepted in &game.accepted_words {
        writeln!(out, "  {}", result_row(&accepted.word, &accepted.result))?;
    }
    writeln!(out)?;
    for row in keyboard_rows(state.keyboard()) {
        writeln!(out, "  {row}")?;
    }
    writeln!(out)?;

    match outcome {
        GuessOutcome::Won(_) => {
            let turns = game.accepted_words.len();
            writeln!(
                out,
                "{}",
                format!(
                    "🎉 Solved in {turns} {}!",
                    if turns == 1 { "guess" } else { "guesses" }
                )
                .bright_green()
                .bold()
            )?;
            Ok(true)
        }
        GuessOutcome::Lost(_) => {
            writeln!(
                out,
                "{} {}",
                "Out of guesses. The word was".red(),
                game.chosen_word.text().to_uppercase().bright_yellow().bold()
            )?;
            Ok(true)
        }
        _ => {
            let remaining = state.remaining_guesses().unwrap_or(0);
            writeln!(out, "{remaining} guesses left\n")?;
            Ok(false)
        }
    }
}

/// Prompt and read one trimmed, lowercased line; `None` at end of input
fn read_line<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    prompt: &str,
) -> Result<Option<String>> {
    write!(out, "{prompt}: ")?;
    out.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_lowercase()))
}
