//! Game state reducer
//!
//! Folds player actions into the current game, lifetime statistics and the
//! keyboard status. Secrets and guesses are validated through the `Matcher`
//! before any scoring happens.

use super::KeyboardState;
use crate::core::{Dictionary, MatchResult, Matcher, Word};
use thiserror::Error;
use tracing::{debug, info};

/// Game settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    pub max_guesses: usize,
}

impl GameConfig {
    #[must_use]
    pub const fn new(max_guesses: usize) -> Self {
        Self { max_guesses }
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new(6)
    }
}

/// Something the player does
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Begin a new game; an unfinished game is counted as abandoned
    StartGame { chosen_word: String },
    /// Submit a guess for the current game
    SubmitGuess { guess: String },
    /// Give up on the current game
    Abandon,
}

/// What a successfully reduced action produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuessOutcome {
    Started,
    /// The guess is not in the dictionary; nothing changed
    NotAWord,
    Accepted(MatchResult),
    Won(MatchResult),
    Lost(MatchResult),
    Abandoned,
}

/// Errors from actions that do not make sense in the current state
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("No game in progress")]
    NoGameInProgress,
    #[error("The game is already over")]
    GameOver,
    #[error("Guess must be {expected} letters, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },
    #[error("'{0}' is not in the dictionary")]
    UnknownSecret(String),
    #[error("A game must allow at least one guess")]
    NoGuessesAllowed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Won,
    Lost,
}

/// A guess the dictionary accepted, with its feedback
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AcceptedGuess {
    pub word: Word,
    pub result: MatchResult,
}

/// A single game
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    pub chosen_word: Word,
    pub accepted_words: Vec<AcceptedGuess>,
    pub status: GameStatus,
}

impl Game {
    fn new(chosen_word: Word) -> Self {
        Self {
            chosen_word,
            accepted_words: Vec::new(),
            status: GameStatus::InProgress,
        }
    }

    /// Letters per guess
    #[must_use]
    pub fn word_len(&self) -> usize {
        self.chosen_word.len()
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.status != GameStatus::InProgress
    }
}

/// Lifetime game statistics
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Stats {
    pub won: usize,
    pub lost: usize,
    pub abandoned: usize,
}

impl Stats {
    #[must_use]
    pub const fn played(&self) -> usize {
        self.won + self.lost + self.abandoned
    }
}

/// Accumulated state across games
#[derive(Debug, Clone)]
pub struct GameState<D> {
    matcher: Matcher<D>,
    config: GameConfig,
    current_game: Option<Game>,
    stats: Stats,
    word_list: Vec<String>,
    keyboard: KeyboardState,
}

impl<D: Dictionary> GameState<D> {
    #[must_use]
    pub fn new(dictionary: D, config: GameConfig) -> Self {
        Self {
            matcher: Matcher::new(dictionary),
            config,
            current_game: None,
            stats: Stats::default(),
            word_list: Vec::new(),
            keyboard: KeyboardState::new(),
        }
    }

    /// Apply an action
    ///
    /// # Errors
    /// Returns `GameError` when the action is not allowed right now: guessing
    /// without a game, guessing after the game ended, a guess of the wrong
    /// length, starting a game with a secret outside the dictionary, or
    /// starting a game when `max_guesses` is zero.
    pub fn reduce(&mut self, action: Action) -> Result<GuessOutcome, GameError> {
        match action {
            Action::StartGame { chosen_word } => self.start_game(&chosen_word),
            Action::SubmitGuess { guess } => self.submit_guess(&guess),
            Action::Abandon => self.abandon(),
        }
    }

    fn start_game(&mut self, chosen_word: &str) -> Result<GuessOutcome, GameError> {
        if self.config.max_guesses == 0 {
            return Err(GameError::NoGuessesAllowed);
        }

        let word = self
            .matcher
            .lookup(chosen_word)
            .ok_or_else(|| GameError::UnknownSecret(chosen_word.to_string()))?;

        if self.current_game.as_ref().is_some_and(|g| !g.is_over()) {
            self.stats.abandoned += 1;
            debug!("unfinished game abandoned by new start");
        }

        info!(len = word.len(), "game started");
        self.word_list.insert(0, word.text().to_string());
        self.current_game = Some(Game::new(word));
        self.keyboard.reset();
        Ok(GuessOutcome::Started)
    }

    fn submit_guess(&mut self, guess: &str) -> Result<GuessOutcome, GameError> {
        let max_guesses = self.config.max_guesses;
        let game = self
            .current_game
            .as_mut()
            .ok_or(GameError::NoGameInProgress)?;

        if game.is_over() {
            return Err(GameError::GameOver);
        }

        let actual = guess.chars().count();
        if actual != game.word_len() {
            return Err(GameError::LengthMismatch {
                expected: game.word_len(),
                actual,
            });
        }

        let Some(word) = self.matcher.lookup(guess) else {
            debug!(guess, "guess rejected: not in dictionary");
            return Ok(GuessOutcome::NotAWord);
        };
        // The secret was validated when the game started
        let result = MatchResult::calculate(&game.chosen_word, &word);

        self.keyboard.record(&word, &result);
        game.accepted_words.push(AcceptedGuess {
            word,
            result: result.clone(),
        });
        let turn = game.accepted_words.len();

        if result.is_solved() {
            game.status = GameStatus::Won;
            self.stats.won += 1;
            info!(turn, "game won");
            Ok(GuessOutcome::Won(result))
        } else if turn >= max_guesses {
            game.status = GameStatus::Lost;
            self.stats.lost += 1;
            info!(turn, "game lost");
            Ok(GuessOutcome::Lost(result))
        } else {
            debug!(turn, %result, "guess accepted");
            Ok(GuessOutcome::Accepted(result))
        }
    }

    fn abandon(&mut self) -> Result<GuessOutcome, GameError> {
        match self.current_game.take() {
            Some(game) if !game.is_over() => {
                self.stats.abandoned += 1;
                self.keyboard.reset();
                info!("game abandoned");
                Ok(GuessOutcome::Abandoned)
            }
            Some(game) => {
                self.current_game = Some(game);
                Err(GameError::GameOver)
            }
            None => Err(GameError::NoGameInProgress),
        }
    }

    #[must_use]
    pub const fn current_game(&self) -> Option<&Game> {
        self.current_game.as_ref()
    }

    #[must_use]
    pub const fn stats(&self) -> Stats {
        self.stats
    }

    /// Secrets of every started game, most recent first
    #[must_use]
    pub fn word_list(&self) -> &[String] {
        &self.word_list
    }

    #[must_use]
    pub const fn keyboard(&self) -> &KeyboardState {
        &self.keyboard
    }

    #[must_use]
    pub const fn config(&self) -> GameConfig {
        self.config
    }

    #[must_use]
    pub const fn matcher(&self) -> &Matcher<D> {
        &self.matcher
    }

    /// Guesses left in the current game
    #[must_use]
    pub fn remaining_guesses(&self) -> Option<usize> {
        self.current_game
            .as_ref()
            .map(|g| self.config.max_guesses.saturating_sub(g.accepted_words.len()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::MatchStatus;
    use crate::wordlists::WordList;

    fn state() -> GameState<WordList> {
        GameState::new(WordList::embedded(), GameConfig::default())
    }

    fn start(state: &mut GameState<WordList>, word: &str) {
        let outcome = state.reduce(Action::StartGame {
            chosen_word: word.to_string(),
        });
        assert_eq!(outcome, Ok(GuessOutcome::Started));
    }

    fn guess(state: &mut GameState<WordList>, word: &str) -> Result<GuessOutcome, GameError> {
        state.reduce(Action::SubmitGuess {
            guess: word.to_string(),
        })
    }

    #[test]
    fn start_game_records_word_list() {
        let mut s = state();
        start(&mut s, "basis");
        start(&mut s, "Angel");

        assert_eq!(s.word_list(), &["angel".to_string(), "basis".to_string()]);
        assert_eq!(s.current_game().unwrap().chosen_word.text(), "angel");
        // First game was still running
        assert_eq!(s.stats().abandoned, 1);
    }

    #[test]
    fn start_game_rejects_unknown_secret() {
        let mut s = state();
        let outcome = s.reduce(Action::StartGame {
            chosen_word: "abcde".to_string(),
        });
        assert_eq!(outcome, Err(GameError::UnknownSecret("abcde".to_string())));
        assert!(s.current_game().is_none());
    }

    #[test]
    fn guess_without_game_is_error() {
        let mut s = state();
        assert_eq!(guess(&mut s, "basis"), Err(GameError::NoGameInProgress));
    }

    #[test]
    fn not_a_word_leaves_state_untouched() {
        let mut s = state();
        start(&mut s, "basis");

        assert_eq!(guess(&mut s, "fghij"), Ok(GuessOutcome::NotAWord));
        assert!(s.current_game().unwrap().accepted_words.is_empty());
        assert_eq!(s.remaining_guesses(), Some(6));
        assert_eq!(s.keyboard().iter().count(), 0);
    }

    #[test]
    fn wrong_length_guess_is_error_not_panic() {
        let mut s = state();
        start(&mut s, "basis");
        assert_eq!(
            guess(&mut s, "background"),
            Err(GameError::LengthMismatch {
                expected: 5,
                actual: 10
            })
        );
    }

    #[test]
    fn accepted_guess_updates_keyboard() {
        let mut s = state();
        start(&mut s, "nudge");

        let outcome = guess(&mut s, "nuked").unwrap();
        let GuessOutcome::Accepted(result) = outcome else {
            panic!("expected accepted guess, got {outcome:?}");
        };
        assert_eq!(result.count(MatchStatus::Match), 2);
        assert_eq!(s.keyboard().status('k'), Some(MatchStatus::NoMatch));
        assert_eq!(s.remaining_guesses(), Some(5));
    }

    #[test]
    fn solving_wins_and_ends_game() {
        let mut s = state();
        start(&mut s, "baths");
        assert!(matches!(guess(&mut s, "basis"), Ok(GuessOutcome::Accepted(_))));
        assert!(matches!(guess(&mut s, "baths"), Ok(GuessOutcome::Won(_))));

        assert_eq!(s.stats().won, 1);
        assert_eq!(s.current_game().unwrap().status, GameStatus::Won);
        assert_eq!(guess(&mut s, "basis"), Err(GameError::GameOver));
        assert_eq!(s.reduce(Action::Abandon), Err(GameError::GameOver));
    }

    #[test]
    fn running_out_of_guesses_loses() {
        let mut s = GameState::new(WordList::embedded(), GameConfig::new(2));
        start(&mut s, "angel");
        assert!(matches!(guess(&mut s, "glean"), Ok(GuessOutcome::Accepted(_))));
        assert!(matches!(guess(&mut s, "ounce"), Ok(GuessOutcome::Lost(_))));

        assert_eq!(s.stats().lost, 1);
        assert_eq!(s.remaining_guesses(), Some(0));
    }

    #[test]
    fn finished_game_is_not_counted_as_abandoned() {
        let mut s = state();
        start(&mut s, "basis");
        assert!(matches!(guess(&mut s, "basis"), Ok(GuessOutcome::Won(_))));
        start(&mut s, "ounce");

        assert_eq!(s.stats().abandoned, 0);
        assert_eq!(s.keyboard().iter().count(), 0);
    }

    #[test]
    fn abandon_counts_and_clears() {
        let mut s = state();
        assert_eq!(s.reduce(Action::Abandon), Err(GameError::NoGameInProgress));

        start(&mut s, "basis");
        assert_eq!(s.reduce(Action::Abandon), Ok(GuessOutcome::Abandoned));
        assert!(s.current_game().is_none());
        assert_eq!(
            s.stats(),
            Stats {
                won: 0,
                lost: 0,
                abandoned: 1
            }
        );
        assert_eq!(s.stats().played(), 1);
    }

    #[test]
    fn zero_guess_config_cannot_start() {
        let mut s = GameState::new(WordList::embedded(), GameConfig::new(0));
        let outcome = s.reduce(Action::StartGame {
            chosen_word: "angel".to_string(),
        });

        assert_eq!(outcome, Err(GameError::NoGuessesAllowed));
        assert!(s.current_game().is_none());
        assert!(s.word_list().is_empty());
        assert_eq!(guess(&mut s, "ounce"), Err(GameError::NoGameInProgress));
        assert_eq!(s.stats(), Stats::default());
    }

    #[test]
    fn single_guess_config_allows_exactly_one() {
        let mut s = GameState::new(WordList::embedded(), GameConfig::new(1));
        start(&mut s, "angel");
        assert_eq!(s.remaining_guesses(), Some(1));
        assert!(matches!(guess(&mut s, "ounce"), Ok(GuessOutcome::Lost(_))));
        assert_eq!(guess(&mut s, "glean"), Err(GameError::GameOver));
    }
}
