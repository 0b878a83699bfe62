//! Core domain types for the unscramble game.

use crate::error::SetupError;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Number of words in a session unless configured otherwise.
pub const DEFAULT_MAX_ROUNDS: usize = 10;

/// Points awarded for a correct guess unless configured otherwise.
pub const DEFAULT_SCORE_INCREASE: u32 = 20;

/// Fixed per-session rules: how many rounds, and what a correct guess is worth.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GameConfig {
    max_rounds: usize,
    score_increase: u32,
}

impl GameConfig {
    /// Creates a validated configuration.
    ///
    /// # Errors
    ///
    /// Returns [`SetupError::ZeroRounds`] or [`SetupError::ZeroScoreIncrease`]
    /// if either value is zero, and [`SetupError::ScoreOverflow`] if a
    /// perfect session would score more than `u32::MAX`.
    #[instrument]
    pub fn new(max_rounds: usize, score_increase: u32) -> Result<Self, SetupError> {
        if max_rounds == 0 {
            return Err(SetupError::ZeroRounds);
        }
        if score_increase == 0 {
            return Err(SetupError::ZeroScoreIncrease);
        }
        let max_score = u32::try_from(max_rounds)
            .ok()
            .and_then(|rounds| rounds.checked_mul(score_increase));
        if max_score.is_none() {
            return Err(SetupError::ScoreOverflow {
                max_rounds,
                score_increase,
            });
        }
        Ok(Self {
            max_rounds,
            score_increase,
        })
    }

    /// Total words per session.
    pub fn max_rounds(&self) -> usize {
        self.max_rounds
    }

    /// Points per correct guess.
    pub fn score_increase(&self) -> u32 {
        self.score_increase
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            max_rounds: DEFAULT_MAX_ROUNDS,
            score_increase: DEFAULT_SCORE_INCREASE,
        }
    }
}

/// Coarse phase of a session, derived from the snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display)]
pub enum GamePhase {
    /// Rounds remain; guesses and skips advance the game.
    #[strum(to_string = "Playing")]
    Playing,
    /// The last round has been played; only reset does anything.
    #[strum(to_string = "Game over")]
    GameOver,
}

/// Snapshot of a session as seen by callers.
///
/// The answer for the current round is deliberately absent; only its
/// scrambled form is visible.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionState {
    /// Puzzle text for the current round.
    pub(crate) scrambled_word: String,
    /// 1-based ordinal of the round in progress.
    pub(crate) current_word_count: usize,
    /// Cumulative points.
    pub(crate) score: u32,
    /// Pending input, cleared after every check or skip.
    pub(crate) user_guess: String,
    /// Whether the last checked guess was wrong.
    pub(crate) is_guessed_word_wrong: bool,
    /// Whether the final round has been played.
    pub(crate) is_game_over: bool,
}

impl SessionState {
    /// Fresh round-one state showing the given scramble.
    pub(crate) fn new(scrambled_word: String) -> Self {
        Self {
            scrambled_word,
            current_word_count: 1,
            score: 0,
            user_guess: String::new(),
            is_guessed_word_wrong: false,
            is_game_over: false,
        }
    }

    /// Puzzle text for the current round.
    pub fn scrambled_word(&self) -> &str {
        &self.scrambled_word
    }

    /// 1-based ordinal of the round in progress.
    pub fn current_word_count(&self) -> usize {
        self.current_word_count
    }

    /// Cumulative points.
    pub fn score(&self) -> u32 {
        self.score
    }

    /// Pending guess text.
    pub fn user_guess(&self) -> &str {
        &self.user_guess
    }

    /// Whether the last checked guess was wrong.
    pub fn is_guessed_word_wrong(&self) -> bool {
        self.is_guessed_word_wrong
    }

    /// Whether the session has ended.
    pub fn is_game_over(&self) -> bool {
        self.is_game_over
    }

    /// Returns the session phase.
    pub fn phase(&self) -> GamePhase {
        if self.is_game_over {
            GamePhase::GameOver
        } else {
            GamePhase::Playing
        }
    }
}
