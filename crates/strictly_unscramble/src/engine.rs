//! The session engine: word selection, scrambling, guessing and scoring.

use crate::contracts::{AcceptableGuess, SubmittableGuess};
use crate::error::SetupError;
use crate::pool::WordPool;
use crate::random::RandomSource;
use crate::scramble::shuffle_word;
use crate::types::{GameConfig, SessionState};
use std::collections::HashSet;
use tracing::{debug, info, instrument, warn};

/// Owns one session of the unscramble game.
///
/// Every operation takes `&mut self` and leaves the session satisfying
/// [`SessionInvariants`](crate::invariants::SessionInvariants). The answer
/// for the current round never leaves the engine; callers see only
/// [`SessionState`].
#[derive(Debug, Clone)]
pub struct UnscrambleEngine<R> {
    pub(crate) pool: WordPool,
    pub(crate) config: GameConfig,
    pub(crate) source: R,
    pub(crate) state: SessionState,
    pub(crate) current_word: String,
    pub(crate) used_words: HashSet<String>,
}

impl<R: RandomSource> UnscrambleEngine<R> {
    /// Creates an engine and starts the first round.
    ///
    /// # Errors
    ///
    /// Returns [`SetupError::PoolTooSmall`] if the pool cannot supply
    /// `max_rounds` distinct words.
    #[instrument(skip(pool, source), fields(pool_size = pool.len()))]
    pub fn new(pool: WordPool, config: GameConfig, source: R) -> Result<Self, SetupError> {
        if pool.len() < config.max_rounds() {
            warn!(
                distinct = pool.len(),
                required = config.max_rounds(),
                "Word pool too small for session length"
            );
            return Err(SetupError::PoolTooSmall {
                distinct: pool.len(),
                required: config.max_rounds(),
            });
        }

        let mut engine = Self {
            pool,
            config,
            source,
            state: SessionState::new(String::new()),
            current_word: String::new(),
            used_words: HashSet::new(),
        };
        engine.reset();
        Ok(engine)
    }

    /// Returns the current snapshot.
    pub fn state(&self) -> &SessionState {
        &self.state
    }

    /// Returns the session rules.
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Returns the word pool.
    pub fn pool(&self) -> &WordPool {
        &self.pool
    }

    /// Number of letters in the current answer.
    pub fn word_len(&self) -> usize {
        self.current_word.chars().count()
    }

    /// Rounds left after the one in progress.
    pub fn rounds_remaining(&self) -> usize {
        if self.state.is_game_over {
            0
        } else {
            self.config.max_rounds() - self.state.current_word_count
        }
    }

    // ─────────────────────────────────────────────────────────────
    //  Guess input
    // ─────────────────────────────────────────────────────────────

    /// Replaces the pending guess if its letters can be drawn from the puzzle.
    ///
    /// Candidates that are longer than the puzzle, or that use a letter more
    /// often than the puzzle has it, are ignored.
    #[instrument(skip(self, candidate), fields(len = candidate.chars().count()))]
    pub fn set_pending_guess(&mut self, candidate: &str) -> &SessionState {
        match AcceptableGuess::check(candidate, &self.state.scrambled_word) {
            Ok(()) => self.state.user_guess = candidate.to_string(),
            Err(reason) => debug!(%reason, "Ignoring pending guess"),
        }
        &self.state
    }

    /// Replaces the pending guess without any filtering.
    #[instrument(skip(self, guess))]
    pub fn set_user_guess(&mut self, guess: impl Into<String>) -> &SessionState {
        self.state.user_guess = guess.into();
        &self.state
    }

    /// Checks the pending guess if it is non-blank and as long as the answer.
    ///
    /// Otherwise nothing changes, so incomplete input is not counted as wrong.
    #[instrument(skip(self))]
    pub fn submit_if_complete(&mut self) -> &SessionState {
        if self.state.is_game_over {
            debug!("Session over, ignoring submit");
            self.state.user_guess.clear();
            return &self.state;
        }
        if let Err(reason) = SubmittableGuess::check(&self.state.user_guess, self.word_len()) {
            debug!(%reason, "Guess not ready");
            return &self.state;
        }
        self.check_guess()
    }

    /// Compares the trimmed pending guess to the answer, ignoring case.
    ///
    /// A match scores and advances the round. A miss sets the wrong-guess
    /// flag and stays on the same word. The pending guess is cleared either way.
    #[instrument(skip(self), fields(round = self.state.current_word_count))]
    pub fn check_guess(&mut self) -> &SessionState {
        if self.state.is_game_over {
            debug!("Session over, ignoring guess");
            self.state.user_guess.clear();
            return &self.state;
        }

        let guess = self.state.user_guess.trim().to_lowercase();
        if guess == self.current_word.to_lowercase() {
            let updated_score = self.state.score + self.config.score_increase();
            info!(score = updated_score, "Correct guess");
            self.update_game_state(updated_score);
        } else {
            debug!("Wrong guess");
            self.state.is_guessed_word_wrong = true;
        }
        self.state.user_guess.clear();

        self.assert_invariants();
        &self.state
    }

    /// Moves to the next word without changing the score.
    #[instrument(skip(self), fields(round = self.state.current_word_count))]
    pub fn skip(&mut self) -> &SessionState {
        if self.state.is_game_over {
            debug!("Session over, ignoring skip");
            self.state.user_guess.clear();
            return &self.state;
        }

        self.update_game_state(self.state.score);
        self.state.user_guess.clear();

        self.assert_invariants();
        &self.state
    }

    /// Starts a new session from round one with no words used.
    #[instrument(skip(self))]
    pub fn reset(&mut self) -> &SessionState {
        self.used_words.clear();
        let scrambled = self.pick_random_word_and_shuffle();
        self.state = SessionState::new(scrambled);
        info!(max_rounds = self.config.max_rounds(), "Session reset");

        self.assert_invariants();
        &self.state
    }

    // ─────────────────────────────────────────────────────────────
    //  Round transitions
    // ─────────────────────────────────────────────────────────────

    /// Applies `updated_score` and either ends the session or deals the next word.
    fn update_game_state(&mut self, updated_score: u32) {
        self.state.is_guessed_word_wrong = false;
        self.state.score = updated_score;

        if self.used_words.len() == self.config.max_rounds() {
            info!(score = updated_score, "Game over");
            self.state.is_game_over = true;
        } else {
            self.state.scrambled_word = self.pick_random_word_and_shuffle();
            self.state.current_word_count += 1;
            debug!(round = self.state.current_word_count, "Next round");
        }
    }

    /// Draws an unused word, makes it the answer and returns its scramble.
    ///
    /// Draws uniformly from the words not yet used this session. The
    /// remainder is never empty here: the pool holds at least `max_rounds`
    /// words and a draw only happens while fewer than that are used.
    fn pick_random_word_and_shuffle(&mut self) -> String {
        let available: Vec<&String> = self
            .pool
            .words()
            .iter()
            .filter(|w| !self.used_words.contains(*w))
            .collect();

        let index = self.source.pick_index(available.len());
        let word = available[index].clone();

        self.used_words.insert(word.clone());
        let scrambled = shuffle_word(&word, &mut self.source);
        self.current_word = word;
        scrambled
    }

    /// Checks session invariants in debug builds.
    fn assert_invariants(&self) {
        #[cfg(debug_assertions)]
        {
            use crate::invariants::{InvariantSet, SessionInvariants};

            if let Err(violations) = SessionInvariants::check_all(self) {
                for violation in &violations {
                    warn!(invariant = %violation.description, "Session invariant violated");
                }
                debug_assert!(
            violations.is_empty(),
            "Session invariants violated: {:?}",
            violations
        );
            }
        }
    }
}
