//! Strictly Unscramble - session logic for a word-unscrambling game
//!
//! A session deals a fixed number of words from a [`WordPool`], never the
//! same word twice, and shows each as a scramble that is guaranteed to
//! differ from the word. The player types guesses, checks them, or skips;
//! the engine keeps score and declares game over after the last round.
//!
//! # Architecture
//!
//! - **Engine**: [`UnscrambleEngine`] owns all mutable state
//! - **Snapshot**: [`SessionState`] is what callers read after each call
//! - **Contracts**: guess preconditions ([`AcceptableGuess`], [`SubmittableGuess`])
//! - **Invariants**: session properties checked in debug builds
//! - **Randomness**: injectable via [`RandomSource`]
//!
//! # Example
//!
//! ```
//! use strictly_unscramble::{GameConfig, RngSource, UnscrambleEngine, WordPool};
//!
//! # fn main() -> Result<(), strictly_unscramble::SetupError> {
//! let pool = WordPool::new(["animal", "bird", "cat"])?;
//! let config = GameConfig::new(3, 20)?;
//! let mut engine = UnscrambleEngine::new(pool, config, RngSource::seeded(42))?;
//!
//! assert_eq!(engine.state().current_word_count(), 1);
//! engine.skip();
//! assert_eq!(engine.state().current_word_count(), 2);
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod contracts;
mod engine;
mod error;
pub mod invariants;
mod pool;
mod random;
mod scramble;
mod types;

#[cfg(test)]
mod proptests;

// Crate-level exports - Engine
pub use engine::UnscrambleEngine;

// Crate-level exports - Domain types
pub use error::SetupError;
pub use pool::WordPool;
pub use types::{DEFAULT_MAX_ROUNDS, DEFAULT_SCORE_INCREASE, GameConfig, GamePhase, SessionState};

// Crate-level exports - Guess contracts
pub use contracts::{
    AcceptableGuess, FitsScramble, GuessRejection, LettersAvailable, MatchesWordLength, NotBlank,
    SubmittableGuess,
};

// Crate-level exports - Randomness and scrambling
pub use random::{RandomSource, RngSource, ScriptedSource};
pub use scramble::{MAX_SHUFFLE_ATTEMPTS, is_anagram, letter_counts, shuffle_word};
