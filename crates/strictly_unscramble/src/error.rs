//! Setup errors for word pools and session configuration.
//!
//! Play itself never fails: rejected input is a no-op or sets the
//! wrong-guess flag. Everything that could make word selection or
//! scrambling loop forever is rejected here, before the first round.

/// Error raised while validating a word pool or game configuration.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum SetupError {
    /// The pool contains no words at all.
    #[display("Word pool is empty")]
    EmptyPool,

    /// A pool entry has no letters after trimming.
    #[display("Word pool entry {} is empty", _0)]
    EmptyWord(usize),

    /// A pool entry contains whitespace inside the word.
    #[display("Word {:?} contains whitespace", _0)]
    WhitespaceInWord(String),

    /// A pool entry has fewer than two distinct letters, so every
    /// permutation of it equals the word itself.
    #[display("Word {:?} has no scramble distinct from itself", _0)]
    NoDistinctScramble(String),

    /// The pool has fewer distinct words than rounds in a session.
    #[display("Word pool has {} distinct words but a session needs {}", distinct, required)]
    PoolTooSmall {
        /// Distinct words available.
        distinct: usize,
        /// Rounds configured per session.
        required: usize,
    },

    /// `max_rounds` was zero.
    #[display("A session needs at least one round")]
    ZeroRounds,

    /// `score_increase` was zero.
    #[display("Score increase must be positive")]
    ZeroScoreIncrease,

    /// A session of all correct guesses would overflow the score.
    #[display(
        "{} rounds of {} points exceed the maximum score",
        max_rounds,
        score_increase
    )]
    ScoreOverflow {
        /// Rounds configured per session.
        max_rounds: usize,
        /// Points per correct guess.
        score_increase: u32,
    },
}

impl std::error::Error for SetupError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_names_offending_word() {
        let err = SetupError::NoDistinctScramble("aaa".to_string());
        assert_eq!(err.to_string(), "Word \"aaa\" has no scramble distinct from itself");
    }

    #[test]
    fn test_display_pool_too_small() {
        let err = SetupError::PoolTooSmall {
            distinct: 3,
            required: 10,
        };
        assert!(err.to_string().contains("3 distinct words"));
        assert!(err.to_string().contains("needs 10"));
    }
}
