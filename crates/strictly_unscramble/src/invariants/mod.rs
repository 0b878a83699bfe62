//! First-class invariants for an unscramble session.
//!
//! Invariants are logical properties that must hold after every engine
//! operation returns. They are checked in debug builds and can be tested
//! independently.

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants that can be checked together.
///
/// Implementations are provided for tuples.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set.
    ///
    /// Returns Ok(()) if all invariants hold, or Err with a list of
    /// violations if any invariant fails.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

fn collect<S, I: Invariant<S>>(state: &S, violations: &mut Vec<InvariantViolation>) {
    if !I::holds(state) {
        violations.push(InvariantViolation::new(I::description()));
    }
}

fn finish(violations: Vec<InvariantViolation>) -> Result<(), Vec<InvariantViolation>> {
    if violations.is_empty() {
        Ok(())
    } else {
        Err(violations)
    }
}

impl<S, I1, I2, I3> InvariantSet<S> for (I1, I2, I3)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
    I3: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();
        collect::<S, I1>(state, &mut violations);
        collect::<S, I2>(state, &mut violations);
        collect::<S, I3>(state, &mut violations);
        finish(violations)
    }
}

pub mod round_count_consistent;
pub mod scramble_is_anagram;
pub mod used_words_bounded;

pub use round_count_consistent::RoundCountConsistent;
pub use scramble_is_anagram::ScrambleIsAnagram;
pub use used_words_bounded::UsedWordsBounded;

/// All session invariants as a composable set.
pub type SessionInvariants = (ScrambleIsAnagram, UsedWordsBounded, RoundCountConsistent);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{GameConfig, ScriptedSource, UnscrambleEngine, WordPool};

    fn engine() -> UnscrambleEngine<ScriptedSource> {
        let pool = WordPool::new(["animal", "bird", "cat"]).expect("pool");
        let config = GameConfig::new(3, 20).expect("config");
        UnscrambleEngine::new(pool, config, ScriptedSource::first_and_rotate()).expect("engine")
    }

    #[test]
    fn test_invariant_set_holds_for_new_session() {
        assert!(SessionInvariants::check_all(&engine()).is_ok());
    }

    #[test]
    fn test_invariant_set_holds_after_full_session() {
        let mut engine = engine();
        for _ in 0..3 {
            engine.skip();
            assert!(SessionInvariants::check_all(&engine).is_ok());
        }
        assert!(engine.state().is_game_over());
    }

    #[test]
    fn test_invariant_set_reports_each_violation() {
        let mut engine = engine();
        engine.state.scrambled_word = engine.current_word.clone();
        engine.state.current_word_count = 7;

        let violations = SessionInvariants::check_all(&engine).unwrap_err();
        assert_eq!(violations.len(), 2);
    }
}
