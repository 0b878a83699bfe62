//! Used-words invariant: selection never exceeds the session length.

use super::Invariant;
use crate::engine::UnscrambleEngine;
use crate::random::RandomSource;

/// Invariant: every used word comes from the pool, the current answer is
/// among them, and there are never more than `max_rounds` of them.
///
/// Duplicates are impossible by construction (`HashSet`).
pub struct UsedWordsBounded;

impl<R: RandomSource> Invariant<UnscrambleEngine<R>> for UsedWordsBounded {
    fn holds(engine: &UnscrambleEngine<R>) -> bool {
        engine.used_words.len() <= engine.config.max_rounds()
            && engine.used_words.contains(&engine.current_word)
            && engine.used_words.iter().all(|w| engine.pool.contains(w))
    }

    fn description() -> &'static str {
        "Used words are pool words, include the answer, and never exceed max rounds"
    }
}
