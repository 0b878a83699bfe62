//! Round bookkeeping invariant.

use super::Invariant;
use crate::engine::UnscrambleEngine;
use crate::random::RandomSource;

/// Invariant: the round ordinal equals the number of words drawn, stays
/// within `1..=max_rounds`, and game over means every round was drawn.
pub struct RoundCountConsistent;

impl<R: RandomSource> Invariant<UnscrambleEngine<R>> for RoundCountConsistent {
    fn holds(engine: &UnscrambleEngine<R>) -> bool {
        let count = engine.state.current_word_count();
        let max = engine.config.max_rounds();
        let drawn = engine.used_words.len();

        count >= 1 && count <= max && count == drawn && (!engine.state.is_game_over() || drawn == max)
    }

    fn description() -> &'static str {
        "Round count matches words drawn and never exceeds max rounds"
    }
}
