//! Scramble invariant: the puzzle is a true anagram of the answer.

use super::Invariant;
use crate::engine::UnscrambleEngine;
use crate::random::RandomSource;
use crate::scramble::is_anagram;

/// Invariant: the scrambled word uses exactly the answer's letters and
/// is not the answer itself.
pub struct ScrambleIsAnagram;

impl<R: RandomSource> Invariant<UnscrambleEngine<R>> for ScrambleIsAnagram {
    fn holds(engine: &UnscrambleEngine<R>) -> bool {
        let scrambled = engine.state.scrambled_word();
        scrambled != engine.current_word && is_anagram(scrambled, &engine.current_word)
    }

    fn description() -> &'static str {
        "Scrambled word is a permutation of the answer distinct from it"
    }
}
