//! Property-based tests for session invariants.

use crate::{
    GameConfig, RandomSource, RngSource, ScriptedSource, UnscrambleEngine, WordPool, is_anagram,
    letter_counts,
};
use proptest::prelude::*;
use std::collections::HashSet;

/// Strategy: a lowercase word with at least two distinct letters.
fn word_strategy() -> impl Strategy<Value = String> {
    "[a-f]{2,8}".prop_filter("needs two distinct letters", |w| {
        w.chars().collect::<HashSet<_>>().len() >= 2
    })
}

/// Strategy: a pool of distinct words plus a session length it can supply.
fn pool_strategy() -> impl Strategy<Value = (Vec<String>, usize)> {
    prop::collection::hash_set(word_strategy(), 1..16)
        .prop_flat_map(|words| {
            let words: Vec<String> = words.into_iter().collect();
            let len = words.len();
            (Just(words), 1..=len)
        })
}

/// One caller action.
#[derive(Debug, Clone)]
enum Action {
    Type(String),
    Submit,
    Check,
    Skip,
    Reset,
}

fn action_strategy() -> impl Strategy<Value = Action> {
    prop_oneof![
        "[a-f ]{0,8}".prop_map(Action::Type),
        Just(Action::Submit),
        Just(Action::Check),
        Just(Action::Skip),
        Just(Action::Reset),
    ]
}

fn engine(
    words: &[String],
    rounds: usize,
    seed: u64,
) -> UnscrambleEngine<RngSource<rand::rngs::StdRng>> {
    let pool = WordPool::new(words).expect("generated pool is valid");
    let config = GameConfig::new(rounds, 20).expect("generated config is valid");
    UnscrambleEngine::new(pool, config, RngSource::seeded(seed)).expect("pool covers rounds")
}

fn assert_scramble<R: RandomSource>(engine: &UnscrambleEngine<R>) -> Result<(), TestCaseError> {
    let scrambled = engine.state().scrambled_word();
    prop_assert_ne!(scrambled, engine.current_word.as_str());
    prop_assert!(is_anagram(scrambled, &engine.current_word));
    Ok(())
}

proptest! {
    // A full session of skips draws every round from the pool exactly once.
    #[test]
    fn no_repeat_across_session((words, rounds) in pool_strategy(), seed in any::<u64>()) {
        let mut engine = engine(&words, rounds, seed);
        let mut seen = vec![engine.current_word.clone()];

        while !engine.state().is_game_over() {
            engine.skip();
            if !engine.state().is_game_over() {
                seen.push(engine.current_word.clone());
            }
        }

        let distinct: HashSet<_> = seen.iter().collect();
        prop_assert_eq!(seen.len(), rounds);
        prop_assert_eq!(distinct.len(), rounds);
        prop_assert_eq!(engine.used_words.len(), rounds);
        prop_assert!(seen.iter().all(|w| words.contains(w)));
    }

    // Every scramble is a distinct permutation of its answer.
    #[test]
    fn scramble_never_identity((words, rounds) in pool_strategy(), seed in any::<u64>()) {
        let mut engine = engine(&words, rounds, seed);
        assert_scramble(&engine)?;
        while !engine.state().is_game_over() {
            engine.skip();
            assert_scramble(&engine)?;
        }
    }

    // Scripted shuffles that never move a letter still produce a scramble.
    #[test]
    fn identity_shuffles_still_scramble((words, rounds) in pool_strategy()) {
        let pool = WordPool::new(&words).expect("valid pool");
        let config = GameConfig::new(rounds, 20).expect("valid config");
        let mut engine = UnscrambleEngine::new(pool, config, ScriptedSource::default())
            .expect("pool covers rounds");
        assert_scramble(&engine)?;
        while !engine.state().is_game_over() {
            engine.skip();
            assert_scramble(&engine)?;
        }
    }

    // The typing filter accepts exactly the sub-multisets of the puzzle.
    #[test]
    fn pending_guess_filter_sound(
        (words, rounds) in pool_strategy(),
        seed in any::<u64>(),
        candidate in "[a-h]{0,10}",
    ) {
        let mut engine = engine(&words, rounds, seed);
        let before = engine.state().clone();
        let puzzle = letter_counts(before.scrambled_word());
        let wanted = letter_counts(&candidate);
        let fits = candidate.chars().count() <= before.scrambled_word().chars().count()
            && wanted.iter().all(|(c, n)| puzzle.get(c).copied().unwrap_or(0) >= *n);

        let after = engine.set_pending_guess(&candidate).clone();
        if fits {
            prop_assert_eq!(after.user_guess(), candidate.as_str());
        } else {
            prop_assert_eq!(after.user_guess(), before.user_guess());
        }
        prop_assert_eq!(after.score(), before.score());
        prop_assert_eq!(after.scrambled_word(), before.scrambled_word());
        prop_assert_eq!(after.current_word_count(), before.current_word_count());
    }

    // Correct answers in any casing with surrounding spaces score exactly once.
    #[test]
    fn correct_guess_scores((words, rounds) in pool_strategy(), seed in any::<u64>(), upper in any::<bool>()) {
        let mut engine = engine(&words, rounds, seed);
        let answer = if upper {
            engine.current_word.to_uppercase()
        } else {
            engine.current_word.clone()
        };
        engine.set_user_guess(format!("  {answer}\t"));
        let state = engine.check_guess();
        prop_assert_eq!(state.score(), 20);
        prop_assert!(!state.is_guessed_word_wrong());
        prop_assert_eq!(state.user_guess(), "");
        if rounds == 1 {
            prop_assert!(state.is_game_over());
        } else {
            prop_assert_eq!(state.current_word_count(), 2);
        }
    }

    // Arbitrary action sequences keep invariants; reset always restores round one.
    #[test]
    fn random_play_then_reset(
        (words, rounds) in pool_strategy(),
        seed in any::<u64>(),
        actions in prop::collection::vec(action_strategy(), 0..40),
    ) {
        let mut engine = engine(&words, rounds, seed);
        for action in actions {
            let before = engine.state().clone();
            match action {
                Action::Type(text) => { engine.set_pending_guess(&text); }
                Action::Submit => { engine.submit_if_complete(); }
                Action::Check => { engine.check_guess(); }
                Action::Skip => { engine.skip(); }
                Action::Reset => { engine.reset(); }
            }
            let after = engine.state();
            prop_assert!(after.current_word_count() <= rounds);
            prop_assert!(engine.used_words.len() <= rounds);
            if before.is_game_over() && after.is_game_over() {
                prop_assert_eq!(after.score(), before.score());
                prop_assert_eq!(after.current_word_count(), before.current_word_count());
            }
            assert_scramble(&engine)?;
        }

        let state = engine.reset().clone();
        prop_assert_eq!(state.score(), 0);
        prop_assert_eq!(state.current_word_count(), 1);
        prop_assert!(!state.is_game_over());
        prop_assert!(!state.is_guessed_word_wrong());
        prop_assert_eq!(state.user_guess(), "");
        prop_assert_eq!(engine.used_words.len(), 1);
    }
}
