//! Letter scrambling and letter-count helpers.

use crate::random::RandomSource;
use std::collections::HashMap;
use tracing::{debug, instrument};

/// Shuffles tried before falling back to a rotation.
pub const MAX_SHUFFLE_ATTEMPTS: usize = 32;

/// Returns a permutation of `word` that differs from `word`.
///
/// Shuffles with `source` until the result differs, up to
/// [`MAX_SHUFFLE_ATTEMPTS`] times, then rotates the letters left by one.
/// A one-letter rotation differs from the input for every word with at
/// least two distinct letters, which the word pool guarantees.
#[instrument(skip(word, source), fields(len = word.chars().count()))]
pub fn shuffle_word<R: RandomSource + ?Sized>(word: &str, source: &mut R) -> String {
    let original: Vec<char> = word.chars().collect();
    let mut letters = original.clone();

    for attempt in 1..=MAX_SHUFFLE_ATTEMPTS {
        source.shuffle_letters(&mut letters);
        if letters != original {
            debug!(attempt, "Scramble found");
            return letters.into_iter().collect();
        }
    }

    debug!("Shuffles kept the original order, rotating instead");
    letters = original;
    letters.rotate_left(1);
    letters.into_iter().collect()
}

/// Counts occurrences of each character.
pub fn letter_counts(text: &str) -> HashMap<char, usize> {
    let mut counts = HashMap::new();
    for c in text.chars() {
        *counts.entry(c).or_insert(0) += 1;
    }
    counts
}

/// Returns true if `a` and `b` use exactly the same letters.
pub fn is_anagram(a: &str, b: &str) -> bool {
    letter_counts(a) == letter_counts(b)
}
