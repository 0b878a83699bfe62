//! The immutable supply of candidate words.

use crate::error::SetupError;
use std::collections::HashSet;
use tracing::{debug, instrument};

/// Validated, de-duplicated list of lowercase words.
///
/// Every word in the pool has at least two distinct letters, so a
/// scramble different from the word always exists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordPool {
    words: Vec<String>,
}

impl WordPool {
    /// Builds a pool from raw entries.
    ///
    /// Entries are trimmed and lowercased. Duplicates are dropped, keeping
    /// the first occurrence.
    ///
    /// # Errors
    ///
    /// Fails on an empty pool, an empty entry, an entry with inner
    /// whitespace, or an entry with fewer than two distinct letters.
    #[instrument(skip(words))]
    pub fn new<I, S>(words: I) -> Result<Self, SetupError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut seen = HashSet::new();
        let mut kept = Vec::new();

        for (index, raw) in words.into_iter().enumerate() {
            let word = raw.as_ref().trim().to_lowercase();
            if word.is_empty() {
                return Err(SetupError::EmptyWord(index));
            }
            if word.chars().any(char::is_whitespace) {
                return Err(SetupError::WhitespaceInWord(word));
            }
            if !has_distinct_scramble(&word) {
                return Err(SetupError::NoDistinctScramble(word));
            }
            if seen.insert(word.clone()) {
                kept.push(word);
            } else {
                debug!(index, "Dropping duplicate pool entry");
            }
        }

        if kept.is_empty() {
            return Err(SetupError::EmptyPool);
        }

        debug!(words = kept.len(), "Word pool ready");
        Ok(Self { words: kept })
    }

    /// Number of distinct words.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Always false; an empty pool cannot be constructed.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Returns the words in their original order.
    pub fn words(&self) -> &[String] {
        &self.words
    }

    /// Returns true if `word` is in the pool.
    pub fn contains(&self, word: &str) -> bool {
        self.words.iter().any(|w| w == word)
    }
}

/// A word has a distinct scramble iff it holds at least two different letters.
pub(crate) fn has_distinct_scramble(word: &str) -> bool {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => chars.any(|c| c != first),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalizes_and_dedupes() {
        let pool = WordPool::new(["Animal", " animal ", "bird"]).expect("valid pool");
        assert_eq!(pool.words(), ["animal", "bird"]);
        assert_eq!(pool.len(), 2);
    }

    #[test]
    fn test_rejects_empty_entry() {
        assert_eq!(WordPool::new(["cat", "  "]), Err(SetupError::EmptyWord(1)));
    }

    #[test]
    fn test_rejects_inner_whitespace() {
        assert_eq!(
            WordPool::new(["ice cream"]),
            Err(SetupError::WhitespaceInWord("ice cream".to_string()))
        );
    }

    #[test]
    fn test_rejects_single_letter_and_uniform_words() {
        assert_eq!(
            WordPool::new(["a"]),
            Err(SetupError::NoDistinctScramble("a".to_string()))
        );
        assert_eq!(
            WordPool::new(["cat", "zzz"]),
            Err(SetupError::NoDistinctScramble("zzz".to_string()))
        );
    }

    #[test]
    fn test_rejects_empty_pool() {
        let empty: [&str; 0] = [];
        assert_eq!(WordPool::new(empty), Err(SetupError::EmptyPool));
    }

    #[test]
    fn test_has_distinct_scramble() {
        assert!(has_distinct_scramble("ab"));
        assert!(has_distinct_scramble("aab"));
        assert!(!has_distinct_scramble("bb"));
        assert!(!has_distinct_scramble(""));
    }
}
