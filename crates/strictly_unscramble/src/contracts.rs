//! Contract-based validation for guesses.
//!
//! Guesses are filtered in two stages. While typing, a candidate must be
//! buildable from the scrambled letters (`AcceptableGuess`). On submit,
//! the trimmed guess must be non-blank and exactly as long as the answer
//! (`SubmittableGuess`). Neither stage is an error to the caller: a failed
//! check turns the operation into a no-op.

use crate::scramble::letter_counts;
use tracing::instrument;

/// Why a guess did not pass a precondition.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum GuessRejection {
    /// The candidate is longer than the scrambled word.
    #[display("Guess has {} letters but the puzzle has {}", guess, puzzle)]
    TooLong {
        /// Letters in the candidate.
        guess: usize,
        /// Letters in the scrambled word.
        puzzle: usize,
    },

    /// The candidate uses a letter more often than the puzzle offers it.
    #[display("Letter {:?} is not available", _0)]
    LetterUnavailable(char),

    /// The trimmed guess is empty.
    #[display("Guess is blank")]
    Blank,

    /// The trimmed guess length differs from the answer length.
    #[display("Guess has {} letters but the answer has {}", guess, answer)]
    WrongLength {
        /// Letters in the trimmed guess.
        guess: usize,
        /// Letters in the answer.
        answer: usize,
    },
}

impl std::error::Error for GuessRejection {}

// ─────────────────────────────────────────────────────────────
//  Typing-time preconditions
// ─────────────────────────────────────────────────────────────

/// Precondition: the candidate is no longer than the scrambled word.
pub struct FitsScramble;

impl FitsScramble {
    /// Checks the candidate length against the puzzle.
    #[instrument(skip(candidate, scrambled))]
    pub fn check(candidate: &str, scrambled: &str) -> Result<(), GuessRejection> {
        let guess = candidate.chars().count();
        let puzzle = scrambled.chars().count();
        if guess > puzzle {
            Err(GuessRejection::TooLong { guess, puzzle })
        } else {
            Ok(())
        }
    }
}

/// Precondition: every letter of the candidate is available in the puzzle,
/// counting repeats.
pub struct LettersAvailable;

impl LettersAvailable {
    /// Checks the candidate's letters form a sub-multiset of the puzzle's.
    #[instrument(skip(candidate, scrambled))]
    pub fn check(candidate: &str, scrambled: &str) -> Result<(), GuessRejection> {
        let available = letter_counts(scrambled);
        let wanted = letter_counts(candidate);

        // Report the first offending letter in input order.
        for c in candidate.chars() {
            if wanted[&c] > available.get(&c).copied().unwrap_or(0) {
                return Err(GuessRejection::LetterUnavailable(c));
            }
        }
        Ok(())
    }
}

/// Composite precondition for accepting typed input.
pub struct AcceptableGuess;

impl AcceptableGuess {
    /// Validates all typing-time preconditions.
    #[instrument(skip(candidate, scrambled))]
    pub fn check(candidate: &str, scrambled: &str) -> Result<(), GuessRejection> {
        LettersAvailable::check(candidate, scrambled)?;
        FitsScramble::check(candidate, scrambled)?;
        Ok(())
    }
}

// ─────────────────────────────────────────────────────────────
//  Submit-time preconditions
// ─────────────────────────────────────────────────────────────

/// Precondition: the trimmed guess is not blank.
pub struct NotBlank;

impl NotBlank {
    /// Checks the guess has visible content.
    pub fn check(guess: &str) -> Result<(), GuessRejection> {
        if guess.trim().is_empty() {
            Err(GuessRejection::Blank)
        } else {
            Ok(())
        }
    }
}

/// Precondition: the trimmed guess has as many letters as the answer.
pub struct MatchesWordLength;

impl MatchesWordLength {
    /// Checks the trimmed length against the answer length.
    pub fn check(guess: &str, answer_len: usize) -> Result<(), GuessRejection> {
        let guess = guess.trim().chars().count();
        if guess != answer_len {
            Err(GuessRejection::WrongLength {
                guess,
                answer: answer_len,
            })
        } else {
            Ok(())
        }
    }
}

/// Composite precondition for submitting a guess for checking.
pub struct SubmittableGuess;

impl SubmittableGuess {
    /// Validates all submit-time preconditions.
    #[instrument(skip(guess))]
    pub fn check(guess: &str, answer_len: usize) -> Result<(), GuessRejection> {
        NotBlank::check(guess)?;
        MatchesWordLength::check(guess, answer_len)?;
        Ok(())
    }
}
