//! Injectable randomness for word draws and letter shuffles.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use std::collections::VecDeque;
use tracing::instrument;

/// Source of the two random decisions the engine makes.
pub trait RandomSource {
    /// Returns an index uniformly distributed in `0..len`.
    ///
    /// Callers never pass `len == 0`.
    fn pick_index(&mut self, len: usize) -> usize;

    /// Permutes `letters` in place.
    fn shuffle_letters(&mut self, letters: &mut [char]);
}

/// Production source backed by any [`rand::Rng`].
#[derive(Debug, Clone)]
pub struct RngSource<R> {
    rng: R,
}

impl<R: Rng> RngSource<R> {
    /// Wraps an existing generator.
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RngSource<StdRng> {
    /// Generator seeded from the operating system.
    #[instrument]
    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_entropy())
    }

    /// Generator with a fixed seed, for reproducible sessions.
    #[instrument]
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> RandomSource for RngSource<R> {
    fn pick_index(&mut self, len: usize) -> usize {
        self.rng.gen_range(0..len)
    }

    fn shuffle_letters(&mut self, letters: &mut [char]) {
        letters.shuffle(&mut self.rng);
    }
}

/// Deterministic source that replays scripted decisions.
///
/// Picks are taken modulo `len`. A shuffle rotates the letters left by
/// the next scripted amount. Exhausted picks yield 0 (first candidate);
/// exhausted rotations fall back to the default rotation, which is 0
/// (leave unchanged) unless set otherwise.
#[derive(Debug, Clone, Default)]
pub struct ScriptedSource {
    picks: VecDeque<usize>,
    rotations: VecDeque<usize>,
    default_rotation: usize,
}

impl ScriptedSource {
    /// Creates a source that replays `picks` and `rotations` in order.
    pub fn new(picks: Vec<usize>, rotations: Vec<usize>) -> Self {
        Self {
            picks: picks.into(),
            rotations: rotations.into(),
            default_rotation: 0,
        }
    }

    /// Always picks the first unused word and rotates every shuffle by one.
    pub fn first_and_rotate() -> Self {
        Self::default().with_default_rotation(1)
    }

    /// Sets the rotation used once scripted rotations run out.
    pub fn with_default_rotation(mut self, by: usize) -> Self {
        self.default_rotation = by;
        self
    }
}

impl RandomSource for ScriptedSource {
    fn pick_index(&mut self, len: usize) -> usize {
        self.picks.pop_front().unwrap_or(0) % len
    }

    fn shuffle_letters(&mut self, letters: &mut [char]) {
        if letters.is_empty() {
            return;
        }
        let by = self
            .rotations
            .pop_front()
            .unwrap_or(self.default_rotation)
            % letters.len();
        letters.rotate_left(by);
    }
}
