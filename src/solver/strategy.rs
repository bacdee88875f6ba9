//! Guess selection strategies
//!
//! Defines the Strategy trait and the random selection policy.

use super::CandidatePool;
use crate::core::Word;
use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// A strategy for choosing the next guess from the candidate pool
pub trait Strategy {
    /// Select a guess for `round` (0 = no feedback yet)
    ///
    /// Returns `None` when there is nothing to choose from.
    fn select_guess<'p>(&mut self, pool: &'p CandidatePool, round: usize) -> Option<&'p Word>;
}

/// Random selection
///
/// The opening guess is drawn uniformly from the words with five distinct
/// letters; every later guess uniformly from the remaining candidates.
pub struct RandomStrategy<R = StdRng> {
    rng: R,
}

impl<R: Rng> RandomStrategy<R> {
    pub const fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RandomStrategy<StdRng> {
    /// Seeded selection; the same seed and pool give the same guesses
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }

    /// Seeded when `seed` is given, OS entropy otherwise
    #[must_use]
    pub fn from_seed(seed: Option<u64>) -> Self {
        seed.map_or_else(|| Self::new(StdRng::from_os_rng()), Self::seeded)
    }
}

impl<R: Rng> Strategy for RandomStrategy<R> {
    fn select_guess<'p>(&mut self, pool: &'p CandidatePool, round: usize) -> Option<&'p Word> {
        if round == 0 {
            let opening: Vec<&Word> = pool.iter().filter(|w| w.has_distinct_letters()).collect();
            return opening.choose(&mut self.rng).copied();
        }

        pool.words().choose(&mut self.rng)
    }
}
