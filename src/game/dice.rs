use rand::distributions::Distribution;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use super::globals::*;

/// The source of every random draw made during a match.
pub trait Dice {
    /// Roll the die, returning a number between 1 and `DIE_FACES` inclusive.
    fn roll(&mut self) -> usize;

    /// Flip a fair coin.
    fn coin(&mut self) -> bool;

    /// Put the players in a random turn order.
    fn shuffle(&mut self, order: &mut [PlayerId]);
}

/// Dice backed by a pseudo-random number generator.
pub struct RandomDice<R: Rng = StdRng> {
    rng: R,
}

impl<R: Rng> RandomDice<R> {
    /// Return dice that draw from `rng`.
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RandomDice<StdRng> {
    /// Dice that produce the same sequence of draws for the same seed.
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }

    /// Dice seeded from the operating system's entropy source.
    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_entropy())
    }
}

impl<R: Rng> Dice for RandomDice<R> {
    fn roll(&mut self) -> usize {
        DIE.sample(&mut self.rng)
    }

    fn coin(&mut self) -> bool {
        self.rng.gen()
    }

    fn shuffle(&mut self, order: &mut [PlayerId]) {
        order.shuffle(&mut self.rng);
    }
}
