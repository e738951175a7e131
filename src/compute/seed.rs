//! Random seed generation and point mutation.

use rand::prelude::*;

use crate::schema::{Colour, Grid, SEED_SIZE};

/// Random number generator wrapper for seed operations.
///
/// Every draw is a uniform `f64` in [0, 1), taken in row-major cell order,
/// so two wrappers built from the same `u64` produce identical seeds.
pub struct SeedRng {
    rng: StdRng,
}

impl SeedRng {
    /// Create from seed.
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Create with random seed.
    pub fn random() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    #[inline]
    fn draw(&mut self) -> f64 {
        self.rng.r#gen::<f64>()
    }

    /// Generate a random 20x20 seed.
    ///
    /// Each cell flips a `prob_red` coin and then a `prob_blue` coin. When
    /// both come up, a fair coin picks blue on the low half and red on the
    /// high half. Probabilities are not range-checked; values outside
    /// [0, 1] simply saturate the coin.
    pub fn generate_seed(&mut self, prob_red: f64, prob_blue: f64) -> Grid {
        Grid::from_fn(SEED_SIZE, SEED_SIZE, |_, _| {
            let red = self.draw() < prob_red;
            let blue = self.draw() < prob_blue;
            match (red, blue) {
                (true, true) => {
                    if self.draw() < 0.5 {
                        Colour::Blue
                    } else {
                        Colour::Red
                    }
                }
                (true, false) => Colour::Red,
                (false, true) => Colour::Blue,
                (false, false) => Colour::Empty,
            }
        })
    }

    /// Mutate a seed, returning a new 20x20 grid.
    ///
    /// A cell is hit with probability `prob_mutation`; a hit cell always
    /// moves to one of the two other colours, chosen by a fair coin.
    ///
    /// # Panics
    ///
    /// Panics if `seed` is not 20x20.
    pub fn mutate(&mut self, seed: &Grid, prob_mutation: f64) -> Grid {
        seed.assert_shape(SEED_SIZE, SEED_SIZE);
        Grid::from_fn(SEED_SIZE, SEED_SIZE, |i, j| {
            let current = seed.get(i, j);
            if self.draw() < prob_mutation {
                let (low, high) = alternatives(current);
                if self.draw() < 0.5 { low } else { high }
            } else {
                current
            }
        })
    }

    /// Generate next u64 for seeding child RNGs.
    pub fn next_seed(&mut self) -> u64 {
        self.rng.r#gen()
    }
}

/// The two colours a mutated cell may become, in coin order.
fn alternatives(colour: Colour) -> (Colour, Colour) {
    match colour {
        Colour::Red => (Colour::Blue, Colour::Empty),
        Colour::Blue => (Colour::Red, Colour::Empty),
        Colour::Empty => (Colour::Red, Colour::Blue),
    }
}
