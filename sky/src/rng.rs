//! Seeded pseudo-random sequence used to place stars.
//!
//! The generator is a sine hash: `frac(sin(state) * 10000)`. It is not a
//! good PRNG and is not meant to be one. Star layouts are a visible,
//! seed-keyed contract with the user, so the formula and the seed folding
//! must stay exactly as they are.

#[cfg(test)]
#[path = "rng_test.rs"]
mod rng_test;

/// Sine-hash generator keyed by a text seed.
#[derive(Debug, Clone, Default)]
pub struct SeededRandom {
    state: u64,
}

impl SeededRandom {
    /// Create a generator already seeded with `seed`.
    #[must_use]
    pub fn new(seed: &str) -> Self {
        let mut rng = Self::default();
        rng.set_seed(seed);
        rng
    }

    /// Reset the state to the sum of the UTF-16 code units of `seed`.
    ///
    /// The empty seed folds to state 0.
    pub fn set_seed(&mut self, seed: &str) {
        self.state = seed_state(seed);
    }

    /// The current integer state.
    #[must_use]
    pub fn state(&self) -> u64 {
        self.state
    }

    /// Next value in `[0, 1)`. Advances the state by one.
    #[allow(clippy::cast_precision_loss, clippy::should_implement_trait)]
    pub fn next(&mut self) -> f64 {
        let x = (self.state as f64).sin() * 10_000.0;
        self.state = self.state.wrapping_add(1);
        x - x.floor()
    }
}

/// Fold seed text into the generator's integer state.
#[must_use]
pub fn seed_state(seed: &str) -> u64 {
    seed.encode_utf16().map(u64::from).sum()
}
