//! RNG module - deterministic random piece selection.
//!
//! A small LCG (Numerical Recipes constants) keeps games seedable and
//! reproducible without pulling in an RNG crate. Pieces are drawn uniformly
//! from the catalog on every spawn.

/// Linear congruential generator.
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed.
    pub fn new(seed: u32) -> Self {
        // Avoid the all-zero fixed point.
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Next random u32.
    pub fn next_u32(&mut self) -> u32 {
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Uniform value in `[0, max)`.
    pub fn next_range(&mut self, max: u32) -> u32 {
        self.next_u32() % max
    }

    /// Current internal state, usable as a seed that continues the sequence.
    pub fn state(&self) -> u32 {
        self.state
    }
}
