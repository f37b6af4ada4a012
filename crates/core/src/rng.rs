//! RNG module - seedable generator used to deal the board
//!
//! Dealing has to be reproducible from a seed (tests, replays), so the deck
//! uses this small LCG instead of a thread-local generator. Shuffling is a
//! Fisher-Yates pass with rejection sampling, which gives every permutation
//! the same probability.

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // Avoid 0 seed which would produce all zeros
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Current internal state. Feeding it back into [`SimpleRng::new`]
    /// continues the same sequence.
    pub fn state(&self) -> u32 {
        self.state
    }

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        // LCG formula: (a * state + c) mod m
        // Using Numerical Recipes constants: a=1664525, c=1013904223, m=2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        // Low bits of a power-of-two LCG have short periods; fold the high half in.
        self.state ^ (self.state >> 16)
    }

    /// Generate random value in range [0, max) without modulo bias.
    ///
    /// Returns 0 when `max` is 0.
    pub fn next_range(&mut self, max: u32) -> u32 {
        if max <= 1 {
            return 0;
        }
        // Largest multiple of `max` that fits in u32; draws above it are rejected.
        let zone = u32::MAX - (u32::MAX % max);
        loop {
            let v = self.next_u32();
            if v < zone {
                return v % max;
            }
        }
    }

    /// Shuffle a slice using Fisher-Yates
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        for i in (1..slice.len()).rev() {
            let j = self.next_range((i + 1) as u32) as usize;
            slice.swap(i, j);
        }
    }
}

impl Default for SimpleRng {
    fn default() -> Self {
        Self::new(1)
    }
}
