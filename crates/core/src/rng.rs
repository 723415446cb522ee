//! RNG module - randomness source for piece selection
//!
//! The controller only needs "an integer in `[0, bound)`", expressed by the
//! [`RandomSource`] trait. [`SimpleRng`] is a small seeded LCG so that a given
//! seed always replays the same game.

/// Source of piece identities.
pub trait RandomSource {
    /// Return a value in `[0, bound)`. `bound` is always non-zero.
    fn next_int(&mut self, bound: u32) -> u32;
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    fn next_int(&mut self, bound: u32) -> u32 {
        (**self).next_int(bound)
    }
}

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SimpleRng {
    seed: u32,
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // Avoid 0 seed which would produce all zeros
        let state = if seed == 0 { 1 } else { seed };
        Self { seed, state }
    }

    /// The seed this generator was created with.
    pub fn seed(&self) -> u32 {
        self.seed
    }

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }
}

impl RandomSource for SimpleRng {
    fn next_int(&mut self, bound: u32) -> u32 {
        assert!(bound > 0, "next_int bound must be non-zero");
        // Multiply-high keeps the well-mixed upper bits; LCG low bits cycle quickly.
        ((self.next_u32() as u64 * bound as u64) >> 32) as u32
    }
}

/// Replays a fixed list of values, cycling when exhausted.
///
/// Each value is reduced modulo the requested bound. Handy for scripted
/// games where the piece order must be known in advance.
#[derive(Debug, Clone)]
pub struct SequenceRng {
    values: Vec<u32>,
    pos: usize,
}

impl SequenceRng {
    pub fn new(values: impl Into<Vec<u32>>) -> Self {
        let values = values.into();
        assert!(!values.is_empty(), "SequenceRng needs at least one value");
        Self { values, pos: 0 }
    }

    /// Always yield the same piece identity.
    pub fn repeat(kind: crate::types::PieceKind) -> Self {
        Self::new(vec![kind.index() as u32])
    }
}

impl RandomSource for SequenceRng {
    fn next_int(&mut self, bound: u32) -> u32 {
        let v = self.values[self.pos % self.values.len()];
        self.pos = self.pos.wrapping_add(1);
        v % bound
    }
}
