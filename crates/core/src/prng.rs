//! Random streams for poster generation.
//!
//! [`RandomSource`] is the seam every generator draws through: a uniform
//! real in [0, 1), a uniform real in a range, and a "pick one of N". The
//! stream is always an explicit `&mut` handle owned by the caller, so two
//! posters generated in parallel never share state.
//!
//! [`Xorshift64`] is the deterministic implementation. Same seed, same
//! sequence, on every platform (integer core, one float conversion).

use serde::{Deserialize, Serialize};

/// A seedable source of uniform random values.
///
/// Only [`next_f64`](RandomSource::next_f64) and
/// [`pick`](RandomSource::pick) are required. Every provided method consumes
/// exactly one underlying draw, so call counts stay predictable for replay.
pub trait RandomSource {
    /// Uniform `f64` in [0, 1).
    fn next_f64(&mut self) -> f64;

    /// Uniform index in [0, n).
    ///
    /// # Panics
    ///
    /// May panic if `n` is 0.
    fn pick(&mut self, n: usize) -> usize;

    /// Uniform `f64` between `min` and `max`.
    ///
    /// `min == max` returns `min` (after consuming a draw).
    fn next_range(&mut self, min: f64, max: f64) -> f64 {
        min + self.next_f64() * (max - min)
    }
}

/// Xorshift64 deterministic PRNG. Same seed always produces the same sequence.
///
/// Uses the standard shift parameters (13, 7, 17). A seed of 0 is replaced
/// with a non-zero fallback to avoid the all-zeros fixed point.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Xorshift64 {
    state: u64,
}

impl Xorshift64 {
    const FALLBACK_SEED: u64 = 0x5EED_DEAD_BEEF_CAFE;

    /// Creates a new PRNG with the given seed.
    pub fn new(seed: u64) -> Self {
        Self {
            state: if seed == 0 { Self::FALLBACK_SEED } else { seed },
        }
    }

    /// Advances the state and returns the next 64-bit value.
    pub fn next_u64(&mut self) -> u64 {
        self.state ^= self.state << 13;
        self.state ^= self.state >> 7;
        self.state ^= self.state << 17;
        self.state
    }
}

impl RandomSource for Xorshift64 {
    /// Upper 53 bits of `next_u64()` divided by 2^53.
    fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    /// Modulo reduction; the bias is negligible at 64-bit state width.
    fn pick(&mut self, n: usize) -> usize {
        (self.next_u64() % n as u64) as usize
    }
}
