//! Deterministic pseudo-random streams seeded by a string.
//!
//! Shapes seed their width jitter with their stable identity, so the same shape
//! jitters the same way on every render while different shapes diverge.

use rand::rngs::StdRng;
use rand::{Rng as _, SeedableRng};

/// A pseudo-random stream of `f64` values in `[0, 1)`.
pub struct Rng {
    inner: StdRng,
}

impl Rng {
    /// Creates a stream whose output depends only on `seed`.
    pub fn new(seed: &str) -> Self {
        Self {
            inner: StdRng::seed_from_u64(fnv1a(seed)),
        }
    }

    /// Next value in `[0, 1)`.
    pub fn next_f64(&mut self) -> f64 {
        self.inner.random::<f64>()
    }
}

impl Iterator for Rng {
    type Item = f64;

    fn next(&mut self) -> Option<f64> {
        Some(self.next_f64())
    }
}

/// First value of the stream for `seed`; what a single render draws.
pub fn seeded_unit(seed: &str) -> f64 {
    Rng::new(seed).next_f64()
}

// 64-bit FNV-1a; stable across platforms and builds, unlike std's hasher.
fn fnv1a(s: &str) -> u64 {
    const OFFSET: u64 = 0xcbf2_9ce4_8422_2325;
    const PRIME: u64 = 0x0000_0100_0000_01b3;
    s.bytes()
        .fold(OFFSET, |hash, byte| (hash ^ u64::from(byte)).wrapping_mul(PRIME))
}
