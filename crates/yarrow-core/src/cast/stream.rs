//! Seed-driven pseudo-random stream.
//!
//! The only entropy source is the seed string: its SHA-256 digest seeds a
//! SplitMix64 generator. The sequence is fixed forever for a given seed, so
//! stored sessions can always be replayed.

use rand::{Rng, RngCore};
use sha2::{Digest, Sha256};

const GOLDEN_GAMMA: u64 = 0x9E37_79B9_7F4A_7C15;
const UNIT_SCALE: f64 = 1.0 / (1u64 << 53) as f64;

/// Deterministic stream derived from a seed string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeedStream {
    state: u64,
}

impl SeedStream {
    /// Derive a stream from a seed string.
    pub fn from_seed(seed: &str) -> Self {
        let digest = Sha256::digest(seed.as_bytes());
        let mut head = [0u8; 8];
        head.copy_from_slice(&digest[..8]);
        Self {
            state: u64::from_be_bytes(head),
        }
    }

    fn step(&mut self) -> u64 {
        self.state = self.state.wrapping_add(GOLDEN_GAMMA);
        let mut z = self.state;
        z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
        z ^ (z >> 31)
    }

    /// Uniform float in `[0, 1)` with 53 bits of precision.
    pub fn unit(&mut self) -> f64 {
        (self.step() >> 11) as f64 * UNIT_SCALE
    }

    /// One coin: 3 for heads, 2 for tails.
    pub fn coin(&mut self) -> u8 {
        if self.unit() > 0.5 { 3 } else { 2 }
    }

    /// Three coins for one line.
    pub fn three_coins(&mut self) -> [u8; 3] {
        [self.coin(), self.coin(), self.coin()]
    }

    /// Uniform index in `0..n`.
    pub fn below(&mut self, n: usize) -> usize {
        // unit() < 1.0, so the product stays below n.
        ((self.unit() * n as f64) as usize).min(n.saturating_sub(1))
    }

    /// Orientation flag: true for upright.
    pub fn upright(&mut self) -> bool {
        self.unit() > 0.5
    }
}

impl RngCore for SeedStream {
    fn next_u32(&mut self) -> u32 {
        (self.step() >> 32) as u32
    }

    fn next_u64(&mut self) -> u64 {
        self.step()
    }

    fn fill_bytes(&mut self, dst: &mut [u8]) {
        for chunk in dst.chunks_mut(8) {
            let bytes = self.step().to_le_bytes();
            chunk.copy_from_slice(&bytes[..chunk.len()]);
        }
    }
}

/// Three fair coins from any RNG, for callers tossing on someone's behalf.
pub fn toss_three_coins<R: Rng + ?Sized>(rng: &mut R) -> [u8; 3] {
    let mut coin = || if rng.random_bool(0.5) { 3 } else { 2 };
    [coin(), coin(), coin()]
}
