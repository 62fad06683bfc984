//! Coin-flip capability for randomized strategies
//!
//! The `Random` strategy never calls a global generator directly; it is
//! handed a `CoinFlip` source at construction so tests can substitute a
//! deterministic one.

use rand::rngs::ThreadRng;
use rand::Rng;

/// Source of independent fair coin flips.
pub trait CoinFlip {
    fn flip(&mut self) -> bool;
}

/// Seeded pseudo-random generator
///
/// Deterministic: same seed, same sequence. Uses xorshift64*.
#[derive(Clone, Debug)]
pub struct SeededRng {
    state: u64,
}

impl SeededRng {
    pub fn new(seed: u64) -> Self {
        let mut state = seed ^ 0x517cc1b727220a95;
        if state == 0 {
            state = 0x9e3779b97f4a7c15;
        }

        // Warm up the generator
        let mut rng = Self { state };
        for _ in 0..8 {
            rng.next_u64();
        }

        rng
    }

    /// Generate next u64
    pub fn next_u64(&mut self) -> u64 {
        // xorshift64*
        self.state ^= self.state >> 12;
        self.state ^= self.state << 25;
        self.state ^= self.state >> 27;
        self.state.wrapping_mul(0x2545f4914f6cdd1d)
    }

    /// Generate next u32
    pub fn next_u32(&mut self) -> u32 {
        (self.next_u64() >> 32) as u32
    }
}

impl CoinFlip for SeededRng {
    fn flip(&mut self) -> bool {
        self.next_u32() & 0x8000_0000 != 0
    }
}

/// Fair coin backed by thread-local OS entropy. Not reproducible.
pub struct EntropyCoin {
    rng: ThreadRng,
}

impl EntropyCoin {
    pub fn new() -> Self {
        Self { rng: rand::rng() }
    }
}

impl Default for EntropyCoin {
    fn default() -> Self {
        Self::new()
    }
}

impl CoinFlip for EntropyCoin {
    fn flip(&mut self) -> bool {
        self.rng.random()
    }
}
