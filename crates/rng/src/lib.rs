//! Reference libc generator for the Gauntlet fixtures.
//!
//! The fixtures were compiled against musl, whose `rand()` is a 64-bit
//! linear congruential generator returning the top 31 bits of its state.
//! [`LibcRand`] reproduces that sequence exactly, so the oracles can
//! compute the same values a WASM runtime must produce when it executes
//! the compiled fixture.
//!
//! Unlike the C original there is no process-wide state: every caller owns
//! its generator.
//!
//! # Usage
//!
//! ```
//! use gauntlet_rng::LibcRand;
//!
//! let mut rng = LibcRand::new(50);
//! assert_eq!(rng.rand(), 1943526997);
//! assert_eq!(rng.rand(), 693048727);
//! ```

use rand_core::{impls, Error, RngCore};

/// Largest value `rand()` can return.
pub const RAND_MAX: i32 = 0x7fff_ffff;

/// LCG multiplier (Knuth's MMIX constant).
const MULTIPLIER: u64 = 6364136223846793005;

/// The first draws for `srand(50)`, as recorded from the reference runtime.
pub const SEED_50_DRAWS: [i32; 7] = [
    1943526997, 693048727, 1850007113, 1925127658, 2054429178, 498528091, 848882219,
];

/// An explicitly owned instance of the reference `srand`/`rand` generator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LibcRand {
    state: u64,
}

impl LibcRand {
    /// Create a generator already seeded with `seed`.
    pub fn new(seed: u32) -> Self {
        let mut rng = Self { state: 0 };
        rng.srand(seed);
        rng
    }

    /// Reseed, discarding the current stream.
    ///
    /// The decrement happens in 32 bits before widening, so `srand(0)`
    /// yields state `0xffff_ffff`, not `u64::MAX`.
    pub fn srand(&mut self, seed: u32) {
        self.state = u64::from(seed.wrapping_sub(1));
    }

    /// Advance the generator and return the next value in `0..=RAND_MAX`.
    pub fn rand(&mut self) -> i32 {
        self.state = self.state.wrapping_mul(MULTIPLIER).wrapping_add(1);
        (self.state >> 33) as i32
    }

    /// Raw generator state.
    pub fn state(&self) -> u64 {
        self.state
    }
}

impl RngCore for LibcRand {
    fn next_u32(&mut self) -> u32 {
        self.rand() as u32
    }

    fn next_u64(&mut self) -> u64 {
        impls::next_u64_via_u32(self)
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        impls::fill_bytes_via_next(self, dest)
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}
