//! `ForLoop` — bounded loop with an early exit.
//!
//! The fixture seeds the generator inside `Test`, draws an iteration count
//! in `0..=15`, then adds one draw per iteration to an accumulator that
//! starts at 50. If the accumulator ever equals `stop` the loop returns
//! `stop_val` immediately.

use gauntlet_common::DEFAULT_SEED;
use gauntlet_rng::LibcRand;
use log::trace;

/// Initial accumulator value.
pub const INITIAL: i32 = 50;

/// Mask applied to the first draw to get the iteration count.
pub const ITERATION_MASK: i32 = 0x0f;

/// Arguments passed by the fixture's `main`.
pub const MAIN_ARGS: (i32, i32) = (10, 10);

/// `Test(stop, stopVal)` as compiled: seeds with 50.
pub fn test(stop: i32, stop_val: i32) -> i32 {
    test_seeded(DEFAULT_SEED, stop, stop_val)
}

/// `Test` with the seed made explicit.
pub fn test_seeded(seed: u32, stop: i32, stop_val: i32) -> i32 {
    let mut rng = LibcRand::new(seed);
    let iters = rng.rand() & ITERATION_MASK;
    let mut acc = INITIAL;

    for i in 0..iters {
        // i32.add wraps.
        acc = acc.wrapping_add(rng.rand());
        if acc == stop {
            trace!("ForLoop: early exit at iteration {i}/{iters}");
            return stop_val;
        }
    }

    acc
}

/// `main()` as compiled.
pub fn main() -> i32 {
    main_seeded(DEFAULT_SEED)
}

/// `main()` with the seed made explicit.
pub fn main_seeded(seed: u32) -> i32 {
    let (stop, stop_val) = MAIN_ARGS;
    test_seeded(seed, stop, stop_val)
}
