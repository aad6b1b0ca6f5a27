//! `IfElseChain` — five sequential comparisons against one draw.
//!
//! The fixture's `Test` does not seed; it draws from whatever state the
//! exported `srand` left behind. Here that state is an explicit
//! [`LibcRand`] the caller must supply, so an unseeded call cannot be
//! written.

use gauntlet_common::DEFAULT_SEED;
use gauntlet_rng::LibcRand;

/// Returned when no target matches.
pub const NO_MATCH: i32 = -1;

/// Arguments passed by the fixture's `main`.
pub const MAIN_TARGETS: [i32; 5] = [2, 5, 10, 15, 20];

/// `Test(i_0, .., i_4)`: index of the first target equal to the next draw.
pub fn test(rng: &mut LibcRand, targets: [i32; 5]) -> i32 {
    let r = rng.rand();
    if r == targets[0] {
        0
    } else if r == targets[1] {
        1
    } else if r == targets[2] {
        2
    } else if r == targets[3] {
        3
    } else if r == targets[4] {
        4
    } else {
        NO_MATCH
    }
}

/// `main()` as compiled: `srand(50)` then `Test(2, 5, 10, 15, 20)`.
pub fn main() -> i32 {
    main_seeded(DEFAULT_SEED)
}

/// `main()` with the seed made explicit.
pub fn main_seeded(seed: u32) -> i32 {
    let mut rng = LibcRand::new(seed);
    test(&mut rng, MAIN_TARGETS)
}
