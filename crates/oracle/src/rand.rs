//! `Rand` — the exported `srand`/`rand` pair.

use gauntlet_common::DEFAULT_SEED;
use gauntlet_rng::LibcRand;

/// `srand(seed)` followed by `count` calls to `rand()`.
pub fn draws(seed: u32, count: usize) -> Vec<i32> {
    let mut rng = LibcRand::new(seed);
    (0..count).map(|_| rng.rand()).collect()
}

/// `main()`: the first draw after `srand(50)`.
pub fn main() -> i32 {
    main_seeded(DEFAULT_SEED)
}

/// `main()` with the seed made explicit.
pub fn main_seeded(seed: u32) -> i32 {
    LibcRand::new(seed).rand()
}
