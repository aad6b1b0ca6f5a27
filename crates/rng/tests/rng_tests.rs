//! Integration tests for the reference generator.

use gauntlet_rng::{LibcRand, RAND_MAX, SEED_50_DRAWS};
use proptest::prelude::*;
use rand_core::RngCore;

#[test]
fn seed_50_low_nibble_of_first_draw_is_five() {
    // The ForLoop fixture runs `rand() & 0x0f` iterations.
    assert_eq!(SEED_50_DRAWS[0] & 0x0f, 5);
}

#[test]
fn seed_50_continues_past_recorded_keys() {
    let mut rng = LibcRand::new(50);
    let draws: Vec<i32> = (0..10).map(|_| rng.rand()).collect();
    assert_eq!(&draws[..7], &SEED_50_DRAWS[..]);
    assert_eq!(&draws[7..], &[786507225, 1724056003, 1098055985]);
}

#[test]
fn fill_bytes_is_deterministic() {
    let mut a = LibcRand::new(50);
    let mut b = LibcRand::new(50);
    let mut buf_a = [0u8; 13];
    let mut buf_b = [0u8; 13];
    a.fill_bytes(&mut buf_a);
    b.fill_bytes(&mut buf_b);
    assert_eq!(buf_a, buf_b);
    // Little-endian bytes of the first draw.
    assert_eq!(&buf_a[..4], &(SEED_50_DRAWS[0] as u32).to_le_bytes());
}

#[test]
fn clones_are_independent() {
    let mut a = LibcRand::new(50);
    a.rand();
    let mut b = a.clone();
    assert_eq!(a.rand(), b.rand());
    a.rand();
    assert_ne!(a.state(), b.state());
}

proptest! {
    /// Same seed, same stream.
    #[test]
    fn same_seed_same_stream(seed in any::<u32>()) {
        let mut a = LibcRand::new(seed);
        let mut b = LibcRand::new(seed);
        for _ in 0..32 {
            prop_assert_eq!(a.rand(), b.rand());
        }
    }

    /// Every draw lies in 0..=RAND_MAX.
    #[test]
    fn draws_are_non_negative(seed in any::<u32>()) {
        let mut rng = LibcRand::new(seed);
        for _ in 0..32 {
            let r = rng.rand();
            prop_assert!((0..=RAND_MAX).contains(&r));
        }
    }
}
