//! `br_table` — a hand-written `br_table` over four targets.
//!
//! `Test(idx, a, b, c, d)` branches to one of four blocks, each returning
//! the corresponding argument; the default label returns -1. The module
//! exports no `main`.

/// Value of the default label.
pub const DEFAULT: i32 = -1;

/// `Test(idx, a, b, c, d)`. Total over `i32`.
pub fn test(idx: i32, targets: [i32; 4]) -> i32 {
    usize::try_from(idx)
        .ok()
        .and_then(|i| targets.get(i).copied())
        .unwrap_or(DEFAULT)
}

#[cfg(test)]
mod tests {
    use super::*;

    const TARGETS: [i32; 4] = [3, 6, 9, 12];

    #[test]
    fn selects_each_target() {
        assert_eq!(test(0, TARGETS), 3);
        assert_eq!(test(1, TARGETS), 6);
        assert_eq!(test(2, TARGETS), 9);
        assert_eq!(test(3, TARGETS), 12);
    }

    #[test]
    fn out_of_range_takes_default() {
        assert_eq!(test(4, TARGETS), DEFAULT);
        assert_eq!(test(100, TARGETS), DEFAULT);
        assert_eq!(test(-100, TARGETS), DEFAULT);
        assert_eq!(test(i32::MIN, TARGETS), DEFAULT);
    }

    #[test]
    fn target_value_may_equal_default() {
        assert_eq!(test(2, [0, 0, -1, 0]), -1);
    }
}
