//! `Switch` — a six-case `switch` the compiler lowers to a jump table.

/// Values for cases 0 through 5.
pub const TABLE: [i32; 6] = [10, 13, 17, 20, 100, 1000];

/// Value of the `default` arm.
pub const DEFAULT: i32 = -1;

/// Argument passed by the fixture's `main`.
pub const MAIN_ARG: i32 = 10;

/// `Test(idx)`. Total over `i32`.
pub fn test(idx: i32) -> i32 {
    match idx {
        0 => 10,
        1 => 13,
        2 => 17,
        3 => 20,
        4 => 100,
        5 => 1000,
        _ => DEFAULT,
    }
}

/// `main()` as compiled: `Test(10)`.
pub fn main() -> i32 {
    test(MAIN_ARG)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cases_match_table() {
        for (idx, expected) in TABLE.iter().enumerate() {
            assert_eq!(test(idx as i32), *expected);
        }
    }

    #[test]
    fn default_arm() {
        for idx in [-1, 6, 1000, -100, 100, i32::MIN, i32::MAX] {
            assert_eq!(test(idx), DEFAULT, "idx {idx}");
        }
    }

    #[test]
    fn main_falls_to_default() {
        assert_eq!(main(), DEFAULT);
    }
}
