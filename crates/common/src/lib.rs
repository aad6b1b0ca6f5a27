//! Gauntlet common types.
//!
//! This crate provides the pieces shared by the oracles and the CLI:
//!
//! - [`FixtureKind`] — the five branching fixtures and their arities
//! - [`parse_arg`] / [`parse_args`] — `i32` argument parsing (decimal or hex)
//! - [`FixtureError`] — errors from fixture lookup and argument handling

pub mod args;
pub mod error;
pub mod fixture;

// Re-export commonly used types at the crate root.
pub use args::{parse_arg, parse_args};
pub use error::FixtureError;
pub use fixture::{FixtureKind, ALL_FIXTURES, DEFAULT_SEED};

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn arb_fixture() -> impl Strategy<Value = FixtureKind> {
        prop::sample::select(&ALL_FIXTURES[..])
    }

    proptest! {
        /// Every fixture's display name parses back to the same fixture.
        #[test]
        fn display_parses_back(kind in arb_fixture()) {
            prop_assert_eq!(kind.to_string().parse::<FixtureKind>(), Ok(kind));
        }

        /// Any i32 printed in decimal parses to itself.
        #[test]
        fn decimal_args_parse_exactly(v in any::<i32>()) {
            prop_assert_eq!(parse_arg(&v.to_string()), Ok(v));
        }

        /// Any u32 printed as hex parses to its two's complement i32.
        #[test]
        fn hex_args_are_twos_complement(bits in any::<u32>()) {
            prop_assert_eq!(parse_arg(&format!("{bits:#x}")), Ok(bits as i32));
        }

        /// Arity checks accept exactly the declared count.
        #[test]
        fn arity_check_is_exact(kind in arb_fixture(), n in 0usize..8) {
            let args = vec![0; n];
            prop_assert_eq!(kind.check_arity(&args).is_ok(), n == kind.arity());
        }
    }
}
