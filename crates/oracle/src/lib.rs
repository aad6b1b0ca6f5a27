//! Gauntlet oracles — the values a correct runtime must produce.
//!
//! Each module mirrors one compiled fixture and exposes its `Test` entry as
//! `test` and, where the fixture exports one, its `main` as `main`:
//!
//! - [`for_loop`] — bounded loop with early exit
//! - [`if_else_chain`] — sequential comparison chain
//! - [`switch`] — dense jump table
//! - [`br_table`] — four-way `br_table`
//! - [`rand`] — the exported `srand`/`rand` pair
//!
//! [`Session`] dispatches by [`FixtureKind`] and owns the generator state
//! that a module instance would carry between calls.
//!
//! # Usage
//!
//! ```
//! use gauntlet_common::FixtureKind;
//! use gauntlet_oracle::{run, Session};
//!
//! assert_eq!(run(FixtureKind::Switch, &[3]).unwrap(), 20);
//!
//! let mut session = Session::new(50);
//! assert_eq!(session.invoke(FixtureKind::ForLoop, &[10, 10]).unwrap(), -1568793775);
//! ```

pub mod br_table;
pub mod error;
pub mod for_loop;
pub mod if_else_chain;
pub mod rand;
pub mod session;
pub mod switch;

pub use error::OracleError;
pub use session::Session;

use gauntlet_common::FixtureKind;

/// Invoke a fixture's `Test` once in a fresh default-seeded session.
///
/// # Errors
///
/// Returns [`OracleError`] if `args` does not match the fixture's arity.
pub fn run(kind: FixtureKind, args: &[i32]) -> Result<i32, OracleError> {
    Session::default().invoke(kind, args)
}
