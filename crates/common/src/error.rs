//! Errors for fixture lookup and argument handling.

use thiserror::Error;

/// Errors that occur before an oracle is ever invoked.
///
/// The oracles themselves are total over `i32`; these only describe
/// callers that name a fixture that does not exist or pass the wrong
/// number of arguments.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FixtureError {
    /// Fixture name not recognized.
    #[error("unknown fixture '{0}'")]
    UnknownFixture(String),

    /// Wrong number of arguments for the fixture's `Test` entry.
    #[error("{fixture} takes {expected} argument(s), got {got}")]
    ArityMismatch {
        fixture: &'static str,
        expected: usize,
        got: usize,
    },

    /// Argument text is not a 32-bit integer.
    #[error("invalid argument '{0}' (expected a 32-bit integer)")]
    InvalidArgument(String),
}
