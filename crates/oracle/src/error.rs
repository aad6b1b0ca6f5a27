//! Errors raised when invoking an oracle through a [`Session`](crate::Session).
//!
//! The oracle functions never fail; only dispatch by fixture name can.

use gauntlet_common::FixtureError;
use thiserror::Error;

/// Errors from session dispatch.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OracleError {
    /// Fixture lookup or argument validation failed.
    #[error(transparent)]
    Fixture(#[from] FixtureError),

    /// The fixture exports `Test` only.
    #[error("{0} has no zero-argument main entry")]
    NoMainEntry(&'static str),
}
