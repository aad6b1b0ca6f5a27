//! Gauntlet CLI library — golden catalog, witness files and result checks.
//!
//! - [`catalog`] — recorded fixture runs with literal golden values
//! - [`witness`] — witness files for harnesses and checks of recorded results
//! - [`generate`] — writes witness files plus a blake3 manifest

pub mod catalog;
pub mod generate;
pub mod witness;
