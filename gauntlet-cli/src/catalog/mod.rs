//! Golden catalog — one specification per recorded fixture run.
//!
//! Each entry names a compiled fixture, the seed its `srand` receives, and
//! the ordered calls recorded from the reference runtime with their
//! literal results. Calls within an entry share one module instance, so
//! their order matters for fixtures that draw without reseeding.

pub mod branching;

use gauntlet_common::FixtureKind;

/// A fixture run specification.
#[derive(Debug, Clone)]
pub struct FixtureSpec {
    /// Unique identifier, also the witness file stem, e.g. "ForLoop".
    pub id: &'static str,
    /// Natural-language description of what the run checks.
    pub intent: &'static str,
    /// Which compiled fixture is exercised.
    pub kind: FixtureKind,
    /// Seed passed to `srand` before the first call.
    pub seed: u32,
    /// Expected result of the zero-argument `main`, if the fixture has one.
    pub main_expected: Option<i32>,
    /// Ordered `Test` calls and their recorded results.
    pub witness_cases: Vec<WitnessCase>,
}

/// A single recorded call: concrete inputs and the golden result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WitnessCase {
    pub inputs: Vec<i32>,
    pub expected: i32,
}

/// Collect every fixture specification.
pub fn all_fixtures() -> Vec<FixtureSpec> {
    branching::fixtures()
}

/// Look up a specification by id (exact match).
pub fn find(id: &str) -> Option<FixtureSpec> {
    all_fixtures().into_iter().find(|spec| spec.id == id)
}

/// Helper to build a witness case.
pub fn case(inputs: &[i32], expected: i32) -> WitnessCase {
    WitnessCase {
        inputs: inputs.to_vec(),
        expected,
    }
}
