//! Invocation sessions: one seeded generator plus the calls made against it.
//!
//! A compiled fixture keeps its generator state in linear memory for the
//! lifetime of the module instance. A [`Session`] stands in for one such
//! instance: calls that draw without reseeding (`IfElseChain`, `Rand`)
//! continue the same stream, while `ForLoop` reseeds inside `Test` exactly
//! as the fixture does.

use gauntlet_common::{FixtureKind, DEFAULT_SEED};
use gauntlet_rng::LibcRand;
use log::debug;

use crate::error::OracleError;
use crate::{br_table, for_loop, if_else_chain, rand, switch};

/// One module instance's worth of oracle state.
#[derive(Debug, Clone)]
pub struct Session {
    seed: u32,
    rng: LibcRand,
    calls: usize,
}

impl Session {
    /// Create a session whose generator has been passed to `srand(seed)`.
    pub fn new(seed: u32) -> Self {
        debug!("session: srand({seed})");
        Self {
            seed,
            rng: LibcRand::new(seed),
            calls: 0,
        }
    }

    /// The seed this session was created with.
    pub fn seed(&self) -> u32 {
        self.seed
    }

    /// Number of `invoke` calls made so far.
    pub fn calls(&self) -> usize {
        self.calls
    }

    /// Call the fixture's `Test` entry (`rand` for the `Rand` fixture).
    ///
    /// # Errors
    ///
    /// Returns [`OracleError::Fixture`] if `args` does not match the
    /// fixture's arity. The oracle itself cannot fail.
    pub fn invoke(&mut self, kind: FixtureKind, args: &[i32]) -> Result<i32, OracleError> {
        kind.check_arity(args)?;
        self.calls += 1;

        let result = match kind {
            FixtureKind::ForLoop => for_loop::test_seeded(self.seed, args[0], args[1]),
            FixtureKind::IfElseChain => {
                if_else_chain::test(&mut self.rng, [args[0], args[1], args[2], args[3], args[4]])
            }
            FixtureKind::Switch => switch::test(args[0]),
            FixtureKind::BrTable => br_table::test(args[0], [args[1], args[2], args[3], args[4]]),
            FixtureKind::Rand => self.rng.rand(),
        };

        debug!("session: {kind}.Test{args:?} = {result}");
        Ok(result)
    }

    /// Call the fixture's zero-argument `main`.
    ///
    /// `main` seeds its own generator from the session seed, so it does not
    /// disturb the stream seen by [`invoke`](Self::invoke).
    pub fn main(&self, kind: FixtureKind) -> Result<i32, OracleError> {
        let result = match kind {
            FixtureKind::ForLoop => for_loop::main_seeded(self.seed),
            FixtureKind::IfElseChain => if_else_chain::main_seeded(self.seed),
            FixtureKind::Switch => switch::main(),
            FixtureKind::Rand => rand::main_seeded(self.seed),
            FixtureKind::BrTable => return Err(OracleError::NoMainEntry(kind.name())),
        };
        debug!("session: {kind}.main() = {result}");
        Ok(result)
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(DEFAULT_SEED)
    }
}
