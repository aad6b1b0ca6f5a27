//! Fixture identifiers for the branching gauntlet.
//!
//! Each fixture is a compiled program exporting a `Test` entry (and, for
//! most, a zero-argument `main`). The names match the file stems of the
//! compiled modules so that a runtime harness can map one to the other.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::FixtureError;

/// The seed every fixture in the gauntlet passes to `srand`.
pub const DEFAULT_SEED: u32 = 50;

/// One of the control-flow fixtures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FixtureKind {
    /// Bounded loop with an early `return` from inside the body.
    ForLoop,
    /// Five-way `if / else if` chain over a single random draw.
    IfElseChain,
    /// `switch` that the compiler lowers to a dense jump table.
    Switch,
    /// Hand-written `br_table` selecting one of four arguments.
    #[serde(rename = "br_table")]
    BrTable,
    /// The exported `srand`/`rand` pair itself.
    Rand,
}

/// All fixtures, in catalog order.
pub const ALL_FIXTURES: [FixtureKind; 5] = [
    FixtureKind::ForLoop,
    FixtureKind::IfElseChain,
    FixtureKind::Switch,
    FixtureKind::BrTable,
    FixtureKind::Rand,
];

impl FixtureKind {
    /// Module name of the compiled fixture.
    pub fn name(self) -> &'static str {
        match self {
            FixtureKind::ForLoop => "ForLoop",
            FixtureKind::IfElseChain => "IfElseChain",
            FixtureKind::Switch => "Switch",
            FixtureKind::BrTable => "br_table",
            FixtureKind::Rand => "Rand",
        }
    }

    /// Number of `i32` parameters taken by the `Test` entry.
    ///
    /// For `Rand` this is the arity of the exported `rand` function.
    pub fn arity(self) -> usize {
        match self {
            FixtureKind::ForLoop => 2,
            FixtureKind::IfElseChain => 5,
            FixtureKind::Switch => 1,
            FixtureKind::BrTable => 5,
            FixtureKind::Rand => 0,
        }
    }

    /// Whether the fixture's result depends on the generator.
    pub fn uses_generator(self) -> bool {
        matches!(
            self,
            FixtureKind::ForLoop | FixtureKind::IfElseChain | FixtureKind::Rand
        )
    }

    /// Whether the fixture exports a zero-argument `main`.
    pub fn has_main(self) -> bool {
        !matches!(self, FixtureKind::BrTable)
    }

    /// Check an argument list against this fixture's arity.
    pub fn check_arity(self, args: &[i32]) -> Result<(), FixtureError> {
        if args.len() != self.arity() {
            return Err(FixtureError::ArityMismatch {
                fixture: self.name(),
                expected: self.arity(),
                got: args.len(),
            });
        }
        Ok(())
    }
}

impl fmt::Display for FixtureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for FixtureKind {
    type Err = FixtureError;

    /// Case-insensitive; underscores and dashes are ignored so that
    /// `for_loop`, `for-loop` and `ForLoop` all name the same fixture.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let folded: String = s
            .chars()
            .filter(|c| *c != '_' && *c != '-')
            .map(|c| c.to_ascii_lowercase())
            .collect();
        match folded.as_str() {
            "forloop" => Ok(FixtureKind::ForLoop),
            "ifelsechain" => Ok(FixtureKind::IfElseChain),
            "switch" => Ok(FixtureKind::Switch),
            "brtable" => Ok(FixtureKind::BrTable),
            "rand" => Ok(FixtureKind::Rand),
            _ => Err(FixtureError::UnknownFixture(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_match_module_stems() {
        let names: Vec<&str> = ALL_FIXTURES.iter().map(|k| k.name()).collect();
        assert_eq!(
            names,
            vec!["ForLoop", "IfElseChain", "Switch", "br_table", "Rand"]
        );
    }

    #[test]
    fn parse_is_case_and_separator_insensitive() {
        assert_eq!("ForLoop".parse::<FixtureKind>(), Ok(FixtureKind::ForLoop));
        assert_eq!("for_loop".parse::<FixtureKind>(), Ok(FixtureKind::ForLoop));
        assert_eq!("if-else-chain".parse::<FixtureKind>(), Ok(FixtureKind::IfElseChain));
        assert_eq!("SWITCH".parse::<FixtureKind>(), Ok(FixtureKind::Switch));
        assert_eq!("br_table".parse::<FixtureKind>(), Ok(FixtureKind::BrTable));
        assert_eq!("BrTable".parse::<FixtureKind>(), Ok(FixtureKind::BrTable));
    }

    #[test]
    fn parse_unknown() {
        assert_eq!(
            "WhileLoop".parse::<FixtureKind>(),
            Err(FixtureError::UnknownFixture("WhileLoop".to_string()))
        );
        assert!("".parse::<FixtureKind>().is_err());
    }

    #[test]
    fn arities() {
        assert_eq!(FixtureKind::ForLoop.arity(), 2);
        assert_eq!(FixtureKind::IfElseChain.arity(), 5);
        assert_eq!(FixtureKind::Switch.arity(), 1);
        assert_eq!(FixtureKind::BrTable.arity(), 5);
        assert_eq!(FixtureKind::Rand.arity(), 0);
    }

    #[test]
    fn check_arity_reports_counts() {
        assert!(FixtureKind::Switch.check_arity(&[3]).is_ok());
        assert_eq!(
            FixtureKind::Switch.check_arity(&[]),
            Err(FixtureError::ArityMismatch {
                fixture: "Switch",
                expected: 1,
                got: 0
            })
        );
    }

    #[test]
    fn only_br_table_lacks_main() {
        for kind in ALL_FIXTURES {
            assert_eq!(kind.has_main(), kind != FixtureKind::BrTable);
        }
    }

    #[test]
    fn pure_fixtures_do_not_use_generator() {
        assert!(!FixtureKind::Switch.uses_generator());
        assert!(!FixtureKind::BrTable.uses_generator());
        assert!(FixtureKind::ForLoop.uses_generator());
    }

    #[test]
    fn serde_uses_module_names() {
        assert_eq!(
            serde_json::to_string(&FixtureKind::BrTable).unwrap(),
            "\"br_table\""
        );
        let kind: FixtureKind = serde_json::from_str("\"IfElseChain\"").unwrap();
        assert_eq!(kind, FixtureKind::IfElseChain);
    }
}
