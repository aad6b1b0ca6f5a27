//! Witness files — golden calls for a fixture, and checks of recorded results.
//!
//! A witness file is what a runtime harness consumes: the seed to pass to
//! `srand`, the expected `main` result, and an ordered list of `Test`
//! calls with their expected results:
//!
//! ```json
//! {
//!   "fixture": "ForLoop",
//!   "seed": 50,
//!   "main": -1568793775,
//!   "witnesses": [
//!     {"input": [10, 10], "expected": -1568793775}
//!   ]
//! }
//! ```
//!
//! The harness records what the runtime under test returned as a list of
//! observations, which [`check`] replays against the oracle:
//!
//! ```json
//! [
//!   {"entry": "main", "input": [], "actual": -1568793775},
//!   {"input": [10, 10], "actual": -1568793775}
//! ]
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use gauntlet_common::FixtureKind;
use gauntlet_oracle::{OracleError, Session};
use log::debug;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::catalog::FixtureSpec;

/// A single golden call: inputs to `Test`, expected output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Witness {
    pub input: Vec<i32>,
    pub expected: i32,
}

/// Everything a harness needs to replay one fixture run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WitnessFile {
    pub fixture: FixtureKind,
    pub seed: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub main: Option<i32>,
    pub witnesses: Vec<Witness>,
}

/// Which exported entry an observation was recorded from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Entry {
    #[default]
    Test,
    Main,
}

/// One result recorded from the runtime under test.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Observation {
    #[serde(default)]
    pub entry: Entry,
    #[serde(default)]
    pub input: Vec<i32>,
    pub actual: i32,
}

/// Result of checking one observation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckResult {
    pub index: usize,
    pub entry: Entry,
    pub passed: bool,
    pub expected: i32,
    pub actual: i32,
}

/// Errors from witness operations.
#[derive(Debug, Error)]
pub enum WitnessError {
    #[error(transparent)]
    Oracle(#[from] OracleError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("cannot access '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The oracle disagrees with a literal recorded in the catalog.
    #[error("{fixture} witness {index}: golden value {expected}, oracle computed {actual}")]
    GoldenMismatch {
        fixture: String,
        index: usize,
        expected: i32,
        actual: i32,
    },

    /// The oracle disagrees with the catalog's `main` value.
    #[error("{fixture} main: golden value {expected}, oracle computed {actual}")]
    MainMismatch {
        fixture: String,
        expected: i32,
        actual: i32,
    },

    /// A `main` observation carried arguments.
    #[error("observation {index}: main takes no arguments, got {got}")]
    MainWithInputs { index: usize, got: usize },
}

impl WitnessError {
    /// Wrap an I/O error with the path it concerns.
    pub fn io(path: &Path, source: std::io::Error) -> Self {
        WitnessError::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}

/// Replay a catalog specification through the oracle and build its witness file.
///
/// Every oracle result is compared against the literal recorded in the
/// catalog; the first disagreement is an error.
pub fn build(spec: &FixtureSpec) -> Result<WitnessFile, WitnessError> {
    let mut session = Session::new(spec.seed);

    let main = match spec.main_expected {
        Some(expected) => {
            let actual = session.main(spec.kind)?;
            if actual != expected {
                return Err(WitnessError::MainMismatch {
                    fixture: spec.id.to_string(),
                    expected,
                    actual,
                });
            }
            Some(actual)
        }
        None => None,
    };

    let mut witnesses = Vec::with_capacity(spec.witness_cases.len());
    for (index, case) in spec.witness_cases.iter().enumerate() {
        let actual = session.invoke(spec.kind, &case.inputs)?;
        if actual != case.expected {
            return Err(WitnessError::GoldenMismatch {
                fixture: spec.id.to_string(),
                index,
                expected: case.expected,
                actual,
            });
        }
        witnesses.push(Witness {
            input: case.inputs.clone(),
            expected: actual,
        });
    }

    debug!("{}: {} witnesses agree with the oracle", spec.id, witnesses.len());

    Ok(WitnessFile {
        fixture: spec.kind,
        seed: spec.seed,
        main,
        witnesses,
    })
}

/// Check recorded runtime results against the oracle.
///
/// `Test` observations are replayed in order through one session seeded
/// with `seed`, mirroring a single module instance. `main` observations
/// are computed independently and do not advance that session.
pub fn check(
    kind: FixtureKind,
    seed: u32,
    observations: &[Observation],
) -> Result<Vec<CheckResult>, WitnessError> {
    let mut session = Session::new(seed);
    let mut results = Vec::with_capacity(observations.len());

    for (index, obs) in observations.iter().enumerate() {
        let expected = match obs.entry {
            Entry::Main => {
                if !obs.input.is_empty() {
                    return Err(WitnessError::MainWithInputs {
                        index,
                        got: obs.input.len(),
                    });
                }
                session.main(kind)?
            }
            Entry::Test => session.invoke(kind, &obs.input)?,
        };

        results.push(CheckResult {
            index,
            entry: obs.entry,
            passed: expected == obs.actual,
            expected,
            actual: obs.actual,
        });
    }

    Ok(results)
}

/// Parse a JSON array of observations.
pub fn parse_observations(json: &str) -> Result<Vec<Observation>, WitnessError> {
    Ok(serde_json::from_str(json)?)
}

/// Read and parse an observations file.
pub fn read_observations(path: &Path) -> Result<Vec<Observation>, WitnessError> {
    let text = fs::read_to_string(path).map_err(|e| WitnessError::io(path, e))?;
    parse_observations(&text)
}

/// Serialize a witness file as pretty JSON with a trailing newline.
pub fn to_json(file: &WitnessFile) -> Result<String, WitnessError> {
    let mut json = serde_json::to_string_pretty(file)?;
    json.push('\n');
    Ok(json)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{self, case};
    use gauntlet_common::FixtureError;

    fn make_spec(
        kind: FixtureKind,
        main_expected: Option<i32>,
        cases: Vec<catalog::WitnessCase>,
    ) -> FixtureSpec {
        FixtureSpec {
            id: "test_spec",
            intent: "test",
            kind,
            seed: 50,
            main_expected,
            witness_cases: cases,
        }
    }

    #[test]
    fn build_every_catalog_entry() {
        for spec in catalog::all_fixtures() {
            let file = build(&spec).unwrap_or_else(|e| panic!("{}: {e}", spec.id));
            assert_eq!(file.witnesses.len(), spec.witness_cases.len());
            assert_eq!(file.main, spec.main_expected);
        }
    }

    #[test]
    fn build_reports_golden_mismatch() {
        let bad = make_spec(FixtureKind::Switch, Some(-1), vec![case(&[0], 10), case(&[1], 14)]);
        match build(&bad) {
            Err(WitnessError::GoldenMismatch {
                index,
                expected,
                actual,
                ..
            }) => {
                assert_eq!((index, expected, actual), (1, 14, 13));
            }
            other => panic!("expected GoldenMismatch, got {other:?}"),
        }
    }

    #[test]
    fn build_reports_main_mismatch() {
        let bad = make_spec(FixtureKind::ForLoop, Some(0), vec![]);
        assert!(matches!(
            build(&bad),
            Err(WitnessError::MainMismatch {
                expected: 0,
                actual: -1568793775,
                ..
            })
        ));
    }

    #[test]
    fn build_reports_arity() {
        let bad = make_spec(FixtureKind::Switch, Some(-1), vec![case(&[0, 1], 10)]);
        assert!(matches!(
            build(&bad),
            Err(WitnessError::Oracle(OracleError::Fixture(
                FixtureError::ArityMismatch { .. }
            )))
        ));
    }

    #[test]
    fn witness_file_json_shape() {
        let file = build(&catalog::find("br_table").unwrap()).unwrap();
        let json = to_json(&file).unwrap();
        assert!(json.contains("\"fixture\": \"br_table\""));
        assert!(!json.contains("\"main\""));
        assert!(json.ends_with("}\n"));
        let parsed: WitnessFile = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, file);
    }

    #[test]
    fn parse_observations_defaults_to_test_entry() {
        let obs = parse_observations(r#"[{"input": [3], "actual": 20}, {"entry": "main", "actual": -1}]"#)
            .unwrap();
        assert_eq!(obs[0].entry, Entry::Test);
        assert_eq!(obs[1].entry, Entry::Main);
        assert!(obs[1].input.is_empty());
    }

    #[test]
    fn parse_observations_rejects_non_array() {
        assert!(matches!(
            parse_observations(r#"{"input": [], "actual": 1}"#),
            Err(WitnessError::Json(_))
        ));
    }

    #[test]
    fn check_replays_in_order() {
        let obs = parse_observations(
            r#"[
                {"entry": "main", "actual": -1},
                {"input": [1943526997, 0, 0, 0, 0], "actual": 0},
                {"input": [0, 693048727, 0, 0, 0], "actual": 1},
                {"input": [0, 0, 0, 0, 0], "actual": 2}
            ]"#,
        )
        .unwrap();
        let results = check(FixtureKind::IfElseChain, 50, &obs).unwrap();
        let passed: Vec<bool> = results.iter().map(|r| r.passed).collect();
        assert_eq!(passed, vec![true, true, true, false]);
        assert_eq!(results[3].expected, -1);
        assert_eq!(results[3].actual, 2);
    }

    #[test]
    fn check_rejects_main_with_inputs() {
        let obs = vec![Observation {
            entry: Entry::Main,
            input: vec![1],
            actual: 0,
        }];
        assert!(matches!(
            check(FixtureKind::Switch, 50, &obs),
            Err(WitnessError::MainWithInputs { index: 0, got: 1 })
        ));
    }

    #[test]
    fn check_br_table_main_is_an_error() {
        let obs = vec![Observation {
            entry: Entry::Main,
            input: vec![],
            actual: 0,
        }];
        assert!(matches!(
            check(FixtureKind::BrTable, 50, &obs),
            Err(WitnessError::Oracle(OracleError::NoMainEntry("br_table")))
        ));
    }

    #[test]
    fn io_error_names_path() {
        let err = read_observations(Path::new("/nonexistent/obs.json")).unwrap_err();
        assert!(err.to_string().starts_with("cannot access '/nonexistent/obs.json'"));
    }
}
