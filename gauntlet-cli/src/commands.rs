//! CLI command implementations.

use std::path::{Path, PathBuf};

use gauntlet_cli::generate::{self, GenerateConfig};
use gauntlet_cli::witness::{self, Entry};
use gauntlet_common::{parse_args, FixtureKind, ALL_FIXTURES};
use gauntlet_oracle::Session;

/// List every fixture.
pub fn list() -> Result<(), i32> {
    let session = Session::default();
    for kind in ALL_FIXTURES {
        let main = match session.main(kind) {
            Ok(value) => value.to_string(),
            Err(_) => "-".to_string(),
        };
        let source = if kind.uses_generator() { "rand" } else { "pure" };
        println!(
            "{:<12} arity {}  {source}  main {main}",
            kind.name(),
            kind.arity()
        );
    }
    Ok(())
}

/// Invoke a fixture's `Test` entry and print the result.
pub fn run(fixture: &str, args: &[String], seed: u32) -> Result<(), i32> {
    let kind = parse_fixture(fixture)?;
    let args = parse_args(args).map_err(|e| {
        eprintln!("error: {e}");
        1
    })?;

    let mut session = Session::new(seed);
    match session.invoke(kind, &args) {
        Ok(value) => {
            println!("{value}");
            Ok(())
        }
        Err(e) => {
            eprintln!("error: {e}");
            Err(1)
        }
    }
}

/// Invoke a fixture's `main` entry and print the result.
pub fn main_entry(fixture: &str, seed: u32) -> Result<(), i32> {
    let kind = parse_fixture(fixture)?;
    match Session::new(seed).main(kind) {
        Ok(value) => {
            println!("{value}");
            Ok(())
        }
        Err(e) => {
            eprintln!("error: {e}");
            Err(1)
        }
    }
}

/// Print `count` draws after `srand(seed)`.
pub fn rand(seed: u32, count: usize) -> Result<(), i32> {
    for value in gauntlet_oracle::rand::draws(seed, count) {
        println!("{value}");
    }
    Ok(())
}

/// Write witness files and the manifest.
pub fn generate(output_dir: PathBuf, filter: Option<String>) -> Result<(), i32> {
    let config = GenerateConfig { output_dir, filter };
    let results = generate::generate(&config).map_err(|e| {
        eprintln!("error: {e}");
        1
    })?;

    let failed: Vec<_> = results.iter().filter(|r| !r.success).collect();
    for r in &failed {
        if let Some(ref err) = r.error {
            eprintln!("error: {}: {err}", r.id);
        }
    }

    eprintln!(
        "generated {}/{} witness files -> {}",
        results.len() - failed.len(),
        results.len(),
        config.output_dir.display()
    );

    if failed.is_empty() {
        Ok(())
    } else {
        Err(2)
    }
}

/// Check recorded runtime results against the oracle.
pub fn check(fixture: &str, observations: &Path, seed: u32) -> Result<(), i32> {
    let kind = parse_fixture(fixture)?;

    let observations = witness::read_observations(observations).map_err(|e| {
        eprintln!("error: {e}");
        1
    })?;

    let results = witness::check(kind, seed, &observations).map_err(|e| {
        eprintln!("error: {e}");
        1
    })?;

    let mut passed = 0;
    for r in &results {
        let entry = match r.entry {
            Entry::Test => "Test",
            Entry::Main => "main",
        };
        if r.passed {
            passed += 1;
            println!("PASS {} {entry}: {}", r.index, r.actual);
        } else {
            println!(
                "FAIL {} {entry}: expected {}, got {}",
                r.index, r.expected, r.actual
            );
        }
    }

    println!("{kind}: {passed}/{} passed", results.len());

    if passed == results.len() {
        Ok(())
    } else {
        Err(2)
    }
}

/// Print the blake3 digest of a file.
pub fn hash(file: &Path) -> Result<(), i32> {
    let digest = generate::hash_file(file).map_err(|e| {
        eprintln!("error: {e}");
        1
    })?;
    println!("{digest}  {}", file.display());
    Ok(())
}

// --- Helpers ---

/// Parse a fixture name, reporting failure with exit code 1.
fn parse_fixture(name: &str) -> Result<FixtureKind, i32> {
    name.parse().map_err(|e| {
        eprintln!("error: {e}");
        1
    })
}
