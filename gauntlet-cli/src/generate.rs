//! Witness generator pipeline.
//!
//! This module takes fixture specifications from the catalog and:
//! 1. Replays every recorded call through the oracle
//! 2. Rejects any entry whose golden literals disagree with the oracle
//! 3. Writes one `<id>.json` witness file per entry
//! 4. Writes `manifest.json` with the blake3 digest of every witness file

use std::fs;
use std::path::{Path, PathBuf};

use gauntlet_common::FixtureKind;
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};

use crate::catalog::{self, FixtureSpec};
use crate::witness::{self, WitnessError};

/// Name of the manifest written next to the witness files.
pub const MANIFEST_NAME: &str = "manifest.json";

/// Configuration for the generator.
#[derive(Debug, Clone)]
pub struct GenerateConfig {
    /// Where to write witness files and the manifest.
    pub output_dir: PathBuf,
    /// Optional pattern to filter specification ids (substring match).
    pub filter: Option<String>,
}

/// Result of generating one witness file.
#[derive(Debug, Clone)]
pub struct GenerateResult {
    pub id: String,
    pub success: bool,
    pub error: Option<String>,
}

/// One line of the manifest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManifestEntry {
    pub id: String,
    pub fixture: FixtureKind,
    pub file: String,
    pub blake3: String,
}

/// Digest listing of every generated witness file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Manifest {
    pub entries: Vec<ManifestEntry>,
}

/// Generate witness files for every (filtered) catalog entry.
///
/// Per-entry failures are reported in the results; only failures to
/// create the output directory or write the manifest are errors.
pub fn generate(config: &GenerateConfig) -> Result<Vec<GenerateResult>, WitnessError> {
    fs::create_dir_all(&config.output_dir)
        .map_err(|e| WitnessError::io(&config.output_dir, e))?;

    let all_specs = catalog::all_fixtures();
    let specs: Vec<&FixtureSpec> = all_specs
        .iter()
        .filter(|spec| match config.filter {
            Some(ref filter) => spec.id.contains(filter.as_str()),
            None => true,
        })
        .collect();

    info!("generating {} witness files", specs.len());

    let mut manifest = Manifest::default();
    let mut results = Vec::with_capacity(specs.len());

    for spec in specs {
        match generate_one(spec, &config.output_dir) {
            Ok(entry) => {
                debug!("  [OK] {} ({})", spec.id, entry.blake3);
                manifest.entries.push(entry);
                results.push(GenerateResult {
                    id: spec.id.to_string(),
                    success: true,
                    error: None,
                });
            }
            Err(e) => {
                warn!("  [FAIL] {}: {e}", spec.id);
                results.push(GenerateResult {
                    id: spec.id.to_string(),
                    success: false,
                    error: Some(e.to_string()),
                });
            }
        }
    }

    let manifest_path = config.output_dir.join(MANIFEST_NAME);
    let mut json = serde_json::to_string_pretty(&manifest)?;
    json.push('\n');
    fs::write(&manifest_path, json).map_err(|e| WitnessError::io(&manifest_path, e))?;

    let success_count = results.iter().filter(|r| r.success).count();
    info!(
        "generated {}/{} witness files successfully",
        success_count,
        results.len()
    );

    Ok(results)
}

/// Generate a single witness file and return its manifest entry.
fn generate_one(spec: &FixtureSpec, dir: &Path) -> Result<ManifestEntry, WitnessError> {
    let file = witness::build(spec)?;
    let json = witness::to_json(&file)?;

    let name = format!("{}.json", spec.id);
    let path = dir.join(&name);
    fs::write(&path, &json).map_err(|e| WitnessError::io(&path, e))?;

    Ok(ManifestEntry {
        id: spec.id.to_string(),
        fixture: spec.kind,
        file: name,
        blake3: digest(json.as_bytes()),
    })
}

/// Hex-encoded blake3 digest of `bytes`.
pub fn digest(bytes: &[u8]) -> String {
    blake3::hash(bytes).to_hex().to_string()
}

/// Hex-encoded blake3 digest of a file's contents.
pub fn hash_file(path: &Path) -> Result<String, WitnessError> {
    let bytes = fs::read(path).map_err(|e| WitnessError::io(path, e))?;
    Ok(digest(&bytes))
}

/// Read a manifest back from disk.
pub fn read_manifest(dir: &Path) -> Result<Manifest, WitnessError> {
    let path = dir.join(MANIFEST_NAME);
    let text = fs::read_to_string(&path).map_err(|e| WitnessError::io(&path, e))?;
    Ok(serde_json::from_str(&text)?)
}
