//! The fixed deletion list
//!
//! Candidate paths live in `candidates.toml`, embedded into the binary at
//! compile time. The file is pure data: entries can be reordered or extended
//! without touching the removal logic, and the order in the file is the
//! order candidates are shown and removed.

use std::fmt;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

// Embed the TOML file directly in the binary at compile time
const CANDIDATES_TOML: &str = include_str!("../candidates.toml");

/// Coarse category of a candidate, shown next to the path in the listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CandidateKind {
    Build,
    Dependency,
    Cache,
    Logs,
    Ide,
    Temp,
}

impl fmt::Display for CandidateKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Build => write!(f, "build output"),
            Self::Dependency => write!(f, "dependencies"),
            Self::Cache => write!(f, "cache"),
            Self::Logs => write!(f, "logs"),
            Self::Ide => write!(f, "editor settings"),
            Self::Temp => write!(f, "system files"),
        }
    }
}

/// One entry of the deletion list: a path relative to the working directory.
#[derive(Debug, Clone, Deserialize)]
pub struct Candidate {
    pub path: String,
    pub kind: CandidateKind,
}

#[derive(Debug, Deserialize)]
struct CandidateFile {
    candidates: Vec<Candidate>,
}

/// Parse the embedded candidate list, preserving file order.
pub fn deletion_list() -> Result<Vec<Candidate>> {
    let file: CandidateFile =
        toml::from_str(CANDIDATES_TOML).context("failed to parse embedded candidate list")?;
    Ok(file.candidates)
}

/// The ordered subsequence of `candidates` present under `base_dir`.
///
/// Uses `symlink_metadata` so files, directories, and symbolic entries all
/// count as existing, without following links. Missing paths are the common
/// case and are skipped silently.
pub fn filter_existing<'a>(candidates: &'a [Candidate], base_dir: &Path) -> Vec<&'a Candidate> {
    candidates
        .iter()
        .filter(|c| base_dir.join(&c.path).symlink_metadata().is_ok())
        .collect()
}
