//! Check → confirm → delete sequencing
//!
//! `Cleaner` drives the whole run: list the candidates that exist, show
//! them, ask for confirmation, then remove them one by one. Individual
//! removal failures are reported and never abort the pass.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use anyhow::Result;

use crate::candidates::{self, Candidate};
use crate::confirm::Confirmer;
use crate::error::{RemoveError, Removed};
use crate::report::Reporter;

/// How a run ended. The hosting entry point maps every variant to a
/// successful exit; none of these is an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunStatus {
    /// Every existing candidate was processed
    Completed,
    /// The user declined the confirmation
    Cancelled,
    /// No candidate paths were present
    NothingToClean,
}

pub struct Cleaner<'a> {
    base_dir: PathBuf,
    reporter: &'a dyn Reporter,
    confirmer: &'a dyn Confirmer,
}

impl<'a> Cleaner<'a> {
    pub fn new(
        base_dir: PathBuf,
        reporter: &'a dyn Reporter,
        confirmer: &'a dyn Confirmer,
    ) -> Self {
        Self {
            base_dir,
            reporter,
            confirmer,
        }
    }

    /// Run the full check → confirm → delete sequence.
    ///
    /// Only startup problems (unparseable embedded list) surface as errors;
    /// everything that happens after the confirmation is reported per path.
    pub fn run(&self) -> Result<RunStatus> {
        let list = candidates::deletion_list()?;
        let existing = candidates::filter_existing(&list, &self.base_dir);

        if existing.is_empty() {
            self.reporter
                .info("Nothing to clean: no candidate paths exist in this directory.");
            return Ok(RunStatus::NothingToClean);
        }

        self.reporter
            .warning("This will delete the following files and directories:");
        for candidate in &existing {
            self.reporter
                .plain(&format!("  - {} ({})", candidate.path, candidate.kind));
        }
        self.reporter.plain("");
        self.reporter.info("These can be recreated by running:");
        self.reporter.plain("  npm install");
        self.reporter.plain("  npm run build");
        self.reporter.plain("");

        if !self.confirmer.confirm("Do you want to proceed? (y/n): ") {
            self.reporter.info("Operation cancelled.");
            return Ok(RunStatus::Cancelled);
        }

        self.reporter.plain("");
        self.reporter.info("Deleting files and directories...");
        for candidate in &existing {
            self.remove_one(candidate);
        }

        self.reporter.plain("");
        self.reporter.success("Clean-up complete!");
        self.reporter.info("To rebuild the project, run:");
        self.reporter.plain("  npm install");
        self.reporter.plain("  npm run build");
        Ok(RunStatus::Completed)
    }

    /// Remove a single candidate and report the outcome.
    fn remove_one(&self, candidate: &Candidate) {
        let full_path = self.base_dir.join(&candidate.path);
        match remove_path(&full_path) {
            Ok(Removed::File) => self
                .reporter
                .success(&format!("Removed file: {}", candidate.path)),
            Ok(Removed::Directory) => self
                .reporter
                .success(&format!("Removed directory: {}", candidate.path)),
            Err(RemoveError::Vanished) => self
                .reporter
                .warning(&format!("Path no longer exists: {}", candidate.path)),
            Err(e) => self
                .reporter
                .error(&format!("Error removing {}: {}", candidate.path, e)),
        }
    }
}

/// Delete `path`, choosing single-file or recursive directory removal based
/// on what is on disk.
///
/// The entry is classified with `symlink_metadata`: links are not followed,
/// so a symlink is neither a regular file nor a directory here and is
/// rejected as unsupported. A path that is already gone — or disappears
/// between classification and removal — maps to `RemoveError::Vanished`.
fn remove_path(path: &Path) -> Result<Removed, RemoveError> {
    let metadata = match path.symlink_metadata() {
        Ok(metadata) => metadata,
        Err(err) if err.kind() == io::ErrorKind::NotFound => return Err(RemoveError::Vanished),
        Err(err) => return Err(RemoveError::Io(err)),
    };

    let result = if metadata.is_dir() {
        fs::remove_dir_all(path).map(|()| Removed::Directory)
    } else if metadata.is_file() {
        fs::remove_file(path).map(|()| Removed::File)
    } else {
        return Err(RemoveError::Unsupported);
    };

    result.map_err(|err| match err.kind() {
        io::ErrorKind::NotFound => RemoveError::Vanished,
        _ => RemoveError::Io(err),
    })
}
