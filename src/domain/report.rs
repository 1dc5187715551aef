//! Command outcomes
//!
//! Every successful command produces one `Report`, which the output
//! formatters render as text or JSON.

use serde::Serialize;
use std::path::PathBuf;

use crate::domain::VersionSpec;

/// A target file touched (or inspected) by a command
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileChange {
    /// Path to the file
    pub path: PathBuf,
    /// Whether the content changed (or would change, in dry-run mode)
    pub changed: bool,
    /// Whether the file on disk was rewritten
    pub written: bool,
}

/// Outcome of a successful command
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum Report {
    /// `--print`: the current library version
    Version {
        library: String,
        version: VersionSpec,
    },
    /// `--validate`: all version declarations agree
    Validated {
        library: String,
        version: VersionSpec,
        files: Vec<PathBuf>,
    },
    /// The library version was updated
    VersionUpdated {
        library: String,
        previous: VersionSpec,
        version: VersionSpec,
        files: Vec<FileChange>,
        dry_run: bool,
    },
    /// A dependency constraint was updated
    DependencyUpdated {
        library: String,
        dependency: String,
        previous: String,
        constraint: String,
        file: FileChange,
        dry_run: bool,
    },
}

impl Report {
    /// Returns true if any file content changed
    pub fn has_changes(&self) -> bool {
        match self {
            Report::Version { .. } | Report::Validated { .. } => false,
            Report::VersionUpdated { files, .. } => files.iter().any(|f| f.changed),
            Report::DependencyUpdated { file, .. } => file.changed,
        }
    }
}
