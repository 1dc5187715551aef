//! Library version synchronization
//!
//! Keeps the podspec version literal and the Version.swift constants in
//! agreement. Each operation reads the files fresh; nothing is cached
//! between calls.

use std::path::Path;

use tracing::{debug, info};

use crate::config::TargetFileSet;
use crate::domain::{FileChange, Report, VersionSpec};
use crate::error::{AppError, ConfigError, ValidationError};
use crate::manifest::{podspec, read_target, version_source, StagedFile};

/// Reads, writes and cross-checks one library's version declarations
pub struct VersionSynchronizer {
    files: TargetFileSet,
}

impl VersionSynchronizer {
    pub fn new(files: TargetFileSet) -> Self {
        Self { files }
    }

    pub fn files(&self) -> &TargetFileSet {
        &self.files
    }

    fn source_path(&self) -> Result<&Path, ConfigError> {
        self.files
            .version_source
            .as_deref()
            .ok_or_else(|| ConfigError::MissingSourceFile {
                library: self.files.library.clone(),
            })
    }

    /// Version literal declared in the podspec
    pub fn read_manifest_version(&self) -> Result<VersionSpec, AppError> {
        let path = &self.files.manifest;
        let content = read_target(path)?;
        Ok(podspec::read_version(path, &content)?)
    }

    /// Version assembled from the four Version.swift constants
    pub fn read_source_version(&self) -> Result<VersionSpec, AppError> {
        let path = self.source_path()?;
        let content = read_target(path)?;
        Ok(version_source::read_version(path, &content)?)
    }

    /// Stage the podspec with its version literal replaced
    fn stage_manifest(&self, spec: &VersionSpec) -> Result<StagedFile, AppError> {
        let mut staged = StagedFile::read(&self.files.manifest)?;
        staged.updated = podspec::set_version(&staged.path, &staged.original, spec)?;
        Ok(staged)
    }

    /// Stage Version.swift with its constants replaced
    fn stage_source(&self, spec: &VersionSpec) -> Result<Option<StagedFile>, AppError> {
        let Some(path) = self.files.version_source.as_deref() else {
            return Ok(None);
        };
        let mut staged = StagedFile::read(path)?;
        staged.updated = version_source::set_version(&staged.path, &staged.original, spec)?;
        Ok(Some(staged))
    }

    /// Replace the podspec version literal. Returns whether the file was rewritten.
    pub fn write_manifest_version(&self, spec: &VersionSpec) -> Result<bool, AppError> {
        Ok(self.stage_manifest(spec)?.commit(false)?)
    }

    /// Replace the Version.swift constants. Returns whether the file was rewritten.
    pub fn write_source_version(&self, spec: &VersionSpec) -> Result<bool, AppError> {
        self.source_path()?;
        match self.stage_source(spec)? {
            Some(staged) => Ok(staged.commit(false)?),
            None => Ok(false),
        }
    }

    /// Check that the podspec and Version.swift declare the same version.
    ///
    /// A library without a version source only needs a readable podspec
    /// version.
    pub fn validate(&self) -> Result<VersionSpec, AppError> {
        let manifest_version = self.read_manifest_version()?;
        if let Some(source_path) = &self.files.version_source {
            let source_version = self.read_source_version()?;
            compare(&self.files.manifest, manifest_version, source_path, source_version)?;
        }
        debug!(
            "{} version {} validated",
            self.files.library, manifest_version
        );
        Ok(manifest_version)
    }

    /// `--validate`
    pub fn validate_report(&self) -> Result<Report, AppError> {
        let version = self.validate()?;
        Ok(Report::Validated {
            library: self.files.library.clone(),
            version,
            files: self.files.paths(),
        })
    }

    /// `--print`
    pub fn print_version(&self) -> Result<Report, AppError> {
        Ok(Report::Version {
            library: self.files.library.clone(),
            version: self.read_manifest_version()?,
        })
    }

    /// Write `spec` into every version declaration, then validate.
    ///
    /// In dry-run mode nothing is written and validation runs against the
    /// staged content instead of the files on disk.
    pub fn update(&self, spec: &VersionSpec, dry_run: bool) -> Result<Report, AppError> {
        let previous = self.read_manifest_version()?;

        // Stage everything first so a missing declaration in either file
        // aborts before anything is written.
        let manifest = self.stage_manifest(spec)?;
        let source = self.stage_source(spec)?;

        let mut changes = Vec::new();
        for staged in std::iter::once(&manifest).chain(source.as_ref()) {
            let written = staged.commit(dry_run)?;
            changes.push(FileChange {
                path: staged.path.clone(),
                changed: staged.is_modified(),
                written,
            });
        }

        let version = if dry_run {
            let manifest_version = podspec::read_version(&manifest.path, &manifest.updated)?;
            if let Some(source) = &source {
                let source_version = version_source::read_version(&source.path, &source.updated)?;
                compare(&manifest.path, manifest_version, &source.path, source_version)?;
            }
            manifest_version
        } else {
            self.validate()?
        };

        info!(
            "{} version {} -> {}{}",
            self.files.library,
            previous,
            version,
            if dry_run { " (dry-run)" } else { "" }
        );

        Ok(Report::VersionUpdated {
            library: self.files.library.clone(),
            previous,
            version,
            files: changes,
            dry_run,
        })
    }
}

fn compare(
    manifest_path: &Path,
    manifest_version: VersionSpec,
    source_path: &Path,
    source_version: VersionSpec,
) -> Result<(), ValidationError> {
    if manifest_version != source_version {
        return Err(ValidationError::VersionMismatch {
            manifest_path: manifest_path.to_path_buf(),
            manifest_version: manifest_version.to_string(),
            source_path: source_path.to_path_buf(),
            source_version: source_version.to_string(),
        });
    }
    Ok(())
}
