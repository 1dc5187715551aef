//! Podspec dependency pin updates

use tracing::info;

use crate::config::TargetFileSet;
use crate::domain::{DependencyConstraint, FileChange, Report};
use crate::error::{AppError, ValidationError};
use crate::manifest::{podspec, read_target, StagedFile};

/// Rewrites `dependency '<name>', '<constraint>'` declarations in a podspec
pub struct DependencyUpdater {
    files: TargetFileSet,
}

impl DependencyUpdater {
    pub fn new(files: TargetFileSet) -> Self {
        Self { files }
    }

    pub fn files(&self) -> &TargetFileSet {
        &self.files
    }

    /// Constraint currently declared for `name`
    pub fn read_dependency(&self, name: &str) -> Result<String, AppError> {
        let path = &self.files.manifest;
        let content = read_target(path)?;
        Ok(podspec::read_dependency(path, &content, name)?)
    }

    /// Replace the constraint declared for `name`, leaving every other
    /// declaration untouched. The report carries the previous value.
    pub fn update_dependency(
        &self,
        name: &str,
        constraint: &DependencyConstraint,
        dry_run: bool,
    ) -> Result<Report, AppError> {
        let mut staged = StagedFile::read(&self.files.manifest)?;
        let previous = podspec::read_dependency(&staged.path, &staged.original, name)?;
        staged.updated =
            podspec::set_dependency(&staged.path, &staged.original, name, &constraint.raw)?;
        let written = staged.commit(dry_run)?;

        info!(
            "Updated podspec dependency {} from {} to {}{}",
            name,
            previous,
            constraint,
            if dry_run { " (dry-run)" } else { "" }
        );

        Ok(Report::DependencyUpdated {
            library: self.files.library.clone(),
            dependency: name.to_string(),
            previous,
            constraint: constraint.raw.clone(),
            file: FileChange {
                changed: staged.is_modified(),
                written,
                path: staged.path,
            },
            dry_run,
        })
    }

    /// Re-read the podspec and confirm `name` is pinned to `constraint`
    pub fn validate_dependency(
        &self,
        name: &str,
        constraint: &DependencyConstraint,
    ) -> Result<(), AppError> {
        let stored = self.read_dependency(name)?;
        if stored != constraint.raw {
            return Err(ValidationError::DependencyMismatch {
                dependency: name.to_string(),
                expected: constraint.raw.clone(),
                stored,
            }
            .into());
        }
        Ok(())
    }

    /// Update then validate. Validation is skipped in dry-run mode since
    /// nothing was written.
    pub fn update(
        &self,
        name: &str,
        constraint: &DependencyConstraint,
        dry_run: bool,
    ) -> Result<Report, AppError> {
        let report = self.update_dependency(name, constraint, dry_run)?;
        if !dry_run {
            self.validate_dependency(name, constraint)?;
        }
        Ok(report)
    }
}
