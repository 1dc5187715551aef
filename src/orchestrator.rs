//! Command orchestration
//!
//! Turns parsed CLI arguments into a workflow run:
//! configuration → argument validation → update/validate/print → report.
//! Nothing here exits the process; the binaries decide how to surface errors.

use tracing::debug;

use crate::cli::{CommonArgs, DependencyArgs, VersionAction, VersionArgs};
use crate::config::{Config, TargetFileSet};
use crate::domain::{DependencyConstraint, Report, VersionSpec};
use crate::error::AppError;
use crate::update::{DependencyUpdater, VersionSynchronizer};

/// Resolve the selected library into its target files
pub fn resolve_files(common: &CommonArgs) -> Result<TargetFileSet, AppError> {
    let config = Config::load(&common.root, common.config.as_deref())?;
    let files = config.resolve(&common.library, &common.root)?;
    debug!(
        "Library {} -> manifest {}, version source {}",
        files.library,
        files.manifest.display(),
        files
            .version_source
            .as_ref()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "none".to_string())
    );
    Ok(files)
}

/// Run `library-versions`
pub fn run_version_command(args: &VersionArgs) -> Result<Report, AppError> {
    // Argument shape and version text are checked before any file is touched
    match args.action()? {
        VersionAction::Print => {
            VersionSynchronizer::new(resolve_files(&args.common)?).print_version()
        }
        VersionAction::Validate => {
            VersionSynchronizer::new(resolve_files(&args.common)?).validate_report()
        }
        VersionAction::Update(version) => {
            let spec: VersionSpec = version.parse()?;
            VersionSynchronizer::new(resolve_files(&args.common)?)
                .update(&spec, args.common.dry_run)
        }
    }
}

/// Run `podspec-dependency`
pub fn run_dependency_command(args: &DependencyArgs) -> Result<Report, AppError> {
    let constraint: DependencyConstraint = args.constraint.parse()?;
    let updater = DependencyUpdater::new(resolve_files(&args.common)?);
    updater.update(&args.dependency, &constraint, args.common.dry_run)
}
