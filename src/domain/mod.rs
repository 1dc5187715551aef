//! Core domain models for libver
//!
//! This module contains the fundamental types used throughout the application:
//! - The library's own version (`VersionSpec`)
//! - Dependency constraints found in podspec `dependency` declarations
//! - Command reports

mod constraint;
mod report;
mod version_spec;

pub use constraint::{DependencyConstraint, Operator};
pub use report::{FileChange, Report};
pub use version_spec::{Prerelease, PrereleaseTag, VersionSpec};
