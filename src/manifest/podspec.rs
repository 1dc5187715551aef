//! Podspec manifest access
//!
//! Handles:
//! - The library version literal: `s.version = '1.2.3'`, `s.version = '1.2.3-rc.1'`
//!   (`version` must start a word, so `s.swift_version` is never touched)
//! - Dependency declarations: `s.dependency 'Name', '~> 1.0'`

use std::path::Path;
use std::sync::LazyLock;

use tracing::debug;

use crate::domain::VersionSpec;
use crate::error::FileError;
use crate::parser::parse_version;
use crate::patch::TextPatch;

static VERSION_PATCH: LazyLock<TextPatch> = LazyLock::new(|| {
    TextPatch::new(
        "version",
        r"\bversion = '(\d+\.\d+\.\d+(?:-(?:alpha|beta|rc)\.\d+)?)'",
    )
    .unwrap()
});

/// Builds the patch for one named dependency. The name is matched literally
/// and must be followed by its closing quote.
fn dependency_patch(name: &str) -> Result<TextPatch, FileError> {
    let pattern = format!(r"dependency '{}', *'([^']+)'", regex::escape(name));
    TextPatch::new(format!("dependency '{}'", name), &pattern).map_err(|source| {
        FileError::InvalidPattern {
            field: format!("dependency '{}'", name),
            source,
        }
    })
}

/// Read the library version declared in the podspec
pub fn read_version(path: &Path, content: &str) -> Result<VersionSpec, FileError> {
    let raw = VERSION_PATCH
        .extract(content)
        .ok_or_else(|| FileError::pattern_not_found(path, VERSION_PATCH.field()))?;
    parse_version(raw).map_err(|_| FileError::invalid_value(path, VERSION_PATCH.field(), raw))
}

/// Replace the library version literal, leaving the rest of the file untouched
pub fn set_version(path: &Path, content: &str, spec: &VersionSpec) -> Result<String, FileError> {
    debug!("Setting podspec version in {} to {}", path.display(), spec);
    VERSION_PATCH
        .replace(content, &format!("version = '{}'", spec))
        .ok_or_else(|| FileError::pattern_not_found(path, VERSION_PATCH.field()))
}

/// Read the constraint string of a declared dependency
pub fn read_dependency(path: &Path, content: &str, name: &str) -> Result<String, FileError> {
    let patch = dependency_patch(name)?;
    patch
        .extract(content)
        .map(str::to_string)
        .ok_or_else(|| FileError::dependency_not_found(path, name))
}

/// Replace the constraint string of a declared dependency
pub fn set_dependency(
    path: &Path,
    content: &str,
    name: &str,
    constraint: &str,
) -> Result<String, FileError> {
    debug!(
        "Setting podspec dependency {} in {} to {}",
        name,
        path.display(),
        constraint
    );
    let patch = dependency_patch(name)?;
    patch
        .replace(content, &format!("dependency '{}', '{}'", name, constraint))
        .ok_or_else(|| FileError::dependency_not_found(path, name))
}
