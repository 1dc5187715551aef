//! Version.swift access
//!
//! The version-source file declares the version as four constants:
//!
//! ```swift
//! static let major = 0
//! static let minor = 2
//! static let revision = 1
//! static let prerelease: String? = nil
//! ```
//!
//! Each declaration is located and replaced on its own.

use std::path::Path;
use std::sync::LazyLock;

use tracing::debug;

use crate::domain::{Prerelease, VersionSpec};
use crate::error::FileError;
use crate::patch::TextPatch;

static MAJOR_PATCH: LazyLock<TextPatch> =
    LazyLock::new(|| TextPatch::new("major", r"(?m)static let major = (\d+)$").unwrap());

static MINOR_PATCH: LazyLock<TextPatch> =
    LazyLock::new(|| TextPatch::new("minor", r"(?m)static let minor = (\d+)$").unwrap());

static REVISION_PATCH: LazyLock<TextPatch> =
    LazyLock::new(|| TextPatch::new("revision", r"(?m)static let revision = (\d+)$").unwrap());

static PRERELEASE_PATCH: LazyLock<TextPatch> = LazyLock::new(|| {
    TextPatch::new(
        "prerelease",
        r#"(?m)static let prerelease: String\? = (nil|"[^"\n]*")$"#,
    )
    .unwrap()
});

fn read_number(path: &Path, content: &str, patch: &TextPatch) -> Result<u64, FileError> {
    let raw = patch
        .extract(content)
        .ok_or_else(|| FileError::pattern_not_found(path, patch.field()))?;
    raw.parse()
        .map_err(|_| FileError::invalid_value(path, patch.field(), raw))
}

fn read_prerelease(path: &Path, content: &str) -> Result<Option<Prerelease>, FileError> {
    let field = PRERELEASE_PATCH.field();
    let raw = PRERELEASE_PATCH
        .extract(content)
        .ok_or_else(|| FileError::pattern_not_found(path, field))?;
    if raw == "nil" {
        return Ok(None);
    }
    let unquoted = raw.trim_matches('"');
    unquoted
        .parse::<Prerelease>()
        .map(Some)
        .map_err(|_| FileError::invalid_value(path, field, raw))
}

/// Read the four version constants and combine them
pub fn read_version(path: &Path, content: &str) -> Result<VersionSpec, FileError> {
    Ok(VersionSpec {
        major: read_number(path, content, &MAJOR_PATCH)?,
        minor: read_number(path, content, &MINOR_PATCH)?,
        revision: read_number(path, content, &REVISION_PATCH)?,
        prerelease: read_prerelease(path, content)?,
    })
}

/// Replace the four version constants.
///
/// Every declaration is attempted; if any is missing the error names all
/// missing fields.
pub fn set_version(path: &Path, content: &str, spec: &VersionSpec) -> Result<String, FileError> {
    debug!("Setting version constants in {} to {}", path.display(), spec);

    let prerelease = match &spec.prerelease {
        Some(prerelease) => format!("\"{}\"", prerelease),
        None => "nil".to_string(),
    };
    let replacements = [
        (&*MAJOR_PATCH, format!("static let major = {}", spec.major)),
        (&*MINOR_PATCH, format!("static let minor = {}", spec.minor)),
        (
            &*REVISION_PATCH,
            format!("static let revision = {}", spec.revision),
        ),
        (
            &*PRERELEASE_PATCH,
            format!("static let prerelease: String? = {}", prerelease),
        ),
    ];

    let mut current = content.to_string();
    let mut missing = Vec::new();
    for (patch, replacement) in &replacements {
        match patch.replace(&current, replacement) {
            Some(updated) => current = updated,
            None => missing.push(patch.field()),
        }
    }

    if !missing.is_empty() {
        return Err(FileError::pattern_not_found(path, missing.join(", ")));
    }
    Ok(current)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::PrereleaseTag;

    const VERSION_SWIFT: &str = r#"import Foundation

struct Version {
    /// Major version.
    static let major = 0

    /// Minor version.
    static let minor = 2

    /// Revision number.
    static let revision = 1

    /// Optional pre-release version
    static let prerelease: String? = nil

    /// String form of the version number.
    public static var versionString: String {
        if let prerelease = prerelease {
            return "\(major).\(minor).\(revision)-\(prerelease)"
        } else {
            return "\(major).\(minor).\(revision)"
        }
    }
}
"#;

    fn path() -> &'static Path {
        Path::new("Version.swift")
    }

    #[test]
    fn test_read_version() {
        assert_eq!(
            read_version(path(), VERSION_SWIFT).unwrap(),
            VersionSpec::new(0, 2, 1)
        );
    }

    #[test]
    fn test_set_version_prerelease() {
        let spec = VersionSpec::new(2, 5, 0).with_prerelease(Prerelease::new(PrereleaseTag::Beta, 3));
        let updated = set_version(path(), VERSION_SWIFT, &spec).unwrap();
        assert!(updated.contains("    static let major = 2\n"));
        assert!(updated.contains("    static let minor = 5\n"));
        assert!(updated.contains("    static let revision = 0\n"));
        assert!(updated.contains("    static let prerelease: String? = \"beta.3\"\n"));
        assert_eq!(read_version(path(), &updated).unwrap(), spec);
    }

    #[test]
    fn test_set_version_preserves_other_lines() {
        let spec = VersionSpec::new(0, 2, 2);
        let updated = set_version(path(), VERSION_SWIFT, &spec).unwrap();
        assert_eq!(
            updated,
            VERSION_SWIFT.replace("static let revision = 1", "static let revision = 2")
        );
    }

    #[test]
    fn test_set_version_back_to_nil() {
        let spec = VersionSpec::new(1, 0, 0).with_prerelease(Prerelease::new(PrereleaseTag::Rc, 1));
        let pre = set_version(path(), VERSION_SWIFT, &spec).unwrap();
        let release = set_version(path(), &pre, &VersionSpec::new(1, 0, 0)).unwrap();
        assert!(release.contains("static let prerelease: String? = nil\n"));
    }

    #[test]
    fn test_set_version_is_idempotent() {
        let spec = VersionSpec::new(3, 1, 0);
        let once = set_version(path(), VERSION_SWIFT, &spec).unwrap();
        let twice = set_version(path(), &once, &spec).unwrap();
        assert_eq!(once, twice);
    }

    #[test]
    fn test_set_version_reports_all_missing_fields() {
        let content = "static let major = 1\nstatic let minor = 2\n";
        let err = set_version(path(), content, &VersionSpec::new(1, 2, 3)).unwrap_err();
        match err {
            FileError::PatternNotFound { field, .. } => assert_eq!(field, "revision, prerelease"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_read_version_missing_field() {
        let content = VERSION_SWIFT.replace("static let minor = 2\n", "");
        assert!(matches!(
            read_version(path(), &content),
            Err(FileError::PatternNotFound { .. })
        ));
    }

    #[test]
    fn test_read_version_invalid_prerelease() {
        let content = VERSION_SWIFT.replace(
            "static let prerelease: String? = nil",
            "static let prerelease: String? = \"dev.1\"",
        );
        assert!(matches!(
            read_version(path(), &content),
            Err(FileError::InvalidValue { .. })
        ));
    }
}
