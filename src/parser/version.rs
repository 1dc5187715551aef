//! Library version parser
//!
//! Handles:
//! - Full versions: `1.2.3`
//! - Revision omitted: `1.2` (revision defaults to 0)
//! - Prereleases: `1.2.3-beta.4`, `1.2-rc.1`

use crate::domain::{Prerelease, VersionSpec};
use crate::error::ParseError;
use regex::Regex;
use std::sync::LazyLock;

static VERSION_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^(?P<major>\d+)\.(?P<minor>\d+)(?:\.(?P<revision>\d+))?(?:-(?P<prerelease>(?:alpha|beta|rc)\.\d+))?$",
    )
    .unwrap()
});

/// Parse `major.minor[.revision][-prerelease]`
pub fn parse_version(input: &str) -> Result<VersionSpec, ParseError> {
    let invalid = || ParseError::invalid_version(input);
    let caps = VERSION_RE.captures(input).ok_or_else(invalid)?;

    let number = |name: &str| -> Result<Option<u64>, ParseError> {
        caps.name(name)
            .map(|m| m.as_str().parse::<u64>().map_err(|_| invalid()))
            .transpose()
    };

    let major = number("major")?.ok_or_else(invalid)?;
    let minor = number("minor")?.ok_or_else(invalid)?;
    let revision = number("revision")?.unwrap_or(0);
    let prerelease = caps
        .name("prerelease")
        .map(|m| m.as_str().parse::<Prerelease>().map_err(|_| invalid()))
        .transpose()?;

    Ok(VersionSpec {
        major,
        minor,
        revision,
        prerelease,
    })
}
