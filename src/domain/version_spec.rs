//! Library version types
//!
//! A library version is `major.minor.revision` with an optional prerelease
//! of the form `alpha.N`, `beta.N` or `rc.N`:
//! - `1.2.3`
//! - `2.5.0-beta.3`

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ParseError;

/// Prerelease channel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PrereleaseTag {
    Alpha,
    Beta,
    Rc,
}

impl PrereleaseTag {
    /// Returns the tag as it appears in version strings
    pub fn as_str(&self) -> &'static str {
        match self {
            PrereleaseTag::Alpha => "alpha",
            PrereleaseTag::Beta => "beta",
            PrereleaseTag::Rc => "rc",
        }
    }

    /// Parses a literal tag
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "alpha" => Some(PrereleaseTag::Alpha),
            "beta" => Some(PrereleaseTag::Beta),
            "rc" => Some(PrereleaseTag::Rc),
            _ => None,
        }
    }
}

/// Prerelease identifier, e.g. `beta.3`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Prerelease {
    pub tag: PrereleaseTag,
    pub number: u64,
}

impl Prerelease {
    pub fn new(tag: PrereleaseTag, number: u64) -> Self {
        Self { tag, number }
    }
}

impl fmt::Display for Prerelease {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.tag.as_str(), self.number)
    }
}

impl FromStr for Prerelease {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (tag, number) = s
            .split_once('.')
            .ok_or_else(|| ParseError::invalid_version(s))?;
        let tag = PrereleaseTag::from_name(tag).ok_or_else(|| ParseError::invalid_version(s))?;
        if number.is_empty() || !number.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ParseError::invalid_version(s));
        }
        let number = number
            .parse()
            .map_err(|_| ParseError::invalid_version(s))?;
        Ok(Prerelease::new(tag, number))
    }
}

/// The library's own version. Serialized in its canonical string form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct VersionSpec {
    pub major: u64,
    pub minor: u64,
    pub revision: u64,
    pub prerelease: Option<Prerelease>,
}

impl VersionSpec {
    /// Creates a release version
    pub fn new(major: u64, minor: u64, revision: u64) -> Self {
        Self {
            major,
            minor,
            revision,
            prerelease: None,
        }
    }

    /// Adds a prerelease identifier
    pub fn with_prerelease(mut self, prerelease: Prerelease) -> Self {
        self.prerelease = Some(prerelease);
        self
    }
}

impl fmt::Display for VersionSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.revision)?;
        if let Some(prerelease) = &self.prerelease {
            write!(f, "-{}", prerelease)?;
        }
        Ok(())
    }
}

impl FromStr for VersionSpec {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        crate::parser::parse_version(s)
    }
}

impl From<VersionSpec> for String {
    fn from(spec: VersionSpec) -> Self {
        spec.to_string()
    }
}

impl TryFrom<String> for VersionSpec {
    type Error = ParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}
