//! Library configuration
//!
//! Maps a library name (or alias) to the files that carry its version:
//! - `core` → `HeapSwiftCore.podspec` + `Development/Sources/HeapSwiftCore/Version.swift`
//! - `interfaces` → `HeapSwiftCoreInterfaces.podspec` (no version source)
//!
//! The built-in table can be extended or overridden by a `libver.toml` file:
//!
//! ```toml
//! [libraries.core]
//! aliases = ["HeapSwiftCore"]
//! manifest = "HeapSwiftCore.podspec"
//! version_source = "Development/Sources/HeapSwiftCore/Version.swift"
//! ```

use serde::Deserialize;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::error::ConfigError;

/// Config file looked up in the project root when `--config` is not given
pub const DEFAULT_CONFIG_FILE: &str = "libver.toml";

/// Library selected when `--library` is not given
pub const DEFAULT_LIBRARY: &str = "core";

/// The files holding one library's version, resolved against the project root
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetFileSet {
    /// Canonical library name
    pub library: String,
    /// Podspec path
    pub manifest: PathBuf,
    /// Version.swift path, if the library has one
    pub version_source: Option<PathBuf>,
}

impl TargetFileSet {
    /// All files of the set, manifest first
    pub fn paths(&self) -> Vec<PathBuf> {
        std::iter::once(self.manifest.clone())
            .chain(self.version_source.clone())
            .collect()
    }
}

/// One `[libraries.<name>]` table
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LibraryEntry {
    #[serde(default)]
    pub aliases: Vec<String>,
    pub manifest: PathBuf,
    #[serde(default)]
    pub version_source: Option<PathBuf>,
}

/// Library table
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub libraries: BTreeMap<String, LibraryEntry>,
}

impl Config {
    /// The libraries known without a config file
    pub fn builtin() -> Self {
        let mut libraries = BTreeMap::new();
        libraries.insert(
            "core".to_string(),
            LibraryEntry {
                aliases: vec!["HeapSwiftCore".to_string()],
                manifest: PathBuf::from("HeapSwiftCore.podspec"),
                version_source: Some(PathBuf::from(
                    "Development/Sources/HeapSwiftCore/Version.swift",
                )),
            },
        );
        libraries.insert(
            "interfaces".to_string(),
            LibraryEntry {
                aliases: vec!["HeapSwiftCoreInterfaces".to_string()],
                manifest: PathBuf::from("HeapSwiftCoreInterfaces.podspec"),
                version_source: None,
            },
        );
        Self { libraries }
    }

    /// Parse a config file body
    pub fn from_toml(path: &Path, content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    /// Built-in libraries, overlaid with the config file if there is one.
    ///
    /// An explicit `config` path must exist; the default `libver.toml` in
    /// `root` is optional.
    pub fn load(root: &Path, config: Option<&Path>) -> Result<Self, ConfigError> {
        let mut merged = Self::builtin();

        let path = match config {
            Some(path) => path.to_path_buf(),
            None => {
                let default = root.join(DEFAULT_CONFIG_FILE);
                if !default.is_file() {
                    debug!("No {} in {}", DEFAULT_CONFIG_FILE, root.display());
                    return Ok(merged);
                }
                default
            }
        };

        debug!("Loading config from {}", path.display());
        let content = fs::read_to_string(&path).map_err(|source| ConfigError::ReadError {
            path: path.clone(),
            source,
        })?;
        let file = Self::from_toml(&path, &content)?;
        merged.libraries.extend(file.libraries);
        Ok(merged)
    }

    /// Canonical library names
    pub fn library_names(&self) -> Vec<&str> {
        self.libraries.keys().map(String::as_str).collect()
    }

    /// Resolve a library name or alias into its file set under `root`
    pub fn resolve(&self, name: &str, root: &Path) -> Result<TargetFileSet, ConfigError> {
        let (library, entry) = self
            .libraries
            .iter()
            .find(|(key, entry)| *key == name || entry.aliases.iter().any(|a| a == name))
            .ok_or_else(|| ConfigError::UnknownLibrary {
                value: name.to_string(),
                expected: self
                    .library_names()
                    .iter()
                    .map(|n| format!("\"{}\"", n))
                    .collect::<Vec<_>>()
                    .join(", "),
            })?;

        Ok(TargetFileSet {
            library: library.clone(),
            manifest: root.join(&entry.manifest),
            version_source: entry.version_source.as_ref().map(|p| root.join(p)),
        })
    }
}
