//! Application error types using thiserror
//!
//! Error hierarchy:
//! - ParseError: Version or constraint text that does not match the grammar
//! - ConfigError: Unknown library, bad CLI combinations, bad config file
//! - FileError: Reading/writing target files and locating patterns in them
//! - ValidationError: Files that disagree after an update

use std::path::PathBuf;
use thiserror::Error;

/// Application-level error type
#[derive(Error, Debug)]
pub enum AppError {
    /// Version pattern related errors
    #[error(transparent)]
    Parse(#[from] ParseError),

    /// Configuration related errors
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Target file related errors
    #[error(transparent)]
    File(#[from] FileError),

    /// Cross-file validation errors
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

/// Errors produced by the version pattern parser
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// Text is not `major.minor[.revision][-prerelease]`
    #[error("version '{input}' does not appear to be in the form of x.y.z[-(alpha|beta|rc).n]")]
    InvalidVersion { input: String },

    /// Text is not a dependency constraint
    #[error("constraint '{input}' does not appear to be in the form of [>=|<|<=|~>] x[.y[.z]]")]
    InvalidConstraint { input: String },
}

/// Errors related to configuration and command-line arguments
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Library name not present in the configuration
    #[error("unknown library '{value}': expected one of {expected}")]
    UnknownLibrary { value: String, expected: String },

    /// Options that cannot be combined
    #[error("conflicting options: {message}")]
    ConflictingOptions { message: String },

    /// Required argument absent
    #[error("missing argument: {message}")]
    MissingArgument { message: String },

    /// Operation needs a version-source file the library does not have
    #[error("library '{library}' does not have a version source file")]
    MissingSourceFile { library: String },

    /// Config file could not be read
    #[error("failed to read config file {path}: {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Config file is not valid TOML or has the wrong shape
    #[error("failed to parse config file {path}: {message}")]
    ParseError { path: PathBuf, message: String },
}

/// Errors related to the manifest and version-source files
#[derive(Error, Debug)]
pub enum FileError {
    /// Failed to read a target file
    #[error("failed to read {path}: {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to write a target file
    #[error("failed to write {path}: {source}")]
    WriteError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Expected declaration is missing (the file drifted from the expected format)
    #[error("failed to extract {field} from {path}")]
    PatternNotFound { path: PathBuf, field: String },

    /// Declaration found but its value is unusable
    #[error("invalid {field} value '{value}' in {path}")]
    InvalidValue {
        path: PathBuf,
        field: String,
        value: String,
    },

    /// Dependency not declared in the manifest
    #[error("dependency '{dependency}' is not declared in {path}")]
    DependencyNotFound { path: PathBuf, dependency: String },

    /// Search pattern could not be built
    #[error("invalid search pattern for {field}: {source}")]
    InvalidPattern {
        field: String,
        #[source]
        source: regex::Error,
    },
}

/// Errors raised when files disagree
#[derive(Error, Debug)]
pub enum ValidationError {
    /// Manifest and version-source versions differ
    #[error(
        "version in {manifest_path} ({manifest_version}) did not match {source_path} ({source_version})"
    )]
    VersionMismatch {
        manifest_path: PathBuf,
        manifest_version: String,
        source_path: PathBuf,
        source_version: String,
    },

    /// Stored dependency constraint differs from the requested one
    #[error("stored constraint for '{dependency}' was '{stored}', expected '{expected}'")]
    DependencyMismatch {
        dependency: String,
        expected: String,
        stored: String,
    },
}

impl ParseError {
    /// Creates a new InvalidVersion error
    pub fn invalid_version(input: impl Into<String>) -> Self {
        ParseError::InvalidVersion {
            input: input.into(),
        }
    }

    /// Creates a new InvalidConstraint error
    pub fn invalid_constraint(input: impl Into<String>) -> Self {
        ParseError::InvalidConstraint {
            input: input.into(),
        }
    }
}

impl ConfigError {
    /// Creates a new ConflictingOptions error
    pub fn conflicting(message: impl Into<String>) -> Self {
        ConfigError::ConflictingOptions {
            message: message.into(),
        }
    }

    /// Creates a new MissingArgument error
    pub fn missing_argument(message: impl Into<String>) -> Self {
        ConfigError::MissingArgument {
            message: message.into(),
        }
    }
}

impl FileError {
    /// Creates a new ReadError
    pub fn read_error(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        FileError::ReadError {
            path: path.into(),
            source,
        }
    }

    /// Creates a new WriteError
    pub fn write_error(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        FileError::WriteError {
            path: path.into(),
            source,
        }
    }

    /// Creates a new PatternNotFound error
    pub fn pattern_not_found(path: impl Into<PathBuf>, field: impl Into<String>) -> Self {
        FileError::PatternNotFound {
            path: path.into(),
            field: field.into(),
        }
    }

    /// Creates a new InvalidValue error
    pub fn invalid_value(
        path: impl Into<PathBuf>,
        field: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        FileError::InvalidValue {
            path: path.into(),
            field: field.into(),
            value: value.into(),
        }
    }

    /// Creates a new DependencyNotFound error
    pub fn dependency_not_found(path: impl Into<PathBuf>, dependency: impl Into<String>) -> Self {
        FileError::DependencyNotFound {
            path: path.into(),
            dependency: dependency.into(),
        }
    }
}
