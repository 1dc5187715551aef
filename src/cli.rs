//! CLI argument parsing for the libver tools

use clap::{Args, Parser};
use std::path::PathBuf;

use crate::config::DEFAULT_LIBRARY;
use crate::error::ConfigError;

/// Options shared by both tools
#[derive(Args, Debug, Clone)]
pub struct CommonArgs {
    /// The library to use ("core" or "interfaces", or a name from libver.toml)
    #[arg(long, default_value = DEFAULT_LIBRARY)]
    pub library: String,

    /// Project root the library files are relative to
    #[arg(long, default_value = ".")]
    pub root: PathBuf,

    /// Config file (default: <root>/libver.toml if present)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Dry run mode - show what would be updated without making changes
    #[arg(short = 'n', long)]
    pub dry_run: bool,

    /// Output results in JSON format
    #[arg(long)]
    pub json: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Enable verbose output
    #[arg(long)]
    pub verbose: bool,
}

/// Helper for the version numbers in the project sources
#[derive(Parser, Debug, Clone)]
#[command(
    name = "library-versions",
    version,
    about = "Helper for the version numbers in the project sources"
)]
pub struct VersionArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Check if the versions in all the files match
    #[arg(long)]
    pub validate: bool,

    /// Print the version string
    #[arg(long)]
    pub print: bool,

    /// The version number to ensure is in the sources
    #[arg(id = "VERSION", value_name = "VERSION")]
    pub new_version: Option<String>,
}

/// What `library-versions` was asked to do
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VersionAction {
    Validate,
    Print,
    Update(String),
}

impl VersionArgs {
    /// Exactly one of `--validate`, `--print` or a version argument
    pub fn action(&self) -> Result<VersionAction, ConfigError> {
        match (self.validate, self.print, &self.new_version) {
            (true, true, _) => Err(ConfigError::conflicting(
                "--print and --validate are mutually exclusive",
            )),
            (false, true, Some(_)) => Err(ConfigError::conflicting(
                "no version can be given when using --print",
            )),
            (true, false, Some(_)) => Err(ConfigError::conflicting(
                "no version can be given when using --validate",
            )),
            (false, true, None) => Ok(VersionAction::Print),
            (true, false, None) => Ok(VersionAction::Validate),
            (false, false, Some(version)) => Ok(VersionAction::Update(version.clone())),
            (false, false, None) => Err(ConfigError::missing_argument(
                "expected one argument, the version number to ensure is in the sources",
            )),
        }
    }
}

/// Helper for setting podspec dependencies
#[derive(Parser, Debug, Clone)]
#[command(
    name = "podspec-dependency",
    version,
    about = "Helper for setting podspec dependencies"
)]
pub struct DependencyArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Name of the dependency as declared in the podspec
    pub dependency: String,

    /// New constraint, e.g. "0.3.0", "~> 0.3", ">= 1.0"
    pub constraint: String,
}
