//! Version pattern parsers
//!
//! This module provides parsers for:
//! - The library's own version (`major.minor[.revision][-prerelease]`)
//! - Dependency constraints (`[operator] major[.minor[.revision][-prerelease]]`)

mod constraint;
mod version;

pub use constraint::parse_constraint;
pub use version::parse_version;
