//! Target file access
//!
//! This module provides functionality to:
//! - Read and patch the version literal and dependency pins of a podspec
//! - Read and patch the version constants of Version.swift
//! - Stage, write and dry-run file changes

pub mod podspec;
pub mod version_source;
mod writer;

pub use writer::{read_target, write_target, StagedFile};
