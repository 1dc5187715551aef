//! Update workflows
//!
//! This module provides:
//! - Library version synchronization across podspec and Version.swift
//! - Podspec dependency pin updates

mod dependency;
mod version;

pub use dependency::DependencyUpdater;
pub use version::VersionSynchronizer;
