//! libver - version and dependency helpers for CocoaPods libraries
//!
//! This library provides the core functionality behind two tools:
//! - `library-versions`: keep a library's podspec version and its
//!   generated version source in sync (update, validate, print)
//! - `podspec-dependency`: rewrite a dependency constraint in a podspec

pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod logging;
pub mod manifest;
pub mod orchestrator;
pub mod output;
pub mod parser;
pub mod patch;
pub mod update;
