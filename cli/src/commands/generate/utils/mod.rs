//! # ReadmeGen Generate Utilities
//!
//! File: cli/src/commands/generate/utils/mod.rs
//!
//! ## Overview
//!
//! Helpers for analyzing a project directory before rendering:
//!
//! - `project_detector`: ecosystem, license and test-presence detection from marker files
//! - `metadata`: ecosystem-specific manifest parsing (`package.json`, `pyproject.toml`, `go.mod`, `Cargo.toml`)
//! - `tree_printer`: the bounded-depth directory tree shown under "Project Structure"
//!
//! All three read through the injected `FileSystem` capability and never fail;
//! problems are logged and degrade to absent data.
//!
pub mod metadata;
pub mod project_detector;
pub mod tree_printer;
