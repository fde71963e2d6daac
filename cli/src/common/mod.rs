//! # ReadmeGen Common Utilities (`common`)
//!
//! File: cli/src/common/mod.rs
//!
//! ## Overview
//!
//! Shared utilities used by the command handlers. At present this is the
//! filesystem layer: the injectable read-only `FileSystem` capability used by
//! the analyzer, and the output helpers used to write the generated README.
//!

/// Utilities for filesystem access (read capability, output I/O).
pub mod fs;
