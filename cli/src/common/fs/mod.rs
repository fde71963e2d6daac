//! # ReadmeGen Filesystem Utilities (`common::fs`)
//!
//! File: cli/src/common/fs/mod.rs
//!
//! ## Overview
//!
//! Filesystem access for the CLI, split by direction:
//!
//! - **`access`**: the read-only `FileSystem` capability injected into every
//!   analysis step, plus `NativeFileSystem` backed by `std::fs`.
//! - **`io`**: output-side helpers (writing the README, reading config files)
//!   whose failures are surfaced to the user.
//! - **`memory`** (tests only): an in-memory `FileSystem` for describing exact
//!   project layouts in unit tests.
//!
//! ## Usage
//!
//! ```rust
//! use crate::common::fs::access::{FileSystem, NativeFileSystem};
//! use crate::common::fs::io;
//!
//! let fs_access = NativeFileSystem::new();
//! if fs_access.exists(&project.join("package.json")) { /* ... */ }
//! io::write_string_to_file(Path::new("README.md"), &markdown)?;
//! ```
//!

/// The read-only `FileSystem` trait and its native implementation.
pub mod access;
/// Output helpers: `ensure_dir_exists`, `read_file_to_string`, `write_string_to_file`.
pub mod io;
/// In-memory `FileSystem` for unit tests.
#[cfg(test)]
pub mod memory;
