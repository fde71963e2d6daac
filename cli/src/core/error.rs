//! # ReadmeGen Error Types
//!
//! File: cli/src/core/error.rs
//!
//! ## Overview
//!
//! This module defines the error types used at the boundary of the readmegen
//! CLI. Errors come in two tiers:
//!
//! - **Pipeline internals** (manifest parsing, license detection, directory
//!   listing) never produce errors. Failures there degrade to an omitted field
//!   or `false` and are only logged.
//! - **The CLI boundary** surfaces structural problems (missing path, path that
//!   is not a directory, unreadable config, failed write) and unexpected
//!   template failures. These are represented by `ReadmeGenError`.
//!
//! ## Architecture
//!
//! - `ReadmeGenError`: A custom error enum using `thiserror`
//! - `Result<T>`: A type alias for `anyhow::Result<T>` so callers can attach
//!   context with `.context(...)` / `.with_context(...)`
//!
//! ## Examples
//!
//! ```rust
//! if !path.exists() {
//!     return Err(ReadmeGenError::PathNotFound { path: path.to_path_buf() }.into());
//! }
//!
//! let content = fs::read_to_string(&path)
//!     .with_context(|| format!("Failed to read file: {}", path.display()))?;
//! ```
//!
use std::path::PathBuf;
use thiserror::Error;

/// Custom error type for the readmegen application.
#[derive(Error, Debug)]
pub enum ReadmeGenError {
    #[error("Path does not exist: {}", path.display())]
    PathNotFound { path: PathBuf },

    #[error("Path is not a directory: {}", path.display())]
    NotADirectory { path: PathBuf },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Filesystem error: {0}")]
    FileSystem(String),

    #[error("Template rendering error: {source}")]
    Template {
        #[from]
        source: tera::Error,
    },
}

/// Type alias for Result using anyhow::Error for broad compatibility.
pub type Result<T> = anyhow::Result<T>;
