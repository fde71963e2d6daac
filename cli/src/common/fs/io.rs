//! # ReadmeGen Filesystem Output Operations
//!
//! File: cli/src/common/fs/io.rs
//!
//! ## Overview
//!
//! The analysis pipeline only ever *reads* through the `FileSystem` capability
//! (see `access.rs`). The CLI, however, needs to write the generated README and
//! to read configuration files, where a failure is a real error rather than a
//! degraded field. This module provides those helpers with `anyhow` context:
//!
//! - **`ensure_dir_exists`**: creates a directory (and parents) if missing and
//!   rejects paths that exist but are files.
//! - **`read_file_to_string`**: `fs::read_to_string` with the offending path in
//!   the error message.
//! - **`write_string_to_file`**: writes (overwrites) a file, creating the parent
//!   directory first.
//!
use crate::core::error::{ReadmeGenError, Result};
use anyhow::Context;
use std::fs;
use std::path::Path;
use tracing::{debug, info};

/// Ensures that a directory exists at the specified path.
///
/// Creates the directory and its parents (like `mkdir -p`) when missing.
///
/// # Errors
///
/// Returns an `Err` if the path exists but is not a directory, or if creating
/// the directory fails.
pub fn ensure_dir_exists(path: &Path) -> Result<()> {
    if !path.exists() {
        fs::create_dir_all(path)
            .with_context(|| format!("Failed to create directory {:?}", path))?;
        info!("Created directory: {:?}", path);
    } else if !path.is_dir() {
        anyhow::bail!(ReadmeGenError::FileSystem(format!(
            "Path exists but is not a directory: {:?}",
            path
        )));
    } else {
        debug!("Directory already exists: {:?}", path);
    }
    Ok(())
}

/// Reads the entire content of a file into a string, adding the path to any error.
pub fn read_file_to_string(path: &Path) -> Result<String> {
    fs::read_to_string(path).with_context(|| format!("Failed to read file {:?}", path))
}

/// Writes string content to a file, overwriting it if it exists.
///
/// The parent directory is created first when it does not exist yet, so
/// `--output docs/README.md` works on a fresh checkout.
pub fn write_string_to_file(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        // `Path::new("README.md").parent()` is `Some("")`.
        if !parent.as_os_str().is_empty() {
            ensure_dir_exists(parent)?;
        }
    }
    fs::write(path, content).with_context(|| format!("Failed to write to file {:?}", path))?;
    info!("Wrote content to file: {:?}", path);
    Ok(())
}
