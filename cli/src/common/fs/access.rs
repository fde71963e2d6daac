//! # ReadmeGen File-Access Capability
//!
//! File: cli/src/common/fs/access.rs
//!
//! ## Overview
//!
//! Every analysis step (ecosystem detection, license detection, test-presence
//! detection, manifest extraction, tree rendering) reads the project through the
//! `FileSystem` trait defined here instead of calling `std::fs` directly. The
//! binary injects `NativeFileSystem`; unit tests inject the in-memory
//! implementation from `common::fs::memory`, so the detectors can be exercised
//! against exact directory layouts without touching disk.
//!
//! The capability is deliberately small and synchronous: existence checks,
//! whole-file text reads and single-level directory listings.
//!
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// A single entry returned by `FileSystem::read_dir`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirEntryInfo {
    /// Full path of the entry.
    pub path: PathBuf,
    /// File or directory name (last path component).
    pub name: String,
    /// Whether the entry is a directory (symlinks are resolved).
    pub is_dir: bool,
}

/// Read-only view of a project directory.
pub trait FileSystem {
    /// Whether anything (file or directory) exists at `path`.
    fn exists(&self, path: &Path) -> bool;

    /// Whether `path` exists and is a directory.
    fn is_dir(&self, path: &Path) -> bool;

    /// Reads a whole file as UTF-8 text.
    fn read_to_string(&self, path: &Path) -> io::Result<String>;

    /// Lists the immediate children of a directory, in listing order.
    fn read_dir(&self, path: &Path) -> io::Result<Vec<DirEntryInfo>>;
}

/// `FileSystem` backed by the real filesystem via `std::fs`.
#[derive(Debug, Default, Clone, Copy)]
pub struct NativeFileSystem;

impl NativeFileSystem {
    pub fn new() -> Self {
        Self
    }
}

impl FileSystem for NativeFileSystem {
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn is_dir(&self, path: &Path) -> bool {
        path.is_dir()
    }

    fn read_to_string(&self, path: &Path) -> io::Result<String> {
        fs::read_to_string(path)
    }

    fn read_dir(&self, path: &Path) -> io::Result<Vec<DirEntryInfo>> {
        let mut entries = Vec::new();
        for entry_result in fs::read_dir(path)? {
            let entry = match entry_result {
                Ok(e) => e,
                Err(e) => {
                    // A single unreadable entry should not hide its siblings.
                    warn!(
                        "Failed to process directory entry in '{}': {}. Skipping.",
                        path.display(),
                        e
                    );
                    continue;
                }
            };
            let entry_path = entry.path();
            let name = entry.file_name().to_string_lossy().to_string();
            let is_dir = entry_path.is_dir();
            entries.push(DirEntryInfo {
                path: entry_path,
                name,
                is_dir,
            });
        }
        debug!("Listed {} entries in '{}'", entries.len(), path.display());
        Ok(entries)
    }
}
