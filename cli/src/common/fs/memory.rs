//! In-memory `FileSystem` used by unit tests to describe exact project layouts.

use super::access::{DirEntryInfo, FileSystem};
use std::collections::{BTreeMap, BTreeSet};
use std::io;
use std::path::{Path, PathBuf};

#[derive(Debug, Default, Clone)]
pub struct MemoryFileSystem {
    files: BTreeMap<PathBuf, String>,
    dirs: BTreeSet<PathBuf>,
    unreadable: BTreeSet<PathBuf>,
}

impl MemoryFileSystem {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a file (and all of its ancestor directories).
    pub fn with_file(mut self, path: impl AsRef<Path>, content: &str) -> Self {
        let path = path.as_ref().to_path_buf();
        if let Some(parent) = path.parent() {
            self.add_dir_all(parent);
        }
        self.files.insert(path, content.to_string());
        self
    }

    /// Adds an empty directory (and all of its ancestors).
    pub fn with_dir(mut self, path: impl AsRef<Path>) -> Self {
        self.add_dir_all(path.as_ref());
        self
    }

    /// Marks an existing path as unreadable: reads and listings fail with
    /// `PermissionDenied`, existence checks still succeed.
    pub fn with_unreadable(mut self, path: impl AsRef<Path>) -> Self {
        self.unreadable.insert(path.as_ref().to_path_buf());
        self
    }

    fn add_dir_all(&mut self, path: &Path) {
        for ancestor in path.ancestors() {
            if ancestor.as_os_str().is_empty() {
                continue;
            }
            self.dirs.insert(ancestor.to_path_buf());
        }
    }

    fn check_readable(&self, path: &Path) -> io::Result<()> {
        if self.unreadable.contains(path) {
            return Err(io::Error::new(
                io::ErrorKind::PermissionDenied,
                format!("permission denied: {}", path.display()),
            ));
        }
        Ok(())
    }
}

impl FileSystem for MemoryFileSystem {
    fn exists(&self, path: &Path) -> bool {
        self.files.contains_key(path) || self.dirs.contains(path)
    }

    fn is_dir(&self, path: &Path) -> bool {
        self.dirs.contains(path)
    }

    fn read_to_string(&self, path: &Path) -> io::Result<String> {
        self.check_readable(path)?;
        self.files.get(path).cloned().ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::NotFound,
                format!("no such file: {}", path.display()),
            )
        })
    }

    fn read_dir(&self, path: &Path) -> io::Result<Vec<DirEntryInfo>> {
        self.check_readable(path)?;
        if !self.dirs.contains(path) {
            return Err(io::Error::new(
                io::ErrorKind::NotFound,
                format!("no such directory: {}", path.display()),
            ));
        }
        let child_dirs = self.dirs.iter().map(|p| (p, true));
        let child_files = self.files.keys().map(|p| (p, false));
        let entries = child_dirs
            .chain(child_files)
            .filter(|(p, _)| p.parent() == Some(path))
            .map(|(p, is_dir)| DirEntryInfo {
                path: p.clone(),
                name: p
                    .file_name()
                    .map(|n| n.to_string_lossy().to_string())
                    .unwrap_or_default(),
                is_dir,
            })
            .collect();
        Ok(entries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_listing_and_reads() {
        let fs_access = MemoryFileSystem::new()
            .with_file("/proj/src/main.rs", "fn main() {}")
            .with_file("/proj/Cargo.toml", "[package]")
            .with_dir("/proj/tests");

        assert!(fs_access.is_dir(Path::new("/proj")));
        assert!(fs_access.is_dir(Path::new("/proj/src")));
        assert!(fs_access.exists(Path::new("/proj/Cargo.toml")));
        assert_eq!(
            fs_access
                .read_to_string(Path::new("/proj/src/main.rs"))
                .unwrap(),
            "fn main() {}"
        );

        let names: Vec<String> = fs_access
            .read_dir(Path::new("/proj"))
            .unwrap()
            .into_iter()
            .map(|e| e.name)
            .collect();
        assert_eq!(names.len(), 3);
        assert!(names.contains(&"src".to_string()));
        assert!(names.contains(&"tests".to_string()));
        assert!(names.contains(&"Cargo.toml".to_string()));
    }

    #[test]
    fn test_memory_unreadable() {
        let fs_access = MemoryFileSystem::new()
            .with_dir("/proj/secret")
            .with_unreadable("/proj/secret");
        assert!(fs_access.exists(Path::new("/proj/secret")));
        let err = fs_access.read_dir(Path::new("/proj/secret")).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::PermissionDenied);
    }
}
