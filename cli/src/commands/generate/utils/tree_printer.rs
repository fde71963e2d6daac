//! # ReadmeGen Directory Tree Printer
//!
//! File: cli/src/commands/generate/utils/tree_printer.rs
//!
//! ## Overview
//!
//! Renders a project's directory structure as text, similar to the output of
//! the `tree` command-line utility, for the "Project Structure" section of the
//! generated README.
//!
//! ## Architecture
//!
//! - Recursive traversal through the injected `FileSystem`
//! - Connector lines (├──, └──, │) built up in a shared prefix buffer
//! - A static ignore set: VCS metadata, dependency caches, build output,
//!   lockfiles and OS metadata are neither shown nor descended into
//! - A depth cap: the root sits at depth 0 and nothing at depth `max_depth`
//!   or deeper is printed (no truncation marker)
//! - The root's own name is not printed; the tree starts with its children
//! - Entries are sorted by name so output is identical across platforms
//! - Unreadable directories simply show no children
//!
//! Example output for `render_tree(fs, path, 3)`:
//!
//! ```text
//! ├── Cargo.toml
//! ├── src
//! │   ├── lib.rs
//! │   └── main.rs
//! └── tests
//!     └── integration.rs
//! ```
//!
use crate::common::fs::access::{DirEntryInfo, FileSystem};
use once_cell::sync::Lazy;
use std::collections::HashSet;
use std::path::Path;
use tracing::{debug, warn};

// --- Constants for Tree Drawing ---

/// Connector for intermediate items in a directory listing ("T" shape).
const TEE: &str = "├── ";
/// Connector for the last item in a directory listing ("L" shape).
const ELBOW: &str = "└── ";
/// Vertical line used for ongoing indentation levels.
const PIPE: &str = "│   ";
/// Spacer used for indentation levels after the last item has been printed.
const SPACER: &str = "    ";

/// Default depth cap used when neither the CLI nor the config sets one.
pub const DEFAULT_MAX_DEPTH: usize = 3;

/// Directory names that never appear in the tree.
static IGNORED_DIRS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "node_modules",
        ".git",
        "dist",
        "build",
        "coverage",
        ".next",
        "__pycache__",
        "venv",
        ".venv",
        "target",
    ]
    .into_iter()
    .collect()
});

/// File names that never appear in the tree.
static IGNORED_FILES: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [".DS_Store", "package-lock.json", "yarn.lock", "pnpm-lock.yaml"]
        .into_iter()
        .collect()
});

/// Whether an entry name is in either ignore set.
pub fn is_ignored(name: &str) -> bool {
    IGNORED_DIRS.contains(name) || IGNORED_FILES.contains(name)
}

/// # Render Directory Tree (`render_tree`)
///
/// Produces the tree text for the children of `root`, limited to `max_depth`.
/// Always returns a string; an empty or unreadable directory yields `""`.
pub fn render_tree(fs: &dyn FileSystem, root: &Path, max_depth: usize) -> String {
    let mut output = String::new();
    walk_and_build_string(fs, root, 0, max_depth, &mut String::new(), &mut output);
    debug!(
        "Rendered tree for '{}' ({} lines)",
        root.display(),
        output.lines().count()
    );
    output
}

/// Recursive walker. `depth` is the depth of `dir` itself (root = 0); its
/// children live at `depth + 1` and are only printed below `max_depth`.
fn walk_and_build_string(
    fs: &dyn FileSystem,
    dir: &Path,
    depth: usize,
    max_depth: usize,
    current_prefix: &mut String,
    output: &mut String,
) {
    if depth + 1 >= max_depth {
        return;
    }

    let entries = read_and_sort_dir_entries(fs, dir);
    let num_entries = entries.len();

    for (index, entry) in entries.into_iter().enumerate() {
        let is_last_entry = index == num_entries - 1;
        let connector = if is_last_entry { ELBOW } else { TEE };

        output.push_str(current_prefix);
        output.push_str(connector);
        output.push_str(&entry.name);
        output.push('\n');

        if entry.is_dir {
            let prefix_component = if is_last_entry { SPACER } else { PIPE };
            current_prefix.push_str(prefix_component);
            walk_and_build_string(fs, &entry.path, depth + 1, max_depth, current_prefix, output);
            // Backtrack for the next sibling.
            current_prefix.truncate(current_prefix.len() - prefix_component.len());
        }
    }
}

/// Lists `dir`, drops ignored names and sorts by name. A listing failure
/// (permissions, vanished directory) is logged and treated as empty.
fn read_and_sort_dir_entries(fs: &dyn FileSystem, dir: &Path) -> Vec<DirEntryInfo> {
    let mut entries = match fs.read_dir(dir) {
        Ok(entries) => entries,
        Err(e) => {
            warn!(
                "Failed to read directory entries from '{}': {}. Showing no children.",
                dir.display(),
                e
            );
            return Vec::new();
        }
    };
    entries.retain(|entry| {
        let keep = !is_ignored(&entry.name);
        if !keep {
            debug!("Skipping ignored entry: {}", entry.path.display());
        }
        keep
    });
    entries.sort_by(|a, b| a.name.cmp(&b.name));
    entries
}
