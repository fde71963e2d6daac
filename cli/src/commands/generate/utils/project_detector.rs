//! # ReadmeGen Project Detector
//!
//! File: cli/src/commands/generate/utils/project_detector.rs
//!
//! ## Overview
//!
//! This module inspects marker files in a project directory to answer the
//! questions the README generator needs answered before any manifest is parsed:
//!
//! - Which ecosystem is this? (`detect_ecosystem`)
//! - Which license does the LICENSE file carry? (`detect_license`)
//! - Does the project already have tests? (`has_tests`)
//! - Is there CI or coverage configuration? (`has_ci_workflows`,
//!   `has_coverage_config`), used when badges are auto-detected.
//!
//! ## Architecture
//!
//! Ecosystem detection follows a fixed priority order and stops at the first
//! match:
//!
//! 1. `package.json` → Node
//! 2. `setup.py`, `pyproject.toml` or `requirements.txt` → Python
//! 3. `go.mod` → Go
//! 4. `Cargo.toml` → Rust
//! 5. otherwise → Unknown
//!
//! A polyglot repository with both `package.json` and `go.mod` is therefore
//! classified as Node. Only existence is checked, never content.
//!
//! None of the functions here can fail: unreadable files and directories are
//! logged and treated as absent.
//!
use crate::commands::generate::project::Ecosystem;
use crate::common::fs::access::FileSystem;
use std::path::Path;
use tracing::debug;

/// Node manifest.
const NODE_MARKER: &str = "package.json";
/// Any one of these marks a Python project.
const PYTHON_MARKERS: [&str; 3] = ["setup.py", "pyproject.toml", "requirements.txt"];
/// Go module file.
const GO_MARKER: &str = "go.mod";
/// Rust crate manifest.
const RUST_MARKER: &str = "Cargo.toml";

/// Conventional license filenames, scanned in this order.
const LICENSE_FILES: [&str; 4] = ["LICENSE", "LICENSE.md", "LICENSE.txt", "LICENCE"];

/// Conventional test directory names (immediate children only).
const TEST_DIRS: [&str; 4] = ["test", "tests", "__tests__", "spec"];
/// Conventional root-level test files.
const TEST_FILES: [&str; 4] = ["test.js", "test.ts", "test.py", "test.go"];

/// # Detect Ecosystem (`detect_ecosystem`)
///
/// Classifies the project at `project_path` by marker-file existence, in the
/// fixed priority order documented at the module level.
pub fn detect_ecosystem(fs: &dyn FileSystem, project_path: &Path) -> Ecosystem {
    debug!("Detecting ecosystem in: {}", project_path.display());

    let ecosystem = if path_exists(fs, project_path, NODE_MARKER) {
        Ecosystem::Node
    } else if PYTHON_MARKERS
        .iter()
        .any(|marker| path_exists(fs, project_path, marker))
    {
        Ecosystem::Python
    } else if path_exists(fs, project_path, GO_MARKER) {
        Ecosystem::Go
    } else if path_exists(fs, project_path, RUST_MARKER) {
        Ecosystem::Rust
    } else {
        Ecosystem::Unknown
    };

    debug!("Detected ecosystem: {}", ecosystem);
    ecosystem
}

/// # Detect License (`detect_license`)
///
/// Finds the first conventional license file and classifies its text:
///
/// | Text contains | Result |
/// |---|---|
/// | `MIT License` | `MIT` |
/// | `Apache License` | `Apache-2.0` |
/// | `GNU GENERAL PUBLIC LICENSE` | `GPL-3.0` |
/// | `BSD` | `BSD` |
/// | anything else | `Custom` |
///
/// Returns `None` when no license file exists, which is distinct from
/// `Some("Custom")`. A license file that exists but cannot be read is skipped.
pub fn detect_license(fs: &dyn FileSystem, project_path: &Path) -> Option<String> {
    for file_name in LICENSE_FILES {
        let license_path = project_path.join(file_name);
        if !fs.exists(&license_path) {
            continue;
        }
        match fs.read_to_string(&license_path) {
            Ok(content) => {
                let license = classify_license_text(&content);
                debug!("Detected license '{}' from {}", license, file_name);
                return Some(license.to_string());
            }
            Err(e) => {
                debug!(
                    "Could not read license file {}: {}",
                    license_path.display(),
                    e
                );
            }
        }
    }
    None
}

/// Maps license file text to an identifier by substring match.
fn classify_license_text(content: &str) -> &'static str {
    if content.contains("MIT License") {
        "MIT"
    } else if content.contains("Apache License") {
        "Apache-2.0"
    } else if content.contains("GNU GENERAL PUBLIC LICENSE") {
        "GPL-3.0"
    } else if content.contains("BSD") {
        "BSD"
    } else {
        "Custom"
    }
}

/// # Detect Tests (`has_tests`)
///
/// Heuristic test-suite detection. True when any of:
///
/// - a conventional test directory (`test`, `tests`, `__tests__`, `spec`) exists
/// - a conventional root test file (`test.js`, `test.ts`, `test.py`, `test.go`) exists
/// - an immediate child's name contains `.test.` or `.spec.`
///
/// Failure to list the directory yields `false`.
pub fn has_tests(fs: &dyn FileSystem, project_path: &Path) -> bool {
    if TEST_DIRS
        .iter()
        .chain(TEST_FILES.iter())
        .any(|name| path_exists(fs, project_path, name))
    {
        return true;
    }

    match fs.read_dir(project_path) {
        Ok(entries) => entries
            .iter()
            .any(|entry| entry.name.contains(".test.") || entry.name.contains(".spec.")),
        Err(e) => {
            debug!(
                "Could not read directory {} for test detection: {}",
                project_path.display(),
                e
            );
            false
        }
    }
}

/// Whether GitHub Actions workflows are configured (`.github/workflows/`).
pub fn has_ci_workflows(fs: &dyn FileSystem, project_path: &Path) -> bool {
    fs.is_dir(&project_path.join(".github").join("workflows"))
}

/// Whether a Codecov configuration file is present.
pub fn has_coverage_config(fs: &dyn FileSystem, project_path: &Path) -> bool {
    ["codecov.yml", ".codecov.yml"]
        .iter()
        .any(|name| path_exists(fs, project_path, name))
}

/// Checks if a specific file or directory exists directly within the base path.
fn path_exists(fs: &dyn FileSystem, base: &Path, file_name: &str) -> bool {
    fs.exists(&base.join(file_name))
}
