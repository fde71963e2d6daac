//! # ReadmeGen CLI Integration Test Common Helpers
//!
//! File: cli/tests/common.rs
//!
//! ## Overview
//!
//! Shared helpers for the integration tests in `cli/tests/`. Each `.rs` file in
//! that directory (other than this module) is compiled as a separate test crate
//! that runs the compiled `readmegen` binary.
//!

// Different test files use different helpers.
#![allow(dead_code)]

pub use assert_cmd::Command;
use std::fs;
use std::path::Path;

/// # Get ReadmeGen Command (`readmegen_cmd`)
///
/// Creates an `assert_cmd::Command` for the compiled `readmegen` binary.
///
/// ## Panics
/// Panics if the binary cannot be found via `Command::cargo_bin`.
pub fn readmegen_cmd() -> Command {
    Command::cargo_bin("readmegen").expect("Failed to find readmegen binary for testing")
}

/// A `readmegen` command whose user config directory points into `home`, so
/// a developer's real `~/.config/readmegen/config.toml` never leaks into tests.
pub fn isolated_cmd(home: &Path) -> Command {
    let mut cmd = readmegen_cmd();
    cmd.env("HOME", home)
        .env("XDG_CONFIG_HOME", home.join(".config"))
        .env_remove("RUST_LOG");
    cmd
}

/// Writes `content` to `root/relative`, creating parent directories.
pub fn write_file(root: &Path, relative: &str, content: &str) {
    let path = root.join(relative);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("Failed to create parent directory");
    }
    fs::write(&path, content).expect("Failed to write test file");
}

/// A small node project: manifest with scripts, MIT license, one test file.
pub fn create_node_project(root: &Path) {
    write_file(
        root,
        "package.json",
        r#"{
  "name": "test-project",
  "description": "A test project",
  "version": "1.0.0",
  "repository": "https://github.com/acme/test-project.git",
  "scripts": { "start": "node index.js", "test": "jest" }
}"#,
    );
    write_file(root, "LICENSE", "MIT License\n\nCopyright (c) 2024 Acme");
    write_file(root, "index.js", "console.log('hi');\n");
    write_file(root, "index.test.js", "test('ok', () => {});\n");
    write_file(root, "src/lib.js", "module.exports = {};\n");
    write_file(root, "node_modules/left-pad/index.js", "");
}
