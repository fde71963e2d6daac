//! # ReadmeGen Project Model
//!
//! File: cli/src/commands/generate/project.rs
//!
//! ## Overview
//!
//! The data records flowing through the generate pipeline:
//!
//! - `Ecosystem`: the closed set of project families the tool understands.
//! - `ProjectInfo`: everything the analyzer learned about a project. Built once
//!   per invocation by `analyzer::analyze_project` and read-only afterwards.
//! - `ManifestMetadata`: the partial record an ecosystem-specific manifest
//!   extractor produces; merged over the `ProjectInfo` defaults.
//!
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;

/// The detected toolchain family of a project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Ecosystem {
    Node,
    Python,
    Go,
    Rust,
    Unknown,
}

impl Ecosystem {
    pub fn as_str(&self) -> &'static str {
        match self {
            Ecosystem::Node => "node",
            Ecosystem::Python => "python",
            Ecosystem::Go => "go",
            Ecosystem::Rust => "rust",
            Ecosystem::Unknown => "unknown",
        }
    }
}

impl fmt::Display for Ecosystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// # Project Information (`ProjectInfo`)
///
/// The structured result of analyzing a project directory. `ecosystem` is
/// decided once from marker files; all ecosystem-specific extraction is keyed
/// on that single decision. `file_tree` is always present (possibly empty).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectInfo {
    pub ecosystem: Ecosystem,
    /// Display name. Directory base name unless a manifest provides one.
    pub name: String,
    pub description: Option<String>,
    pub version: Option<String>,
    pub license: Option<String>,
    pub author: Option<String>,
    pub repository_url: Option<String>,
    /// Task name -> shell command. Only populated for node projects.
    pub scripts: Option<BTreeMap<String, String>>,
    pub dependencies: Option<BTreeMap<String, String>>,
    pub dev_dependencies: Option<BTreeMap<String, String>>,
    /// Pre-rendered directory tree, embedded verbatim by the README composer.
    pub file_tree: String,
    pub has_tests: bool,
}

impl ProjectInfo {
    /// A record with only the ecosystem and name set.
    pub fn new(ecosystem: Ecosystem, name: impl Into<String>) -> Self {
        ProjectInfo {
            ecosystem,
            name: name.into(),
            description: None,
            version: None,
            license: None,
            author: None,
            repository_url: None,
            scripts: None,
            dependencies: None,
            dev_dependencies: None,
            file_tree: String::new(),
            has_tests: false,
        }
    }

    /// Merges manifest data over the current values. Only fields the manifest
    /// actually provided override; absent fields keep what detection found.
    pub fn apply_metadata(&mut self, meta: ManifestMetadata) {
        if let Some(name) = meta.name.filter(|n| !n.trim().is_empty()) {
            self.name = name;
        }
        overlay(&mut self.description, meta.description);
        overlay(&mut self.version, meta.version);
        overlay(&mut self.license, meta.license);
        overlay(&mut self.author, meta.author);
        overlay(&mut self.repository_url, meta.repository_url);
        overlay(&mut self.scripts, meta.scripts);
        overlay(&mut self.dependencies, meta.dependencies);
        overlay(&mut self.dev_dependencies, meta.dev_dependencies);
    }

    /// Whether the project declares at least one script.
    pub fn has_scripts(&self) -> bool {
        self.scripts.as_ref().is_some_and(|s| !s.is_empty())
    }

    /// Whether a script with the given name is declared.
    pub fn has_script(&self, name: &str) -> bool {
        self.scripts.as_ref().is_some_and(|s| s.contains_key(name))
    }
}

fn overlay<T>(target: &mut Option<T>, value: Option<T>) {
    if value.is_some() {
        *target = value;
    }
}

/// Partial project record produced by a manifest extractor. Every field is
/// optional; an empty record means "nothing discoverable".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ManifestMetadata {
    pub name: Option<String>,
    pub description: Option<String>,
    pub version: Option<String>,
    pub license: Option<String>,
    pub author: Option<String>,
    pub repository_url: Option<String>,
    pub scripts: Option<BTreeMap<String, String>>,
    pub dependencies: Option<BTreeMap<String, String>>,
    pub dev_dependencies: Option<BTreeMap<String, String>>,
}
