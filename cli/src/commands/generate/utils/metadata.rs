//! # ReadmeGen Manifest Metadata Extractor
//!
//! File: cli/src/commands/generate/utils/metadata.rs
//!
//! ## Overview
//!
//! Reads the ecosystem's manifest and turns it into a `ManifestMetadata`
//! partial record, which the analyzer merges over the defaults it already has
//! (directory name, license from the LICENSE file).
//!
//! | Ecosystem | Source | Fields |
//! |---|---|---|
//! | Node | `package.json` (JSON) | name, description, version, license, author, repository, scripts, dependencies, devDependencies |
//! | Python | `pyproject.toml` (`[project]`, then `[tool.poetry]`) | name, version, description, license, author |
//! | Go | `go.mod` (`module` line) | name |
//! | Rust | `Cargo.toml` (`[package]`, then `[workspace.package]`) | name, version, license, description, repository, author |
//!
//! ## Error Policy
//!
//! A missing or malformed manifest is never an error. Extraction degrades to
//! fewer fields (often an empty record) and the reason is logged at debug/warn
//! level. Individual fields with unexpected types are dropped on their own
//! without discarding the rest of the manifest.
//!
//! `Cargo.toml` and `pyproject.toml` are parsed as real TOML documents rather
//! than scanned line by line, so keys inside `[dependencies]` tables can never
//! be mistaken for the package's own `name`/`version`/`license`.
//!
use crate::commands::generate::project::{Ecosystem, ManifestMetadata};
use crate::common::fs::access::FileSystem;
use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value as JsonValue;
use std::collections::BTreeMap;
use std::path::Path;
use tracing::{debug, warn};

/// `module <path>` declaration in a go.mod file.
static GO_MODULE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(?m)^\s*module\s+"?([^\s"]+)"?"#).expect("go module regex is valid")
});

/// # Extract Metadata (`extract_metadata`)
///
/// Dispatches to the extractor for `ecosystem`. Total over the enum; `Unknown`
/// yields an empty record.
pub fn extract_metadata(
    fs: &dyn FileSystem,
    project_path: &Path,
    ecosystem: Ecosystem,
) -> ManifestMetadata {
    match ecosystem {
        Ecosystem::Node => extract_node(fs, project_path),
        Ecosystem::Python => extract_python(fs, project_path),
        Ecosystem::Go => extract_go(fs, project_path),
        Ecosystem::Rust => extract_rust(fs, project_path),
        Ecosystem::Unknown => ManifestMetadata::default(),
    }
}

// --- Node ---

fn extract_node(fs: &dyn FileSystem, project_path: &Path) -> ManifestMetadata {
    let manifest_path = project_path.join("package.json");
    let Some(content) = read_manifest(fs, &manifest_path) else {
        return ManifestMetadata::default();
    };

    let pkg: JsonValue = match serde_json::from_str(&content) {
        Ok(value) => value,
        Err(e) => {
            warn!(
                "Ignoring malformed {}: {}",
                manifest_path.display(),
                e
            );
            return ManifestMetadata::default();
        }
    };
    if !pkg.is_object() {
        warn!("Ignoring {}: top level is not an object", manifest_path.display());
        return ManifestMetadata::default();
    }

    ManifestMetadata {
        name: json_str(&pkg, "name").or_else(|| dir_base_name(project_path)),
        description: json_str(&pkg, "description"),
        version: json_str(&pkg, "version"),
        license: node_license(&pkg),
        author: pkg.get("author").and_then(node_person),
        repository_url: pkg.get("repository").and_then(node_repository),
        scripts: pkg.get("scripts").and_then(json_string_map),
        dependencies: pkg.get("dependencies").and_then(json_string_map),
        dev_dependencies: pkg.get("devDependencies").and_then(json_string_map),
    }
}

fn json_str(value: &JsonValue, key: &str) -> Option<String> {
    value.get(key).and_then(JsonValue::as_str).and_then(non_blank)
}

/// `"license": "MIT"`, or the legacy `"license": { "type": "MIT" }`.
fn node_license(pkg: &JsonValue) -> Option<String> {
    match pkg.get("license")? {
        JsonValue::String(s) => non_blank(s),
        JsonValue::Object(_) => json_str(&pkg["license"], "type"),
        _ => None,
    }
}

/// `"author": "Jane <jane@x.io>"` or `{ "name": "Jane", "email": "jane@x.io" }`.
fn node_person(value: &JsonValue) -> Option<String> {
    match value {
        JsonValue::String(s) => non_blank(s),
        JsonValue::Object(_) => {
            let name = json_str(value, "name")?;
            match json_str(value, "email") {
                Some(email) => Some(format!("{} <{}>", name, email)),
                None => Some(name),
            }
        }
        _ => None,
    }
}

/// `"repository": "url"` or `{ "type": "git", "url": "url" }`.
fn node_repository(value: &JsonValue) -> Option<String> {
    match value {
        JsonValue::String(s) => non_blank(s),
        JsonValue::Object(_) => json_str(value, "url"),
        _ => None,
    }
}

/// An object of string values, e.g. `scripts` or `dependencies`. Entries with
/// non-string values are skipped.
fn json_string_map(value: &JsonValue) -> Option<BTreeMap<String, String>> {
    let object = value.as_object()?;
    Some(
        object
            .iter()
            .filter_map(|(k, v)| v.as_str().map(|s| (k.clone(), s.to_string())))
            .collect(),
    )
}

// --- Python ---

fn extract_python(fs: &dyn FileSystem, project_path: &Path) -> ManifestMetadata {
    let mut meta = ManifestMetadata {
        name: dir_base_name(project_path),
        ..Default::default()
    };

    let manifest_path = project_path.join("pyproject.toml");
    let Some(content) = read_manifest(fs, &manifest_path) else {
        return meta;
    };
    let doc = match toml::from_str::<toml::Table>(&content) {
        Ok(doc) => doc,
        Err(e) => {
            warn!("Ignoring malformed {}: {}", manifest_path.display(), e);
            return meta;
        }
    };

    if let Some(project) = doc.get("project").and_then(toml::Value::as_table) {
        // PEP 621 metadata.
        apply_if_some(&mut meta.name, toml_str(project, "name"));
        meta.version = toml_str(project, "version");
        meta.description = toml_str(project, "description");
        meta.license = match project.get("license") {
            Some(toml::Value::String(s)) => non_blank(s),
            Some(toml::Value::Table(t)) => toml_str(t, "text"),
            _ => None,
        };
        meta.author = project
            .get("authors")
            .and_then(toml::Value::as_array)
            .and_then(|authors| authors.first())
            .and_then(toml::Value::as_table)
            .and_then(|author| toml_str(author, "name"));
    } else if let Some(poetry) = doc
        .get("tool")
        .and_then(|tool| tool.get("poetry"))
        .and_then(toml::Value::as_table)
    {
        apply_if_some(&mut meta.name, toml_str(poetry, "name"));
        meta.version = toml_str(poetry, "version");
        meta.description = toml_str(poetry, "description");
        meta.license = toml_str(poetry, "license");
        meta.author = first_toml_string(poetry, "authors");
    } else {
        debug!(
            "{} has neither [project] nor [tool.poetry]; using directory name only",
            manifest_path.display()
        );
    }

    meta
}

// --- Go ---

fn extract_go(fs: &dyn FileSystem, project_path: &Path) -> ManifestMetadata {
    let Some(content) = read_manifest(fs, &project_path.join("go.mod")) else {
        return ManifestMetadata::default();
    };
    let module = GO_MODULE_RE
        .captures(&content)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string());
    if module.is_none() {
        debug!("No module declaration found in go.mod");
    }
    ManifestMetadata {
        name: module.or_else(|| dir_base_name(project_path)),
        ..Default::default()
    }
}

// --- Rust ---

fn extract_rust(fs: &dyn FileSystem, project_path: &Path) -> ManifestMetadata {
    let manifest_path = project_path.join("Cargo.toml");
    let Some(content) = read_manifest(fs, &manifest_path) else {
        return ManifestMetadata::default();
    };
    let doc = match toml::from_str::<toml::Table>(&content) {
        Ok(doc) => doc,
        Err(e) => {
            warn!("Ignoring malformed {}: {}", manifest_path.display(), e);
            return ManifestMetadata::default();
        }
    };

    // Virtual workspaces have no [package]; their shared metadata lives in
    // [workspace.package].
    let package = doc.get("package").and_then(toml::Value::as_table).or_else(|| {
        doc.get("workspace")
            .and_then(|ws| ws.get("package"))
            .and_then(toml::Value::as_table)
    });
    let Some(package) = package else {
        return ManifestMetadata {
            name: dir_base_name(project_path),
            ..Default::default()
        };
    };

    // Only plain string values count: `version.workspace = true` is a table.
    ManifestMetadata {
        name: toml_str(package, "name").or_else(|| dir_base_name(project_path)),
        version: toml_str(package, "version"),
        license: toml_str(package, "license"),
        description: toml_str(package, "description"),
        repository_url: toml_str(package, "repository"),
        author: first_toml_string(package, "authors"),
        ..Default::default()
    }
}

fn toml_str(table: &toml::Table, key: &str) -> Option<String> {
    table.get(key).and_then(toml::Value::as_str).and_then(non_blank)
}

fn first_toml_string(table: &toml::Table, key: &str) -> Option<String> {
    table
        .get(key)
        .and_then(toml::Value::as_array)
        .and_then(|items| items.first())
        .and_then(toml::Value::as_str)
        .and_then(non_blank)
}

// --- Shared helpers ---

/// Reads a manifest if it exists. Absence and read failures both yield `None`.
fn read_manifest(fs: &dyn FileSystem, path: &Path) -> Option<String> {
    if !fs.exists(path) {
        debug!("Manifest not found: {}", path.display());
        return None;
    }
    match fs.read_to_string(path) {
        Ok(content) => Some(content),
        Err(e) => {
            warn!("Could not read manifest {}: {}", path.display(), e);
            None
        }
    }
}

fn dir_base_name(path: &Path) -> Option<String> {
    path.file_name().map(|n| n.to_string_lossy().to_string())
}

fn non_blank(s: &str) -> Option<String> {
    let trimmed = s.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

fn apply_if_some(target: &mut Option<String>, value: Option<String>) {
    if value.is_some() {
        *target = value;
    }
}

// --- Unit Tests ---
#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::fs::memory::MemoryFileSystem;

    fn extract(fs: &MemoryFileSystem, ecosystem: Ecosystem) -> ManifestMetadata {
        extract_metadata(fs, Path::new("/work/my-app"), ecosystem)
    }

    #[test]
    fn test_node_full_manifest() {
        let fs = MemoryFileSystem::new().with_file(
            "/work/my-app/package.json",
            r#"{
                "name": "awesome-lib",
                "description": "Does awesome things",
                "version": "2.0.0",
                "license": "Apache-2.0",
                "author": { "name": "Jane Doe", "email": "jane@example.com" },
                "repository": { "type": "git", "url": "git+https://github.com/jane/awesome-lib.git" },
                "scripts": { "start": "node index.js", "test": "jest" },
                "dependencies": { "express": "^4.18.0" },
                "devDependencies": { "jest": "^29.0.0" }
            }"#,
        );

        let meta = extract(&fs, Ecosystem::Node);
        assert_eq!(meta.name.as_deref(), Some("awesome-lib"));
        assert_eq!(meta.description.as_deref(), Some("Does awesome things"));
        assert_eq!(meta.version.as_deref(), Some("2.0.0"));
        assert_eq!(meta.license.as_deref(), Some("Apache-2.0"));
        assert_eq!(meta.author.as_deref(), Some("Jane Doe <jane@example.com>"));
        assert_eq!(
            meta.repository_url.as_deref(),
            Some("git+https://github.com/jane/awesome-lib.git")
        );
        let scripts = meta.scripts.unwrap();
        assert_eq!(scripts.get("start").map(String::as_str), Some("node index.js"));
        assert_eq!(scripts.get("test").map(String::as_str), Some("jest"));
        assert_eq!(
            meta.dependencies.unwrap().get("express").map(String::as_str),
            Some("^4.18.0")
        );
        assert!(meta.dev_dependencies.unwrap().contains_key("jest"));
    }

    #[test]
    fn test_node_string_repository_and_author() {
        let fs = MemoryFileSystem::new().with_file(
            "/work/my-app/package.json",
            r#"{ "repository": "https://github.com/a/b", "author": "A. Person" }"#,
        );
        let meta = extract(&fs, Ecosystem::Node);
        assert_eq!(meta.repository_url.as_deref(), Some("https://github.com/a/b"));
        assert_eq!(meta.author.as_deref(), Some("A. Person"));
        // No name in the manifest: falls back to the directory name.
        assert_eq!(meta.name.as_deref(), Some("my-app"));
        assert_eq!(meta.license, None);
    }

    #[test]
    fn test_node_malformed_or_missing_is_empty() {
        let fs = MemoryFileSystem::new().with_file("/work/my-app/package.json", "{ not json");
        assert_eq!(extract(&fs, Ecosystem::Node), ManifestMetadata::default());

        let fs = MemoryFileSystem::new().with_dir("/work/my-app");
        assert_eq!(extract(&fs, Ecosystem::Node), ManifestMetadata::default());

        let fs = MemoryFileSystem::new().with_file("/work/my-app/package.json", "[1, 2]");
        assert_eq!(extract(&fs, Ecosystem::Node), ManifestMetadata::default());
    }

    #[test]
    fn test_node_wrongly_typed_field_dropped_alone() {
        let fs = MemoryFileSystem::new().with_file(
            "/work/my-app/package.json",
            r#"{ "name": "ok", "version": 3, "scripts": "nope" }"#,
        );
        let meta = extract(&fs, Ecosystem::Node);
        assert_eq!(meta.name.as_deref(), Some("ok"));
        assert_eq!(meta.version, None);
        assert_eq!(meta.scripts, None);
    }

    #[test]
    fn test_python_directory_name_fallback() {
        let fs = MemoryFileSystem::new().with_file("/work/my-app/requirements.txt", "flask");
        let meta = extract(&fs, Ecosystem::Python);
        assert_eq!(meta.name.as_deref(), Some("my-app"));
        assert_eq!(meta.version, None);
    }

    #[test]
    fn test_python_pep621() {
        let fs = MemoryFileSystem::new().with_file(
            "/work/my-app/pyproject.toml",
            r#"
[project]
name = "py-tool"
version = "0.3.1"
description = "A tool"
license = { text = "MIT" }
authors = [{ name = "Ada", email = "ada@example.com" }]
"#,
        );
        let meta = extract(&fs, Ecosystem::Python);
        assert_eq!(meta.name.as_deref(), Some("py-tool"));
        assert_eq!(meta.version.as_deref(), Some("0.3.1"));
        assert_eq!(meta.description.as_deref(), Some("A tool"));
        assert_eq!(meta.license.as_deref(), Some("MIT"));
        assert_eq!(meta.author.as_deref(), Some("Ada"));
    }

    #[test]
    fn test_python_poetry() {
        let fs = MemoryFileSystem::new().with_file(
            "/work/my-app/pyproject.toml",
            r#"
[tool.poetry]
name = "poetic"
version = "1.0.0"
license = "BSD-3-Clause"
authors = ["Grace <grace@example.com>"]
"#,
        );
        let meta = extract(&fs, Ecosystem::Python);
        assert_eq!(meta.name.as_deref(), Some("poetic"));
        assert_eq!(meta.license.as_deref(), Some("BSD-3-Clause"));
        assert_eq!(meta.author.as_deref(), Some("Grace <grace@example.com>"));
    }

    #[test]
    fn test_python_malformed_pyproject_keeps_name() {
        let fs = MemoryFileSystem::new().with_file("/work/my-app/pyproject.toml", "[project");
        let meta = extract(&fs, Ecosystem::Python);
        assert_eq!(meta.name.as_deref(), Some("my-app"));
    }

    #[test]
    fn test_go_module_line() {
        let fs = MemoryFileSystem::new().with_file(
            "/work/my-app/go.mod",
            "// comment\nmodule github.com/acme/go-service\n\ngo 1.22\n",
        );
        let meta = extract(&fs, Ecosystem::Go);
        assert_eq!(meta.name.as_deref(), Some("github.com/acme/go-service"));
    }

    #[test]
    fn test_go_missing_or_without_module() {
        let fs = MemoryFileSystem::new().with_dir("/work/my-app");
        assert_eq!(extract(&fs, Ecosystem::Go), ManifestMetadata::default());

        let fs = MemoryFileSystem::new().with_file("/work/my-app/go.mod", "go 1.22\n");
        assert_eq!(extract(&fs, Ecosystem::Go).name.as_deref(), Some("my-app"));
    }

    #[test]
    fn test_rust_package_fields_not_confused_by_dependencies() {
        let fs = MemoryFileSystem::new().with_file(
            "/work/my-app/Cargo.toml",
            r#"
[dependencies]
serde = { version = "1.0", features = ["derive"] }

[package]
license = "MIT OR Apache-2.0"
version = "0.4.2"
name = "crate-name"
authors = ["Ferris <ferris@example.com>"]
"#,
        );
        let meta = extract(&fs, Ecosystem::Rust);
        assert_eq!(meta.name.as_deref(), Some("crate-name"));
        assert_eq!(meta.version.as_deref(), Some("0.4.2"));
        assert_eq!(meta.license.as_deref(), Some("MIT OR Apache-2.0"));
        assert_eq!(meta.author.as_deref(), Some("Ferris <ferris@example.com>"));
    }

    #[test]
    fn test_rust_workspace_inherited_fields_ignored() {
        let fs = MemoryFileSystem::new().with_file(
            "/work/my-app/Cargo.toml",
            "[package]\nname = \"member\"\nversion.workspace = true\n",
        );
        let meta = extract(&fs, Ecosystem::Rust);
        assert_eq!(meta.name.as_deref(), Some("member"));
        assert_eq!(meta.version, None);
    }

    #[test]
    fn test_rust_virtual_workspace() {
        let fs = MemoryFileSystem::new().with_file(
            "/work/my-app/Cargo.toml",
            "[workspace]\nmembers = [\"cli\"]\n\n[workspace.package]\nversion = \"0.9.0\"\nlicense = \"MIT\"\n",
        );
        let meta = extract(&fs, Ecosystem::Rust);
        assert_eq!(meta.name.as_deref(), Some("my-app"));
        assert_eq!(meta.version.as_deref(), Some("0.9.0"));
        assert_eq!(meta.license.as_deref(), Some("MIT"));
    }

    #[test]
    fn test_rust_malformed_is_empty() {
        let fs = MemoryFileSystem::new().with_file("/work/my-app/Cargo.toml", "[package\nname=");
        assert_eq!(extract(&fs, Ecosystem::Rust), ManifestMetadata::default());
    }

    #[test]
    fn test_unknown_is_empty() {
        let fs = MemoryFileSystem::new().with_file("/work/my-app/package.json", "{}");
        assert_eq!(extract(&fs, Ecosystem::Unknown), ManifestMetadata::default());
    }
}
