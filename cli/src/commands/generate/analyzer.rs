//! # ReadmeGen Project Analyzer
//!
//! File: cli/src/commands/generate/analyzer.rs
//!
//! ## Overview
//!
//! Orchestrates the detectors and the manifest extractor into a single
//! `ProjectInfo` record:
//!
//! 1. name ← directory base name
//! 2. ecosystem ← `detect_ecosystem` (decided once, never revisited)
//! 3. license ← `detect_license`
//! 4. file tree ← `render_tree`
//! 5. has_tests ← `has_tests`
//! 6. manifest metadata merged over the above (present fields only)
//!
//! Analysis always succeeds. The caller is responsible for checking that the
//! path exists and is a directory before calling in.
//!
use super::project::ProjectInfo;
use super::utils::{metadata, project_detector, tree_printer};
use crate::common::fs::access::FileSystem;
use std::path::Path;
use tracing::{debug, info};

/// # Analyze Project (`analyze_project`)
///
/// Builds the `ProjectInfo` for the directory at `project_path`, rendering the
/// file tree with `max_depth`.
pub fn analyze_project(fs: &dyn FileSystem, project_path: &Path, max_depth: usize) -> ProjectInfo {
    info!("Analyzing project at {}", project_path.display());

    let dir_name = project_path
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| "project".to_string());

    let ecosystem = project_detector::detect_ecosystem(fs, project_path);
    let mut project = ProjectInfo::new(ecosystem, dir_name);
    project.license = project_detector::detect_license(fs, project_path);
    project.file_tree = tree_printer::render_tree(fs, project_path, max_depth);
    project.has_tests = project_detector::has_tests(fs, project_path);

    let manifest = metadata::extract_metadata(fs, project_path, ecosystem);
    debug!("Manifest metadata: {:?}", manifest);
    project.apply_metadata(manifest);

    info!(
        "Detected {} project '{}' (tests: {})",
        project.ecosystem, project.name, project.has_tests
    );
    project
}
