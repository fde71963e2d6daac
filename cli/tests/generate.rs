//! # ReadmeGen Generate Integration Tests
//!
//! File: cli/tests/generate.rs
//!
//! ## Overview
//!
//! End-to-end tests for README generation: writing the output file, printing
//! to stdout, configuration files, badge flags and the path precondition
//! errors.
//!

mod common;
use common::*;
use predicates::prelude::*;
use std::fs;
use tempfile::tempdir;

#[test]
fn test_generate_writes_readme_in_current_dir() {
    let home = tempdir().expect("temp home");
    let project = tempdir().expect("temp project");
    create_node_project(project.path());

    isolated_cmd(home.path())
        .current_dir(project.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("README generated: ").and(predicate::str::contains("README.md")));

    let readme = fs::read_to_string(project.path().join("README.md")).expect("README written");
    assert!(readme.starts_with("# test-project\n\nA test project\n"));
    assert!(readme.contains("npm install"));
    assert!(readme.contains("npm start"));
    assert!(readme.contains("## Available Scripts"));
    assert!(readme.contains("## Project Structure"));
    assert!(readme.contains("MIT License"));
    assert!(readme.contains("### Running Tests"));
    assert!(!readme.contains("node_modules"));
}

#[test]
fn test_generate_stdout_does_not_write() {
    let home = tempdir().expect("temp home");
    let project = tempdir().expect("temp project");
    create_node_project(project.path());

    isolated_cmd(home.path())
        .arg(project.path())
        .arg("--stdout")
        .current_dir(home.path())
        .assert()
        .success()
        .stdout(
            predicate::str::contains("─".repeat(50))
                .and(predicate::str::contains("# test-project"))
                .and(predicate::str::contains("README generated").not()),
        );

    assert!(!project.path().join("README.md").exists());
    assert!(!home.path().join("README.md").exists());
}

#[test]
fn test_no_write_alias() {
    let home = tempdir().expect("temp home");
    let project = tempdir().expect("temp project");
    write_file(project.path(), "go.mod", "module github.com/acme/svc\n\ngo 1.22\n");

    isolated_cmd(home.path())
        .arg(project.path())
        .arg("--no-write")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("# github.com/acme/svc")
                .and(predicate::str::contains("go mod download")),
        );
}

#[test]
fn test_output_flag_relative_to_current_dir() {
    let home = tempdir().expect("temp home");
    let project = tempdir().expect("temp project");
    let work = tempdir().expect("temp workdir");
    write_file(project.path(), "Cargo.toml", "[package]\nname = \"crate-x\"\nversion = \"0.1.0\"\n");

    isolated_cmd(home.path())
        .current_dir(work.path())
        .arg(project.path())
        .args(["-o", "docs/OUT.md"])
        .assert()
        .success();

    let readme = fs::read_to_string(work.path().join("docs/OUT.md")).expect("output written");
    assert!(readme.contains("# crate-x"));
    assert!(readme.contains("cargo build"));
    assert!(!project.path().join("README.md").exists());
}

#[test]
fn test_nonexistent_path_fails() {
    let home = tempdir().expect("temp home");
    isolated_cmd(home.path())
        .arg(home.path().join("does-not-exist"))
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Error: Path does not exist:"));
}

#[test]
fn test_file_path_fails() {
    let home = tempdir().expect("temp home");
    write_file(home.path(), "plain.txt", "not a project");
    isolated_cmd(home.path())
        .arg(home.path().join("plain.txt"))
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Error: Path is not a directory:"));
}

#[test]
fn test_unknown_project_placeholder() {
    let home = tempdir().expect("temp home");
    let project = tempdir().expect("temp project");
    write_file(project.path(), "notes.txt", "");

    isolated_cmd(home.path())
        .arg(project.path())
        .arg("--stdout")
        .assert()
        .success()
        .stdout(predicate::str::contains("Installation instructions coming soon."));
}

#[test]
fn test_project_config_selects_template() {
    let home = tempdir().expect("temp home");
    let project = tempdir().expect("temp project");
    create_node_project(project.path());
    write_file(project.path(), ".readmegen.toml", "template = \"minimal\"\n");

    isolated_cmd(home.path())
        .arg(project.path())
        .arg("--stdout")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("## Installation")
                .and(predicate::str::contains("Project Structure").not())
                .and(predicate::str::contains("Development").not()),
        );

    // CLI flag beats the project config.
    isolated_cmd(home.path())
        .arg(project.path())
        .args(["--stdout", "--template", "detailed"])
        .assert()
        .success()
        .stdout(predicate::str::contains("## Table of Contents"));
}

#[test]
fn test_invalid_project_config_fails() {
    let home = tempdir().expect("temp home");
    let project = tempdir().expect("temp project");
    write_file(project.path(), ".readmegen.toml", "colour = \"red\"\n");

    isolated_cmd(home.path())
        .arg(project.path())
        .arg("--stdout")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Error:"));
}

#[test]
fn test_all_badges_flag() {
    let home = tempdir().expect("temp home");
    let project = tempdir().expect("temp project");
    create_node_project(project.path());

    isolated_cmd(home.path())
        .arg(project.path())
        .args(["--stdout", "--all-badges"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("https://img.shields.io/npm/dm/test-project")
                .and(predicate::str::contains("https://codecov.io/gh/acme/test-project"))
                .and(predicate::str::contains("https://api.codeclimate.com/v1/badges/acme/test-project"))
                .and(predicate::str::contains("![tests]").not()),
        );
}

#[test]
fn test_auto_badges_detect_ci() {
    let home = tempdir().expect("temp home");
    let project = tempdir().expect("temp project");
    create_node_project(project.path());
    write_file(project.path(), ".github/workflows/ci.yml", "on: push\n");

    isolated_cmd(home.path())
        .arg(project.path())
        .args(["--stdout", "--badges"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("https://github.com/acme/test-project/actions/workflows/ci.yml/badge.svg")
                .and(predicate::str::contains("[![License: MIT]"))
                .and(predicate::str::contains("codecov").not()),
        );
}

#[test]
fn test_explicit_provider_beats_auto_detected_badges() {
    let home = tempdir().expect("temp home");
    let project = tempdir().expect("temp project");
    create_node_project(project.path());
    write_file(project.path(), ".github/workflows/ci.yml", "on: push\n");

    isolated_cmd(home.path())
        .arg(project.path())
        .args(["--stdout", "--badges", "--ci", "circleci"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("https://circleci.com/gh/acme/test-project")
                .and(predicate::str::contains("/actions/workflows/ci.yml/badge.svg").not())
                .and(predicate::str::contains("[![License: MIT]")),
        );
}

#[test]
fn test_configured_providers_beat_auto_detected_badges() {
    let home = tempdir().expect("temp home");
    let project = tempdir().expect("temp project");
    create_node_project(project.path());
    write_file(project.path(), ".github/workflows/ci.yml", "on: push\n");
    write_file(project.path(), "codecov.yml", "coverage: {}\n");
    write_file(
        project.path(),
        ".readmegen.toml",
        "[badges]\nci = \"travis\"\ncoverage = \"coveralls\"\n",
    );

    isolated_cmd(home.path())
        .arg(project.path())
        .args(["--stdout", "--badges"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("https://travis-ci.org/acme/test-project")
                .and(predicate::str::contains("https://coveralls.io/github/acme/test-project"))
                .and(predicate::str::contains("/actions/workflows/ci.yml/badge.svg").not())
                .and(predicate::str::contains("https://codecov.io/gh/").not()),
        );
}

#[test]
fn test_project_config_default_depth_beats_user_config() {
    let home = tempdir().expect("temp home");
    let project = tempdir().expect("temp project");
    write_file(
        home.path(),
        ".config/readmegen/config.toml",
        "[tree]\nmax_depth = 6\n",
    );
    write_file(project.path(), ".readmegen.toml", "[tree]\nmax_depth = 3\n");
    write_file(project.path(), "a/b/c/d/deep.txt", "");

    isolated_cmd(home.path())
        .arg(project.path())
        .arg("--stdout")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("── b\n")
                .and(predicate::str::contains("── c\n").not())
                .and(predicate::str::contains("deep.txt").not()),
        );

    // Without the project setting the user depth applies.
    fs::remove_file(project.path().join(".readmegen.toml")).expect("remove project config");
    isolated_cmd(home.path())
        .arg(project.path())
        .arg("--stdout")
        .assert()
        .success()
        .stdout(predicate::str::contains("deep.txt"));
}

#[test]
fn test_verbose_logs_go_to_stderr() {
    let home = tempdir().expect("temp home");
    let project = tempdir().expect("temp project");
    create_node_project(project.path());

    isolated_cmd(home.path())
        .arg(project.path())
        .args(["--stdout", "-v"])
        .assert()
        .success()
        .stderr(predicate::str::contains("Detected project type: node"))
        .stdout(predicate::str::contains("Detected project type").not());
}
