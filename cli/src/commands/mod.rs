//! # ReadmeGen Command Modules
//!
//! File: cli/src/commands/mod.rs
//!
//! ## Overview
//!
//! Aggregates the command implementations of the readmegen CLI so the entry
//! point (`main.rs`) can reach them. There is a single command group today:
//!
//! - `generate`: analyze a project directory and render its README
//!

/// Project analysis and README generation. Its arguments are flattened into the top-level CLI.
pub mod generate;
