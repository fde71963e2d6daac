//! # ReadmeGen Configuration System
//!
//! File: cli/src/core/config.rs
//!
//! ## Overview
//!
//! This module implements the configuration system for readmegen: loading,
//! merging, path expansion and validation. Configuration supplies defaults
//! for the CLI flags so a project (or a user) can pin a template tier, an
//! output path, a tree depth and a badge selection once instead of passing
//! flags on every run.
//!
//! ## Architecture
//!
//! Configuration sources, lowest to highest precedence:
//! 1. Default values defined in the code
//! 2. User-specific `config.toml` in the platform config directory
//!    (`~/.config/readmegen/config.toml` on Linux)
//! 3. Project-specific `.readmegen.toml` in the analyzed project directory
//! 4. Command-line flags (applied by the generate command, not here)
//!
//! Unknown keys are rejected so typos surface as errors instead of being
//! silently ignored. Application settings are never read from environment
//! variables.
//!
//! ## Examples
//!
//! ```toml
//! # .readmegen.toml
//! template = "detailed"
//! output = "docs/README.md"
//!
//! [tree]
//! max_depth = 4
//!
//! [badges]
//! license = true
//! ci = "github-actions"
//! ```
//!
//! ```rust
//! let cfg = config::load_config(&project_path)?;
//! let depth = cfg.tree.max_depth();
//! ```
//!
use crate::commands::generate::badges::BadgeConfig;
use crate::commands::generate::readme::Tier;
use crate::commands::generate::utils::tree_printer::DEFAULT_MAX_DEPTH;
use crate::common::fs::io;
use crate::core::error::{ReadmeGenError, Result};
use anyhow::{anyhow, Context};
use directories::ProjectDirs;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Represents the main configuration structure, loaded from TOML files.
#[derive(Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Template tier (`minimal`, `standard`, `detailed`, `comprehensive`).
    #[serde(default)]
    pub template: Option<Tier>,
    /// Output file path (can use ~). Will be expanded.
    #[serde(default)]
    pub output: Option<String>,
    #[serde(default)]
    pub tree: TreeConfig,
    /// Badge selection. Absent means "use the built-in summary badges".
    #[serde(default)]
    pub badges: Option<BadgeConfig>,
}

/// Settings for the "Project Structure" tree. Unset values stay `None` until
/// all sources are merged.
#[derive(Deserialize, Debug, Default, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct TreeConfig {
    #[serde(default)]
    pub max_depth: Option<usize>,
}

impl TreeConfig {
    /// Effective depth, falling back to `DEFAULT_MAX_DEPTH`.
    pub fn max_depth(&self) -> usize {
        self.max_depth.unwrap_or(DEFAULT_MAX_DEPTH)
    }
}

const USER_CONFIG_FILENAME: &str = "config.toml";
pub const PROJECT_CONFIG_FILENAME: &str = ".readmegen.toml";

/// Loads, merges, expands and validates the configuration for a run over
/// `project_dir`.
pub fn load_config(project_dir: &Path) -> Result<Config> {
    load_config_from(user_config_path().as_deref(), project_dir)
}

/// Same as `load_config` with an explicit user config location.
fn load_config_from(user_config: Option<&Path>, project_dir: &Path) -> Result<Config> {
    let user_config = match user_config {
        Some(path) => load_optional_config(path, "user")?,
        None => None,
    };
    let project_config =
        load_optional_config(&project_dir.join(PROJECT_CONFIG_FILENAME), "project")?;
    let mut merged_config = merge_configs(user_config.unwrap_or_default(), project_config);
    expand_config_paths(&mut merged_config).context("Failed to expand paths in configuration")?;
    validate_config(&merged_config).context("Configuration validation failed")?;
    debug!("Final loaded configuration: {:?}", merged_config);
    Ok(merged_config)
}

fn user_config_path() -> Option<PathBuf> {
    match ProjectDirs::from("com", "readmegen", "readmegen") {
        Some(proj_dirs) => Some(proj_dirs.config_dir().join(USER_CONFIG_FILENAME)),
        None => {
            warn!("Could not determine user config directory.");
            None
        }
    }
}

fn load_optional_config(path: &Path, kind: &str) -> Result<Option<Config>> {
    if path.is_file() {
        info!("Loading {} configuration from: {}", kind, path.display());
        load_config_from_path(path).map(Some)
    } else {
        debug!("No {} configuration file at {}", kind, path.display());
        Ok(None)
    }
}

fn load_config_from_path(path: &Path) -> Result<Config> {
    let content = io::read_file_to_string(path)
        .with_context(|| format!("Failed to read configuration file: {}", path.display()))?;
    toml::from_str(&content).map_err(|e| {
        anyhow!(ReadmeGenError::Config(format!(
            "Failed to parse TOML from file {}: {}",
            path.display(),
            e
        )))
    })
}

/// Project values win over user values; badge selections are layered.
fn merge_configs(user: Config, project: Option<Config>) -> Config {
    let project_cfg = match project {
        Some(p) => p,
        None => return user,
    };
    let mut merged = Config::default();
    merged.template = project_cfg.template.or(user.template);
    merged.output = project_cfg.output.or(user.output);
    merged.tree.max_depth = project_cfg.tree.max_depth.or(user.tree.max_depth);
    merged.badges = match (user.badges, project_cfg.badges) {
        (Some(mut user_badges), Some(project_badges)) => {
            user_badges.merge(&project_badges);
            Some(user_badges)
        }
        (user_badges, project_badges) => project_badges.or(user_badges),
    };
    merged
}

fn expand_config_paths(config: &mut Config) -> Result<()> {
    if let Some(output) = config.output.as_mut() {
        *output = shellexpand::tilde(output.as_str()).into_owned();
        debug!("Expanded output path: {}", output);
    }
    Ok(())
}

fn validate_config(config: &Config) -> Result<()> {
    debug!("Validating final configuration...");
    if config.tree.max_depth == Some(0) {
        return Err(anyhow!(ReadmeGenError::Config(
            "tree.max_depth must be at least 1.".to_string()
        )));
    }
    if let Some(output) = &config.output {
        if output.trim().is_empty() {
            return Err(anyhow!(ReadmeGenError::Config(
                "output cannot be an empty path.".to_string()
            )));
        }
    }
    Ok(())
}
