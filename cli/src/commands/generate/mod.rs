//! # ReadmeGen Generate Command
//!
//! File: cli/src/commands/generate/mod.rs
//!
//! ## Overview
//!
//! This module implements the only readmegen command: analyze a project
//! directory and render a README for it. It handles:
//! - Parsing the command-line arguments
//! - Checking that the target path exists and is a directory
//! - Layering CLI flags over the loaded configuration
//! - Running the analyzer and the README composer
//! - Writing the result to a file, or printing it between rules
//!
//! ## Architecture
//!
//! The command flow follows these steps:
//! 1. Resolve the project path against the current directory
//! 2. Fail with `PathNotFound` / `NotADirectory` when it is unusable
//! 3. Load config (`core::config`) and apply CLI overrides
//! 4. `analyzer::analyze_project` builds the `ProjectInfo`
//! 5. `readme::generate_readme` renders the markdown
//! 6. Write `README.md` (or `--output`) or print to stdout with `--stdout`
//!
//! Submodules:
//! - `project`: the `ProjectInfo` / `Ecosystem` model
//! - `analyzer`: orchestration of detection and extraction
//! - `badges`: badge selection and rendering
//! - `readme`: tiers, sections and the final composition
//! - `templates`: built-in Tera section sources
//! - `utils`: detectors, manifest extraction and the tree printer
//!
//! ## Examples
//!
//! ```bash
//! # Write ./README.md for the current directory
//! readmegen
//!
//! # Preview a detailed README for another project without writing anything
//! readmegen ../my-lib --template detailed --stdout
//!
//! # Write to a custom path with auto-detected badges plus a CodeFactor badge
//! readmegen -o docs/README.md --badges --quality codefactor
//! ```
//!
pub mod analyzer;
pub mod badges;
pub mod project;
pub mod readme;
pub mod templates;
pub mod utils;

use self::badges::{BadgeConfig, CiProvider, CoverageProvider, QualityProvider};
use self::readme::Tier;
use self::utils::project_detector;
use crate::common::fs::access::NativeFileSystem;
use crate::common::fs::io;
use crate::core::config::{self, Config};
use crate::core::error::{ReadmeGenError, Result};
use anyhow::Context;
use clap::Parser;
use std::env;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Default output file name, relative to the current directory.
const DEFAULT_OUTPUT: &str = "README.md";
/// Width of the horizontal rules framing `--stdout` output.
const RULE_WIDTH: usize = 50;

/// # Generate Arguments (`GenerateArgs`)
///
/// Command-line arguments for generating a README.
#[derive(Parser, Debug, Default)]
pub struct GenerateArgs {
    /// Path to the project directory.
    #[arg(default_value = ".")]
    pub path: PathBuf,

    /// Output file path [default: README.md]
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Print the README to stdout instead of writing a file.
    #[arg(long, alias = "no-write")]
    pub stdout: bool,

    /// Template tier to render [default: standard]
    #[arg(short, long, value_enum)]
    pub template: Option<Tier>,

    /// Maximum depth of the project structure tree [default: 3]
    #[arg(long, value_parser = clap::value_parser!(u16).range(1..))]
    pub depth: Option<u16>,

    /// Enable badges auto-detected from the project (npm, license, CI, coverage, stars).
    #[arg(long)]
    pub badges: bool,

    /// Include the npm version and downloads badges.
    #[arg(long)]
    pub npm: bool,

    /// Include a CI badge for the given provider.
    #[arg(long, value_enum)]
    pub ci: Option<CiProvider>,

    /// Include a coverage badge for the given provider.
    #[arg(long, value_enum)]
    pub coverage: Option<CoverageProvider>,

    /// Include a code quality badge for the given provider.
    #[arg(long, value_enum)]
    pub quality: Option<QualityProvider>,

    /// Include the GitHub stars badge.
    #[arg(long)]
    pub github: bool,

    /// Enable every badge.
    #[arg(long)]
    pub all_badges: bool,
}

impl GenerateArgs {
    /// Badge toggles given explicitly on the command line.
    fn explicit_badges(&self) -> BadgeConfig {
        BadgeConfig {
            npm: self.npm,
            github: self.github,
            ci: self.ci,
            coverage: self.coverage,
            quality: self.quality,
            ..Default::default()
        }
    }
}

/// Settings for one run after config and CLI flags are combined.
#[derive(Debug, Clone, PartialEq)]
struct ResolvedSettings {
    tier: Tier,
    max_depth: usize,
    output: PathBuf,
    badges: Option<BadgeConfig>,
}

/// # Handle Generate Command (`handle_generate`)
///
/// Entry point called from `main.rs`.
///
/// # Errors
///
/// - `ReadmeGenError::PathNotFound` / `NotADirectory` for an unusable path
/// - configuration load or validation failures
/// - failure to write the output file
pub fn handle_generate(args: GenerateArgs) -> Result<()> {
    let current_dir = env::current_dir().context("Failed to get current directory")?;
    let project_path = resolve_project_path(&current_dir, &args.path)?;
    info!("Analyzing project...");

    let config = config::load_config(&project_path)?;
    let fs = NativeFileSystem::new();
    let settings = resolve_settings(&args, config, &current_dir);
    debug!("Resolved settings: {:?}", settings);

    let project = analyzer::analyze_project(&fs, &project_path, settings.max_depth);
    info!("Detected project type: {}", project.ecosystem);

    // Detected badges sit underneath: configured and explicit providers win.
    let badge_config = settings.badges.map(|config| {
        if args.badges && !args.all_badges {
            let mut detected = BadgeConfig::auto_detect(
                &project,
                project_detector::has_ci_workflows(&fs, &project_path),
                project_detector::has_coverage_config(&fs, &project_path),
            );
            detected.merge(&config);
            detected
        } else {
            config
        }
    });

    let markdown = readme::generate_readme(&project, settings.tier, badge_config.as_ref())?;

    if args.stdout {
        let rule = "─".repeat(RULE_WIDTH);
        println!("\n{}\n", rule);
        println!("{}", markdown);
        println!("{}", rule);
    } else {
        io::write_string_to_file(&settings.output, &markdown).with_context(|| {
            format!("Failed to write README to {}", settings.output.display())
        })?;
        println!("README generated: {}", settings.output.display());
    }
    Ok(())
}

/// Makes `path` absolute and checks that it is an existing directory.
fn resolve_project_path(current_dir: &Path, path: &Path) -> Result<PathBuf> {
    let absolute = current_dir.join(path);
    if !absolute.exists() {
        return Err(ReadmeGenError::PathNotFound { path: absolute }.into());
    }
    if !absolute.is_dir() {
        return Err(ReadmeGenError::NotADirectory { path: absolute }.into());
    }
    // Canonical form so `.` and `..` resolve to a real directory name.
    absolute
        .canonicalize()
        .with_context(|| format!("Failed to resolve path {}", absolute.display()))
}

/// CLI flags override config values, which override built-in defaults. The
/// badge selection stays `None` (built-in summary badges) unless the config
/// or a badge flag asks for something.
fn resolve_settings(args: &GenerateArgs, config: Config, current_dir: &Path) -> ResolvedSettings {
    let tier = args.template.or(config.template).unwrap_or_default();
    let max_depth = args
        .depth
        .map(usize::from)
        .unwrap_or_else(|| config.tree.max_depth());

    let output = match (&args.output, &config.output) {
        (Some(cli_output), _) => {
            PathBuf::from(shellexpand::tilde(&cli_output.to_string_lossy()).into_owned())
        }
        (None, Some(config_output)) => PathBuf::from(config_output),
        (None, None) => PathBuf::from(DEFAULT_OUTPUT),
    };
    let output = current_dir.join(output);

    let badges = if args.all_badges {
        Some(BadgeConfig::all())
    } else {
        let explicit = args.explicit_badges();
        let wants_badges = args.badges || !explicit.is_empty();
        match config.badges {
            Some(mut configured) => {
                configured.merge(&explicit);
                Some(configured)
            }
            None if wants_badges => Some(explicit),
            None => None,
        }
    };

    ResolvedSettings {
        tier,
        max_depth,
        output,
        badges,
    }
}
