//! # ReadmeGen Badge Composer
//!
//! File: cli/src/commands/generate/badges.rs
//!
//! ## Overview
//!
//! Renders the single line of markdown badges shown under the README title.
//! Which badges appear is decided by a `BadgeConfig` (a set of independent
//! toggles); the values they need come from `BadgeOptions` (package name,
//! GitHub `owner/repo` slug, license).
//!
//! ## Architecture
//!
//! Badges are emitted in a fixed order regardless of how the config was built:
//!
//! 1. npm version
//! 2. npm downloads
//! 3. license
//! 4. CI (GitHub Actions, CircleCI or Travis)
//! 5. coverage (Codecov or Coveralls)
//! 6. code quality (Code Climate or CodeFactor)
//! 7. GitHub stars
//!
//! A toggled badge whose required option is missing is skipped silently, so
//! the result may be empty even when toggles are on. The caller omits the
//! badge section entirely when the result is empty.
//!
//! ## Examples
//!
//! ```rust
//! let config = BadgeConfig { license: true, ..Default::default() };
//! let options = BadgeOptions { license: Some("MIT".into()), ..Default::default() };
//! let line = generate_badges(&config, &options);
//! // "[![License: MIT](https://img.shields.io/badge/License-MIT-yellow.svg)](https://opensource.org/licenses/MIT)\n"
//! ```
//!
use super::project::{Ecosystem, ProjectInfo};
use clap::ValueEnum;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Deserialize;
use tracing::debug;

/// `github.com/owner/repo` or `github.com:owner/repo`, optional `.git` suffix.
static GITHUB_SLUG_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"github\.com[:/]([^/]+/[^/]+?)(?:\.git)?/?$").expect("github slug regex is valid")
});

/// Permissive licenses rendered with a yellow badge.
const YELLOW_LICENSES: [&str; 5] = ["MIT", "Apache-2.0", "BSD-3-Clause", "BSD-2-Clause", "ISC"];
/// Copyleft licenses rendered with a blue badge.
const BLUE_LICENSES: [&str; 4] = ["GPL-3.0", "GPL-2.0", "AGPL-3.0", "LGPL-3.0"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum CiProvider {
    GithubActions,
    Circleci,
    Travis,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum CoverageProvider {
    Codecov,
    Coveralls,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum QualityProvider {
    Codeclimate,
    Codefactor,
}

/// # Badge Configuration (`BadgeConfig`)
///
/// Independent badge toggles. Deserializable from the `[badges]` table of a
/// config file:
///
/// ```toml
/// [badges]
/// npm = true
/// license = true
/// ci = "github-actions"
/// coverage = "codecov"
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BadgeConfig {
    /// Shorthand for both `version` and `downloads`.
    pub npm: bool,
    pub version: bool,
    pub downloads: bool,
    pub license: bool,
    /// GitHub stars badge.
    pub github: bool,
    pub ci: Option<CiProvider>,
    pub coverage: Option<CoverageProvider>,
    pub quality: Option<QualityProvider>,
}

impl BadgeConfig {
    /// Every badge enabled, using GitHub Actions, Codecov and Code Climate.
    pub fn all() -> Self {
        BadgeConfig {
            npm: true,
            version: true,
            downloads: true,
            license: true,
            github: true,
            ci: Some(CiProvider::GithubActions),
            coverage: Some(CoverageProvider::Codecov),
            quality: Some(QualityProvider::Codeclimate),
        }
    }

    /// Picks badges that make sense for the analyzed project: npm badges for
    /// node projects, license and stars always, CI when GitHub workflows exist,
    /// Codecov when a codecov config exists. Never a quality badge.
    pub fn auto_detect(info: &ProjectInfo, has_ci: bool, has_coverage: bool) -> Self {
        let is_node = info.ecosystem == Ecosystem::Node;
        BadgeConfig {
            npm: is_node,
            version: is_node,
            downloads: is_node,
            license: true,
            github: true,
            ci: has_ci.then_some(CiProvider::GithubActions),
            coverage: has_coverage.then_some(CoverageProvider::Codecov),
            quality: None,
        }
    }

    /// True when no toggle is on.
    pub fn is_empty(&self) -> bool {
        *self == BadgeConfig::default()
    }

    /// Layers `other` over `self`: toggles are OR-ed, providers set in
    /// `other` replace those in `self`.
    pub fn merge(&mut self, other: &BadgeConfig) {
        self.npm |= other.npm;
        self.version |= other.version;
        self.downloads |= other.downloads;
        self.license |= other.license;
        self.github |= other.github;
        if other.ci.is_some() {
            self.ci = other.ci;
        }
        if other.coverage.is_some() {
            self.coverage = other.coverage;
        }
        if other.quality.is_some() {
            self.quality = other.quality;
        }
    }
}

/// Values the badges are rendered with. Any field may be absent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BadgeOptions {
    pub package_name: Option<String>,
    /// GitHub `owner/repo`.
    pub repo_slug: Option<String>,
    pub license: Option<String>,
}

impl BadgeOptions {
    /// Derives options from an analyzed project. The package name is only
    /// meaningful on npm, so it is set for node projects only.
    pub fn from_project(info: &ProjectInfo) -> Self {
        BadgeOptions {
            package_name: (info.ecosystem == Ecosystem::Node).then(|| info.name.clone()),
            repo_slug: info.repository_url.as_deref().and_then(parse_repo_slug),
            license: info.license.clone(),
        }
    }
}

/// # Generate Badges (`generate_badges`)
///
/// Renders the enabled badges joined by single spaces, with a trailing
/// newline. Returns an empty string when no badge could be rendered.
pub fn generate_badges(config: &BadgeConfig, options: &BadgeOptions) -> String {
    let mut badges: Vec<String> = Vec::new();
    let package = options.package_name.as_deref();
    let repo = options.repo_slug.as_deref();

    if let Some(pkg) = package {
        if config.npm || config.version {
            badges.push(format!(
                "[![npm version](https://img.shields.io/npm/v/{pkg})](https://www.npmjs.com/package/{pkg})"
            ));
        }
        if config.npm || config.downloads {
            badges.push(format!(
                "[![npm downloads](https://img.shields.io/npm/dm/{pkg})](https://www.npmjs.com/package/{pkg})"
            ));
        }
    }

    if config.license {
        if let Some(license) = options.license.as_deref() {
            badges.push(format!(
                "[![License: {license}](https://img.shields.io/badge/License-{}-{}.svg)](https://opensource.org/licenses/{license})",
                urlencoding::encode(license),
                license_color(license)
            ));
        }
    }

    if let Some(repo) = repo {
        if let Some(ci) = config.ci {
            badges.push(ci_badge(ci, repo));
        }
        if let Some(coverage) = config.coverage {
            badges.push(coverage_badge(coverage, repo));
        }
        if let Some(quality) = config.quality {
            badges.push(quality_badge(quality, repo));
        }
        if config.github {
            badges.push(format!(
                "[![GitHub stars](https://img.shields.io/github/stars/{repo}?style=social)](https://github.com/{repo})"
            ));
        }
    }

    debug!("Rendered {} badge(s)", badges.len());
    if badges.is_empty() {
        String::new()
    } else {
        format!("{}\n", badges.join(" "))
    }
}

fn ci_badge(provider: CiProvider, repo: &str) -> String {
    match provider {
        CiProvider::GithubActions => format!(
            "[![CI](https://github.com/{repo}/actions/workflows/ci.yml/badge.svg)](https://github.com/{repo}/actions)"
        ),
        CiProvider::Circleci => format!(
            "[![CircleCI](https://circleci.com/gh/{repo}.svg?style=shield)](https://circleci.com/gh/{repo})"
        ),
        CiProvider::Travis => format!(
            "[![Build Status](https://travis-ci.org/{repo}.svg?branch=main)](https://travis-ci.org/{repo})"
        ),
    }
}

fn coverage_badge(provider: CoverageProvider, repo: &str) -> String {
    match provider {
        CoverageProvider::Codecov => format!(
            "[![codecov](https://codecov.io/gh/{repo}/branch/main/graph/badge.svg)](https://codecov.io/gh/{repo})"
        ),
        CoverageProvider::Coveralls => format!(
            "[![Coverage Status](https://coveralls.io/repos/github/{repo}/badge.svg?branch=main)](https://coveralls.io/github/{repo}?branch=main)"
        ),
    }
}

fn quality_badge(provider: QualityProvider, repo: &str) -> String {
    match provider {
        QualityProvider::Codeclimate => format!(
            "[![Maintainability](https://api.codeclimate.com/v1/badges/{repo}/maintainability)](https://codeclimate.com/github/{repo}/maintainability)"
        ),
        QualityProvider::Codefactor => format!(
            "[![CodeFactor](https://www.codefactor.io/repository/github/{repo}/badge)](https://www.codefactor.io/repository/github/{repo})"
        ),
    }
}

fn license_color(license: &str) -> &'static str {
    if YELLOW_LICENSES.contains(&license) {
        "yellow"
    } else if BLUE_LICENSES.contains(&license) {
        "blue"
    } else {
        "green"
    }
}

/// # Parse Repository Slug (`parse_repo_slug`)
///
/// Extracts `owner/repo` from a GitHub URL. Accepts `https://`, `git+https://`
/// and `git@github.com:` forms with or without a `.git` suffix. Any other
/// host yields `None`.
pub fn parse_repo_slug(url: &str) -> Option<String> {
    GITHUB_SLUG_RE
        .captures(url.trim())
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
}
