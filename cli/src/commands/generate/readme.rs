//! # ReadmeGen README Composer
//!
//! File: cli/src/commands/generate/readme.rs
//!
//! ## Overview
//!
//! Turns a `ProjectInfo` into the final markdown document. A template `Tier`
//! selects an ordered list of `Section`s; each section is rendered from its
//! named template in a shared registry (see `templates.rs`) and the results are
//! joined with blank lines.
//!
//! ## Architecture
//!
//! | Tier | Sections |
//! |---|---|
//! | minimal | Title, Description, Installation, Usage, License (short form) |
//! | standard | + Badges, Available Scripts, Project Structure, Development |
//! | detailed | + Table of Contents, Features, Examples, API Documentation, Troubleshooting |
//! | comprehensive | + About, Prerequisites, Deployment, Roadmap, Changelog, Authors, Acknowledgments |
//!
//! Each tier's headings are a superset of the previous tier's. Sections that
//! depend on optional data are left out entirely when the data is missing:
//!
//! - Description: needs `description`
//! - Badges: needs at least one rendered badge
//! - Available Scripts: needs a non-empty `scripts` map
//! - License: needs `license`
//! - Authors: needs `author`
//! - "Running Tests" (inside Development): needs `has_tests`
//!
//! The Table of Contents is rendered last, once the set of other `##`
//! sections is known, and then put back in its slot.
//!
//! Ecosystem-specific commands come from a single lookup over `Ecosystem`, so
//! adding an ecosystem is a compile error until every command is decided.
//!
use super::badges::{generate_badges, BadgeConfig, BadgeOptions};
use super::project::{Ecosystem, ProjectInfo};
use super::templates::SECTION_TEMPLATES;
use crate::core::error::{ReadmeGenError, Result};
use crate::core::templating::TemplateRegistry;
use anyhow::anyhow;
use clap::ValueEnum;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use tracing::debug;

/// Registry of all section templates, parsed once per process.
static SECTION_REGISTRY: Lazy<Result<TemplateRegistry>> =
    Lazy::new(|| TemplateRegistry::from_sources(SECTION_TEMPLATES));

/// The README layout to generate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Tier {
    Minimal,
    #[default]
    Standard,
    Detailed,
    Comprehensive,
}

impl Tier {
    /// Ordered section list for this tier.
    pub fn sections(self) -> &'static [Section] {
        use Section::*;
        match self {
            Tier::Minimal => &[Title, Description, Installation, Usage, License],
            Tier::Standard => &[
                Title,
                Description,
                Badges,
                Installation,
                Usage,
                Scripts,
                ProjectStructure,
                Development,
                License,
            ],
            Tier::Detailed => &[
                Title,
                Description,
                Badges,
                TableOfContents,
                Features,
                Installation,
                Usage,
                Examples,
                Scripts,
                ApiDocumentation,
                ProjectStructure,
                Development,
                Troubleshooting,
                License,
            ],
            Tier::Comprehensive => &[
                Title,
                Description,
                Badges,
                TableOfContents,
                About,
                Features,
                Prerequisites,
                Installation,
                Usage,
                Examples,
                Scripts,
                ApiDocumentation,
                ProjectStructure,
                Development,
                Deployment,
                Troubleshooting,
                Roadmap,
                Changelog,
                Authors,
                Acknowledgments,
                License,
            ],
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Tier::Minimal => "minimal",
            Tier::Standard => "standard",
            Tier::Detailed => "detailed",
            Tier::Comprehensive => "comprehensive",
        };
        f.write_str(name)
    }
}

/// A named README section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Title,
    Description,
    Badges,
    TableOfContents,
    About,
    Features,
    Prerequisites,
    Installation,
    Usage,
    Examples,
    Scripts,
    ApiDocumentation,
    ProjectStructure,
    Development,
    Deployment,
    Troubleshooting,
    Roadmap,
    Changelog,
    Authors,
    Acknowledgments,
    License,
}

impl Section {
    fn template_name(self) -> &'static str {
        match self {
            Section::Title => "title.md",
            Section::Description => "description.md",
            Section::Badges => "badges.md",
            Section::TableOfContents => "table_of_contents.md",
            Section::About => "about.md",
            Section::Features => "features.md",
            Section::Prerequisites => "prerequisites.md",
            Section::Installation => "installation.md",
            Section::Usage => "usage.md",
            Section::Examples => "examples.md",
            Section::Scripts => "scripts.md",
            Section::ApiDocumentation => "api_documentation.md",
            Section::ProjectStructure => "project_structure.md",
            Section::Development => "development.md",
            Section::Deployment => "deployment.md",
            Section::Troubleshooting => "troubleshooting.md",
            Section::Roadmap => "roadmap.md",
            Section::Changelog => "changelog.md",
            Section::Authors => "authors.md",
            Section::Acknowledgments => "acknowledgments.md",
            Section::License => "license.md",
        }
    }

    /// The `##` heading text, for sections that have one.
    fn heading(self) -> Option<&'static str> {
        match self {
            Section::Title | Section::Description | Section::Badges => None,
            Section::TableOfContents => Some("Table of Contents"),
            Section::About => Some("About"),
            Section::Features => Some("Features"),
            Section::Prerequisites => Some("Prerequisites"),
            Section::Installation => Some("Installation"),
            Section::Usage => Some("Usage"),
            Section::Examples => Some("Examples"),
            Section::Scripts => Some("Available Scripts"),
            Section::ApiDocumentation => Some("API Documentation"),
            Section::ProjectStructure => Some("Project Structure"),
            Section::Development => Some("Development"),
            Section::Deployment => Some("Deployment"),
            Section::Troubleshooting => Some("Troubleshooting"),
            Section::Roadmap => Some("Roadmap"),
            Section::Changelog => Some("Changelog"),
            Section::Authors => Some("Authors"),
            Section::Acknowledgments => Some("Acknowledgments"),
            Section::License => Some("License"),
        }
    }
}

/// Shell commands and prose that differ per ecosystem.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct EcosystemCommands {
    install: Option<&'static str>,
    run: Option<&'static str>,
    test: Option<&'static str>,
    build: Option<&'static str>,
    api_docs: Option<&'static str>,
    prerequisite: Option<&'static str>,
    label: &'static str,
}

fn ecosystem_commands(info: &ProjectInfo) -> EcosystemCommands {
    match info.ecosystem {
        Ecosystem::Node => EcosystemCommands {
            install: Some("npm install"),
            run: Some(if info.has_script("start") {
                "npm start"
            } else {
                "node index.js"
            }),
            test: Some("npm test"),
            build: info.has_script("build").then_some("npm run build"),
            api_docs: None,
            prerequisite: Some("Node.js and npm"),
            label: "Node.js",
        },
        Ecosystem::Python => EcosystemCommands {
            install: Some("pip install -r requirements.txt"),
            run: Some("python main.py"),
            test: Some("pytest"),
            build: None,
            api_docs: None,
            prerequisite: Some("Python 3 and pip"),
            label: "Python",
        },
        Ecosystem::Go => EcosystemCommands {
            install: Some("go mod download"),
            run: Some("go run main.go"),
            test: Some("go test ./..."),
            build: Some("go build ./..."),
            api_docs: Some("go doc -all"),
            prerequisite: Some("Go toolchain"),
            label: "Go",
        },
        Ecosystem::Rust => EcosystemCommands {
            install: Some("cargo build"),
            run: Some("cargo run"),
            test: Some("cargo test"),
            build: Some("cargo build --release"),
            api_docs: Some("cargo doc --open"),
            prerequisite: Some("Rust toolchain (rustup)"),
            label: "Rust",
        },
        Ecosystem::Unknown => EcosystemCommands {
            install: None,
            run: None,
            test: None,
            build: None,
            api_docs: None,
            prerequisite: None,
            label: "software",
        },
    }
}

/// Everything the section templates can reference. All keys are always
/// present; optional values serialize as `null` and are falsy in `{% if %}`.
#[derive(Serialize)]
struct SectionContext<'a> {
    name: &'a str,
    description: Option<&'a str>,
    version: Option<&'a str>,
    license: Option<&'a str>,
    author: Option<&'a str>,
    ecosystem_label: &'static str,
    install: Option<&'static str>,
    run: Option<&'static str>,
    test_command: Option<&'static str>,
    build_command: Option<&'static str>,
    api_docs: Option<&'static str>,
    prerequisite: Option<&'static str>,
    has_tests: bool,
    scripts: BTreeMap<&'a str, &'a str>,
    file_tree: &'a str,
    badges: &'a str,
    short_license: bool,
    toc: Vec<TocEntry>,
}

impl<'a> SectionContext<'a> {
    fn new(info: &'a ProjectInfo, tier: Tier, badges: &'a str) -> Self {
        let commands = ecosystem_commands(info);
        SectionContext {
            name: &info.name,
            description: info.description.as_deref(),
            version: info.version.as_deref(),
            license: info.license.as_deref(),
            author: info.author.as_deref(),
            ecosystem_label: commands.label,
            install: commands.install,
            run: commands.run,
            test_command: commands.test,
            build_command: commands.build,
            api_docs: commands.api_docs,
            prerequisite: commands.prerequisite,
            has_tests: info.has_tests,
            scripts: info
                .scripts
                .iter()
                .flatten()
                .map(|(k, v)| (k.as_str(), v.as_str()))
                .collect(),
            file_tree: &info.file_tree,
            badges,
            short_license: tier == Tier::Minimal,
            toc: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
struct TocEntry {
    title: &'static str,
    anchor: String,
}

impl TocEntry {
    fn new(title: &'static str) -> Self {
        TocEntry {
            title,
            anchor: heading_anchor(title),
        }
    }
}

/// GitHub-style anchor: lowercase, spaces to hyphens, punctuation dropped.
fn heading_anchor(heading: &str) -> String {
    heading
        .chars()
        .filter_map(|c| match c {
            ' ' => Some('-'),
            '-' | '_' => Some(c),
            c if c.is_alphanumeric() => Some(c.to_ascii_lowercase()),
            _ => None,
        })
        .collect()
}

/// Built-in summary badges used when no `BadgeConfig` is given.
fn default_badges(info: &ProjectInfo) -> String {
    let mut badges = Vec::new();
    if info.ecosystem == Ecosystem::Node && info.version.is_some() {
        badges.push(format!(
            "![npm version](https://img.shields.io/npm/v/{})",
            info.name
        ));
    }
    if let Some(license) = info.license.as_deref() {
        badges.push(format!(
            "![license](https://img.shields.io/badge/license-{}-blue)",
            urlencoding::encode(license)
        ));
    }
    if info.has_tests {
        badges.push("![tests](https://img.shields.io/badge/tests-passing-green)".to_string());
    }
    badges.join(" ")
}

fn is_included(section: Section, info: &ProjectInfo, badges: &str) -> bool {
    match section {
        Section::Description => info
            .description
            .as_deref()
            .is_some_and(|d| !d.trim().is_empty()),
        Section::Badges => !badges.is_empty(),
        Section::Scripts => info.has_scripts(),
        Section::License => info.license.is_some(),
        Section::Authors => info.author.is_some(),
        _ => true,
    }
}

fn section_registry() -> Result<&'static TemplateRegistry> {
    SECTION_REGISTRY
        .as_ref()
        .map_err(|e| anyhow!("Built-in README templates failed to load: {:#}", e))
}

/// # Generate README (`generate_readme`)
///
/// Renders the README for `info` using the sections of `tier`. With
/// `badges = None` the built-in summary badges are used; with a config, the
/// badge composer decides. Only fails if a built-in template fails to render.
pub fn generate_readme(
    info: &ProjectInfo,
    tier: Tier,
    badges: Option<&BadgeConfig>,
) -> Result<String> {
    let registry = section_registry()?;

    let badge_line = match badges {
        Some(config) => generate_badges(config, &BadgeOptions::from_project(info)),
        None => default_badges(info),
    };
    let badge_line = badge_line.trim_end();

    let mut context = tera::Context::from_serialize(SectionContext::new(info, tier, badge_line))
        .map_err(|e| anyhow!(ReadmeGenError::Template { source: e }))?;

    let mut rendered: Vec<(Section, String)> = Vec::new();
    for &section in tier.sections() {
        if !is_included(section, info, badge_line) {
            debug!("Omitting section {:?}: no data", section);
            continue;
        }
        let body = if section == Section::TableOfContents {
            // Filled in once the other sections are known.
            String::new()
        } else {
            registry
                .render(section.template_name(), &context)?
                .trim_end()
                .to_string()
        };
        rendered.push((section, body));
    }

    if let Some(slot) = rendered
        .iter()
        .position(|(section, _)| *section == Section::TableOfContents)
    {
        let toc: Vec<TocEntry> = rendered
            .iter()
            .filter(|(section, _)| *section != Section::TableOfContents)
            .filter_map(|(section, _)| section.heading())
            .map(TocEntry::new)
            .collect();
        context.insert("toc", &toc);
        rendered[slot].1 = registry
            .render(Section::TableOfContents.template_name(), &context)?
            .trim_end()
            .to_string();
    }

    debug!("Composed {} section(s) for tier {}", rendered.len(), tier);
    let mut readme = rendered
        .into_iter()
        .map(|(_, body)| body)
        .collect::<Vec<_>>()
        .join("\n\n");
    readme.push('\n');
    Ok(readme)
}
