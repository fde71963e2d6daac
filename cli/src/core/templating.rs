//! # ReadmeGen Template System
//!
//! File: cli/src/core/templating.rs
//!
//! ## Overview
//!
//! A small wrapper around the Tera templating engine holding a fixed set of
//! named, in-memory templates. The README composer registers one template per
//! section and renders each with a context built from the analyzed project.
//!
//! ## Architecture
//!
//! - Templates are registered from `(name, source)` pairs in one go; a syntax
//!   error in any of them fails the whole registry.
//! - Names should end in `.md`. Tera only autoescapes `.html`, `.htm` and
//!   `.xml` templates, so markdown output is never HTML-escaped.
//! - Rendering errors are wrapped in `ReadmeGenError::Template` with the
//!   template name attached as context.
//!
//! ## Examples
//!
//! ```rust
//! let registry = TemplateRegistry::from_sources(&[("title.md", "# {{ name }}")])?;
//! let mut context = tera::Context::new();
//! context.insert("name", "my-app");
//! assert_eq!(registry.render("title.md", &context)?, "# my-app");
//! ```
//!
use crate::core::error::{ReadmeGenError, Result};
use anyhow::{anyhow, Context};
use tera::Tera;
use tracing::debug;

/// A set of named templates ready to render.
pub struct TemplateRegistry {
    tera: Tera,
}

impl TemplateRegistry {
    /// Parses and registers every `(name, source)` pair.
    pub fn from_sources(sources: &[(&str, &str)]) -> Result<Self> {
        let mut tera = Tera::default();
        tera.add_raw_templates(sources.iter().copied())
            .map_err(|e| {
                anyhow!(ReadmeGenError::Template { source: e })
                    .context("Failed to register built-in templates")
            })?;
        debug!("Registered {} template(s)", sources.len());
        Ok(TemplateRegistry { tera })
    }

    /// Renders the template registered under `name`.
    pub fn render(&self, name: &str, context: &tera::Context) -> Result<String> {
        self.tera
            .render(name, context)
            .map_err(|e| anyhow!(ReadmeGenError::Template { source: e }))
            .with_context(|| format!("Tera rendering failed for template '{}'", name))
    }

    /// Whether a template with this name is registered.
    #[cfg(test)]
    pub fn contains(&self, name: &str) -> bool {
        self.tera.get_template_names().any(|n| n == name)
    }
}
