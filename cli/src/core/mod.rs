//! # ReadmeGen Core Infrastructure
//!
//! File: cli/src/core/mod.rs
//!
//! ## Overview
//!
//! This module aggregates the core infrastructure components used by the
//! generate command:
//! - `config`: Configuration loading, merging, and validation
//! - `error`: Error types and error handling utilities
//! - `templating`: The named Tera template registry used for README sections
//!
//! ```rust
//! use crate::core::config; // For loading configuration
//! use crate::core::error::{ReadmeGenError, Result}; // For error handling
//! use crate::core::templating::TemplateRegistry; // For section rendering
//! ```
//!
pub mod config;
pub mod error;
pub mod templating;
