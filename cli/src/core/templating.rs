//! # SolidGO Template System
//!
//! File: cli/src/core/templating.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Thin wrapper around the Tera templating engine used to render brand-new
//! files (route files, controller files, SolidJS components). Templates are
//! plain strings compiled into the binary by the command modules; this module
//! only knows how to turn a template plus a serializable context into text.
//!
//! ## Architecture
//!
//! - The context is any `serde::Serialize` value, converted with
//!   `tera::Context::from_serialize`.
//! - Rendering uses `Tera::one_off` with autoescaping **disabled**: the output
//!   is Go and TypeScript source, where HTML-escaping quotes would corrupt
//!   string literals.
//! - Failures surface as `ScaffoldError::Template` with the template's name as
//!   context.
//!
//! ## Examples
//!
//! ```rust
//! #[derive(Serialize)]
//! struct Ctx { name: &'static str }
//!
//! let text = templating::render_str("hello", "Hello {{ name }}", &Ctx { name: "Gopher" })?;
//! assert_eq!(text, "Hello Gopher");
//! ```
//!
use crate::core::error::{Result, ScaffoldError};
use anyhow::anyhow;
use serde::Serialize;
use tera::Tera;
use tracing::debug;

/// Renders `template` with the fields of `context`.
///
/// `name` only labels the template in error messages and logs.
pub fn render_str<C: Serialize>(name: &str, template: &str, context: &C) -> Result<String> {
    let tera_context = tera::Context::from_serialize(context).map_err(|e| {
        anyhow!(ScaffoldError::Template { source: e })
            .context(format!("Failed to build template context for '{}'", name))
    })?;
    let rendered = Tera::one_off(template, &tera_context, false).map_err(|e| {
        anyhow!(ScaffoldError::Template { source: e })
            .context(format!("Tera rendering failed for template '{}'", name))
    })?;
    debug!("Rendered template '{}' ({} bytes)", name, rendered.len());
    Ok(rendered)
}
