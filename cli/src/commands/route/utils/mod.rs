//! # SolidGO Route Utilities
//!
//! File: cli/src/commands/route/utils/mod.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! The structural editing engine behind `solidgo route`. Leaf-first:
//!
//! - `descriptor`: raw user input → `RouteDescriptor`, plus `go.mod` discovery
//! - `render`: Tera templates for brand-new route and controller files
//! - `locator`: finds insertion offsets (last `}` or the registry marker)
//! - `canonical`: three-zone classification and sorting of route bindings
//! - `editor`: splices new content into existing files and writes them back
//!

/// Descriptor normalization and module root discovery.
pub mod descriptor;
/// In-place edits of existing route, controller, and registry files.
pub mod editor;
/// Insertion point lookup.
pub mod locator;
/// Canonical ordering of route bindings.
pub mod canonical;
/// New-file templates.
pub mod render;
