//! # SolidGO Command Modules
//!
//! File: cli/src/commands/mod.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Top-level command groups of the `solidgo` CLI. Each group lives in its own
//! module with an `Args` struct for Clap and a `handle_*` entry point that
//! `main.rs` dispatches to.
//!
//! Subcommands (like `new` within `route`) are declared within their parent
//! module, not here.
//!

/// SolidJS component scaffolding (`solidgo component`).
pub mod component;
/// Route and controller generation and editing (`solidgo route new|add|register`).
pub mod route;
