//! # SolidGO Common Utilities
//!
//! File: cli/src/common/mod.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Shared, command-agnostic helpers. At the moment this is filesystem I/O only.
//!

/// Utilities for filesystem operations (whole-file reads and writes).
pub mod fs;
