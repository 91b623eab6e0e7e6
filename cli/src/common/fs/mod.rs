//! # SolidGO Filesystem Utilities (`common::fs`)
//!
//! File: cli/src/common/fs/mod.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Organizational unit for filesystem helpers. All whole-file reads, new-file
//! writes, and atomic in-place replacements live in `io`.
//!
//! ## Usage
//!
//! ```rust
//! use crate::common::fs::io;
//! let text = io::read_file_to_string(path)?;
//! ```
//!

/// Whole-file I/O (`read_file_to_string`, `write_new_file`, `replace_file_atomic`).
pub mod io;
