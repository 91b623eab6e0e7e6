//! # SolidGO Error Types
//!
//! File: cli/src/core/error.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! This module defines the error types used throughout the SolidGO scaffolding
//! CLI. Every failure that a caller may want to react to (a missing `go.mod`,
//! a route file without a closing brace, a registry file without its sentinel
//! comment) has its own variant so it can be recognised after propagation.
//!
//! ## Architecture
//!
//! The error system consists of two main components:
//! - `ScaffoldError`: A custom error enum using `thiserror` for the domain failures
//! - `Result<T>`: A type alias for `anyhow::Result<T>` for flexible error handling
//!
//! Plain I/O failures are not wrapped in a variant. They stay as
//! `std::io::Error` with `anyhow` context naming the file involved.
//!
//! ## Examples
//!
//! ```rust
//! // Return a specific error type
//! if !path.is_file() {
//!     return Err(ScaffoldError::ArtifactNotFound { path: path.to_path_buf() }.into());
//! }
//!
//! // Classify an error after it has been propagated with context
//! match result {
//!     Err(e) if matches!(e.downcast_ref::<ScaffoldError>(), Some(ScaffoldError::MarkerNotFound { .. })) => {
//!         println!("Registry file has no sentinel comment");
//!     }
//!     other => other?,
//! }
//! ```
//!
use std::path::PathBuf;
use thiserror::Error;

/// Custom error type for the SolidGO CLI.
#[derive(Error, Debug)]
pub enum ScaffoldError {
    /// Project metadata (config or `go.mod`) is missing or unusable.
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("File '{}' does not exist; create it first with `solidgo route new`.", path.display())]
    ArtifactNotFound { path: PathBuf },

    #[error("File '{}' already exists. Use --force to overwrite it.", path.display())]
    ArtifactExists { path: PathBuf },

    /// No closing `}` was found where a function body was expected.
    #[error("No closing brace found in the file")]
    StructureNotFound,

    #[error("Marker '{marker}' not found in the file")]
    MarkerNotFound { marker: String },

    #[error("Template rendering error: {source}")]
    Template {
        #[from]
        source: tera::Error,
    },
}

/// Type alias for Result using anyhow::Error for broad compatibility.
pub type Result<T> = anyhow::Result<T>;

/// Returns the `ScaffoldError` carried by an `anyhow::Error`, if any.
///
/// Context layers added with `.context(...)` are looked through.
pub fn scaffold_error(err: &anyhow::Error) -> Option<&ScaffoldError> {
    err.chain().find_map(|cause| cause.downcast_ref::<ScaffoldError>())
}
