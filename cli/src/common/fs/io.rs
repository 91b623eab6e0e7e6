//! # SolidGO Filesystem I/O Operations
//!
//! File: cli/src/common/fs/io.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! This module centralizes the filesystem input/output used by the scaffolding
//! commands. Every artifact SolidGO touches is read whole into memory, edited
//! as a string, and written back whole; these helpers are the only places that
//! talk to `std::fs` for that cycle.
//!
//! ## Architecture
//!
//! - **`ensure_dir_exists`**: `mkdir -p` semantics, failing if the path is a file.
//! - **`read_file_to_string`**: `fs::read_to_string` with the file path as context.
//! - **`write_new_file`**: Creates a brand-new file (and its parent directories),
//!   refusing to clobber an existing file unless `overwrite` is set.
//! - **`replace_file_atomic`**: Replaces an existing file's content in one step
//!   by writing a temporary file in the same directory and renaming it over
//!   the target. Readers never observe a half-written file, and a failure
//!   before the rename leaves the original untouched.
//!
//! ## Usage
//!
//! ```rust
//! let content = io::read_file_to_string(&route_file)?;
//! let updated = editor::insert_route_binding(&content, &descriptor)?;
//! io::replace_file_atomic(&route_file, &updated)?;
//! ```
//!
use crate::core::error::{Result, ScaffoldError};
use anyhow::Context;
use std::fs;
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;
use tracing::{debug, info};

/// Ensures that a directory exists at the specified path.
///
/// If the path does not exist, the directory is created together with any
/// missing parents. If the path exists but is not a directory, a
/// `ScaffoldError::Config` is returned.
pub fn ensure_dir_exists(path: &Path) -> Result<()> {
    if !path.exists() {
        fs::create_dir_all(path)
            .with_context(|| format!("Failed to create directory {:?}", path))?;
        info!("Created directory: {:?}", path);
    } else if !path.is_dir() {
        anyhow::bail!(ScaffoldError::Config(format!(
            "Path exists but is not a directory: {:?}",
            path
        )));
    } else {
        debug!("Directory already exists: {:?}", path);
    }
    Ok(())
}

/// Reads the entire content of a file into a string.
pub fn read_file_to_string(path: &Path) -> Result<String> {
    fs::read_to_string(path).with_context(|| format!("Failed to read file {:?}", path))
}

/// Writes a freshly generated file.
///
/// Parent directories are created as needed. When a file already exists at
/// `path` and `overwrite` is false, nothing is written and
/// `ScaffoldError::ArtifactExists` is returned.
pub fn write_new_file(path: &Path, content: &str, overwrite: bool) -> Result<()> {
    if path.exists() && !overwrite {
        anyhow::bail!(ScaffoldError::ArtifactExists {
            path: path.to_path_buf()
        });
    }
    if let Some(parent) = path.parent() {
        ensure_dir_exists(parent)?;
    }
    fs::write(path, content).with_context(|| format!("Failed to write to file {:?}", path))?;
    info!("Wrote new file: {:?}", path);
    Ok(())
}

/// Atomically replaces the content of an existing file.
///
/// The new content goes to a temporary file next to `path`, which is then
/// renamed over the original. The original file's permissions are carried
/// over to the replacement.
pub fn replace_file_atomic(path: &Path, content: &str) -> Result<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let mut temp = NamedTempFile::new_in(dir)
        .with_context(|| format!("Failed to create temporary file in {:?}", dir))?;
    temp.write_all(content.as_bytes())
        .with_context(|| format!("Failed to write temporary file for {:?}", path))?;
    temp.as_file()
        .sync_all()
        .with_context(|| format!("Failed to flush temporary file for {:?}", path))?;

    if let Ok(metadata) = fs::metadata(path) {
        fs::set_permissions(temp.path(), metadata.permissions())
            .with_context(|| format!("Failed to copy permissions of {:?}", path))?;
    }

    temp.persist(path)
        .map_err(|e| e.error)
        .with_context(|| format!("Failed to replace file {:?}", path))?;
    debug!("Atomically replaced file: {:?}", path);
    Ok(())
}
