//! # SolidGO Configuration System
//!
//! File: cli/src/core/config.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! This module implements the configuration system for SolidGO. Its job is to
//! answer one question for the command handlers: *where* in the current project
//! do route files, controller files, the route registry, `go.mod`, and client
//! components live?
//!
//! ## Architecture
//!
//! Configuration sources (in order of precedence):
//! 1. Project-specific `.solidgo.toml` in the current directory or an ancestor,
//!    or the file passed explicitly with `--config` / `SOLIDGO_CONFIG`
//! 2. User-specific `config.toml` in the platform config directory
//!    (e.g. `~/.config/solidgo/config.toml`)
//! 3. Default values defined in the code (the standard SolidGO layout)
//!
//! The directory containing the project config becomes the project root. When
//! no project config exists, the current directory is the root. Every layout
//! path is resolved relative to that root.
//!
//! ## Examples
//!
//! ```toml
//! # .solidgo.toml
//! [layout]
//! routes_dir = "api/routes"
//! registry_file = "api/routes/routes.go"
//! ```
//!
//! ```rust
//! let project = config::load_project(None)?;
//! let route_file = project.route_file("user"); // <root>/api/routes/user.routes.go
//! ```
//!
use crate::core::error::{Result, ScaffoldError};
use anyhow::{anyhow, Context};
use directories::ProjectDirs;
use serde::Deserialize;
use std::{
    fs,
    path::{Path, PathBuf},
};
use tracing::{debug, info, warn};

/// The resolved configuration handed to the command handlers.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Config {
    pub layout: LayoutConfig,
}

/// Where the generated artifacts live, relative to the project root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayoutConfig {
    /// Directory holding one `<resource>.routes.go` file per resource.
    pub routes_dir: String,
    /// Directory holding one `<resource>.controller.go` file per resource.
    pub controllers_dir: String,
    /// Shared file that calls every resource's `<Name>Routes(api)` function.
    pub registry_file: String,
    /// The server's `go.mod`, read to discover the module path.
    pub module_file: String,
    /// Base directory for SolidJS components.
    pub components_dir: String,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            routes_dir: default_routes_dir(),
            controllers_dir: default_controllers_dir(),
            registry_file: default_registry_file(),
            module_file: default_module_file(),
            components_dir: default_components_dir(),
        }
    }
}

/// One configuration file as written on disk. Keys left out of the file stay
/// `None`, so a lower layer can still supply them.
#[derive(Deserialize, Debug, Default, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)] // Error if unknown fields are in TOML
struct ConfigFile {
    #[serde(default)]
    layout: LayoutFile,
}

#[derive(Deserialize, Debug, Default, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
struct LayoutFile {
    routes_dir: Option<String>,
    controllers_dir: Option<String>,
    registry_file: Option<String>,
    module_file: Option<String>,
    components_dir: Option<String>,
}

fn default_routes_dir() -> String {
    "server/routes".to_string()
}
fn default_controllers_dir() -> String {
    "server/controllers".to_string()
}
fn default_registry_file() -> String {
    "server/routes/routes.go".to_string()
}
fn default_module_file() -> String {
    "server/go.mod".to_string()
}
fn default_components_dir() -> String {
    "client/src".to_string()
}

/// A loaded configuration anchored at a concrete project root.
#[derive(Debug, Clone)]
pub struct Project {
    pub root: PathBuf,
    pub config: Config,
}

impl Project {
    /// Route file for a resource: `<routes_dir>/<resource>.routes.go`.
    pub fn route_file(&self, resource: &str) -> PathBuf {
        self.root
            .join(&self.config.layout.routes_dir)
            .join(format!("{}.routes.go", resource.to_lowercase()))
    }

    /// Controller file for a resource: `<controllers_dir>/<resource>.controller.go`.
    pub fn controller_file(&self, resource: &str) -> PathBuf {
        self.root
            .join(&self.config.layout.controllers_dir)
            .join(format!("{}.controller.go", resource.to_lowercase()))
    }

    pub fn registry_file(&self) -> PathBuf {
        self.root.join(&self.config.layout.registry_file)
    }

    pub fn module_file(&self) -> PathBuf {
        self.root.join(&self.config.layout.module_file)
    }

    pub fn components_dir(&self) -> PathBuf {
        self.root.join(&self.config.layout.components_dir)
    }
}

const PROJECT_CONFIG_FILENAME: &str = ".solidgo.toml";

/// Loads the layered configuration for the project around the current directory.
///
/// `explicit` is a config file named on the command line; when given, no
/// ancestor search is performed.
pub fn load_project(explicit: Option<&Path>) -> Result<Project> {
    let current_dir = std::env::current_dir().context("Failed to get current directory")?;
    let user_config = load_user_config()?;
    resolve_project(&current_dir, explicit, user_config)
}

/// Resolves the project root and merged configuration starting from `start_dir`.
fn resolve_project(
    start_dir: &Path,
    explicit: Option<&Path>,
    user_config: Option<ConfigFile>,
) -> Result<Project> {
    let project_config_path = match explicit {
        Some(path) => {
            let path = if path.is_absolute() {
                path.to_path_buf()
            } else {
                start_dir.join(path)
            };
            if !path.is_file() {
                return Err(anyhow!(ScaffoldError::Config(format!(
                    "Config file '{}' does not exist.",
                    path.display()
                ))));
            }
            Some(path)
        }
        None => find_project_config_path(start_dir),
    };

    let (root, project_config) = match project_config_path {
        Some(path) => {
            info!("Loading project configuration from: {}", path.display());
            let config = load_config_from_path(&path)?;
            let root = path
                .parent()
                .map(Path::to_path_buf)
                .unwrap_or_else(|| start_dir.to_path_buf());
            (root, Some(config))
        }
        None => {
            debug!(
                "No project configuration file ({}) found, using '{}' as project root.",
                PROJECT_CONFIG_FILENAME,
                start_dir.display()
            );
            (start_dir.to_path_buf(), None)
        }
    };

    let merged = merge_configs(user_config.unwrap_or_default(), project_config);
    validate_config(&merged).context("Configuration validation failed")?;
    debug!("Final loaded configuration: {:?}", merged);
    Ok(Project {
        root,
        config: merged,
    })
}

fn load_user_config() -> Result<Option<ConfigFile>> {
    if let Some(proj_dirs) = ProjectDirs::from("com", "SolidGO", "solidgo") {
        let config_path = proj_dirs.config_dir().join("config.toml");
        if config_path.exists() {
            info!("Loading user configuration from: {}", config_path.display());
            load_config_from_path(&config_path).map(Some)
        } else {
            debug!(
                "User configuration file not found at {}",
                config_path.display()
            );
            Ok(None)
        }
    } else {
        warn!("Could not determine user config directory.");
        Ok(None)
    }
}

fn find_project_config_path(start_dir: &Path) -> Option<PathBuf> {
    let mut path = start_dir;
    loop {
        let project_config = path.join(PROJECT_CONFIG_FILENAME);
        if project_config.is_file() {
            return Some(project_config);
        }
        if path.join(".git").is_dir() {
            debug!(
                "Found .git directory at {}, stopping project config search.",
                path.display()
            );
            return None;
        }
        path = path.parent()?;
    }
}

fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read configuration file: {}", path.display()))?;
    toml::from_str(&content).map_err(|e| {
        anyhow!(ScaffoldError::Config(format!(
            "Failed to parse TOML from file {}: {}",
            path.display(),
            e
        )))
    })
}

/// Project values win over user values, field by field. Keys set in neither
/// file fall back to the built-in layout.
fn merge_configs(user: ConfigFile, project: Option<ConfigFile>) -> Config {
    let (p, u) = (project.unwrap_or_default().layout, user.layout);
    let defaults = LayoutConfig::default();
    Config {
        layout: LayoutConfig {
            routes_dir: p.routes_dir.or(u.routes_dir).unwrap_or(defaults.routes_dir),
            controllers_dir: p
                .controllers_dir
                .or(u.controllers_dir)
                .unwrap_or(defaults.controllers_dir),
            registry_file: p
                .registry_file
                .or(u.registry_file)
                .unwrap_or(defaults.registry_file),
            module_file: p.module_file.or(u.module_file).unwrap_or(defaults.module_file),
            components_dir: p
                .components_dir
                .or(u.components_dir)
                .unwrap_or(defaults.components_dir),
        },
    }
}

fn validate_config(config: &Config) -> Result<()> {
    let layout = &config.layout;
    for (key, value) in [
        ("routes_dir", &layout.routes_dir),
        ("controllers_dir", &layout.controllers_dir),
        ("registry_file", &layout.registry_file),
        ("module_file", &layout.module_file),
        ("components_dir", &layout.components_dir),
    ] {
        if value.trim().is_empty() {
            return Err(anyhow!(ScaffoldError::Config(format!(
                "layout.{} cannot be empty.",
                key
            ))));
        }
    }
    Ok(())
}
