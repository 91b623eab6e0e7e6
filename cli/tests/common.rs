//! # SolidGO CLI Integration Test Common Helpers
//!
//! File: cli/tests/common.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Shared helpers for the integration tests in `cli/tests/`: locating the
//! compiled `solidgo` binary and laying out a minimal SolidGO project in a
//! temporary directory.
//!

// Allow potentially unused code in this common module, as different test files might use different helpers.
#![allow(dead_code)]

pub use assert_cmd::Command;
use std::fs;
use std::path::Path;

pub const GO_MOD: &str = "module github.com/acme/server\n\ngo 1.21\n";

pub const REGISTRY: &str = "package routes

import \"github.com/gofiber/fiber/v2\"

func SetupRoutes(app *fiber.App) {
\tapi := app.Group(\"/api\")
\t// solidgo:register-routes
}
";

/// Returns a `Command` for the compiled `solidgo` binary.
pub fn solidgo_cmd() -> Command {
    Command::cargo_bin("solidgo").expect("Failed to find solidgo binary for testing")
}

/// Returns a `Command` running inside `project_dir`, isolated from the
/// developer's own user config and `SOLIDGO_CONFIG`.
pub fn solidgo_in(project_dir: &Path) -> Command {
    let mut cmd = solidgo_cmd();
    cmd.current_dir(project_dir)
        .env("XDG_CONFIG_HOME", project_dir.join(".xdg"))
        .env_remove("SOLIDGO_CONFIG")
        .env_remove("RUST_LOG");
    cmd
}

/// Writes `server/go.mod` and the route registry file under `root`.
pub fn setup_project(root: &Path) {
    fs::create_dir_all(root.join("server/routes")).unwrap();
    fs::create_dir_all(root.join("server/controllers")).unwrap();
    fs::write(root.join("server/go.mod"), GO_MOD).unwrap();
    fs::write(root.join("server/routes/routes.go"), REGISTRY).unwrap();
}
