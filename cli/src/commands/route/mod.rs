//! # SolidGO Route Command Group
//!
//! File: cli/src/commands/route/mod.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! This module implements the `solidgo route` command group, which generates
//! and extends Fiber route files and their controllers:
//!
//! - **`new`**: render a new `<name>.routes.go` and `<name>.controller.go`
//!   from templates and register the route group in the registry file
//! - **`add`**: add one more binding to an existing route file and append the
//!   matching handler stub to its controller file
//! - **`register`**: only add the `<Name>Routes(api)` call to the registry file
//!
//! ## Architecture
//!
//! Every subcommand follows the same flow:
//! 1. Discover the Go module path from `go.mod` (fatal if missing)
//! 2. Normalize the user's input into a `RouteDescriptor`
//! 3. Run one independent operation per target file
//! 4. Report each file's outcome; fail the command if any operation failed
//!
//! A failure on one file never prevents the operations on its sibling files.
//!
//! ## Examples
//!
//! ```bash
//! solidgo route new user
//! solidgo route add user -m post -f CreateUser
//! solidgo route add user -m delete -f DeleteUser -p user/:id
//! ```
//!
use crate::core::config::Project;
use crate::core::error::{scaffold_error, Result, ScaffoldError};
use clap::{Args, Parser, Subcommand};
use std::path::Path;
use tracing::{error, warn};
use utils::descriptor::{self, RouteDescriptor, RouteRequest};

mod add;
mod new;
mod register;
pub mod utils;

/// # Route Command Group Arguments (`RouteArgs`)
#[derive(Parser, Debug)]
pub struct RouteArgs {
    #[command(subcommand)]
    command: RouteCommand,
}

#[derive(Subcommand, Debug)]
enum RouteCommand {
    /// Create a new route file and controller file.
    #[command(alias = "n")]
    New(new::NewArgs),
    /// Add a route to an existing route file and controller file.
    #[command(alias = "a")]
    Add(add::AddArgs),
    /// Register an existing route group in the route registry file.
    Register(register::RegisterArgs),
}

/// Descriptor inputs shared by the route subcommands.
#[derive(Args, Debug, Clone)]
pub struct RouteSpecArgs {
    /// Resource name, e.g. `user`. Used for file names, the group variable, and defaults.
    name: String,

    /// HTTP method of the route (default: get).
    #[arg(long, short = 'm')]
    method: Option<String>,

    /// Controller function name (default: Get<Name>).
    #[arg(long, short = 'f')]
    function: Option<String>,

    /// URL path of the route (default: the lower-cased name).
    #[arg(long, short = 'p')]
    path: Option<String>,
}

impl RouteSpecArgs {
    fn request(&self) -> RouteRequest {
        RouteRequest {
            resource_name: self.name.clone(),
            method: self.method.clone(),
            function: self.function.clone(),
            path: self.path.clone(),
        }
    }
}

/// # Handle Route Command (`handle_route`)
///
/// Dispatches to the selected route subcommand.
pub fn handle_route(args: RouteArgs, project: &Project) -> Result<()> {
    match args.command {
        RouteCommand::New(args) => new::handle_new(args, project),
        RouteCommand::Add(args) => add::handle_add(args, project),
        RouteCommand::Register(args) => register::handle_register(args, project),
    }
}

/// Discovers the module path and builds the descriptor for a subcommand.
///
/// Runs before any file is touched, so a missing `go.mod` aborts cleanly.
fn build_descriptor(spec: &RouteSpecArgs, project: &Project) -> Result<RouteDescriptor> {
    let module_root = descriptor::discover_module_root(&project.module_file())?;
    Ok(RouteDescriptor::normalize(&spec.request(), &module_root))
}

/// Collects the outcome of independent per-file operations.
#[derive(Debug, Default)]
struct FileReport {
    attempted: usize,
    failed: usize,
}

impl FileReport {
    /// Records one operation. Successes are printed via `on_success`;
    /// failures are logged and printed with the full error chain.
    fn record<T>(&mut self, path: &Path, result: Result<T>, on_success: impl FnOnce(T)) {
        self.attempted += 1;
        match result {
            Ok(value) => on_success(value),
            Err(e) => {
                self.failed += 1;
                match scaffold_error(&e) {
                    // Expected user mistakes; the printed message says what to do.
                    Some(ScaffoldError::ArtifactNotFound { .. })
                    | Some(ScaffoldError::ArtifactExists { .. }) => {
                        warn!("Skipping {}: {}", path.display(), e)
                    }
                    _ => error!("Operation on {} failed: {:?}", path.display(), e),
                }
                eprintln!("Error: {}: {:#}", path.display(), e);
            }
        }
    }

    fn finish(self) -> Result<()> {
        if self.failed > 0 {
            anyhow::bail!(
                "{} of {} file operations failed",
                self.failed,
                self.attempted
            );
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_route_add_with_flags() {
        let args = RouteArgs::try_parse_from([
            "route", "add", "order", "-m", "post", "-f", "CreateOrder", "-p", "order",
        ])
        .unwrap();
        match args.command {
            RouteCommand::Add(add) => {
                let request = add.spec.request();
                assert_eq!(request.resource_name, "order");
                assert_eq!(request.method.as_deref(), Some("post"));
                assert_eq!(request.function.as_deref(), Some("CreateOrder"));
                assert_eq!(request.path.as_deref(), Some("order"));
            }
            other => panic!("Incorrect subcommand parsed for 'add': {:?}", other),
        }
    }

    #[test]
    fn test_parses_route_new_alias() {
        let args = RouteArgs::try_parse_from(["route", "n", "user", "--force"]).unwrap();
        assert!(matches!(args.command, RouteCommand::New(_)));
    }

    #[test]
    fn test_route_add_requires_name() {
        assert!(RouteArgs::try_parse_from(["route", "add"]).is_err());
    }

    #[test]
    fn test_file_report_counts_failures() {
        let mut report = FileReport::default();
        report.record(Path::new("a.go"), Ok(()), |_| {});
        report.record(Path::new("b.go"), Err::<(), _>(anyhow::anyhow!("boom")), |_| {});
        let err = report.finish().unwrap_err();
        assert_eq!(err.to_string(), "1 of 2 file operations failed");
    }
}
