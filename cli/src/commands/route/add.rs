//! # SolidGO Route Add Command
//!
//! File: cli/src/commands/route/add.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Implements `solidgo route add <name>`: adds one binding to the existing
//! `<name>.routes.go` (re-sorting its bindings) and appends the matching
//! handler stub to `<name>.controller.go`.
//!
//! The two edits are independent: both are attempted even if the first fails.
//!
use super::utils::editor::{self, EditOutcome};
use super::{build_descriptor, FileReport, RouteSpecArgs};
use crate::core::config::Project;
use crate::core::error::Result;
use clap::Parser;
use tracing::info;

/// # Route Add Arguments (`AddArgs`)
#[derive(Parser, Debug)]
pub struct AddArgs {
    #[command(flatten)]
    pub(super) spec: RouteSpecArgs,
}

pub fn handle_add(args: AddArgs, project: &Project) -> Result<()> {
    let descriptor = build_descriptor(&args.spec, project)?;
    info!("Adding route: {}", descriptor.binding_line());

    let mut report = FileReport::default();

    let route_file = project.route_file(&descriptor.resource_name);
    let result = editor::add_route_binding(&route_file, &descriptor);
    report.record(&route_file, result, |outcome| match outcome {
        EditOutcome::Applied => {
            println!("Successfully added new route to {}", route_file.display())
        }
        EditOutcome::AlreadyPresent => println!(
            "Skipped {}: route already exists",
            route_file.display()
        ),
    });

    let controller_file = project.controller_file(&descriptor.resource_name);
    let result = editor::add_handler_stub(&controller_file, &descriptor);
    report.record(&controller_file, result, |outcome| match outcome {
        EditOutcome::Applied => println!(
            "Successfully added new controller function to {}",
            controller_file.display()
        ),
        EditOutcome::AlreadyPresent => println!(
            "Skipped {}: function {} already exists",
            controller_file.display(),
            descriptor.handler_name
        ),
    });

    report.finish()
}
