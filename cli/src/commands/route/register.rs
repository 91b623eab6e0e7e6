//! # SolidGO Route Register Command
//!
//! File: cli/src/commands/route/register.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Implements `solidgo route register <name>`: inserts `<Name>Routes(api)`
//! after the `// solidgo:register-routes` marker of the registry file. Useful
//! when a route group was created with `--no-register` or by hand.
//!
use super::utils::editor::{self, EditOutcome};
use super::{build_descriptor, FileReport, RouteSpecArgs};
use crate::core::config::Project;
use crate::core::error::Result;
use clap::Parser;

/// # Route Register Arguments (`RegisterArgs`)
#[derive(Parser, Debug)]
pub struct RegisterArgs {
    /// Resource name whose `<Name>Routes` function should be registered.
    name: String,
}

pub fn handle_register(args: RegisterArgs, project: &Project) -> Result<()> {
    let spec = RouteSpecArgs {
        name: args.name,
        method: None,
        function: None,
        path: None,
    };
    let descriptor = build_descriptor(&spec, project)?;
    let registry = project.registry_file();

    let mut report = FileReport::default();
    let result = editor::register_route_group(&registry, &descriptor);
    report.record(&registry, result, |outcome| match outcome {
        EditOutcome::Applied => println!(
            "Registered {} in {}",
            descriptor.registration_call(),
            registry.display()
        ),
        EditOutcome::AlreadyPresent => println!(
            "Skipped {}: {} is already registered",
            registry.display(),
            descriptor.registration_call()
        ),
    });
    report.finish()
}
