//! # SolidGO Route New Command
//!
//! File: cli/src/commands/route/new.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Implements `solidgo route new <name>`: renders a brand-new route file and
//! controller file from templates, then registers the new route group in the
//! shared registry file (unless `--no-register`).
//!
//! Existing route or controller files are never overwritten without `--force`.
//!
use super::utils::editor::{self, EditOutcome};
use super::utils::render::{self, ArtifactKind};
use super::{build_descriptor, FileReport, RouteSpecArgs};
use crate::common::fs::io;
use crate::core::config::Project;
use crate::core::error::Result;
use clap::Parser;
use tracing::info;

/// # Route New Arguments (`NewArgs`)
#[derive(Parser, Debug)]
pub struct NewArgs {
    #[command(flatten)]
    pub(super) spec: RouteSpecArgs,

    /// Overwrite the route and controller files if they already exist.
    #[arg(long)]
    force: bool,

    /// Do not add the route group to the registry file.
    #[arg(long)]
    no_register: bool,
}

pub fn handle_new(args: NewArgs, project: &Project) -> Result<()> {
    let descriptor = build_descriptor(&args.spec, project)?;
    info!(
        "Creating route '{}' ({} {})",
        descriptor.titled_name, descriptor.http_method, descriptor.url_path
    );

    let mut report = FileReport::default();

    for (kind, path) in [
        (ArtifactKind::Route, project.route_file(&descriptor.resource_name)),
        (
            ArtifactKind::Handler,
            project.controller_file(&descriptor.resource_name),
        ),
    ] {
        let result = render::render(&descriptor, kind)
            .and_then(|text| io::write_new_file(&path, &text, args.force));
        report.record(&path, result, |_| match kind {
            ArtifactKind::Route => println!("Route file created successfully: {}", path.display()),
            ArtifactKind::Handler => {
                println!("Controller file created successfully: {}", path.display())
            }
        });
    }

    if args.no_register {
        info!("Skipping route registry update (--no-register).");
    } else {
        let registry = project.registry_file();
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
    }

    report.finish()
}
