//! # SolidGO Main Entry Point
//!
//! File: cli/src/main.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Entry point of the `solidgo` CLI, the scaffolding tool for SolidGO projects
//! (a Go Fiber server plus a SolidJS client). It handles:
//! - Command-line argument parsing using Clap
//! - Setting up the logging system based on verbosity flags
//! - Loading the project configuration once and passing it to the handlers
//! - Routing execution to the appropriate command handler
//!
//! ## Examples
//!
//! ```bash
//! # Create server/routes/user.routes.go and server/controllers/user.controller.go
//! solidgo route new user
//!
//! # Add a POST route and its handler to the existing files
//! solidgo -v route add user -m post -f CreateUser
//!
//! # Scaffold a SolidJS component
//! solidgo component components Navbar
//! ```
//!
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::{fmt, EnvFilter};

mod commands; // Command groups (route, component)
mod common; // Shared utilities (filesystem I/O)
mod core; // Core infrastructure (errors, config, templating)

/// Defines the top-level command-line arguments structure using Clap's derive macros.
#[derive(Parser, Debug)]
#[command(
    name = "solidgo",
    about = "CLI Tool for SolidGO projects",
    long_about = "Scaffolds routes and controllers for the Go server and components for the \
                  SolidJS client of a SolidGO project.",
    propagate_version = true,
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
    /// Project config file to use instead of searching for `.solidgo.toml`.
    #[arg(long, global = true, env = "SOLIDGO_CONFIG")]
    config: Option<PathBuf>,
}

/// Enum defining all available top-level commands.
#[derive(Parser, Debug)]
enum Commands {
    /// Create routes and controllers, or add routes to existing ones.
    #[command(alias = "r")]
    Route(commands::route::RouteArgs),
    /// Create a SolidJS component.
    #[command(alias = "c")]
    Component(commands::component::ComponentArgs),
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let log_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));
    fmt::Subscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();

    tracing::debug!("Parsed CLI arguments: {:?}", cli);

    let command_result = crate::core::config::load_project(cli.config.as_deref()).and_then(
        |project| match cli.command {
            Commands::Route(args) => commands::route::handle_route(args, &project),
            Commands::Component(args) => commands::component::handle_component(args, &project),
        },
    );

    if let Err(e) = command_result {
        tracing::error!("Command execution failed: {:?}", e);
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    Ok(())
}
