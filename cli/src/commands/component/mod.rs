//! # SolidGO Component Command
//!
//! File: cli/src/commands/component/mod.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Implements `solidgo component <path> <name>`, which scaffolds a SolidJS
//! component for the client:
//!
//! ```text
//! <components_dir>/<path>/<name>/<name>.tsx
//! <components_dir>/<path>/<name>/<name>.module.scss   (unless --no-module)
//! ```
//!
//! ## Examples
//!
//! ```bash
//! solidgo component components/layout Navbar
//! solidgo c pages Home --no-module
//! ```
//!
use crate::common::fs::io;
use crate::core::config::Project;
use crate::core::error::{Result, ScaffoldError};
use crate::core::templating;
use anyhow::Context;
use clap::Parser;
use serde::Serialize;
use std::path::PathBuf;
use tracing::info;

const COMPONENT_TEMPLATE: &str = "import styles from \"./{{ name }}.module.scss\";\n\
\n\
import { Component } from \"solid-js\";\n\
\n\
interface {{ name }}Props {}\n\
\n\
export const {{ name }}: Component<{{ name }}Props> = (props) => {\n\
\x20 return <div class={styles.root}>{{ name }} Works!</div>;\n\
};\n";

const STYLE_MODULE: &str = ".root {}";

/// # Component Arguments (`ComponentArgs`)
#[derive(Parser, Debug)]
pub struct ComponentArgs {
    /// Directory under the components base directory, e.g. `components/layout`.
    path: String,

    /// Component name, e.g. `Navbar`. Also the name of its directory.
    name: String,

    /// Skip creating the `<name>.module.scss` file.
    #[arg(long, alias = "noModule")]
    no_module: bool,

    /// Overwrite existing component files.
    #[arg(long)]
    force: bool,
}

#[derive(Serialize)]
struct ComponentContext<'a> {
    name: &'a str,
}

/// Directory that will hold the component's files.
fn component_dir(project: &Project, args: &ComponentArgs) -> PathBuf {
    project
        .components_dir()
        .join(args.path.trim_matches('/'))
        .join(&args.name)
}

pub fn handle_component(args: ComponentArgs, project: &Project) -> Result<()> {
    let dir = component_dir(project, &args);
    info!("Creating component '{}' in {}", args.name, dir.display());

    let tsx_path = dir.join(format!("{}.tsx", args.name));
    let scss_path = (!args.no_module).then(|| dir.join(format!("{}.module.scss", args.name)));

    // A component is all or nothing: refuse before writing any of its files.
    if !args.force {
        if let Some(existing) = std::iter::once(&tsx_path)
            .chain(scss_path.as_ref())
            .find(|path| path.exists())
        {
            return Err(anyhow::Error::new(ScaffoldError::ArtifactExists {
                path: existing.clone(),
            })
            .context(format!("Failed to create component '{}'", args.name)));
        }
    }

    let tsx = templating::render_str(
        "component",
        COMPONENT_TEMPLATE,
        &ComponentContext { name: &args.name },
    )?;
    io::write_new_file(&tsx_path, &tsx, args.force)
        .with_context(|| format!("Failed to create component '{}'", args.name))?;
    println!("Created {}", tsx_path.display());

    if let Some(scss_path) = scss_path {
        io::write_new_file(&scss_path, STYLE_MODULE, args.force)
            .with_context(|| format!("Failed to create style module for '{}'", args.name))?;
        println!("Created {}", scss_path.display());
    }

    println!("Component created successfully");
    Ok(())
}
