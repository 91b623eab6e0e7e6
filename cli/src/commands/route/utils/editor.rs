//! # SolidGO Structural Editor
//!
//! File: cli/src/commands/route/utils/editor.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Adds one route/handler pair to files that already exist, without touching
//! unrelated content. Three edits are supported, one per target file:
//!
//! 1. **Route binding** (`<resource>.routes.go`): splice
//!    `\t<var>.<Method>("/<path>", controllers.<Handler>)` right before the last
//!    closing brace, then rewrite the file in canonical (sorted) form.
//! 2. **Handler stub** (`<resource>.controller.go`): append a new handler
//!    function at the end of the file.
//! 3. **Route group registration** (registry file): splice `<Name>Routes(api)`
//!    on the line after the `// solidgo:register-routes` marker, using the
//!    marker's indentation.
//!
//! ## Architecture
//!
//! Each edit has a pure text-level function (`insert_route_binding`,
//! `append_handler_stub`, `insert_registration`) and a file-level wrapper
//! that runs read → edit → atomic replace through `edit_file`. The route edit
//! therefore writes once: splice and sort happen in memory before the single
//! write.
//!
//! If the content to be added is already present the edit reports
//! `EditOutcome::AlreadyPresent` and nothing is written. Read and locate
//! failures also leave the file as it was.
//!
use super::canonical::{self, RouteFile};
use super::descriptor::RouteDescriptor;
use super::locator::{self, REGISTRY_MARKER};
use super::render;
use crate::common::fs::io;
use crate::core::error::{Result, ScaffoldError};
use anyhow::Context;
use std::path::Path;
use tracing::{debug, info};

/// What an edit did to its target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditOutcome {
    /// New content was inserted and the file rewritten.
    Applied,
    /// The content was already there; the file was not written.
    AlreadyPresent,
}

/// Adds the descriptor's binding to route file text and returns the canonical result.
pub fn insert_route_binding(
    text: &str,
    descriptor: &RouteDescriptor,
) -> std::result::Result<(String, EditOutcome), ScaffoldError> {
    let binding = descriptor.binding_line();
    if RouteFile::parse(text).contains_binding(&binding) {
        return Ok((text.to_string(), EditOutcome::AlreadyPresent));
    }

    let offset = locator::last_closing_delimiter(text)?;
    let spliced = format!("{}\t{}\n{}", &text[..offset], binding, &text[offset..]);
    Ok((canonical::canonicalize(&spliced), EditOutcome::Applied))
}

/// Appends `stub` to handler file text unless the handler already exists.
pub fn append_handler_stub(text: &str, handler_name: &str, stub: &str) -> (String, EditOutcome) {
    let signature = format!("func {}(", handler_name);
    if text.lines().any(|line| line.trim_start().starts_with(&signature)) {
        return (text.to_string(), EditOutcome::AlreadyPresent);
    }
    (format!("{}\n{}", text, stub), EditOutcome::Applied)
}

/// Adds the descriptor's registration call after the registry marker line.
pub fn insert_registration(
    text: &str,
    descriptor: &RouteDescriptor,
) -> std::result::Result<(String, EditOutcome), ScaffoldError> {
    let offset = locator::after_marker_line(text, REGISTRY_MARKER)?;
    let call = descriptor.registration_call();
    if text.lines().any(|line| line.trim() == call) {
        return Ok((text.to_string(), EditOutcome::AlreadyPresent));
    }

    let indent = text
        .find(REGISTRY_MARKER)
        .map_or("", |start| locator::line_indent(text, start));
    let separator = if text[..offset].ends_with('\n') { "" } else { "\n" };
    let updated = format!(
        "{}{}{}{}\n{}",
        &text[..offset],
        separator,
        indent,
        call,
        &text[offset..]
    );
    Ok((updated, EditOutcome::Applied))
}

/// Adds a route binding to an existing route file.
pub fn add_route_binding(path: &Path, descriptor: &RouteDescriptor) -> Result<EditOutcome> {
    edit_file(path, "route binding", |text| {
        Ok(insert_route_binding(text, descriptor)?)
    })
}

/// Appends a handler stub to an existing controller file.
pub fn add_handler_stub(path: &Path, descriptor: &RouteDescriptor) -> Result<EditOutcome> {
    let stub = render::render_handler_stub(descriptor)?;
    edit_file(path, "handler stub", |text| {
        Ok(append_handler_stub(text, &descriptor.handler_name, &stub))
    })
}

/// Registers the descriptor's route group in the registry file.
pub fn register_route_group(path: &Path, descriptor: &RouteDescriptor) -> Result<EditOutcome> {
    edit_file(path, "route group registration", |text| {
        Ok(insert_registration(text, descriptor)?)
    })
}

/// Read → edit → atomic replace. Nothing is written unless the edit applies.
fn edit_file<F>(path: &Path, what: &str, edit: F) -> Result<EditOutcome>
where
    F: FnOnce(&str) -> Result<(String, EditOutcome)>,
{
    if !path.is_file() {
        anyhow::bail!(ScaffoldError::ArtifactNotFound {
            path: path.to_path_buf()
        });
    }
    let text = io::read_file_to_string(path)?;
    let (updated, outcome) = edit(&text)
        .with_context(|| format!("Failed to add {} to {}", what, path.display()))?;

    match outcome {
        EditOutcome::Applied => {
            io::replace_file_atomic(path, &updated)?;
            info!("Added {} to {}", what, path.display());
        }
        EditOutcome::AlreadyPresent => {
            debug!("{} already present in {}, leaving file untouched", what, path.display());
        }
    }
    Ok(outcome)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::route::utils::descriptor::RouteRequest;
    use crate::core::error::scaffold_error;
    use std::fs;
    use tempfile::tempdir;

    const ORDER_ROUTES: &str = "package routes

import (
\t\"github.com/gofiber/fiber/v2\"
\t\"github.com/acme/server/controllers\"
)

func OrderRoutes(api fiber.Router) {
\torderRoutes := api.Group(\"/order\")
}
";

    const REGISTRY: &str = "package routes

import \"github.com/gofiber/fiber/v2\"

func SetupRoutes(app *fiber.App) {
\tapi := app.Group(\"/api\")
\t// solidgo:register-routes
\tUserRoutes(api)
}
";

    fn descriptor(name: &str, method: &str, function: &str) -> RouteDescriptor {
        RouteDescriptor::normalize(
            &RouteRequest {
                resource_name: name.into(),
                method: Some(method.into()),
                function: Some(function.into()),
                path: None,
            },
            "github.com/acme/server",
        )
    }

    fn binding_zone(text: &str) -> Vec<String> {
        RouteFile::parse(text).bindings
    }

    /// Every non-blank line that is not a route binding, in file order.
    fn non_binding_lines(text: &str) -> Vec<&str> {
        text.lines()
            .filter(|line| !line.trim().is_empty() && !line.contains("Routes."))
            .collect()
    }

    #[test]
    fn test_add_bindings_end_to_end() -> Result<()> {
        let dir = tempdir()?;
        let path = dir.path().join("order.routes.go");
        fs::write(&path, ORDER_ROUTES)?;

        let outcome = add_route_binding(&path, &descriptor("order", "Post", "CreateOrder"))?;
        assert_eq!(outcome, EditOutcome::Applied);
        assert_eq!(
            binding_zone(&fs::read_to_string(&path)?),
            vec!["orderRoutes.Post(\"/order\", controllers.CreateOrder)"]
        );

        add_route_binding(&path, &descriptor("order", "Get", "GetOrder"))?;
        let content = fs::read_to_string(&path)?;
        assert_eq!(
            binding_zone(&content),
            vec![
                "orderRoutes.Get(\"/order\", controllers.GetOrder)",
                "orderRoutes.Post(\"/order\", controllers.CreateOrder)",
            ]
        );
        assert!(content.ends_with("\torderRoutes.Post(\"/order\", controllers.CreateOrder)\n}\n"));

        add_route_binding(&path, &descriptor("order", "Delete", "DeleteOrder"))?;
        let content = fs::read_to_string(&path)?;
        assert_eq!(binding_zone(&content).len(), 3);
        assert_eq!(non_binding_lines(&content), non_binding_lines(ORDER_ROUTES));
        Ok(())
    }

    #[test]
    fn test_insert_is_idempotent_under_resort() {
        let (once, _) = insert_route_binding(ORDER_ROUTES, &descriptor("order", "Delete", "DeleteOrder")).unwrap();
        assert_eq!(canonical::canonicalize(&once), once);
    }

    #[test]
    fn test_splice_position_does_not_matter() {
        let existing = "func OrderRoutes(api fiber.Router) {
\torderRoutes := api.Group(\"/order\")
\torderRoutes.Get(\"/\", controllers.GetOrder)
\torderRoutes.Post(\"/\", controllers.CreateOrder)
}
";
        let new_line = "\torderRoutes.Delete(\"/\", controllers.DeleteOrder)\n";
        let lines: Vec<&str> = existing.split_inclusive('\n').collect();
        let mut results = Vec::new();
        for at in 2..=4 {
            let mut spliced = String::new();
            for (i, line) in lines.iter().enumerate() {
                if i == at {
                    spliced.push_str(new_line);
                }
                spliced.push_str(line);
            }
            results.push(canonical::canonicalize(&spliced));
        }
        assert!(results.windows(2).all(|w| w[0] == w[1]));
        assert_eq!(
            binding_zone(&results[0])[0],
            "orderRoutes.Delete(\"/\", controllers.DeleteOrder)"
        );
    }

    #[test]
    fn test_duplicate_binding_not_written() -> Result<()> {
        let dir = tempdir()?;
        let path = dir.path().join("order.routes.go");
        fs::write(&path, ORDER_ROUTES)?;
        let d = descriptor("order", "Get", "GetOrder");

        add_route_binding(&path, &d)?;
        let after_first = fs::read_to_string(&path)?;
        assert_eq!(add_route_binding(&path, &d)?, EditOutcome::AlreadyPresent);
        assert_eq!(fs::read_to_string(&path)?, after_first);
        Ok(())
    }

    #[test]
    fn test_missing_structure_leaves_file_unchanged() -> Result<()> {
        let dir = tempdir()?;
        let path = dir.path().join("order.routes.go");
        let broken = "package routes\n\nfunc OrderRoutes(api fiber.Router) {\n";
        fs::write(&path, broken)?;

        let err = add_route_binding(&path, &descriptor("order", "Get", "GetOrder")).unwrap_err();
        assert!(matches!(
            scaffold_error(&err),
            Some(ScaffoldError::StructureNotFound)
        ));
        assert!(err.to_string().contains("order.routes.go"));
        assert_eq!(fs::read_to_string(&path)?, broken);
        Ok(())
    }

    #[test]
    fn test_missing_file_is_artifact_not_found() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("ghost.routes.go");
        let err = add_route_binding(&path, &descriptor("ghost", "Get", "GetGhost")).unwrap_err();
        assert!(matches!(
            scaffold_error(&err),
            Some(ScaffoldError::ArtifactNotFound { .. })
        ));
        assert!(!path.exists());
    }

    #[test]
    fn test_append_handler_stub() -> Result<()> {
        let dir = tempdir()?;
        let path = dir.path().join("order.controller.go");
        let original = "package controllers\n\nimport (\n\t\"github.com/gofiber/fiber/v2\"\n)\n";
        fs::write(&path, original)?;
        let d = descriptor("order", "Post", "CreateOrder");

        assert_eq!(add_handler_stub(&path, &d)?, EditOutcome::Applied);
        let content = fs::read_to_string(&path)?;
        assert!(content.starts_with(original));
        assert!(content.contains("\nfunc CreateOrder(c *fiber.Ctx) error {\n"));
        assert!(content.contains("\"message\": \"CreateOrder called\""));

        assert_eq!(add_handler_stub(&path, &d)?, EditOutcome::AlreadyPresent);
        assert_eq!(fs::read_to_string(&path)?, content);
        Ok(())
    }

    #[test]
    fn test_handler_prefix_is_not_a_duplicate() {
        let text = "func GetOrders(c *fiber.Ctx) error {\n}\n";
        let (updated, outcome) = append_handler_stub(text, "GetOrder", "func GetOrder() {}\n");
        assert_eq!(outcome, EditOutcome::Applied);
        assert!(updated.ends_with("\nfunc GetOrder() {}\n"));
    }

    #[test]
    fn test_insert_registration_after_marker() {
        let (updated, outcome) =
            insert_registration(REGISTRY, &descriptor("order", "Get", "GetOrder")).unwrap();
        assert_eq!(outcome, EditOutcome::Applied);
        assert!(updated.contains(
            "\t// solidgo:register-routes\n\tOrderRoutes(api)\n\tUserRoutes(api)\n"
        ));

        let (again, outcome) =
            insert_registration(&updated, &descriptor("order", "Get", "GetOrder")).unwrap();
        assert_eq!(outcome, EditOutcome::AlreadyPresent);
        assert_eq!(again, updated);
    }

    #[test]
    fn test_insert_registration_marker_on_last_line() {
        let text = "// solidgo:register-routes";
        let (updated, _) = insert_registration(text, &descriptor("order", "Get", "GetOrder")).unwrap();
        assert_eq!(updated, "// solidgo:register-routes\nOrderRoutes(api)\n");
    }

    #[test]
    fn test_missing_marker_leaves_file_unchanged() -> Result<()> {
        let dir = tempdir()?;
        let path = dir.path().join("routes.go");
        let without_marker = REGISTRY.replace("\t// solidgo:register-routes\n", "");
        fs::write(&path, &without_marker)?;

        let err = register_route_group(&path, &descriptor("order", "Get", "GetOrder")).unwrap_err();
        assert!(matches!(
            scaffold_error(&err),
            Some(ScaffoldError::MarkerNotFound { .. })
        ));
        assert_eq!(fs::read_to_string(&path)?, without_marker);
        Ok(())
    }
}
