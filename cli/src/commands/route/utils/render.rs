//! # SolidGO File Templates
//!
//! File: cli/src/commands/route/utils/render.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Renders brand-new route and controller files for a `RouteDescriptor`.
//! Rendering is a pure function of the descriptor and the artifact kind; it is
//! only used for files that do not exist yet. Existing files are edited by
//! `editor` instead.
//!
//! The handler stub template is shared with `editor::append_handler_stub` so a
//! handler appended later has the same shape as the one in a generated file.
//!
use super::descriptor::RouteDescriptor;
use crate::core::error::Result;
use crate::core::templating;

/// Which generated file to render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArtifactKind {
    Route,
    Handler,
}

const ROUTE_TEMPLATE: &str = "package routes\n\
\n\
import (\n\
\t\"github.com/gofiber/fiber/v2\"\n\
\t\"{{ module_root }}/controllers\"\n\
)\n\
\n\
func {{ titled_name }}Routes(api fiber.Router) {\n\
\t{{ route_group_var }} := api.Group(\"/{{ url_path }}\")\n\
\t{{ route_group_var }}.{{ http_method }}(\"/\", controllers.{{ handler_name }})\n\
}\n";

const CONTROLLER_HEADER: &str = "package controllers\n\
\n\
import (\n\
\t\"github.com/gofiber/fiber/v2\"\n\
)\n";

const HANDLER_STUB_TEMPLATE: &str = "func {{ handler_name }}(c *fiber.Ctx) error {\n\
\treturn c.Status(fiber.StatusOK).JSON(fiber.Map{\"status\": \"success\", \"message\": \"{{ handler_name }} called\"})\n\
}\n";

/// Renders the full text of a new file of the given kind.
pub fn render(descriptor: &RouteDescriptor, kind: ArtifactKind) -> Result<String> {
    match kind {
        ArtifactKind::Route => templating::render_str("route", ROUTE_TEMPLATE, descriptor),
        ArtifactKind::Handler => Ok(format!(
            "{}\n{}",
            CONTROLLER_HEADER,
            render_handler_stub(descriptor)?
        )),
    }
}

/// Renders a single handler function.
pub fn render_handler_stub(descriptor: &RouteDescriptor) -> Result<String> {
    templating::render_str("handler stub", HANDLER_STUB_TEMPLATE, descriptor)
}
