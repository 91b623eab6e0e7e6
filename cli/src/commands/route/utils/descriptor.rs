//! # SolidGO Route Descriptor
//!
//! File: cli/src/commands/route/utils/descriptor.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Turns the raw strings a user types (`solidgo route add user -m post -f
//! CreateUser`) into a `RouteDescriptor`: one normalized record holding every
//! identifier the templates and the structural editor need, with consistent
//! casing and defaults applied.
//!
//! The Go module path is discovered separately by `discover_module_root` and
//! handed to `RouteDescriptor::normalize` as an explicit value.
//!
use crate::common::fs::io;
use crate::core::error::{Result, ScaffoldError};
use anyhow::anyhow;
use serde::Serialize;
use std::path::Path;
use tracing::debug;

/// Raw, user-supplied inputs for one route/handler pair.
///
/// Empty optional strings are treated the same as `None`.
#[derive(Debug, Clone, Default)]
pub struct RouteRequest {
    pub resource_name: String,
    pub method: Option<String>,
    pub function: Option<String>,
    pub path: Option<String>,
}

/// Normalized description of one route/handler pair.
///
/// Serializes with snake_case field names, which are the variable names
/// available to the file templates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RouteDescriptor {
    /// Resource name as supplied (trimmed).
    pub resource_name: String,
    /// Title-cased resource name, e.g. `User` (used in `UserRoutes`).
    pub titled_name: String,
    /// Local variable bound to the route group, e.g. `userRoutes`.
    pub route_group_var: String,
    /// Path segment without a leading slash, e.g. `user`.
    pub url_path: String,
    /// Fiber router method, e.g. `Get`, `Post`.
    pub http_method: String,
    /// Exported controller function, e.g. `GetUser`.
    pub handler_name: String,
    /// Go module path from `go.mod`, e.g. `github.com/acme/server`.
    pub module_root: String,
}

impl RouteDescriptor {
    pub fn normalize(request: &RouteRequest, module_root: &str) -> Self {
        let resource_name = request.resource_name.trim().to_string();
        let titled_name = title_case(&resource_name);
        let lowered = resource_name.to_lowercase();

        let http_method = title_case(non_empty(&request.method).unwrap_or("get"));
        let handler_name = match non_empty(&request.function) {
            Some(function) => function.to_string(),
            None => format!("Get{}", titled_name),
        };
        let url_path = match non_empty(&request.path) {
            Some(path) => path.trim_start_matches('/').to_string(),
            None => lowered.clone(),
        };

        let descriptor = Self {
            route_group_var: format!("{}Routes", lowered),
            resource_name,
            titled_name,
            url_path,
            http_method,
            handler_name,
            module_root: module_root.to_string(),
        };
        debug!("Normalized route descriptor: {:?}", descriptor);
        descriptor
    }

    /// The binding statement this descriptor adds to a route group, without
    /// indentation or line terminator.
    pub fn binding_line(&self) -> String {
        format!(
            "{}.{}(\"/{}\", controllers.{})",
            self.route_group_var, self.http_method, self.url_path, self.handler_name
        )
    }

    /// The call that wires this resource's route group into the API.
    pub fn registration_call(&self) -> String {
        format!("{}Routes(api)", self.titled_name)
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

/// Upper-cases the first character of every word and lower-cases the rest of
/// the word. Words are runs of alphanumerics and `_`; a `.` or `'` between two
/// word characters does not end the word (`user_role` -> `User_role`,
/// `blog post` -> `Blog Post`, `user-role` -> `User-Role`).
pub fn title_case(input: &str) -> String {
    let chars: Vec<char> = input.chars().collect();
    let mut out = String::with_capacity(input.len());
    let mut in_word = false;
    for (i, &ch) in chars.iter().enumerate() {
        if is_word_char(ch) {
            if in_word {
                out.extend(ch.to_lowercase());
            } else {
                out.extend(ch.to_uppercase());
            }
            in_word = true;
        } else {
            let joins_word = in_word
                && matches!(ch, '.' | '\'')
                && chars.get(i + 1).is_some_and(|c| is_word_char(*c));
            out.push(ch);
            in_word = joins_word;
        }
    }
    out
}

fn is_word_char(ch: char) -> bool {
    ch.is_alphanumeric() || ch == '_'
}

/// Reads the `module` directive from a `go.mod` file.
///
/// Any failure (missing file, unreadable file, no directive) is reported as
/// `ScaffoldError::Config`, so the caller can abort before touching anything.
pub fn discover_module_root(go_mod: &Path) -> Result<String> {
    if !go_mod.is_file() {
        return Err(anyhow!(ScaffoldError::Config(format!(
            "Module file '{}' not found. Run solidgo from the project root or set layout.module_file.",
            go_mod.display()
        ))));
    }
    let content = io::read_file_to_string(go_mod).map_err(|e| {
        anyhow!(ScaffoldError::Config(format!(
            "Could not read module file '{}': {:#}",
            go_mod.display(),
            e
        )))
    })?;
    let module = content.lines().find_map(|line| {
        let mut parts = line.split_whitespace();
        match (parts.next(), parts.next()) {
            (Some("module"), Some(name)) => Some(name.trim_matches('"').to_string()),
            _ => None,
        }
    });
    match module {
        Some(name) => {
            debug!("Discovered module root '{}' from {}", name, go_mod.display());
            Ok(name)
        }
        None => Err(anyhow!(ScaffoldError::Config(format!(
            "module directive not found in '{}'",
            go_mod.display()
        )))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::scaffold_error;
    use std::fs;
    use tempfile::tempdir;

    fn request(name: &str) -> RouteRequest {
        RouteRequest {
            resource_name: name.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_defaults() {
        let d = RouteDescriptor::normalize(&request("user"), "github.com/acme/server");
        assert_eq!(d.titled_name, "User");
        assert_eq!(d.route_group_var, "userRoutes");
        assert_eq!(d.url_path, "user");
        assert_eq!(d.http_method, "Get");
        assert_eq!(d.handler_name, "GetUser");
        assert_eq!(d.module_root, "github.com/acme/server");
    }

    #[test]
    fn test_overrides() {
        let req = RouteRequest {
            resource_name: "Order".into(),
            method: Some("POST".into()),
            function: Some("CreateOrder".into()),
            path: Some("/orders/new".into()),
        };
        let d = RouteDescriptor::normalize(&req, "m");
        assert_eq!(d.http_method, "Post");
        assert_eq!(d.handler_name, "CreateOrder");
        assert_eq!(d.url_path, "orders/new");
        assert_eq!(d.route_group_var, "orderRoutes");
        assert_eq!(
            d.binding_line(),
            "orderRoutes.Post(\"/orders/new\", controllers.CreateOrder)"
        );
        assert_eq!(d.registration_call(), "OrderRoutes(api)");
    }

    #[test]
    fn test_empty_overrides_fall_back_to_defaults() {
        let req = RouteRequest {
            resource_name: "item".into(),
            method: Some("".into()),
            function: Some("  ".into()),
            path: Some(String::new()),
        };
        let d = RouteDescriptor::normalize(&req, "m");
        assert_eq!(d.http_method, "Get");
        assert_eq!(d.handler_name, "GetItem");
        assert_eq!(d.url_path, "item");
    }

    #[test]
    fn test_underscore_name_keeps_one_word() {
        let d = RouteDescriptor::normalize(&request("user_role"), "m");
        assert_eq!(d.titled_name, "User_role");
        assert_eq!(d.handler_name, "GetUser_role");
        assert_eq!(d.registration_call(), "User_roleRoutes(api)");
    }

    #[test]
    fn test_title_case() {
        assert_eq!(title_case("get"), "Get");
        assert_eq!(title_case("DELETE"), "Delete");
        assert_eq!(title_case("userProfile"), "Userprofile");
        assert_eq!(title_case("blog post"), "Blog Post");
        assert_eq!(title_case("user-role"), "User-Role");
        assert_eq!(title_case("user_role"), "User_role");
        assert_eq!(title_case("v1.users"), "V1.users");
        assert_eq!(title_case("users."), "Users.");
        assert_eq!(title_case(""), "");
    }

    #[test]
    fn test_discover_module_root() -> Result<()> {
        let dir = tempdir()?;
        let go_mod = dir.path().join("go.mod");
        fs::write(
            &go_mod,
            "// generated\nmodule github.com/acme/server\n\ngo 1.21\n",
        )?;
        assert_eq!(discover_module_root(&go_mod)?, "github.com/acme/server");
        Ok(())
    }

    #[test]
    fn test_discover_module_root_failures_are_config_errors() -> Result<()> {
        let dir = tempdir()?;
        let go_mod = dir.path().join("go.mod");

        let missing = discover_module_root(&go_mod).unwrap_err();
        assert!(matches!(
            scaffold_error(&missing),
            Some(ScaffoldError::Config(_))
        ));

        fs::write(&go_mod, "go 1.21\n")?;
        let no_directive = discover_module_root(&go_mod).unwrap_err();
        assert!(no_directive.to_string().contains("module directive not found"));
        Ok(())
    }
}
