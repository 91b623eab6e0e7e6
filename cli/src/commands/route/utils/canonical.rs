//! # SolidGO Canonical Route Ordering
//!
//! File: cli/src/commands/route/utils/canonical.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! After a binding has been spliced into a route file, the file is rewritten
//! in canonical form: the route bindings of the group are sorted byte-wise and
//! everything else keeps its relative order.
//!
//! ## Architecture
//!
//! The file is classified line by line into three zones by a small state
//! machine with two flags, `inside_block` and `saw_group_line`:
//!
//! | Line (trimmed)                                 | Zone       | Effect                    |
//! |------------------------------------------------|------------|---------------------------|
//! | blank                                          | dropped    |                           |
//! | ends with `{`                                  | preamble   | `inside_block = true`     |
//! | starts with `}`                                | closing    | `inside_block = false`    |
//! | inside block, contains `.Group(`               | preamble   | `saw_group_line = true`   |
//! | inside block, after group, contains `Routes.`  | bindings   |                           |
//! | anything else                                  | preamble   |                           |
//!
//! The result is held in a `RouteFile` and serialized once by `render`.
//! Classification ignores the order bindings appear in and the sort is
//! deterministic, so `canonicalize` is idempotent.
//!
//! A file without a `.Group(` line never gets a bindings zone; its
//! binding-looking lines stay in the preamble unsorted.
//!
use tracing::{debug, warn};

const GROUP_TOKEN: &str = ".Group(";
const BINDING_TOKEN: &str = "Routes.";

/// A route file split into its three zones.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RouteFile {
    /// Everything up to and including the group declaration, original text.
    pub preamble: Vec<String>,
    /// Route bindings, trimmed and sorted.
    pub bindings: Vec<String>,
    /// Closing lines (`}` and anything after), original text.
    pub closing: Vec<String>,
}

impl RouteFile {
    /// Classifies `text` into zones and sorts the bindings.
    pub fn parse(text: &str) -> Self {
        let mut file = RouteFile::default();
        let mut inside_block = false;
        let mut saw_group_line = false;

        for line in text.lines() {
            let trimmed = line.trim();
            if trimmed.is_empty() {
                continue;
            }
            if trimmed.ends_with('{') {
                inside_block = true;
                file.preamble.push(line.to_string());
            } else if trimmed.starts_with('}') {
                inside_block = false;
                file.closing.push(line.to_string());
            } else if inside_block && trimmed.contains(GROUP_TOKEN) {
                saw_group_line = true;
                file.preamble.push(line.to_string());
            } else if inside_block && saw_group_line && trimmed.contains(BINDING_TOKEN) {
                file.bindings.push(trimmed.to_string());
            } else {
                file.preamble.push(line.to_string());
            }
        }

        if !saw_group_line {
            warn!("No route group declaration found; route bindings are left unsorted.");
        }

        // `sort` is stable, so identical bindings stay adjacent in input order.
        file.bindings.sort();
        debug!(
            "Classified route file: {} preamble, {} binding, {} closing lines",
            file.preamble.len(),
            file.bindings.len(),
            file.closing.len()
        );
        file
    }

    /// Whether the exact binding statement (trimmed) is already present.
    pub fn contains_binding(&self, binding: &str) -> bool {
        self.bindings.iter().any(|b| b == binding.trim())
    }

    /// Serializes the zones back into file text: preamble, tab-indented
    /// bindings, closing lines, with a trailing newline.
    pub fn render(&self) -> String {
        let mut out = String::new();
        for line in &self.preamble {
            out.push_str(line);
            out.push('\n');
        }
        for binding in &self.bindings {
            out.push('\t');
            out.push_str(binding);
            out.push('\n');
        }
        for line in &self.closing {
            out.push_str(line);
            out.push('\n');
        }
        out
    }
}

/// Rewrites a route file in canonical form.
pub fn canonicalize(text: &str) -> String {
    RouteFile::parse(text).render()
}
