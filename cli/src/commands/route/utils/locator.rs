//! # SolidGO Insertion Point Locator
//!
//! File: cli/src/commands/route/utils/locator.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Finds the byte offset at which new content is spliced into an existing
//! file. There is no Go parser involved; two textual strategies cover the
//! files SolidGO edits:
//!
//! - **Closing delimiter** (route files): the last `}` in the text. Generated
//!   route files end with the registration function, so the last closing
//!   brace is always that function's terminator no matter how many bindings
//!   it already holds.
//! - **Sentinel marker** (route registry file): the position right after the
//!   line holding the first occurrence of `REGISTRY_MARKER`.
//!
use crate::core::error::ScaffoldError;

/// Comment line in the registry file after which registration calls are inserted.
/// It must already exist in the file; SolidGO never creates it.
pub const REGISTRY_MARKER: &str = "// solidgo:register-routes";

const CLOSING_DELIMITER: char = '}';

/// Byte offset of the last closing brace in `text`.
pub fn last_closing_delimiter(text: &str) -> Result<usize, ScaffoldError> {
    text.rfind(CLOSING_DELIMITER)
        .ok_or(ScaffoldError::StructureNotFound)
}

/// Byte offset just past the line terminator of the line containing the first
/// occurrence of `marker`. If that line is the last one and has no terminator,
/// the end of `text` is returned.
pub fn after_marker_line(text: &str, marker: &str) -> Result<usize, ScaffoldError> {
    let start = text
        .find(marker)
        .ok_or_else(|| ScaffoldError::MarkerNotFound {
            marker: marker.to_string(),
        })?;
    let after_marker = start + marker.len();
    Ok(match text[after_marker..].find('\n') {
        Some(newline) => after_marker + newline + 1,
        None => text.len(),
    })
}

/// Leading whitespace of the line that contains byte offset `offset`.
pub fn line_indent(text: &str, offset: usize) -> &str {
    let line_start = text[..offset].rfind('\n').map_or(0, |i| i + 1);
    let line = &text[line_start..];
    let indent_len = line.len() - line.trim_start_matches([' ', '\t']).len();
    &line[..indent_len]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_last_closing_delimiter_picks_final_brace() {
        let text = "func A() {\n}\n\nfunc B() {\n\tx := map[string]int{}\n}\n";
        let offset = last_closing_delimiter(text).unwrap();
        assert_eq!(offset, text.len() - 2);
        assert_eq!(&text[offset..], "}\n");
    }

    #[test]
    fn test_last_closing_delimiter_missing() {
        let result = last_closing_delimiter("package routes\n\nfunc Broken() {\n");
        assert!(matches!(result, Err(ScaffoldError::StructureNotFound)));
    }

    #[test]
    fn test_after_marker_line() {
        let text = "func Setup(api fiber.Router) {\n\t// solidgo:register-routes\n\tUserRoutes(api)\n}\n";
        let offset = after_marker_line(text, REGISTRY_MARKER).unwrap();
        assert!(text[offset..].starts_with("\tUserRoutes(api)"));
    }

    #[test]
    fn test_after_marker_line_uses_first_occurrence() {
        let text = "// solidgo:register-routes\nA\n// solidgo:register-routes\nB\n";
        let offset = after_marker_line(text, REGISTRY_MARKER).unwrap();
        assert_eq!(&text[offset..offset + 2], "A\n");
    }

    #[test]
    fn test_after_marker_line_at_end_without_newline() {
        let text = "x\n// solidgo:register-routes";
        assert_eq!(after_marker_line(text, REGISTRY_MARKER).unwrap(), text.len());
    }

    #[test]
    fn test_after_marker_line_missing() {
        let result = after_marker_line("func Setup() {}\n", REGISTRY_MARKER);
        match result {
            Err(ScaffoldError::MarkerNotFound { marker }) => assert_eq!(marker, REGISTRY_MARKER),
            other => panic!("expected MarkerNotFound, got {:?}", other),
        }
    }

    #[test]
    fn test_line_indent() {
        let text = "func Setup() {\n\t  // solidgo:register-routes\n}";
        let offset = text.find(REGISTRY_MARKER).unwrap();
        assert_eq!(line_indent(text, offset), "\t  ");
        assert_eq!(line_indent(text, 0), "");
    }
}
