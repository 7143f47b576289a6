//! Read-only export of the current document.
//!
//! Same shape as the persisted document, pretty-printed, written to a file
//! named after the playbook with whitespace runs collapsed to underscores.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::models::Playbook;

/// Pretty-printed JSON projection of the document.
pub fn to_pretty_json(book: &Playbook) -> Result<String> {
    serde_json::to_string_pretty(book).context("Failed to encode playbook for export")
}

/// Derive the export file name from the playbook name: each run of
/// whitespace becomes a single underscore, then `.json` is appended.
pub fn file_name(name: &str) -> String {
    let mut out = String::with_capacity(name.len() + 5);
    let mut in_whitespace = false;
    for c in name.chars() {
        if c.is_whitespace() {
            if !in_whitespace {
                out.push('_');
            }
            in_whitespace = true;
        } else {
            out.push(c);
            in_whitespace = false;
        }
    }
    out.push_str(".json");
    out
}

/// Write the export into `dir` and return the full path.
pub fn write_to_dir(book: &Playbook, dir: &Path) -> Result<PathBuf> {
    let path = dir.join(file_name(&book.name));
    let json = to_pretty_json(book)?;
    std::fs::write(&path, json)
        .with_context(|| format!("Failed to write export to {}", path.display()))?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_name_replaces_spaces() {
        assert_eq!(file_name("My Playbook"), "My_Playbook.json");
    }

    #[test]
    fn test_file_name_collapses_whitespace_runs() {
        assert_eq!(file_name("My  Big\tPlaybook"), "My_Big_Playbook.json");
    }

    #[test]
    fn test_file_name_empty_name() {
        assert_eq!(file_name(""), ".json");
    }

    #[test]
    fn test_pretty_json_round_trips() {
        let mut book = Playbook::initialize();
        book.add_item("ethos");
        book.add_checklist_entry("Open with a story");

        let json = to_pretty_json(&book).unwrap();
        let back: Playbook = serde_json::from_str(&json).unwrap();
        assert_eq!(back, book);
    }
}
