//! Console report: per-commit file listing with status glyphs.

use std::fmt::Write;

use crate::history::ChangeLog;

/// Renders the change log for the console, one block per commit in
/// enumeration order.
///
/// Every commit gets a header line; a commit with no changed files gets a
/// placeholder line instead of file bullets, so the console output always
/// accounts for every commit.
#[must_use]
pub fn render(log: &ChangeLog) -> String {
    let mut out = String::new();
    for entry in &log.entries {
        let _ = writeln!(out, "\n📦 Commit: {}", entry.commit.id);
        if entry.files.is_empty() {
            out.push_str("  (No file changes in this commit)\n");
        } else {
            for file in &entry.files {
                let _ = writeln!(out, "  • {file}");
            }
        }
    }
    out
}
