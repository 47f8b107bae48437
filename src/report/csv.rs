//! CSV report: timestamped two-column file of (commit, file) pairs.

use std::fmt::Write as _;
use std::path::{Path, PathBuf};

use crate::context::ServiceContext;
use crate::error::ReportError;
use crate::history::ChangeLog;

/// Header row of the report file.
pub const HEADER: &str = "Commit ID, Changed File";

/// Builds the report filename from the clock's current time.
///
/// Second granularity: two runs within the same wall-clock second produce
/// the same name and the later one overwrites the earlier. Documented
/// boundary, not fixed.
#[must_use]
pub fn report_filename(ctx: &ServiceContext) -> String {
    let stamp = ctx.clock.now().format("%Y-%m-%d_%H-%M-%S");
    format!("git_changes_report_{stamp}.csv")
}

/// Renders the change log as CSV rows under the two-column header.
///
/// One row per (commit, file) pair, commits in enumeration order and
/// files in diff order; the commit id repeats on every row. A commit with
/// no changed files contributes no rows, unlike the console report which
/// prints a placeholder for it. Rows are newline-terminated and there is
/// no trailing summary row.
#[must_use]
pub fn render(log: &ChangeLog) -> String {
    let mut out = String::new();
    out.push_str(HEADER);
    out.push('\n');
    for entry in &log.entries {
        for file in &entry.files {
            let _ = writeln!(out, "{}, {}", entry.commit.id, file);
        }
    }
    out
}

/// Writes the change log to a timestamped CSV file under `root` and
/// returns the path written.
///
/// # Errors
///
/// Returns [`ReportError::ReportWrite`] if the file cannot be written.
pub fn write(ctx: &ServiceContext, root: &Path, log: &ChangeLog) -> Result<PathBuf, ReportError> {
    let path = root.join(report_filename(ctx));
    ctx.fs
        .write(&path, &render(log))
        .map_err(|source| ReportError::ReportWrite { path: path.clone(), source })?;
    Ok(path)
}
