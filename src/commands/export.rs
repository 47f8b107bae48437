//! `git-change-report export` command.

use std::path::Path;

use crate::context::ServiceContext;
use crate::error::ReportError;
use crate::guard::ensure_repository;
use crate::history::collect_change_log;
use crate::report::csv;
use crate::sync::update_main_branch;

/// Execute the `export` command: guard, synchronize main, enumerate, and
/// write the commit/file pairs to a timestamped CSV report.
///
/// The change log is collected in full before the file is opened, so a
/// failed enumeration leaves no report behind.
///
/// # Errors
///
/// Returns [`ReportError`] from the first failing pipeline stage.
pub fn run_with_context(ctx: &ServiceContext, root: &Path) -> Result<(), ReportError> {
    ensure_repository(ctx, root)?;
    update_main_branch(ctx)?;

    println!("📜 Collecting all commits from main branch...");
    let log = collect_change_log(ctx)?;
    if log.is_empty() {
        println!("⚠️ No commits found in main branch.");
    }

    let path = csv::write(ctx, root, &log)?;
    println!("💾 Report written to {}", path.display());
    Ok(())
}
