//! Branch synchronizer: bring the local main branch up to date.

use crate::context::ServiceContext;
use crate::error::ReportError;

/// The single branch this tool reports on.
pub const MAIN_BRANCH: &str = "main";

/// Fetches remote state, switches to the main branch, and pulls the latest
/// changes, in that order.
///
/// The first failing step aborts the run; there is no retry and no
/// rollback of earlier steps. Mutates the local branch pointer and working
/// tree to match the remote.
///
/// # Errors
///
/// Returns [`ReportError::CommandFailed`] from the first git operation
/// that exits non-zero.
pub fn update_main_branch(ctx: &ServiceContext) -> Result<(), ReportError> {
    println!("🔄 Updating local main branch...");
    ctx.git.fetch_remote()?;
    ctx.git.checkout_branch(MAIN_BRANCH)?;
    ctx.git.pull_branch(MAIN_BRANCH)?;
    println!("✅ Main branch updated.\n");
    Ok(())
}
