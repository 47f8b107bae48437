//! Repository guard: fail fast outside a git repository.

use std::path::Path;

use crate::context::ServiceContext;
use crate::error::ReportError;

/// Confirms `root` is a git repository before anything else runs.
///
/// Checks for `.git` metadata at the root. A plain existence check covers
/// both the directory form and the file form used by worktrees and
/// submodules. No side effects.
///
/// # Errors
///
/// Returns [`ReportError::NotARepository`] when the metadata is absent.
pub fn ensure_repository(ctx: &ServiceContext, root: &Path) -> Result<(), ReportError> {
    if ctx.fs.exists(&root.join(".git")) {
        Ok(())
    } else {
        Err(ReportError::NotARepository(root.to_path_buf()))
    }
}
