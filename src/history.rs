//! Commit/file enumeration over the main branch.
//!
//! Builds the ordered commit → changed-files mapping that both report
//! sinks consume. Ordering is always the git tool's native ordering:
//! commits newest first, files in diff order.

use crate::context::ServiceContext;
use crate::error::ReportError;
use crate::sync::MAIN_BRANCH;

/// A commit on the main branch, identified by its short hash.
///
/// The enumeration position is the record's index in the containing
/// sequence; records are never mutated after creation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitRecord {
    /// Short hash as printed by `git log --oneline`.
    pub id: String,
}

/// The repository-relative paths one commit touched, in diff order.
///
/// May be empty, e.g. for a merge commit with no file-level diff.
pub type ChangedFileSet = Vec<String>;

/// One commit paired with the files it changed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangeLogEntry {
    /// The commit this entry describes.
    pub commit: CommitRecord,
    /// The files it touched.
    pub files: ChangedFileSet,
}

/// The full commit → changed-files mapping for the main branch.
///
/// Entry order is enumeration order (newest first); commit ids are unique
/// because `git log` lists each commit once. Built by
/// [`collect_change_log`] and read-only afterward.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ChangeLog {
    /// Entries in enumeration order.
    pub entries: Vec<ChangeLogEntry>,
}

impl ChangeLog {
    /// Returns `true` when the main branch had no commits.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Lists the commits on the main branch, newest first.
///
/// Each non-blank line of `git log --oneline` contributes its first
/// whitespace-delimited token as a commit id. An empty history yields an
/// empty list, not an error.
///
/// # Errors
///
/// Returns [`ReportError::CommandFailed`] if the log query fails.
pub fn list_commits(ctx: &ServiceContext) -> Result<Vec<CommitRecord>, ReportError> {
    let output = ctx.git.log_oneline(MAIN_BRANCH)?;
    let commits = output
        .lines()
        .filter_map(|line| line.split_whitespace().next())
        .map(|id| CommitRecord { id: id.to_string() })
        .collect();
    Ok(commits)
}

/// Lists the files changed by one commit, in the tool's reported order.
///
/// Blank lines in the `git show` output are dropped. An empty set is a
/// valid result for commits with no file-level diff.
///
/// # Errors
///
/// Returns [`ReportError::CommandFailed`] if the show query fails.
pub fn changed_files(
    ctx: &ServiceContext,
    commit: &CommitRecord,
) -> Result<ChangedFileSet, ReportError> {
    let output = ctx.git.show_name_only(&commit.id)?;
    let files = output
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(ToString::to_string)
        .collect();
    Ok(files)
}

/// Builds the full change log: every commit on main with its changed files.
///
/// # Errors
///
/// Returns the first [`ReportError::CommandFailed`] from the underlying
/// queries; no partial mapping survives a failure.
pub fn collect_change_log(ctx: &ServiceContext) -> Result<ChangeLog, ReportError> {
    let mut entries = Vec::new();
    for commit in list_commits(ctx)? {
        let files = changed_files(ctx, &commit)?;
        entries.push(ChangeLogEntry { commit, files });
    }
    Ok(ChangeLog { entries })
}
