//! Git repository port for the five version-control operations the
//! pipeline needs.

use crate::error::ReportError;

/// Provides access to a git repository through exactly the operations the
/// report pipeline performs.
///
/// Abstracting git access allows the pipeline to run against an in-memory
/// fake in tests, without a real repository or network remote.
pub trait GitRepo: Send + Sync {
    /// Fetches remote state (`git fetch origin`).
    ///
    /// # Errors
    ///
    /// Returns [`ReportError::CommandFailed`] if the fetch exits non-zero.
    fn fetch_remote(&self) -> Result<(), ReportError>;

    /// Switches the working tree to `branch` (`git checkout <branch>`).
    ///
    /// # Errors
    ///
    /// Returns [`ReportError::CommandFailed`] if the checkout exits non-zero.
    fn checkout_branch(&self, branch: &str) -> Result<(), ReportError>;

    /// Pulls the latest changes for `branch` from origin
    /// (`git pull origin <branch>`).
    ///
    /// # Errors
    ///
    /// Returns [`ReportError::CommandFailed`] if the pull exits non-zero.
    fn pull_branch(&self, branch: &str) -> Result<(), ReportError>;

    /// Returns the one-line history of `branch`, newest first
    /// (`git log --oneline <branch>`). Empty output means no commits.
    ///
    /// # Errors
    ///
    /// Returns [`ReportError::CommandFailed`] if the log query exits non-zero.
    fn log_oneline(&self, branch: &str) -> Result<String, ReportError>;

    /// Returns the file names touched by `commit_id`, one per line, with
    /// commit metadata suppressed
    /// (`git show --name-only --pretty=format: <commit_id>`).
    ///
    /// # Errors
    ///
    /// Returns [`ReportError::CommandFailed`] if the show query exits non-zero.
    fn show_name_only(&self, commit_id: &str) -> Result<String, ReportError>;
}
