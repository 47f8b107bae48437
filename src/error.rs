//! Error types for the report pipeline.

use std::path::PathBuf;

use thiserror::Error;

/// A fatal failure anywhere in the guard → sync → enumerate → report chain.
///
/// Every variant aborts the run; `main` prints the message and exits with
/// status 1. Empty commit lists and empty changed-file sets are valid
/// results, not errors.
#[derive(Debug, Error)]
pub enum ReportError {
    /// The target directory has no `.git` metadata.
    #[error("❌ {} is not a Git repository. Run this inside your repo or pass --repo.", .0.display())]
    NotARepository(PathBuf),

    /// A git invocation exited non-zero or could not be spawned.
    #[error("⚠️ Command failed: {command}\n{stderr}")]
    CommandFailed {
        /// The command line that failed.
        command: String,
        /// Captured stderr (or the spawn error text).
        stderr: String,
    },

    /// The report file could not be written.
    #[error("failed to write report {}: {source}", .path.display())]
    ReportWrite {
        /// Path of the report file.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },
}
