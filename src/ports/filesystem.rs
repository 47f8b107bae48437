//! Filesystem port for the guard check and report output.

use std::path::Path;

/// Provides the filesystem access the pipeline needs: an existence check
/// for the repository guard and a write for the CSV sink.
pub trait FileSystem: Send + Sync {
    /// Returns `true` if the path exists on the filesystem.
    fn exists(&self, path: &Path) -> bool;

    /// Writes the given contents to a file, creating or overwriting it.
    ///
    /// # Errors
    ///
    /// Returns the underlying I/O error if the write fails.
    fn write(&self, path: &Path, contents: &str) -> Result<(), std::io::Error>;
}
