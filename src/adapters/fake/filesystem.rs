//! Fake filesystem holding files in memory.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use crate::ports::filesystem::FileSystem;

/// Fake filesystem backed by an in-memory map.
///
/// Paths seeded with `touch` exist without content, which is how tests
/// model the `.git` metadata directory. `denying_writes` makes every
/// write fail, for exercising report I/O errors.
pub struct FakeFileSystem {
    files: Mutex<HashMap<PathBuf, String>>,
    deny_writes: bool,
}

impl FakeFileSystem {
    /// Creates an empty fake filesystem.
    #[must_use]
    pub fn new() -> Self {
        Self { files: Mutex::new(HashMap::new()), deny_writes: false }
    }

    /// Seeds a path as existing (with empty content).
    #[must_use]
    pub fn touch(self, path: &Path) -> Self {
        self.files.lock().expect("files lock poisoned").insert(path.to_path_buf(), String::new());
        self
    }

    /// Makes all writes fail with a permission error.
    #[must_use]
    pub fn denying_writes(mut self) -> Self {
        self.deny_writes = true;
        self
    }

    /// Returns the content written to `path`, if any.
    #[must_use]
    pub fn read(&self, path: &Path) -> Option<String> {
        self.files.lock().expect("files lock poisoned").get(path).cloned()
    }

    /// Returns all paths currently present, sorted.
    #[must_use]
    pub fn paths(&self) -> Vec<PathBuf> {
        let mut paths: Vec<PathBuf> =
            self.files.lock().expect("files lock poisoned").keys().cloned().collect();
        paths.sort();
        paths
    }
}

impl Default for FakeFileSystem {
    fn default() -> Self {
        Self::new()
    }
}

impl FileSystem for FakeFileSystem {
    fn exists(&self, path: &Path) -> bool {
        self.files.lock().expect("files lock poisoned").contains_key(path)
    }

    fn write(&self, path: &Path, contents: &str) -> Result<(), std::io::Error> {
        if self.deny_writes {
            return Err(std::io::Error::new(
                std::io::ErrorKind::PermissionDenied,
                "write denied by fake filesystem",
            ));
        }
        self.files
            .lock()
            .expect("files lock poisoned")
            .insert(path.to_path_buf(), contents.to_string());
        Ok(())
    }
}
