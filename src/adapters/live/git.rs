//! Live git adapter using `git` CLI commands.

use std::path::{Path, PathBuf};
use std::process::Command;

use crate::error::ReportError;
use crate::ports::git::GitRepo;

/// Live git adapter that shells out to the `git` CLI, scoped to an explicit
/// repository root via `git -C <root>`.
pub struct LiveGitRepo {
    root: PathBuf,
}

impl LiveGitRepo {
    /// Creates a live adapter operating on the repository at `root`.
    #[must_use]
    pub fn new(root: &Path) -> Self {
        Self { root: root.to_path_buf() }
    }

    /// Runs `git -C <root> <args>` and returns its stdout.
    ///
    /// Non-zero exit and spawn failures both surface as `CommandFailed`
    /// carrying the full command text.
    fn run(&self, args: &[&str]) -> Result<String, ReportError> {
        let command = format!("git -C {} {}", self.root.display(), args.join(" "));
        let output = Command::new("git")
            .arg("-C")
            .arg(&self.root)
            .args(args)
            .output()
            .map_err(|e| ReportError::CommandFailed {
                command: command.clone(),
                stderr: e.to_string(),
            })?;
        if !output.status.success() {
            return Err(ReportError::CommandFailed {
                command,
                stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
            });
        }
        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

impl GitRepo for LiveGitRepo {
    fn fetch_remote(&self) -> Result<(), ReportError> {
        self.run(&["fetch", "origin"]).map(|_| ())
    }

    fn checkout_branch(&self, branch: &str) -> Result<(), ReportError> {
        self.run(&["checkout", branch]).map(|_| ())
    }

    fn pull_branch(&self, branch: &str) -> Result<(), ReportError> {
        self.run(&["pull", "origin", branch]).map(|_| ())
    }

    fn log_oneline(&self, branch: &str) -> Result<String, ReportError> {
        self.run(&["log", "--oneline", branch])
    }

    fn show_name_only(&self, commit_id: &str) -> Result<String, ReportError> {
        self.run(&["show", "--name-only", "--pretty=format:", commit_id])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nonexistent_repo_fails_with_command_text() {
        let git = LiveGitRepo::new(Path::new("/nonexistent/path/to/repo"));
        let err = git.log_oneline("main").unwrap_err();
        match err {
            ReportError::CommandFailed { command, .. } => {
                assert!(command.contains("log --oneline main"));
            }
            other => panic!("expected CommandFailed, got: {other}"),
        }
    }
}
