//! Fake git adapter returning scripted outputs.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::error::ReportError;
use crate::ports::git::GitRepo;

/// Fake git repository with scripted command outputs.
///
/// Operations record their names into `calls` so tests can assert
/// invocation order. An operation listed in `fail_on` returns
/// `CommandFailed` instead of its scripted output.
pub struct FakeGitRepo {
    log_output: String,
    show_outputs: HashMap<String, String>,
    fail_on: Option<String>,
    calls: Arc<Mutex<Vec<String>>>,
}

impl FakeGitRepo {
    /// Creates a fake with no commits and no failures.
    #[must_use]
    pub fn new() -> Self {
        Self {
            log_output: String::new(),
            show_outputs: HashMap::new(),
            fail_on: None,
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Sets the output of `log_oneline`.
    #[must_use]
    pub fn with_log(mut self, output: &str) -> Self {
        self.log_output = output.to_string();
        self
    }

    /// Sets the output of `show_name_only` for one commit id.
    #[must_use]
    pub fn with_show(mut self, commit_id: &str, output: &str) -> Self {
        self.show_outputs.insert(commit_id.to_string(), output.to_string());
        self
    }

    /// Makes the named operation (`"fetch"`, `"checkout"`, `"pull"`,
    /// `"log"`, `"show"`) fail with `CommandFailed`.
    #[must_use]
    pub fn failing_on(mut self, operation: &str) -> Self {
        self.fail_on = Some(operation.to_string());
        self
    }

    /// Returns the operation names invoked so far, in order.
    #[must_use]
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().expect("calls lock poisoned").clone()
    }

    /// Returns a handle onto the call log that stays valid after the fake
    /// is boxed into a context.
    #[must_use]
    pub fn calls_handle(&self) -> Arc<Mutex<Vec<String>>> {
        Arc::clone(&self.calls)
    }

    fn record(&self, operation: &str) -> Result<(), ReportError> {
        self.calls.lock().expect("calls lock poisoned").push(operation.to_string());
        if self.fail_on.as_deref() == Some(operation) {
            return Err(ReportError::CommandFailed {
                command: format!("git {operation}"),
                stderr: format!("scripted failure for {operation}"),
            });
        }
        Ok(())
    }
}

impl Default for FakeGitRepo {
    fn default() -> Self {
        Self::new()
    }
}

impl GitRepo for FakeGitRepo {
    fn fetch_remote(&self) -> Result<(), ReportError> {
        self.record("fetch")
    }

    fn checkout_branch(&self, _branch: &str) -> Result<(), ReportError> {
        self.record("checkout")
    }

    fn pull_branch(&self, _branch: &str) -> Result<(), ReportError> {
        self.record("pull")
    }

    fn log_oneline(&self, _branch: &str) -> Result<String, ReportError> {
        self.record("log")?;
        Ok(self.log_output.clone())
    }

    fn show_name_only(&self, commit_id: &str) -> Result<String, ReportError> {
        self.record("show")?;
        Ok(self.show_outputs.get(commit_id).cloned().unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_calls_in_order() {
        let git = FakeGitRepo::new();
        git.fetch_remote().unwrap();
        git.checkout_branch("main").unwrap();
        git.pull_branch("main").unwrap();
        assert_eq!(git.calls(), vec!["fetch", "checkout", "pull"]);
    }

    #[test]
    fn scripted_failure_surfaces_as_command_failed() {
        let git = FakeGitRepo::new().failing_on("pull");
        git.fetch_remote().unwrap();
        let err = git.pull_branch("main").unwrap_err();
        assert!(matches!(err, ReportError::CommandFailed { .. }));
    }

    #[test]
    fn unknown_commit_yields_empty_show_output() {
        let git = FakeGitRepo::new();
        assert_eq!(git.show_name_only("deadbee").unwrap(), "");
    }
}
