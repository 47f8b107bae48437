//! `git-change-report list` command.

use std::path::Path;

use crate::context::ServiceContext;
use crate::error::ReportError;
use crate::guard::ensure_repository;
use crate::history::collect_change_log;
use crate::report::console;
use crate::sync::update_main_branch;

/// Execute the `list` command: guard, synchronize main, enumerate, and
/// print each commit with its changed files.
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
        return Ok(());
    }

    println!("🔍 Listing files changed in each commit (including merges):");
    print!("{}", console::render(&log));
    println!("\n✅ Completed — all changed files in main branch have been listed.");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::fake::{FakeClock, FakeFileSystem, FakeGitRepo};
    use crate::context::test_support::fake_context;

    fn guarded_fs() -> FakeFileSystem {
        FakeFileSystem::new().touch(Path::new("/repo/.git"))
    }

    #[test]
    fn empty_history_succeeds() {
        let ctx = fake_context(FakeGitRepo::new(), FakeClock::default_instant(), guarded_fs());
        assert!(run_with_context(&ctx, Path::new("/repo")).is_ok());
    }

    #[test]
    fn full_pipeline_succeeds_with_commits() {
        let git = FakeGitRepo::new()
            .with_log("a1b2c3 feature\nd4e5f6 merge\n")
            .with_show("a1b2c3", "src/x.py\n")
            .with_show("d4e5f6", "");
        let ctx = fake_context(git, FakeClock::default_instant(), guarded_fs());

        assert!(run_with_context(&ctx, Path::new("/repo")).is_ok());
    }

    #[test]
    fn guard_failure_runs_no_git_command() {
        let git = FakeGitRepo::new();
        let calls = git.calls_handle();
        let ctx = fake_context(git, FakeClock::default_instant(), FakeFileSystem::new());

        let err = run_with_context(&ctx, Path::new("/repo")).unwrap_err();

        assert!(matches!(err, ReportError::NotARepository(_)));
        assert!(calls.lock().unwrap().is_empty());
    }

    #[test]
    fn sync_failure_stops_before_enumeration() {
        let git = FakeGitRepo::new().failing_on("checkout");
        let calls = git.calls_handle();
        let ctx = fake_context(git, FakeClock::default_instant(), guarded_fs());

        let err = run_with_context(&ctx, Path::new("/repo")).unwrap_err();

        assert!(matches!(err, ReportError::CommandFailed { .. }));
        assert_eq!(*calls.lock().unwrap(), vec!["fetch", "checkout"]);
    }
}
