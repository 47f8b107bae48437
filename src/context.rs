//! Service context bundling all port trait objects.

use std::path::Path;

use crate::ports::clock::Clock;
use crate::ports::filesystem::FileSystem;
use crate::ports::git::GitRepo;

/// Bundles the three port trait objects into a single context.
///
/// Each field provides access to one external boundary. The `live`
/// constructor wires up real adapters; tests build a context from fakes.
pub struct ServiceContext {
    /// Git repository for the five version-control operations.
    pub git: Box<dyn GitRepo>,
    /// Clock for the timestamped report filename.
    pub clock: Box<dyn Clock>,
    /// Filesystem for the guard check and report output.
    pub fs: Box<dyn FileSystem>,
}

impl ServiceContext {
    /// Creates a live context with real adapters, with git scoped to the
    /// repository at `root`.
    #[must_use]
    pub fn live(root: &Path) -> Self {
        use crate::adapters::live::clock::SystemClock;
        use crate::adapters::live::filesystem::LiveFileSystem;
        use crate::adapters::live::git::LiveGitRepo;

        Self {
            git: Box::new(LiveGitRepo::new(root)),
            clock: Box::new(SystemClock),
            fs: Box::new(LiveFileSystem),
        }
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    //! Context constructors from fake adapters.

    use super::ServiceContext;
    use crate::adapters::fake::{FakeClock, FakeFileSystem, FakeGitRepo};

    /// Builds a context around the given fakes.
    pub fn fake_context(git: FakeGitRepo, clock: FakeClock, fs: FakeFileSystem) -> ServiceContext {
        ServiceContext { git: Box::new(git), clock: Box::new(clock), fs: Box::new(fs) }
    }
}

#[cfg(test)]
mod tests {
    use super::test_support::fake_context;
    use crate::adapters::fake::{FakeClock, FakeFileSystem, FakeGitRepo};

    #[test]
    fn fake_context_serves_scripted_git_output() {
        let git = FakeGitRepo::new().with_log("abc1234 first commit\n");
        let ctx = fake_context(git, FakeClock::default_instant(), FakeFileSystem::new());
        let log = ctx.git.log_oneline("main").unwrap();
        assert!(log.starts_with("abc1234"));
    }
}
