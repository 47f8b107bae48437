//! In-memory fake adapters with scripted responses, used by tests.

pub mod clock;
pub mod filesystem;
pub mod git;

pub use clock::FakeClock;
pub use filesystem::FakeFileSystem;
pub use git::FakeGitRepo;
