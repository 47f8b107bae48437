//! Port traits defining external boundaries.
//!
//! Each trait represents a boundary between the report pipeline and an
//! external system (git, time, filesystem). Implementations live in
//! `src/adapters/`.

pub mod clock;
pub mod filesystem;
pub mod git;

pub use clock::Clock;
pub use filesystem::FileSystem;
pub use git::GitRepo;
