//! Report sinks consuming the change log.

pub mod console;
pub mod csv;
