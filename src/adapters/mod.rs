//! Adapter implementations for the port traits.

pub mod fake;
pub mod live;
