//! Command dispatch and handlers.

pub mod export;
pub mod list;

use crate::cli::{Cli, Command};
use crate::context::ServiceContext;
use crate::error::ReportError;

/// Dispatch a parsed command to its handler with live adapters.
///
/// # Errors
///
/// Returns the [`ReportError`] from the selected handler; the caller
/// decides on process termination.
pub fn dispatch(cli: &Cli) -> Result<(), ReportError> {
    let ctx = ServiceContext::live(&cli.repo);
    match cli.command {
        Command::List => list::run_with_context(&ctx, &cli.repo),
        Command::Export => export::run_with_context(&ctx, &cli.repo),
    }
}
