//! Core library entry for the `git-change-report` CLI.

pub mod adapters;
pub mod cli;
pub mod commands;
pub mod context;
pub mod error;
pub mod guard;
pub mod history;
pub mod ports;
pub mod report;
pub mod sync;

use clap::Parser;

/// Run the CLI with the provided arguments.
///
/// # Errors
///
/// Returns an error string when argument parsing fails or the report
/// pipeline fails at any stage.
pub fn run<I, T>(args: I) -> Result<(), String>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    let cli = cli::Cli::try_parse_from(args).map_err(|err| err.to_string())?;
    commands::dispatch(&cli).map_err(|err| err.to_string())
}
