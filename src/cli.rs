//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Top-level CLI parser for `git-change-report`.
#[derive(Debug, Parser)]
#[command(
    name = "git-change-report",
    version,
    about = "List the files changed by every commit on the main branch"
)]
pub struct Cli {
    /// Repository root to operate on.
    #[arg(long, global = true, default_value = ".")]
    pub repo: PathBuf,

    /// The command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Supported top-level subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print each commit and its changed files to the console.
    List,
    /// Export the commit/file pairs to a timestamped CSV report.
    Export,
}

#[cfg(test)]
mod tests {
    use super::{Cli, Command};
    use clap::Parser;
    use std::path::Path;

    #[test]
    fn parses_list_subcommand() {
        let cli = Cli::parse_from(["git-change-report", "list"]);
        assert!(matches!(cli.command, Command::List));
        assert_eq!(cli.repo, Path::new("."));
    }

    #[test]
    fn parses_export_with_repo_override() {
        let cli = Cli::parse_from(["git-change-report", "export", "--repo", "/srv/checkout"]);
        assert!(matches!(cli.command, Command::Export));
        assert_eq!(cli.repo, Path::new("/srv/checkout"));
    }

    #[test]
    fn rejects_unknown_subcommand() {
        let result = Cli::try_parse_from(["git-change-report", "unknown"]);
        assert!(result.is_err());
    }
}
