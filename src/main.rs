//! Binary entrypoint for the `git-change-report` CLI.

use std::process::ExitCode;

fn main() -> ExitCode {
    match git_change_report::run(std::env::args()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}
