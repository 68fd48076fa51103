//! Binary entrypoint for the `report-status` CLI.

use std::process::ExitCode;

fn main() -> ExitCode {
    // Loads GITHUB_TOKEN from a local .env during development; a missing
    // file is not an error.
    let _ = dotenvy::dotenv();

    match report_status::run(std::env::args()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}
