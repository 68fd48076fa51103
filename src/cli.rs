//! CLI argument definitions.

use clap::{Args, Parser, Subcommand};

/// Top-level CLI parser for `report-status`.
#[derive(Debug, Parser)]
#[command(name = "report-status", version, about = "Report CI build status into a tracking issue")]
pub struct Cli {
    /// The command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Supported top-level subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Update the tracking issue for one build outcome.
    Report(ReportArgs),
}

/// Inputs for the `report` command.
///
/// `repository`, `run-id` and the token default to the environment the CI
/// runtime provides, so a workflow step only needs to pass the outcome and
/// the tracking-issue coordinates.
#[derive(Debug, Args)]
pub struct ReportArgs {
    /// Build outcome: `success`, `failure` or `cancelled`. Any other value
    /// is treated as a failure.
    #[arg(long)]
    pub status: String,

    /// Repository containing the tracking issue, as `owner/name`.
    #[arg(long)]
    pub issue_repository: String,

    /// Number of the tracking issue.
    #[arg(long)]
    pub issue_number: u64,

    /// Repository whose CI produced this run; used in comment links.
    #[arg(long, env = "GITHUB_REPOSITORY")]
    pub repository: Option<String>,

    /// Identifier of the CI run; used in comment links.
    #[arg(long, env = "GITHUB_RUN_ID")]
    pub run_id: Option<u64>,

    /// Commit of the source repository under test, recorded in the status
    /// snapshot.
    #[arg(long)]
    pub source_sha: Option<String>,

    /// Commit of the dependent project under test, recorded in the status
    /// snapshot.
    #[arg(long)]
    pub project_sha: Option<String>,

    /// API token used for issue tracker calls.
    #[arg(long, env = "GITHUB_TOKEN", hide_env_values = true)]
    pub token: Option<String>,
}
