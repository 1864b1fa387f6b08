//! Command line interface

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use olc_domain::value_objects::ProbeFailurePolicy;

/// Command line interface for OSLC Link Check
#[derive(Parser, Debug)]
#[command(name = "olc", version, about = "OSLC Link Check - backlink validation for work items")]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Check that every OSLC link of the query's work items has its backlink
    #[command(name = "validateoslclinks")]
    ValidateOslcLinks(ValidateArgs),
}

/// Parameters of `validateoslclinks`
#[derive(Args, Debug, Clone)]
pub struct ValidateArgs {
    /// Repository URL, e.g. `https://clm.example.com:9443/ccm`
    #[arg(long)]
    pub repository: String,

    /// User id to log in with
    #[arg(long)]
    pub user: String,

    /// File whose first line is the password
    #[arg(long = "password-file", visible_alias = "passwordFile")]
    pub password_file: PathBuf,

    /// Fully-qualified project area name
    #[arg(long = "project-area", visible_alias = "projectArea")]
    pub project_area: String,

    /// Saved query name
    #[arg(long)]
    pub query: String,

    /// Comma-separated project or team areas the query is shared with
    ///
    /// Without it the query is looked up among the user's personal queries.
    #[arg(long)]
    pub querysource: Option<String>,

    /// Log every skipped reference and index triple
    #[arg(long)]
    pub trace: bool,

    /// Log each checked link
    #[arg(long)]
    pub debug: bool,

    /// How unreachable link targets are counted
    #[arg(long = "probe-failure", value_name = "treat-as-unknown|treat-as-broken")]
    pub probe_failure: Option<ProbeFailurePolicy>,
}
