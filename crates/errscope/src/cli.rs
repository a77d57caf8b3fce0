use clap::error::ErrorKind;
use clap::{CommandFactory, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "errscope")]
#[command(version)]
#[command(about = "Collects project error logs and analyzes error patterns")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Collect errors from project (default: current directory)
    Collect {
        /// Project root to scan
        path: Option<PathBuf>,
    },

    /// Analyze error patterns from cached data
    Analyze,

    /// Display error summary
    Summary,
}

/// `--help` / `--version` requests, which clap reports as errors
pub fn is_informational(err: &clap::Error) -> bool {
    matches!(
        err.kind(),
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion
    )
}

/// Print usage help; unknown or missing verbs land here and are not errors
pub fn print_usage() -> anyhow::Result<()> {
    Cli::command().print_help()?;
    println!();
    Ok(())
}
