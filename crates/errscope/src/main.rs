mod cli;
mod commands;

use clap::Parser;
use cli::{Cli, Commands};
use errscope_telemetry::Paths;

fn main() -> anyhow::Result<()> {
    // Initialize tracing; stdout is reserved for command output
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if cli::is_informational(&e) => {
            e.print()?;
            return Ok(());
        }
        Err(_) => return cli::print_usage(),
    };

    dispatch(cli.command, Paths::new)
}

/// Run a verb; the root directory is only resolved once a verb needs it
fn dispatch(
    command: Option<Commands>,
    resolve_paths: impl FnOnce() -> std::io::Result<Paths>,
) -> anyhow::Result<()> {
    let Some(command) = command else {
        return cli::print_usage();
    };
    let paths = resolve_paths()?;

    match command {
        Commands::Collect { path } => commands::collect::run(&paths, path),
        Commands::Analyze => commands::analyze::run(&paths),
        Commands::Summary => commands::summary::run(&paths),
    }
}
