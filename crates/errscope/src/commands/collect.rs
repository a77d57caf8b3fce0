use chrono::Utc;
use errscope_core::{aggregate, Config, Report};
use errscope_rules::{recommend, PatternAnalyzer, RuleRegistry};
use errscope_sources::{capture_console, collect_records, ProcessInspector, ShellInspector};
use errscope_store::ReportStore;
use errscope_telemetry::Paths;
use std::path::{Path, PathBuf};

pub fn run(paths: &Paths, project: Option<PathBuf>) -> anyhow::Result<()> {
    run_with(paths, project, &ShellInspector)
}

fn run_with(
    paths: &Paths,
    project: Option<PathBuf>,
    inspector: &dyn ProcessInspector,
) -> anyhow::Result<()> {
    let project = match project {
        Some(p) => p,
        None => std::env::current_dir()?,
    };
    let config = Config::load(&paths.config_file())?;

    tracing::info!("Collecting error logs from {}", project.display());
    let report = build_report(&project, &config, inspector);

    paths.ensure_dirs()?;
    ReportStore::new(paths.cache_file()).save(&report)?;

    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}

/// Run the whole pipeline against `project`
fn build_report(project: &Path, config: &Config, inspector: &dyn ProcessInspector) -> Report {
    let collected_at = Utc::now();

    let batch = collect_records(project, config, collected_at);
    if !batch.warnings.is_empty() {
        tracing::info!("{} source(s) could not be read", batch.warnings.len());
    }
    let errors = aggregate(project_name(project), collected_at, batch.items);
    let console = capture_console(inspector, config, collected_at);

    let analyzer = PatternAnalyzer::new(RuleRegistry::builtin(config));
    let patterns = analyzer.analyze(&errors);
    let recommendations = recommend(&errors);

    Report::compose(errors, console, patterns, recommendations)
}

/// Base name of the project directory, resolving `.` and friends
fn project_name(project: &Path) -> String {
    let resolved = project
        .canonicalize()
        .unwrap_or_else(|_| project.to_path_buf());
    resolved
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| resolved.display().to_string())
}
