use errscope_core::{Config, PatternSet, Report};
use errscope_rules::{PatternAnalyzer, RuleRegistry};
use errscope_telemetry::Paths;

pub fn run(paths: &Paths) -> anyhow::Result<()> {
    let Some(report) = super::load_cached(paths)? else {
        return Ok(());
    };
    let config = Config::load(&paths.config_file())?;

    let patterns = reanalyze(&report, &config);
    println!("{}", serde_json::to_string_pretty(&patterns)?);
    Ok(())
}

/// Recompute patterns from the cached errors with the current rule set
fn reanalyze(report: &Report, config: &Config) -> PatternSet {
    PatternAnalyzer::new(RuleRegistry::builtin(config)).analyze(&report.errors)
}
