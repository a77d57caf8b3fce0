use errscope_core::{Category, Report};
use errscope_telemetry::Paths;

pub fn run(paths: &Paths) -> anyhow::Result<()> {
    let Some(report) = super::load_cached(paths)? else {
        return Ok(());
    };
    println!("{}", build_summary(&report));
    Ok(())
}

fn build_summary(report: &Report) -> String {
    let summary = report.errors.summary();
    let categories = report.errors.categories();

    let mut sections = Vec::new();

    sections.push(format!(
        "Error Summary for {}\n{}\n\
         Total Errors: {}\nCritical: {}\nHigh: {}\nMedium: {}\nLow: {}",
        report.project,
        "═".repeat(39),
        summary.total,
        summary.critical,
        summary.high,
        summary.medium,
        summary.low,
    ));

    let lines: Vec<String> = Category::ALL
        .iter()
        .map(|c| format!("- {}: {}", c.label(), categories.get(*c).len()))
        .collect();
    sections.push(format!("\nCategories:\n{}", lines.join("\n")));

    sections.push(format!(
        "\nPatterns Detected: {} recurring, {} correlated",
        report.patterns.recurring.len(),
        report.patterns.correlated.len()
    ));

    sections.join("\n")
}
