//! Log-file readers
//!
//! Every artifact is optional. A missing file contributes nothing; a file
//! that exists but cannot be read or decoded is logged, recorded as a
//! warning, and skipped.

use chrono::{DateTime, Utc};
use errscope_core::{
    normalize_build_log, normalize_export, BuildLog, Config, ErrorExport, ErrorRecord,
};
use errscope_telemetry::read_tail_lines;
use std::path::Path;

/// Items read from one kind of source, plus non-fatal read failures
#[derive(Debug)]
pub struct SourceBatch<T> {
    pub items: Vec<T>,
    pub warnings: Vec<String>,
}

impl<T> SourceBatch<T> {
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            warnings: Vec::new(),
        }
    }

    fn warn(&mut self, message: String) {
        tracing::warn!("{}", message);
        self.warnings.push(message);
    }
}

impl<T> Default for SourceBatch<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Decoded structured export and the name of the file it came from
#[derive(Debug, Clone)]
pub struct ExportFile {
    pub file_name: String,
    pub export: ErrorExport,
}

fn base_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

/// Read the tail of each configured build log under `project`
pub fn read_build_logs(project: &Path, config: &Config) -> SourceBatch<BuildLog> {
    let mut batch = SourceBatch::new();

    for relative in &config.build_logs {
        let path = project.join(relative);
        if !path.exists() {
            tracing::debug!("build log not present: {}", path.display());
            continue;
        }

        match read_tail_lines(&path, config.tail_lines) {
            Ok(lines) => batch.items.push(BuildLog {
                file_name: base_name(&path),
                lines,
            }),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!("build log vanished: {}", path.display());
            }
            Err(e) => batch.warn(format!("Error reading {}: {}", path.display(), e)),
        }
    }

    batch
}

/// Read the host application's structured error export, if present
pub fn read_error_export(project: &Path, config: &Config) -> SourceBatch<ExportFile> {
    let mut batch = SourceBatch::new();
    let path = project.join(&config.error_export);

    if !path.exists() {
        tracing::debug!("no error export at {}", path.display());
        return batch;
    }

    let contents = match std::fs::read_to_string(&path) {
        Ok(c) => c,
        Err(e) => {
            batch.warn(format!("Error reading {}: {}", path.display(), e));
            return batch;
        }
    };

    match serde_json::from_str::<ErrorExport>(&contents) {
        Ok(export) => {
            tracing::info!("found error export with {} entries", export.logs.len());
            batch.items.push(ExportFile {
                file_name: base_name(&path),
                export,
            });
        }
        Err(e) => batch.warn(format!("Error parsing {}: {}", path.display(), e)),
    }

    batch
}

/// Read every source under `project` and normalize it into records
///
/// Export records come first, then build-log records in configured order.
pub fn collect_records(
    project: &Path,
    config: &Config,
    collected_at: DateTime<Utc>,
) -> SourceBatch<ErrorRecord> {
    let exports = read_error_export(project, config);
    let logs = read_build_logs(project, config);

    let mut batch = SourceBatch::new();
    for file in &exports.items {
        batch.items.extend(normalize_export(
            &file.export,
            Some(&file.file_name),
            collected_at,
        ));
    }
    for log in &logs.items {
        batch.items.extend(normalize_build_log(log, collected_at));
    }

    batch.warnings.extend(exports.warnings);
    batch.warnings.extend(logs.warnings);
    batch
}
