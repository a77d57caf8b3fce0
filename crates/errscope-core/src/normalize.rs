//! Conversion of raw sources into error records

use crate::types::{Category, ErrorRecord, Severity};
use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Substrings that promote a build-log line to an error (case-sensitive)
pub const BUILD_LOG_MARKERS: &[&str] = &["ERROR", "FAILED"];

/// Structured error export written by the host application
///
/// ```json
/// {"logs": [{"category": "API", "severity": "HIGH", "message": "...",
///            "timestamp": "2025-01-01T00:00:00Z", "count": 1}]}
/// ```
///
/// Entries stay raw JSON until normalization so that one malformed entry
/// only drops itself.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ErrorExport {
    #[serde(default)]
    pub logs: Vec<Value>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportEntry {
    pub category: String,
    pub severity: String,
    /// `null` or non-string messages read as empty
    #[serde(default, deserialize_with = "lenient")]
    pub message: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub timestamp: Option<String>,
    /// Occurrence count kept by the host; not expanded into extra records
    #[serde(default, deserialize_with = "lenient")]
    pub count: Option<u64>,
}

impl ExportEntry {
    pub fn from_value(value: &Value) -> Result<Self, serde_json::Error> {
        Self::deserialize(value)
    }
}

/// Optional field that reads as `None` when it has the wrong type
fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).ok())
}

/// Tail of a free-text build log
#[derive(Debug, Clone)]
pub struct BuildLog {
    pub file_name: String,
    pub lines: Vec<String>,
}

pub fn is_error_line(line: &str) -> bool {
    BUILD_LOG_MARKERS.iter().any(|marker| line.contains(marker))
}

/// One record per export entry with a known category and severity
pub fn normalize_export(
    export: &ErrorExport,
    source_file: Option<&str>,
    collected_at: DateTime<Utc>,
) -> Vec<ErrorRecord> {
    export
        .logs
        .iter()
        .enumerate()
        .filter_map(|(index, raw)| {
            let entry = match ExportEntry::from_value(raw) {
                Ok(entry) => entry,
                Err(e) => {
                    tracing::debug!("dropping export entry {}: {}", index, e);
                    return None;
                }
            };
            let category: Category = match entry.category.parse() {
                Ok(c) => c,
                Err(e) => {
                    tracing::debug!("dropping export entry {}: {}", index, e);
                    return None;
                }
            };
            let severity: Severity = match entry.severity.parse() {
                Ok(s) => s,
                Err(e) => {
                    tracing::debug!("dropping export entry {}: {}", index, e);
                    return None;
                }
            };

            let timestamp = entry
                .timestamp
                .as_deref()
                .and_then(|ts| DateTime::parse_from_rfc3339(ts).ok())
                .map(|ts| ts.with_timezone(&Utc))
                .unwrap_or(collected_at);

            let message = entry.message.unwrap_or_default();
            let record = ErrorRecord::new(category, severity, message.as_str(), timestamp);
            Some(match source_file {
                Some(file) => record.with_source(file),
                None => record,
            })
        })
        .collect()
}

/// `system`/`high` records for every marker line in the log tail
pub fn normalize_build_log(log: &BuildLog, collected_at: DateTime<Utc>) -> Vec<ErrorRecord> {
    log.lines
        .iter()
        .filter(|line| is_error_line(line))
        .map(|line| {
            ErrorRecord::new(Category::System, Severity::High, line.trim(), collected_at)
                .with_source(log.file_name.as_str())
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    use serde_json::json;

    fn entry(category: &str, severity: &str, message: &str) -> Value {
        json!({"category": category, "severity": severity, "message": message, "count": 1})
    }

    #[test]
    fn test_export_maps_entries() {
        let export = ErrorExport {
            logs: vec![
                entry("API", "HIGH", "Failed to fetch user data"),
                entry("network", "critical", "DNS lookup failed"),
            ],
        };
        let records = normalize_export(&export, Some("error-logs.json"), Utc::now());

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].category, Category::Api);
        assert_eq!(records[0].severity, Severity::High);
        assert_eq!(records[1].category, Category::Network);
        assert_eq!(records[1].source_file.as_deref(), Some("error-logs.json"));
    }

    #[test]
    fn test_export_drops_unknown_category_and_severity() {
        let export = ErrorExport {
            logs: vec![
                entry("database", "high", "deadlock"),
                entry("ui", "fatal", "blank screen"),
                entry("ui", "low", "tooltip clipped"),
            ],
        };
        let records = normalize_export(&export, None, Utc::now());
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].message, "tooltip clipped");
    }

    #[test]
    fn test_export_malformed_entries_drop_individually() {
        let export: ErrorExport = serde_json::from_value(json!({"logs": [
            {"category": "api", "severity": "high", "message": "first"},
            {"category": 7, "severity": "high", "message": "numeric category"},
            {"severity": "low", "message": "no category"},
            {"category": "ui", "severity": 3, "message": "numeric severity"},
            "not an object",
            {"category": "ui", "severity": "medium", "message": null},
            {"category": "network", "severity": "low", "message": "odd count", "count": -4},
            {"category": "api", "severity": "high", "message": "last"}
        ]}))
        .unwrap();

        let records = normalize_export(&export, None, Utc::now());
        let messages: Vec<_> = records.iter().map(|r| r.message.as_str()).collect();
        assert_eq!(messages, vec!["first", "", "odd count", "last"]);
        assert_eq!(records[1].category, Category::Ui);
    }

    #[test]
    fn test_export_timestamp_parsing() {
        let collected_at = Utc::now();
        let export = ErrorExport {
            logs: vec![
                json!({"category": "api", "severity": "low", "message": "dated",
                       "timestamp": "2025-03-01T12:00:00+02:00"}),
                json!({"category": "api", "severity": "low", "message": "garbage",
                       "timestamp": "yesterday"}),
                json!({"category": "api", "severity": "low", "message": "numeric",
                       "timestamp": 1740830400}),
            ],
        };
        let records = normalize_export(&export, None, collected_at);

        assert_eq!(records.len(), 3);
        assert_eq!(records[0].timestamp.to_rfc3339(), "2025-03-01T10:00:00+00:00");
        assert_eq!(records[1].timestamp, collected_at);
        assert_eq!(records[2].timestamp, collected_at);
    }

    #[test]
    fn test_export_count_not_expanded() {
        let export = ErrorExport {
            logs: vec![json!({"category": "api", "severity": "medium",
                              "message": "retry", "count": 12})],
        };
        assert_eq!(normalize_export(&export, None, Utc::now()).len(), 1);
    }

    #[test]
    fn test_empty_export() {
        assert!(normalize_export(&ErrorExport::default(), None, Utc::now()).is_empty());
    }

    #[test]
    fn test_build_log_markers_case_sensitive() {
        assert!(is_error_line("npm ERROR code ELIFECYCLE"));
        assert!(is_error_line("Build FAILED after 3s"));
        assert!(!is_error_line("error: lowercase is ignored"));
        assert!(!is_error_line("Failed quietly"));
    }

    #[test]
    fn test_build_log_records() {
        let log = BuildLog {
            file_name: "yarn-error.log".to_string(),
            lines: vec![
                "info fetching".to_string(),
                "   ERROR Module not found   ".to_string(),
                "done".to_string(),
            ],
        };
        let records = normalize_build_log(&log, Utc::now());

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].category, Category::System);
        assert_eq!(records[0].severity, Severity::High);
        assert_eq!(records[0].message, "ERROR Module not found");
        assert_eq!(records[0].source_file.as_deref(), Some("yarn-error.log"));
    }
}
