//! Derived findings and the composed on-disk report

use crate::aggregate::ErrorReport;
use crate::types::{ConsoleSnapshot, Severity};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A message prefix seen more than once
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecurringPattern {
    pub message_prefix: String,
    pub count: usize,
    pub severity_bucket: Severity,
}

/// Finding produced by a correlation rule
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Correlation {
    pub kind: String,
    pub description: String,
    pub suggested_action: String,
}

/// Recurring and correlated findings for one error report
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PatternSet {
    #[serde(default)]
    pub recurring: Vec<RecurringPattern>,
    #[serde(default)]
    pub correlated: Vec<Correlation>,
    // Reserved, never populated
    #[serde(default)]
    pub trending: Vec<serde_json::Value>,
    #[serde(default)]
    pub critical_path: Vec<serde_json::Value>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    Immediate,
    High,
    Medium,
}

/// Prioritized action addressed to an agent
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recommendation {
    pub priority: Priority,
    pub action: String,
    pub agent: String,
}

/// The single cached unit written by `collect`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    pub timestamp: DateTime<Utc>,
    pub project: String,
    pub errors: ErrorReport,
    pub console: ConsoleSnapshot,
    #[serde(default)]
    pub patterns: PatternSet,
    #[serde(default)]
    pub recommendations: Vec<Recommendation>,
}

impl Report {
    /// Combine the pipeline outputs, stamped now
    pub fn compose(
        errors: ErrorReport,
        console: ConsoleSnapshot,
        patterns: PatternSet,
        recommendations: Vec<Recommendation>,
    ) -> Self {
        Self {
            timestamp: Utc::now(),
            project: errors.project.clone(),
            errors,
            console,
            patterns,
            recommendations,
        }
    }
}
