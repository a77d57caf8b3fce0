//! Core types for error collection

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("unknown category: {0}")]
    UnknownCategory(String),
    #[error("unknown severity: {0}")]
    UnknownSeverity(String),
}

/// Error category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Api,
    Ui,
    System,
    Performance,
    Network,
}

impl Category {
    /// Fixed iteration order used everywhere categories are walked
    pub const ALL: [Category; 5] = [
        Category::Api,
        Category::Ui,
        Category::System,
        Category::Performance,
        Category::Network,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Api => "api",
            Category::Ui => "ui",
            Category::System => "system",
            Category::Performance => "performance",
            Category::Network => "network",
        }
    }

    /// Display label for human-readable output
    pub fn label(&self) -> &'static str {
        match self {
            Category::Api => "API",
            Category::Ui => "UI",
            Category::System => "System",
            Category::Performance => "Performance",
            Category::Network => "Network",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lowered = s.trim().to_lowercase();
        Category::ALL
            .into_iter()
            .find(|c| c.as_str() == lowered)
            .ok_or_else(|| ParseError::UnknownCategory(s.to_string()))
    }
}

/// Error severity, most severe first
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Critical,
    High,
    Medium,
    Low,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Critical => "critical",
            Severity::High => "high",
            Severity::Medium => "medium",
            Severity::Low => "low",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Severity {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "critical" => Ok(Severity::Critical),
            "high" => Ok(Severity::High),
            "medium" => Ok(Severity::Medium),
            "low" => Ok(Severity::Low),
            _ => Err(ParseError::UnknownSeverity(s.to_string())),
        }
    }
}

/// One normalized unit of error information
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorRecord {
    pub category: Category,
    pub severity: Severity,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_file: Option<String>,
    pub timestamp: DateTime<Utc>,
}

impl ErrorRecord {
    pub fn new(
        category: Category,
        severity: Severity,
        message: impl Into<String>,
        timestamp: DateTime<Utc>,
    ) -> Self {
        Self {
            category,
            severity,
            message: message.into(),
            source_file: None,
            timestamp,
        }
    }

    pub fn with_source(mut self, source_file: impl Into<String>) -> Self {
        self.source_file = Some(source_file.into());
        self
    }
}

/// A sampled process row
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProcessSample {
    pub pid: u32,
    pub cpu: f32,
    pub mem: f32,
    pub command: String,
}

/// Point-in-time listening ports and process samples
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConsoleSnapshot {
    pub timestamp: DateTime<Utc>,
    #[serde(default)]
    pub listening_ports: BTreeSet<u16>,
    #[serde(default)]
    pub process_samples: Vec<ProcessSample>,
}

impl ConsoleSnapshot {
    pub fn empty(timestamp: DateTime<Utc>) -> Self {
        Self {
            timestamp,
            listening_ports: BTreeSet::new(),
            process_samples: Vec::new(),
        }
    }
}
