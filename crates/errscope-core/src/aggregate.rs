//! Folding error records into a categorized, counted report

use crate::types::{Category, ErrorRecord, Severity};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Severity roll-up
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Summary {
    pub total: usize,
    pub critical: usize,
    pub high: usize,
    pub medium: usize,
    pub low: usize,
}

impl Summary {
    fn count(&mut self, severity: Severity) {
        self.total += 1;
        match severity {
            Severity::Critical => self.critical += 1,
            Severity::High => self.high += 1,
            Severity::Medium => self.medium += 1,
            Severity::Low => self.low += 1,
        }
    }

    pub fn severity_sum(&self) -> usize {
        self.critical + self.high + self.medium + self.low
    }
}

/// Per-category record buckets, each in arrival order
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Categories {
    #[serde(default)]
    api: Vec<ErrorRecord>,
    #[serde(default)]
    ui: Vec<ErrorRecord>,
    #[serde(default)]
    system: Vec<ErrorRecord>,
    #[serde(default)]
    performance: Vec<ErrorRecord>,
    #[serde(default)]
    network: Vec<ErrorRecord>,
}

impl Categories {
    pub fn get(&self, category: Category) -> &[ErrorRecord] {
        match category {
            Category::Api => &self.api,
            Category::Ui => &self.ui,
            Category::System => &self.system,
            Category::Performance => &self.performance,
            Category::Network => &self.network,
        }
    }

    fn bucket_mut(&mut self, category: Category) -> &mut Vec<ErrorRecord> {
        match category {
            Category::Api => &mut self.api,
            Category::Ui => &mut self.ui,
            Category::System => &mut self.system,
            Category::Performance => &mut self.performance,
            Category::Network => &mut self.network,
        }
    }

    /// Buckets in `Category::ALL` order
    pub fn iter(&self) -> impl Iterator<Item = (Category, &[ErrorRecord])> {
        Category::ALL.into_iter().map(move |c| (c, self.get(c)))
    }

    /// Total records across all buckets
    pub fn len(&self) -> usize {
        self.iter().map(|(_, bucket)| bucket.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Aggregated view of all records from one collection run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorReport {
    pub timestamp: DateTime<Utc>,
    pub project: String,
    #[serde(default)]
    categories: Categories,
    #[serde(default)]
    summary: Summary,
}

impl ErrorReport {
    pub fn new(project: impl Into<String>, timestamp: DateTime<Utc>) -> Self {
        Self {
            timestamp,
            project: project.into(),
            categories: Categories::default(),
            summary: Summary::default(),
        }
    }

    /// Fold one record into its bucket and the severity counts
    pub fn record(&mut self, record: ErrorRecord) {
        self.summary.count(record.severity);
        self.categories.bucket_mut(record.category).push(record);
    }

    pub fn categories(&self) -> &Categories {
        &self.categories
    }

    pub fn summary(&self) -> &Summary {
        &self.summary
    }

    /// All records, categories in fixed order, arrival order within each
    pub fn records(&self) -> impl Iterator<Item = &ErrorRecord> {
        self.categories.iter().flat_map(|(_, bucket)| bucket.iter())
    }

    /// Whether the summary agrees with itself and with the buckets
    ///
    /// Always true for reports built through `record`; a deserialized report
    /// may not satisfy it.
    pub fn is_consistent(&self) -> bool {
        let mut recount = Summary::default();
        for record in self.records() {
            recount.count(record.severity);
        }
        self.summary.total == self.summary.severity_sum()
            && self.summary.total == self.categories.len()
            && recount == self.summary
    }
}

impl Extend<ErrorRecord> for ErrorReport {
    fn extend<I: IntoIterator<Item = ErrorRecord>>(&mut self, iter: I) {
        for record in iter {
            self.record(record);
        }
    }
}

/// Build a report from records in arrival order
pub fn aggregate(
    project: impl Into<String>,
    timestamp: DateTime<Utc>,
    records: impl IntoIterator<Item = ErrorRecord>,
) -> ErrorReport {
    let mut report = ErrorReport::new(project, timestamp);
    report.extend(records);
    report
}
