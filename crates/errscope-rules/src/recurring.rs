//! Recurring message detection

use errscope_core::{ErrorReport, RecurringPattern, Severity};
use std::collections::HashMap;

/// Characters of a message used as its grouping key
pub const PREFIX_CHARS: usize = 50;
/// Groups larger than this are bucketed `high`, others `medium`
pub const HIGH_RECURRENCE_THRESHOLD: usize = 5;
const MIN_RECURRENCE: usize = 2;

fn message_prefix(message: &str) -> String {
    message.chars().take(PREFIX_CHARS).collect()
}

/// Group all records by message prefix and keep groups seen more than once
///
/// Output follows first-occurrence order over `ErrorReport::records`.
pub fn detect_recurring(report: &ErrorReport) -> Vec<RecurringPattern> {
    let mut order: Vec<(String, usize)> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for record in report.records() {
        if record.message.is_empty() {
            continue;
        }
        let prefix = message_prefix(&record.message);
        match index.get(&prefix) {
            Some(&slot) => order[slot].1 += 1,
            None => {
                index.insert(prefix.clone(), order.len());
                order.push((prefix, 1));
            }
        }
    }

    order
        .into_iter()
        .filter(|(_, count)| *count >= MIN_RECURRENCE)
        .map(|(message_prefix, count)| RecurringPattern {
            message_prefix,
            count,
            severity_bucket: if count > HIGH_RECURRENCE_THRESHOLD {
                Severity::High
            } else {
                Severity::Medium
            },
        })
        .collect()
}
