//! Pattern analysis over an error report

use crate::recurring::detect_recurring;
use crate::registry::RuleRegistry;
use errscope_core::{ErrorReport, PatternSet};

/// Derives a `PatternSet` from an `ErrorReport`
///
/// Holds no state besides its rules, so analyzing the same report twice gives
/// the same result.
pub struct PatternAnalyzer {
    rules: RuleRegistry,
}

impl PatternAnalyzer {
    pub fn new(rules: RuleRegistry) -> Self {
        Self { rules }
    }

    pub fn analyze(&self, report: &ErrorReport) -> PatternSet {
        let patterns = PatternSet {
            recurring: detect_recurring(report),
            correlated: self.rules.evaluate(report),
            ..PatternSet::default()
        };
        tracing::debug!(
            recurring = patterns.recurring.len(),
            correlated = patterns.correlated.len(),
            "analyzed error patterns"
        );
        patterns
    }
}

impl Default for PatternAnalyzer {
    fn default() -> Self {
        Self::new(RuleRegistry::default())
    }
}
