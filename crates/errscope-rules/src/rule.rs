//! Base correlation rule trait

use errscope_core::{Correlation, ErrorReport};

/// A predicate over an error report that yields at most one correlation
pub trait CorrelationRule: Send + Sync {
    /// Rule name (unique identifier, also the emitted `kind`)
    fn name(&self) -> &str;

    /// Rule description
    fn description(&self) -> &str {
        ""
    }

    /// Evaluate against a report; must not depend on anything but `report`
    fn evaluate(&self, report: &ErrorReport) -> Option<Correlation>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    struct NeverRule;

    impl CorrelationRule for NeverRule {
        fn name(&self) -> &str {
            "never"
        }

        fn evaluate(&self, _report: &ErrorReport) -> Option<Correlation> {
            None
        }
    }

    #[test]
    fn test_rule_defaults() {
        let rule = NeverRule;
        assert_eq!(rule.name(), "never");
        assert_eq!(rule.description(), "");
        assert!(rule.evaluate(&ErrorReport::new("p", Utc::now())).is_none());
    }
}
