//! Pattern analysis and recommendations over an error report

pub mod analyzer;
pub mod correlation;
pub mod recommend;
pub mod recurring;
pub mod registry;
pub mod rule;

pub use analyzer::PatternAnalyzer;
pub use correlation::ApiNetworkRule;
pub use recommend::{recommend, RECOMMENDATION_RULES};
pub use recurring::{detect_recurring, HIGH_RECURRENCE_THRESHOLD, PREFIX_CHARS};
pub use registry::RuleRegistry;
pub use rule::CorrelationRule;
