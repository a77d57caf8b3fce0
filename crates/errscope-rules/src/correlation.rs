//! Built-in correlation rules

use crate::rule::CorrelationRule;
use errscope_core::{Category, Correlation, ErrorReport};

/// API failures seen alongside network failures
#[derive(Debug, Default, Clone, Copy)]
pub struct ApiNetworkRule;

impl CorrelationRule for ApiNetworkRule {
    fn name(&self) -> &str {
        "api_network_correlation"
    }

    fn description(&self) -> &str {
        "API and network errors occurring together"
    }

    fn evaluate(&self, report: &ErrorReport) -> Option<Correlation> {
        let categories = report.categories();
        if categories.get(Category::Api).is_empty() || categories.get(Category::Network).is_empty()
        {
            return None;
        }

        Some(Correlation {
            kind: self.name().to_string(),
            description: self.description().to_string(),
            suggested_action: "Check backend connectivity".to_string(),
        })
    }
}
