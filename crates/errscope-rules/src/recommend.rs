//! Recommendations derived from report state

use errscope_core::{Category, ErrorReport, Priority, Recommendation};

pub struct RecommendationRule {
    pub priority: Priority,
    pub action: &'static str,
    pub agent: &'static str,
    pub applies: fn(&ErrorReport) -> bool,
}

/// Evaluated top to bottom; every matching rule fires
pub const RECOMMENDATION_RULES: &[RecommendationRule] = &[
    RecommendationRule {
        priority: Priority::Immediate,
        action: "Address critical errors before proceeding",
        agent: "error-correction-agent",
        applies: |report| report.summary().critical > 0,
    },
    RecommendationRule {
        priority: Priority::High,
        action: "Review API endpoints and authentication",
        agent: "backend-agent",
        applies: |report| !report.categories().get(Category::Api).is_empty(),
    },
    RecommendationRule {
        priority: Priority::Medium,
        action: "Optimize performance bottlenecks",
        agent: "performance-agent",
        applies: |report| !report.categories().get(Category::Performance).is_empty(),
    },
];

pub fn recommend(report: &ErrorReport) -> Vec<Recommendation> {
    RECOMMENDATION_RULES
        .iter()
        .filter(|rule| (rule.applies)(report))
        .map(|rule| Recommendation {
            priority: rule.priority,
            action: rule.action.to_string(),
            agent: rule.agent.to_string(),
        })
        .collect()
}
