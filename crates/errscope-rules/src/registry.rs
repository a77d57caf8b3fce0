//! Registry of correlation rules

use crate::correlation::ApiNetworkRule;
use crate::rule::CorrelationRule;
use errscope_core::{Config, Correlation, ErrorReport};

/// Ordered set of correlation rules
pub struct RuleRegistry {
    rules: Vec<Box<dyn CorrelationRule>>,
}

impl RuleRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self { rules: Vec::new() }
    }

    /// Built-in rules, minus any disabled in `config`
    pub fn builtin(config: &Config) -> Self {
        let mut registry = Self::new();
        registry.register_if_enabled(Box::new(ApiNetworkRule), config);
        registry
    }

    /// Register a rule
    pub fn register(&mut self, rule: Box<dyn CorrelationRule>) {
        self.rules.push(rule);
    }

    fn register_if_enabled(&mut self, rule: Box<dyn CorrelationRule>, config: &Config) {
        if config.is_rule_enabled(rule.name()) {
            self.register(rule);
        } else {
            tracing::debug!("correlation rule disabled: {}", rule.name());
        }
    }

    /// Evaluate every rule in registration order
    pub fn evaluate(&self, report: &ErrorReport) -> Vec<Correlation> {
        self.rules
            .iter()
            .filter_map(|rule| rule.evaluate(report))
            .collect()
    }

    pub fn names(&self) -> Vec<&str> {
        self.rules.iter().map(|r| r.name()).collect()
    }

    /// Get number of registered rules
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Check if registry is empty
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl Default for RuleRegistry {
    fn default() -> Self {
        Self::builtin(&Config::default())
    }
}
