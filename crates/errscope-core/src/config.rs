//! Collector configuration

use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Collector configuration, read from `config.json` under the errscope root
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Structured error export, relative to the project root
    pub error_export: PathBuf,

    /// Build-tool logs, relative to the project root
    pub build_logs: Vec<PathBuf>,

    /// Lines scanned from the end of each build log
    pub tail_lines: usize,

    /// TCP port range probed for listeners (lsof syntax)
    pub port_range: String,

    /// Substring a process command must contain to be sampled
    pub process_filter: String,

    /// Max process rows kept in the console snapshot
    pub max_process_samples: usize,

    /// Correlation rules skipped by name
    pub disabled_rules: Vec<String>,
}

impl Config {
    pub fn new() -> Self {
        Self {
            error_export: PathBuf::from(".errscope").join("error-logs.json"),
            build_logs: vec![
                PathBuf::from("npm-debug.log"),
                PathBuf::from("yarn-error.log"),
                PathBuf::from(".next").join("build-error.log"),
            ],
            tail_lines: 100,
            port_range: "3000-3010".to_string(),
            process_filter: "node".to_string(),
            max_process_samples: 5,
            disabled_rules: Vec::new(),
        }
    }

    /// Load from disk; a missing file yields the defaults
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?;
        let config = serde_json::from_str(&contents)
            .with_context(|| format!("parsing {}", path.display()))?;
        Ok(config)
    }

    pub fn is_rule_enabled(&self, name: &str) -> bool {
        !self.disabled_rules.iter().any(|r| r == name)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults() {
        let config = Config::new();
        assert_eq!(config.tail_lines, 100);
        assert_eq!(config.build_logs.len(), 3);
        assert_eq!(config.max_process_samples, 5);
        assert!(config.is_rule_enabled("api_network_correlation"));
    }

    #[test]
    fn test_load_missing_is_default() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load(&dir.path().join("config.json")).unwrap();
        assert_eq!(config.process_filter, "node");
    }

    #[test]
    fn test_load_partial_overrides() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(
            &path,
            r#"{"tail_lines": 20, "disabled_rules": ["api_network_correlation"]}"#,
        )
        .unwrap();

        let config = Config::load(&path).unwrap();
        assert_eq!(config.tail_lines, 20);
        assert_eq!(config.port_range, "3000-3010");
        assert!(!config.is_rule_enabled("api_network_correlation"));
    }

    #[test]
    fn test_load_invalid_json_errors() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, "{not json").unwrap();
        assert!(Config::load(&path).is_err());
    }
}
