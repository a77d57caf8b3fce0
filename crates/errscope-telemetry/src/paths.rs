//! Path resolution for the collector's working directory

use std::path::PathBuf;

/// Environment variable overriding the root directory
pub const ROOT_ENV: &str = "ERRSCOPE_HOME";

/// Resolves the fixed layout under the collector root:
///
/// ```text
/// <root>/cache/errors.json
/// <root>/logs/console.log
/// <root>/analysis/
/// <root>/config.json
/// ```
#[derive(Debug, Clone)]
pub struct Paths {
    pub root: PathBuf,
}

impl Paths {
    /// Resolve the root from `ERRSCOPE_HOME`, falling back to `~/.claude/cce`
    pub fn new() -> std::io::Result<Self> {
        if let Some(root) = std::env::var_os(ROOT_ENV).filter(|v| !v.is_empty()) {
            return Ok(Self::with_root(root));
        }

        let home = dirs::home_dir().ok_or_else(|| {
            std::io::Error::new(std::io::ErrorKind::NotFound, "home directory not found")
        })?;

        Ok(Self::with_root(home.join(".claude").join("cce")))
    }

    /// Use an explicit root directory
    pub fn with_root(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn cache_dir(&self) -> PathBuf {
        self.root.join("cache")
    }

    /// The single cached report slot
    pub fn cache_file(&self) -> PathBuf {
        self.cache_dir().join("errors.json")
    }

    pub fn logs_dir(&self) -> PathBuf {
        self.root.join("logs")
    }

    pub fn console_log(&self) -> PathBuf {
        self.logs_dir().join("console.log")
    }

    pub fn analysis_dir(&self) -> PathBuf {
        self.root.join("analysis")
    }

    pub fn config_file(&self) -> PathBuf {
        self.root.join("config.json")
    }

    /// Create `cache/`, `logs/` and `analysis/` if absent
    pub fn ensure_dirs(&self) -> std::io::Result<()> {
        for dir in [self.cache_dir(), self.logs_dir(), self.analysis_dir()] {
            std::fs::create_dir_all(&dir)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    fn test_layout() {
        let paths = Paths::with_root("/tmp/errscope-test");
        assert!(paths.cache_file().ends_with("cache/errors.json"));
        assert!(paths.console_log().ends_with("logs/console.log"));
        assert!(paths.analysis_dir().ends_with("analysis"));
        assert!(paths.config_file().ends_with("config.json"));
    }

    #[test]
    fn test_ensure_dirs_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let paths = Paths::with_root(dir.path().join("root"));

        paths.ensure_dirs().unwrap();
        paths.ensure_dirs().unwrap();

        assert!(paths.cache_dir().is_dir());
        assert!(paths.logs_dir().is_dir());
        assert!(paths.analysis_dir().is_dir());
        // Reserved log file is not created
        assert!(!paths.console_log().exists());
    }

    #[test]
    #[serial]
    fn test_env_override() {
        let dir = tempfile::tempdir().unwrap();
        std::env::set_var(ROOT_ENV, dir.path());
        let paths = Paths::new().unwrap();
        std::env::remove_var(ROOT_ENV);

        assert_eq!(paths.root, dir.path());
    }

    #[test]
    #[serial]
    fn test_default_root() {
        std::env::remove_var(ROOT_ENV);
        let paths = Paths::new().unwrap();
        assert!(paths.root.ends_with(".claude/cce"));
    }
}
