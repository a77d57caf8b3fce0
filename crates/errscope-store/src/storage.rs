use errscope_core::Report;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("No cached errors found. Run \"collect\" first.")]
    NotFound,

    #[error("Cached report at {path} is corrupt: {reason}. Run \"collect\" to replace it.")]
    CorruptState { path: PathBuf, reason: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Owns the one cache file; each `save` replaces whatever was there
#[derive(Debug, Clone)]
pub struct ReportStore {
    path: PathBuf,
}

impl ReportStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn exists(&self) -> bool {
        self.path.is_file()
    }

    pub fn save(&self, report: &Report) -> Result<(), StoreError> {
        let json = serde_json::to_string_pretty(report)?;
        errscope_telemetry::atomic_write(&self.path, json.as_bytes())?;
        tracing::debug!("saved report to {}", self.path.display());
        Ok(())
    }

    pub fn load(&self) -> Result<Report, StoreError> {
        let contents = match std::fs::read_to_string(&self.path) {
            Ok(c) => c,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(StoreError::NotFound)
            }
            Err(e) => return Err(e.into()),
        };

        let report: Report =
            serde_json::from_str(&contents).map_err(|e| self.corrupt(e.to_string()))?;

        if !report.errors.is_consistent() {
            return Err(self.corrupt("summary counts disagree with categories".to_string()));
        }

        Ok(report)
    }

    fn corrupt(&self, reason: String) -> StoreError {
        StoreError::CorruptState {
            path: self.path.clone(),
            reason,
        }
    }
}
