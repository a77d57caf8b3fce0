pub mod analyze;
pub mod collect;
pub mod summary;

use errscope_core::Report;
use errscope_store::{ReportStore, StoreError};
use errscope_telemetry::Paths;

/// Load the cached report, printing the reason to stderr when there is none
///
/// A missing or corrupt cache is an expected outcome, not a failure.
fn load_cached(paths: &Paths) -> anyhow::Result<Option<Report>> {
    match ReportStore::new(paths.cache_file()).load() {
        Ok(report) => Ok(Some(report)),
        Err(e @ (StoreError::NotFound | StoreError::CorruptState { .. })) => {
            eprintln!("{}", e);
            Ok(None)
        }
        Err(e) => Err(e.into()),
    }
}
