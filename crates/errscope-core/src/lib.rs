//! Error records, aggregation and the composed report model

mod aggregate;
mod config;
mod normalize;
mod report;
mod types;

pub use aggregate::{aggregate, Categories, ErrorReport, Summary};
pub use config::Config;
pub use normalize::{
    is_error_line, normalize_build_log, normalize_export, BuildLog, ErrorExport, ExportEntry,
    BUILD_LOG_MARKERS,
};
pub use report::{
    Correlation, PatternSet, Priority, RecurringPattern, Recommendation, Report,
};
pub use types::{Category, ConsoleSnapshot, ErrorRecord, ParseError, ProcessSample, Severity};
