//! Single-slot persistence for the composed report

mod storage;

pub use storage::{ReportStore, StoreError};
