//! Best-effort readers for project logs and process state

mod inspector;
mod logs;

pub use inspector::{
    capture_console, parse_ports, parse_processes, CannedInspector, ProcessInspector,
    ShellInspector,
};
pub use logs::{collect_records, read_build_logs, read_error_export, ExportFile, SourceBatch};
