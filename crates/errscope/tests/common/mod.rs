use std::path::Path;

/// Write `contents` to `relative` under `root`, creating parent directories
pub fn write_file(root: &Path, relative: &str, contents: &str) {
    let path = root.join(relative);
    std::fs::create_dir_all(path.parent().unwrap()).unwrap();
    std::fs::write(path, contents).unwrap();
}

/// `n` non-matching lines, with `ERROR`/`FAILED` lines at the given offsets
pub fn build_log(n: usize, error_at: &[usize]) -> String {
    (0..n)
        .map(|i| {
            if error_at.contains(&i) {
                if i % 2 == 0 {
                    format!("[{}] ERROR compilation step {}", i, i)
                } else {
                    format!("[{}] step {} FAILED", i, i)
                }
            } else {
                format!("[{}] compiled module {}", i, i)
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

pub const ERROR_EXPORT: &str = r#"{
  "logs": [
    {"category": "API", "severity": "HIGH", "message": "Failed to fetch user data", "timestamp": "2025-06-01T08:00:00Z", "count": 1},
    {"category": "API", "severity": "HIGH", "message": "Failed to fetch user data", "timestamp": "2025-06-01T08:00:05Z", "count": 1},
    {"category": "Network", "severity": "CRITICAL", "message": "WebSocket closed unexpectedly", "count": 2},
    {"category": "UI", "severity": "LOW", "message": "Image failed to load"},
    {"category": "Analytics", "severity": "LOW", "message": "beacon dropped"}
  ]
}"#;
