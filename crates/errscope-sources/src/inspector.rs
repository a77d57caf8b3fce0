//! Process and port inspection
//!
//! The raw text comes from a `ProcessInspector`; parsing it into a
//! `ConsoleSnapshot` happens here. Any inspector failure degrades to an
//! empty part of the snapshot.

use chrono::{DateTime, Utc};
use errscope_core::{Config, ConsoleSnapshot, ProcessSample};
use regex::Regex;
use std::collections::BTreeSet;
use std::process::Command;
use std::sync::OnceLock;

const MAX_COMMAND_CHARS: usize = 100;
// `ps aux`: USER PID %CPU %MEM VSZ RSS TTY STAT START TIME COMMAND...
const PS_COMMAND_COLUMN: usize = 10;

static PORT_RE: OnceLock<Regex> = OnceLock::new();

/// Source of raw process-state text
pub trait ProcessInspector {
    /// Listening TCP sockets in `port_range`, in `lsof` output format
    fn listening_ports(&self, port_range: &str) -> anyhow::Result<String>;

    /// Process table in `ps aux` output format
    fn process_list(&self) -> anyhow::Result<String>;
}

/// Shells out to `lsof` and `ps`
#[derive(Debug, Default, Clone, Copy)]
pub struct ShellInspector;

impl ShellInspector {
    fn run(program: &str, args: &[&str]) -> anyhow::Result<String> {
        let output = Command::new(program).args(args).output()?;
        if !output.status.success() {
            anyhow::bail!("{} exited with {}", program, output.status);
        }
        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

impl ProcessInspector for ShellInspector {
    fn listening_ports(&self, port_range: &str) -> anyhow::Result<String> {
        let selector = format!("-iTCP:{}", port_range);
        Self::run("lsof", &["-nP", selector.as_str(), "-sTCP:LISTEN"])
    }

    fn process_list(&self) -> anyhow::Result<String> {
        Self::run("ps", &["aux"])
    }
}

/// Fixed responses; `None` simulates a failing command
#[derive(Debug, Default, Clone)]
pub struct CannedInspector {
    pub ports: Option<String>,
    pub processes: Option<String>,
}

impl CannedInspector {
    pub fn new(ports: impl Into<String>, processes: impl Into<String>) -> Self {
        Self {
            ports: Some(ports.into()),
            processes: Some(processes.into()),
        }
    }

    pub fn failing() -> Self {
        Self::default()
    }
}

impl ProcessInspector for CannedInspector {
    fn listening_ports(&self, _port_range: &str) -> anyhow::Result<String> {
        self.ports
            .clone()
            .ok_or_else(|| anyhow::anyhow!("port listing unavailable"))
    }

    fn process_list(&self) -> anyhow::Result<String> {
        self.processes
            .clone()
            .ok_or_else(|| anyhow::anyhow!("process listing unavailable"))
    }
}

/// Port numbers from `lsof` rows; the last `:<port>` on each row wins
pub fn parse_ports(text: &str) -> BTreeSet<u16> {
    let port_re = PORT_RE.get_or_init(|| Regex::new(r":(\d+)(?:\s|$)").unwrap());

    text.lines()
        .filter_map(|line| {
            port_re
                .captures_iter(line)
                .last()
                .and_then(|cap| cap[1].parse::<u16>().ok())
        })
        .collect()
}

/// Process rows whose command contains `filter`, at most `limit` of them
pub fn parse_processes(text: &str, filter: &str, limit: usize) -> Vec<ProcessSample> {
    text.lines()
        .filter_map(|line| {
            let parts: Vec<&str> = line.split_whitespace().collect();
            if parts.len() <= PS_COMMAND_COLUMN {
                return None;
            }
            // Header row and anything malformed fail here
            let pid = parts[1].parse::<u32>().ok()?;
            let cpu = parts[2].parse::<f32>().unwrap_or(0.0);
            let mem = parts[3].parse::<f32>().unwrap_or(0.0);
            let command = parts[PS_COMMAND_COLUMN..].join(" ");
            if !command.contains(filter) {
                return None;
            }
            Some(ProcessSample {
                pid,
                cpu,
                mem,
                command: command.chars().take(MAX_COMMAND_CHARS).collect(),
            })
        })
        .take(limit)
        .collect()
}

/// Capture listening ports and process samples, never failing
pub fn capture_console(
    inspector: &dyn ProcessInspector,
    config: &Config,
    timestamp: DateTime<Utc>,
) -> ConsoleSnapshot {
    let mut snapshot = ConsoleSnapshot::empty(timestamp);

    match inspector.listening_ports(&config.port_range) {
        Ok(text) => snapshot.listening_ports = parse_ports(&text),
        Err(e) => tracing::warn!("Error collecting listening ports: {}", e),
    }

    match inspector.process_list() {
        Ok(text) => {
            snapshot.process_samples =
                parse_processes(&text, &config.process_filter, config.max_process_samples)
        }
        Err(e) => tracing::warn!("Error collecting process list: {}", e),
    }

    snapshot
}

#[cfg(test)]
mod tests {
    use super::*;

    const LSOF: &str = "\
COMMAND   PID USER   FD   TYPE DEVICE SIZE/OFF NODE NAME
node    41213 dev   23u  IPv6 0x1a2b      0t0  TCP *:3000 (LISTEN)
node    41213 dev   24u  IPv6 0x1a2c      0t0  TCP [::1]:3001 (LISTEN)
node    41290 dev   19u  IPv4 0x1a2d      0t0  TCP 127.0.0.1:3000 (LISTEN)
";

    const PS: &str = "\
USER       PID  %CPU %MEM    VSZ   RSS TTY      STAT START   TIME COMMAND
dev      41213  12.5  3.1 123456 65432 pts/1    Sl+  10:01   0:42 node /app/node_modules/.bin/next dev
dev      41300   0.0  0.1  12345  2345 pts/2    S    10:02   0:00 vim notes.md
dev      41290   1.0  0.9  54321 12345 pts/3    Sl   10:03   0:05 node server.js --port 3000
";

    #[test]
    fn test_parse_ports() {
        let ports = parse_ports(LSOF);
        assert_eq!(ports.into_iter().collect::<Vec<_>>(), vec![3000, 3001]);
    }

    #[test]
    fn test_parse_ports_ignores_noise() {
        assert!(parse_ports("").is_empty());
        assert!(parse_ports("lsof: WARNING: can't stat() fuse").is_empty());
    }

    #[test]
    fn test_parse_processes_filters_and_skips_header() {
        let samples = parse_processes(PS, "node", 5);
        assert_eq!(samples.len(), 2);
        assert_eq!(samples[0].pid, 41213);
        assert_eq!(samples[0].cpu, 12.5);
        assert_eq!(samples[0].mem, 3.1);
        assert_eq!(samples[0].command, "node /app/node_modules/.bin/next dev");
        assert_eq!(samples[1].pid, 41290);
    }

    #[test]
    fn test_parse_processes_limit_and_truncation() {
        let long = format!(
            "dev 1 0.0 0.0 1 1 ? S 10:00 0:00 node {}\n",
            "x".repeat(300)
        );
        let text = long.repeat(8);
        let samples = parse_processes(&text, "node", 5);
        assert_eq!(samples.len(), 5);
        assert_eq!(samples[0].command.chars().count(), MAX_COMMAND_CHARS);
    }

    #[test]
    fn test_capture_console_with_canned_output() {
        let inspector = CannedInspector::new(LSOF, PS);
        let snapshot = capture_console(&inspector, &Config::default(), Utc::now());
        assert_eq!(snapshot.listening_ports.len(), 2);
        assert_eq!(snapshot.process_samples.len(), 2);
    }

    #[test]
    fn test_capture_console_failure_is_empty() {
        let snapshot = capture_console(&CannedInspector::failing(), &Config::default(), Utc::now());
        assert!(snapshot.listening_ports.is_empty());
        assert!(snapshot.process_samples.is_empty());
    }

    #[test]
    fn test_shell_inspector_never_panics() {
        // lsof/ps may be missing or exit non-zero in CI; only the fallback matters
        let snapshot = capture_console(&ShellInspector, &Config::default(), Utc::now());
        assert!(snapshot.process_samples.len() <= 5);
    }
}
