//! # Operation Log Sink
//!
//! The Villa hooks and the dispatcher report notable outcomes as `(message, severity)`
//! pairs. They do not write to a logger directly; they hand the pair to a [`LogSink`] that
//! was injected at startup:
//!
//! - [`TracingSink`] forwards to `tracing` at the matching level (used by the running
//!   system).
//! - [`RecordingSink`] keeps the pairs in memory so tests can assert on them.
//!
//! This is separate from the engine's own structured events (`Actor started`, `Created`,
//! ...), which always go through `tracing`.

use std::fmt;
use std::sync::{Arc, Mutex};

/// How serious a logged outcome is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Severity {
    Info,
    Warning,
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Severity::Info => "info",
            Severity::Warning => "warning",
            Severity::Error => "error",
        })
    }
}

/// Receives `(message, severity)` pairs.
pub trait LogSink: Send + Sync {
    fn log(&self, message: &str, severity: Severity);
}

/// Shared handle to a sink, as stored in the actor context and the dispatcher.
pub type SharedSink = Arc<dyn LogSink>;

/// Forwards every pair to `tracing`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl LogSink for TracingSink {
    fn log(&self, message: &str, severity: Severity) {
        match severity {
            Severity::Info => tracing::info!(target: "villa_api::sink", "{message}"),
            Severity::Warning => tracing::warn!(target: "villa_api::sink", "{message}"),
            Severity::Error => tracing::error!(target: "villa_api::sink", "{message}"),
        }
    }
}

/// Keeps every pair in memory, in the order they were logged.
#[derive(Debug, Clone, Default)]
pub struct RecordingSink {
    entries: Arc<Mutex<Vec<(String, Severity)>>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of everything logged so far.
    pub fn entries(&self) -> Vec<(String, Severity)> {
        match self.entries.lock() {
            Ok(entries) => entries.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    /// True if `message` was logged at `severity` at least once.
    pub fn contains(&self, message: &str, severity: Severity) -> bool {
        self.entries()
            .iter()
            .any(|(logged, level)| logged == message && *level == severity)
    }
}

impl LogSink for RecordingSink {
    fn log(&self, message: &str, severity: Severity) {
        let mut entries = match self.entries.lock() {
            Ok(entries) => entries,
            Err(poisoned) => poisoned.into_inner(),
        };
        entries.push((message.to_string(), severity));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recording_sink_keeps_order() {
        let sink = RecordingSink::new();
        sink.log("Getting All Villas", Severity::Info);
        sink.log("Villa Name Already Exist", Severity::Error);

        assert_eq!(
            sink.entries(),
            vec![
                ("Getting All Villas".to_string(), Severity::Info),
                ("Villa Name Already Exist".to_string(), Severity::Error),
            ]
        );
        assert!(sink.contains("Villa Name Already Exist", Severity::Error));
        assert!(!sink.contains("Villa Name Already Exist", Severity::Info));
    }

    #[test]
    fn test_clones_share_entries() {
        let sink = RecordingSink::new();
        let shared: SharedSink = Arc::new(sink.clone());
        shared.log("Bad Request. Id should not be 0", Severity::Error);
        assert_eq!(sink.entries().len(), 1);
    }

    #[test]
    fn test_tracing_sink_accepts_every_severity() {
        let sink = TracingSink;
        for severity in [Severity::Info, Severity::Warning, Severity::Error] {
            sink.log("message", severity);
        }
    }
}
