// Logging module - In-memory log capture for TUI display
//
// This module provides a custom tracing layer that captures log events
// in memory so the status bar can show the most recent one. This prevents
// logs from breaking through the TUI's alternate screen buffer and garbling
// the display. Full history goes to the optional log file.

use chrono::{DateTime, Local};
use std::sync::{Arc, Mutex, MutexGuard};
use tracing::{Level, Metadata, Subscriber};
use tracing_subscriber::layer::Context;
use tracing_subscriber::Layer;

/// A single log entry captured from tracing
#[derive(Debug, Clone)]
pub struct LogEntry {
    pub timestamp: DateTime<Local>,
    pub level: LogLevel,
    pub message: String,
}

impl LogEntry {
    pub fn new(level: LogLevel, message: impl Into<String>) -> Self {
        Self {
            timestamp: Local::now(),
            level,
            message: message.into(),
        }
    }

    /// Wall-clock time of the event, e.g. "14:03:27"
    pub fn time(&self) -> String {
        self.timestamp.format("%H:%M:%S").to_string()
    }
}

/// Log level for display
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<&Level> for LogLevel {
    fn from(level: &Level) -> Self {
        match *level {
            Level::ERROR => LogLevel::Error,
            Level::WARN => LogLevel::Warn,
            Level::INFO => LogLevel::Info,
            Level::DEBUG => LogLevel::Debug,
            Level::TRACE => LogLevel::Trace,
        }
    }
}

impl LogLevel {
    /// Get the display string for this log level
    pub fn as_str(&self) -> &str {
        match self {
            LogLevel::Error => "ERROR",
            LogLevel::Warn => "WARN",
            LogLevel::Info => "INFO",
            LogLevel::Debug => "DEBUG",
            LogLevel::Trace => "TRACE",
        }
    }
}

/// Shared slot holding the most recent log entry
///
/// Cloned into the tracing layer; the TUI reads it on every draw.
#[derive(Clone)]
pub struct LogBuffer {
    latest: Arc<Mutex<Option<LogEntry>>>,
}

impl LogBuffer {
    pub fn new() -> Self {
        Self {
            latest: Arc::new(Mutex::new(None)),
        }
    }

    // A panic while holding the lock leaves the entry intact, so recover it
    fn lock(&self) -> MutexGuard<'_, Option<LogEntry>> {
        self.latest
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Replace the latest entry
    pub fn add(&self, entry: LogEntry) {
        *self.lock() = Some(entry);
    }

    /// Most recent entry, if any
    pub fn latest(&self) -> Option<LogEntry> {
        self.lock().clone()
    }
}

impl Default for LogBuffer {
    fn default() -> Self {
        Self::new()
    }
}

/// Custom tracing layer that captures logs to a buffer
pub struct TuiLogLayer {
    buffer: LogBuffer,
}

impl TuiLogLayer {
    pub fn new(buffer: LogBuffer) -> Self {
        Self { buffer }
    }
}

impl<S> Layer<S> for TuiLogLayer
where
    S: Subscriber,
{
    fn on_event(&self, event: &tracing::Event<'_>, _ctx: Context<'_, S>) {
        let metadata = event.metadata();

        let mut message = String::new();
        event.record(&mut MessageVisitor(&mut message));

        self.buffer
            .add(LogEntry::new(LogLevel::from(metadata.level()), message));
    }

    fn enabled(&self, _metadata: &Metadata<'_>, _ctx: Context<'_, S>) -> bool {
        // Filtering happens at subscriber level
        true
    }
}

/// Visitor to extract the message from a tracing event
struct MessageVisitor<'a>(&'a mut String);

impl tracing::field::Visit for MessageVisitor<'_> {
    fn record_str(&mut self, field: &tracing::field::Field, value: &str) {
        if field.name() == "message" {
            self.0.push_str(value);
        }
    }

    fn record_debug(&mut self, field: &tracing::field::Field, value: &dyn std::fmt::Debug) {
        if field.name() == "message" {
            *self.0 = format!("{:?}", value);
            // Remove the quotes that Debug adds
            if self.0.len() >= 2 && self.0.starts_with('"') && self.0.ends_with('"') {
                *self.0 = self.0[1..self.0.len() - 1].to_string();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing_subscriber::layer::SubscriberExt;

    #[test]
    fn layer_captures_events() {
        let buffer = LogBuffer::new();
        let subscriber = tracing_subscriber::registry().with(TuiLogLayer::new(buffer.clone()));

        tracing::subscriber::with_default(subscriber, || {
            tracing::info!("catalog loaded");
            tracing::warn!(name = "ghost", "rejected selection");
        });

        let latest = buffer.latest().unwrap();
        assert_eq!(latest.level, LogLevel::Warn);
        assert_eq!(latest.message, "rejected selection");
    }

    #[test]
    fn newer_entries_replace_older() {
        let buffer = LogBuffer::new();
        buffer.add(LogEntry::new(LogLevel::Info, "first"));
        buffer.add(LogEntry::new(LogLevel::Debug, "second"));
        let latest = buffer.latest().unwrap();
        assert_eq!(latest.message, "second");
        assert_eq!(latest.level, LogLevel::Debug);
    }

    #[test]
    fn time_is_hours_minutes_seconds() {
        let entry = LogEntry::new(LogLevel::Info, "tick");
        let time = entry.time();
        assert_eq!(time.len(), 8);
        assert_eq!(time, entry.timestamp.format("%H:%M:%S").to_string());
    }

    #[test]
    fn empty_buffer_has_no_latest() {
        assert!(LogBuffer::new().latest().is_none());
    }
}
