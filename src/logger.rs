// src/logger.rs
//! Workflow logger: one JSON object per line, errors on stderr.
//!
//! This is the user-facing progress log of the CLI. Library diagnostics go
//! through `tracing` (see [`crate::app_log`]).

use std::io::Write;
use std::sync::{Arc, Mutex};

use chrono::{SecondsFormat, Utc};
use serde::Serialize;
use serde_json::Value;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    Info,
    Warn,
    Error,
    Debug,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stream {
    Stdout,
    Stderr,
}

impl Level {
    pub fn stream(self) -> Stream {
        match self {
            Level::Error => Stream::Stderr,
            _ => Stream::Stdout,
        }
    }
}

pub trait LogSink: Send + Sync {
    fn write_line(&self, stream: Stream, line: &str);
}

pub struct StdioSink;

impl LogSink for StdioSink {
    fn write_line(&self, stream: Stream, line: &str) {
        // A closed pipe must not take the workflow down with it
        let _ = match stream {
            Stream::Stdout => writeln!(std::io::stdout().lock(), "{}", line),
            Stream::Stderr => writeln!(std::io::stderr().lock(), "{}", line),
        };
    }
}

/// Sends every level to stderr, for runs where stdout carries data
pub struct StderrSink;

impl LogSink for StderrSink {
    fn write_line(&self, _stream: Stream, line: &str) {
        let _ = writeln!(std::io::stderr().lock(), "{}", line);
    }
}

/// Keeps every line in memory, for tests and embedding
#[derive(Default)]
pub struct MemorySink {
    lines: Mutex<Vec<(Stream, String)>>,
}

impl MemorySink {
    pub fn lines(&self) -> Vec<(Stream, String)> {
        self.lines
            .lock()
            .map(|lines| lines.clone())
            .unwrap_or_default()
    }
}

impl LogSink for MemorySink {
    fn write_line(&self, stream: Stream, line: &str) {
        if let Ok(mut lines) = self.lines.lock() {
            lines.push((stream, line.to_string()));
        }
    }
}

#[derive(Debug, Serialize)]
struct ErrorInfo {
    message: String,
    chain: Vec<String>,
}

#[derive(Debug, Serialize)]
struct LogRecord<'a> {
    level: Level,
    context: &'a str,
    message: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    data: Option<&'a Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<Option<ErrorInfo>>,
    timestamp: String,
}

#[derive(Clone)]
pub struct Logger {
    context: String,
    debug_enabled: bool,
    sink: Arc<dyn LogSink>,
}

impl Logger {
    pub fn new(context: &str, debug_enabled: bool) -> Self {
        Self::with_sink(context, debug_enabled, Arc::new(StdioSink))
    }

    pub fn with_sink(context: &str, debug_enabled: bool, sink: Arc<dyn LogSink>) -> Self {
        Self {
            context: context.to_string(),
            debug_enabled,
            sink,
        }
    }

    pub fn context(&self) -> &str {
        &self.context
    }

    pub fn info(&self, message: &str, data: Value) {
        self.emit(Level::Info, message, Some(&data), None);
    }

    pub fn warn(&self, message: &str, data: Value) {
        self.emit(Level::Warn, message, Some(&data), None);
    }

    pub fn error(&self, message: &str, error: Option<&anyhow::Error>) {
        let info = error.map(|err| ErrorInfo {
            message: err.to_string(),
            chain: err.chain().skip(1).map(ToString::to_string).collect(),
        });
        self.emit(Level::Error, message, None, Some(info));
    }

    /// Dropped unless the logger was built with debug enabled
    pub fn debug(&self, message: &str, data: Value) {
        if self.debug_enabled {
            self.emit(Level::Debug, message, Some(&data), None);
        }
    }

    fn emit(
        &self,
        level: Level,
        message: &str,
        data: Option<&Value>,
        error: Option<Option<ErrorInfo>>,
    ) {
        let record = LogRecord {
            level,
            context: &self.context,
            message,
            data,
            error,
            timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
        };

        match serde_json::to_string(&record) {
            Ok(line) => self.sink.write_line(level.stream(), &line),
            Err(e) => tracing::error!("Failed to serialize log record: {}", e),
        }
    }
}
