//! Structured JSON logger
//!
//! One event per line, `event` and `severity` keys first, remaining fields
//! sorted by key so identical events always serialize identically.
//! INFO and below go to stdout, WARN and above to stderr.

use std::fmt;
use std::io::{self, Write};

use super::events::LogEvent;

/// Log severity. There is no FATAL: no condition terminates the process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    /// Developer detail
    Debug = 0,
    /// Normal operation
    Info = 1,
    /// Degraded but proceeding
    Warn = 2,
    /// Operation failed
    Error = 3,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Debug => "DEBUG",
            Severity::Info => "INFO",
            Severity::Warn => "WARN",
            Severity::Error => "ERROR",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Synchronous, unbuffered structured logger.
pub struct Logger;

impl Logger {
    /// Emit one event at the given severity.
    pub fn emit(severity: Severity, event: LogEvent, fields: &[(&str, &str)]) {
        let line = Self::render(severity, event, fields);
        if severity >= Severity::Warn {
            let mut err = io::stderr();
            let _ = err.write_all(line.as_bytes());
            let _ = err.flush();
        } else {
            let mut out = io::stdout();
            let _ = out.write_all(line.as_bytes());
            let _ = out.flush();
        }
    }

    /// Emit at DEBUG.
    pub fn debug(event: LogEvent, fields: &[(&str, &str)]) {
        Self::emit(Severity::Debug, event, fields);
    }

    /// Emit at INFO.
    pub fn info(event: LogEvent, fields: &[(&str, &str)]) {
        Self::emit(Severity::Info, event, fields);
    }

    /// Emit at WARN.
    pub fn warn(event: LogEvent, fields: &[(&str, &str)]) {
        Self::emit(Severity::Warn, event, fields);
    }

    /// Emit at ERROR.
    pub fn error(event: LogEvent, fields: &[(&str, &str)]) {
        Self::emit(Severity::Error, event, fields);
    }

    /// Render one log line. JSON is assembled by hand so key order is
    /// deterministic: event, severity, then fields sorted by key.
    fn render(severity: Severity, event: LogEvent, fields: &[(&str, &str)]) -> String {
        let mut line = String::with_capacity(128);
        line.push_str("{\"event\":\"");
        line.push_str(event.as_str());
        line.push_str("\",\"severity\":\"");
        line.push_str(severity.as_str());
        line.push('"');

        let mut sorted: Vec<&(&str, &str)> = fields.iter().collect();
        sorted.sort_by_key(|(k, _)| *k);
        for (key, value) in sorted {
            line.push_str(",\"");
            escape_into(&mut line, key);
            line.push_str("\":\"");
            escape_into(&mut line, value);
            line.push('"');
        }

        line.push_str("}\n");
        line
    }
}

fn escape_into(out: &mut String, s: &str) {
    for c in s.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c.is_control() => {
                out.push_str(&format!("\\u{:04x}", c as u32));
            }
            c => out.push(c),
        }
    }
}
