//! Observability for spindraw
//!
//! Structured single-line JSON logs with deterministic key ordering and
//! typed event names. Logging is synchronous and unbuffered; one log line
//! is one event. Nothing in this system is fatal, so the severity ladder
//! stops at ERROR.

mod events;
mod logger;

pub use events::LogEvent;
pub use logger::{Logger, Severity};
