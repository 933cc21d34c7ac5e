//! Typed log events covering the draw lifecycle, store health, and the
//! operator gate.

use std::fmt;

/// Observable events in spindraw.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogEvent {
    // Startup
    /// Configuration loaded and validated
    ConfigLoaded,
    /// Candidate roster loaded
    RosterLoaded,

    // Draw lifecycle
    /// A draw was requested for a category
    DrawRequested,
    /// A draw request was rejected (cap reached, sequence active, ...)
    DrawRejected,
    /// Spin animation started
    SpinBegin,
    /// Spin animation cancelled before settling
    SpinCancelled,
    /// Spin settled on a winner
    SpinSettled,
    /// Draw skipped: no remaining candidates
    PoolEmpty,

    // Winner commit
    /// Winner durably recorded
    WinnerCommitted,
    /// Winner deleted by operator
    WinnerDeleted,

    // Batch draws
    /// Draw-all batch started
    BatchBegin,
    /// Draw-all batch finished
    BatchComplete,

    // Store health
    /// Store read failed; operating on cached counts
    StoreDegraded,
    /// Store write failed; draw aborted without a committed winner
    StoreWriteFailed,

    // Operator gate
    /// Gate rejected a destructive action
    GateRejected,
    /// Operator secret updated
    GateSecretUpdated,
}

impl LogEvent {
    /// Returns the event name as logged.
    pub fn as_str(&self) -> &'static str {
        match self {
            LogEvent::ConfigLoaded => "CONFIG_LOADED",
            LogEvent::RosterLoaded => "ROSTER_LOADED",
            LogEvent::DrawRequested => "DRAW_REQUESTED",
            LogEvent::DrawRejected => "DRAW_REJECTED",
            LogEvent::SpinBegin => "SPIN_BEGIN",
            LogEvent::SpinCancelled => "SPIN_CANCELLED",
            LogEvent::SpinSettled => "SPIN_SETTLED",
            LogEvent::PoolEmpty => "POOL_EMPTY",
            LogEvent::WinnerCommitted => "WINNER_COMMITTED",
            LogEvent::WinnerDeleted => "WINNER_DELETED",
            LogEvent::BatchBegin => "BATCH_BEGIN",
            LogEvent::BatchComplete => "BATCH_COMPLETE",
            LogEvent::StoreDegraded => "STORE_DEGRADED",
            LogEvent::StoreWriteFailed => "STORE_WRITE_FAILED",
            LogEvent::GateRejected => "GATE_REJECTED",
            LogEvent::GateSecretUpdated => "GATE_SECRET_UPDATED",
        }
    }
}

impl fmt::Display for LogEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn event_names_are_screaming_snake_case() {
        let events = [
            LogEvent::ConfigLoaded,
            LogEvent::RosterLoaded,
            LogEvent::DrawRequested,
            LogEvent::DrawRejected,
            LogEvent::SpinBegin,
            LogEvent::SpinCancelled,
            LogEvent::SpinSettled,
            LogEvent::PoolEmpty,
            LogEvent::WinnerCommitted,
            LogEvent::WinnerDeleted,
            LogEvent::BatchBegin,
            LogEvent::BatchComplete,
            LogEvent::StoreDegraded,
            LogEvent::StoreWriteFailed,
            LogEvent::GateRejected,
            LogEvent::GateSecretUpdated,
        ];
        for event in events {
            let s = event.as_str();
            assert!(!s.is_empty());
            assert!(s.chars().all(|c| c.is_ascii_uppercase() || c == '_'));
        }
    }

    #[test]
    fn event_display_matches_name() {
        assert_eq!(format!("{}", LogEvent::WinnerCommitted), "WINNER_COMMITTED");
        assert_eq!(format!("{}", LogEvent::StoreDegraded), "STORE_DEGRADED");
    }
}
