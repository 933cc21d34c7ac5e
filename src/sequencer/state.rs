//! Draw phase state machine

use std::fmt;

/// Phase of a category's draw sequence.
///
/// Transitions: `Idle -> Animating -> Settling -> Idle`. The transition
/// back to Idle is unconditional; cancellation short-circuits Animating
/// straight back to Idle without a commit.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DrawPhase {
    /// No sequence active; draws may start
    #[default]
    Idle,
    /// Spin animation running
    Animating,
    /// Final draw and commit in progress
    Settling,
}

impl DrawPhase {
    /// Whether a new sequence may start in this phase.
    pub fn accepts_draw(&self) -> bool {
        matches!(self, DrawPhase::Idle)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            DrawPhase::Idle => "idle",
            DrawPhase::Animating => "animating",
            DrawPhase::Settling => "settling",
        }
    }
}

impl fmt::Display for DrawPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
