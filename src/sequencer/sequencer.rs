//! The spin sequence itself

use rand::Rng;
use tokio::time::{sleep, Instant};

use crate::pool::Candidate;

use super::cancel::CancelToken;
use super::timing::SpinTiming;

/// How an animation window ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpinOutcome {
    /// The window elapsed; the draw may settle
    Completed,
    /// Cancelled at a tick boundary; nothing to settle
    Cancelled,
}

/// Runs the animated portion and the settling draw of one sequence.
///
/// The sequencer is stateless between invocations; the orchestrator owns
/// the per-category phase table and drives `animate` then `settle`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Sequencer {
    timing: SpinTiming,
}

impl Sequencer {
    pub fn new(timing: SpinTiming) -> Self {
        Self { timing }
    }

    /// Run the animation window over a non-empty pool.
    ///
    /// Each tick picks a uniformly-random candidate and reports its name
    /// through `on_tick` (best-effort display, not the draw). Suspends only
    /// at tick boundaries and checks the cancellation token at each one.
    pub async fn animate<F>(
        &self,
        pool: &[Candidate],
        on_tick: F,
        cancel: &CancelToken,
    ) -> SpinOutcome
    where
        F: Fn(&str),
    {
        let started = Instant::now();
        loop {
            if cancel.is_cancelled() {
                return SpinOutcome::Cancelled;
            }
            let elapsed = started.elapsed();
            if elapsed >= self.timing.duration() {
                return SpinOutcome::Completed;
            }

            let shown = &pool[rand::thread_rng().gen_range(0..pool.len())];
            on_tick(&shown.name);

            sleep(self.timing.interval_at(elapsed)).await;
        }
    }

    /// The final draw: one more uniform pick over the same pool.
    ///
    /// Returns `None` only for an empty pool, which callers treat as a
    /// no-op draw.
    pub fn settle(&self, pool: &[Candidate]) -> Option<Candidate> {
        if pool.is_empty() {
            return None;
        }
        Some(pool[rand::thread_rng().gen_range(0..pool.len())].clone())
    }
}
