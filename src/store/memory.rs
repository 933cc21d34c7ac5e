//! In-memory winner store
//!
//! Used by tests and by the orchestrator tests' degraded-path scenarios.
//! Reads and writes can be toggled to fail, standing in for a hosted store
//! that has become unreachable.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;

use uuid::Uuid;

use super::errors::{StoreError, StoreResult};
use super::record::{Winner, WinnerDraw};
use super::WinnerStore;

/// Volatile winner store with fault injection toggles.
#[derive(Default)]
pub struct MemoryStore {
    winners: Mutex<Vec<Winner>>,
    fail_reads: AtomicBool,
    fail_writes: AtomicBool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make subsequent `list` calls fail until cleared.
    pub fn set_fail_reads(&self, fail: bool) {
        self.fail_reads.store(fail, Ordering::SeqCst);
    }

    /// Make subsequent `insert`/`delete` calls fail until cleared.
    pub fn set_fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }

    fn lock(&self) -> StoreResult<std::sync::MutexGuard<'_, Vec<Winner>>> {
        self.winners
            .lock()
            .map_err(|_| StoreError::Unavailable("memory store lock poisoned".to_string()))
    }
}

impl WinnerStore for MemoryStore {
    fn insert(&self, draw: &WinnerDraw) -> StoreResult<Winner> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(StoreError::Unavailable("writes disabled".to_string()));
        }
        let winner = Winner::from_draw(draw);
        self.lock()?.push(winner.clone());
        Ok(winner)
    }

    fn list(&self) -> StoreResult<Vec<Winner>> {
        if self.fail_reads.load(Ordering::SeqCst) {
            return Err(StoreError::Unavailable("reads disabled".to_string()));
        }
        Ok(self.lock()?.iter().rev().cloned().collect())
    }

    fn delete(&self, id: Uuid) -> StoreResult<Winner> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(StoreError::Unavailable("writes disabled".to_string()));
        }
        let mut winners = self.lock()?;
        let position = winners
            .iter()
            .position(|w| w.id == id)
            .ok_or(StoreError::NotFound(id))?;
        Ok(winners.remove(position))
    }
}
