//! Winner Store for spindraw
//!
//! The durable record of committed winners. The file-backed implementation
//! is an append-only record log: length-prefixed frames, CRC32 verified on
//! every read, fsync after every write, deletes written as tombstones, and
//! live state rebuilt by replay on open.
//!
//! A winner is only "committed" once its record is durable here; a name
//! present in the store is never eligible for selection again.

mod errors;
mod file;
mod memory;
mod record;

pub use errors::{StoreError, StoreResult};
pub use file::FileStore;
pub use memory::MemoryStore;
pub use record::{StoreFrame, Winner, WinnerDraw};

use std::collections::HashSet;

use uuid::Uuid;

/// Operations the orchestrator needs from a winner store.
///
/// Implementations take `&self`; interior synchronization is their concern.
pub trait WinnerStore: Send + Sync {
    /// Append a winner record. The store assigns the id and timestamp.
    fn insert(&self, draw: &WinnerDraw) -> StoreResult<Winner>;

    /// All winners, ordered by creation time descending.
    fn list(&self) -> StoreResult<Vec<Winner>>;

    /// Winners for one category, ordered by creation time descending.
    fn list_by_category(&self, category: &str) -> StoreResult<Vec<Winner>> {
        Ok(self
            .list()?
            .into_iter()
            .filter(|w| w.category == category)
            .collect())
    }

    /// Delete a winner by id, returning the removed record.
    fn delete(&self, id: Uuid) -> StoreResult<Winner>;
}

/// The set of names present in a winner list, for pool exclusion.
pub fn won_names(winners: &[Winner]) -> HashSet<String> {
    winners.iter().map(|w| w.name.clone()).collect()
}
