//! File-backed winner store
//!
//! Append-only log at `<data_dir>/winners.log`. Every append is fsynced
//! before it is acknowledged; deletes append a tombstone rather than
//! rewriting the file. On open, the log is replayed front to back to
//! rebuild the live winner set, and any checksum failure aborts the open
//! with the offending byte offset.

use std::fs::{self, File, OpenOptions};
use std::io::{Read, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use uuid::Uuid;

use super::errors::{StoreError, StoreResult};
use super::record::{StoreFrame, Winner, WinnerDraw};
use super::WinnerStore;

const LOG_FILE: &str = "winners.log";

struct Inner {
    file: File,
    /// Live winners in insertion (creation) order.
    live: Vec<Winner>,
}

/// Durable winner store backed by an append-only log file.
pub struct FileStore {
    path: PathBuf,
    inner: Mutex<Inner>,
}

impl FileStore {
    /// Open or create the winner log under `data_dir`, replaying existing
    /// frames to rebuild live state.
    pub fn open(data_dir: &Path) -> StoreResult<Self> {
        if !data_dir.exists() {
            fs::create_dir_all(data_dir)
                .map_err(|e| StoreError::io("creating data directory", e))?;
        }
        let path = data_dir.join(LOG_FILE);

        let mut file = OpenOptions::new()
            .create(true)
            .read(true)
            .append(true)
            .open(&path)
            .map_err(|e| StoreError::io("opening winner log", e))?;

        let live = Self::replay(&mut file)?;

        Ok(Self {
            path,
            inner: Mutex::new(Inner { file, live }),
        })
    }

    /// Path to the underlying log file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn replay(file: &mut File) -> StoreResult<Vec<Winner>> {
        let mut data = Vec::new();
        file.read_to_end(&mut data)
            .map_err(|e| StoreError::io("reading winner log", e))?;

        let mut live: Vec<Winner> = Vec::new();
        let mut offset = 0usize;
        while offset < data.len() {
            let (frame, consumed) = StoreFrame::decode(&data[offset..], offset as u64)?;
            match frame {
                StoreFrame::Winner(winner) => live.push(winner),
                StoreFrame::Tombstone(id) => live.retain(|w| w.id != id),
            }
            offset += consumed;
        }
        Ok(live)
    }

    fn append(inner: &mut Inner, frame: &StoreFrame) -> StoreResult<()> {
        let encoded = frame.encode()?;
        inner
            .file
            .write_all(&encoded)
            .map_err(|e| StoreError::io("appending record", e))?;
        // fsync before acknowledging: a winner is only committed once durable
        inner
            .file
            .sync_all()
            .map_err(|e| StoreError::io("syncing winner log", e))?;
        Ok(())
    }

    fn lock(&self) -> StoreResult<std::sync::MutexGuard<'_, Inner>> {
        self.inner
            .lock()
            .map_err(|_| StoreError::Unavailable("winner log lock poisoned".to_string()))
    }
}

impl WinnerStore for FileStore {
    fn insert(&self, draw: &WinnerDraw) -> StoreResult<Winner> {
        let winner = Winner::from_draw(draw);
        let mut inner = self.lock()?;
        Self::append(&mut inner, &StoreFrame::Winner(winner.clone()))?;
        inner.live.push(winner.clone());
        Ok(winner)
    }

    fn list(&self) -> StoreResult<Vec<Winner>> {
        let inner = self.lock()?;
        // Newest first: live is kept in insertion order.
        Ok(inner.live.iter().rev().cloned().collect())
    }

    fn delete(&self, id: Uuid) -> StoreResult<Winner> {
        let mut inner = self.lock()?;
        let position = inner
            .live
            .iter()
            .position(|w| w.id == id)
            .ok_or(StoreError::NotFound(id))?;
        Self::append(&mut inner, &StoreFrame::Tombstone(id))?;
        Ok(inner.live.remove(position))
    }
}
