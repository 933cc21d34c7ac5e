//! Winner record types and on-disk frame format
//!
//! Frame layout:
//!
//! ```text
//! +------------------+
//! | Frame Length     | (u32 LE, includes this field and the checksum)
//! +------------------+
//! | Kind             | (u8: 0 = winner, 1 = tombstone)
//! +------------------+
//! | Payload          | (length-prefixed bytes)
//! +------------------+
//! | Checksum         | (u32 LE, CRC32 over everything before it)
//! +------------------+
//! ```
//!
//! A winner payload is the JSON-encoded record; a tombstone payload is the
//! 16 raw bytes of the deleted winner's id.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::errors::{StoreError, StoreResult};

const KIND_WINNER: u8 = 0;
const KIND_TOMBSTONE: u8 = 1;

// length + kind + payload length + checksum
const MIN_FRAME_LEN: usize = 4 + 1 + 4 + 4;

/// The insert payload for a draw commit: everything the caller supplies.
/// The store assigns the id and timestamp.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WinnerDraw {
    pub name: String,
    pub supervisor: String,
    pub category: String,
    pub prize_amount: u64,
}

/// A committed winner. Created exactly once per successful draw, never
/// mutated, only removed by an operator delete.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Winner {
    pub id: Uuid,
    pub name: String,
    pub supervisor: String,
    pub category: String,
    pub prize_amount: u64,
    pub created_at: DateTime<Utc>,
}

impl Winner {
    /// Materialize a draw into a winner row with a fresh id and timestamp.
    pub fn from_draw(draw: &WinnerDraw) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: draw.name.clone(),
            supervisor: draw.supervisor.clone(),
            category: draw.category.clone(),
            prize_amount: draw.prize_amount,
            created_at: Utc::now(),
        }
    }
}

/// One frame in the winner log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreFrame {
    Winner(Winner),
    Tombstone(Uuid),
}

impl StoreFrame {
    /// Serialize the frame, checksum included.
    pub fn encode(&self) -> StoreResult<Vec<u8>> {
        let (kind, payload) = match self {
            StoreFrame::Winner(winner) => (KIND_WINNER, serde_json::to_vec(winner)?),
            StoreFrame::Tombstone(id) => (KIND_TOMBSTONE, id.as_bytes().to_vec()),
        };

        let frame_len = (MIN_FRAME_LEN + payload.len()) as u32;
        let mut frame = Vec::with_capacity(frame_len as usize);
        frame.extend_from_slice(&frame_len.to_le_bytes());
        frame.push(kind);
        frame.extend_from_slice(&(payload.len() as u32).to_le_bytes());
        frame.extend_from_slice(&payload);

        let checksum = crc32fast::hash(&frame);
        frame.extend_from_slice(&checksum.to_le_bytes());

        Ok(frame)
    }

    /// Decode one frame from `data`, verifying the checksum.
    ///
    /// `offset` is the byte position of `data` within the log, used only
    /// for error context. Returns the frame and the bytes consumed.
    pub fn decode(data: &[u8], offset: u64) -> StoreResult<(Self, usize)> {
        if data.len() < MIN_FRAME_LEN {
            return Err(StoreError::corruption(offset, "frame truncated"));
        }

        let frame_len = u32::from_le_bytes([data[0], data[1], data[2], data[3]]) as usize;
        if frame_len < MIN_FRAME_LEN {
            return Err(StoreError::corruption(
                offset,
                format!("invalid frame length {}", frame_len),
            ));
        }
        if data.len() < frame_len {
            return Err(StoreError::corruption(
                offset,
                format!("frame truncated: need {} bytes, have {}", frame_len, data.len()),
            ));
        }

        let checksum_at = frame_len - 4;
        let stored = u32::from_le_bytes([
            data[checksum_at],
            data[checksum_at + 1],
            data[checksum_at + 2],
            data[checksum_at + 3],
        ]);
        let computed = crc32fast::hash(&data[..checksum_at]);
        if computed != stored {
            return Err(StoreError::corruption(
                offset,
                format!("checksum mismatch: computed {:08x}, stored {:08x}", computed, stored),
            ));
        }

        let kind = data[4];
        let payload_len = u32::from_le_bytes([data[5], data[6], data[7], data[8]]) as usize;
        if 4 + 1 + 4 + payload_len + 4 != frame_len {
            return Err(StoreError::corruption(offset, "payload length disagrees with frame length"));
        }
        let payload = &data[9..9 + payload_len];

        let frame = match kind {
            KIND_WINNER => StoreFrame::Winner(serde_json::from_slice(payload)?),
            KIND_TOMBSTONE => {
                let bytes: [u8; 16] = payload
                    .try_into()
                    .map_err(|_| StoreError::corruption(offset, "tombstone id is not 16 bytes"))?;
                StoreFrame::Tombstone(Uuid::from_bytes(bytes))
            }
            other => {
                return Err(StoreError::corruption(
                    offset,
                    format!("unknown frame kind {}", other),
                ))
            }
        };

        Ok((frame, frame_len))
    }
}
