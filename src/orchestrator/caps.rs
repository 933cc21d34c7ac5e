//! Winner cap arithmetic
//!
//! Caps are strict: a category holding exactly its cap accepts no further
//! draws, and likewise for the global cap.

use serde::{Deserialize, Serialize};

/// Per-category and global committed-winner caps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DrawCaps {
    /// Maximum committed winners per category
    pub per_category: usize,
    /// Maximum committed winners across all categories
    pub global: usize,
}

impl Default for DrawCaps {
    fn default() -> Self {
        Self {
            per_category: 2,
            global: 6,
        }
    }
}

impl DrawCaps {
    /// Whether a category with `count` winners may accept another draw.
    pub fn category_open(&self, count: usize) -> bool {
        count < self.per_category
    }

    /// Whether the contest with `total` winners may accept another draw.
    pub fn global_open(&self, total: usize) -> bool {
        total < self.global
    }

    /// How many more draws a category may commit given current counts.
    pub fn remaining(&self, count: usize, total: usize) -> usize {
        let category_left = self.per_category.saturating_sub(count);
        let global_left = self.global.saturating_sub(total);
        category_left.min(global_left)
    }
}
