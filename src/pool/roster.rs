//! Candidate roster loading and category partitioning

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use super::candidate::Candidate;
use super::errors::{PoolError, PoolResult};

/// The full candidate roster, partitioned by category.
///
/// Categories are reported in first-appearance order so presentation stays
/// stable across runs.
#[derive(Debug, Clone)]
pub struct Roster {
    candidates: Vec<Candidate>,
    categories: Vec<String>,
}

impl Roster {
    /// Build a roster from candidate records, validating that every record
    /// has non-empty fields and that at least one candidate exists.
    pub fn new(candidates: Vec<Candidate>) -> PoolResult<Self> {
        if candidates.is_empty() {
            return Err(PoolError::EmptyRoster);
        }
        for candidate in &candidates {
            if candidate.name.trim().is_empty() {
                return Err(PoolError::EmptyField("name"));
            }
            if candidate.supervisor.trim().is_empty() {
                return Err(PoolError::EmptyField("supervisor"));
            }
            if candidate.category.trim().is_empty() {
                return Err(PoolError::EmptyField("category"));
            }
        }

        let mut categories = Vec::new();
        for candidate in &candidates {
            if !categories.contains(&candidate.category) {
                categories.push(candidate.category.clone());
            }
        }

        Ok(Self {
            candidates,
            categories,
        })
    }

    /// Load a roster from a JSON array of candidate records.
    pub fn load(path: &Path) -> PoolResult<Self> {
        let content = fs::read_to_string(path).map_err(|e| PoolError::Io {
            path: path.display().to_string(),
            source: e,
        })?;
        let candidates: Vec<Candidate> = serde_json::from_str(&content)?;
        Self::new(candidates)
    }

    /// All categories, in first-appearance order.
    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    /// Whether the roster contains the given category.
    pub fn has_category(&self, category: &str) -> bool {
        self.categories.iter().any(|c| c == category)
    }

    /// All candidates in a category.
    pub fn by_category(&self, category: &str) -> PoolResult<Vec<Candidate>> {
        if !self.has_category(category) {
            return Err(PoolError::UnknownCategory(category.to_string()));
        }
        Ok(self
            .candidates
            .iter()
            .filter(|c| c.category == category)
            .cloned()
            .collect())
    }

    /// Candidates in a category whose names are not in `won_names`.
    ///
    /// This is the selection pool for a draw: a name already committed as a
    /// winner is never eligible again.
    pub fn remaining(&self, category: &str, won_names: &HashSet<String>) -> PoolResult<Vec<Candidate>> {
        Ok(self
            .by_category(category)?
            .into_iter()
            .filter(|c| !won_names.contains(&c.name))
            .collect())
    }

    /// Total candidate count. Never zero: empty rosters are rejected at
    /// construction.
    pub fn len(&self) -> usize {
        self.candidates.len()
    }
}
