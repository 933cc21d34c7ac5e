//! Candidate record type

use serde::{Deserialize, Serialize};

/// An entrant eligible to be drawn as a winner. Immutable once loaded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Candidate {
    /// Entrant name; also the identity used for winner exclusion
    pub name: String,
    /// Reporting supervisor, carried through to the winner record
    pub supervisor: String,
    /// Partition key over candidates and winners
    pub category: String,
}

impl Candidate {
    pub fn new(
        name: impl Into<String>,
        supervisor: impl Into<String>,
        category: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            supervisor: supervisor.into(),
            category: category.into(),
        }
    }
}
