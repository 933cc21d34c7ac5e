//! Candidate pool for spindraw
//!
//! A static roster of entrants grouped by category, loaded once from a JSON
//! file at startup and read-only for the lifetime of the process. The pool
//! knows nothing about winners; callers subtract already-won names to get
//! the remaining selection pool.

mod candidate;
mod errors;
mod roster;

pub use candidate::Candidate;
pub use errors::{PoolError, PoolResult};
pub use roster::Roster;
