//! Draw Orchestrator for spindraw
//!
//! Coordinates per-category draw sequences against the winner store:
//! strict cap checks, the winner-commit pipeline, batch draws with pauses,
//! gated deletes, and event fan-out to the presentation layer. Owns the
//! per-category phase table; at most one sequence is active per category,
//! while different categories may animate concurrently.

mod caps;
mod errors;
mod events;
mod orchestrator;

pub use caps::DrawCaps;
pub use errors::{DrawError, DrawResult};
pub use events::{DrawEvent, EventHub};
pub use orchestrator::{DrawSettings, Orchestrator, WinnerTally};
