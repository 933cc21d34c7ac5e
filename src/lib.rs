//! spindraw - a timer-driven raffle drawing engine with durable winner records
//!
//! Winners are drawn uniformly at random from a per-category candidate pool
//! through a decelerating spin sequence, committed to an append-only store,
//! and capped per category and globally.

pub mod cli;
pub mod config;
pub mod gate;
pub mod observability;
pub mod orchestrator;
pub mod pool;
pub mod sequencer;
pub mod store;
