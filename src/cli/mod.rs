//! CLI for spindraw
//!
//! Commands:
//! - init: write a default config and sample roster
//! - status: contest standings and prize pool
//! - draw / draw-all: run draw sequences, rendering ticks as text
//! - winners: list committed winners
//! - delete: operator-gated winner removal
//! - hash-secret: digest helper for the config file

mod args;
mod commands;
mod errors;

pub use args::{Cli, Command};
pub use commands::run;
pub use errors::{CliError, CliResult};
