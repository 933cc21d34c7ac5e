//! CLI argument definitions using clap
//!
//! Commands:
//! - spindraw init --config <path>
//! - spindraw status --config <path>
//! - spindraw draw <category> --config <path>
//! - spindraw draw-all <category> --config <path>
//! - spindraw winners [--category <name>] --config <path>
//! - spindraw delete <id> --secret <secret> --config <path>
//! - spindraw hash-secret <secret>

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use uuid::Uuid;

/// spindraw - a timer-driven raffle drawing engine
#[derive(Parser, Debug)]
#[command(name = "spindraw")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Write a default configuration and sample roster
    Init {
        /// Path to configuration file
        #[arg(long, default_value = "./spindraw.json")]
        config: PathBuf,
    },

    /// Show contest standings and the remaining prize pool
    Status {
        #[arg(long, default_value = "./spindraw.json")]
        config: PathBuf,
    },

    /// Draw one winner from a category
    Draw {
        /// Category to draw from
        category: String,
        #[arg(long, default_value = "./spindraw.json")]
        config: PathBuf,
    },

    /// Draw winners from a category until a cap or the pool is exhausted
    DrawAll {
        /// Category to draw from
        category: String,
        #[arg(long, default_value = "./spindraw.json")]
        config: PathBuf,
    },

    /// List committed winners, newest first
    Winners {
        /// Restrict to one category
        #[arg(long)]
        category: Option<String>,
        #[arg(long, default_value = "./spindraw.json")]
        config: PathBuf,
    },

    /// Delete a winner by id (requires the operator secret)
    Delete {
        /// Winner id
        id: Uuid,
        /// Operator secret
        #[arg(long)]
        secret: String,
        #[arg(long, default_value = "./spindraw.json")]
        config: PathBuf,
    },

    /// Print the base64 digest of an operator secret for the config file
    HashSecret {
        /// The secret to digest
        secret: String,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
