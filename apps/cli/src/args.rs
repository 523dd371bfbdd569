//! # CLI Argument Definitions
//!
//! Defines the command-line interface structure using the `clap` crate:
//! subcommands, arguments, and flags for the validation toolkit.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// The main CLI structure parsing command-line arguments.
#[derive(Debug, Parser)]
#[command(name = "fedhub")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(arg_required_else_help = true)]
#[command(about = "Directory record validation toolkit for FedHub")]
pub struct Cli {
    /// Optional configuration file; built-in defaults apply when omitted
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// The main subcommand to execute.
    #[command(subcommand)]
    pub command: AppCommands,
}

/// Enumeration of available application subcommands.
#[derive(Debug, Subcommand)]
pub enum AppCommands {
    /// Validate a JSON array of raw records of one kind
    Check {
        /// Path to a JSON file containing an array of raw records
        file: PathBuf,

        /// Record kind to validate against
        #[arg(short, long, value_enum)]
        kind: RecordKind,

        /// Stop at the first invalid record instead of accumulating
        #[arg(long)]
        fail_fast: bool,
    },
    /// Validate a whole directory snapshot (repositories, groups, users)
    Snapshot {
        /// Path to a JSON snapshot file
        file: PathBuf,

        /// Treat referential warnings as failures
        #[arg(long)]
        strict: bool,
    },
    /// Load, validate, and summarize the application configuration
    Config {},
}

/// Directory record kinds understood by `check`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum RecordKind {
    Repository,
    Group,
    User,
}
