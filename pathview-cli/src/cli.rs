//! CLI structure and command definitions.
//!
//! This module defines the main CLI structure using clap's derive macros,
//! including global options and subcommands.

use crate::commands::{
    EqualCommand, NormalizeCommand, ReadableCommand, ShowBaseCommand, ValidateCommand,
};
use clap::{Parser, Subcommand};
use pathview::Platform;
use std::path::PathBuf;

/// Normalize, compare, and display paths across platforms.
#[derive(Parser)]
#[command(name = "pathview")]
#[command(version, about = "Normalize, compare, and display paths", long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Load an additional configuration file
    #[arg(long, value_name = "PATH", global = true, env = "PATHVIEW_CONFIG")]
    pub config: Option<PathBuf>,

    /// Apply this platform's path rules (windows or posix)
    #[arg(long, value_name = "PLATFORM", global = true)]
    pub platform: Option<Platform>,

    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands.
#[derive(Subcommand)]
pub enum Command {
    /// Print paths in canonical forward-slash form
    Normalize(NormalizeCommand),

    /// Check whether two paths denote the same location
    Equal(EqualCommand),

    /// Print a path relative to a base directory
    Readable(ReadableCommand),

    /// Print the base directory readable paths are relative to
    ShowBase(ShowBaseCommand),

    /// Validate a configuration file
    Validate(ValidateCommand),
}
