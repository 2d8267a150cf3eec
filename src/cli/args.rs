//! CLI argument definitions using clap.
//!
//! Langfill has a deliberately small surface: one `scan` subcommand that
//! does the whole find-and-fill pass, plus `init` to drop a default config
//! file into the project.

use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Arguments {
    /// Check if a command was provided, otherwise print help and return None.
    pub fn with_command_or_help(self) -> Option<Self> {
        if self.command.is_none() {
            Self::command().print_help().ok();
            None
        } else {
            Some(self)
        }
    }
}

#[derive(Debug, Clone, Args)]
pub struct ScanArgs {
    /// Path to scan for translations (defaults to the current directory)
    #[arg(long)]
    pub path: Option<PathBuf>,

    /// Translations root directory (overrides config file)
    #[arg(long)]
    pub lang_path: Option<PathBuf>,

    /// Show per-file matches and every inserted placeholder
    #[arg(long)]
    pub detailed: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Sort catalog keys before writing (overrides config file)
    #[arg(long)]
    pub sort: bool,
}

#[derive(Debug, Args)]
pub struct ScanCommand {
    #[command(flatten)]
    pub args: ScanArgs,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Find translation calls in the source tree and fill every locale
    /// catalog with placeholders for missing keys
    Scan(ScanCommand),
    /// Initialize a new .langfillrc.json configuration file
    Init,
}
