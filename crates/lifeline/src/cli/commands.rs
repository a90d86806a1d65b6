//! CLI command definitions.
//!
//! This module defines the structure of all CLI subcommands. Each of the
//! page's sections maps to one subcommand.

use std::path::PathBuf;

use clap::{Args, Subcommand};

/// Tips command arguments.
#[derive(Debug, Args)]
pub struct TipsCommand {
    /// Output as JSON
    #[arg(short, long)]
    pub json: bool,
}

/// Emergency command arguments.
#[derive(Debug, Args)]
pub struct EmergencyCommand {
    /// Confirm the call without prompting
    #[arg(short, long)]
    pub yes: bool,
}

/// Share-location command arguments.
#[derive(Debug, Args)]
pub struct ShareLocationCommand {
    /// Output the shared position as JSON
    #[arg(short, long)]
    pub json: bool,
}

/// Report command arguments.
#[derive(Debug, Args)]
pub struct ReportCommand {
    /// Reporter name (required)
    #[arg(short, long)]
    pub name: String,

    /// Incident description (required)
    #[arg(short, long)]
    pub description: String,
}

/// Configuration commands.
#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Show current configuration
    Show {
        /// Output as JSON
        #[arg(short, long)]
        json: bool,
    },

    /// Show the configuration file path
    Path,

    /// Validate configuration
    Validate {
        /// Path to configuration file to validate
        #[arg(short, long)]
        file: Option<PathBuf>,
    },
}
