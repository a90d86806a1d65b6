//! Command-line interface for lifeline.
//!
//! This module provides the CLI structure for the `lifeline` binary: the
//! safety page rendered as subcommands, one per page section.

mod commands;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

pub use commands::{
    ConfigCommand, EmergencyCommand, ReportCommand, ShareLocationCommand, TipsCommand,
};

/// lifeline - A personal safety page in your terminal
///
/// Shows safety tips, places a confirmed emergency call, shares your
/// location with a trusted contact, and submits incident reports by
/// handing deep links to the platform's dialer, chat, and SMS apps.
#[derive(Debug, Parser)]
#[command(name = "lifeline")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to custom configuration file
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Increase verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Print deep links instead of handing them to the system
    #[arg(long, global = true)]
    pub dry_run: bool,

    /// The command to execute
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Show the safety tips
    Tips(TipsCommand),

    /// Place an emergency call (with confirmation)
    Emergency(EmergencyCommand),

    /// Share your location with the trusted chat contact
    ShareLocation(ShareLocationCommand),

    /// Submit an incident report via SMS
    Report(ReportCommand),

    /// View or validate configuration
    #[command(subcommand)]
    Config(ConfigCommand),
}

impl Cli {
    /// Get the verbosity level based on flags.
    #[must_use]
    pub fn verbosity(&self) -> crate::logging::Verbosity {
        if self.quiet {
            crate::logging::Verbosity::Quiet
        } else {
            match self.verbose {
                0 => crate::logging::Verbosity::Normal,
                1 => crate::logging::Verbosity::Verbose,
                _ => crate::logging::Verbosity::Trace,
            }
        }
    }
}
