//! `lifeline` - CLI for the personal safety page
//!
//! This binary renders the safety page in a terminal: safety tips, the
//! confirmed emergency call, location sharing, and incident reports. Every
//! interaction ends by handing a deep link to the platform's opener.

#![warn(missing_debug_implementations)]
#![deny(unsafe_code)]

use std::io::{BufRead, Write};

use clap::Parser;
use url::Url;

use lifeline::cli::{
    Cli, Command, ConfigCommand, EmergencyCommand, ReportCommand, ShareLocationCommand,
    TipsCommand,
};
use lifeline::dispatch::{Dispatch, PrintingDispatch};
use lifeline::location::FixedLocator;
use lifeline::page::SafetyPage;
use lifeline::report::IncidentReport;
use lifeline::{init_logging, Config, Error};

// Platform-specific imports using conditional compilation
#[cfg(target_os = "linux")]
use lifeline_linux as platform;

#[cfg(target_os = "macos")]
use lifeline_mac as platform;

/// A dispatcher that hands deep links to the OS opener.
#[derive(Debug, Clone, Copy, Default)]
struct SystemDispatch;

impl Dispatch for SystemDispatch {
    fn dispatch(&self, link: &Url) -> lifeline::Result<()> {
        platform::open_uri(link.as_str())
            .map_err(|e| Error::dispatch(link.as_str(), e.to_string()))
    }
}

type Page = SafetyPage<Box<dyn Dispatch>, FixedLocator>;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity
    init_logging(cli.verbosity());

    // Initialize platform components before any handoff can happen
    platform::init().map_err(|e| anyhow::anyhow!("platform init failed: {e}"))?;
    tracing::debug!(platform = platform::platform_name(), "platform ready");

    // Load configuration
    let config = Config::load_from(cli.config.clone())?;

    let dispatcher: Box<dyn Dispatch> = if cli.dry_run {
        Box::new(PrintingDispatch)
    } else {
        Box::new(SystemDispatch)
    };
    let locator = match config.fixed_coordinates() {
        Some((latitude, longitude)) => FixedLocator::new(latitude, longitude),
        None => FixedLocator::unavailable(),
    };
    let mut page = SafetyPage::new(config.contacts.clone(), dispatcher, locator);

    // Execute the command
    match cli.command {
        Command::Tips(cmd) => handle_tips(&page, &cmd),
        Command::Emergency(cmd) => handle_emergency(&mut page, &cmd),
        Command::ShareLocation(cmd) => handle_share_location(&mut page, &cmd).await,
        Command::Report(cmd) => handle_report(&page, &cmd),
        Command::Config(cmd) => handle_config(&config, cmd),
    }
}

fn handle_tips(page: &Page, cmd: &TipsCommand) -> anyhow::Result<()> {
    if cmd.json {
        println!("{}", serde_json::to_string_pretty(page.tips())?);
    } else {
        println!("Safety Tips");
        println!("-----------");
        for tip in page.tips() {
            println!("* {} [{}]", tip.title, tip.icon);
            println!("  {}", tip.description);
        }
    }
    Ok(())
}

fn handle_emergency(page: &mut Page, cmd: &EmergencyCommand) -> anyhow::Result<()> {
    page.request_emergency();

    let number = page.contacts().emergency_number.clone();
    let confirmed = cmd.yes || confirm_on_terminal(&number)?;

    if confirmed {
        page.confirm_emergency()?;
        println!("Handed off to the dialer for {number}.");
    } else {
        page.cancel_emergency();
        println!("Cancelled. No call was placed.");
    }
    Ok(())
}

/// Ask the y/N confirmation question on the terminal.
fn confirm_on_terminal(number: &str) -> std::io::Result<bool> {
    print!("Place an emergency call to {number}? [y/N] ");
    std::io::stdout().flush()?;

    let mut answer = String::new();
    std::io::stdin().lock().read_line(&mut answer)?;
    let answer = answer.trim().to_ascii_lowercase();
    Ok(answer == "y" || answer == "yes")
}

async fn handle_share_location(page: &mut Page, cmd: &ShareLocationCommand) -> anyhow::Result<()> {
    match page.share_location().await? {
        Some(position) => {
            if cmd.json {
                println!("{}", serde_json::to_string_pretty(&position)?);
            } else {
                let recipient = &page.contacts().chat_recipient;
                println!("Shared location {position} with {recipient}.");
            }
        }
        None => {
            println!("Could not determine your location; nothing was shared.");
        }
    }
    Ok(())
}

fn handle_report(page: &Page, cmd: &ReportCommand) -> anyhow::Result<()> {
    let report = IncidentReport::new(&cmd.name, &cmd.description)?;
    page.submit_report(&report)?;
    println!(
        "Report handed off to the SMS composer for {}.",
        page.contacts().emergency_number
    );
    Ok(())
}

fn handle_config(config: &Config, cmd: ConfigCommand) -> anyhow::Result<()> {
    match cmd {
        ConfigCommand::Show { json } => {
            if json {
                println!("{}", serde_json::to_string_pretty(config)?);
            } else {
                println!("Current Configuration");
                println!("=====================");
                println!();
                println!("[Contacts]");
                println!("  Emergency number: {}", config.contacts.emergency_number);
                println!("  Chat recipient:   {}", config.contacts.chat_recipient);
                println!();
                println!("[Location]");
                match config.fixed_coordinates() {
                    Some((latitude, longitude)) => {
                        println!("  Fixed position:   {latitude}, {longitude}");
                    }
                    None => println!("  Fixed position:   (unset; location queries will fail)"),
                }
            }
        }
        ConfigCommand::Path => {
            println!("{}", Config::default_config_path().display());
        }
        ConfigCommand::Validate { file } => {
            let path = file.unwrap_or_else(Config::default_config_path);
            println!("Validating configuration: {}", path.display());
            match Config::load_from(Some(path)) {
                Ok(_) => println!("Configuration is valid."),
                Err(e) => println!("Configuration error: {e}"),
            }
        }
    }
    Ok(())
}
