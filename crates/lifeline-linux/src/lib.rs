//! Linux-specific implementation for lifeline
//!
//! This crate provides the Linux leg of the deep-link handoff: URIs go to
//! the desktop's default handler via `xdg-open`.

#![cfg(target_os = "linux")]
#![warn(missing_debug_implementations)]
#![deny(unsafe_code)]

use std::process::{Command, Stdio};

/// Initialize Linux-specific components
///
/// # Errors
///
/// Returns an error if initialization fails
pub fn init() -> Result<(), Box<dyn std::error::Error>> {
    tracing::info!("Initializing Linux platform components");
    Ok(())
}

/// Get platform name
#[must_use]
pub fn platform_name() -> &'static str {
    "Linux"
}

/// Hand a URI to the desktop's default handler.
///
/// The handoff is fire-and-forget: the handler process is spawned and
/// detached, and nothing about its outcome comes back.
///
/// # Errors
///
/// Returns an error if the `xdg-open` process cannot be spawned.
pub fn open_uri(uri: &str) -> std::io::Result<()> {
    tracing::debug!(uri, "handing URI to xdg-open");
    Command::new("xdg-open")
        .arg(uri)
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .map(|_| ())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init() {
        assert!(init().is_ok());
    }

    #[test]
    fn test_platform_name() {
        assert_eq!(platform_name(), "Linux");
    }
}
