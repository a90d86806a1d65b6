//! macOS-specific implementation for lifeline
//!
//! This crate provides the macOS leg of the deep-link handoff: URIs go to
//! the system's default handler via `open`.

#![cfg(target_os = "macos")]
#![warn(missing_debug_implementations)]
#![deny(unsafe_code)]

use std::process::{Command, Stdio};

/// Initialize macOS-specific components
///
/// # Errors
///
/// Returns an error if initialization fails
pub fn init() -> Result<(), Box<dyn std::error::Error>> {
    tracing::info!("Initializing macOS platform components");
    Ok(())
}

/// Get platform name
#[must_use]
pub fn platform_name() -> &'static str {
    "macOS"
}

/// Hand a URI to the system's default handler.
///
/// The handoff is fire-and-forget: the handler process is spawned and
/// detached, and nothing about its outcome comes back.
///
/// # Errors
///
/// Returns an error if the `open` process cannot be spawned.
pub fn open_uri(uri: &str) -> std::io::Result<()> {
    tracing::debug!(uri, "handing URI to open");
    Command::new("open")
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
        assert_eq!(platform_name(), "macOS");
    }
}
