//! Error types for lifeline.
//!
//! This module defines all error types used throughout the lifeline crate,
//! providing detailed context for debugging and user-friendly error messages.

use thiserror::Error;

use crate::location::LocationError;

/// The main error type for lifeline operations.
#[derive(Error, Debug)]
pub enum Error {
    // === Configuration Errors ===
    /// Failed to load configuration.
    #[error("failed to load configuration: {0}")]
    ConfigLoad(Box<figment::Error>),

    /// Configuration validation failed.
    #[error("invalid configuration: {message}")]
    ConfigValidation {
        /// Description of the validation failure.
        message: String,
    },

    // === Deep-Link Errors ===
    /// A deep link could not be constructed.
    #[error("failed to build {kind} link: {source}")]
    Link {
        /// Which kind of link was being built (dial, map, chat, sms).
        kind: &'static str,
        /// The underlying URL parse error.
        #[source]
        source: url::ParseError,
    },

    /// Handing a deep link to the platform failed locally.
    ///
    /// The handoff itself is one-way; this only covers failures to start it
    /// (such as the OS opener not spawning).
    #[error("failed to dispatch {uri}: {message}")]
    Dispatch {
        /// The deep link that could not be handed off.
        uri: String,
        /// Description of what went wrong.
        message: String,
    },

    // === Location Errors ===
    /// The one-shot location query failed.
    #[error("location query failed: {0}")]
    Location(#[from] LocationError),

    // === Report Errors ===
    /// A required incident-report field was blank.
    #[error("missing required field: {field}")]
    MissingField {
        /// Name of the blank field.
        field: &'static str,
    },

    // === I/O Errors ===
    /// File system or terminal operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    // === Serialization Errors ===
    /// JSON serialization/deserialization failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A specialized Result type for lifeline operations.
pub type Result<T> = std::result::Result<T, Error>;

impl From<figment::Error> for Error {
    fn from(err: figment::Error) -> Self {
        Self::ConfigLoad(Box::new(err))
    }
}

impl Error {
    /// Create a new dispatch error.
    #[must_use]
    pub fn dispatch(uri: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Dispatch {
            uri: uri.into(),
            message: message.into(),
        }
    }

    /// Create a new link construction error.
    #[must_use]
    pub fn link(kind: &'static str, source: url::ParseError) -> Self {
        Self::Link { kind, source }
    }

    /// Create a missing-field error for report validation.
    #[must_use]
    pub fn missing_field(field: &'static str) -> Self {
        Self::MissingField { field }
    }

    /// Check if this error is a required-field rejection.
    #[must_use]
    pub fn is_missing_field(&self) -> bool {
        matches!(self, Self::MissingField { .. })
    }

    /// Check if this error came from the location service.
    #[must_use]
    pub fn is_location_error(&self) -> bool {
        matches!(self, Self::Location(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::missing_field("name");
        assert_eq!(err.to_string(), "missing required field: name");

        let err = Error::dispatch("tel:112", "opener not found");
        assert_eq!(err.to_string(), "failed to dispatch tel:112: opener not found");
    }

    #[test]
    fn test_error_is_missing_field() {
        assert!(Error::missing_field("description").is_missing_field());
        assert!(!Error::dispatch("sms:112", "spawn failed").is_missing_field());
    }

    #[test]
    fn test_error_is_location_error() {
        let err: Error = LocationError::PermissionDenied.into();
        assert!(err.is_location_error());
        assert!(!Error::missing_field("name").is_location_error());
    }

    #[test]
    fn test_location_error_display() {
        let err: Error = LocationError::Timeout.into();
        let msg = err.to_string();
        assert!(msg.contains("location query failed"));
        assert!(msg.contains("timed out"));
    }

    #[test]
    fn test_link_error_display() {
        let parse_err = url::Url::parse("not a url").unwrap_err();
        let err = Error::link("dial", parse_err);
        let msg = err.to_string();
        assert!(msg.contains("dial"));
        assert!(msg.contains("failed to build"));
    }

    #[test]
    fn test_config_validation_error_display() {
        let err = Error::ConfigValidation {
            message: "emergency_number must not be empty".to_string(),
        };
        assert!(err.to_string().contains("emergency_number"));
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "terminal closed");
        let err: Error = io_err.into();
        assert!(err.to_string().contains("terminal closed"));
    }

    #[test]
    fn test_from_json_error() {
        let json_result: std::result::Result<i32, serde_json::Error> =
            serde_json::from_str("not valid json");
        if let Err(json_err) = json_result {
            let err: Error = json_err.into();
            assert!(matches!(err, Error::Json(_)));
        }
    }
}
