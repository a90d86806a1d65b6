//! Incident report composition.
//!
//! A report is two required text fields. The required-field constraint is
//! enforced at construction, before any deep link exists; beyond that
//! there is no validation: no length limits, no content sanitization
//! other than the URL encoding applied when the link is built.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// An incident report ready to be composed into an SMS body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IncidentReport {
    name: String,
    description: String,
}

impl IncidentReport {
    /// Create a report from the two required fields.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingField`] if either field is empty or
    /// whitespace-only.
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Result<Self> {
        let name = name.into();
        let description = description.into();

        if name.trim().is_empty() {
            return Err(Error::missing_field("name"));
        }
        if description.trim().is_empty() {
            return Err(Error::missing_field("description"));
        }

        Ok(Self { name, description })
    }

    /// The reporter's name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The incident description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// The plain-text message body sent to the emergency number.
    #[must_use]
    pub fn message_body(&self) -> String {
        format!(
            "Incident Report from {}: {}",
            self.name, self.description
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_new() {
        let report = IncidentReport::new("Asha", "Suspicious person following me").unwrap();
        assert_eq!(report.name(), "Asha");
        assert_eq!(report.description(), "Suspicious person following me");
    }

    #[test]
    fn test_message_body() {
        let report = IncidentReport::new("Asha", "Suspicious person following me").unwrap();
        assert_eq!(
            report.message_body(),
            "Incident Report from Asha: Suspicious person following me"
        );
    }

    #[test]
    fn test_empty_name_rejected() {
        let result = IncidentReport::new("", "Something happened");
        assert!(result.unwrap_err().is_missing_field());
    }

    #[test]
    fn test_empty_description_rejected() {
        let result = IncidentReport::new("Asha", "");
        assert!(result.unwrap_err().is_missing_field());
    }

    #[test]
    fn test_whitespace_only_fields_rejected() {
        assert!(IncidentReport::new("   ", "valid").is_err());
        assert!(IncidentReport::new("valid", "\t\n").is_err());
    }

    #[test]
    fn test_missing_field_names_the_field() {
        let err = IncidentReport::new("", "valid").unwrap_err();
        assert!(err.to_string().contains("name"));

        let err = IncidentReport::new("valid", "").unwrap_err();
        assert!(err.to_string().contains("description"));
    }

    #[test]
    fn test_report_serialization() {
        let report = IncidentReport::new("Asha", "Followed on the highway").unwrap();
        let json = serde_json::to_string(&report).unwrap();
        let deserialized: IncidentReport = serde_json::from_str(&json).unwrap();
        assert_eq!(report, deserialized);
    }
}
