//! One-shot device location queries.
//!
//! This module defines the position type, the location-service error
//! taxonomy, and the platform-agnostic capability for requesting a single
//! position fix. A query produces exactly one success or failure and then
//! terminates; there is no subscription or continuous tracking.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Reasons a one-shot location query can fail.
///
/// Mirrors the failure modes of platform geolocation services.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum LocationError {
    /// The user or platform denied the location permission.
    #[error("location permission denied")]
    PermissionDenied,

    /// The platform could not produce a position fix.
    #[error("position unavailable")]
    PositionUnavailable,

    /// The platform's own deadline for the query elapsed.
    #[error("position request timed out")]
    Timeout,
}

/// Result type for location queries.
pub type Result<T> = std::result::Result<T, LocationError>;

/// A single position fix.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Position {
    /// Latitude in floating-point degrees.
    pub latitude: f64,

    /// Longitude in floating-point degrees.
    pub longitude: f64,

    /// When this fix was acquired.
    pub acquired_at: DateTime<Utc>,
}

impl Position {
    /// Create a new position fix acquired now.
    #[must_use]
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
            acquired_at: Utc::now(),
        }
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}, {}", self.latitude, self.longitude)
    }
}

/// A capability that answers a single location query.
///
/// Implementors wrap a platform location service. Each call is independent:
/// the caller gets one success-or-failure outcome and nothing else. Callers
/// that fire overlapping queries get last-writer-wins semantics by simply
/// overwriting whatever they stored from the previous answer.
#[async_trait::async_trait]
pub trait LocateOnce: Send + Sync {
    /// Request the current device position.
    ///
    /// # Errors
    ///
    /// Returns a [`LocationError`] when the platform denies permission,
    /// cannot produce a fix, or times out on its own deadline.
    async fn current_position(&self) -> Result<Position>;
}

/// A locator that always answers with a configured coordinate pair.
///
/// This is the provider the CLI uses: terminals have no geolocation
/// service, so the fix comes from configuration. With no coordinates
/// configured it reports [`LocationError::PositionUnavailable`].
#[derive(Debug, Clone, Default)]
pub struct FixedLocator {
    coordinates: Option<(f64, f64)>,
}

impl FixedLocator {
    /// Create a locator answering with the given coordinates.
    #[must_use]
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            coordinates: Some((latitude, longitude)),
        }
    }

    /// Create a locator with no coordinates; every query fails.
    #[must_use]
    pub fn unavailable() -> Self {
        Self { coordinates: None }
    }

    /// Check whether this locator has coordinates to answer with.
    #[must_use]
    pub fn is_available(&self) -> bool {
        self.coordinates.is_some()
    }
}

#[async_trait::async_trait]
impl LocateOnce for FixedLocator {
    async fn current_position(&self) -> Result<Position> {
        match self.coordinates {
            Some((latitude, longitude)) => Ok(Position::new(latitude, longitude)),
            None => Err(LocationError::PositionUnavailable),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_location_error_display() {
        assert_eq!(
            LocationError::PermissionDenied.to_string(),
            "location permission denied"
        );
        assert_eq!(
            LocationError::PositionUnavailable.to_string(),
            "position unavailable"
        );
        assert_eq!(
            LocationError::Timeout.to_string(),
            "position request timed out"
        );
    }

    #[test]
    fn test_position_new() {
        let position = Position::new(12.9716, 77.5946);
        assert!((position.latitude - 12.9716).abs() < f64::EPSILON);
        assert!((position.longitude - 77.5946).abs() < f64::EPSILON);
    }

    #[test]
    fn test_position_display() {
        let position = Position::new(12.9716, 77.5946);
        assert_eq!(position.to_string(), "12.9716, 77.5946");
    }

    #[test]
    fn test_position_serialization() {
        let position = Position::new(51.5074, -0.1278);
        let json = serde_json::to_string(&position).unwrap();
        let deserialized: Position = serde_json::from_str(&json).unwrap();
        assert_eq!(position, deserialized);
    }

    #[tokio::test]
    async fn test_fixed_locator_answers_with_coordinates() {
        let locator = FixedLocator::new(12.9716, 77.5946);
        assert!(locator.is_available());

        let position = locator.current_position().await.unwrap();
        assert!((position.latitude - 12.9716).abs() < f64::EPSILON);
        assert!((position.longitude - 77.5946).abs() < f64::EPSILON);
    }

    #[tokio::test]
    async fn test_fixed_locator_unavailable() {
        let locator = FixedLocator::unavailable();
        assert!(!locator.is_available());

        let result = locator.current_position().await;
        assert_eq!(result.unwrap_err(), LocationError::PositionUnavailable);
    }

    #[tokio::test]
    async fn test_fixed_locator_default_is_unavailable() {
        let locator = FixedLocator::default();
        assert!(locator.current_position().await.is_err());
    }
}
