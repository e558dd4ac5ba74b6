//! Events delivered by the host to the control.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use thiserror::Error;
use web_time::SystemTime;

use crate::geo::{LatLon, LatLonBounds};

/// Name of a map event, e.g. `dragstart` or `zoomstart`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct MapEventName(String);

impl MapEventName {
    /// Event fired when the user starts dragging the map.
    pub const DRAG_START: &'static str = "dragstart";

    /// Creates a new event name.
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// The name as a string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for MapEventName {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for MapEventName {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl fmt::Display for MapEventName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A location fix reported by the host.
#[derive(Debug, Clone, PartialEq)]
pub struct LocationEvent {
    /// Position.
    pub position: LatLon,
    /// Accuracy of the position in meters, if known.
    pub accuracy: Option<f64>,
    /// Area the view should be fitted to in order to show the position.
    pub bounds: LatLonBounds,
    /// When the position was acquired.
    pub timestamp: Option<SystemTime>,
}

impl LocationEvent {
    /// Creates an event with explicitly given bounds.
    pub fn new(position: LatLon, accuracy: Option<f64>, bounds: LatLonBounds) -> Self {
        Self {
            position,
            accuracy,
            bounds,
            timestamp: None,
        }
    }

    /// Creates an event whose bounds cover the accuracy area around the position.
    pub fn from_accuracy(position: LatLon, accuracy: Option<f64>) -> Self {
        let bounds = LatLonBounds::around(position, accuracy.unwrap_or(0.0));
        Self::new(position, accuracy, bounds)
    }

    /// Sets the acquisition time.
    pub fn with_timestamp(mut self, timestamp: SystemTime) -> Self {
        self.timestamp = Some(timestamp);
        self
    }

    /// Returns true if both events report the same position with the same accuracy.
    pub fn same_fix(&self, other: &LocationEvent) -> bool {
        self.position == other.position && self.accuracy == other.accuracy
    }

    /// Radius of the accuracy circle in meters.
    pub fn radius(&self) -> f64 {
        self.accuracy.map_or(0.0, |accuracy| accuracy / 2.0)
    }
}

/// Reason of a location failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LocationErrorCode {
    /// The user or the platform refused access to the position.
    PermissionDenied = 1,
    /// The position could not be determined.
    PositionUnavailable = 2,
    /// No position was acquired within the configured timeout.
    Timeout = 3,
}

impl LocationErrorCode {
    /// Maps a numeric geolocation error code. Unknown codes are treated as unavailable position.
    pub fn from_code(code: u16) -> Self {
        match code {
            1 => Self::PermissionDenied,
            3 => Self::Timeout,
            _ => Self::PositionUnavailable,
        }
    }

    /// Numeric code.
    pub fn code(&self) -> u16 {
        *self as u16
    }
}

/// Location failure reported by the host.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{message} (code {})", .code.code())]
pub struct LocationError {
    /// Failure class.
    pub code: LocationErrorCode,
    /// Human readable message.
    pub message: String,
}

impl LocationError {
    /// Creates a new error.
    pub fn new(code: LocationErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    /// Returns true for timeouts.
    pub fn is_timeout(&self) -> bool {
        self.code == LocationErrorCode::Timeout
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_fix_compares_position_and_accuracy() {
        let a = LocationEvent::from_accuracy(LatLon::new(51.5, -0.09), Some(10.0));
        let b = LocationEvent::new(
            LatLon::new(51.5, -0.09),
            Some(10.0),
            LatLonBounds::around(LatLon::new(0.0, 0.0), 1.0),
        );
        assert!(a.same_fix(&b));

        let c = LocationEvent::from_accuracy(LatLon::new(51.5, -0.09), Some(12.0));
        assert!(!a.same_fix(&c));

        let d = LocationEvent::from_accuracy(LatLon::new(51.5, -0.09), None);
        assert!(!a.same_fix(&d));
    }

    #[test]
    fn radius_is_half_of_accuracy() {
        assert_eq!(
            LocationEvent::from_accuracy(LatLon::default(), Some(10.0)).radius(),
            5.0
        );
        assert_eq!(
            LocationEvent::from_accuracy(LatLon::default(), None).radius(),
            0.0
        );
    }

    #[test]
    fn error_codes() {
        assert_eq!(
            LocationErrorCode::from_code(1),
            LocationErrorCode::PermissionDenied
        );
        assert_eq!(LocationErrorCode::from_code(3), LocationErrorCode::Timeout);
        assert_eq!(
            LocationErrorCode::from_code(42),
            LocationErrorCode::PositionUnavailable
        );
        assert_eq!(LocationErrorCode::Timeout.code(), 3);

        let error = LocationError::new(LocationErrorCode::Timeout, "Timeout expired");
        assert!(error.is_timeout());
        assert_eq!(error.to_string(), "Timeout expired (code 3)");
    }
}
