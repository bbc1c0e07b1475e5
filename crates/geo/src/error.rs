//! Error types for the geo crate.

use crate::parse::Axis;
use thiserror::Error;

/// Result type alias for geo operations.
pub type Result<T> = std::result::Result<T, GeoError>;

/// Errors that can occur during geo operations.
#[derive(Debug, Error)]
pub enum GeoError {
    /// Input does not look like `[-]digits[.digits][NSEW]`
    #[error("Invalid coordinate format: {0:?}")]
    InvalidCoordinateFormat(String),

    /// Direction letter does not belong to the axis (e.g. `E` on a latitude)
    #[error("Direction '{direction}' is not valid for {axis}")]
    InvalidCoordinateDirection {
        /// The offending direction letter
        direction: char,
        /// Axis the value was parsed for
        axis: Axis,
    },

    /// Parsed value lies outside the axis range
    #[error("{axis} {value} is out of range")]
    CoordinateOutOfRange {
        /// Signed value after direction resolution
        value: f64,
        /// Axis the value was parsed for
        axis: Axis,
    },

    /// Venue location payload could not be turned into a coordinate
    #[error("Invalid location: {0}")]
    InvalidLocation(String),

    /// JSON parsing error
    #[error("JSON parsing error: {0}")]
    JsonError(#[from] serde_json::Error),
}

/// Error code for integration with the pricing error codes.
/// Range: 10xxx for geo errors.
#[repr(u32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GeoErrorCode {
    /// Invalid coordinate format
    InvalidCoordinateFormat = 10001,
    /// Direction letter does not match the axis
    InvalidCoordinateDirection = 10002,
    /// Value out of range
    CoordinateOutOfRange = 10003,
    /// Invalid venue location
    InvalidLocation = 10004,
    /// JSON parsing error
    JsonParsing = 10005,
}

impl GeoError {
    /// Returns the error code for this error.
    pub fn code(&self) -> GeoErrorCode {
        match self {
            GeoError::InvalidCoordinateFormat(_) => GeoErrorCode::InvalidCoordinateFormat,
            GeoError::InvalidCoordinateDirection { .. } => GeoErrorCode::InvalidCoordinateDirection,
            GeoError::CoordinateOutOfRange { .. } => GeoErrorCode::CoordinateOutOfRange,
            GeoError::InvalidLocation(_) => GeoErrorCode::InvalidLocation,
            GeoError::JsonError(_) => GeoErrorCode::JsonParsing,
        }
    }

    /// True for the errors produced while parsing user-entered coordinates.
    pub fn is_coordinate_error(&self) -> bool {
        matches!(
            self,
            GeoError::InvalidCoordinateFormat(_)
                | GeoError::InvalidCoordinateDirection { .. }
                | GeoError::CoordinateOutOfRange { .. }
        )
    }
}
