//! Error types for price calculation.

use thiserror::Error;

/// Result type alias for pricing operations.
pub type Result<T> = std::result::Result<T, PriceError>;

/// Message shown when either user coordinate fails to parse.
pub const INVALID_COORDINATES_MESSAGE: &str = "Invalid coordinates.";

/// Message shown for failures the user cannot act on.
pub const GENERIC_FAILURE_MESSAGE: &str = "Something went wrong while calculating the price.";

/// Errors that can occur while estimating a delivery price.
#[derive(Debug, Error)]
pub enum PriceError {
    /// User latitude or longitude did not parse
    #[error("Invalid coordinates.")]
    InvalidCoordinates(#[source] delivery_geo::GeoError),

    /// Cart value is not a usable amount
    #[error("{0}")]
    InvalidCartValue(String),

    /// Distance falls outside every serviceable range, or into the open-ended one
    #[error(
        "Delivery is not possible: distance {} m exceeds the maximum delivery distance of {max_distance} m.",
        .distance.round()
    )]
    DeliveryUnreachable {
        /// Computed delivery distance in meters
        distance: f64,
        /// `min` of the last distance range
        max_distance: u64,
    },

    /// A collaborator (e.g. the venue API) failed; its message is shown as-is
    #[error("{0}")]
    UpstreamDataUnavailable(String),

    /// Anything else, e.g. malformed pricing data or arithmetic overflow
    #[error("Unexpected computation failure: {0}")]
    UnexpectedComputationFailure(String),
}

/// Error code for programmatic handling.
/// Range: 20xxx for pricing errors.
#[repr(u32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PriceErrorCode {
    /// Invalid user coordinates
    InvalidCoordinates = 20001,
    /// Invalid cart value
    InvalidCartValue = 20002,
    /// Delivery not possible for the distance
    DeliveryUnreachable = 20003,
    /// Upstream data could not be fetched
    UpstreamDataUnavailable = 20004,
    /// Catch-all
    UnexpectedComputationFailure = 20005,
}

impl PriceError {
    /// Create an unexpected failure error
    pub fn unexpected(msg: impl Into<String>) -> Self {
        Self::UnexpectedComputationFailure(msg.into())
    }

    /// Create an upstream failure error
    pub fn upstream(msg: impl Into<String>) -> Self {
        Self::UpstreamDataUnavailable(msg.into())
    }

    /// Returns the error code for this error.
    pub fn code(&self) -> PriceErrorCode {
        match self {
            Self::InvalidCoordinates(_) => PriceErrorCode::InvalidCoordinates,
            Self::InvalidCartValue(_) => PriceErrorCode::InvalidCartValue,
            Self::DeliveryUnreachable { .. } => PriceErrorCode::DeliveryUnreachable,
            Self::UpstreamDataUnavailable(_) => PriceErrorCode::UpstreamDataUnavailable,
            Self::UnexpectedComputationFailure(_) => PriceErrorCode::UnexpectedComputationFailure,
        }
    }

    /// Human-readable message for the price breakdown.
    ///
    /// Identical to `Display` except for unexpected failures, whose details
    /// are only logged.
    pub fn user_message(&self) -> String {
        match self {
            Self::UnexpectedComputationFailure(_) => GENERIC_FAILURE_MESSAGE.to_string(),
            other => other.to_string(),
        }
    }
}
