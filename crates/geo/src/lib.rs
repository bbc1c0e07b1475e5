//! Geospatial helpers for delivery pricing.
//!
//! This crate provides:
//! - Coordinate string parsing (`60.1699N`, `-24.9384`, ...)
//! - Haversine distance calculations
//! - Venue location parsing from GeoJSON points
//!
//! # Example
//!
//! ```
//! use delivery_geo::{haversine_distance_meters, Axis, Coordinate, parse_coordinate};
//!
//! let venue = Coordinate::new(60.1699, 24.9384);
//! let user = Coordinate::new(
//!     parse_coordinate("60.17094N", Axis::Latitude).unwrap(),
//!     parse_coordinate("24.93087E", Axis::Longitude).unwrap(),
//! );
//!
//! let distance = haversine_distance_meters(&user, &venue);
//! assert!((distance - 432.0).abs() < 5.0);
//! ```

mod error;
mod haversine;
mod location;
mod parse;

pub use error::{GeoError, GeoErrorCode, Result};
pub use haversine::{
    haversine_distance, haversine_distance_degrees, haversine_distance_meters, EARTH_RADIUS_KM,
    EARTH_RADIUS_M,
};
pub use location::{parse_venue_location, GeoJsonPoint};
pub use parse::{is_valid_coordinate, parse_coordinate, try_parse_coordinate, Axis};

/// A geographic coordinate with latitude and longitude.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Coordinate {
    /// Latitude in degrees (-90 to 90)
    pub latitude: f64,
    /// Longitude in degrees (-180 to 180)
    pub longitude: f64,
}

impl Coordinate {
    /// Creates a new coordinate.
    ///
    /// # Arguments
    /// * `latitude` - Latitude in degrees (-90 to 90)
    /// * `longitude` - Longitude in degrees (-180 to 180)
    #[inline]
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self { latitude, longitude }
    }

    /// Parses a latitude/longitude pair of user-entered strings.
    ///
    /// Both values go through [`try_parse_coordinate`], so direction suffixes
    /// and range checks apply.
    pub fn parse(latitude: &str, longitude: &str) -> Result<Self> {
        let latitude = try_parse_coordinate(latitude, Axis::Latitude)?;
        let longitude = try_parse_coordinate(longitude, Axis::Longitude)?;
        Ok(Self::new(latitude, longitude))
    }

    /// Creates a coordinate from a `[longitude, latitude]` pair, the order
    /// used by GeoJSON and the venue API.
    #[inline]
    pub fn from_lon_lat([longitude, latitude]: [f64; 2]) -> Self {
        Self::new(latitude, longitude)
    }

    /// Returns true if the coordinate has valid values.
    #[inline]
    pub fn is_valid(&self) -> bool {
        Axis::Latitude.contains(self.latitude) && Axis::Longitude.contains(self.longitude)
    }

    /// Converts degrees to radians for internal calculations.
    #[inline]
    pub(crate) fn to_radians(self) -> (f64, f64) {
        (self.latitude.to_radians(), self.longitude.to_radians())
    }
}

impl From<(f64, f64)> for Coordinate {
    fn from((lat, lng): (f64, f64)) -> Self {
        Self::new(lat, lng)
    }
}
