//! Venue location parsing.
//!
//! Venue static data carries its position as a GeoJSON-style point:
//! `{"type": "Point", "coordinates": [lng, lat]}`. The `type` member is
//! optional in practice.

use crate::{Coordinate, GeoError, Result};
use serde::{Deserialize, Serialize};

/// GeoJSON Point format.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeoJsonPoint {
    /// Should be "Point" when present
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub point_type: Option<String>,
    /// [longitude, latitude] array
    pub coordinates: [f64; 2],
}

impl GeoJsonPoint {
    /// Converts the point into a validated coordinate.
    pub fn to_coordinate(&self) -> Result<Coordinate> {
        if let Some(kind) = self.point_type.as_deref() {
            if !kind.eq_ignore_ascii_case("point") {
                return Err(GeoError::InvalidLocation(format!("Expected Point, got: {kind}")));
            }
        }

        let coordinate = Coordinate::from_lon_lat(self.coordinates);
        if !coordinate.is_valid() {
            return Err(GeoError::InvalidLocation(format!(
                "Coordinates out of range: [{}, {}]",
                self.coordinates[0], self.coordinates[1]
            )));
        }

        Ok(coordinate)
    }
}

impl From<Coordinate> for GeoJsonPoint {
    fn from(coordinate: Coordinate) -> Self {
        Self {
            point_type: Some("Point".to_string()),
            coordinates: [coordinate.longitude, coordinate.latitude],
        }
    }
}

/// Parse a venue location from a JSON value.
///
/// Accepts either a GeoJSON point object or a bare `[lng, lat]` array.
///
/// # Example
/// ```
/// use delivery_geo::parse_venue_location;
/// use serde_json::json;
///
/// let location = json!({"coordinates": [24.9384, 60.1699]});
/// let coord = parse_venue_location(&location).unwrap();
/// assert!((coord.latitude - 60.1699).abs() < 0.0001);
/// ```
pub fn parse_venue_location(value: &serde_json::Value) -> Result<Coordinate> {
    if value.is_null() {
        return Err(GeoError::InvalidLocation("location is null".into()));
    }

    if value.is_array() {
        let pair: [f64; 2] = serde_json::from_value(value.clone())?;
        return GeoJsonPoint { point_type: None, coordinates: pair }.to_coordinate();
    }

    let point: GeoJsonPoint = serde_json::from_value(value.clone())?;
    point.to_coordinate()
}
