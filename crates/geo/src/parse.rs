//! Parsing of user-entered latitude/longitude strings.
//!
//! Accepted input: an optional leading `-`, digits, an optional fractional
//! part and an optional compass letter (`N`/`S` for latitude, `E`/`W` for
//! longitude). Surrounding whitespace and letter case are ignored.
//!
//! When a compass letter is present it decides the sign on its own: `S` and
//! `W` give a negative value, `N` and `E` a positive one, whatever the leading
//! `-` said. So `-5N` parses as `5` and `-2.3522W` as `-2.3522`.

use crate::{GeoError, Result};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;

static COORDINATE_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(-?\d+(?:\.\d+)?)([NSEW])?$").expect("valid coordinate regex"));

/// Which half of a coordinate pair a value belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    /// North/south, limited to [-90, 90]
    #[serde(alias = "lat")]
    Latitude,
    /// East/west, limited to [-180, 180]
    #[serde(alias = "lon", alias = "lng")]
    Longitude,
}

impl Axis {
    /// Absolute limit of the axis in degrees.
    #[inline]
    pub fn limit(self) -> f64 {
        match self {
            Axis::Latitude => 90.0,
            Axis::Longitude => 180.0,
        }
    }

    /// True if `value` lies within the axis range (inclusive).
    #[inline]
    pub fn contains(self, value: f64) -> bool {
        (-self.limit()..=self.limit()).contains(&value)
    }

    /// Sign implied by a compass letter, or `None` if the letter belongs to the other axis.
    fn direction_sign(self, direction: char) -> Option<f64> {
        match (self, direction) {
            (Axis::Latitude, 'N') | (Axis::Longitude, 'E') => Some(1.0),
            (Axis::Latitude, 'S') | (Axis::Longitude, 'W') => Some(-1.0),
            _ => None,
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::Latitude => write!(f, "latitude"),
            Axis::Longitude => write!(f, "longitude"),
        }
    }
}

/// Parses a coordinate string, reporting why it was rejected.
///
/// # Example
/// ```
/// use delivery_geo::{try_parse_coordinate, Axis};
///
/// assert_eq!(try_parse_coordinate(" 48.8566s ", Axis::Latitude).unwrap(), -48.8566);
/// assert!(try_parse_coordinate("48.8566E", Axis::Latitude).is_err());
/// ```
pub fn try_parse_coordinate(value: &str, axis: Axis) -> Result<f64> {
    let normalized = value.trim().to_uppercase();

    let captures = COORDINATE_PATTERN
        .captures(&normalized)
        .ok_or_else(|| GeoError::InvalidCoordinateFormat(value.to_string()))?;

    let mut number: f64 = captures[1]
        .parse()
        .map_err(|_| GeoError::InvalidCoordinateFormat(value.to_string()))?;

    if let Some(direction) = captures.get(2).and_then(|m| m.as_str().chars().next()) {
        let sign = axis
            .direction_sign(direction)
            .ok_or(GeoError::InvalidCoordinateDirection { direction, axis })?;
        number = sign * number.abs();
    }

    if !axis.contains(number) {
        return Err(GeoError::CoordinateOutOfRange { value: number, axis });
    }

    Ok(number)
}

/// Parses a coordinate string into signed degrees, `None` if invalid.
#[inline]
pub fn parse_coordinate(value: &str, axis: Axis) -> Option<f64> {
    try_parse_coordinate(value, axis).ok()
}

/// Returns true if `value` parses as a coordinate on `axis`.
#[inline]
pub fn is_valid_coordinate(value: &str, axis: Axis) -> bool {
    parse_coordinate(value, axis).is_some()
}
