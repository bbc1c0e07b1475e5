//! Venue pricing rules.

use crate::{PriceError, Result};
use serde::{Deserialize, Serialize};

/// One distance band of a venue's delivery pricing.
///
/// `max == 0` marks the open-ended band: from `min` onwards delivery is not
/// possible.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DistanceRange {
    /// Inclusive lower bound in meters
    pub min: u64,
    /// Exclusive upper bound in meters, 0 for the open-ended band
    pub max: u64,
    /// Fixed fee component in minor units
    pub a: i64,
    /// Per-distance coefficient; contributes `round(b * distance / 10)`
    pub b: i64,
    /// Opaque tag from the pricing source, never used in computation
    #[serde(default)]
    pub flag: Option<String>,
}

impl DistanceRange {
    /// Creates a range without a flag.
    pub fn new(min: u64, max: u64, a: i64, b: i64) -> Self {
        Self { min, max, a, b, flag: None }
    }

    /// True for the open-ended "no delivery from here on" band.
    #[inline]
    pub fn is_open_ended(&self) -> bool {
        self.max == 0
    }

    /// True if `distance` falls into this band.
    ///
    /// The open-ended band matches every distance from `min` on.
    #[inline]
    pub fn contains(&self, distance: f64) -> bool {
        distance >= self.min as f64 && (distance < self.max as f64 || self.is_open_ended())
    }
}

/// A venue's delivery pricing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeliveryPricing {
    /// Cart value (minor units) from which no small-order surcharge applies
    pub order_minimum_no_surcharge: i64,
    /// Base delivery price in minor units
    pub base_price: i64,
    /// Distance bands, consulted in this order
    pub distance_ranges: Vec<DistanceRange>,
}

impl DeliveryPricing {
    /// Creates pricing rules.
    pub fn new(
        order_minimum_no_surcharge: i64,
        base_price: i64,
        distance_ranges: Vec<DistanceRange>,
    ) -> Self {
        Self {
            order_minimum_no_surcharge,
            base_price,
            distance_ranges,
        }
    }

    /// The figure reported as "maximum delivery distance": the `min` of the
    /// last range. `None` if there are no ranges.
    pub fn max_delivery_distance(&self) -> Option<u64> {
        self.distance_ranges.last().map(|range| range.min)
    }

    /// Checks that the rules can be priced against at all.
    pub fn validate(&self) -> Result<()> {
        if self.distance_ranges.is_empty() {
            return Err(PriceError::unexpected("pricing has no distance ranges"));
        }

        if self.base_price < 0 {
            return Err(PriceError::unexpected(format!(
                "base price cannot be negative: {}",
                self.base_price
            )));
        }

        if self.order_minimum_no_surcharge < 0 {
            return Err(PriceError::unexpected(format!(
                "order minimum cannot be negative: {}",
                self.order_minimum_no_surcharge
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_range_contains() {
        let range = DistanceRange::new(500, 1000, 100, 0);
        assert!(!range.contains(499.9));
        assert!(range.contains(500.0));
        assert!(range.contains(999.9));
        assert!(!range.contains(1000.0));
    }

    #[test]
    fn test_open_ended_range_contains_everything_from_min() {
        let range = DistanceRange::new(2000, 0, 0, 0);
        assert!(range.is_open_ended());
        assert!(!range.contains(1999.0));
        assert!(range.contains(2000.0));
        assert!(range.contains(1.0e9));
    }

    #[test]
    fn test_deserialize_api_shape() {
        let json = r#"{
            "order_minimum_no_surcharge": 1000,
            "base_price": 190,
            "distance_ranges": [
                {"min": 0, "max": 500, "a": 0, "b": 0, "flag": null},
                {"min": 500, "max": 0, "a": 0, "b": 0, "flag": null}
            ]
        }"#;

        let pricing: DeliveryPricing = serde_json::from_str(json).unwrap();
        assert_eq!(pricing.base_price, 190);
        assert_eq!(pricing.distance_ranges.len(), 2);
        assert_eq!(pricing.max_delivery_distance(), Some(500));
    }

    #[test]
    fn test_flag_is_optional() {
        let range: DistanceRange =
            serde_json::from_str(r#"{"min": 0, "max": 10, "a": 1, "b": 2}"#).unwrap();
        assert_eq!(range, DistanceRange::new(0, 10, 1, 2));
    }

    #[test]
    fn test_validate() {
        let ok = DeliveryPricing::new(1000, 190, vec![DistanceRange::new(0, 0, 0, 0)]);
        assert!(ok.validate().is_ok());

        let empty = DeliveryPricing::new(1000, 190, vec![]);
        assert!(empty.validate().is_err());
        assert_eq!(empty.max_delivery_distance(), None);

        let negative = DeliveryPricing::new(1000, -1, vec![DistanceRange::new(0, 0, 0, 0)]);
        assert!(negative.validate().is_err());
    }
}
