//! Quote command: price a delivery against a local pricing file

use crate::output;
use crate::OutputFormat;
use anyhow::{bail, Context, Result};
use delivery_api_client::DynamicVenueResponse;
use delivery_geo::Coordinate;
use delivery_pricing::{
    calculate_price, parse_cart_value, DeliveryPricing, PriceBreakdown, PriceRequest,
};
use serde_json::Value;
use std::path::Path;
use std::process::ExitCode;

/// Input of the quote command
pub struct Input<'a> {
    pub pricing_file: &'a Path,
    pub venue_latitude: f64,
    pub venue_longitude: f64,
    pub cart_value: &'a str,
    pub latitude: &'a str,
    pub longitude: &'a str,
}

/// Run the quote command
pub fn run(input: Input<'_>, format: OutputFormat) -> Result<ExitCode> {
    let contents = std::fs::read_to_string(input.pricing_file)
        .with_context(|| format!("Failed to read {}", input.pricing_file.display()))?;
    let pricing = load_pricing(&contents)
        .with_context(|| format!("Invalid pricing file {}", input.pricing_file.display()))?;

    let venue = Coordinate::new(input.venue_latitude, input.venue_longitude);
    if !venue.is_valid() {
        bail!(
            "Venue location ({}, {}) is out of range",
            input.venue_latitude,
            input.venue_longitude
        );
    }

    let breakdown = match parse_cart_value(input.cart_value) {
        Ok(cart_value) => calculate_price(&PriceRequest {
            cart_value,
            user_latitude: input.latitude,
            user_longitude: input.longitude,
            venue,
            pricing: &pricing,
        }),
        Err(e) => PriceBreakdown::from_error(&e),
    };

    output::breakdown(&breakdown, format)
}

/// Read pricing rules from either a dynamic venue document or a bare pricing object
fn load_pricing(contents: &str) -> Result<DeliveryPricing> {
    let value: Value = serde_json::from_str(contents)?;

    if value.get("venue_raw").is_some() {
        let response: DynamicVenueResponse = serde_json::from_value(value)?;
        Ok(response.into_pricing())
    } else {
        Ok(serde_json::from_value(value)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_bare_pricing() {
        let json = r#"{
            "order_minimum_no_surcharge": 1000,
            "base_price": 190,
            "distance_ranges": [
                {"min": 0, "max": 500, "a": 0, "b": 0},
                {"min": 500, "max": 0, "a": 0, "b": 0}
            ]
        }"#;

        let pricing = load_pricing(json).unwrap();
        assert_eq!(pricing.base_price, 190);
        assert_eq!(pricing.distance_ranges.len(), 2);
    }

    #[test]
    fn test_load_dynamic_document() {
        let json = r#"{
            "venue_raw": {
                "delivery_specs": {
                    "order_minimum_no_surcharge": 1500,
                    "delivery_pricing": {
                        "base_price": 100,
                        "distance_ranges": [{"min": 0, "max": 0, "a": 0, "b": 0, "flag": null}]
                    }
                }
            }
        }"#;

        let pricing = load_pricing(json).unwrap();
        assert_eq!(pricing.order_minimum_no_surcharge, 1500);
        assert_eq!(pricing.base_price, 100);
    }

    #[test]
    fn test_load_rejects_garbage() {
        assert!(load_pricing("not json").is_err());
        assert!(load_pricing(r#"{"base_price": 1}"#).is_err());
    }
}
