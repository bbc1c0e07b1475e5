//! Price estimation: user input + venue data -> [`PriceBreakdown`].

use crate::{fee, DeliveryPricing, PriceBreakdown, PriceError, Result};
use delivery_geo::{haversine_distance_meters, Coordinate};
use tracing::debug;

/// Largest cart value (major units) that still converts exactly to minor units.
const MAX_CART_VALUE: f64 = 90_071_992_547_409.0;

/// Everything needed to estimate a price for one request.
#[derive(Debug, Clone, Copy)]
pub struct PriceRequest<'a> {
    /// Cart value in major units (e.g. euros)
    pub cart_value: f64,
    /// User latitude as typed, e.g. `"60.17094"` or `"60.17094N"`
    pub user_latitude: &'a str,
    /// User longitude as typed
    pub user_longitude: &'a str,
    /// Venue location
    pub venue: Coordinate,
    /// Venue pricing rules
    pub pricing: &'a DeliveryPricing,
}

/// Estimates a price, always returning a breakdown.
///
/// Failures of any kind become an error breakdown with zeroed numbers.
pub fn calculate_price(request: &PriceRequest<'_>) -> PriceBreakdown {
    match try_calculate_price(request) {
        Ok(breakdown) => breakdown,
        Err(err) => {
            debug!(code = ?err.code(), error = %err, "price estimation failed");
            PriceBreakdown::from_error(&err)
        }
    }
}

/// Estimates a price, reporting the failure kind.
pub fn try_calculate_price(request: &PriceRequest<'_>) -> Result<PriceBreakdown> {
    let cart_value = cart_value_to_minor_units(request.cart_value)?;

    let user = Coordinate::parse(request.user_latitude, request.user_longitude)
        .map_err(PriceError::InvalidCoordinates)?;

    let pricing = request.pricing;
    pricing.validate()?;

    let small_order_surcharge =
        fee::small_order_surcharge(cart_value, pricing.order_minimum_no_surcharge);

    let distance = haversine_distance_meters(&user, &request.venue);
    if !distance.is_finite() {
        return Err(PriceError::unexpected(format!("distance is not finite: {distance}")));
    }

    let priced = fee::try_delivery_fee(distance, pricing.base_price, &pricing.distance_ranges)?;
    let Some(delivery_fee) = priced else {
        let max_distance = pricing
            .max_delivery_distance()
            .ok_or_else(|| PriceError::unexpected("pricing has no distance ranges"))?;
        return Err(PriceError::DeliveryUnreachable { distance, max_distance });
    };

    let total = cart_value
        .checked_add(small_order_surcharge)
        .and_then(|sum| sum.checked_add(delivery_fee))
        .ok_or_else(|| PriceError::unexpected("total price overflows"))?;

    debug!(
        cart_value,
        delivery_fee,
        distance_m = distance,
        small_order_surcharge,
        total,
        "price estimated"
    );

    Ok(PriceBreakdown::new(cart_value, delivery_fee, distance, small_order_surcharge))
}

/// Converts a major-unit amount to minor units, rounding to the nearest cent.
///
/// Negative and non-finite amounts are rejected.
pub fn cart_value_to_minor_units(cart_value: f64) -> Result<i64> {
    if !cart_value.is_finite() {
        return Err(PriceError::InvalidCartValue(
            "Please enter a valid number. Use a dot (.) as the decimal separator".to_string(),
        ));
    }
    if cart_value < 0.0 {
        return Err(PriceError::InvalidCartValue("Cart value must be at least 0".to_string()));
    }
    if cart_value > MAX_CART_VALUE {
        return Err(PriceError::InvalidCartValue(format!("Cart value is too large: {cart_value}")));
    }

    Ok((cart_value * 100.0).round() as i64)
}

/// Parses a user-entered cart value (major units, `.` as decimal separator).
///
/// # Example
/// ```
/// use delivery_pricing::parse_cart_value;
///
/// assert_eq!(parse_cart_value(" 7.5 ").unwrap(), 7.5);
/// assert!(parse_cart_value("7,5").is_err());
/// assert!(parse_cart_value("-1").is_err());
/// ```
pub fn parse_cart_value(input: &str) -> Result<f64> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(PriceError::InvalidCartValue("Cart value is required".to_string()));
    }

    let value: f64 = trimmed.parse().map_err(|_| {
        PriceError::InvalidCartValue(
            "Please enter a valid number. Use a dot (.) as the decimal separator".to_string(),
        )
    })?;

    cart_value_to_minor_units(value)?;
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        DistanceRange, PriceErrorCode, GENERIC_FAILURE_MESSAGE, INVALID_COORDINATES_MESSAGE,
    };

    const HELSINKI_VENUE: [f64; 2] = [24.9384, 60.1699];

    fn helsinki_pricing() -> DeliveryPricing {
        DeliveryPricing::new(
            1000,
            190,
            vec![
                DistanceRange::new(0, 500, 0, 0),
                DistanceRange::new(500, 1000, 100, 0),
                DistanceRange::new(1000, 1500, 200, 0),
                DistanceRange::new(1500, 2000, 200, 1),
                DistanceRange::new(2000, 0, 0, 0),
            ],
        )
    }

    fn request<'a>(
        cart_value: f64,
        lat: &'a str,
        lon: &'a str,
        pricing: &'a DeliveryPricing,
    ) -> PriceRequest<'a> {
        PriceRequest {
            cart_value,
            user_latitude: lat,
            user_longitude: lon,
            venue: Coordinate::from_lon_lat(HELSINKI_VENUE),
            pricing,
        }
    }

    #[test]
    fn test_helsinki_end_to_end() {
        let pricing = helsinki_pricing();
        let breakdown = calculate_price(&request(7.0, "60.17094", "24.93087", &pricing));

        assert_eq!(breakdown.error_message, None);
        assert_eq!(breakdown.cart_value, 700);
        assert_eq!(breakdown.small_order_surcharge, 300);
        assert_eq!(breakdown.delivery_fee, 190);
        assert!((breakdown.delivery_distance - 432.25).abs() < 1.0);
        assert_eq!(breakdown.total_price(), Some(1190));
        assert_eq!(format!("{:.2}", breakdown.total_price().unwrap() as f64 / 100.0), "11.90");
    }

    #[test]
    fn test_direction_suffixes_give_same_result() {
        let pricing = helsinki_pricing();
        let plain = calculate_price(&request(7.0, "60.17094", "24.93087", &pricing));
        let suffixed = calculate_price(&request(7.0, "60.17094n", " 24.93087E", &pricing));
        assert_eq!(plain, suffixed);
    }

    #[test]
    fn test_invalid_coordinates() {
        let pricing = helsinki_pricing();
        let breakdown = calculate_price(&request(7.0, "60.17094E", "24.93087", &pricing));

        assert_eq!(breakdown.error_message.as_deref(), Some(INVALID_COORDINATES_MESSAGE));
        assert_eq!(breakdown, PriceBreakdown::error(INVALID_COORDINATES_MESSAGE));
    }

    #[test]
    fn test_unreachable_reports_distance_and_last_range_min() {
        let pricing = helsinki_pricing();
        let err = try_calculate_price(&request(7.0, "10.0000", "20.0000", &pricing)).unwrap_err();
        assert_eq!(err.code(), PriceErrorCode::DeliveryUnreachable);

        let breakdown = calculate_price(&request(7.0, "10.0000", "20.0000", &pricing));
        let message = breakdown.error_message.as_deref().unwrap();
        assert!(message.contains("5593710 m"), "{message}");
        assert!(message.contains("maximum delivery distance of 2000 m"), "{message}");
        assert_eq!(breakdown.delivery_fee, 0);
        assert_eq!(breakdown.delivery_distance, 0.0);
    }

    #[test]
    fn test_unreachable_without_sentinel() {
        let pricing = DeliveryPricing::new(1000, 100, vec![
            DistanceRange::new(0, 100, 0, 0),
            DistanceRange::new(100, 200, 0, 0),
        ]);
        let err = try_calculate_price(&request(7.0, "60.17094", "24.93087", &pricing)).unwrap_err();
        match err {
            PriceError::DeliveryUnreachable { max_distance, .. } => assert_eq!(max_distance, 100),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_empty_ranges_is_generic_failure() {
        let pricing = DeliveryPricing::new(1000, 190, vec![]);
        let breakdown = calculate_price(&request(7.0, "60.17094", "24.93087", &pricing));
        assert_eq!(breakdown.error_message.as_deref(), Some(GENERIC_FAILURE_MESSAGE));
        assert_eq!(breakdown.total_price(), None);
    }

    #[test]
    fn test_overflowing_total_is_generic_failure() {
        let pricing = DeliveryPricing::new(0, i64::MAX, vec![DistanceRange::new(0, 10_000, 0, 0)]);
        let err = try_calculate_price(&request(7.0, "60.17094", "24.93087", &pricing)).unwrap_err();
        assert_eq!(err.code(), PriceErrorCode::UnexpectedComputationFailure);
    }

    #[test]
    fn test_overflowing_fee_is_generic_failure() {
        let pricing = DeliveryPricing::new(0, i64::MAX, vec![DistanceRange::new(0, 10_000, 1, 0)]);
        let breakdown = calculate_price(&request(0.0, "60.17094", "24.93087", &pricing));

        assert_eq!(breakdown, PriceBreakdown::error(GENERIC_FAILURE_MESSAGE));
        assert_eq!(breakdown.total_price(), None);
    }

    #[test]
    fn test_overflowing_distance_term_is_generic_failure() {
        let pricing = DeliveryPricing::new(0, 0, vec![DistanceRange::new(0, 10_000, 0, i64::MAX)]);
        let err = try_calculate_price(&request(0.0, "60.17094", "24.93087", &pricing)).unwrap_err();
        assert_eq!(err.code(), PriceErrorCode::UnexpectedComputationFailure);
    }

    #[test]
    fn test_cart_value_conversion() {
        assert_eq!(cart_value_to_minor_units(7.0).unwrap(), 700);
        assert_eq!(cart_value_to_minor_units(10.1).unwrap(), 1010);
        assert_eq!(cart_value_to_minor_units(0.0).unwrap(), 0);
        assert!(cart_value_to_minor_units(-1.0).is_err());
        assert!(cart_value_to_minor_units(f64::NAN).is_err());
        assert!(cart_value_to_minor_units(f64::INFINITY).is_err());
    }

    #[test]
    fn test_negative_cart_value_breakdown() {
        let pricing = helsinki_pricing();
        let breakdown = calculate_price(&request(-1.0, "60.17094", "24.93087", &pricing));
        assert_eq!(breakdown.error_message.as_deref(), Some("Cart value must be at least 0"));
    }

    #[test]
    fn test_parse_cart_value() {
        assert_eq!(parse_cart_value("7").unwrap(), 7.0);
        assert_eq!(parse_cart_value("10.50").unwrap(), 10.5);

        let err = parse_cart_value("-1").unwrap_err();
        assert_eq!(err.to_string(), "Cart value must be at least 0");

        let err = parse_cart_value("-1aa").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Please enter a valid number. Use a dot (.) as the decimal separator"
        );

        let err = parse_cart_value("inf").unwrap_err();
        assert_eq!(err.code(), PriceErrorCode::InvalidCartValue);

        assert_eq!(parse_cart_value("  ").unwrap_err().to_string(), "Cart value is required");
    }
}
