//! Fee formulas.
//!
//! All amounts are minor units. None of these functions panic. The fee
//! formula reports overflow through [`try_delivery_fee`].

use crate::{DistanceRange, PriceError, Result};

/// Surcharge for carts below the venue's minimum: `max(minimum - cart, 0)`.
///
/// # Example
/// ```
/// use delivery_pricing::small_order_surcharge;
///
/// assert_eq!(small_order_surcharge(1200, 1500), 300);
/// assert_eq!(small_order_surcharge(1500, 1500), 0);
/// ```
#[inline]
pub fn small_order_surcharge(cart_value: i64, minimum_no_surcharge: i64) -> i64 {
    minimum_no_surcharge.saturating_sub(cart_value).max(0)
}

/// Delivery fee for `distance` meters, or `None` if delivery is not possible.
///
/// Ranges are scanned in the given order and the first one containing the
/// distance decides. A match on the open-ended range (`max == 0`) means the
/// venue does not deliver that far; so does a distance no range contains.
///
/// Fee: `base_price + a + round(b * distance / 10)`. A fee that does not fit
/// in `i64` is also `None`; [`try_delivery_fee`] tells the two apart.
///
/// # Example
/// ```
/// use delivery_pricing::{delivery_fee, DistanceRange};
///
/// let ranges = [DistanceRange::new(0, 1000, 50, 2)];
/// assert_eq!(delivery_fee(500.0, 100, &ranges), Some(250));
/// assert_eq!(delivery_fee(2500.0, 100, &ranges), None);
/// ```
pub fn delivery_fee(distance: f64, base_price: i64, ranges: &[DistanceRange]) -> Option<i64> {
    try_delivery_fee(distance, base_price, ranges).ok().flatten()
}

/// Like [`delivery_fee`], but an overflowing fee is an
/// [`PriceError::UnexpectedComputationFailure`] instead of `None`.
pub fn try_delivery_fee(
    distance: f64,
    base_price: i64,
    ranges: &[DistanceRange],
) -> Result<Option<i64>> {
    let Some(range) = matching_range(distance, ranges) else {
        return Ok(None);
    };

    if range.is_open_ended() {
        return Ok(None);
    }

    let variable = distance_component(range.b, distance)?;

    base_price
        .checked_add(range.a)
        .and_then(|fee| fee.checked_add(variable))
        .map(Some)
        .ok_or_else(|| PriceError::unexpected(format!("delivery fee overflows at {distance} m")))
}

/// Sum shown as the total price.
#[inline]
pub fn total_price(cart_value: i64, small_order_surcharge: i64, delivery_fee: i64) -> i64 {
    cart_value
        .saturating_add(small_order_surcharge)
        .saturating_add(delivery_fee)
}

/// First range containing `distance`, in sequence order.
pub fn matching_range(distance: f64, ranges: &[DistanceRange]) -> Option<&DistanceRange> {
    ranges.iter().find(|range| range.contains(distance))
}

// `f64::round` rounds half away from zero.
fn distance_component(b: i64, distance: f64) -> Result<i64> {
    let component = (b as f64 * distance / 10.0).round();

    // i64::MAX is not representable; 2^63 is the first value that does not fit
    if !component.is_finite() || component < i64::MIN as f64 || component >= i64::MAX as f64 {
        return Err(PriceError::unexpected(format!(
            "distance component {component} does not fit the fee"
        )));
    }

    Ok(component as i64)
}
