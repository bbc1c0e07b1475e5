//! The price breakdown handed to the display layer.

use crate::{fee, PriceError};
use serde::{Deserialize, Serialize};

/// Result of a price estimation.
///
/// Either fully populated with no `error_message`, or carrying an error
/// message with every numeric field zeroed. A present error message
/// overrides the numbers.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceBreakdown {
    /// Cart value in minor units
    pub cart_value: i64,
    /// Delivery fee in minor units
    pub delivery_fee: i64,
    /// Straight-line delivery distance in meters, unrounded
    pub delivery_distance: f64,
    /// Small-order surcharge in minor units
    pub small_order_surcharge: i64,
    /// Set when the estimation failed
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
}

impl PriceBreakdown {
    /// A successful breakdown.
    pub fn new(
        cart_value: i64,
        delivery_fee: i64,
        delivery_distance: f64,
        small_order_surcharge: i64,
    ) -> Self {
        Self {
            cart_value,
            delivery_fee,
            delivery_distance,
            small_order_surcharge,
            error_message: None,
        }
    }

    /// A failed breakdown with zeroed numbers.
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            error_message: Some(message.into()),
            ..Self::default()
        }
    }

    /// A failed breakdown carrying the user-facing message of `err`.
    pub fn from_error(err: &PriceError) -> Self {
        Self::error(err.user_message())
    }

    /// True if this breakdown carries an error message.
    #[inline]
    pub fn is_error(&self) -> bool {
        self.error_message.as_deref().is_some_and(|msg| !msg.is_empty())
    }

    /// Cart value + surcharge + delivery fee, `None` for an error breakdown.
    pub fn total_price(&self) -> Option<i64> {
        if self.is_error() {
            return None;
        }
        Some(fee::total_price(self.cart_value, self.small_order_surcharge, self.delivery_fee))
    }
}

impl From<PriceError> for PriceBreakdown {
    fn from(err: PriceError) -> Self {
        Self::from_error(&err)
    }
}
