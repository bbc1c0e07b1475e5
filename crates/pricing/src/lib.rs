//! Delivery price calculation.
//!
//! Given a venue's pricing rules, its location and the user's input, this crate
//! computes the delivery fee, the small-order surcharge and the resulting
//! [`PriceBreakdown`]. Everything here is synchronous and pure; fetching the
//! pricing rules is the job of `delivery-api-client`.
//!
//! Money is always integer minor units (cents).
//!
//! # Example
//!
//! ```
//! use delivery_geo::Coordinate;
//! use delivery_pricing::{calculate_price, DeliveryPricing, DistanceRange, PriceRequest};
//!
//! let pricing = DeliveryPricing::new(1000, 190, vec![
//!     DistanceRange::new(0, 500, 0, 0),
//!     DistanceRange::new(500, 1000, 100, 0),
//!     DistanceRange::new(1000, 0, 0, 0),
//! ]);
//!
//! let breakdown = calculate_price(&PriceRequest {
//!     cart_value: 7.0,
//!     user_latitude: "60.17094",
//!     user_longitude: "24.93087",
//!     venue: Coordinate::from_lon_lat([24.9384, 60.1699]),
//!     pricing: &pricing,
//! });
//!
//! assert_eq!(breakdown.total_price(), Some(1190));
//! ```

mod breakdown;
mod error;
mod estimate;
pub mod fee;
mod types;

pub use breakdown::PriceBreakdown;
pub use error::{
    PriceError, PriceErrorCode, Result, GENERIC_FAILURE_MESSAGE, INVALID_COORDINATES_MESSAGE,
};
pub use estimate::{
    calculate_price, cart_value_to_minor_units, parse_cart_value, try_calculate_price, PriceRequest,
};
pub use fee::{delivery_fee, small_order_surcharge, total_price, try_delivery_fee};
pub use types::{DeliveryPricing, DistanceRange};
