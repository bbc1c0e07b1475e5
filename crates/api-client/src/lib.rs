//! HTTP client for the venue delivery API
//!
//! Fetches the two documents a price estimation needs:
//!
//! - **static** venue data, holding the venue location (`[lng, lat]`)
//! - **dynamic** venue data, holding the delivery pricing rules
//!
//! Requests are not retried and responses are not cached.
//!
//! # Example
//!
//! ```rust,no_run
//! use delivery_api_client::{ClientConfig, VenueClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = VenueClient::with_config(ClientConfig::from_env()?)?;
//!
//!     let venue = client.venues().venue("home-assignment-venue-helsinki").await?;
//!     println!("{:?} {:?}", venue.location, venue.pricing.base_price);
//!
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]

pub mod client;
pub mod config;
pub mod endpoints;
pub mod error;

pub use client::VenueClient;
pub use config::{ClientConfig, Environment, DEFAULT_VENUES_URL};
pub use endpoints::venues::{
    DynamicVenueResponse, StaticVenueResponse, Venue, VenueDocument, VenuesApi,
};
pub use error::{ApiError, ApiResult};
