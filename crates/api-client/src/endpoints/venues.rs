//! Venue endpoints
//!
//! - `GET {base}/{slug}/static`: venue location
//! - `GET {base}/{slug}/dynamic`: delivery specs (order minimum, pricing)

use crate::client::VenueClient;
use crate::error::{ApiError, ApiResult};
use delivery_geo::{parse_venue_location, Coordinate};
use delivery_pricing::{DeliveryPricing, DistanceRange, PriceError};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

/// Venue API interface
#[derive(Clone)]
pub struct VenuesApi {
    client: VenueClient,
}

/// Everything a price estimation needs to know about a venue.
#[derive(Debug, Clone, PartialEq)]
pub struct Venue {
    /// Venue slug the data was fetched for
    pub slug: String,
    /// Venue location
    pub location: Coordinate,
    /// Delivery pricing rules
    pub pricing: DeliveryPricing,
}

/// The two venue documents.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VenueDocument {
    /// `{slug}/static`
    Static,
    /// `{slug}/dynamic`
    Dynamic,
}

impl VenueDocument {
    /// Path segment of the document
    pub fn path(self) -> &'static str {
        match self {
            Self::Static => "static",
            Self::Dynamic => "dynamic",
        }
    }

    /// User-facing description of a failed fetch.
    ///
    /// Error responses show the body's `message` when there is one; transport
    /// and decoding problems show the underlying error.
    pub fn failure_message(self, err: &ApiError) -> String {
        match err {
            ApiError::ApiResponse { message: Some(message), .. } => {
                format!("Failed to fetch {self} data: {message}")
            }
            ApiError::ApiResponse { message: None, .. } => format!("Failed to fetch {self} data"),
            other => format!("Error fetching {self} data: {other}"),
        }
    }

    /// The price error reported when this document could not be fetched
    pub fn upstream_error(self, err: &ApiError) -> PriceError {
        PriceError::upstream(self.failure_message(err))
    }
}

impl fmt::Display for VenueDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

impl VenuesApi {
    /// Create a new venues API interface
    pub(crate) fn new(client: VenueClient) -> Self {
        Self { client }
    }

    /// Fetch the venue location
    ///
    /// GET /{slug}/static
    pub async fn location(&self, slug: &str) -> ApiResult<Coordinate> {
        let response: StaticVenueResponse = self.fetch(slug, VenueDocument::Static).await?;
        Ok(parse_venue_location(&response.venue_raw.location)?)
    }

    /// Fetch the venue delivery pricing
    ///
    /// GET /{slug}/dynamic
    pub async fn pricing(&self, slug: &str) -> ApiResult<DeliveryPricing> {
        let response: DynamicVenueResponse = self.fetch(slug, VenueDocument::Dynamic).await?;
        Ok(response.into_pricing())
    }

    /// Fetch location and pricing for a venue.
    ///
    /// Failures are reported as [`PriceError::UpstreamDataUnavailable`] with
    /// a message naming the document that could not be fetched.
    pub async fn venue(&self, slug: &str) -> Result<Venue, PriceError> {
        let location = self
            .location(slug)
            .await
            .map_err(|e| VenueDocument::Static.upstream_error(&e))?;

        let pricing = self
            .pricing(slug)
            .await
            .map_err(|e| VenueDocument::Dynamic.upstream_error(&e))?;

        debug!(
            slug,
            latitude = location.latitude,
            longitude = location.longitude,
            ranges = pricing.distance_ranges.len(),
            "Venue data fetched"
        );

        Ok(Venue {
            slug: slug.to_string(),
            location,
            pricing,
        })
    }

    async fn fetch<T: serde::de::DeserializeOwned>(
        &self,
        slug: &str,
        document: VenueDocument,
    ) -> ApiResult<T> {
        validate_slug(slug)?;
        self.client.get(&format!("{slug}/{}", document.path())).await
    }
}

/// Reject slugs that would change the request path
fn validate_slug(slug: &str) -> ApiResult<()> {
    if slug.is_empty() {
        return Err(ApiError::InvalidUrl("venue slug cannot be empty".to_string()));
    }

    if !slug
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
    {
        return Err(ApiError::InvalidUrl(format!("invalid venue slug: {slug}")));
    }

    Ok(())
}

/// Body of `GET {slug}/static`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StaticVenueResponse {
    /// Raw venue data
    pub venue_raw: StaticVenueRaw,
}

/// `venue_raw` of the static document
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StaticVenueRaw {
    /// Venue location: a GeoJSON point or a bare `[lng, lat]` pair
    pub location: serde_json::Value,
}

/// Body of `GET {slug}/dynamic`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DynamicVenueResponse {
    /// Raw venue data
    pub venue_raw: DynamicVenueRaw,
}

/// `venue_raw` of the dynamic document
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DynamicVenueRaw {
    /// Delivery specification
    pub delivery_specs: DeliverySpecs,
}

/// Delivery specification of a venue
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeliverySpecs {
    /// Cart value (minor units) from which no surcharge applies
    pub order_minimum_no_surcharge: i64,
    /// Fee rules
    pub delivery_pricing: DeliveryPricingSpec,
}

/// Fee rules of a venue
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeliveryPricingSpec {
    /// Base delivery price (minor units)
    pub base_price: i64,
    /// Distance bands in the order the venue defines them
    pub distance_ranges: Vec<DistanceRange>,
}

impl DynamicVenueResponse {
    /// Flatten into the pricing rules used by the calculator
    pub fn into_pricing(self) -> DeliveryPricing {
        let specs = self.venue_raw.delivery_specs;
        DeliveryPricing::new(
            specs.order_minimum_no_surcharge,
            specs.delivery_pricing.base_price,
            specs.delivery_pricing.distance_ranges,
        )
    }
}
