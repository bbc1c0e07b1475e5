//! Estimate command: price a delivery from a live venue

use crate::output;
use crate::OutputFormat;
use anyhow::{Context, Result};
use delivery_api_client::{ClientConfig, VenueClient};
use delivery_cli::progress;
use delivery_geo::Coordinate;
use delivery_pricing::{calculate_price, parse_cart_value, PriceBreakdown, PriceError, PriceRequest};
use delivery_telemetry::Timer;
use std::process::ExitCode;
use tracing::debug;

/// Raw user input of the estimate form
pub struct Input<'a> {
    pub venue: &'a str,
    pub cart_value: &'a str,
    pub latitude: &'a str,
    pub longitude: &'a str,
}

/// Run the estimate command
pub async fn run(
    input: Input<'_>,
    api_url: Option<&str>,
    format: OutputFormat,
) -> Result<ExitCode> {
    // Reject bad form input before touching the network.
    let cart_value = match parse_cart_value(input.cart_value) {
        Ok(value) => value,
        Err(e) => return output::breakdown(&PriceBreakdown::from_error(&e), format),
    };
    if let Err(e) = Coordinate::parse(input.latitude, input.longitude) {
        let err = PriceError::InvalidCoordinates(e);
        return output::breakdown(&PriceBreakdown::from_error(&err), format);
    }

    let mut config = ClientConfig::from_env().context("Invalid venue API configuration")?;
    if let Some(url) = api_url {
        config = config.with_base_url(url);
    }
    let client = VenueClient::with_config(config)?;
    debug!(base_url = client.base_url(), venue = input.venue, "Fetching venue");

    let spinner =
        (format == OutputFormat::Text).then(|| progress::spinner("Fetching venue data..."));
    let timer = Timer::start("fetch_venue");
    let venue = client.venues().venue(input.venue).await;
    timer.stop();
    if let Some(pb) = &spinner {
        progress::finish(pb);
    }

    let breakdown = match venue {
        Ok(venue) => calculate_price(&PriceRequest {
            cart_value,
            user_latitude: input.latitude,
            user_longitude: input.longitude,
            venue: venue.location,
            pricing: &venue.pricing,
        }),
        Err(e) => PriceBreakdown::from_error(&e),
    };

    output::breakdown(&breakdown, format)
}
