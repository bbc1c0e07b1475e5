//! Distance command

use crate::output;
use crate::OutputFormat;
use anyhow::{bail, Result};
use delivery_cli::output::format_distance;
use delivery_geo::{haversine_distance_meters, Coordinate};
use serde_json::json;
use std::process::ExitCode;

/// Run the distance command
pub fn run(from: (f64, f64), to: (f64, f64), format: OutputFormat) -> Result<ExitCode> {
    let from = Coordinate::from(from);
    let to = Coordinate::from(to);

    for point in [from, to] {
        if !point.is_valid() {
            bail!("Coordinate ({}, {}) is out of range", point.latitude, point.longitude);
        }
    }

    let meters = haversine_distance_meters(&from, &to);

    match format {
        OutputFormat::Json => {
            output::json(&json!({ "meters": meters, "kilometers": meters / 1000.0 }))?
        }
        OutputFormat::Text => println!("{}", format_distance(meters)),
    }

    Ok(ExitCode::SUCCESS)
}
