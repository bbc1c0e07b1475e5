//! delivery-fee - delivery price estimation from the command line
//!
//! Fetches a venue's location and pricing rules, then prints the cart value,
//! delivery fee, distance, small-order surcharge and total price.

use clap::{Parser, Subcommand, ValueEnum};
use delivery_cli::output::Status;
use delivery_telemetry::TelemetryConfig;
use owo_colors::OwoColorize;
use std::path::PathBuf;
use std::process::ExitCode;

mod commands;
mod output;

use commands::{distance, estimate, parse, quote};

/// Delivery price calculator
#[derive(Parser)]
#[command(name = "delivery-fee")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Output format
    #[arg(short, long, global = true, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Log line format on stderr
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Text)]
    log_format: OutputFormat,

    /// Venue API base URL (overrides DELIVERY_API_URL)
    #[arg(long, global = true)]
    api_url: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

/// How results (and log lines) are written
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text
    Text,
    /// JSON document
    Json,
}

#[derive(Subcommand)]
enum Commands {
    /// Estimate the delivery price for a venue
    Estimate {
        /// Venue slug
        #[arg(long)]
        venue: String,

        /// Cart value in euros, with a dot as the decimal separator
        #[arg(long, allow_hyphen_values = true)]
        cart_value: String,

        /// User latitude, e.g. 60.17094 or 60.17094N
        #[arg(long, allow_hyphen_values = true)]
        lat: String,

        /// User longitude, e.g. 24.93087 or 24.93087E
        #[arg(long, allow_hyphen_values = true)]
        lon: String,
    },

    /// Estimate against a local pricing file instead of the venue API
    Quote {
        /// Pricing JSON: a dynamic venue document or a bare pricing object
        #[arg(long)]
        pricing: PathBuf,

        /// Venue latitude in degrees
        #[arg(long, allow_negative_numbers = true)]
        venue_lat: f64,

        /// Venue longitude in degrees
        #[arg(long, allow_negative_numbers = true)]
        venue_lon: f64,

        /// Cart value in euros, with a dot as the decimal separator
        #[arg(long, allow_hyphen_values = true)]
        cart_value: String,

        /// User latitude
        #[arg(long, allow_hyphen_values = true)]
        lat: String,

        /// User longitude
        #[arg(long, allow_hyphen_values = true)]
        lon: String,
    },

    /// Validate a single coordinate
    Parse {
        /// Coordinate text, e.g. 51.5074N or -0.1278
        #[arg(allow_hyphen_values = true)]
        value: String,

        /// Axis the value belongs to
        #[arg(short, long, value_enum)]
        axis: AxisArg,
    },

    /// Great-circle distance between two points, in meters
    Distance {
        #[arg(allow_negative_numbers = true)]
        lat1: f64,
        #[arg(allow_negative_numbers = true)]
        lon1: f64,
        #[arg(allow_negative_numbers = true)]
        lat2: f64,
        #[arg(allow_negative_numbers = true)]
        lon2: f64,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum AxisArg {
    #[value(alias = "latitude")]
    Lat,
    #[value(alias = "longitude", alias = "lng")]
    Lon,
}

impl From<AxisArg> for delivery_geo::Axis {
    fn from(axis: AxisArg) -> Self {
        match axis {
            AxisArg::Lat => Self::Latitude,
            AxisArg::Lon => Self::Longitude,
        }
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let json_logs = cli.log_format == OutputFormat::Json;
    let telemetry = if cli.verbose {
        delivery_telemetry::init_with_config(TelemetryConfig::verbose().with_json(json_logs))
    } else if json_logs {
        delivery_telemetry::init_with_config(TelemetryConfig::default().with_json(true))
    } else {
        delivery_telemetry::init()
    };
    if let Err(e) = telemetry {
        Status::warning(&e.to_string());
    }

    let format = cli.format;
    let result = match cli.command {
        Commands::Estimate { venue, cart_value, lat, lon } => {
            let input = estimate::Input {
                venue: &venue,
                cart_value: &cart_value,
                latitude: &lat,
                longitude: &lon,
            };
            estimate::run(input, cli.api_url.as_deref(), format).await
        }

        Commands::Quote { pricing, venue_lat, venue_lon, cart_value, lat, lon } => {
            let input = quote::Input {
                pricing_file: &pricing,
                venue_latitude: venue_lat,
                venue_longitude: venue_lon,
                cart_value: &cart_value,
                latitude: &lat,
                longitude: &lon,
            };
            quote::run(input, format)
        }

        Commands::Parse { value, axis } => parse::run(&value, axis.into(), format),

        Commands::Distance { lat1, lon1, lat2, lon2 } => {
            distance::run((lat1, lon1), (lat2, lon2), format)
        }
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{} {:#}", "Error:".red().bold(), e);
            ExitCode::FAILURE
        }
    }
}
