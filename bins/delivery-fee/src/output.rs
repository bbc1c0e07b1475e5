//! Rendering of command results in the selected output format

use crate::OutputFormat;
use anyhow::Result;
use delivery_pricing::PriceBreakdown;
use serde::Serialize;
use std::process::ExitCode;

/// JSON shape of a breakdown: the breakdown fields plus the derived total
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct BreakdownOutput<'a> {
    #[serde(flatten)]
    breakdown: &'a PriceBreakdown,
    #[serde(skip_serializing_if = "Option::is_none")]
    total_price: Option<i64>,
}

/// Print a breakdown; an error breakdown yields a failing exit code
pub fn breakdown(breakdown: &PriceBreakdown, format: OutputFormat) -> Result<ExitCode> {
    let ok = match format {
        OutputFormat::Json => {
            let doc = BreakdownOutput {
                breakdown,
                total_price: breakdown.total_price(),
            };
            println!("{}", serde_json::to_string_pretty(&doc)?);
            !breakdown.is_error()
        }
        OutputFormat::Text => delivery_cli::output::print_breakdown(breakdown),
    };

    Ok(if ok { ExitCode::SUCCESS } else { ExitCode::FAILURE })
}

/// Print any serializable value as pretty JSON
pub fn json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
