//! Parse command: validate a single coordinate

use crate::output;
use crate::OutputFormat;
use anyhow::Result;
use delivery_cli::output::Status;
use delivery_geo::{try_parse_coordinate, Axis};
use serde_json::json;
use std::process::ExitCode;

/// Run the parse command
pub fn run(value: &str, axis: Axis, format: OutputFormat) -> Result<ExitCode> {
    let parsed = try_parse_coordinate(value, axis);

    match (format, &parsed) {
        (OutputFormat::Json, Ok(degrees)) => {
            output::json(&json!({ "input": value, "axis": axis, "value": degrees }))?;
        }
        (OutputFormat::Json, Err(e)) => {
            output::json(&json!({
                "input": value,
                "axis": axis,
                "error": e.to_string(),
                "code": e.code() as u32,
            }))?;
        }
        (OutputFormat::Text, Ok(degrees)) => Status::success(&format!("{axis} {degrees}")),
        (OutputFormat::Text, Err(e)) => Status::error(&format!("{value:?}: {e}")),
    }

    Ok(if parsed.is_ok() { ExitCode::SUCCESS } else { ExitCode::FAILURE })
}
