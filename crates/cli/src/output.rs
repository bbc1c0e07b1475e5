//! Terminal output utilities
//!
//! Provides consistent formatting for CLI output.

use delivery_pricing::PriceBreakdown;
use owo_colors::OwoColorize;

/// Heading printed above the message of a failed estimation
pub const ERROR_TITLE: &str = "Oops... Something went wrong";

/// Status message helpers
pub struct Status;

impl Status {
    /// Print a success message
    pub fn success(message: &str) {
        println!("{} {}", "✓".green(), message);
    }

    /// Print an error message
    pub fn error(message: &str) {
        eprintln!("{} {}", "✗".red(), message);
    }

    /// Print a warning message
    pub fn warning(message: &str) {
        eprintln!("{} {}", "⚠".yellow(), message);
    }

    /// Print a header
    pub fn header(message: &str) {
        println!();
        println!("{}", message.bold());
        println!("{}", "─".repeat(message.chars().count()));
    }
}

/// Format an amount of minor units (cents) as euros
pub fn format_cents(cents: i64) -> String {
    format!("{:.2} €", cents as f64 / 100.0)
}

/// Format a distance in meters, rounded to the nearest meter
pub fn format_distance(meters: f64) -> String {
    format!("{:.0} m", meters)
}

/// Label/value rows of a successful breakdown, in display order.
///
/// Returns `None` for an error breakdown.
pub fn breakdown_rows(breakdown: &PriceBreakdown) -> Option<Vec<(&'static str, String)>> {
    let total = breakdown.total_price()?;

    Some(vec![
        ("Cart value", format_cents(breakdown.cart_value)),
        ("Delivery fee", format_cents(breakdown.delivery_fee)),
        ("Delivery distance", format_distance(breakdown.delivery_distance)),
        ("Small order surcharge", format_cents(breakdown.small_order_surcharge)),
        ("Total price", format_cents(total)),
    ])
}

/// Print a breakdown.
///
/// Successful breakdowns go to stdout as an aligned table. Error breakdowns
/// go to stderr under [`ERROR_TITLE`]. Returns `false` for an error breakdown.
pub fn print_breakdown(breakdown: &PriceBreakdown) -> bool {
    let Some(rows) = breakdown_rows(breakdown) else {
        eprintln!("{}", ERROR_TITLE.red().bold());
        eprintln!("{}", breakdown.error_message.as_deref().unwrap_or_default());
        return false;
    };

    Status::header("Price breakdown");
    let width = rows.iter().map(|(label, _)| label.len()).max().unwrap_or(0);
    let last = rows.len() - 1;
    for (i, (label, value)) in rows.iter().enumerate() {
        if i == last {
            println!("{:<width$}  {}", label.bold(), value.bold().green());
        } else {
            println!("{:<width$}  {}", label, value);
        }
    }

    true
}
