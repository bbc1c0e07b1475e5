//! Terminal helpers for the delivery fee tools
//!
//! Provides shared CLI functionality:
//! - Status messages
//! - Money, distance and price breakdown formatting
//! - Progress spinners

#![warn(missing_docs)]

pub mod output;
pub mod progress;
