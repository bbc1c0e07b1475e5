//! CLI command implementations

pub mod distance;
pub mod estimate;
pub mod parse;
pub mod quote;
