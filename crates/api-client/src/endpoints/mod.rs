//! Endpoint-specific API implementations
//!
//! | Module | Endpoint | Description |
//! |--------|----------|-------------|
//! | `venues` | `{slug}/static`, `{slug}/dynamic` | Venue location and delivery pricing |

pub mod venues;

pub use venues::VenuesApi;
