//! # CarbonAtlas Geocoder
//!
//! Client library for forward geocoding: it sends street addresses to the
//! third-party geocoding provider and normalizes the response into a flat
//! record of address, city, state, zip code, and coordinates.
//!
//! ## Module Organization
//!
//! - `states`: U.S. state name/abbreviation resolution
//! - `client`: the provider HTTP client, single and bulk entry points
//! - `record`: normalized output record and outcome types
//! - `response`: provider wire format and field extraction
//!
//! ## Example
//!
//! ```no_run
//! use carbonatlas_geocoder::{GeocodeQuery, GeocodingClient};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = GeocodingClient::new(std::env::var("GEOCODING_API_KEY")?)?;
//!
//! let outcome = client.geocode("123 Main St", "Anytown", "CA").await?;
//! println!("{:?}", outcome.record());
//!
//! let batch = vec![
//!     GeocodeQuery::new("123 Main St", "Anytown", "California"),
//!     GeocodeQuery::new("456 Oak Ave", "Springfield", "IL"),
//! ];
//! let outcomes = client.bulk_geocode(&batch).await?;
//! assert_eq!(outcomes.len(), batch.len());
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod record;
mod response;
pub mod states;

pub use client::{GeocodeError, GeocodingClient, DEFAULT_ENDPOINT, REQUEST_TIMEOUT};
pub use record::{GeocodeOutcome, GeocodeQuery, GeocodeRecord};
pub use states::{resolve_state, InvalidStateError};
