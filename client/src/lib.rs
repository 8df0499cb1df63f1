//! Async client for the OpenCage geocoding API.
//!
//! ```no_run
//! # async fn run() -> opencage::Result<()> {
//! use std::time::Duration;
//!
//! let client = opencage::Client::builder("my-api-key")
//!     .timeout(Duration::from_secs(10))
//!     .build()?;
//!
//! let params = opencage::GeocodingParams {
//!     language: Some("de".to_string()),
//!     limit: Some(1),
//!     ..Default::default()
//! };
//! let response = client.geocode("Berlin, Germany", Some(&params)).await?;
//! for result in &response.results {
//!     println!("{} ({}, {})", result.formatted, result.geometry.lat, result.geometry.lng);
//! }
//! # Ok(())
//! # }
//! ```

mod client;

pub use client::{Client, ClientBuilder, API_KEY_ENV, ENDPOINT_ENV, TIMEOUT_ENV};
pub use opencage_core::{
    format_coordinate, types, ApiError, GeocodeError, GeocodeResult, GeocodingParams, Response,
    Result, DEFAULT_ENDPOINT,
};
