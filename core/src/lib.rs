//! Sans-IO core of a client for the OpenCage geocoding API.
//!
//! # Overview
//! Builds `HttpRequest` values and parses `HttpResponse` values without
//! touching the network (host-does-IO pattern). The caller executes the HTTP
//! round-trip, which keeps the core deterministic and testable.
//!
//! # Design
//! - `GeocodeClient` is stateless: endpoint and API key only.
//! - A call is split into `build_*` (URL construction, coordinate formatting)
//!   and `parse_geocode` (status mapping, JSON decoding), so the I/O boundary
//!   is explicit.
//! - The service's status vocabulary is applied twice: once to the HTTP
//!   status and once to the `status.code` embedded in the body.

pub mod client;
pub mod error;
pub mod format;
pub mod http;
pub mod params;
pub mod query;
pub mod status;
pub mod types;

pub use client::{GeocodeClient, DEFAULT_ENDPOINT};
pub use error::{ApiError, BoxError, GeocodeError, Result};
pub use format::{format_coordinate, format_coordinates};
pub use http::{HttpRequest, HttpResponse};
pub use params::GeocodingParams;
pub use status::check_status;
pub use types::{GeocodeResult, Response};
