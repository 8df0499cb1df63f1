//! Stateless request builder and response parser for the geocoding API.
//!
//! # Design
//! `GeocodeClient` holds only the endpoint and API key and carries no mutable
//! state between calls, so one value can be shared by any number of callers.
//! A call is split into `build_*`, which produces an `HttpRequest`, and
//! `parse_geocode`, which consumes the matching `HttpResponse`.

use crate::error::Result;
use crate::http::{HttpRequest, HttpResponse};
use crate::params::GeocodingParams;
use crate::query::{build_url, endpoint_url, reverse_query};
use crate::status::check_status;
use crate::types::Response;

/// Base URL of the production service.
pub const DEFAULT_ENDPOINT: &str = "https://api.opencagedata.com/geocode/v1";

#[derive(Clone)]
pub struct GeocodeClient {
    endpoint: String,
    api_key: String,
}

impl GeocodeClient {
    /// Create a client for `endpoint`. The endpoint is validated here so that
    /// a bad base URL fails at construction rather than on the first call.
    /// It must not carry a query string or fragment.
    pub fn new(endpoint: &str, api_key: &str) -> Result<Self> {
        let endpoint = endpoint.trim_end_matches('/').to_string();
        endpoint_url(&endpoint)?;
        Ok(Self {
            endpoint,
            api_key: api_key.to_string(),
        })
    }

    /// Create a client for the production endpoint.
    pub fn production(api_key: &str) -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            api_key: api_key.to_string(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Build the request for a free-text (forward) or `lat,lng` (reverse)
    /// query.
    pub fn build_geocode(
        &self,
        query: &str,
        params: Option<&GeocodingParams>,
    ) -> Result<HttpRequest> {
        let url = build_url(&self.endpoint, &self.api_key, query, params)?;
        Ok(HttpRequest {
            url: url.into(),
            headers: vec![("accept".to_string(), "application/json".to_string())],
        })
    }

    pub fn build_reverse_geocode(
        &self,
        lat: f64,
        lng: f64,
        params: Option<&GeocodingParams>,
    ) -> Result<HttpRequest> {
        self.build_geocode(&reverse_query(lat, lng)?, params)
    }

    /// Check the transport status, decode the body, then check the status
    /// embedded in the body. The body is not looked at unless the transport
    /// status is 2xx.
    pub fn parse_geocode(&self, response: HttpResponse) -> Result<Response> {
        check_status(i64::from(response.status))?;
        let decoded: Response = serde_json::from_str(&response.body)?;
        check_status(decoded.status.code)?;
        Ok(decoded)
    }
}

impl std::fmt::Debug for GeocodeClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeocodeClient")
            .field("endpoint", &self.endpoint)
            .field("api_key", &"<redacted>")
            .finish()
    }
}
