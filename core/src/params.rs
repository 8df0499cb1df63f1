//! Per-request options for the geocoding endpoint.

use serde::{Deserialize, Serialize};

/// Optional request parameters.
///
/// Every field has an explicit "absent" state: `false`, `None`, an empty
/// string, `Some(0)` for `limit`, or an empty list. Absent fields are left out
/// of the query string entirely.
///
/// `bounds`, `country_code` and `proximity` only affect forward geocoding.
/// They are sent as-is for reverse lookups; the service ignores them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeocodingParams {
    /// Abbreviate and shorten the formatted string.
    pub abbreviate: bool,

    /// Leave names of points of interest out of the formatted string.
    pub address_only: bool,

    /// Echo the request parameters back in the response.
    pub add_request: bool,

    /// Restrict results to a bounding box, `min_lng,min_lat,max_lng,max_lat`.
    pub bounds: Vec<f64>,

    /// One or more ISO 3166-1 alpha-2 codes, comma separated.
    pub country_code: Option<String>,

    /// Wrap the JSON body in a call to this function. The wrapped body is
    /// not JSON, so `parse_geocode` rejects it with a decode error.
    pub jsonp: Option<String>,

    /// IETF language tag, or `native`.
    pub language: Option<String>,

    /// Maximum number of results. The service defaults to 10 and caps at 100.
    pub limit: Option<u32>,

    pub no_annotations: bool,

    pub no_dedupe: bool,

    /// Ask the service not to log the query contents.
    pub no_record: bool,

    pub pretty: bool,

    /// Bias results towards this `lat,lng`.
    pub proximity: Vec<f64>,

    /// Look for the nearest road instead of an address.
    pub road_info: bool,
}
