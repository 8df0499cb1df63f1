//! Request URL construction.

use url::Url;

use crate::error::GeocodeError;
use crate::format::{format_coordinate, format_coordinates};
use crate::params::GeocodingParams;

/// Build `{endpoint}/json?q=..&key=..` plus every present optional parameter.
///
/// Values are form-urlencoded by `url`, so spaces become `+` and commas in
/// coordinate lists become `%2C`.
pub fn build_url(
    endpoint: &str,
    api_key: &str,
    query: &str,
    params: Option<&GeocodingParams>,
) -> Result<Url, GeocodeError> {
    let optional = match params {
        Some(p) => optional_pairs(p)?,
        None => Vec::new(),
    };

    let mut url = endpoint_url(endpoint)?;
    url.path_segments_mut()
        .map_err(|()| GeocodeError::Config(format!("endpoint {endpoint:?} cannot take a path")))?
        .pop_if_empty()
        .push("json");
    url.query_pairs_mut()
        .append_pair("q", query)
        .append_pair("key", api_key)
        .extend_pairs(optional);
    Ok(url)
}

/// Parse a base URL. The request query is built from scratch, so an endpoint
/// that already carries a query string or fragment is rejected.
pub fn endpoint_url(endpoint: &str) -> Result<Url, GeocodeError> {
    let url = Url::parse(endpoint)?;
    if url.cannot_be_a_base() || url.query().is_some() || url.fragment().is_some() {
        return Err(GeocodeError::Config(format!(
            "endpoint must be a plain base URL without query or fragment, got {endpoint:?}"
        )));
    }
    Ok(url)
}

/// The query text the service expects for a reverse lookup: `lat,lng`.
pub fn reverse_query(lat: f64, lng: f64) -> Result<String, GeocodeError> {
    Ok(format!("{},{}", format_coordinate(lat)?, format_coordinate(lng)?))
}

/// Key/value pairs for the optional parameters that are present, in a fixed
/// order.
fn optional_pairs(p: &GeocodingParams) -> Result<Vec<(&'static str, String)>, GeocodeError> {
    let mut pairs = Vec::new();

    let flags = [
        ("abbrv", p.abbreviate),
        ("address_only", p.address_only),
        ("add_request", p.add_request),
        ("no_annotations", p.no_annotations),
        ("no_dedupe", p.no_dedupe),
        ("no_record", p.no_record),
        ("pretty", p.pretty),
        ("roadinfo", p.road_info),
    ];
    for (key, enabled) in flags {
        if enabled {
            pairs.push((key, "1".to_string()));
        }
    }

    let strings = [
        ("jsonp", &p.jsonp),
        ("language", &p.language),
        ("countrycode", &p.country_code),
    ];
    for (key, value) in strings {
        if let Some(v) = value.as_deref().filter(|v| !v.is_empty()) {
            pairs.push((key, v.to_string()));
        }
    }

    if let Some(limit) = p.limit.filter(|n| *n > 0) {
        pairs.push(("limit", limit.to_string()));
    }

    if !p.bounds.is_empty() {
        pairs.push(("bounds", format_coordinates(&p.bounds)?));
    }
    if !p.proximity.is_empty() {
        pairs.push(("proximity", format_coordinates(&p.proximity)?));
    }

    Ok(pairs)
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    const ENDPOINT: &str = "https://api.opencagedata.com/geocode/v1";

    fn query_map(url: &Url) -> HashMap<String, String> {
        url.query_pairs().into_owned().collect()
    }

    #[test]
    fn required_parameters_only() {
        let url = build_url(ENDPOINT, "my-api-key", "Berlin, Germany", None).unwrap();
        assert_eq!(
            url.as_str(),
            "https://api.opencagedata.com/geocode/v1/json?q=Berlin%2C+Germany&key=my-api-key"
        );
    }

    #[test]
    fn default_params_add_nothing() {
        let with_default =
            build_url(ENDPOINT, "k", "Berlin", Some(&GeocodingParams::default())).unwrap();
        let without = build_url(ENDPOINT, "k", "Berlin", None).unwrap();
        assert_eq!(with_default, without);
    }

    #[test]
    fn forward_scenario() {
        let params = GeocodingParams {
            road_info: true,
            bounds: vec![1.0, -1.0],
            language: Some("de".to_string()),
            ..Default::default()
        };
        let url = build_url(ENDPOINT, "k", "Berlin, Germany", Some(&params)).unwrap();
        let q = query_map(&url);
        assert_eq!(q["roadinfo"], "1");
        assert_eq!(q["bounds"], "1.0000000,-1.0000000");
        assert_eq!(q["language"], "de");
        assert_eq!(q.len(), 5);
        assert!(url.as_str().contains("bounds=1.0000000%2C-1.0000000"));
    }

    #[test]
    fn empty_and_zero_values_are_absent() {
        let params = GeocodingParams {
            jsonp: Some(String::new()),
            language: Some(String::new()),
            country_code: Some(String::new()),
            limit: Some(0),
            ..Default::default()
        };
        let url = build_url(ENDPOINT, "k", "x", Some(&params)).unwrap();
        let q = query_map(&url);
        assert_eq!(q.keys().count(), 2, "{url}");
    }

    #[test]
    fn values_are_percent_encoded() {
        let params = GeocodingParams {
            jsonp: Some("cb&x=1".to_string()),
            ..Default::default()
        };
        let url = build_url(ENDPOINT, "k", "Straße 1/2", Some(&params)).unwrap();
        assert!(url.as_str().contains("jsonp=cb%26x%3D1"), "{url}");
        assert!(url.as_str().contains("q=Stra%C3%9Fe+1%2F2"), "{url}");
        assert_eq!(query_map(&url)["q"], "Straße 1/2");
    }

    #[test]
    fn limit_is_decimal() {
        let params = GeocodingParams {
            limit: Some(100),
            ..Default::default()
        };
        let url = build_url(ENDPOINT, "k", "x", Some(&params)).unwrap();
        assert_eq!(query_map(&url)["limit"], "100");
    }

    #[test]
    fn non_finite_coordinate_fails_fast() {
        let params = GeocodingParams {
            proximity: vec![f64::NAN, 1.0],
            ..Default::default()
        };
        let err = build_url(ENDPOINT, "k", "x", Some(&params)).unwrap_err();
        assert!(matches!(err, GeocodeError::NonFiniteCoordinate(_)));
    }

    #[test]
    fn invalid_endpoint_is_rejected() {
        let err = build_url("not a url", "k", "x", None).unwrap_err();
        assert!(matches!(err, GeocodeError::InvalidUrl(_)));
    }

    #[test]
    fn endpoint_with_query_or_fragment_is_rejected() {
        for endpoint in ["http://h/api?x=1", "http://h/api#top", "mailto:geo@example.com"] {
            let err = build_url(endpoint, "k", "x", None).unwrap_err();
            assert!(matches!(err, GeocodeError::Config(_)), "{endpoint}: {err:?}");
        }
    }

    #[test]
    fn json_is_appended_as_a_path_segment() {
        let url = build_url("http://localhost:3000", "k", "x", None).unwrap();
        assert_eq!(url.path(), "/json");
        let url = build_url("http://localhost:3000/api/v1/", "k", "x", None).unwrap();
        assert_eq!(url.path(), "/api/v1/json");
    }

    #[test]
    fn reverse_query_uses_fixed_precision() {
        assert_eq!(
            reverse_query(52.387783, 9.7334394).unwrap(),
            "52.3877830,9.7334394"
        );
        assert!(reverse_query(f64::INFINITY, 0.0).is_err());
    }
}
