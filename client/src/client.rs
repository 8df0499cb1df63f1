//! Async host for the sans-IO core.
//!
//! # Design
//! `Client` pairs a `GeocodeClient` (URL building, status mapping, decoding)
//! with one pooled `reqwest::Client`. Both are immutable after construction,
//! so a `Client` can be cloned or shared across tasks freely. Cancellation is
//! future-based: dropping a call aborts the in-flight request, and the
//! `*_until` / `*_with_deadline` variants of both lookups turn an external
//! signal or a deadline into a typed error.

use std::future::Future;
use std::time::Duration;

use opencage_core::{
    check_status, GeocodeClient, GeocodeError, GeocodingParams, HttpRequest, HttpResponse,
    Response, Result, DEFAULT_ENDPOINT,
};
use tracing::{debug, warn};

pub const API_KEY_ENV: &str = "OPENCAGE_API_KEY";
pub const ENDPOINT_ENV: &str = "OPENCAGE_ENDPOINT";
pub const TIMEOUT_ENV: &str = "OPENCAGE_TIMEOUT_SECS";

const DEFAULT_USER_AGENT: &str = concat!("opencage-rs/", env!("CARGO_PKG_VERSION"));

/// Client for the geocoding API.
#[derive(Debug, Clone)]
pub struct Client {
    core: GeocodeClient,
    http: reqwest::Client,
}

/// Construction-time options for `Client`.
#[derive(Clone)]
pub struct ClientBuilder {
    api_key: String,
    endpoint: String,
    timeout: Option<Duration>,
    user_agent: String,
}

impl ClientBuilder {
    fn new(api_key: &str) -> Self {
        Self {
            api_key: api_key.to_string(),
            endpoint: DEFAULT_ENDPOINT.to_string(),
            timeout: None,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }

    /// Override the base URL; `/json` is appended to it.
    pub fn endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// Total time allowed for each request, connect to last body byte.
    /// Unset means no timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    pub fn build(self) -> Result<Client> {
        let core = GeocodeClient::new(&self.endpoint, &self.api_key)?;

        let mut http = reqwest::Client::builder().user_agent(self.user_agent);
        if let Some(timeout) = self.timeout {
            http = http.timeout(timeout);
        }
        let http = http.build().map_err(transport)?;

        Ok(Client { core, http })
    }
}

impl Client {
    /// Client for the production endpoint with default transport settings.
    pub fn new(api_key: &str) -> Result<Self> {
        Self::builder(api_key).build()
    }

    pub fn builder(api_key: &str) -> ClientBuilder {
        ClientBuilder::new(api_key)
    }

    /// Configure from `OPENCAGE_API_KEY` (required), `OPENCAGE_ENDPOINT` and
    /// `OPENCAGE_TIMEOUT_SECS`.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let api_key = lookup(API_KEY_ENV)
            .filter(|k| !k.is_empty())
            .ok_or_else(|| GeocodeError::Config(format!("{API_KEY_ENV} is not set")))?;

        let mut builder = Self::builder(&api_key);
        if let Some(endpoint) = lookup(ENDPOINT_ENV) {
            builder = builder.endpoint(endpoint);
        }
        if let Some(raw) = lookup(TIMEOUT_ENV) {
            let secs: u64 = raw.trim().parse().map_err(|_| {
                GeocodeError::Config(format!("{TIMEOUT_ENV} must be a whole number of seconds, got {raw:?}"))
            })?;
            if secs == 0 {
                return Err(GeocodeError::Config(format!(
                    "{TIMEOUT_ENV} must be at least 1 second; unset it for no timeout"
                )));
            }
            builder = builder.timeout(Duration::from_secs(secs));
        }
        builder.build()
    }

    pub fn endpoint(&self) -> &str {
        self.core.endpoint()
    }

    /// Forward geocode free text, or reverse geocode a `lat,lng` string.
    pub async fn geocode(
        &self,
        query: &str,
        params: Option<&GeocodingParams>,
    ) -> Result<Response> {
        let request = self.core.build_geocode(query, params)?;
        self.execute(request).await
    }

    pub async fn reverse_geocode(
        &self,
        lat: f64,
        lng: f64,
        params: Option<&GeocodingParams>,
    ) -> Result<Response> {
        let request = self.core.build_reverse_geocode(lat, lng, params)?;
        self.execute(request).await
    }

    /// Like `geocode`, but gives up with `Cancelled` as soon as `cancel`
    /// resolves. The in-flight request is dropped.
    pub async fn geocode_until<F>(
        &self,
        query: &str,
        params: Option<&GeocodingParams>,
        cancel: F,
    ) -> Result<Response>
    where
        F: Future<Output = ()>,
    {
        until(self.geocode(query, params), cancel).await
    }

    /// Like `geocode`, but fails with `DeadlineElapsed` if the call takes
    /// longer than `deadline`.
    pub async fn geocode_with_deadline(
        &self,
        query: &str,
        params: Option<&GeocodingParams>,
        deadline: Duration,
    ) -> Result<Response> {
        with_deadline(self.geocode(query, params), deadline).await
    }

    /// `reverse_geocode` with an external cancel signal.
    pub async fn reverse_geocode_until<F>(
        &self,
        lat: f64,
        lng: f64,
        params: Option<&GeocodingParams>,
        cancel: F,
    ) -> Result<Response>
    where
        F: Future<Output = ()>,
    {
        until(self.reverse_geocode(lat, lng, params), cancel).await
    }

    /// `reverse_geocode` bounded by `deadline`.
    pub async fn reverse_geocode_with_deadline(
        &self,
        lat: f64,
        lng: f64,
        params: Option<&GeocodingParams>,
        deadline: Duration,
    ) -> Result<Response> {
        with_deadline(self.reverse_geocode(lat, lng, params), deadline).await
    }

    async fn execute(&self, request: HttpRequest) -> Result<Response> {
        let mut builder = self.http.get(&request.url);
        for (name, value) in &request.headers {
            builder = builder.header(name, value);
        }

        debug!(endpoint = self.core.endpoint(), "sending geocode request");
        let response = builder.send().await.map_err(transport)?;

        let status = response.status().as_u16();
        if let Err(err) = check_status(i64::from(status)) {
            warn!(status, error = %err, "geocode request rejected");
            return Err(err);
        }

        let headers = response
            .headers()
            .iter()
            .filter_map(|(name, value)| {
                let value = value.to_str().ok()?;
                Some((name.to_string(), value.to_string()))
            })
            .collect();
        let body = response.text().await.map_err(transport)?;

        let decoded = self
            .core
            .parse_geocode(HttpResponse {
                status,
                headers,
                body,
            })
            .inspect_err(|err| warn!(error = %err, "geocode response rejected"))?;

        debug!(
            results = decoded.results.len(),
            remaining = decoded.rate.remaining,
            "geocode response received"
        );
        Ok(decoded)
    }
}

async fn until<C>(call: impl Future<Output = Result<Response>>, cancel: C) -> Result<Response>
where
    C: Future<Output = ()>,
{
    tokio::select! {
        biased;
        () = cancel => {
            debug!("geocode request cancelled");
            Err(GeocodeError::Cancelled)
        }
        result = call => result,
    }
}

async fn with_deadline(
    call: impl Future<Output = Result<Response>>,
    deadline: Duration,
) -> Result<Response> {
    tokio::time::timeout(deadline, call).await.map_err(|_| {
        debug!(?deadline, "geocode request deadline elapsed");
        GeocodeError::DeadlineElapsed
    })?
}

/// reqwest includes the request URL, and so the API key, in its messages.
fn transport(err: reqwest::Error) -> GeocodeError {
    GeocodeError::Transport(Box::new(err.without_url()))
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| vars.get(name).cloned()
    }

    #[test]
    fn builder_defaults_to_production() {
        let client = Client::new("k").unwrap();
        assert_eq!(client.endpoint(), DEFAULT_ENDPOINT);
    }

    #[test]
    fn builder_overrides_endpoint() {
        let client = Client::builder("k")
            .endpoint("http://localhost:3000/")
            .timeout(Duration::from_secs(5))
            .user_agent("tests")
            .build()
            .unwrap();
        assert_eq!(client.endpoint(), "http://localhost:3000");
    }

    #[test]
    fn builder_rejects_bad_endpoint() {
        let err = Client::builder("k").endpoint("no scheme").build().unwrap_err();
        assert!(matches!(err, GeocodeError::InvalidUrl(_)));
    }

    #[test]
    fn builder_rejects_endpoint_with_query() {
        let err = Client::builder("k")
            .endpoint("http://h/api?x=1")
            .build()
            .unwrap_err();
        assert!(matches!(err, GeocodeError::Config(_)), "{err:?}");
    }

    #[test]
    fn env_requires_api_key() {
        let err = Client::from_lookup(lookup(&[])).unwrap_err();
        assert!(matches!(err, GeocodeError::Config(_)));
        let err = Client::from_lookup(lookup(&[(API_KEY_ENV, "")])).unwrap_err();
        assert!(matches!(err, GeocodeError::Config(_)));
    }

    #[test]
    fn env_reads_endpoint_and_timeout() {
        let client = Client::from_lookup(lookup(&[
            (API_KEY_ENV, "k"),
            (ENDPOINT_ENV, "http://127.0.0.1:9999"),
            (TIMEOUT_ENV, "10"),
        ]))
        .unwrap();
        assert_eq!(client.endpoint(), "http://127.0.0.1:9999");
    }

    #[test]
    fn env_rejects_bad_timeout() {
        let err = Client::from_lookup(lookup(&[(API_KEY_ENV, "k"), (TIMEOUT_ENV, "soon")]))
            .unwrap_err();
        assert!(err.to_string().contains(TIMEOUT_ENV));
    }

    #[test]
    fn env_rejects_zero_timeout() {
        let err = Client::from_lookup(lookup(&[(API_KEY_ENV, "k"), (TIMEOUT_ENV, "0")]))
            .unwrap_err();
        assert!(matches!(err, GeocodeError::Config(_)), "{err:?}");
        assert!(err.to_string().contains(TIMEOUT_ENV));
    }

    #[test]
    fn debug_output_hides_api_key() {
        let client = Client::new("super-secret").unwrap();
        assert!(!format!("{client:?}").contains("super-secret"));
    }
}
