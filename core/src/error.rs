//! Error types for the geocoding client.
//!
//! # Design
//! The service reports failures with a small fixed vocabulary of status
//! codes, so each documented code gets a named `ApiError` variant. Anything
//! outside that table and outside 2xx lands in `GeocodeError::UnexpectedStatus`
//! with the raw code for diagnostics. Transport, decode and URL failures wrap
//! their underlying cause so `source()` chains stay intact.

use thiserror::Error;

/// Boxed error used to carry transport failures from whichever HTTP stack the
/// host plugs in.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// The eleven failure conditions the service documents.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ApiError {
    #[error("invalid request - a required parameter is missing, invalid coordinates, invalid version, or invalid format")]
    InvalidRequest,

    #[error("unable to authenticate - missing, invalid, or unknown API key")]
    AuthFailure,

    #[error("valid request but quota exceeded (payment required)")]
    QuotaExceeded,

    #[error("forbidden - API key disabled or IP address rejected")]
    Forbidden,

    #[error("invalid API endpoint")]
    InvalidEndpoint,

    #[error("method not allowed - non-GET request")]
    MethodNotAllowed,

    #[error("timeout - you can try again")]
    Timeout,

    #[error("request too long")]
    RequestTooLong,

    #[error("upgrade required - unsupported TLS")]
    UpgradeRequired,

    #[error("too many requests - rate limiting in effect")]
    RateLimitExceeded,

    #[error("internal server error")]
    InternalServerError,
}

/// Errors returned by the client, from URL construction to response decoding.
#[derive(Error, Debug)]
pub enum GeocodeError {
    /// The service (or the transport in front of it) reported a documented
    /// failure status.
    #[error(transparent)]
    Api(#[from] ApiError),

    /// A non-2xx status outside the documented table.
    #[error("unexpected status code {0}")]
    UnexpectedStatus(i64),

    /// The configured endpoint is not a usable base URL.
    #[error("cannot build request URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// NaN and infinities have no representation in the query string.
    #[error("coordinate {0} is not a finite number")]
    NonFiniteCoordinate(f64),

    #[error("failed to send the request: {0}")]
    Transport(#[source] BoxError),

    #[error("failed to parse the response: {0}")]
    Decode(#[from] serde_json::Error),

    /// The caller's cancellation signal fired before the call completed.
    #[error("request cancelled")]
    Cancelled,

    /// The caller's per-call deadline elapsed before the call completed.
    #[error("request deadline elapsed")]
    DeadlineElapsed,

    #[error("configuration error: {0}")]
    Config(String),
}

impl GeocodeError {
    /// Returns the named API condition, if this error is one.
    pub fn api_error(&self) -> Option<ApiError> {
        match self {
            GeocodeError::Api(e) => Some(*e),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, GeocodeError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn api_error_displays_service_message() {
        let err = GeocodeError::from(ApiError::QuotaExceeded);
        assert_eq!(
            err.to_string(),
            "valid request but quota exceeded (payment required)"
        );
        assert_eq!(err.api_error(), Some(ApiError::QuotaExceeded));
    }

    #[test]
    fn decode_error_keeps_source() {
        let parse_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err = GeocodeError::from(parse_err);
        assert!(err.to_string().starts_with("failed to parse the response"));
        assert!(err.source().is_some());
        assert_eq!(err.api_error(), None);
    }

    #[test]
    fn transport_error_keeps_source() {
        let io = std::io::Error::new(std::io::ErrorKind::ConnectionRefused, "refused");
        let err = GeocodeError::Transport(Box::new(io));
        assert_eq!(err.to_string(), "failed to send the request: refused");
        assert!(err.source().is_some());
    }
}
