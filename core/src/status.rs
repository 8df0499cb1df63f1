//! Status-code vocabulary of the geocoding service.
//!
//! The same table applies to the transport-level HTTP status and to the
//! `status.code` embedded in every response body; a call succeeds only when
//! both pass.

use crate::error::{ApiError, GeocodeError};

impl ApiError {
    /// Map a documented status code to its named condition.
    pub fn from_status(code: i64) -> Option<ApiError> {
        let err = match code {
            400 => ApiError::InvalidRequest,
            401 => ApiError::AuthFailure,
            402 => ApiError::QuotaExceeded,
            403 => ApiError::Forbidden,
            404 => ApiError::InvalidEndpoint,
            405 => ApiError::MethodNotAllowed,
            408 => ApiError::Timeout,
            410 => ApiError::RequestTooLong,
            426 => ApiError::UpgradeRequired,
            429 => ApiError::RateLimitExceeded,
            500 => ApiError::InternalServerError,
            _ => return None,
        };
        Some(err)
    }

    /// The status code the service uses for this condition.
    pub fn status_code(self) -> u16 {
        match self {
            ApiError::InvalidRequest => 400,
            ApiError::AuthFailure => 401,
            ApiError::QuotaExceeded => 402,
            ApiError::Forbidden => 403,
            ApiError::InvalidEndpoint => 404,
            ApiError::MethodNotAllowed => 405,
            ApiError::Timeout => 408,
            ApiError::RequestTooLong => 410,
            ApiError::UpgradeRequired => 426,
            ApiError::RateLimitExceeded => 429,
            ApiError::InternalServerError => 500,
        }
    }
}

/// Map a status code to `Ok(())` for 2xx, a named `ApiError` for the
/// documented codes, or `UnexpectedStatus` for everything else.
pub fn check_status(code: i64) -> Result<(), GeocodeError> {
    if let Some(err) = ApiError::from_status(code) {
        return Err(err.into());
    }
    if (200..300).contains(&code) {
        return Ok(());
    }
    Err(GeocodeError::UnexpectedStatus(code))
}

#[cfg(test)]
mod tests {
    use super::*;

    const TABLE: [(i64, ApiError); 11] = [
        (400, ApiError::InvalidRequest),
        (401, ApiError::AuthFailure),
        (402, ApiError::QuotaExceeded),
        (403, ApiError::Forbidden),
        (404, ApiError::InvalidEndpoint),
        (405, ApiError::MethodNotAllowed),
        (408, ApiError::Timeout),
        (410, ApiError::RequestTooLong),
        (426, ApiError::UpgradeRequired),
        (429, ApiError::RateLimitExceeded),
        (500, ApiError::InternalServerError),
    ];

    #[test]
    fn documented_codes_map_to_named_errors() {
        for (code, expected) in TABLE {
            let err = check_status(code).unwrap_err();
            assert_eq!(err.api_error(), Some(expected), "code {code}");
            assert_eq!(i64::from(expected.status_code()), code);
        }
    }

    #[test]
    fn success_range_is_ok() {
        for code in [200, 201, 204, 250, 299] {
            assert!(check_status(code).is_ok(), "code {code}");
        }
    }

    #[test]
    fn unlisted_codes_are_unexpected() {
        for code in [0, -1, 100, 199, 300, 302, 406, 418, 501, 503, 999, i64::MAX] {
            match check_status(code) {
                Err(GeocodeError::UnexpectedStatus(c)) => assert_eq!(c, code),
                other => panic!("code {code}: expected UnexpectedStatus, got {other:?}"),
            }
        }
    }
}
