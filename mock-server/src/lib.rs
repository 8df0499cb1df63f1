//! An in-process stand-in for the OpenCage `/json` endpoint.
//!
//! Authentication follows the service's documented test keys, so the same
//! keys exercise the same failure paths here and against the real API.
//! Successful responses are served from the fixtures in `test-vectors/`.

use std::{collections::HashMap, sync::Arc};

use axum::{
    extract::{Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde_json::{json, Value};
use tokio::{net::TcpListener, sync::RwLock};
use tracing::debug;

/// Always answers 200.
pub const VALID_KEY: &str = "6d0e711d72d74daeb2b0bfd2a5cdfdba";
/// Always answers 402.
pub const QUOTA_EXCEEDED_KEY: &str = "4372eff77b8343cebfc843eb4da4ddc4";
/// Always answers 403.
pub const SUSPENDED_KEY: &str = "2e10e5e828262eb243ec0b54681d699a";
/// Always answers 429.
pub const RATE_LIMITED_KEY: &str = "d6d0f0065f4348a4bdfe4587ba02714b";

const FORWARD_BODY: &str = include_str!("../../test-vectors/forward_geocoding_response.json");
const REVERSE_BODY: &str = include_str!("../../test-vectors/reverse_geocoding_response.json");

pub type Params = HashMap<String, String>;

/// Query maps of every request received, oldest first.
#[derive(Clone, Default)]
pub struct MockState {
    requests: Arc<RwLock<Vec<Params>>>,
}

impl MockState {
    pub async fn requests(&self) -> Vec<Params> {
        self.requests.read().await.clone()
    }

    pub async fn last_request(&self) -> Option<Params> {
        self.requests.read().await.last().cloned()
    }
}

pub fn app() -> Router {
    app_with_state(MockState::default())
}

pub fn app_with_state(state: MockState) -> Router {
    Router::new()
        .route("/json", get(geocode))
        .with_state(state)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

pub async fn run_with_state(listener: TcpListener, state: MockState) -> Result<(), std::io::Error> {
    axum::serve(listener, app_with_state(state)).await
}

async fn geocode(
    State(state): State<MockState>,
    Query(params): Query<Params>,
) -> (StatusCode, Json<Value>) {
    state.requests.write().await.push(params.clone());

    let key = params.get("key").map(String::as_str).unwrap_or_default();
    let status = match key {
        VALID_KEY => StatusCode::OK,
        QUOTA_EXCEEDED_KEY => StatusCode::PAYMENT_REQUIRED,
        SUSPENDED_KEY => StatusCode::FORBIDDEN,
        RATE_LIMITED_KEY => StatusCode::TOO_MANY_REQUESTS,
        _ => StatusCode::UNAUTHORIZED,
    };
    if status != StatusCode::OK {
        debug!(status = status.as_u16(), "rejecting key");
        return (status, Json(error_body(status)));
    }

    let Some(query) = params.get("q").filter(|q| !q.trim().is_empty()) else {
        return (StatusCode::BAD_REQUEST, Json(error_body(StatusCode::BAD_REQUEST)));
    };

    let reverse = parse_coordinates(query).is_some();
    debug!(reverse, "serving fixture");
    let raw = if reverse { REVERSE_BODY } else { FORWARD_BODY };
    let mut body: Value = match serde_json::from_str(raw) {
        Ok(v) => v,
        Err(_) => {
            let status = StatusCode::INTERNAL_SERVER_ERROR;
            return (status, Json(error_body(status)));
        }
    };

    if params.get("no_annotations").map(String::as_str) == Some("1") {
        strip_annotations(&mut body);
    }

    (StatusCode::OK, Json(body))
}

/// The body shape the service uses for failures: status plus empty results.
pub fn error_body(status: StatusCode) -> Value {
    json!({
        "status": {
            "code": status.as_u16(),
            "message": status.canonical_reason().unwrap_or("Unknown"),
        },
        "results": [],
        "total_results": 0,
    })
}

/// `lat,lng` or `lat lng`, as accepted for reverse lookups.
fn parse_coordinates(query: &str) -> Option<(f64, f64)> {
    let mut parts = query
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|s| !s.is_empty());
    let lat = parts.next()?.parse().ok()?;
    let lng = parts.next()?.parse().ok()?;
    if parts.next().is_some() {
        return None;
    }
    Some((lat, lng))
}

fn strip_annotations(body: &mut Value) {
    if let Some(results) = body.get_mut("results").and_then(Value::as_array_mut) {
        for result in results {
            if let Some(obj) = result.as_object_mut() {
                obj.remove("annotations");
            }
        }
    }
}
