//! Health check route
//!
//! # Routes
//!
//! | Path | Method | Purpose |
//! |------|--------|---------|
//! | /health | GET | Liveness, store probe, poll interval hint |
//!
//! # Response Example
//!
//! ```json
//! {
//!   "status": "ok",
//!   "version": "0.1.0",
//!   "uptime_seconds": 120,
//!   "poll_seconds": 5,
//!   "store": { "status": "ok", "orders": 14 }
//! }
//! ```

use axum::{extract::State, routing::get, Json, Router};
use serde::Serialize;
use std::time::SystemTime;

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().route("/health", get(health))
}

/// Health check response
#[derive(Serialize)]
pub struct HealthResponse {
    /// Status (ok | degraded)
    status: &'static str,
    version: &'static str,
    uptime_seconds: u64,
    /// Suggested client polling interval; clients poll, the server never
    /// pushes
    poll_seconds: u64,
    store: CheckResult,
}

/// Single component check result
#[derive(Serialize)]
pub struct CheckResult {
    /// Status (ok | error)
    status: &'static str,
    /// Orders on file, as a cheap read probe
    #[serde(skip_serializing_if = "Option::is_none")]
    orders: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    message: Option<String>,
}

impl CheckResult {
    fn ok(orders: u64) -> Self {
        Self {
            status: "ok",
            orders: Some(orders),
            message: None,
        }
    }

    fn error(message: impl Into<String>) -> Self {
        Self {
            status: "error",
            orders: None,
            message: Some(message.into()),
        }
    }
}

// Server start time (lazily initialized on the first probe)
static START_TIME: std::sync::OnceLock<SystemTime> = std::sync::OnceLock::new();

fn uptime_seconds() -> u64 {
    let start = START_TIME.get_or_init(SystemTime::now);
    SystemTime::now()
        .duration_since(*start)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}

/// GET /health - liveness plus a cheap store read
pub async fn health(State(state): State<ServerState>) -> Json<HealthResponse> {
    let store = match state.store.stats() {
        Ok(stats) => CheckResult::ok(stats.order_count),
        Err(e) => CheckResult::error(e.to_string()),
    };

    let status = if store.message.is_none() {
        "ok"
    } else {
        "degraded"
    };

    Json(HealthResponse {
        status,
        version: env!("CARGO_PKG_VERSION"),
        uptime_seconds: uptime_seconds(),
        poll_seconds: state.config.poll_seconds,
        store,
    })
}
