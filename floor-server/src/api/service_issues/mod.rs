//! Service issue endpoints
//!
//! # Routes
//!
//! | Path | Method | Purpose |
//! |------|--------|---------|
//! | /api/service-issues | POST | Report an issue |
//! | /api/service-issues | GET | List issues (open only by default) |
//! | /api/service-issues/{id}/resolve | PUT | Mark an issue resolved |

use axum::{
    routing::{post, put},
    Router,
};

use crate::core::ServerState;

pub mod handler;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/service-issues", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route("/", post(handler::report).get(handler::list))
        .route("/{id}/resolve", put(handler::resolve))
}
