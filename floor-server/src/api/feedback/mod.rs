//! Feedback endpoints
//!
//! # Routes
//!
//! | Path | Method | Purpose |
//! |------|--------|---------|
//! | /api/feedback | POST | Record a feedback entry |
//! | /api/feedback | GET | List entries (filter by table / rating / date) |
//! | /api/feedback/average | GET | Average rating over the same filters |

use axum::{
    routing::{get, post},
    Router,
};

use crate::core::ServerState;

pub mod handler;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/feedback", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route("/", post(handler::record).get(handler::list))
        .route("/average", get(handler::average))
}
