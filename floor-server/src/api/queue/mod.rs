//! Kitchen queue endpoints
//!
//! # Routes
//!
//! | Path | Method | Purpose |
//! |------|--------|---------|
//! | /api/queue | GET | Active orders grouped per stage |
//! | /api/queue/combined | GET | Active orders as one flat list |

use axum::{routing::get, Router};

use crate::core::ServerState;

pub mod handler;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/queue", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route("/", get(handler::grouped))
        .route("/combined", get(handler::combined))
}
