//! Assistance call endpoints
//!
//! # Routes
//!
//! | Path | Method | Purpose |
//! |------|--------|---------|
//! | /api/assistance | GET | Pending calls, oldest first |
//! | /api/assistance/{table_id} | POST | Raise a call (idempotent per table) |
//! | /api/assistance/{table_id} | DELETE | Acknowledge and clear a call |

use axum::{
    routing::{get, post},
    Router,
};

use crate::core::ServerState;

pub mod handler;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/assistance", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route("/", get(handler::list))
        .route(
            "/{table_id}",
            post(handler::request).delete(handler::acknowledge),
        )
}
