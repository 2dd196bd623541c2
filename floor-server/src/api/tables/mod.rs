//! Dining table endpoints
//!
//! # Routes
//!
//! | Path | Method | Purpose |
//! |------|--------|---------|
//! | /api/tables | GET | List all known tables |
//! | /api/tables/{id} | GET | Fetch one table record |
//! | /api/tables/{id}/status | PUT | Set occupancy status |
//! | /api/tables/{id}/note | PUT | Set or clear the service note |

use axum::{
    routing::{get, put},
    Router,
};

use crate::core::ServerState;

pub mod handler;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/tables", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route("/", get(handler::list))
        .route("/{id}", get(handler::get_by_id))
        .route("/{id}/status", put(handler::set_status))
        .route("/{id}/note", put(handler::set_note))
}
