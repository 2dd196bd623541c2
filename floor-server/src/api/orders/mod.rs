//! Order endpoints
//!
//! # Routes
//!
//! | Path | Method | Purpose |
//! |------|--------|---------|
//! | /api/orders | POST | Place a new order |
//! | /api/orders | GET | List orders (filter by status / search) |
//! | /api/orders/{id} | GET | Fetch one order |
//! | /api/orders/{id} | PUT | Edit items / instructions (PLACED, RECEIVED only) |
//! | /api/orders/{id}/status | PUT | Advance one lifecycle stage |
//! | /api/orders/{id}/payment | PUT | Set the payment-collected flag |

use axum::{
    routing::{get, post, put},
    Router,
};

use crate::core::ServerState;

pub mod handler;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/orders", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route("/", post(handler::place).get(handler::list))
        .route("/{id}", get(handler::get_by_id).put(handler::edit))
        .route("/{id}/status", put(handler::advance))
        .route("/{id}/payment", put(handler::payment))
}
