//! API routes
//!
//! # Structure
//!
//! - [`health`] - liveness and store probe
//! - [`orders`] - order lifecycle endpoints
//! - [`queue`] - active queue views
//! - [`tables`] - table status registry endpoints
//! - [`assistance`] - "call waiter" endpoints
//! - [`feedback`] - rating ledger endpoints
//! - [`service_issues`] - service issue log endpoints
//!
//! Handlers stay thin: extract, delegate to a component on
//! [`ServerState`], wrap the result in the shared [`ApiResponse`]
//! envelope. All domain rules live in the components.
//!
//! [`ApiResponse`]: shared::ApiResponse

use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::core::ServerState;

pub mod assistance;
pub mod feedback;
pub mod health;
pub mod orders;
pub mod queue;
pub mod service_issues;
pub mod tables;

/// Build a router with all routes registered (no middleware, no state)
pub fn build_router() -> Router<ServerState> {
    Router::new()
        .merge(health::router())
        .merge(orders::router())
        .merge(queue::router())
        .merge(tables::router())
        .merge(assistance::router())
        .merge(feedback::router())
        .merge(service_issues::router())
}

/// Build the fully configured application with middleware and state
pub fn router(state: ServerState) -> Router {
    build_router()
        // CORS - the customer and staff UIs are served from other origins
        .layer(CorsLayer::permissive())
        // Trace - request spans at INFO level
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
