use axum::{
    extract::{Path, Query, State},
    Json,
};

use shared::error::{ApiResponse, AppResult};
use shared::models::{Order, OrderDraft, OrderEdit, OrderFilter, PaymentChange, StatusChange};

use crate::core::ServerState;

/// POST /api/orders - place a new order for a table
pub async fn place(
    State(state): State<ServerState>,
    Json(payload): Json<OrderDraft>,
) -> AppResult<Json<ApiResponse<Order>>> {
    let order = state.orders.place_order(payload)?;
    Ok(Json(ApiResponse::success(order)))
}

/// GET /api/orders - list orders, newest first
pub async fn list(
    State(state): State<ServerState>,
    Query(filter): Query<OrderFilter>,
) -> AppResult<Json<ApiResponse<Vec<Order>>>> {
    let orders = state.orders.list_orders(&filter)?;
    Ok(Json(ApiResponse::success(orders)))
}

/// GET /api/orders/{id} - fetch a single order
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<ApiResponse<Order>>> {
    let order = state.orders.get_order(&id)?;
    Ok(Json(ApiResponse::success(order)))
}

/// PUT /api/orders/{id} - replace items and instructions while editable
pub async fn edit(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(payload): Json<OrderEdit>,
) -> AppResult<Json<ApiResponse<Order>>> {
    let order = state.orders.edit_order(&id, payload)?;
    Ok(Json(ApiResponse::success(order)))
}

/// PUT /api/orders/{id}/status - advance the order one stage
pub async fn advance(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(payload): Json<StatusChange>,
) -> AppResult<Json<ApiResponse<Order>>> {
    let order = state.orders.advance_status(&id, payload)?;
    Ok(Json(ApiResponse::success(order)))
}

/// PUT /api/orders/{id}/payment - record whether payment was collected
pub async fn payment(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(payload): Json<PaymentChange>,
) -> AppResult<Json<ApiResponse<Order>>> {
    let order = state.orders.set_payment_collected(&id, payload.collected)?;
    Ok(Json(ApiResponse::success(order)))
}
