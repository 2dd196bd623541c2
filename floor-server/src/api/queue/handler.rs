use axum::{extract::State, Json};

use shared::error::{ApiResponse, AppResult};

use crate::core::ServerState;
use crate::orders::queue::{self, QueueEntry, QueueGroup};
use crate::utils::time;

/// GET /api/queue - active orders grouped per lifecycle stage
pub async fn grouped(
    State(state): State<ServerState>,
) -> AppResult<Json<ApiResponse<Vec<QueueGroup>>>> {
    let orders = state.orders.active_orders()?;
    let groups = queue::active_queue(&orders, time::now_millis());
    Ok(Json(ApiResponse::success(groups)))
}

/// GET /api/queue/combined - active orders as one flat, stage-ordered list
pub async fn combined(
    State(state): State<ServerState>,
) -> AppResult<Json<ApiResponse<Vec<QueueEntry>>>> {
    let orders = state.orders.active_orders()?;
    let entries = queue::combined(&orders, time::now_millis());
    Ok(Json(ApiResponse::success(entries)))
}
