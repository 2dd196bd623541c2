use axum::{
    extract::{Path, State},
    Json,
};

use shared::error::{ApiResponse, AppResult};
use shared::models::AssistanceRequest;

use crate::core::ServerState;

/// GET /api/assistance - pending calls, oldest first
pub async fn list(
    State(state): State<ServerState>,
) -> AppResult<Json<ApiResponse<Vec<AssistanceRequest>>>> {
    let calls = state.assistance.list_active()?;
    Ok(Json(ApiResponse::success(calls)))
}

/// POST /api/assistance/{table_id} - raise a call for a table
///
/// Repeating the call while one is pending returns the original request
/// unchanged.
pub async fn request(
    State(state): State<ServerState>,
    Path(table_id): Path<String>,
) -> AppResult<Json<ApiResponse<AssistanceRequest>>> {
    let call = state.assistance.request(&table_id)?;
    Ok(Json(ApiResponse::success(call)))
}

/// DELETE /api/assistance/{table_id} - acknowledge a call
///
/// The payload is `true` when a pending call was cleared, `false` when
/// there was nothing to clear.
pub async fn acknowledge(
    State(state): State<ServerState>,
    Path(table_id): Path<String>,
) -> AppResult<Json<ApiResponse<bool>>> {
    let cleared = state.assistance.acknowledge(&table_id)?;
    Ok(Json(ApiResponse::success(cleared)))
}
