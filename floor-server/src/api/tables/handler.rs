use axum::{
    extract::{Path, State},
    Json,
};

use shared::error::{ApiResponse, AppError, AppResult};
use shared::models::{DiningTable, TableNoteChange, TableStatusChange};

use crate::core::ServerState;

/// GET /api/tables - all known tables, sorted by id
pub async fn list(
    State(state): State<ServerState>,
) -> AppResult<Json<ApiResponse<Vec<DiningTable>>>> {
    let tables = state.tables.list_all()?;
    Ok(Json(ApiResponse::success(tables)))
}

/// GET /api/tables/{id} - fetch one table record
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<ApiResponse<DiningTable>>> {
    let table = state
        .tables
        .get(&id)?
        .ok_or_else(|| AppError::table_not_found(&id))?;
    Ok(Json(ApiResponse::success(table)))
}

/// PUT /api/tables/{id}/status - set occupancy status, creating the
/// record on first touch
pub async fn set_status(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(payload): Json<TableStatusChange>,
) -> AppResult<Json<ApiResponse<DiningTable>>> {
    let table = state.tables.set_status(&id, payload.status)?;
    Ok(Json(ApiResponse::success(table)))
}

/// PUT /api/tables/{id}/note - set or clear the service note
pub async fn set_note(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(payload): Json<TableNoteChange>,
) -> AppResult<Json<ApiResponse<DiningTable>>> {
    let table = state.tables.set_note(&id, payload.note)?;
    Ok(Json(ApiResponse::success(table)))
}
