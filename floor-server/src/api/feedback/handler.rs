use axum::{
    extract::{Query, State},
    Json,
};

use shared::error::{ApiResponse, AppResult};
use shared::models::{FeedbackDraft, FeedbackEntry, FeedbackFilter};

use crate::core::ServerState;

/// POST /api/feedback - record a feedback entry
pub async fn record(
    State(state): State<ServerState>,
    Json(payload): Json<FeedbackDraft>,
) -> AppResult<Json<ApiResponse<FeedbackEntry>>> {
    let entry = state.feedback.record(payload)?;
    Ok(Json(ApiResponse::success(entry)))
}

/// GET /api/feedback - list entries, newest first
pub async fn list(
    State(state): State<ServerState>,
    Query(filter): Query<FeedbackFilter>,
) -> AppResult<Json<ApiResponse<Vec<FeedbackEntry>>>> {
    let entries = state.feedback.list(&filter)?;
    Ok(Json(ApiResponse::success(entries)))
}

/// GET /api/feedback/average - average rating over the filtered entries
///
/// Returns 0.0 when nothing matches.
pub async fn average(
    State(state): State<ServerState>,
    Query(filter): Query<FeedbackFilter>,
) -> AppResult<Json<ApiResponse<f64>>> {
    let value = state.feedback.average(&filter)?;
    Ok(Json(ApiResponse::success(value)))
}
