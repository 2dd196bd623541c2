use axum::{
    extract::{Path, Query, State},
    Json,
};

use shared::error::{ApiResponse, AppResult};
use shared::models::{ServiceIssue, ServiceIssueDraft, ServiceIssueFilter};

use crate::core::ServerState;

/// POST /api/service-issues - report an issue
pub async fn report(
    State(state): State<ServerState>,
    Json(payload): Json<ServiceIssueDraft>,
) -> AppResult<Json<ApiResponse<ServiceIssue>>> {
    let issue = state.issues.report(payload)?;
    Ok(Json(ApiResponse::success(issue)))
}

/// GET /api/service-issues - list issues, newest first
///
/// Resolved issues stay hidden unless `include_resolved=true`.
pub async fn list(
    State(state): State<ServerState>,
    Query(filter): Query<ServiceIssueFilter>,
) -> AppResult<Json<ApiResponse<Vec<ServiceIssue>>>> {
    let issues = state.issues.list(filter.include_resolved)?;
    Ok(Json(ApiResponse::success(issues)))
}

/// PUT /api/service-issues/{id}/resolve - mark an issue resolved
///
/// Resolving twice is harmless and returns the same record.
pub async fn resolve(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<ApiResponse<ServiceIssue>>> {
    let issue = state.issues.resolve(&id)?;
    Ok(Json(ApiResponse::success(issue)))
}
