//! Gate-pass request endpoints.

use axum::extract::{Path, State};

use super::{ApiJson, ApiResponse, ApiResult};
use crate::models::{CreateGatePassRequest, GatePassRequest, UpdateStatusRequest};
use crate::AppState;

/// GET /api/requests - List all requests.
pub async fn list_requests(State(state): State<AppState>) -> ApiResult<Vec<GatePassRequest>> {
    let requests = state
        .repo
        .list_requests()
        .await
        .map_err(|e| e.during("Error reading requests"))?;

    Ok(ApiResponse::new(requests))
}

/// POST /api/requests - Submit a new gate-pass request.
pub async fn create_request(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<CreateGatePassRequest>,
) -> ApiResult<GatePassRequest> {
    let created = state
        .repo
        .create_request(request)
        .await
        .map_err(|e| e.during("Error creating request"))?;

    Ok(ApiResponse::with_message(
        created,
        "Gate pass request submitted successfully",
    ))
}

/// PUT /api/requests/:id - Approve or reject a request.
pub async fn update_request_status(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ApiJson(request): ApiJson<UpdateStatusRequest>,
) -> ApiResult<GatePassRequest> {
    let updated = state
        .repo
        .update_status(&id, request)
        .await
        .map_err(|e| e.during("Error updating request"))?;

    let message = format!("Request {} successfully", updated.status);
    Ok(ApiResponse::with_message(updated, message))
}
