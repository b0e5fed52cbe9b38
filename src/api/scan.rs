//! Gate scanner endpoint.

use axum::extract::{Path, State};

use super::{ApiResponse, ApiResult};
use crate::models::GatePassRequest;
use crate::AppState;

/// POST /api/scan/:id - Mark an approved gate pass as used.
pub async fn scan_gate_pass(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<GatePassRequest> {
    let scanned = state
        .repo
        .scan(&id)
        .await
        .map_err(|e| e.during("Error scanning gate pass"))?;

    Ok(ApiResponse::with_message(
        scanned,
        "Gate pass scanned successfully",
    ))
}
