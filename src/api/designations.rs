//! Designation endpoints.
//!
//! The listing only returns active titles; deactivated ones stay in the
//! store but disappear from the dropdowns that feed off this endpoint.

use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
};
use tracing::info;
use uuid::Uuid;

use crate::error::EngineError;
use crate::models::Designation;

use super::request::CreateDesignationRequest;
use super::response::ApiResult;
use super::state::AppState;

fn designation_id(raw: &str) -> Result<Uuid, EngineError> {
    Uuid::parse_str(raw).map_err(|_| EngineError::DesignationNotFound {
        id: raw.to_string(),
    })
}

/// GET /api/designations
pub(super) async fn list(State(state): State<AppState>) -> ApiResult<Json<Vec<Designation>>> {
    let designations = state.designations().list(true).await?;
    Ok(Json(designations))
}

/// POST /api/designations
pub(super) async fn create(
    State(state): State<AppState>,
    payload: Result<Json<CreateDesignationRequest>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<Designation>)> {
    let Json(request) = payload?;
    let new = request.into_new_designation()?;
    let designation = state.designations().create(new).await?;
    info!(designation_id = %designation.id, name = %designation.name, "designation created");
    Ok((StatusCode::CREATED, Json(designation)))
}

/// DELETE /api/designations/:id
pub(super) async fn remove(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<StatusCode> {
    let id = designation_id(&id)?;
    if !state.designations().delete(id).await? {
        return Err(EngineError::DesignationNotFound { id: id.to_string() }.into());
    }
    info!(designation_id = %id, "designation deleted");
    Ok(StatusCode::NO_CONTENT)
}
