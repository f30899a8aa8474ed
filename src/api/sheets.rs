//! Archived salary sheet endpoints.
//!
//! Sheets are explicit snapshots of a period's computed results; nothing
//! creates or touches them automatically.

use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
};
use tracing::info;
use uuid::Uuid;

use crate::error::EngineError;
use crate::models::SalarySheet;

use super::request::{CreateSalarySheetRequest, UpdateSalarySheetRequest};
use super::response::ApiResult;
use super::state::AppState;

fn sheet_id(raw: &str) -> Result<Uuid, EngineError> {
    Uuid::parse_str(raw).map_err(|_| EngineError::SheetNotFound {
        id: raw.to_string(),
    })
}

fn not_found(id: Uuid) -> EngineError {
    EngineError::SheetNotFound { id: id.to_string() }
}

/// GET /api/salary-sheets
pub(super) async fn list(State(state): State<AppState>) -> ApiResult<Json<Vec<SalarySheet>>> {
    let sheets = state.sheets().list().await?;
    Ok(Json(sheets))
}

/// GET /api/salary-sheets/:id
pub(super) async fn fetch(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<SalarySheet>> {
    let id = sheet_id(&id)?;
    let sheet = state.sheets().get(id).await?.ok_or_else(|| not_found(id))?;
    Ok(Json(sheet))
}

/// POST /api/salary-sheets
pub(super) async fn create(
    State(state): State<AppState>,
    payload: Result<Json<CreateSalarySheetRequest>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<SalarySheet>)> {
    let Json(request) = payload?;
    let new = request.into_new_sheet()?;
    let sheet = state.sheets().create(new).await?;
    info!(sheet_id = %sheet.id, month = %sheet.month, "salary sheet archived");
    Ok((StatusCode::CREATED, Json(sheet)))
}

/// PUT /api/salary-sheets/:id
pub(super) async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<UpdateSalarySheetRequest>, JsonRejection>,
) -> ApiResult<Json<SalarySheet>> {
    let id = sheet_id(&id)?;
    let Json(request) = payload?;
    let patch = request.into_patch()?;
    let sheet = state
        .sheets()
        .replace(id, patch)
        .await?
        .ok_or_else(|| not_found(id))?;
    info!(sheet_id = %sheet.id, "salary sheet updated");
    Ok(Json(sheet))
}

/// DELETE /api/salary-sheets/:id
pub(super) async fn remove(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<StatusCode> {
    let id = sheet_id(&id)?;
    if !state.sheets().delete(id).await? {
        return Err(not_found(id).into());
    }
    info!(sheet_id = %id, "salary sheet deleted");
    Ok(StatusCode::NO_CONTENT)
}
