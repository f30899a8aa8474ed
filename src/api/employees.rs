//! Employee endpoints: CRUD plus the attendance mutations.

use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
};
use tracing::info;
use uuid::Uuid;

use crate::error::EngineError;
use crate::models::{AttendanceSheet, Employee};
use crate::store::{mark_all, reset_attendance as reset_all_attendance};

use super::request::{
    AttendanceUpdateRequest, CreateEmployeeRequest, MarkAllRequest, UpdateEmployeeRequest,
};
use super::response::{ApiResult, BulkSummary};
use super::state::AppState;

/// Resolves a path id. Ids are opaque, so an unparseable one behaves
/// like any other absent record.
fn employee_id(raw: &str) -> Result<Uuid, EngineError> {
    Uuid::parse_str(raw).map_err(|_| EngineError::EmployeeNotFound {
        id: raw.to_string(),
    })
}

fn not_found(id: Uuid) -> EngineError {
    EngineError::EmployeeNotFound { id: id.to_string() }
}

/// GET /api/employees
pub(super) async fn list(State(state): State<AppState>) -> ApiResult<Json<Vec<Employee>>> {
    let employees = state.employees().list().await?;
    Ok(Json(employees))
}

/// GET /api/employees/:id
pub(super) async fn fetch(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<Employee>> {
    let id = employee_id(&id)?;
    let employee = state
        .employees()
        .get(id)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(employee))
}

/// POST /api/employees
pub(super) async fn create(
    State(state): State<AppState>,
    payload: Result<Json<CreateEmployeeRequest>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<Employee>)> {
    let Json(request) = payload?;
    let new = request.into_new_employee(state.schema())?;
    let employee = state.employees().create(new).await?;
    info!(employee_id = %employee.id, name = %employee.name, "employee created");
    Ok((StatusCode::CREATED, Json(employee)))
}

/// PUT /api/employees/:id
pub(super) async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<UpdateEmployeeRequest>, JsonRejection>,
) -> ApiResult<Json<Employee>> {
    let id = employee_id(&id)?;
    let Json(request) = payload?;
    let patch = request.into_patch(state.schema())?;
    let employee = state
        .employees()
        .replace(id, patch)
        .await?
        .ok_or_else(|| not_found(id))?;
    info!(employee_id = %employee.id, "employee updated");
    Ok(Json(employee))
}

/// DELETE /api/employees/:id
pub(super) async fn remove(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<StatusCode> {
    let id = employee_id(&id)?;
    if !state.employees().delete(id).await? {
        return Err(not_found(id).into());
    }
    info!(employee_id = %id, "employee deleted");
    Ok(StatusCode::NO_CONTENT)
}

/// PUT /api/employees/:id/attendance
///
/// Single-slot replacement: the day index and the code are both
/// validated before the read-modify-write runs, so a bad payload never
/// touches the record.
pub(super) async fn update_attendance(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<AttendanceUpdateRequest>, JsonRejection>,
) -> ApiResult<Json<Employee>> {
    let id = employee_id(&id)?;
    let Json(request) = payload?;
    let code = state.schema().parse_symbol(&request.code)?;
    let slot = AttendanceSheet::day_index(request.day)?;

    let employee = state
        .employees()
        .apply(
            id,
            Box::new(move |record| {
                record.attendance.set(slot, code);
                Ok(())
            }),
        )
        .await?
        .ok_or_else(|| not_found(id))?;
    info!(employee_id = %employee.id, day = request.day, code = %request.code, "attendance updated");
    Ok(Json(employee))
}

/// POST /api/employees/mark-all-present
pub(super) async fn mark_all_present(
    State(state): State<AppState>,
    payload: Result<Json<MarkAllRequest>, JsonRejection>,
) -> ApiResult<Json<BulkSummary>> {
    let Json(request) = payload?;
    let code = state.schema().parse_symbol(&request.code)?;

    let outcome = mark_all(state.employees(), request.day, code).await?;
    info!(
        day = request.day,
        code = %request.code,
        updated = outcome.updated,
        failed = outcome.failures.len(),
        "bulk day marking finished"
    );
    Ok(Json(BulkSummary {
        message: format!(
            "Marked day {} as {} for {} employees",
            request.day + 1,
            request.code,
            outcome.updated
        ),
        count: outcome.updated,
    }))
}

/// POST /api/employees/reset-attendance
pub(super) async fn reset_attendance(
    State(state): State<AppState>,
) -> ApiResult<Json<BulkSummary>> {
    let code = state.schema().default_code();

    let outcome = reset_all_attendance(state.employees(), code).await?;
    info!(
        updated = outcome.updated,
        failed = outcome.failures.len(),
        "attendance reset finished"
    );
    Ok(Json(BulkSummary {
        message: format!("Reset attendance for {} employees", outcome.updated),
        count: outcome.updated,
    }))
}
