//! HTTP API for the salary engine.
//!
//! This module provides the REST surface of the salary register:
//! employee CRUD with the attendance mutations, the designation list,
//! archived salary sheets, and the computed report with its CSV
//! download. Handlers hold no logic of their own beyond payload
//! validation; they call through [`AppState`] into the stores, the
//! calculator, and the report builder.

mod designations;
mod employees;
mod report;
mod request;
mod response;
mod sheets;
mod state;

use axum::{
    Router,
    routing::{delete, get, post, put},
};

pub use request::{
    AttendanceUpdateRequest, CreateDesignationRequest, CreateEmployeeRequest,
    CreateSalarySheetRequest, MarkAllRequest, ReportQuery, UpdateEmployeeRequest,
    UpdateSalarySheetRequest,
};
pub use response::{ApiError, ApiErrorResponse, ApiResult, BulkSummary};
pub use state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route(
            "/api/employees",
            get(employees::list).post(employees::create),
        )
        .route(
            "/api/employees/mark-all-present",
            post(employees::mark_all_present),
        )
        .route(
            "/api/employees/reset-attendance",
            post(employees::reset_attendance),
        )
        .route(
            "/api/employees/:id",
            get(employees::fetch)
                .put(employees::update)
                .delete(employees::remove),
        )
        .route(
            "/api/employees/:id/attendance",
            put(employees::update_attendance),
        )
        .route(
            "/api/designations",
            get(designations::list).post(designations::create),
        )
        .route("/api/designations/:id", delete(designations::remove))
        .route("/api/salary-sheets", get(sheets::list).post(sheets::create))
        .route(
            "/api/salary-sheets/:id",
            get(sheets::fetch).put(sheets::update).delete(sheets::remove),
        )
        .route("/api/report", get(report::computed))
        .route("/api/report/csv", get(report::download_csv))
        .with_state(state)
}
