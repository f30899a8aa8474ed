//! Computed report endpoints.
//!
//! Both endpoints build the same register rows from the live employee
//! records; one returns them as JSON with the summary cards, the other
//! renders the CSV download.

use axum::{
    Json,
    extract::{Query, State, rejection::QueryRejection},
    http::header,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use tracing::info;

use crate::report::{ReportRow, ReportSummary, build_rows, csv_filename, days_in_month, render_csv, summarize};

use super::request::ReportQuery;
use super::response::ApiResult;
use super::state::AppState;

/// Body returned by GET /api/report.
#[derive(Debug, Serialize)]
pub(super) struct ReportResponse {
    /// The requested period label.
    month: String,
    /// The period length the rows were computed with.
    total_days: i64,
    /// One register row per employee.
    rows: Vec<ReportRow>,
    /// Column totals for the summary cards.
    summary: ReportSummary,
}

/// Resolves the effective period length: the explicit query value, or
/// the calendar length of the requested month.
fn resolve_period(query: &ReportQuery) -> ApiResult<(String, i64)> {
    let month = query.require_month()?.to_string();
    let total_days = match query.total_days {
        Some(days) => days,
        None => days_in_month(&month)?,
    };
    Ok((month, total_days))
}

/// GET /api/report
pub(super) async fn computed(
    State(state): State<AppState>,
    query: Result<Query<ReportQuery>, QueryRejection>,
) -> ApiResult<Json<ReportResponse>> {
    let Query(query) = query?;
    let (month, total_days) = resolve_period(&query)?;

    let employees = state.employees().list().await?;
    let rows = build_rows(&employees, total_days)?;
    let summary = summarize(&rows);
    info!(%month, total_days, rows = rows.len(), "report computed");

    Ok(Json(ReportResponse {
        month,
        total_days,
        rows,
        summary,
    }))
}

/// GET /api/report/csv
pub(super) async fn download_csv(
    State(state): State<AppState>,
    query: Result<Query<ReportQuery>, QueryRejection>,
) -> ApiResult<Response> {
    let Query(query) = query?;
    let (month, total_days) = resolve_period(&query)?;

    let employees = state.employees().list().await?;
    let rows = build_rows(&employees, total_days)?;
    let bytes = render_csv(&rows, total_days)?;
    info!(%month, total_days, rows = rows.len(), bytes = bytes.len(), "report exported");

    Ok((
        [
            (header::CONTENT_TYPE, "text/csv; charset=utf-8".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{}\"", csv_filename(&month)),
            ),
        ],
        bytes,
    )
        .into_response())
}
