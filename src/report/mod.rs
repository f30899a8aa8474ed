//! Report building for the salary register.
//!
//! Turns the employee records into presentation rows: one row per
//! employee with per-day symbols and the full salary breakdown, plus the
//! summary totals shown at the bottom of the register. The CSV export in
//! [`csv`](self::csv) renders the same rows as a downloadable file.

mod csv;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;
use uuid::Uuid;

use crate::calculation::{calculate_salary, validate_period};
use crate::error::{EngineError, EngineResult};
use crate::models::Employee;

pub use csv::{csv_filename, render_csv};

/// One employee's line in the salary register.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportRow {
    /// 1-based position in the register.
    pub serial: usize,
    /// Id of the employee the row was built from.
    pub employee_id: Uuid,
    /// Display name.
    pub name: String,
    /// Designation name.
    pub position: String,
    /// Monthly basic salary.
    pub basic: i64,
    /// Monthly house rent allowance.
    pub hra: i64,
    /// Monthly other allowance.
    pub allowance: i64,
    /// Display symbol per day of the period, `-` for unset days.
    pub days: Vec<String>,
    /// Payable days worked.
    pub attendance_count: Decimal,
    /// Gross pay for the period.
    pub gross: i64,
    /// ESI deduction.
    pub esi: i64,
    /// PF deduction.
    pub pf: i64,
    /// Flat other-deduction.
    pub other_deduction: i64,
    /// Sum of all deductions.
    pub total_deduction: i64,
    /// Gross minus deductions; may be negative.
    pub net: i64,
}

/// The register's summary card totals.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportSummary {
    /// Number of rows in the register.
    pub employees: usize,
    /// Sum of the gross column.
    pub total_gross: i64,
    /// Sum of the total-deduction column.
    pub total_deduction: i64,
    /// Sum of the net column.
    pub total_net: i64,
}

/// Builds one register row per employee, in store order.
pub fn build_rows(employees: &[Employee], total_days: i64) -> EngineResult<Vec<ReportRow>> {
    validate_period(total_days)?;

    let mut rows = Vec::with_capacity(employees.len());
    for (index, employee) in employees.iter().enumerate() {
        let breakdown = calculate_salary(employee, total_days)?;
        let days = employee.attendance.codes()[..total_days as usize]
            .iter()
            .map(|code| code.display_symbol().to_string())
            .collect();

        rows.push(ReportRow {
            serial: index + 1,
            employee_id: employee.id,
            name: employee.name.clone(),
            position: employee.position.clone(),
            basic: employee.basic,
            hra: employee.hra,
            allowance: employee.allowance,
            days,
            attendance_count: breakdown.attendance_count,
            gross: breakdown.gross,
            esi: breakdown.esi,
            pf: breakdown.pf,
            other_deduction: breakdown.other_deduction,
            total_deduction: breakdown.total_deduction,
            net: breakdown.net,
        });
    }
    Ok(rows)
}

/// Sums the register columns for the summary cards.
pub fn summarize(rows: &[ReportRow]) -> ReportSummary {
    ReportSummary {
        employees: rows.len(),
        total_gross: rows.iter().map(|row| row.gross).sum(),
        total_deduction: rows.iter().map(|row| row.total_deduction).sum(),
        total_net: rows.iter().map(|row| row.net).sum(),
    }
}

/// Resolves a `YYYY-MM` label to its calendar day count.
pub fn days_in_month(label: &str) -> EngineResult<i64> {
    let (year, month) = parse_month_label(label)?;

    let first = NaiveDate::from_ymd_opt(year, month, 1).ok_or_else(|| invalid_month(label))?;
    let next_first = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)
    }
    .ok_or_else(|| invalid_month(label))?;

    Ok((next_first - first).num_days())
}

fn parse_month_label(label: &str) -> EngineResult<(i32, u32)> {
    let (year, month) = label.split_once('-').ok_or_else(|| invalid_month(label))?;
    let year: i32 = year.parse().map_err(|_| invalid_month(label))?;
    let month: u32 = month.parse().map_err(|_| invalid_month(label))?;
    Ok((year, month))
}

fn invalid_month(label: &str) -> EngineError {
    EngineError::Validation {
        field: "month".to_string(),
        message: format!("'{}' is not a YYYY-MM month label", label),
    }
}
