//! Salary sheet snapshot model.
//!
//! A salary sheet archives the computed payroll rows of one period as an
//! opaque JSON payload. Sheets are only ever created explicitly; employee
//! mutations never write one.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// An archived payroll snapshot for one period.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalarySheet {
    /// Unique identifier, generated at creation.
    pub id: Uuid,
    /// Period label, e.g. "2025-08".
    pub month: String,
    /// Calendar year of the period.
    pub year: i32,
    /// Number of days the period covered.
    #[serde(rename = "totalDays")]
    pub total_days: u32,
    /// The computed rows as stored by the caller; the engine does not
    /// interpret them after archival.
    #[serde(rename = "employeeData")]
    pub employee_data: Vec<serde_json::Value>,
}

/// Fields for a new salary sheet; the store assigns the id.
#[derive(Debug, Clone, PartialEq)]
pub struct NewSalarySheet {
    /// Period label.
    pub month: String,
    /// Calendar year.
    pub year: i32,
    /// Number of days covered.
    pub total_days: u32,
    /// The rows to archive.
    pub employee_data: Vec<serde_json::Value>,
}

impl NewSalarySheet {
    /// Materializes the record with a freshly generated id.
    pub fn into_sheet(self) -> SalarySheet {
        SalarySheet {
            id: Uuid::new_v4(),
            month: self.month,
            year: self.year,
            total_days: self.total_days,
            employee_data: self.employee_data,
        }
    }
}

/// A partial update to a salary sheet record.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SalarySheetPatch {
    /// New period label, if changing.
    pub month: Option<String>,
    /// New calendar year, if changing.
    pub year: Option<i32>,
    /// New day count, if changing.
    pub total_days: Option<u32>,
    /// Replacement rows, if changing.
    pub employee_data: Option<Vec<serde_json::Value>>,
}

impl SalarySheetPatch {
    /// Merges the present fields into an existing record.
    pub fn merge_into(self, sheet: &mut SalarySheet) {
        if let Some(month) = self.month {
            sheet.month = month;
        }
        if let Some(year) = self.year {
            sheet.year = year;
        }
        if let Some(total_days) = self.total_days {
            sheet.total_days = total_days;
        }
        if let Some(employee_data) = self.employee_data {
            sheet.employee_data = employee_data;
        }
    }
}
