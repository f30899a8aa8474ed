//! Request types for the salary engine API.
//!
//! This module defines the JSON request structures and their boundary
//! validation. Conversions into the domain types reject bad fields before
//! anything reaches a store, naming the offending field in the error.

use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};
use crate::models::{
    AttendanceSchema, DEFAULT_ESI_RATE_BP, DEFAULT_PF_RATE_BP, EmployeePatch, NewDesignation,
    NewEmployee, NewSalarySheet, SalarySheetPatch,
};

/// The highest accepted deduction rate: 10000 basis points is 100%.
const MAX_RATE_BP: u32 = 10_000;

/// The highest accepted monetary amount per field.
///
/// Far above any real salary component, but small enough that sums of
/// capped components stay comfortably inside the integer currency range.
const MAX_AMOUNT: i64 = 1_000_000_000;

/// Request body for creating an employee.
///
/// Deduction rates and the flat deduction are optional and fall back to the
/// standard rates; attendance may be supplied as wire symbols and otherwise
/// starts as a fresh sheet under the configured schema.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateEmployeeRequest {
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
    /// ESI rate in basis points.
    #[serde(default = "default_esi_rate")]
    pub esi_rate: u32,
    /// PF rate in basis points.
    #[serde(default = "default_pf_rate")]
    pub pf_rate: u32,
    /// Flat monthly deduction.
    #[serde(default)]
    pub other_deduction: i64,
    /// Attendance as wire symbols, at most 31 entries.
    #[serde(default)]
    pub attendance: Option<Vec<String>>,
}

fn default_esi_rate() -> u32 {
    DEFAULT_ESI_RATE_BP
}

fn default_pf_rate() -> u32 {
    DEFAULT_PF_RATE_BP
}

impl CreateEmployeeRequest {
    /// Validates the payload and resolves it into a new employee record.
    pub fn into_new_employee(self, schema: AttendanceSchema) -> EngineResult<NewEmployee> {
        require_text("name", &self.name)?;
        require_text("position", &self.position)?;
        require_amount("basic", self.basic)?;
        require_amount("hra", self.hra)?;
        require_amount("allowance", self.allowance)?;
        require_amount("other_deduction", self.other_deduction)?;
        require_rate("esi_rate", self.esi_rate)?;
        require_rate("pf_rate", self.pf_rate)?;

        let attendance = match self.attendance {
            Some(symbols) => schema.sheet_from_symbols(&symbols)?,
            None => schema.default_sheet(),
        };

        Ok(NewEmployee {
            name: self.name,
            position: self.position,
            basic: self.basic,
            hra: self.hra,
            allowance: self.allowance,
            esi_rate: self.esi_rate,
            pf_rate: self.pf_rate,
            other_deduction: self.other_deduction,
            attendance,
        })
    }
}

/// Request body for updating an employee; absent fields keep their values.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateEmployeeRequest {
    /// New display name.
    pub name: Option<String>,
    /// New designation name.
    pub position: Option<String>,
    /// New basic salary.
    pub basic: Option<i64>,
    /// New house rent allowance.
    pub hra: Option<i64>,
    /// New other allowance.
    pub allowance: Option<i64>,
    /// New ESI rate in basis points.
    pub esi_rate: Option<u32>,
    /// New PF rate in basis points.
    pub pf_rate: Option<u32>,
    /// New flat deduction.
    pub other_deduction: Option<i64>,
    /// Replacement attendance as wire symbols.
    pub attendance: Option<Vec<String>>,
}

impl UpdateEmployeeRequest {
    /// Validates the present fields and resolves them into a patch.
    pub fn into_patch(self, schema: AttendanceSchema) -> EngineResult<EmployeePatch> {
        if let Some(name) = &self.name {
            require_text("name", name)?;
        }
        if let Some(position) = &self.position {
            require_text("position", position)?;
        }
        if let Some(basic) = self.basic {
            require_amount("basic", basic)?;
        }
        if let Some(hra) = self.hra {
            require_amount("hra", hra)?;
        }
        if let Some(allowance) = self.allowance {
            require_amount("allowance", allowance)?;
        }
        if let Some(other_deduction) = self.other_deduction {
            require_amount("other_deduction", other_deduction)?;
        }
        if let Some(esi_rate) = self.esi_rate {
            require_rate("esi_rate", esi_rate)?;
        }
        if let Some(pf_rate) = self.pf_rate {
            require_rate("pf_rate", pf_rate)?;
        }

        let attendance = match self.attendance {
            Some(symbols) => Some(schema.sheet_from_symbols(&symbols)?),
            None => None,
        };

        Ok(EmployeePatch {
            name: self.name,
            position: self.position,
            basic: self.basic,
            hra: self.hra,
            allowance: self.allowance,
            esi_rate: self.esi_rate,
            pf_rate: self.pf_rate,
            other_deduction: self.other_deduction,
            attendance,
        })
    }
}

/// Request body for marking one day on one employee's sheet.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AttendanceUpdateRequest {
    /// 0-based day index.
    pub day: i64,
    /// Wire symbol for the day.
    pub code: String,
}

/// Request body for marking one day across the whole register.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MarkAllRequest {
    /// 0-based day index.
    pub day: i64,
    /// Wire symbol for the day; present when omitted.
    #[serde(default = "default_mark_code")]
    pub code: String,
}

fn default_mark_code() -> String {
    "P".to_string()
}

/// Request body for creating a designation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateDesignationRequest {
    /// Title text.
    pub name: String,
    /// 1 when active; active when omitted.
    #[serde(rename = "isActive", default = "default_is_active")]
    pub is_active: i32,
}

fn default_is_active() -> i32 {
    1
}

impl CreateDesignationRequest {
    /// Validates the payload and resolves it into a new designation.
    pub fn into_new_designation(self) -> EngineResult<NewDesignation> {
        require_text("name", &self.name)?;
        Ok(NewDesignation {
            name: self.name,
            is_active: self.is_active,
        })
    }
}

/// Request body for archiving a salary sheet.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateSalarySheetRequest {
    /// Period label, e.g. "2025-08".
    pub month: String,
    /// Calendar year of the period.
    pub year: i32,
    /// Number of days the period covered.
    #[serde(rename = "totalDays")]
    pub total_days: u32,
    /// The rows to archive; empty when omitted.
    #[serde(rename = "employeeData", default)]
    pub employee_data: Vec<serde_json::Value>,
}

impl CreateSalarySheetRequest {
    /// Validates the payload and resolves it into a new sheet record.
    pub fn into_new_sheet(self) -> EngineResult<NewSalarySheet> {
        require_text("month", &self.month)?;
        require_day_count("totalDays", self.total_days)?;
        Ok(NewSalarySheet {
            month: self.month,
            year: self.year,
            total_days: self.total_days,
            employee_data: self.employee_data,
        })
    }
}

/// Request body for updating a salary sheet; absent fields keep their values.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateSalarySheetRequest {
    /// New period label.
    pub month: Option<String>,
    /// New calendar year.
    pub year: Option<i32>,
    /// New day count.
    #[serde(rename = "totalDays")]
    pub total_days: Option<u32>,
    /// Replacement rows.
    #[serde(rename = "employeeData")]
    pub employee_data: Option<Vec<serde_json::Value>>,
}

impl UpdateSalarySheetRequest {
    /// Validates the present fields and resolves them into a patch.
    pub fn into_patch(self) -> EngineResult<SalarySheetPatch> {
        if let Some(month) = &self.month {
            require_text("month", month)?;
        }
        if let Some(total_days) = self.total_days {
            require_day_count("totalDays", total_days)?;
        }
        Ok(SalarySheetPatch {
            month: self.month,
            year: self.year,
            total_days: self.total_days,
            employee_data: self.employee_data,
        })
    }
}

/// Query parameters accepted by the report endpoints.
#[derive(Debug, Clone, Deserialize)]
pub struct ReportQuery {
    /// Period label, `YYYY-MM`. Required.
    pub month: Option<String>,
    /// Period length; the month's calendar length when omitted.
    pub total_days: Option<i64>,
}

impl ReportQuery {
    /// Returns the month label or the missing-field error.
    pub fn require_month(&self) -> EngineResult<&str> {
        match self.month.as_deref() {
            Some(month) => Ok(month),
            None => Err(EngineError::Validation {
                field: "month".to_string(),
                message: "is a required query parameter".to_string(),
            }),
        }
    }
}

fn require_text(field: &str, value: &str) -> EngineResult<()> {
    if value.trim().is_empty() {
        return Err(EngineError::Validation {
            field: field.to_string(),
            message: "must not be empty".to_string(),
        });
    }
    Ok(())
}

fn require_amount(field: &str, value: i64) -> EngineResult<()> {
    if value < 0 {
        return Err(EngineError::Validation {
            field: field.to_string(),
            message: format!("must be non-negative, got {}", value),
        });
    }
    if value > MAX_AMOUNT {
        return Err(EngineError::Validation {
            field: field.to_string(),
            message: format!("must be at most {}, got {}", MAX_AMOUNT, value),
        });
    }
    Ok(())
}

fn require_rate(field: &str, value: u32) -> EngineResult<()> {
    if value > MAX_RATE_BP {
        return Err(EngineError::Validation {
            field: field.to_string(),
            message: format!("must be at most {} basis points, got {}", MAX_RATE_BP, value),
        });
    }
    Ok(())
}

fn require_day_count(field: &str, value: u32) -> EngineResult<()> {
    if !(1..=31).contains(&value) {
        return Err(EngineError::Validation {
            field: field.to_string(),
            message: format!("must be between 1 and 31, got {}", value),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::AttendanceCode;

    #[test]
    fn test_create_employee_applies_rate_defaults() {
        let json = r#"{
            "name": "मोहन लाल",
            "position": "Worker",
            "basic": 15000,
            "hra": 3000,
            "allowance": 1000
        }"#;

        let request: CreateEmployeeRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.esi_rate, 1750);
        assert_eq!(request.pf_rate, 1200);
        assert_eq!(request.other_deduction, 0);
        assert_eq!(request.attendance, None);
    }

    #[test]
    fn test_create_employee_defaults_sheet_per_schema() {
        let request = CreateEmployeeRequest {
            name: "मोहन लाल".to_string(),
            position: "Worker".to_string(),
            basic: 15000,
            hra: 3000,
            allowance: 1000,
            esi_rate: 0,
            pf_rate: 1200,
            other_deduction: 0,
            attendance: None,
        };

        let v1 = request
            .clone()
            .into_new_employee(AttendanceSchema::V1)
            .unwrap();
        assert!(
            v1.attendance
                .codes()
                .iter()
                .all(|c| *c == AttendanceCode::Present)
        );

        let v2 = request.into_new_employee(AttendanceSchema::V2).unwrap();
        assert!(
            v2.attendance
                .codes()
                .iter()
                .all(|c| *c == AttendanceCode::Unset)
        );
    }

    #[test]
    fn test_create_employee_parses_attendance_symbols() {
        let request = CreateEmployeeRequest {
            name: "मोहन लाल".to_string(),
            position: "Worker".to_string(),
            basic: 15000,
            hra: 3000,
            allowance: 1000,
            esi_rate: 1750,
            pf_rate: 1200,
            other_deduction: 0,
            attendance: Some(vec!["P".to_string(), "H".to_string()]),
        };

        let new = request.into_new_employee(AttendanceSchema::V2).unwrap();
        assert_eq!(new.attendance.get(0), AttendanceCode::Present);
        assert_eq!(new.attendance.get(1), AttendanceCode::HalfDay);
        assert_eq!(new.attendance.get(2), AttendanceCode::Unset);
    }

    #[test]
    fn test_create_employee_rejects_blank_name() {
        let request = CreateEmployeeRequest {
            name: "   ".to_string(),
            position: "Worker".to_string(),
            basic: 15000,
            hra: 3000,
            allowance: 1000,
            esi_rate: 1750,
            pf_rate: 1200,
            other_deduction: 0,
            attendance: None,
        };

        let result = request.into_new_employee(AttendanceSchema::V2);
        assert!(matches!(
            result,
            Err(EngineError::Validation { ref field, .. }) if field == "name"
        ));
    }

    #[test]
    fn test_create_employee_rejects_negative_amount_and_oversized_rate() {
        let mut request = CreateEmployeeRequest {
            name: "मोहन लाल".to_string(),
            position: "Worker".to_string(),
            basic: -1,
            hra: 3000,
            allowance: 1000,
            esi_rate: 1750,
            pf_rate: 1200,
            other_deduction: 0,
            attendance: None,
        };

        let result = request.clone().into_new_employee(AttendanceSchema::V2);
        assert!(matches!(
            result,
            Err(EngineError::Validation { ref field, .. }) if field == "basic"
        ));

        request.basic = 15000;
        request.esi_rate = 10_001;
        let result = request.into_new_employee(AttendanceSchema::V2);
        assert!(matches!(
            result,
            Err(EngineError::Validation { ref field, .. }) if field == "esi_rate"
        ));
    }

    #[test]
    fn test_create_employee_rejects_amounts_over_cap() {
        let request = CreateEmployeeRequest {
            name: "मोहन लाल".to_string(),
            position: "Worker".to_string(),
            basic: i64::MAX,
            hra: i64::MAX,
            allowance: 1000,
            esi_rate: 1750,
            pf_rate: 1200,
            other_deduction: 0,
            attendance: None,
        };

        let result = request.into_new_employee(AttendanceSchema::V2);
        assert!(matches!(
            result,
            Err(EngineError::Validation { ref field, .. }) if field == "basic"
        ));
    }

    #[test]
    fn test_update_employee_rejects_amounts_over_cap() {
        let request = UpdateEmployeeRequest {
            other_deduction: Some(MAX_AMOUNT + 1),
            ..UpdateEmployeeRequest::default()
        };
        let result = request.into_patch(AttendanceSchema::V2);
        assert!(matches!(
            result,
            Err(EngineError::Validation { ref field, .. }) if field == "other_deduction"
        ));

        let request = UpdateEmployeeRequest {
            other_deduction: Some(MAX_AMOUNT),
            ..UpdateEmployeeRequest::default()
        };
        assert!(request.into_patch(AttendanceSchema::V2).is_ok());
    }

    #[test]
    fn test_update_employee_validates_only_present_fields() {
        let request = UpdateEmployeeRequest {
            basic: Some(20000),
            ..UpdateEmployeeRequest::default()
        };
        let patch = request.into_patch(AttendanceSchema::V2).unwrap();
        assert_eq!(patch.basic, Some(20000));
        assert_eq!(patch.name, None);
        assert_eq!(patch.attendance, None);

        let request = UpdateEmployeeRequest {
            hra: Some(-5),
            ..UpdateEmployeeRequest::default()
        };
        assert!(request.into_patch(AttendanceSchema::V2).is_err());
    }

    #[test]
    fn test_update_employee_rejects_unknown_attendance_symbol() {
        let request = UpdateEmployeeRequest {
            attendance: Some(vec!["Q".to_string()]),
            ..UpdateEmployeeRequest::default()
        };
        let result = request.into_patch(AttendanceSchema::V2);
        assert!(matches!(
            result,
            Err(EngineError::UnknownAttendanceCode { ref code }) if code == "Q"
        ));
    }

    #[test]
    fn test_mark_all_code_defaults_to_present() {
        let request: MarkAllRequest = serde_json::from_str(r#"{"day": 4}"#).unwrap();
        assert_eq!(request.day, 4);
        assert_eq!(request.code, "P");
    }

    #[test]
    fn test_designation_defaults_to_active() {
        let request: CreateDesignationRequest =
            serde_json::from_str(r#"{"name": "Supervisor"}"#).unwrap();
        assert_eq!(request.is_active, 1);

        let request: CreateDesignationRequest =
            serde_json::from_str(r#"{"name": "Typist", "isActive": 0}"#).unwrap();
        assert_eq!(request.is_active, 0);
    }

    #[test]
    fn test_sheet_create_validates_day_count() {
        let request = CreateSalarySheetRequest {
            month: "2025-08".to_string(),
            year: 2025,
            total_days: 0,
            employee_data: vec![],
        };
        let result = request.into_new_sheet();
        assert!(matches!(
            result,
            Err(EngineError::Validation { ref field, .. }) if field == "totalDays"
        ));
    }

    #[test]
    fn test_report_query_requires_month() {
        let query = ReportQuery {
            month: None,
            total_days: Some(30),
        };
        assert!(matches!(
            query.require_month(),
            Err(EngineError::Validation { ref field, .. }) if field == "month"
        ));

        let query = ReportQuery {
            month: Some("2025-08".to_string()),
            total_days: None,
        };
        assert_eq!(query.require_month().unwrap(), "2025-08");
    }
}
