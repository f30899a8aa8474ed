//! Employee model and related types.
//!
//! This module defines the Employee struct along with the companion
//! types used for creation and partial updates. All currency amounts
//! are whole units of one fixed currency; deduction rates are basis
//! points of gross.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::attendance::AttendanceSheet;

/// Default ESI deduction rate in basis points (1.75%).
pub const DEFAULT_ESI_RATE_BP: u32 = 1750;

/// Default PF deduction rate in basis points (12%).
pub const DEFAULT_PF_RATE_BP: u32 = 1200;

/// An employee on the salary register.
///
/// # Example
///
/// ```
/// use rust_decimal::Decimal;
/// use salary_engine::models::{AttendanceSheet, Employee};
/// use uuid::Uuid;
///
/// let employee = Employee {
///     id: Uuid::new_v4(),
///     name: "राम कुमार".to_string(),
///     position: "Manager".to_string(),
///     basic: 25000,
///     hra: 5000,
///     allowance: 2000,
///     esi_rate: 1750,
///     pf_rate: 1200,
///     other_deduction: 0,
///     attendance: AttendanceSheet::default(),
/// };
/// assert_eq!(employee.monthly_compensation(), Decimal::from(32000));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    /// Unique identifier, generated at creation and opaque to clients.
    pub id: Uuid,
    /// Display name.
    pub name: String,
    /// Designation name, denormalized as free text.
    pub position: String,
    /// Monthly basic salary.
    pub basic: i64,
    /// Monthly house rent allowance.
    pub hra: i64,
    /// Monthly other allowance.
    pub allowance: i64,
    /// ESI deduction rate in basis points of gross.
    pub esi_rate: u32,
    /// PF deduction rate in basis points of gross.
    pub pf_rate: u32,
    /// Flat monthly deduction on top of ESI and PF.
    pub other_deduction: i64,
    /// Current month's attendance sheet.
    pub attendance: AttendanceSheet,
}

impl Employee {
    /// Returns the full monthly compensation: basic + HRA + allowance.
    ///
    /// Summed as `Decimal` so components near the integer range cannot
    /// overflow before the calculator's own range check sees them.
    pub fn monthly_compensation(&self) -> Decimal {
        Decimal::from(self.basic) + Decimal::from(self.hra) + Decimal::from(self.allowance)
    }
}

/// Fields for a new employee record; the store assigns the id.
///
/// Boundary defaults (deduction rates, attendance sheet) are already
/// resolved by the time this type exists.
#[derive(Debug, Clone, PartialEq)]
pub struct NewEmployee {
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
    /// ESI deduction rate in basis points.
    pub esi_rate: u32,
    /// PF deduction rate in basis points.
    pub pf_rate: u32,
    /// Flat monthly deduction.
    pub other_deduction: i64,
    /// Initial attendance sheet.
    pub attendance: AttendanceSheet,
}

impl NewEmployee {
    /// Materializes the record with a freshly generated id.
    pub fn into_employee(self) -> Employee {
        Employee {
            id: Uuid::new_v4(),
            name: self.name,
            position: self.position,
            basic: self.basic,
            hra: self.hra,
            allowance: self.allowance,
            esi_rate: self.esi_rate,
            pf_rate: self.pf_rate,
            other_deduction: self.other_deduction,
            attendance: self.attendance,
        }
    }
}

/// A partial update to an employee record.
///
/// Every field is optional; merging applies only the fields that are
/// present and leaves the rest of the record untouched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EmployeePatch {
    /// New display name, if changing.
    pub name: Option<String>,
    /// New designation name, if changing.
    pub position: Option<String>,
    /// New basic salary, if changing.
    pub basic: Option<i64>,
    /// New house rent allowance, if changing.
    pub hra: Option<i64>,
    /// New other allowance, if changing.
    pub allowance: Option<i64>,
    /// New ESI rate in basis points, if changing.
    pub esi_rate: Option<u32>,
    /// New PF rate in basis points, if changing.
    pub pf_rate: Option<u32>,
    /// New flat deduction, if changing.
    pub other_deduction: Option<i64>,
    /// Replacement attendance sheet, if changing.
    pub attendance: Option<AttendanceSheet>,
}

impl EmployeePatch {
    /// Merges the present fields into an existing record.
    pub fn merge_into(self, employee: &mut Employee) {
        if let Some(name) = self.name {
            employee.name = name;
        }
        if let Some(position) = self.position {
            employee.position = position;
        }
        if let Some(basic) = self.basic {
            employee.basic = basic;
        }
        if let Some(hra) = self.hra {
            employee.hra = hra;
        }
        if let Some(allowance) = self.allowance {
            employee.allowance = allowance;
        }
        if let Some(esi_rate) = self.esi_rate {
            employee.esi_rate = esi_rate;
        }
        if let Some(pf_rate) = self.pf_rate {
            employee.pf_rate = pf_rate;
        }
        if let Some(other_deduction) = self.other_deduction {
            employee.other_deduction = other_deduction;
        }
        if let Some(attendance) = self.attendance {
            employee.attendance = attendance;
        }
    }
}
