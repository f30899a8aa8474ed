//! Core data models for the salary engine.
//!
//! This module contains all the domain models used throughout the engine.

mod attendance;
mod designation;
mod employee;
mod salary_sheet;

pub use attendance::{ATTENDANCE_SLOTS, AttendanceCode, AttendanceSchema, AttendanceSheet};
pub use designation::{Designation, DesignationPatch, NewDesignation};
pub use employee::{
    DEFAULT_ESI_RATE_BP, DEFAULT_PF_RATE_BP, Employee, EmployeePatch, NewEmployee,
};
pub use salary_sheet::{NewSalarySheet, SalarySheet, SalarySheetPatch};
