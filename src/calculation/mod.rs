//! Calculation logic for the salary engine.
//!
//! This module contains the pure calculation functions: attendance
//! counting over a period, daily-rate derivation, and the full monthly
//! salary breakdown with ESI/PF deductions. Nothing here performs I/O;
//! the stores and HTTP layer feed records in and carry results out.

mod attendance_count;
mod salary;

pub use attendance_count::{attendance_count, validate_period};
pub use salary::{SalaryBreakdown, calculate_salary, daily_rate};
