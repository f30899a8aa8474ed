//! Bulk attendance operations across the whole register.
//!
//! Both operations fan out over every employee record independently and
//! are deliberately non-atomic: a failure on one record never rolls back
//! the records already written. Callers get the aggregate outcome.

use tracing::warn;
use uuid::Uuid;

use crate::error::{EngineError, EngineResult};
use crate::models::{AttendanceCode, AttendanceSheet};

use super::EmployeeStore;

/// Aggregate result of a bulk attendance operation.
#[derive(Debug)]
pub struct BulkOutcome {
    /// Number of records successfully written.
    pub updated: usize,
    /// Records whose mutation failed, with the failure.
    pub failures: Vec<(Uuid, EngineError)>,
}

/// Sets one day's code on every employee's sheet.
///
/// The day index is validated once, before any record is touched.
/// Records deleted between the listing and their own write are skipped.
pub async fn mark_all(
    store: &dyn EmployeeStore,
    day: i64,
    code: AttendanceCode,
) -> EngineResult<BulkOutcome> {
    let slot = AttendanceSheet::day_index(day)?;

    let mut outcome = BulkOutcome {
        updated: 0,
        failures: Vec::new(),
    };
    for employee in store.list().await? {
        let result = store
            .apply(
                employee.id,
                Box::new(move |record| {
                    record.attendance.set(slot, code);
                    Ok(())
                }),
            )
            .await;
        match result {
            Ok(Some(_)) => outcome.updated += 1,
            Ok(None) => {}
            Err(error) => {
                warn!(employee_id = %employee.id, %error, "bulk day marking failed for record");
                outcome.failures.push((employee.id, error));
            }
        }
    }
    Ok(outcome)
}

/// Replaces every employee's whole sheet with 31 copies of `code`.
///
/// The caller passes the configured schema's default code, so a reset
/// under the legacy generation fills with `P` and under the current one
/// with `NONE`.
pub async fn reset_attendance(
    store: &dyn EmployeeStore,
    code: AttendanceCode,
) -> EngineResult<BulkOutcome> {
    let mut outcome = BulkOutcome {
        updated: 0,
        failures: Vec::new(),
    };
    for employee in store.list().await? {
        let result = store
            .apply(
                employee.id,
                Box::new(move |record| {
                    record.attendance = AttendanceSheet::filled(code);
                    Ok(())
                }),
            )
            .await;
        match result {
            Ok(Some(_)) => outcome.updated += 1,
            Ok(None) => {}
            Err(error) => {
                warn!(employee_id = %employee.id, %error, "attendance reset failed for record");
                outcome.failures.push((employee.id, error));
            }
        }
    }
    Ok(outcome)
}
