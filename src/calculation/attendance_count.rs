//! Attendance count calculation.
//!
//! Sums the day weights of an attendance sheet over the days of the
//! period. The count is the number of payable days, so half-days and
//! double shifts contribute 0.5 and 2.0 respectively.

use rust_decimal::Decimal;

use crate::error::{EngineError, EngineResult};
use crate::models::{ATTENDANCE_SLOTS, AttendanceSheet};

/// Validates a period length against the representable range.
///
/// Every monthly calculation works over `total_days` slots, so a period
/// outside `[1, 31]` is rejected before any slot is read.
pub fn validate_period(total_days: i64) -> EngineResult<()> {
    if (1..=ATTENDANCE_SLOTS as i64).contains(&total_days) {
        Ok(())
    } else {
        Err(EngineError::InvalidPeriod { total_days })
    }
}

/// Sums the attendance weights over the first `total_days` slots.
///
/// Slots at or beyond `total_days` are never read, so markings left over
/// from a longer month cannot leak into a shorter one. The result is in
/// `[0, 2 * total_days]` and moves in half-day increments.
///
/// # Example
///
/// ```
/// use rust_decimal::Decimal;
/// use salary_engine::calculation::attendance_count;
/// use salary_engine::models::{AttendanceCode, AttendanceSheet};
///
/// let mut sheet = AttendanceSheet::default();
/// sheet.set(0, AttendanceCode::Present);
/// sheet.set(1, AttendanceCode::HalfDay);
///
/// let count = attendance_count(&sheet, 30).unwrap();
/// assert_eq!(count, Decimal::new(15, 1));
/// ```
pub fn attendance_count(sheet: &AttendanceSheet, total_days: i64) -> EngineResult<Decimal> {
    validate_period(total_days)?;

    let count = sheet.codes()[..total_days as usize]
        .iter()
        .map(|code| code.day_weight())
        .sum();
    Ok(count)
}
