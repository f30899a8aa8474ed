//! Monthly salary calculation.
//!
//! This module computes a full salary breakdown for one employee over one
//! period: attendance-weighted gross pay, the ESI and PF deductions, the
//! flat other-deduction, and the resulting net. All currency results are
//! whole units; fractions are dropped, never rounded up.

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

use crate::error::{EngineError, EngineResult};
use crate::models::Employee;

use super::attendance_count::{attendance_count, validate_period};

/// One basis point denominator: rates are stored as 1/10000ths.
const BASIS_POINTS: i64 = 10_000;

/// The complete salary breakdown for one employee and one period.
#[derive(Debug, Clone, PartialEq)]
pub struct SalaryBreakdown {
    /// Payable days worked, in half-day increments.
    pub attendance_count: Decimal,
    /// Full monthly compensation divided by the period length.
    pub daily_rate: Decimal,
    /// Attendance-weighted gross pay, floored to whole currency.
    pub gross: i64,
    /// ESI deduction, floored independently.
    pub esi: i64,
    /// PF deduction, floored independently.
    pub pf: i64,
    /// Flat other-deduction taken from the employee record.
    pub other_deduction: i64,
    /// Sum of ESI, PF, and the other-deduction.
    pub total_deduction: i64,
    /// Gross minus total deductions; may be negative.
    pub net: i64,
}

/// Computes the daily rate: full monthly compensation over the period.
///
/// The rate is kept as a `Decimal` so downstream math can floor exactly
/// once; callers that display it apply their own formatting.
pub fn daily_rate(basic: i64, hra: i64, allowance: i64, total_days: i64) -> EngineResult<Decimal> {
    validate_period(total_days)?;
    // Summed in Decimal; components near i64::MAX must not wrap here
    let compensation = Decimal::from(basic) + Decimal::from(hra) + Decimal::from(allowance);
    Ok(compensation / Decimal::from(total_days))
}

/// Computes the full salary breakdown for one employee.
///
/// Gross pay is the attendance-weighted share of the monthly
/// compensation, floored exactly once:
///
/// ```text
/// gross = floor(compensation * count / total_days)
/// ```
///
/// The multiplication happens before the division so the floor sees the
/// mathematically exact value; counts move in halves, so the numerator is
/// exact in `Decimal`. ESI and PF are then floored independently from the
/// floored gross, and the net is never clamped at zero.
///
/// # Example
///
/// ```
/// use salary_engine::calculation::calculate_salary;
/// use salary_engine::models::{AttendanceCode, AttendanceSheet, Employee};
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
///     attendance: AttendanceSheet::filled(AttendanceCode::Present),
/// };
///
/// let breakdown = calculate_salary(&employee, 31).unwrap();
/// assert_eq!(breakdown.gross, 32000);
/// assert_eq!(breakdown.esi, 5600);
/// assert_eq!(breakdown.pf, 3840);
/// assert_eq!(breakdown.net, 22560);
/// ```
pub fn calculate_salary(employee: &Employee, total_days: i64) -> EngineResult<SalaryBreakdown> {
    // Step 1: count payable days over the period
    let count = attendance_count(&employee.attendance, total_days)?;
    let rate = daily_rate(employee.basic, employee.hra, employee.allowance, total_days)?;

    // Step 2: gross = floor(compensation * count / total_days), floored once
    let compensation = employee.monthly_compensation();
    let gross_decimal = (compensation * count / Decimal::from(total_days)).floor();
    let gross = to_currency(gross_decimal, "gross")?;

    // Step 3: statutory deductions, each floored independently from gross
    let esi = to_currency(basis_point_share(gross_decimal, employee.esi_rate), "esi")?;
    let pf = to_currency(basis_point_share(gross_decimal, employee.pf_rate), "pf")?;

    // Step 4: totals; net may go negative and stays that way
    let total_deduction = esi
        .checked_add(pf)
        .and_then(|sum| sum.checked_add(employee.other_deduction))
        .ok_or_else(|| EngineError::Calculation {
            message: "total deduction does not fit in currency range".to_string(),
        })?;
    let net = gross
        .checked_sub(total_deduction)
        .ok_or_else(|| EngineError::Calculation {
            message: "net salary does not fit in currency range".to_string(),
        })?;

    Ok(SalaryBreakdown {
        attendance_count: count,
        daily_rate: rate,
        gross,
        esi,
        pf,
        other_deduction: employee.other_deduction,
        total_deduction,
        net,
    })
}

/// Applies a basis-point rate to an amount and floors the result.
fn basis_point_share(amount: Decimal, rate_bp: u32) -> Decimal {
    (amount * Decimal::from(rate_bp) / Decimal::from(BASIS_POINTS)).floor()
}

/// Converts a floored decimal into whole currency, rejecting values that
/// do not fit the integer range.
fn to_currency(value: Decimal, field: &str) -> EngineResult<i64> {
    value.to_i64().ok_or_else(|| EngineError::Calculation {
        message: format!("{} value {} does not fit in currency range", field, value),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{AttendanceCode, AttendanceSheet};
    use rust_decimal_macros::dec;
    use uuid::Uuid;

    fn create_test_employee(basic: i64, hra: i64, allowance: i64) -> Employee {
        Employee {
            id: Uuid::new_v4(),
            name: "राम कुमार".to_string(),
            position: "Manager".to_string(),
            basic,
            hra,
            allowance,
            esi_rate: 1750,
            pf_rate: 1200,
            other_deduction: 0,
            attendance: AttendanceSheet::filled(AttendanceCode::Present),
        }
    }

    /// SL-001: full month at the reference compensation
    #[test]
    fn test_full_month_reference_values() {
        let employee = create_test_employee(25000, 5000, 2000);
        let breakdown = calculate_salary(&employee, 31).unwrap();

        assert_eq!(breakdown.attendance_count, dec!(31));
        assert_eq!(breakdown.gross, 32000);
        // 32000 * 1750 / 10000 = 5600, 32000 * 1200 / 10000 = 3840
        assert_eq!(breakdown.esi, 5600);
        assert_eq!(breakdown.pf, 3840);
        assert_eq!(breakdown.other_deduction, 0);
        assert_eq!(breakdown.total_deduction, 9440);
        assert_eq!(breakdown.net, 22560);
    }

    /// SL-002: partial month floors every derived figure
    #[test]
    fn test_partial_month_floors_once() {
        let mut employee = create_test_employee(25000, 5000, 2000);
        employee.attendance = AttendanceSheet::default();
        for day in 0..15 {
            employee.attendance.set(day, AttendanceCode::Present);
        }

        let breakdown = calculate_salary(&employee, 31).unwrap();

        // gross = floor(32000 * 15 / 31) = floor(15483.87) = 15483
        assert_eq!(breakdown.gross, 15483);
        // esi = floor(15483 * 0.175) = floor(2709.525) = 2709
        assert_eq!(breakdown.esi, 2709);
        // pf = floor(15483 * 0.12) = floor(1857.96) = 1857
        assert_eq!(breakdown.pf, 1857);
        assert_eq!(breakdown.total_deduction, 4566);
        assert_eq!(breakdown.net, 10917);
    }

    /// SL-003: gross floors the exact value, not a pre-rounded rate
    #[test]
    fn test_gross_multiplies_before_dividing() {
        // rate = 100/3 = 33.33...; a floored rate would give 33 * 3 = 99
        let mut employee = create_test_employee(100, 0, 0);
        employee.attendance = AttendanceSheet::default();
        for day in 0..3 {
            employee.attendance.set(day, AttendanceCode::Present);
        }

        let breakdown = calculate_salary(&employee, 3).unwrap();
        assert_eq!(breakdown.gross, 100);
    }

    /// SL-004: half-days and double shifts weight the gross
    #[test]
    fn test_half_day_and_double_shift_weights() {
        let mut employee = create_test_employee(3100, 0, 0);
        employee.attendance = AttendanceSheet::default();
        employee.attendance.set(0, AttendanceCode::HalfDay);

        // gross = floor(3100 * 0.5 / 31) = 50
        let breakdown = calculate_salary(&employee, 31).unwrap();
        assert_eq!(breakdown.attendance_count, dec!(0.5));
        assert_eq!(breakdown.gross, 50);

        employee.attendance.set(0, AttendanceCode::DoubleShift);

        // gross = floor(3100 * 2 / 31) = 200
        let breakdown = calculate_salary(&employee, 31).unwrap();
        assert_eq!(breakdown.attendance_count, dec!(2));
        assert_eq!(breakdown.gross, 200);
    }

    /// SL-005: net goes negative when deductions exceed gross
    #[test]
    fn test_net_may_be_negative() {
        let mut employee = create_test_employee(1000, 0, 0);
        employee.other_deduction = 100;
        employee.attendance = AttendanceSheet::default();
        employee.attendance.set(0, AttendanceCode::Present);

        let breakdown = calculate_salary(&employee, 30).unwrap();

        // gross = floor(1000 / 30) = 33; esi = 5, pf = 3
        assert_eq!(breakdown.gross, 33);
        assert_eq!(breakdown.esi, 5);
        assert_eq!(breakdown.pf, 3);
        assert_eq!(breakdown.total_deduction, 108);
        assert_eq!(breakdown.net, -75);
    }

    /// SL-006: zero attendance produces zero gross and negative net only
    /// through the flat deduction
    #[test]
    fn test_zero_attendance() {
        let mut employee = create_test_employee(25000, 5000, 2000);
        employee.other_deduction = 250;
        employee.attendance = AttendanceSheet::default();

        let breakdown = calculate_salary(&employee, 31).unwrap();

        assert_eq!(breakdown.attendance_count, dec!(0));
        assert_eq!(breakdown.gross, 0);
        assert_eq!(breakdown.esi, 0);
        assert_eq!(breakdown.pf, 0);
        assert_eq!(breakdown.net, -250);
    }

    /// SL-007: period bounds propagate from the count
    #[test]
    fn test_invalid_period_rejected() {
        let employee = create_test_employee(25000, 5000, 2000);
        assert!(matches!(
            calculate_salary(&employee, 0),
            Err(EngineError::InvalidPeriod { total_days: 0 })
        ));
        assert!(matches!(
            calculate_salary(&employee, 32),
            Err(EngineError::InvalidPeriod { total_days: 32 })
        ));
    }

    /// SL-008: zero rates deduct nothing
    #[test]
    fn test_zero_rates_deduct_nothing() {
        let mut employee = create_test_employee(25000, 5000, 2000);
        employee.esi_rate = 0;
        employee.pf_rate = 0;

        let breakdown = calculate_salary(&employee, 31).unwrap();
        assert_eq!(breakdown.esi, 0);
        assert_eq!(breakdown.pf, 0);
        assert_eq!(breakdown.net, breakdown.gross);
    }

    #[test]
    fn test_daily_rate_divides_compensation() {
        assert_eq!(daily_rate(25000, 5000, 2000, 31).unwrap(), dec!(32000) / dec!(31));
        assert_eq!(daily_rate(3000, 0, 0, 30).unwrap(), dec!(100));
        assert!(matches!(
            daily_rate(3000, 0, 0, 0),
            Err(EngineError::InvalidPeriod { total_days: 0 })
        ));
    }

    #[test]
    fn test_deductions_floor_independently() {
        // gross = 99: esi = floor(17.325) = 17, pf = floor(11.88) = 11,
        // while floor(17.325 + 11.88) would be 29
        let mut employee = create_test_employee(99, 0, 0);
        employee.attendance = AttendanceSheet::filled(AttendanceCode::Present);

        let breakdown = calculate_salary(&employee, 1).unwrap();
        assert_eq!(breakdown.gross, 99);
        assert_eq!(breakdown.esi, 17);
        assert_eq!(breakdown.pf, 11);
        assert_eq!(breakdown.total_deduction, 28);
    }

    /// SL-009: compensation at the integer ceiling errors instead of
    /// wrapping
    #[test]
    fn test_extreme_compensation_is_an_error_not_a_panic() {
        let employee = create_test_employee(i64::MAX, i64::MAX, i64::MAX);

        assert!(matches!(
            calculate_salary(&employee, 31),
            Err(EngineError::Calculation { .. })
        ));
        assert!(daily_rate(i64::MAX, i64::MAX, i64::MAX, 31).is_ok());
    }

    /// SL-010: deduction totals at the integer ceiling error instead of
    /// wrapping
    #[test]
    fn test_extreme_deductions_are_an_error_not_a_panic() {
        // gross lands exactly on i64::MAX, so the flat deduction pushes
        // the total past the representable range
        let mut employee = create_test_employee(i64::MAX, 0, 0);
        employee.other_deduction = i64::MAX;

        assert!(matches!(
            calculate_salary(&employee, 31),
            Err(EngineError::Calculation { .. })
        ));
    }
}
