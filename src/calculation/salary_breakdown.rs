//! Salary breakdown calculation.
//!
//! Derives base pay, overtime pay, gross, deductions and net pay from a
//! worker's rate metadata and an already-aggregated attendance period.
//! Rate semantics (daily versus monthly-derived-daily) are resolved by
//! the caller before invocation; this engine only multiplies the rate by
//! the present-day count it is given.

use rust_decimal::Decimal;

use crate::models::{AttendanceAggregate, DeductionBreakdown, SalaryBreakdown, SalaryRateInfo};
use crate::money::{or_zero, round2};

/// Computes the salary breakdown for one worker and period.
///
/// - `base_salary_amount = round2(base_rate * present_days)`
/// - `overtime_amount = round2(overtime_rate * overtime_hours)`
/// - `gross_salary = base + overtime + bonus + allowances`
/// - `deductions = itemised sub-totals + the ad-hoc figure`, capped at
///   gross so net pay never goes negative
/// - `net_pay = gross_salary - deductions`
///
/// Deductions above gross are a validation failure (see
/// [`super::validate_salary_period`]); the cap here keeps the preview
/// usable while the user is still editing the figures.
///
/// # Examples
///
/// ```
/// use billing_engine::calculation::calculate_salary_breakdown;
/// use billing_engine::models::{
///     AttendanceAggregate, DeductionBreakdown, SalaryRateInfo, SalaryType,
/// };
/// use rust_decimal::Decimal;
///
/// let rate_info = SalaryRateInfo {
///     salary_type: SalaryType::Daily,
///     base_rate: Decimal::from(800),
///     overtime_rate: Some(Decimal::from(120)),
///     bonus: None,
///     allowances: None,
/// };
/// let attendance = AttendanceAggregate {
///     working_days_in_period: 26,
///     present_days: 20,
///     absent_days: 6,
///     overtime_hours: Decimal::from(5),
/// };
///
/// let breakdown = calculate_salary_breakdown(
///     &rate_info,
///     &attendance,
///     &DeductionBreakdown::default(),
///     Decimal::from(300),
/// );
/// assert_eq!(breakdown.gross_salary, Decimal::from(16600));
/// assert_eq!(breakdown.net_pay, Decimal::from(16300));
/// ```
pub fn calculate_salary_breakdown(
    rate_info: &SalaryRateInfo,
    attendance: &AttendanceAggregate,
    itemised_deductions: &DeductionBreakdown,
    adhoc_deductions: Decimal,
) -> SalaryBreakdown {
    let base_salary_amount = round2(rate_info.base_rate * Decimal::from(attendance.present_days));

    let overtime_rate = or_zero(rate_info.overtime_rate);
    let overtime_amount = round2(overtime_rate * attendance.overtime_hours);

    let bonus = or_zero(rate_info.bonus);
    let allowances = or_zero(rate_info.allowances);
    let gross_salary = base_salary_amount + overtime_amount + bonus + allowances;

    let requested = itemised_deductions.total() + adhoc_deductions;
    let deductions = requested.clamp(Decimal::ZERO, gross_salary);

    SalaryBreakdown {
        salary_type: rate_info.salary_type,
        base_salary_rate: rate_info.base_rate,
        base_salary_amount,
        overtime_rate,
        overtime_amount,
        bonus,
        allowances,
        gross_salary,
        deductions,
        net_pay: gross_salary - deductions,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::SalaryType;
    use proptest::prelude::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn daily_rate(base: &str, overtime: Option<&str>) -> SalaryRateInfo {
        SalaryRateInfo {
            salary_type: SalaryType::Daily,
            base_rate: dec(base),
            overtime_rate: overtime.map(dec),
            bonus: None,
            allowances: None,
        }
    }

    fn attendance(present: u32, overtime_hours: &str) -> AttendanceAggregate {
        AttendanceAggregate {
            working_days_in_period: 26,
            present_days: present,
            absent_days: 26 - present,
            overtime_hours: dec(overtime_hours),
        }
    }

    /// SB-001: 20 days at 800 with 5h overtime at 120 and 300 deductions
    #[test]
    fn test_reference_breakdown() {
        let breakdown = calculate_salary_breakdown(
            &daily_rate("800", Some("120")),
            &attendance(20, "5"),
            &DeductionBreakdown::default(),
            dec("300"),
        );

        assert_eq!(breakdown.base_salary_amount, dec("16000"));
        assert_eq!(breakdown.overtime_amount, dec("600"));
        assert_eq!(breakdown.gross_salary, dec("16600"));
        assert_eq!(breakdown.deductions, dec("300"));
        assert_eq!(breakdown.net_pay, dec("16300"));
    }

    /// SB-002: no overtime rate means zero overtime pay
    #[test]
    fn test_missing_overtime_rate_pays_nothing() {
        let breakdown = calculate_salary_breakdown(
            &daily_rate("800", None),
            &attendance(20, "5"),
            &DeductionBreakdown::default(),
            Decimal::ZERO,
        );
        assert_eq!(breakdown.overtime_rate, Decimal::ZERO);
        assert_eq!(breakdown.overtime_amount, Decimal::ZERO);
        assert_eq!(breakdown.gross_salary, dec("16000"));
    }

    /// SB-003: bonus and allowances land in gross
    #[test]
    fn test_bonus_and_allowances_in_gross() {
        let mut rate_info = daily_rate("800", None);
        rate_info.bonus = Some(dec("1000"));
        rate_info.allowances = Some(dec("250.50"));
        let breakdown = calculate_salary_breakdown(
            &rate_info,
            &attendance(20, "0"),
            &DeductionBreakdown::default(),
            Decimal::ZERO,
        );
        assert_eq!(breakdown.gross_salary, dec("17250.50"));
        assert_eq!(breakdown.net_pay, dec("17250.50"));
    }

    /// SB-004: itemised and ad-hoc deductions are summed
    #[test]
    fn test_itemised_plus_adhoc_deductions() {
        let itemised = DeductionBreakdown {
            provident_fund: dec("1800"),
            esi: dec("150"),
            tax: dec("500"),
            advances: dec("1000"),
            half_day: dec("400"),
            other: dec("50"),
        };
        let breakdown = calculate_salary_breakdown(
            &daily_rate("800", Some("120")),
            &attendance(20, "5"),
            &itemised,
            dec("300"),
        );
        assert_eq!(breakdown.deductions, dec("4200"));
        assert_eq!(breakdown.net_pay, dec("12400"));
    }

    /// SB-005: deductions are capped at gross; net never goes negative
    #[test]
    fn test_deductions_capped_at_gross() {
        let breakdown = calculate_salary_breakdown(
            &daily_rate("800", None),
            &attendance(2, "0"),
            &DeductionBreakdown::default(),
            dec("5000"),
        );
        assert_eq!(breakdown.gross_salary, dec("1600"));
        assert_eq!(breakdown.deductions, dec("1600"));
        assert_eq!(breakdown.net_pay, Decimal::ZERO);
    }

    /// SB-006: negative ad-hoc deductions clamp to zero in the preview
    #[test]
    fn test_negative_deductions_clamped_to_zero() {
        let breakdown = calculate_salary_breakdown(
            &daily_rate("800", None),
            &attendance(20, "0"),
            &DeductionBreakdown::default(),
            dec("-250"),
        );
        assert_eq!(breakdown.deductions, Decimal::ZERO);
        assert_eq!(breakdown.net_pay, dec("16000"));
    }

    /// SB-007: zero present days yield a zero breakdown
    #[test]
    fn test_zero_present_days() {
        let breakdown = calculate_salary_breakdown(
            &daily_rate("800", Some("120")),
            &attendance(0, "0"),
            &DeductionBreakdown::default(),
            Decimal::ZERO,
        );
        assert_eq!(breakdown.base_salary_amount, Decimal::ZERO);
        assert_eq!(breakdown.net_pay, Decimal::ZERO);
    }

    /// SB-008: fractional rates round half-away-from-zero
    #[test]
    fn test_fractional_rate_rounding() {
        let breakdown = calculate_salary_breakdown(
            &daily_rate("333.335", None),
            &attendance(3, "0"),
            &DeductionBreakdown::default(),
            Decimal::ZERO,
        );
        // 333.335 * 3 = 1000.005 -> 1000.01
        assert_eq!(breakdown.base_salary_amount, dec("1000.01"));
    }

    proptest! {
        /// net == gross - deductions and 0 <= deductions <= gross, always.
        #[test]
        fn prop_net_pay_invariant(
            rate_cents in 0i64..10_000_000,
            present in 0u32..31,
            overtime_hours in 0i64..200,
            adhoc_cents in -1_000_000i64..100_000_000,
        ) {
            let rate_info = SalaryRateInfo {
                salary_type: SalaryType::Daily,
                base_rate: Decimal::new(rate_cents, 2),
                overtime_rate: Some(dec("120")),
                bonus: None,
                allowances: None,
            };
            let attendance = AttendanceAggregate {
                working_days_in_period: 31,
                present_days: present,
                absent_days: 31 - present,
                overtime_hours: Decimal::from(overtime_hours),
            };
            let breakdown = calculate_salary_breakdown(
                &rate_info,
                &attendance,
                &DeductionBreakdown::default(),
                Decimal::new(adhoc_cents, 2),
            );

            prop_assert_eq!(breakdown.net_pay, breakdown.gross_salary - breakdown.deductions);
            prop_assert!(breakdown.deductions >= Decimal::ZERO);
            prop_assert!(breakdown.deductions <= breakdown.gross_salary);
            prop_assert!(breakdown.net_pay >= Decimal::ZERO);
        }
    }
}
