//! Project budget estimation from a payment schedule.
//!
//! Weekly and monthly estimates use flat `ceil(total_days / 7)` and
//! `ceil(total_days / 30)` unit counts. These are heuristics carried over
//! for compatibility with the billing screens; they ignore which weekday
//! the range starts on and use a flat 30-day month.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{DateRange, PaymentSchedule, PaymentType};
use crate::money::round2;

use super::working_days::compute_working_days;

/// The result of a budget estimation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BudgetEstimate {
    /// The estimated project budget, rounded to two decimals. Zero when
    /// the schedule is incomplete.
    pub estimated_total: Decimal,
    /// Working days derived from the range and the weekly cap.
    pub working_days: i64,
    /// Total calendar days in the range.
    pub total_days: i64,
}

/// Estimates a project's budget from its payment schedule and date range.
///
/// Dispatch on the payment type:
/// - `Fixed` (and `Unknown`, the explicit fallback): the rate itself.
/// - `Daily`: `rate * working_days`.
/// - `Weekly`: `rate * max(1, ceil(total_days / 7))`.
/// - `Monthly`: `rate * max(1, ceil(total_days / 30))`.
///
/// An overtime addend of `overtime_rate * overtime_hours` is included
/// when both are present and positive.
///
/// An incomplete schedule — `rate <= 0`, `working_days_per_week` outside
/// `1..=7`, or a date-driven payment type with an unset range — still
/// returns a zero estimate rather than failing; the caller is responsible
/// for blocking submission on `estimated_total <= 0`. (The working-days
/// calculator clamps an out-of-range weekly cap; the estimator instead
/// treats it as a form the user has not finished filling in.)
///
/// # Examples
///
/// ```
/// use billing_engine::calculation::estimate_budget;
/// use billing_engine::models::{DateRange, PaymentSchedule, PaymentType};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let schedule = PaymentSchedule {
///     payment_type: PaymentType::Daily,
///     rate: Decimal::from(500),
///     working_days_per_week: 6,
///     overtime_rate: None,
///     overtime_hours: None,
/// };
/// let range = DateRange::between(
///     NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
///     NaiveDate::from_ymd_opt(2024, 1, 14).unwrap(),
/// );
///
/// let estimate = estimate_budget(&schedule, &range);
/// assert_eq!(estimate.estimated_total, Decimal::from(6000));
/// ```
pub fn estimate_budget(schedule: &PaymentSchedule, range: &DateRange) -> BudgetEstimate {
    let days = compute_working_days(range, schedule.working_days_per_week);

    let incomplete = schedule.rate <= Decimal::ZERO
        || !(1..=7).contains(&schedule.working_days_per_week);
    let base = if incomplete {
        Decimal::ZERO
    } else {
        match schedule.payment_type {
            PaymentType::Fixed | PaymentType::Unknown => schedule.rate,
            PaymentType::Daily => schedule.rate * Decimal::from(days.working_days),
            PaymentType::Weekly => schedule.rate * billing_units(days.total_days, 7),
            PaymentType::Monthly => schedule.rate * billing_units(days.total_days, 30),
        }
    };

    let overtime = match (schedule.overtime_rate, schedule.overtime_hours) {
        (Some(rate), Some(hours)) if rate > Decimal::ZERO && hours > Decimal::ZERO => rate * hours,
        _ => Decimal::ZERO,
    };

    // A zero base means the schedule is incomplete; the overtime addend
    // alone never produces a submittable estimate.
    let total = if base <= Decimal::ZERO {
        Decimal::ZERO
    } else {
        base + overtime
    };
    let estimated_total = round2(total);

    BudgetEstimate {
        estimated_total,
        working_days: days.working_days,
        total_days: days.total_days,
    }
}

/// Billing unit count: `max(1, ceil(total_days / unit))`, or zero for an
/// unset range.
fn billing_units(total_days: i64, unit: i64) -> Decimal {
    if total_days <= 0 {
        return Decimal::ZERO;
    }
    Decimal::from(((total_days + unit - 1) / unit).max(1))
}
