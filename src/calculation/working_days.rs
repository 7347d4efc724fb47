//! Working-days calculation.
//!
//! Counts calendar days in a project date range and caps them to a
//! working-days-per-week schedule. The partial trailing week is counted
//! as leading working days up to the weekly cap; the policy is a flat
//! approximation and deliberately not calendar aware (it does not know
//! which weekday the range starts on).

use serde::{Deserialize, Serialize};

use crate::models::DateRange;

/// The result of a working-days calculation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkingDaysResult {
    /// Total calendar days covered by the range, inclusive.
    pub total_days: i64,
    /// Days that count toward pay under the weekly cap.
    pub working_days: i64,
}

/// Computes total and working days for a date range.
///
/// `total_days` is the inclusive calendar day count (0 when the range is
/// unset or inverted). The range decomposes into full weeks plus a
/// remainder; each full week contributes `working_days_per_week` days and
/// the remainder contributes up to the same cap.
///
/// `working_days_per_week` is clamped to `1..=7` before use; out-of-range
/// caller input is silently clamped, not rejected.
///
/// # Examples
///
/// ```
/// use billing_engine::calculation::compute_working_days;
/// use billing_engine::models::DateRange;
/// use chrono::NaiveDate;
///
/// let range = DateRange::between(
///     NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
///     NaiveDate::from_ymd_opt(2024, 1, 14).unwrap(),
/// );
/// let result = compute_working_days(&range, 6);
/// assert_eq!(result.total_days, 14);
/// assert_eq!(result.working_days, 12);
/// ```
pub fn compute_working_days(range: &DateRange, working_days_per_week: u32) -> WorkingDaysResult {
    let cap = i64::from(working_days_per_week.clamp(1, 7));
    let total_days = range.total_days();

    let full_weeks = total_days / 7;
    let remaining_days = total_days % 7;
    let working_days = full_weeks * cap + remaining_days.min(cap);

    WorkingDaysResult {
        total_days,
        working_days,
    }
}
