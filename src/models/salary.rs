//! Salary and attendance models.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::DateRange;

/// How a worker's base rate is expressed.
///
/// Rate semantics are resolved by the caller before invoking the engine:
/// a monthly-rated worker's rate arrives already divided down to a daily
/// figure, so the breakdown engine only ever multiplies rate by the
/// present-day count it is given.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SalaryType {
    /// Paid per day present.
    Daily,
    /// Monthly salary, pre-converted to a daily figure by the caller.
    Monthly,
    /// Paid per hour; the caller supplies hour-equivalent present units.
    Hourly,
}

/// Rate metadata for one worker, supplied by the worker collaborator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalaryRateInfo {
    /// How the base rate is expressed.
    pub salary_type: SalaryType,
    /// The base rate per present day (or per hour-equivalent unit).
    pub base_rate: Decimal,
    /// Overtime rate per hour, if the worker has one.
    #[serde(default)]
    pub overtime_rate: Option<Decimal>,
    /// One-off bonus for the period.
    #[serde(default)]
    pub bonus: Option<Decimal>,
    /// Allowances for the period.
    #[serde(default)]
    pub allowances: Option<Decimal>,
}

/// Already-aggregated attendance for a worker over a salary period.
///
/// Supplied by the attendance collaborator and treated as read-only
/// input; which days were present and how overtime hours were derived
/// from raw time logs is that service's business.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttendanceAggregate {
    /// Working days in the period according to the attendance service.
    pub working_days_in_period: u32,
    /// Days the worker was present.
    pub present_days: u32,
    /// Days the worker was absent.
    pub absent_days: u32,
    /// Overtime hours accumulated over the period.
    pub overtime_hours: Decimal,
}

/// Itemised deductions entered against a salary period.
///
/// Each sub-item is supplied independently; the engine only sums them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DeductionBreakdown {
    /// Provident fund contribution.
    #[serde(default)]
    pub provident_fund: Decimal,
    /// Employee state insurance.
    #[serde(default)]
    pub esi: Decimal,
    /// Income tax withheld.
    #[serde(default)]
    pub tax: Decimal,
    /// Salary advances being recovered.
    #[serde(default)]
    pub advances: Decimal,
    /// Half-day deduction.
    #[serde(default)]
    pub half_day: Decimal,
    /// Anything else.
    #[serde(default)]
    pub other: Decimal,
}

impl DeductionBreakdown {
    /// Sums every sub-item.
    pub fn total(&self) -> Decimal {
        self.provident_fund + self.esi + self.tax + self.advances + self.half_day + self.other
    }
}

/// The computed salary breakdown for one worker and period.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalaryBreakdown {
    /// How the base rate was expressed.
    pub salary_type: SalaryType,
    /// The rate the base pay was computed from.
    pub base_salary_rate: Decimal,
    /// `round2(base_salary_rate * present_days)`.
    pub base_salary_amount: Decimal,
    /// The overtime rate applied (zero when the worker has none).
    pub overtime_rate: Decimal,
    /// `round2(overtime_rate * overtime_hours)`.
    pub overtime_amount: Decimal,
    /// Bonus included in gross.
    pub bonus: Decimal,
    /// Allowances included in gross.
    pub allowances: Decimal,
    /// Base + overtime + bonus + allowances.
    pub gross_salary: Decimal,
    /// Total deductions, capped at gross.
    pub deductions: Decimal,
    /// `gross_salary - deductions`.
    pub net_pay: Decimal,
}

/// A pre-computed candidate date range offered to speed up salary-invoice
/// generation (e.g. "This month").
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeriodSuggestion {
    /// Display label for the suggestion.
    pub label: String,
    /// The suggested period.
    pub range: DateRange,
}
