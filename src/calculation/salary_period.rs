//! Salary period validation and period suggestions.
//!
//! The period checks run twice in the screens that use them: once before
//! showing the breakdown preview and again at generation time, because
//! the user may edit deductions after previewing.

use chrono::{Datelike, Days, NaiveDate};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};
use crate::models::{DateRange, PeriodSuggestion};

/// The longest salary period the screens allow, in days.
pub const MAX_PERIOD_DAYS: i64 = 31;

/// A salary-generation form as it stands, before generation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalaryPeriodInput {
    /// The selected worker, if any.
    #[serde(default)]
    pub worker_id: Option<String>,
    /// Period start, if chosen.
    #[serde(default)]
    pub period_from: Option<NaiveDate>,
    /// Period end, if chosen.
    #[serde(default)]
    pub period_to: Option<NaiveDate>,
    /// Total deductions as currently entered.
    #[serde(default)]
    pub deductions: Decimal,
}

/// Validates a salary period, collecting every violation.
///
/// Fails when: no worker is selected; either period bound is missing;
/// the period is inverted; the period ends after `today`; the period is
/// longer than 31 days; deductions are negative; deductions exceed
/// `gross_salary`.
///
/// `today` is supplied by the caller so the check stays a pure function.
///
/// # Errors
///
/// [`EngineError::Validation`] carrying the full violation list.
pub fn validate_salary_period(
    input: &SalaryPeriodInput,
    gross_salary: Decimal,
    today: NaiveDate,
) -> EngineResult<()> {
    let mut violations = Vec::new();

    if input
        .worker_id
        .as_deref()
        .is_none_or(|id| id.trim().is_empty())
    {
        violations.push("A worker must be selected".to_string());
    }

    match (input.period_from, input.period_to) {
        (None, _) | (_, None) => {
            violations.push("Both salary period dates are required".to_string());
        }
        (Some(from), Some(to)) => {
            if from > to {
                violations.push("Salary period start cannot be after its end".to_string());
            } else {
                let days = (to - from).num_days() + 1;
                if days > MAX_PERIOD_DAYS {
                    violations.push("Salary period cannot exceed 31 days".to_string());
                }
            }
            if to > today {
                violations.push("Salary period cannot end in the future".to_string());
            }
        }
    }

    if input.deductions < Decimal::ZERO {
        violations.push("Deductions cannot be negative".to_string());
    } else if input.deductions > gross_salary {
        violations.push("Deductions cannot exceed gross salary".to_string());
    }

    if violations.is_empty() {
        Ok(())
    } else {
        Err(EngineError::validation(violations))
    }
}

/// Pre-computed candidate periods offered on the salary-generation screen.
///
/// All suggestions end on or before `today` so they pass the
/// future-period check as-is.
pub fn suggest_periods(today: NaiveDate) -> Vec<PeriodSuggestion> {
    let mut suggestions = Vec::new();

    if let Some(first_of_month) = today.with_day(1) {
        suggestions.push(PeriodSuggestion {
            label: "This month".to_string(),
            range: DateRange::between(first_of_month, today),
        });

        if let Some(last_month_end) = first_of_month.pred_opt() {
            if let Some(last_month_start) = last_month_end.with_day(1) {
                suggestions.push(PeriodSuggestion {
                    label: "Last month".to_string(),
                    range: DateRange::between(last_month_start, last_month_end),
                });
            }
        }
    }

    if let Some(week_ago) = today.checked_sub_days(Days::new(6)) {
        suggestions.push(PeriodSuggestion {
            label: "Last 7 days".to_string(),
            range: DateRange::between(week_ago, today),
        });
    }

    suggestions
}
