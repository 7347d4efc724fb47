//! Request types for the billing engine API.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculation::SalaryPeriodInput;
use crate::models::{AttendanceAggregate, DateRange, DeductionBreakdown, PaymentSchedule, SalaryRateInfo};

/// Request body for `POST /project/estimate`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EstimateRequest {
    /// The payment schedule from the project form.
    pub schedule: PaymentSchedule,
    /// The project date range, possibly still half-filled.
    #[serde(default = "DateRange::unset")]
    pub range: DateRange,
}

/// Request body for `POST /invoice/preview`.
///
/// Item amounts are recomputed server-side; whatever the client sent in
/// the `amount` fields is ignored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InvoicePreviewRequest {
    /// The raw line items as entered.
    pub items: Vec<crate::models::LineItem>,
    /// Amount already paid.
    #[serde(default)]
    pub paid_amount: Decimal,
}

/// Request body for `POST /salary/calculate`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SalaryCalculationRequest {
    /// Worker rate metadata from the worker collaborator.
    pub rate_info: SalaryRateInfo,
    /// Attendance aggregate from the attendance collaborator.
    pub attendance: AttendanceAggregate,
    /// Itemised deductions entered on the form.
    #[serde(default)]
    pub deductions: DeductionBreakdown,
    /// Ad-hoc deduction figure for generated invoices.
    #[serde(default)]
    pub adhoc_deductions: Decimal,
}

/// Request body for `POST /salary/validate-period`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PeriodValidationRequest {
    /// The salary-generation form fields.
    #[serde(flatten)]
    pub input: SalaryPeriodInput,
    /// Gross salary from the preview, re-checked against deductions.
    #[serde(default)]
    pub gross_salary: Decimal,
}
