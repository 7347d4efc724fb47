//! Calculation logic for the billing and payroll engine.
//!
//! This module contains all the calculator functions: working-days
//! derivation for a project date range, budget estimation from a payment
//! schedule, invoice line-item editing and validation, and the salary
//! breakdown with its period validation and suggestions. Every function
//! here is a synchronous, side-effect-free transform over value objects;
//! re-invoking any of them with the same input always yields the same
//! result.

mod budget_estimate;
mod invoice_validation;
mod line_items;
mod salary_breakdown;
mod salary_period;
mod working_days;

pub use budget_estimate::{BudgetEstimate, estimate_budget};
pub use invoice_validation::{InvoiceDraft, validate_invoice};
pub use line_items::{
    add_item, invoice_total, normalize_items, normalized_total, remove_item, set_description,
    set_quantity, set_rate,
};
pub use salary_breakdown::calculate_salary_breakdown;
pub use salary_period::{
    MAX_PERIOD_DAYS, SalaryPeriodInput, suggest_periods, validate_salary_period,
};
pub use working_days::{WorkingDaysResult, compute_working_days};
