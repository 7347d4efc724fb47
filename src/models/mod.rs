//! Core data models for the billing and payroll engine.
//!
//! This module contains all the value objects used throughout the engine.
//! Calculators own no persistent state; every entity here is constructed
//! fresh per call and owned by the caller.

mod date_range;
mod invoice;
mod salary;
mod schedule;

pub use date_range::DateRange;
pub use invoice::{Invoice, InvoiceStatus, LineItem};
pub use salary::{
    AttendanceAggregate, DeductionBreakdown, PeriodSuggestion, SalaryBreakdown, SalaryRateInfo,
    SalaryType,
};
pub use schedule::{PaymentSchedule, PaymentType};
