//! Billing and payroll computation engine.
//!
//! This crate provides the computational core of a workforce back-office
//! application: project budget estimation from a payment schedule, invoice
//! line-item totals with currency-safe rounding, salary breakdowns derived
//! from attendance aggregates, and workspace-settings-driven currency and
//! date formatting.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod error;
pub mod models;
pub mod money;
pub mod settings;
