//! HTTP API module for the billing and payroll engine.
//!
//! The engine itself is a library of pure calculators; this module is the
//! request-handler layer that exposes them to the project, invoice and
//! salary screens over JSON.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{
    EstimateRequest, InvoicePreviewRequest, PeriodValidationRequest, SalaryCalculationRequest,
};
pub use response::{ApiError, EstimateResponse, InvoicePreviewResponse, SalaryResponse};
pub use state::AppState;
