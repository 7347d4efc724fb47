//! Response types for the billing engine API.
//!
//! This module defines the success payloads, the error response
//! structure, and the mapping from engine errors to HTTP statuses.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculation::BudgetEstimate;
use crate::error::EngineError;
use crate::models::{LineItem, SalaryBreakdown};

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Every validation violation found, when the error is a
    /// validation failure.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub violations: Vec<String>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            violations: Vec::new(),
        }
    }

    /// Creates a validation error carrying the full violation list.
    pub fn validation(violations: Vec<String>) -> Self {
        Self {
            code: "VALIDATION_ERROR".to_string(),
            message: "Validation failed".to_string(),
            violations,
        }
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }
}

/// API error with HTTP status code.
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<EngineError> for ApiErrorResponse {
    fn from(error: EngineError) -> Self {
        match error {
            EngineError::Validation { violations } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::validation(violations),
            },
            EngineError::InvalidLineItem { index, message } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::new(
                    "INVALID_LINE_ITEM",
                    format!("Invalid line item at index {}: {}", index, message),
                ),
            },
            EngineError::InvalidTransition { from, to } => ApiErrorResponse {
                status: StatusCode::CONFLICT,
                error: ApiError::new(
                    "INVALID_TRANSITION",
                    format!("Invalid invoice transition from {:?} to {:?}", from, to),
                ),
            },
            EngineError::SettingsNotFound { path } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::new(
                    "SETTINGS_ERROR",
                    format!("Settings file not found: {}", path),
                ),
            },
            EngineError::SettingsParseError { path, message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::new(
                    "SETTINGS_ERROR",
                    format!("Failed to parse settings file '{}': {}", path, message),
                ),
            },
        }
    }
}

/// Response body for `POST /project/estimate`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EstimateResponse {
    /// The computed estimate.
    #[serde(flatten)]
    pub estimate: BudgetEstimate,
    /// The estimated total rendered through the workspace settings.
    pub estimated_total_display: String,
}

/// Response body for `POST /invoice/preview`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InvoicePreviewResponse {
    /// The items with server-recomputed amounts.
    pub items: Vec<LineItem>,
    /// Rounded sum of the item amounts.
    pub total_amount: Decimal,
    /// Echo of the paid amount.
    pub paid_amount: Decimal,
    /// `total_amount - paid_amount`.
    pub balance_amount: Decimal,
    /// The total rendered through the workspace settings.
    pub total_display: String,
    /// The balance rendered through the workspace settings.
    pub balance_display: String,
}

/// Response body for the validation endpoints when no violation is found.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationOutcome {
    /// Always `true`; violations arrive as an error response instead.
    pub valid: bool,
}

impl ValidationOutcome {
    /// The passing outcome.
    pub fn passed() -> Self {
        Self { valid: true }
    }
}

/// Response body for `POST /salary/calculate`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SalaryResponse {
    /// The computed breakdown.
    #[serde(flatten)]
    pub breakdown: SalaryBreakdown,
    /// Gross salary rendered through the workspace settings.
    pub gross_salary_display: String,
    /// Net pay rendered through the workspace settings.
    pub net_pay_display: String,
}
