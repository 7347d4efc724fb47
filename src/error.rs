//! Error types for the billing and payroll computation engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate.
//! Validation errors collect every violation found rather than stopping at
//! the first, so a caller can surface the complete list to the user.

use thiserror::Error;

use crate::models::InvoiceStatus;

/// The main error type for the billing engine.
///
/// All operations in the engine return this error type, making it easy
/// to handle errors consistently throughout the application.
///
/// # Example
///
/// ```
/// use billing_engine::error::EngineError;
///
/// let error = EngineError::SettingsNotFound {
///     path: "/missing/workspace.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Settings file not found: /missing/workspace.yaml");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Caller input failed validation. Every violation found is listed,
    /// not just the first.
    #[error("Validation failed: {}", violations.join("; "))]
    Validation {
        /// Every violation found, in the order the checks run.
        violations: Vec<String>,
    },

    /// A line-item operation targeted an item that cannot be edited.
    #[error("Invalid line item at index {index}: {message}")]
    InvalidLineItem {
        /// The index the operation targeted.
        index: usize,
        /// A description of what made the operation invalid.
        message: String,
    },

    /// An invoice status transition that the state machine does not allow.
    #[error("Invalid invoice transition from {from:?} to {to:?}")]
    InvalidTransition {
        /// The status the invoice was in.
        from: InvoiceStatus,
        /// The status the caller requested.
        to: InvoiceStatus,
    },

    /// Workspace settings file was not found at the specified path.
    #[error("Settings file not found: {path}")]
    SettingsNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Workspace settings file could not be parsed.
    #[error("Failed to parse settings file '{path}': {message}")]
    SettingsParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },
}

impl EngineError {
    /// Builds a validation error from a non-empty list of violations.
    pub fn validation(violations: Vec<String>) -> Self {
        EngineError::Validation { violations }
    }
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
