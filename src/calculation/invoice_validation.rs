//! Invoice draft validation.
//!
//! Validation collects every violation found rather than stopping at the
//! first, so the invoice form can show the complete list and disable the
//! submit button until all of them clear.

use std::sync::LazyLock;

use chrono::NaiveDate;
use regex::Regex;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};
use crate::models::LineItem;

use super::line_items::normalized_total;

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^@\s]+@[^@\s]+\.[A-Za-z]{2,}$").expect("email pattern is valid")
});

/// An invoice as it stands on the form, before generation.
///
/// Optional fields are optional because the user may not have filled them
/// in yet; validation reports what is missing instead of refusing to
/// construct the draft.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvoiceDraft {
    /// The invoice issue date.
    #[serde(default)]
    pub invoice_date: Option<NaiveDate>,
    /// The payment due date.
    #[serde(default)]
    pub due_date: Option<NaiveDate>,
    /// The client or worker the invoice is billed to.
    #[serde(default)]
    pub billed_to: Option<String>,
    /// The line items.
    pub items: Vec<LineItem>,
    /// Amount already paid against this invoice.
    #[serde(default)]
    pub paid_amount: Decimal,
    /// Contact email for delivery, if given.
    #[serde(default)]
    pub email: Option<String>,
    /// Contact phone for delivery, if given.
    #[serde(default)]
    pub phone: Option<String>,
}

/// Validates an invoice draft, collecting every violation.
///
/// Checks, in order: due date not before invoice date; a billed party is
/// selected; every item has a description, a positive quantity and a
/// non-negative rate; at least one item exists; the paid amount is within
/// `0..=total`, where the total is recomputed from each item's quantity
/// and rate rather than trusting the supplied `amount` fields; email
/// (when present) looks like `local@domain.tld`; phone
/// (when present) has exactly 10 digits after stripping separators.
///
/// # Errors
///
/// [`EngineError::Validation`] carrying the full violation list.
pub fn validate_invoice(draft: &InvoiceDraft) -> EngineResult<()> {
    let mut violations = Vec::new();

    if let (Some(invoice_date), Some(due_date)) = (draft.invoice_date, draft.due_date) {
        if due_date < invoice_date {
            violations.push("Due date cannot be before invoice date".to_string());
        }
    }

    if draft
        .billed_to
        .as_deref()
        .is_none_or(|name| name.trim().is_empty())
    {
        violations.push("A client or worker must be selected".to_string());
    }

    if draft.items.is_empty() {
        violations.push("An invoice needs at least one line item".to_string());
    }
    for (index, item) in draft.items.iter().enumerate() {
        validate_item(index, item, &mut violations);
    }

    // The draft arrives from a request body, so the amount fields are
    // untrusted; the paid bound is checked against the recomputed total.
    let total = normalized_total(&draft.items);
    if draft.paid_amount < Decimal::ZERO {
        violations.push("Paid amount cannot be negative".to_string());
    } else if draft.paid_amount > total {
        violations.push("Paid amount cannot exceed total amount".to_string());
    }

    if let Some(email) = draft.email.as_deref() {
        if !email.trim().is_empty() && !EMAIL_RE.is_match(email.trim()) {
            violations.push("Email address is not valid".to_string());
        }
    }

    if let Some(phone) = draft.phone.as_deref() {
        let digits = phone.chars().filter(char::is_ascii_digit).count();
        if !phone.trim().is_empty() && digits != 10 {
            violations.push("Phone number must have exactly 10 digits".to_string());
        }
    }

    if violations.is_empty() {
        Ok(())
    } else {
        Err(EngineError::validation(violations))
    }
}

fn validate_item(index: usize, item: &LineItem, violations: &mut Vec<String>) {
    let line = index + 1;
    if item.description.trim().is_empty() {
        violations.push(format!("Item {}: description is required", line));
    }
    if item.quantity <= Decimal::ZERO {
        violations.push(format!("Item {}: quantity must be greater than zero", line));
    }
    if item.rate < Decimal::ZERO {
        violations.push(format!("Item {}: rate cannot be negative", line));
    }
}
