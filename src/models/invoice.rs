//! Invoice and line-item models.
//!
//! A [`LineItem`]'s `amount` is always `round2(quantity * rate)` and is
//! never edited independently; the update operations in
//! [`crate::calculation::line_items`] are the only way it changes. An
//! [`Invoice`] maintains `total == sum(items.amount)` and
//! `balance == total - paid` through every mutation.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};
use crate::money::round2;

/// A single billable line on an invoice.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    /// What is being billed.
    pub description: String,
    /// The billed quantity. Must be positive to pass validation.
    pub quantity: Decimal,
    /// The rate per unit. Must be non-negative to pass validation.
    pub rate: Decimal,
    /// The rounded extension of this line, `round2(quantity * rate)`.
    pub amount: Decimal,
}

impl LineItem {
    /// Creates a line item, computing the rounded amount.
    pub fn new(description: impl Into<String>, quantity: Decimal, rate: Decimal) -> Self {
        Self {
            description: description.into(),
            quantity,
            rate,
            amount: round2(quantity * rate),
        }
    }

    /// The blank row appended when the user adds a line.
    pub fn empty() -> Self {
        Self {
            description: String::new(),
            quantity: Decimal::ONE,
            rate: Decimal::ZERO,
            amount: Decimal::ZERO,
        }
    }
}

/// Lifecycle status of an invoice.
///
/// Transitions run `Draft -> Sent -> Paid` only. Once `Paid`, an invoice
/// never moves again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InvoiceStatus {
    /// Being edited; not yet delivered to the client.
    Draft,
    /// Generated and delivered; awaiting payment.
    Sent,
    /// Settled in full. Terminal.
    Paid,
}

/// An invoice owned by the calling screen or service.
///
/// The engine never generates identifiers or timestamps for invoices;
/// those belong to the persistence collaborator.
///
/// # Example
///
/// ```
/// use billing_engine::models::{Invoice, LineItem};
/// use rust_decimal::Decimal;
///
/// let invoice = Invoice::draft(vec![LineItem::new(
///     "Site supervision",
///     Decimal::from(2),
///     Decimal::from(150),
/// )]);
/// assert_eq!(invoice.total_amount, Decimal::from(300));
/// assert_eq!(invoice.balance_amount, Decimal::from(300));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Invoice {
    /// The billable lines.
    pub items: Vec<LineItem>,
    /// Rounded sum of every line amount.
    pub total_amount: Decimal,
    /// Amount the client has paid so far.
    pub paid_amount: Decimal,
    /// `total_amount - paid_amount`.
    pub balance_amount: Decimal,
    /// Lifecycle status.
    pub status: InvoiceStatus,
}

impl Invoice {
    /// Creates a draft invoice from line items with nothing paid.
    pub fn draft(items: Vec<LineItem>) -> Self {
        let total = round2(items.iter().map(|item| item.amount).sum());
        Self {
            items,
            total_amount: total,
            paid_amount: Decimal::ZERO,
            balance_amount: total,
            status: InvoiceStatus::Draft,
        }
    }

    /// Recomputes the total and balance from the current items.
    ///
    /// Called after any line-item mutation so the invariants hold without
    /// the caller needing to remember which fields are derived.
    pub fn recompute_totals(&mut self) {
        self.total_amount = round2(self.items.iter().map(|item| item.amount).sum());
        self.balance_amount = self.total_amount - self.paid_amount;
    }

    /// Marks a draft invoice as sent (generated and delivered).
    pub fn mark_sent(&mut self) -> EngineResult<()> {
        match self.status {
            InvoiceStatus::Draft => {
                self.status = InvoiceStatus::Sent;
                Ok(())
            }
            from => Err(EngineError::InvalidTransition {
                from,
                to: InvoiceStatus::Sent,
            }),
        }
    }

    /// Marks a sent invoice as paid in full.
    ///
    /// Sets `paid_amount` to the total and the balance to zero.
    pub fn mark_paid(&mut self) -> EngineResult<()> {
        match self.status {
            InvoiceStatus::Sent => {
                self.status = InvoiceStatus::Paid;
                self.paid_amount = self.total_amount;
                self.balance_amount = Decimal::ZERO;
                Ok(())
            }
            from => Err(EngineError::InvalidTransition {
                from,
                to: InvoiceStatus::Paid,
            }),
        }
    }

    /// Records a partial payment against a sent invoice.
    ///
    /// The paid amount only ever increases and never passes the total.
    /// A payment that would do either is rejected with a validation error.
    pub fn record_payment(&mut self, amount: Decimal) -> EngineResult<()> {
        let mut violations = Vec::new();
        if self.status != InvoiceStatus::Sent {
            return Err(EngineError::InvalidTransition {
                from: self.status,
                to: InvoiceStatus::Sent,
            });
        }
        if amount <= Decimal::ZERO {
            violations.push("Payment amount must be greater than zero".to_string());
        }
        if self.paid_amount + amount > self.total_amount {
            violations.push("Paid amount cannot exceed total amount".to_string());
        }
        if !violations.is_empty() {
            return Err(EngineError::validation(violations));
        }

        self.paid_amount += amount;
        self.balance_amount = self.total_amount - self.paid_amount;
        if self.paid_amount == self.total_amount {
            self.status = InvoiceStatus::Paid;
        }
        Ok(())
    }
}
