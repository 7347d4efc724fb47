//! Payment schedule model.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// How a project is billed over time.
///
/// `Unknown` is the explicit fallback branch for payment types this engine
/// does not recognise; it is treated with [`PaymentType::Fixed`] semantics
/// so a half-filled form still produces a usable estimate. Deserializing an
/// unrecognised string lands here rather than failing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentType {
    /// One fixed amount for the whole project.
    Fixed,
    /// A rate per working day.
    Daily,
    /// A rate per (possibly partial) week.
    Weekly,
    /// A rate per (possibly partial) 30-day month.
    Monthly,
    /// Unrecognised payment type; estimated with fixed semantics.
    #[serde(other)]
    Unknown,
}

/// A project's payment schedule as entered on the project form.
///
/// # Example
///
/// ```
/// use billing_engine::models::{PaymentSchedule, PaymentType};
/// use rust_decimal::Decimal;
///
/// let schedule = PaymentSchedule {
///     payment_type: PaymentType::Daily,
///     rate: Decimal::from(500),
///     working_days_per_week: 6,
///     overtime_rate: None,
///     overtime_hours: None,
/// };
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentSchedule {
    /// How the rate is applied over the project date range.
    pub payment_type: PaymentType,
    /// The rate for the chosen payment type.
    pub rate: Decimal,
    /// Working days per week, clamped to `1..=7` before use.
    pub working_days_per_week: u32,
    /// Optional overtime rate per hour.
    #[serde(default)]
    pub overtime_rate: Option<Decimal>,
    /// Optional expected overtime hours over the project.
    #[serde(default)]
    pub overtime_hours: Option<Decimal>,
}
