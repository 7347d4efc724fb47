//! Workspace settings types.
//!
//! These are deserialized from `workspace.yaml` and handed read-only to
//! the formatter; no calculation component ever mutates them.

use serde::{Deserialize, Serialize};

/// Where the currency symbol sits relative to the amount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SymbolPosition {
    /// Symbol before the amount, e.g. `$ 120.00`.
    Prefix,
    /// Symbol after the amount, e.g. `120.00 kr`.
    Suffix,
}

/// Currency display configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrencySettings {
    /// ISO 4217 currency code, e.g. "USD".
    pub code: String,
    /// Display symbol, e.g. "$" or "₹".
    pub symbol: String,
    /// Symbol placement.
    pub position: SymbolPosition,
    /// Decimal places shown, clamped to `0..=6` when formatting.
    pub decimals: u32,
}

/// The calendar date layout shown to users.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DateFormat {
    /// `2024-01-31`
    #[serde(rename = "YYYY-MM-DD")]
    YearMonthDay,
    /// `31-01-2024`
    #[serde(rename = "DD-MM-YYYY")]
    DayMonthYear,
    /// `01-31-2024`
    #[serde(rename = "MM-DD-YYYY")]
    MonthDayYear,
}

/// The clock layout shown to users.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimeFormat {
    /// `02:30 PM`
    #[serde(rename = "12h")]
    TwelveHour,
    /// `14:30`
    #[serde(rename = "24h")]
    TwentyFourHour,
}

/// Date and time display configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateTimeSettings {
    /// Fixed UTC-offset timezone string such as "UTC", "+05:30" or
    /// "UTC-08:00". Anything unresolvable falls back to UTC.
    pub timezone: String,
    /// Date layout.
    pub date_format: DateFormat,
    /// Clock layout.
    pub time_format: TimeFormat,
}

/// Workspace-level display configuration.
///
/// Every money and date value flows through these settings before
/// display. Formatting never feeds back into calculation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkspaceSettings {
    /// Currency display settings.
    pub currency: CurrencySettings,
    /// Date and time display settings.
    pub date_time: DateTimeSettings,
}

impl Default for WorkspaceSettings {
    fn default() -> Self {
        Self {
            currency: CurrencySettings {
                code: "USD".to_string(),
                symbol: "$".to_string(),
                position: SymbolPosition::Prefix,
                decimals: 2,
            },
            date_time: DateTimeSettings {
                timezone: "UTC".to_string(),
                date_format: DateFormat::YearMonthDay,
                time_format: TimeFormat::TwentyFourHour,
            },
        }
    }
}
