//! Display formatting driven by workspace settings.
//!
//! Formatting is a pure function of `(value, settings)`: it never mutates
//! the settings, performs no I/O, and never fails. Bad input degrades to
//! a sentinel or a UTC fallback instead of an error so a half-filled form
//! can keep rendering while the user types.

use chrono::{DateTime, FixedOffset, Utc};
use rust_decimal::Decimal;

use super::types::{DateFormat, SymbolPosition, TimeFormat, WorkspaceSettings};
use crate::money::{MAX_SCALE, round};

/// Rendered in place of an absent amount.
const AMOUNT_SENTINEL: &str = "-";

/// Resolves a workspace timezone string to a fixed UTC offset.
///
/// Accepts `"UTC"`, `"GMT"`, bare offsets such as `"+05:30"` or `"-0800"`,
/// and prefixed forms such as `"UTC+05:30"`. Anything unresolvable falls
/// back to UTC rather than failing the render.
///
/// # Examples
///
/// ```
/// use billing_engine::settings::resolve_timezone;
/// use chrono::FixedOffset;
///
/// assert_eq!(resolve_timezone("+05:30"), FixedOffset::east_opt(19800).unwrap());
/// assert_eq!(resolve_timezone("Mars/Olympus"), FixedOffset::east_opt(0).unwrap());
/// ```
pub fn resolve_timezone(timezone: &str) -> FixedOffset {
    let utc = FixedOffset::east_opt(0).expect("zero offset is always valid");
    let trimmed = timezone.trim();
    let offset_part = trimmed
        .strip_prefix("UTC")
        .or_else(|| trimmed.strip_prefix("GMT"))
        .unwrap_or(trimmed)
        .trim();

    if offset_part.is_empty() {
        return utc;
    }

    parse_offset(offset_part).unwrap_or(utc)
}

/// Parses `+HH:MM`, `-HH:MM`, `+HHMM` or `+HH` into a fixed offset.
fn parse_offset(text: &str) -> Option<FixedOffset> {
    let (sign, digits) = match text.as_bytes().first()? {
        b'+' => (1i32, &text[1..]),
        b'-' => (-1i32, &text[1..]),
        _ => return None,
    };

    let (hours, minutes) = match digits.split_once(':') {
        Some((h, m)) => (h.parse::<i32>().ok()?, m.parse::<i32>().ok()?),
        // The slice points are only valid when every byte is a digit;
        // non-ASCII input must fall through to the plain parse below.
        None if digits.len() == 4 && digits.bytes().all(|b| b.is_ascii_digit()) => (
            digits[..2].parse::<i32>().ok()?,
            digits[2..].parse::<i32>().ok()?,
        ),
        None => (digits.parse::<i32>().ok()?, 0),
    };

    if !(0..=14).contains(&hours) || !(0..60).contains(&minutes) {
        return None;
    }

    FixedOffset::east_opt(sign * (hours * 3600 + minutes * 60))
}

/// Renders a monetary amount per the workspace currency settings.
///
/// The amount is rounded to the configured decimal places and the symbol
/// is placed as prefix or suffix, separated by a single space. An absent
/// amount renders as `"-"`; this function never panics.
///
/// # Examples
///
/// ```
/// use billing_engine::settings::{format_money, WorkspaceSettings};
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let settings = WorkspaceSettings::default();
/// let amount = Decimal::from_str("16300").unwrap();
/// assert_eq!(format_money(Some(amount), &settings), "$ 16300.00");
/// assert_eq!(format_money(None, &settings), "-");
/// ```
pub fn format_money(amount: Option<Decimal>, settings: &WorkspaceSettings) -> String {
    let Some(amount) = amount else {
        return AMOUNT_SENTINEL.to_string();
    };

    let decimals = settings.currency.decimals.min(MAX_SCALE);
    let rounded = round(amount, decimals);
    let digits = format!("{:.*}", decimals as usize, rounded);

    match settings.currency.position {
        SymbolPosition::Prefix => format!("{} {}", settings.currency.symbol, digits),
        SymbolPosition::Suffix => format!("{} {}", digits, settings.currency.symbol),
    }
}

/// Renders a calendar date in the configured timezone and layout.
pub fn format_date(value: DateTime<Utc>, settings: &WorkspaceSettings) -> String {
    let local = value.with_timezone(&resolve_timezone(&settings.date_time.timezone));
    let layout = match settings.date_time.date_format {
        DateFormat::YearMonthDay => "%Y-%m-%d",
        DateFormat::DayMonthYear => "%d-%m-%Y",
        DateFormat::MonthDayYear => "%m-%d-%Y",
    };
    local.format(layout).to_string()
}

/// Renders a clock time in the configured timezone and layout.
pub fn format_time(value: DateTime<Utc>, settings: &WorkspaceSettings) -> String {
    let local = value.with_timezone(&resolve_timezone(&settings.date_time.timezone));
    let layout = match settings.date_time.time_format {
        TimeFormat::TwelveHour => "%I:%M %p",
        TimeFormat::TwentyFourHour => "%H:%M",
    };
    local.format(layout).to_string()
}
