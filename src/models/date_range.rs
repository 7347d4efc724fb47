//! Date range model.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// An inclusive calendar date range, possibly not yet fully specified.
///
/// Either bound may be unset while a user is still filling in a form. An
/// unset or inverted range counts zero days; it is treated as "not yet
/// specified", never as an error.
///
/// # Example
///
/// ```
/// use billing_engine::models::DateRange;
/// use chrono::NaiveDate;
///
/// let range = DateRange::between(
///     NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
///     NaiveDate::from_ymd_opt(2024, 1, 14).unwrap(),
/// );
/// assert_eq!(range.total_days(), 14);
/// assert_eq!(DateRange::unset().total_days(), 0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    /// The start date (inclusive), if chosen.
    #[serde(default)]
    pub start: Option<NaiveDate>,
    /// The end date (inclusive), if chosen.
    #[serde(default)]
    pub end: Option<NaiveDate>,
}

impl DateRange {
    /// Creates a range with both bounds set.
    pub fn between(start: NaiveDate, end: NaiveDate) -> Self {
        Self {
            start: Some(start),
            end: Some(end),
        }
    }

    /// Creates a range with neither bound set.
    pub fn unset() -> Self {
        Self {
            start: None,
            end: None,
        }
    }

    /// Counts the calendar days covered by this range, inclusive of both
    /// bounds.
    ///
    /// Returns 0 when either bound is unset or when `end < start`.
    pub fn total_days(&self) -> i64 {
        match (self.start, self.end) {
            (Some(start), Some(end)) if end >= start => (end - start).num_days() + 1,
            _ => 0,
        }
    }

    /// Returns true when both bounds are set and ordered.
    pub fn is_complete(&self) -> bool {
        self.total_days() > 0
    }
}
