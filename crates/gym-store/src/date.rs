// date.rs - Calendar-date input policy.
//
// Dates are typed as `YYYY-MM-DD`. Blank input means today. Anything else
// that fails to parse also falls back to today, but the fallback is recorded
// in the returned `DateInput` so callers can tell it apart from a real date.

use std::fmt;

use chrono::{Local, NaiveDate};

/// Format used for every date column and every date prompt.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Where a [`DateInput`] came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DateOrigin {
    /// The input parsed as a calendar date.
    Supplied,
    /// The input was blank, which asks for today's date.
    Today,
    /// The input could not be parsed; today's date was substituted.
    Defaulted { input: String },
}

/// A date resolved from operator input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateInput {
    pub date: NaiveDate,
    pub origin: DateOrigin,
}

impl DateInput {
    /// A date the caller already holds as a value.
    pub fn supplied(date: NaiveDate) -> Self {
        Self {
            date,
            origin: DateOrigin::Supplied,
        }
    }

    /// True if the input was invalid and today's date was substituted.
    pub fn is_defaulted(&self) -> bool {
        matches!(self.origin, DateOrigin::Defaulted { .. })
    }
}

impl fmt::Display for DateInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.date.format(DATE_FORMAT))
    }
}

/// Resolve operator input to a date, relative to `today`.
pub fn parse_date_input(input: &str, today: NaiveDate) -> DateInput {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return DateInput {
            date: today,
            origin: DateOrigin::Today,
        };
    }

    match NaiveDate::parse_from_str(trimmed, DATE_FORMAT) {
        Ok(date) => DateInput::supplied(date),
        Err(e) => {
            tracing::warn!(input = trimmed, "invalid date ({}), using today's date", e);
            DateInput {
                date: today,
                origin: DateOrigin::Defaulted {
                    input: trimmed.to_string(),
                },
            }
        }
    }
}

/// Today's date in the local time zone.
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}
