use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// Inclusive calendar range.
///
/// A span whose `end` precedes its `start` is empty: it contains no date and
/// every query fed with it returns the empty result rather than an error.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct DateSpan {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateSpan {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && date <= self.end
    }
}

/// Calendar pattern with optional components.
///
/// Each populated component must match the corresponding part of a date; a
/// `None` component matches anything. The all-`None` mask matches every date.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct DateMask {
    pub year: Option<i32>,
    pub month: Option<u32>,
    pub day: Option<u32>,
}

impl DateMask {
    /// Matches every date.
    pub fn any() -> Self {
        Self::default()
    }

    pub fn in_year(year: i32) -> Self {
        Self {
            year: Some(year),
            ..Self::default()
        }
    }

    /// Matches one calendar month of one year.
    pub fn in_month(year: i32, month: u32) -> Self {
        Self {
            year: Some(year),
            month: Some(month),
            day: None,
        }
    }

    pub fn matches(&self, date: NaiveDate) -> bool {
        self.year.map_or(true, |year| date.year() == year)
            && self.month.map_or(true, |month| date.month() == month)
            && self.day.map_or(true, |day| date.day() == day)
    }
}
