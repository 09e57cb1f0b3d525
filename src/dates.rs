//! Calendar-day parsing and span arithmetic
//!
//! Dates cross the crate boundary as `YYYY-MM-DD` strings, the shape the
//! hosting dashboard stores them in. They get parsed here, once, into
//! [`chrono::NaiveDate`] values. Everything downstream works on whole
//! calendar days, so there is no time of day or timezone to get wrong at
//! month edges.

use chrono::NaiveDate;
use thiserror::Error;

/// The canonical text form of a calendar day
pub const DAY_FORMAT: &str = "%Y-%m-%d";

/// Why a pair of task dates could not be turned into a drawable span
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SpanError {
    /// The text does not name a calendar day
    #[error("invalid calendar date: {0:?}")]
    Unparseable(String),
    /// The span ends before it starts
    #[error("start date {start} is after end date {end}")]
    Reversed { start: NaiveDate, end: NaiveDate },
}

/// Parse a calendar day from its stored text form.
///
/// Leading and trailing whitespace is tolerated, as are unpadded month and
/// day numbers. [`format_day`] turns the result back into the canonical form.
pub fn parse_day(text: &str) -> Result<NaiveDate, SpanError> {
    NaiveDate::parse_from_str(text.trim(), DAY_FORMAT)
        .map_err(|_| SpanError::Unparseable(text.to_string()))
}

/// Format a calendar day in the canonical `YYYY-MM-DD` form
pub fn format_day(day: NaiveDate) -> String {
    day.format(DAY_FORMAT).to_string()
}

/// The number of days from `from` to `to`, positive when `to` is later
pub fn days_between(from: NaiveDate, to: NaiveDate) -> i64 {
    to.signed_duration_since(from).num_days()
}

/// An inclusive range of calendar days, guaranteed well-ordered
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DaySpan {
    start: NaiveDate,
    end: NaiveDate,
}

impl DaySpan {
    /// Create a span covering `start` through `end`. Both days are part of it.
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self, SpanError> {
        if start > end {
            return Err(SpanError::Reversed { start, end });
        }
        Ok(Self { start, end })
    }

    pub fn start(&self) -> NaiveDate { self.start }
    pub fn end(&self) -> NaiveDate   { self.end   }

    /// How many days this span covers. Both ends count, so this is at least 1.
    pub fn num_days(&self) -> i64 {
        days_between(self.start, self.end) + 1
    }

    /// Restrict this span to `bounds`, or `None` when they do not overlap
    pub fn clip_to(&self, bounds: &DaySpan) -> Option<DaySpan> {
        let start = self.start.max(bounds.start);
        let end = self.end.min(bounds.end);
        if start > end {
            return None;
        }
        Some(DaySpan { start, end })
    }
}
