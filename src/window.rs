//! The calendar window the board shows: one full month

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::dates::DaySpan;

/// One full month of calendar days, the unit the board navigates in.
///
/// Whatever day the host navigates to, the window always covers the 1st
/// through the last day of that day's month, with every day normalized to a
/// plain calendar date. Leap years and month lengths come straight out of
/// chrono, so February is 29 days exactly when it should be.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthWindow {
    days: Vec<NaiveDate>,
}

impl MonthWindow {
    /// The window of the month that contains `reference`.
    ///
    /// Only the year and month of `reference` matter, so any day of the month
    /// yields the same window.
    pub fn containing(reference: NaiveDate) -> Self {
        let first = reference.with_day(1).unwrap(/* day 1 exists in every month */);
        let next_month = first_of_next_month(first);

        let mut days = Vec::with_capacity(31);
        let mut day = first;
        while day < next_month {
            days.push(day);
            day = day.succ();
        }

        Self { days }
    }

    /// Every day of the month, in order
    pub fn days(&self) -> &[NaiveDate] {
        &self.days
    }

    /// The first day of the month
    pub fn first(&self) -> NaiveDate {
        self.days[0]
    }

    /// The last day of the month
    pub fn last(&self) -> NaiveDate {
        self.days[self.days.len() - 1]
    }

    /// How many days the month has (28 to 31)
    pub fn num_days(&self) -> usize {
        self.days.len()
    }

    /// The whole month as a span, for clipping task bars against
    pub fn span(&self) -> DaySpan {
        DaySpan::new(self.first(), self.last())
            .unwrap(/* cannot fail, the days of a month are ordered */)
    }

    pub fn year(&self) -> i32 {
        self.first().year()
    }

    pub fn month(&self) -> u32 {
        self.first().month()
    }

    /// A heading for the host to display, e.g. "May 2024"
    pub fn label(&self) -> String {
        self.first().format("%B %Y").to_string()
    }

    /// The window of the month before this one. Always exists.
    pub fn prev(&self) -> MonthWindow {
        Self::containing(self.first().pred())
    }

    /// The window of the month after this one. Always exists.
    pub fn next(&self) -> MonthWindow {
        Self::containing(first_of_next_month(self.first()))
    }
}

fn first_of_next_month(day: NaiveDate) -> NaiveDate {
    let (year, month) = if day.month() == 12 {
        (day.year() + 1, 1)
    } else {
        (day.year(), day.month() + 1)
    };
    NaiveDate::from_ymd(year, month, 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn windows_cover_whole_months() {
        let window = MonthWindow::containing(NaiveDate::from_ymd(2024, 5, 15));
        assert_eq!(window.num_days(), 31);
        assert_eq!(window.first(), NaiveDate::from_ymd(2024, 5, 1));
        assert_eq!(window.last(), NaiveDate::from_ymd(2024, 5, 31));
        assert_eq!(window.label(), "May 2024");
    }

    #[test]
    fn every_day_of_a_month_yields_the_same_window() {
        let from_first = MonthWindow::containing(NaiveDate::from_ymd(2024, 5, 1));
        let from_mid = MonthWindow::containing(NaiveDate::from_ymd(2024, 5, 15));
        let from_last = MonthWindow::containing(NaiveDate::from_ymd(2024, 5, 31));
        assert_eq!(from_first, from_mid);
        assert_eq!(from_mid, from_last);
    }

    #[test]
    fn leap_years_are_respected() {
        let leap = MonthWindow::containing(NaiveDate::from_ymd(2024, 2, 10));
        assert_eq!(leap.num_days(), 29);

        let regular = MonthWindow::containing(NaiveDate::from_ymd(2023, 2, 10));
        assert_eq!(regular.num_days(), 28);
    }

    #[test]
    fn navigation_crosses_year_boundaries() {
        let december = MonthWindow::containing(NaiveDate::from_ymd(2024, 12, 31));
        let january = december.next();
        assert_eq!(january.year(), 2025);
        assert_eq!(january.month(), 1);
        assert_eq!(january.prev(), december);
    }

    #[test]
    fn navigation_round_trips() {
        let window = MonthWindow::containing(NaiveDate::from_ymd(2024, 5, 15));
        assert_eq!(window.next().prev(), window);
        assert_eq!(window.prev().next(), window);
    }
}
