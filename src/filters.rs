//! Month/weekday filter selection and its row predicate.
//!
//! The source datasets only cover January through June, so only those months
//! are accepted. Weekday numbering follows Monday=0 .. Sunday=6.

use chrono::{Datelike, Month, Weekday};

use crate::cities::City;
use crate::types::Trip;

/// Month names the prompt accepts, in calendar order.
const MONTHS: &[(&str, Month)] = &[
    ("january", Month::January),
    ("february", Month::February),
    ("march", Month::March),
    ("april", Month::April),
    ("may", Month::May),
    ("june", Month::June),
];

/// Weekday names the prompt accepts, in calendar order.
const DAYS: &[(&str, Weekday)] = &[
    ("monday", Weekday::Mon),
    ("tuesday", Weekday::Tue),
    ("wednesday", Weekday::Wed),
    ("thursday", Weekday::Thu),
    ("friday", Weekday::Fri),
    ("saturday", Weekday::Sat),
    ("sunday", Weekday::Sun),
];

/// Month restriction for one session cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MonthFilter {
    All,
    One(Month),
}

impl MonthFilter {
    /// Parse normalized input: `"all"` or a month name january..june.
    pub fn from_input(input: &str) -> Option<Self> {
        if input == "all" {
            return Some(Self::All);
        }
        MONTHS
            .iter()
            .find(|(name, _)| *name == input)
            .map(|&(_, month)| Self::One(month))
    }
}

/// Weekday restriction for one session cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayFilter {
    All,
    One(Weekday),
}

impl DayFilter {
    /// Parse normalized input: `"all"` or a weekday name.
    pub fn from_input(input: &str) -> Option<Self> {
        if input == "all" {
            return Some(Self::All);
        }
        DAYS.iter()
            .find(|(name, _)| *name == input)
            .map(|&(_, day)| Self::One(day))
    }
}

/// Capitalized weekday name for report output.
pub fn day_name(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

/// The user-chosen (city, month, day) triple restricting one session cycle.
///
/// Immutable once accepted by the prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilterSelection {
    pub city: City,
    pub month: MonthFilter,
    pub day: DayFilter,
}

impl FilterSelection {
    /// Whether `trip` starts in the selected month and on the selected weekday.
    pub fn matches(&self, trip: &Trip) -> bool {
        let month_ok = match self.month {
            MonthFilter::All => true,
            MonthFilter::One(month) => trip.start_time.month() == month.number_from_month(),
        };
        let day_ok = match self.day {
            DayFilter::All => true,
            DayFilter::One(day) => trip.start_time.weekday() == day,
        };
        month_ok && day_ok
    }

    /// True when neither month nor day is constrained.
    pub fn is_unfiltered(&self) -> bool {
        self.month == MonthFilter::All && self.day == DayFilter::All
    }
}
