//! Time-of-travel frequencies.
//!
//! Which rankings are shown depends on which filters were left open: the
//! reporter always ranks the coarsest dimensions the selection did not
//! already pin down.

use std::io::{self, Write};

use chrono::{Datelike, Month, Timelike, Weekday};

use super::frequencies;
use crate::filters::{day_name, DayFilter, FilterSelection, MonthFilter};
use crate::types::{Trip, TripSet};

/// Frequency rankings selected by the open filter dimensions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeReport {
    /// Month ranking; present only when neither month nor day was constrained.
    pub months: Option<Vec<(Month, u64)>>,
    /// Weekday ranking; present only when month was constrained but day was not.
    pub days: Option<Vec<(Weekday, u64)>>,
    /// Start-hour ranking (0..=23).
    pub hours: Option<Vec<(u32, u64)>>,
}

fn start_month(trip: &Trip) -> Option<Month> {
    u8::try_from(trip.start_time.month())
        .ok()
        .and_then(|m| Month::try_from(m).ok())
}

pub fn compute(trips: &TripSet, selection: &FilterSelection) -> TimeReport {
    let hours = || frequencies(trips.trips.iter().map(|t| t.start_time.hour()));

    match (selection.month, selection.day) {
        (MonthFilter::All, DayFilter::All) => TimeReport {
            months: Some(frequencies(trips.trips.iter().filter_map(start_month))),
            days: None,
            hours: Some(hours()),
        },
        (MonthFilter::One(_), DayFilter::All) => TimeReport {
            months: None,
            days: Some(frequencies(trips.trips.iter().map(|t| t.start_time.weekday()))),
            hours: Some(hours()),
        },
        (MonthFilter::One(_), DayFilter::One(_)) => TimeReport {
            months: None,
            days: None,
            hours: Some(hours()),
        },
        // Day constrained with month open has no ranking to show.
        (MonthFilter::All, DayFilter::One(_)) => TimeReport {
            months: None,
            days: None,
            hours: None,
        },
    }
}

pub fn render<W: Write>(
    out: &mut W,
    report: &TimeReport,
    selection: &FilterSelection,
) -> io::Result<()> {
    match (selection.month, selection.day) {
        (MonthFilter::All, DayFilter::All) => {
            writeln!(out, "List of months sorted by count of occurrences: ")?;
            if let Some(months) = &report.months {
                for (month, count) in months {
                    writeln!(out, "{}: {}", month.name(), count)?;
                }
            }
            writeln!(out)?;
            writeln!(
                out,
                "List of hour and count of occurrences for all months and all days are: "
            )?;
            render_hours(out, report)?;
        }
        (MonthFilter::One(month), DayFilter::All) => {
            writeln!(
                out,
                "List of day of week and count of occurrences for the month of {} are: ",
                month.name()
            )?;
            if let Some(days) = &report.days {
                for (day, count) in days {
                    writeln!(out, "{}: {}", day_name(*day), count)?;
                }
            }
            writeln!(out)?;
            writeln!(
                out,
                "List of hour and count of occurrences for the month of {} are: ",
                month.name()
            )?;
            render_hours(out, report)?;
        }
        (MonthFilter::One(month), DayFilter::One(day)) => {
            writeln!(
                out,
                "List of hour and count of occurrences for the month of {} and on a {} are: ",
                month.name(),
                day_name(day)
            )?;
            render_hours(out, report)?;
        }
        (MonthFilter::All, DayFilter::One(_)) => {}
    }
    Ok(())
}

fn render_hours<W: Write>(out: &mut W, report: &TimeReport) -> io::Result<()> {
    if let Some(hours) = &report.hours {
        for (hour, count) in hours {
            writeln!(out, "{hour}: {count}")?;
        }
    }
    Ok(())
}
