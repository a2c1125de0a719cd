//! Trip duration totals.

use std::io::{self, Write};

use crate::types::TripSet;

/// Sum and arithmetic mean of trip durations, in seconds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DurationReport {
    pub total_secs: f64,
    pub mean_secs: f64,
}

pub fn compute(trips: &TripSet) -> DurationReport {
    let total_secs: f64 = trips.trips.iter().map(|t| t.duration_secs).sum();
    // Plain float division: an empty set yields NaN, not an error.
    let mean_secs = total_secs / trips.len() as f64;
    DurationReport {
        total_secs,
        mean_secs,
    }
}

pub fn render<W: Write>(out: &mut W, report: &DurationReport) -> io::Result<()> {
    writeln!(out, "Total travel time was: {} seconds", report.total_secs)?;
    writeln!(out, "Mean travel time was: {} seconds", report.mean_secs)?;
    Ok(())
}
