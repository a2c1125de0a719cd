//! Station popularity rankings.

use std::io::{self, Write};

use super::frequencies;
use crate::types::TripSet;

/// Entries kept per ranking.
const TOP_N: usize = 5;

/// Top-5 rankings of start stations, end stations, and (start, end) pairs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StationReport {
    pub start_stations: Vec<(String, u64)>,
    pub end_stations: Vec<(String, u64)>,
    pub pairs: Vec<((String, String), u64)>,
}

pub fn compute(trips: &TripSet) -> StationReport {
    let mut start_stations = frequencies(trips.trips.iter().map(|t| t.start_station.clone()));
    start_stations.truncate(TOP_N);

    let mut end_stations = frequencies(trips.trips.iter().map(|t| t.end_station.clone()));
    end_stations.truncate(TOP_N);

    let mut pairs = frequencies(
        trips
            .trips
            .iter()
            .map(|t| (t.start_station.clone(), t.end_station.clone())),
    );
    pairs.truncate(TOP_N);

    StationReport {
        start_stations,
        end_stations,
        pairs,
    }
}

pub fn render<W: Write>(out: &mut W, report: &StationReport) -> io::Result<()> {
    writeln!(out, "\n\nList of the top 5 start stations by most popular:")?;
    for (station, count) in &report.start_stations {
        writeln!(out, "{station}: {count}")?;
    }

    writeln!(out, "\n\nList of the top 5 end stations by most popular:")?;
    for (station, count) in &report.end_stations {
        writeln!(out, "{station}: {count}")?;
    }

    writeln!(out, "\n\nTop 5 combination of start station and end station trip:")?;
    for ((start, end), count) in &report.pairs {
        writeln!(out, "{start} + {end}: {count}")?;
    }
    Ok(())
}
