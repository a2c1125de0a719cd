//! CSV loading of city trip data.
//!
//! [`load_trips`] is the entry point: it resolves the city to its backing
//! file, parses every row into a typed [`Trip`], then applies the month/day
//! restriction of the selection. Columns are located by header name, so
//! column order and extra columns (such as the files' unnamed index column)
//! are irrelevant.
//!
//! Failures are fatal to the session cycle: a missing file surfaces as an
//! I/O error, a missing required column as a schema mismatch, and a bad cell
//! as a parse error naming row, column, and raw text.

use std::fs::File;
use std::path::Path;

use chrono::NaiveDateTime;
use log::{debug, info};

use crate::cities::City;
use crate::error::{ExplorerError, ExplorerResult};
use crate::filters::FilterSelection;
use crate::types::{Trip, TripSet};

/// Timestamp layout shared by all three city files.
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

const COL_START_TIME: &str = "Start Time";
const COL_END_TIME: &str = "End Time";
const COL_DURATION: &str = "Trip Duration";
const COL_START_STATION: &str = "Start Station";
const COL_END_STATION: &str = "End Station";
const COL_USER_TYPE: &str = "User Type";
const COL_GENDER: &str = "Gender";
const COL_BIRTH_YEAR: &str = "Birth Year";

/// Load one city's trips from `<data_dir>/<city file>` and apply the
/// month/day restriction of `selection`.
pub fn load_trips(
    data_dir: impl AsRef<Path>,
    selection: &FilterSelection,
) -> ExplorerResult<TripSet> {
    let path = data_dir.as_ref().join(selection.city.file());
    let file = File::open(&path)?;
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(file);

    let full = read_trips(&mut rdr, selection.city)?;
    info!(
        "loaded {} trips for {} from {}",
        full.len(),
        selection.city.name(),
        path.display()
    );

    if selection.is_unfiltered() {
        return Ok(full);
    }

    let filtered = full.filter_trips(|trip| selection.matches(trip));
    debug!(
        "{} of {} trips match month={:?} day={:?}",
        filtered.len(),
        full.len(),
        selection.month,
        selection.day
    );
    Ok(filtered)
}

/// Column indexes resolved from the header row.
struct Columns {
    start_time: usize,
    end_time: usize,
    duration: usize,
    start_station: usize,
    end_station: usize,
    user_type: usize,
    /// Present only for cities whose files carry demographics.
    gender: Option<usize>,
    birth_year: Option<usize>,
}

/// Read all trips from an open CSV reader.
pub fn read_trips<R: std::io::Read>(
    rdr: &mut csv::Reader<R>,
    city: City,
) -> ExplorerResult<TripSet> {
    let headers = rdr.headers()?.clone();

    let require = |name: &str| -> ExplorerResult<usize> {
        headers
            .iter()
            .position(|h| h == name)
            .ok_or_else(|| ExplorerError::SchemaMismatch {
                message: format!(
                    "missing required column '{name}' in {} data. headers={:?}",
                    city.name(),
                    headers.iter().collect::<Vec<_>>()
                ),
            })
    };

    let columns = Columns {
        start_time: require(COL_START_TIME)?,
        end_time: require(COL_END_TIME)?,
        duration: require(COL_DURATION)?,
        start_station: require(COL_START_STATION)?,
        end_station: require(COL_END_STATION)?,
        user_type: require(COL_USER_TYPE)?,
        gender: if city.has_demographics() {
            Some(require(COL_GENDER)?)
        } else {
            None
        },
        birth_year: if city.has_demographics() {
            Some(require(COL_BIRTH_YEAR)?)
        } else {
            None
        },
    };

    let mut trips: Vec<Trip> = Vec::new();
    for (row_idx0, result) in rdr.records().enumerate() {
        // 1-based row number for users; +1 again because the header is row 1.
        let user_row = row_idx0 + 2;
        let record = result?;
        let cell = |idx: usize| record.get(idx).unwrap_or("");

        trips.push(Trip {
            start_time: parse_timestamp(user_row, COL_START_TIME, cell(columns.start_time))?,
            end_time: parse_timestamp(user_row, COL_END_TIME, cell(columns.end_time))?,
            duration_secs: parse_duration(user_row, cell(columns.duration))?,
            start_station: cell(columns.start_station).trim().to_owned(),
            end_station: cell(columns.end_station).trim().to_owned(),
            user_type: optional_text(cell(columns.user_type)),
            gender: columns.gender.and_then(|idx| optional_text(cell(idx))),
            birth_year: match columns.birth_year {
                Some(idx) => parse_birth_year(user_row, cell(idx))?,
                None => None,
            },
        });
    }

    Ok(TripSet::new(city, trips))
}

fn parse_error(row: usize, column: &str, raw: &str, message: impl ToString) -> ExplorerError {
    ExplorerError::Parse {
        row,
        column: column.to_owned(),
        raw: raw.to_owned(),
        message: message.to_string(),
    }
}

fn parse_timestamp(row: usize, column: &str, raw: &str) -> ExplorerResult<NaiveDateTime> {
    NaiveDateTime::parse_from_str(raw.trim(), TIMESTAMP_FORMAT)
        .map_err(|e| parse_error(row, column, raw, e))
}

fn parse_duration(row: usize, raw: &str) -> ExplorerResult<f64> {
    raw.trim()
        .parse::<f64>()
        .map_err(|e| parse_error(row, COL_DURATION, raw, e))
}

/// Empty cells are missing values; the files render some years as floats
/// ("1992.0"), so parse through f64 and truncate.
fn parse_birth_year(row: usize, raw: &str) -> ExplorerResult<Option<i64>> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    trimmed
        .parse::<f64>()
        .map(|year| Some(year as i64))
        .map_err(|e| parse_error(row, COL_BIRTH_YEAR, raw, e))
}

fn optional_text(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::read_trips;
    use crate::cities::City;
    use crate::error::ExplorerError;

    const CHICAGO_CSV: &str = "\
,Start Time,End Time,Trip Duration,Start Station,End Station,User Type,Gender,Birth Year
0,2017-01-02 08:05:00,2017-01-02 08:17:56,776,Canal St,Clark St,Subscriber,Male,1987
1,2017-01-03 09:10:00,2017-01-03 09:20:00,600,Clark St,Canal St,Customer,,
2,2017-06-30 19:00:00,2017-06-30 19:12:30,750.0,Canal St,Wabash Ave,Subscriber,Female,1992.0
";

    fn reader(data: &str) -> csv::Reader<&[u8]> {
        csv::ReaderBuilder::new()
            .has_headers(true)
            .from_reader(data.as_bytes())
    }

    #[test]
    fn reads_typed_trips_and_maps_empty_cells_to_none() {
        let city = City::from_input("chicago").unwrap();
        let set = read_trips(&mut reader(CHICAGO_CSV), city).unwrap();

        assert_eq!(set.len(), 3);
        let first = &set.trips[0];
        assert_eq!(first.duration_secs, 776.0);
        assert_eq!(first.start_station, "Canal St");
        assert_eq!(first.user_type.as_deref(), Some("Subscriber"));
        assert_eq!(first.birth_year, Some(1987));

        let second = &set.trips[1];
        assert_eq!(second.gender, None);
        assert_eq!(second.birth_year, None);
    }

    #[test]
    fn tolerates_float_rendered_birth_years() {
        let city = City::from_input("chicago").unwrap();
        let set = read_trips(&mut reader(CHICAGO_CSV), city).unwrap();
        assert_eq!(set.trips[2].birth_year, Some(1992));
        assert_eq!(set.trips[2].duration_secs, 750.0);
    }

    #[test]
    fn errors_on_missing_required_column() {
        let city = City::from_input("chicago").unwrap();
        let input = "Start Time,End Time,Trip Duration,Start Station,End Station,User Type\n";
        let err = read_trips(&mut reader(input), city).unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("schema mismatch"));
        assert!(msg.contains("missing required column 'Gender'"));
    }

    #[test]
    fn demographic_columns_are_not_required_without_the_capability() {
        let washington = City::from_input("washington").unwrap();
        let input = "\
Start Time,End Time,Trip Duration,Start Station,End Station,User Type
2017-03-08 12:45:00,2017-03-08 12:55:00,600,14th St,K St,Registered
";
        let set = read_trips(&mut reader(input), washington).unwrap();
        assert_eq!(set.len(), 1);
        assert_eq!(set.trips[0].gender, None);
        assert_eq!(set.trips[0].birth_year, None);
    }

    #[test]
    fn errors_on_bad_timestamp_with_row_and_column_context() {
        let city = City::from_input("washington").unwrap();
        let input = "\
Start Time,End Time,Trip Duration,Start Station,End Station,User Type
not-a-time,2017-03-08 12:55:00,600,14th St,K St,Registered
";
        let err = read_trips(&mut reader(input), city).unwrap_err();
        match err {
            ExplorerError::Parse { row, column, raw, .. } => {
                assert_eq!(row, 2);
                assert_eq!(column, "Start Time");
                assert_eq!(raw, "not-a-time");
            }
            other => panic!("expected Parse error, got {other:?}"),
        }
    }
}
