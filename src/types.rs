//! Core data model: one trip record and the in-memory trip collection.
//!
//! A [`TripSet`] is the dataset view the reporters and the pager consume. It
//! is rebuilt from disk on every session cycle and filtering always produces
//! a new derived set; the source is never mutated.

use std::fmt;

use chrono::NaiveDateTime;

use crate::cities::City;

/// One ride entry from a city's CSV file.
///
/// Fields that can be empty in the source data are `Option`s; for the city
/// without demographic columns, `gender` and `birth_year` are `None` on
/// every row.
#[derive(Debug, Clone, PartialEq)]
pub struct Trip {
    pub start_time: NaiveDateTime,
    pub end_time: NaiveDateTime,
    /// Ride length in seconds.
    pub duration_secs: f64,
    pub start_station: String,
    pub end_station: String,
    pub user_type: Option<String>,
    pub gender: Option<String>,
    pub birth_year: Option<i64>,
}

impl fmt::Display for Trip {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}  {}  {:>7.0}s  {} -> {}",
            self.start_time, self.end_time, self.duration_secs, self.start_station, self.end_station
        )?;
        match &self.user_type {
            Some(user_type) => write!(f, "  {user_type}")?,
            None => write!(f, "  -")?,
        }
        if let Some(gender) = &self.gender {
            write!(f, "  {gender}")?;
        }
        if let Some(year) = self.birth_year {
            write!(f, "  {year}")?;
        }
        Ok(())
    }
}

/// In-memory, possibly filtered, ordered collection of [`Trip`]s for one city.
#[derive(Debug, Clone, PartialEq)]
pub struct TripSet {
    pub city: City,
    pub trips: Vec<Trip>,
}

impl TripSet {
    pub fn new(city: City, trips: Vec<Trip>) -> Self {
        Self { city, trips }
    }

    /// Number of trips in the set.
    pub fn len(&self) -> usize {
        self.trips.len()
    }

    pub fn is_empty(&self) -> bool {
        self.trips.is_empty()
    }

    /// Create a new set containing only trips that match `predicate`.
    ///
    /// The returned set keeps the original city and row order.
    pub fn filter_trips<F>(&self, mut predicate: F) -> Self
    where
        F: FnMut(&Trip) -> bool,
    {
        let trips = self
            .trips
            .iter()
            .filter(|trip| predicate(trip))
            .cloned()
            .collect();
        Self {
            city: self.city,
            trips,
        }
    }
}
