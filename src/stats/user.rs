//! User demographic counts.
//!
//! Gender and birth-year sections exist only for cities whose files carry
//! those columns; for the others the whole block is absent rather than
//! rendered empty.

use std::io::{self, Write};

use super::frequencies;
use crate::types::TripSet;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserReport {
    /// Counts of each distinct user type present in the set.
    pub user_types: Vec<(String, u64)>,
    /// Present only when the city's dataset carries demographic columns.
    pub demographics: Option<Demographics>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Demographics {
    pub genders: Vec<(String, u64)>,
    /// Absent when no row carries a complete set of fields.
    pub birth_years: Option<BirthYearStats>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BirthYearStats {
    pub earliest: i64,
    pub most_recent: i64,
    pub top: Vec<(i64, u64)>,
}

pub fn compute(trips: &TripSet) -> UserReport {
    let user_types = frequencies(trips.trips.iter().filter_map(|t| t.user_type.clone()));

    let demographics = if trips.city.has_demographics() {
        let genders = frequencies(trips.trips.iter().filter_map(|t| t.gender.clone()));

        // Birth-year statistics only consider rows with every field present.
        let complete_years: Vec<i64> = trips
            .trips
            .iter()
            .filter(|t| t.user_type.is_some() && t.gender.is_some())
            .filter_map(|t| t.birth_year)
            .collect();

        let birth_years = match (
            complete_years.iter().copied().min(),
            complete_years.iter().copied().max(),
        ) {
            (Some(earliest), Some(most_recent)) => {
                let mut top = frequencies(complete_years.iter().copied());
                top.truncate(5);
                Some(BirthYearStats {
                    earliest,
                    most_recent,
                    top,
                })
            }
            _ => None,
        };

        Some(Demographics {
            genders,
            birth_years,
        })
    } else {
        None
    };

    UserReport {
        user_types,
        demographics,
    }
}

pub fn render<W: Write>(out: &mut W, report: &UserReport) -> io::Result<()> {
    writeln!(out, "\nCounts of user types")?;
    for (user_type, count) in &report.user_types {
        writeln!(out, "{user_type}: {count}")?;
    }

    if let Some(demographics) = &report.demographics {
        writeln!(out, "\nCounts of gender:")?;
        for (gender, count) in &demographics.genders {
            writeln!(out, "{gender}: {count}")?;
        }

        if let Some(years) = &demographics.birth_years {
            writeln!(out, "\nEarliest year of birth: ")?;
            writeln!(out, "{}", years.earliest)?;
            writeln!(out, "\nMost recent year of birth: ")?;
            writeln!(out, "{}", years.most_recent)?;
            writeln!(out, "\nTop 5 most common year of birth:")?;
            for (year, count) in &years.top {
                writeln!(out, "{year}: {count}")?;
            }
        }
    }
    Ok(())
}
