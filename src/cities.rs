//! The fixed set of supported cities and their dataset descriptions.

/// Description of one city's backing dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CityInfo {
    /// Canonical name matched against normalized user input.
    pub name: &'static str,
    /// Human-facing name used in output.
    pub display_name: &'static str,
    /// CSV file name inside the data directory.
    pub file: &'static str,
    /// Whether the file carries the `Gender` and `Birth Year` columns.
    pub has_demographics: bool,
}

/// All cities this program knows about.
pub const CITY_TABLE: &[CityInfo] = &[
    CityInfo {
        name: "chicago",
        display_name: "Chicago",
        file: "chicago.csv",
        has_demographics: true,
    },
    CityInfo {
        name: "new_york_city",
        display_name: "New York City",
        file: "new_york_city.csv",
        has_demographics: true,
    },
    CityInfo {
        name: "washington",
        display_name: "Washington",
        file: "washington.csv",
        has_demographics: false,
    },
];

/// Handle to one entry of [`CITY_TABLE`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct City(&'static CityInfo);

impl City {
    /// Resolve normalized user input (`"chicago"`, `"new_york_city"`, ...)
    /// against the table.
    pub fn from_input(name: &str) -> Option<Self> {
        CITY_TABLE.iter().find(|c| c.name == name).map(City)
    }

    pub fn name(self) -> &'static str {
        self.0.name
    }

    pub fn display_name(self) -> &'static str {
        self.0.display_name
    }

    pub fn file(self) -> &'static str {
        self.0.file
    }

    pub fn has_demographics(self) -> bool {
        self.0.has_demographics
    }
}
