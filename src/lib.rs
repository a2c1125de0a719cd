//! `bikeshare-explorer` is an interactive terminal explorer for US bikeshare
//! trip data.
//!
//! It loads one city's trip records from CSV into an in-memory
//! [`types::TripSet`], optionally restricted to a start month (January..June)
//! and/or weekday, then prints descriptive statistics: time-of-travel
//! frequencies, station popularity, trip duration aggregates, and user
//! demographics. Raw rows can be paged through five at a time, and the whole
//! cycle repeats until the user declines to restart. Typing `exit` at any
//! prompt ends the program.
//!
//! ## Modules
//!
//! - [`cities`]: the fixed city table (file locations + demographic
//!   capability flags)
//! - [`filters`]: the (city, month, day) selection and its row predicate
//! - [`ingestion`]: CSV → [`types::TripSet`] loading
//! - [`stats`]: the four reporters (time, station, duration, user)
//! - [`session`]: prompts, raw-data pager, and the session driver
//! - [`error`]: the crate error type
//!
//! ## Quick example: one scripted session cycle
//!
//! ```no_run
//! use std::io;
//!
//! # fn main() -> bikeshare_explorer::ExplorerResult<()> {
//! let stdin = io::stdin();
//! let stdout = io::stdout();
//! // Reads city/month/day answers from stdin, prints reports to stdout,
//! // loading `<cwd>/<city>.csv`.
//! bikeshare_explorer::session::run_session(&mut stdin.lock(), &mut stdout.lock(), ".")?;
//! # Ok(())
//! # }
//! ```

pub mod cities;
pub mod error;
pub mod filters;
pub mod ingestion;
pub mod session;
pub mod stats;
pub mod types;

pub use error::{ExplorerError, ExplorerResult};
