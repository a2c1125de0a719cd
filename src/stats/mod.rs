//! Report computation and rendering over a loaded [`TripSet`].
//!
//! Each reporter is a pure `compute` over the dataset plus a `render` onto
//! any writer, so the aggregates are testable without capturing terminal
//! output. [`render_all`] runs the four reporters in the order the session
//! expects, timing each one and closing it with the shared separator.

pub mod duration;
pub mod station;
pub mod time;
pub mod user;

use std::collections::HashMap;
use std::hash::Hash;
use std::io::{self, Write};
use std::time::Instant;

use log::debug;

use crate::filters::FilterSelection;
use crate::types::TripSet;

/// Separator printed after filter acceptance and after every reporter.
pub const SEPARATOR: &str = "----------------------------------------";

/// Count occurrences of each item, ordered by descending count.
///
/// Ties keep first-seen order: the stable sort leaves equal counts in the
/// order their keys first appeared in the input.
pub(crate) fn frequencies<K, I>(items: I) -> Vec<(K, u64)>
where
    K: Eq + Hash + Clone,
    I: IntoIterator<Item = K>,
{
    let mut order: Vec<K> = Vec::new();
    let mut counts: HashMap<K, u64> = HashMap::new();
    for item in items {
        let count = counts.entry(item.clone()).or_insert(0);
        if *count == 0 {
            order.push(item);
        }
        *count += 1;
    }

    let mut ranked: Vec<(K, u64)> = order
        .into_iter()
        .map(|key| {
            let count = counts[&key];
            (key, count)
        })
        .collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1));
    ranked
}

/// Run the four reporters in fixed order (time, station, duration, user),
/// writing to `out`.
pub fn render_all<W: Write>(
    out: &mut W,
    trips: &TripSet,
    selection: &FilterSelection,
) -> io::Result<()> {
    timed(out, "\nCalculating The Most Frequent Times of Travel...\n", |out| {
        let report = time::compute(trips, selection);
        time::render(out, &report, selection)
    })?;
    timed(out, "\nCalculating The Most Popular Stations and Trip...\n", |out| {
        let report = station::compute(trips);
        station::render(out, &report)
    })?;
    timed(out, "\nCalculating Trip Duration...\n", |out| {
        let report = duration::compute(trips);
        duration::render(out, &report)
    })?;
    timed(out, "\nCalculating User Stats...\n", |out| {
        let report = user::compute(trips);
        user::render(out, &report)
    })?;
    Ok(())
}

/// Shared reporter framing: banner, body, elapsed wall-clock time, separator.
fn timed<W, F>(out: &mut W, banner: &str, body: F) -> io::Result<()>
where
    W: Write,
    F: FnOnce(&mut W) -> io::Result<()>,
{
    writeln!(out, "{banner}")?;
    let started = Instant::now();
    body(out)?;
    let elapsed = started.elapsed().as_secs_f64();
    debug!("reporter finished in {elapsed}s");
    writeln!(out, "\nThis took {elapsed} seconds.")?;
    writeln!(out, "{SEPARATOR}")?;
    Ok(())
}
