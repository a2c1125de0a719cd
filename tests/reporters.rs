//! Reporters are pure: they never mutate the dataset, so any execution
//! order yields the same aggregates.

use bikeshare_explorer::cities::City;
use bikeshare_explorer::filters::{DayFilter, FilterSelection, MonthFilter};
use bikeshare_explorer::ingestion::load_trips;
use bikeshare_explorer::stats::{duration, station, time, user};

const FIXTURES: &str = "tests/fixtures";

#[test]
fn reporters_leave_the_dataset_unchanged_in_any_order() {
    let selection = FilterSelection {
        city: City::from_input("chicago").unwrap(),
        month: MonthFilter::All,
        day: DayFilter::All,
    };
    let set = load_trips(FIXTURES, &selection).unwrap();
    let snapshot = set.clone();

    // Fixed order first.
    let time_a = time::compute(&set, &selection);
    let station_a = station::compute(&set);
    let duration_a = duration::compute(&set);
    let user_a = user::compute(&set);

    // Reversed order against the same set.
    let user_b = user::compute(&set);
    let duration_b = duration::compute(&set);
    let station_b = station::compute(&set);
    let time_b = time::compute(&set, &selection);

    assert_eq!(set, snapshot);
    assert_eq!(time_a, time_b);
    assert_eq!(station_a, station_b);
    assert_eq!(duration_a, duration_b);
    assert_eq!(user_a, user_b);
}

#[test]
fn top_five_pair_counts_never_exceed_the_row_count() {
    let selection = FilterSelection {
        city: City::from_input("new_york_city").unwrap(),
        month: MonthFilter::All,
        day: DayFilter::All,
    };
    let set = load_trips(FIXTURES, &selection).unwrap();
    let report = station::compute(&set);

    let paired: u64 = report.pairs.iter().map(|(_, count)| count).sum();
    assert!(paired <= set.len() as u64);
}
