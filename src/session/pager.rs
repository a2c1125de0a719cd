//! Raw-row paging in fixed windows.

use std::io::{self, BufRead, Write};

use super::prompt::{ask_yes_no, Answer};
use crate::types::TripSet;

/// Rows shown per window.
const WINDOW: usize = 5;

const MORE_DATA_QUESTION: &str = "\nWould you like to see more data? Enter yes or no.\n";
const ALL_SEEN: &str = "You've seen everything!";

/// Page through `trips` five rows at a time, starting at the first row.
///
/// Plain offset loop: after printing a window the pager either reports that
/// the set is exhausted and stops, or asks whether to continue. Returns
/// `Answer::Exit` only when the user typed the exit sentinel mid-paging.
pub(crate) fn page_trips<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    trips: &TripSet,
) -> io::Result<Answer<()>> {
    let mut offset = 0;
    loop {
        let end = (offset + WINDOW).min(trips.len());
        for (i, trip) in trips.trips[offset..end].iter().enumerate() {
            writeln!(out, "{:>6}  {}", offset + i, trip)?;
        }

        if offset + WINDOW >= trips.len() {
            writeln!(out, "{ALL_SEEN}")?;
            return Ok(Answer::Value(()));
        }

        match ask_yes_no(input, out, MORE_DATA_QUESTION)? {
            Answer::Value(true) => offset += WINDOW,
            Answer::Value(false) => return Ok(Answer::Value(())),
            Answer::Exit => return Ok(Answer::Exit),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use chrono::NaiveDate;

    use super::{page_trips, Answer, ALL_SEEN, MORE_DATA_QUESTION};
    use crate::cities::City;
    use crate::types::{Trip, TripSet};

    fn trips(n: usize) -> TripSet {
        let city = City::from_input("washington").unwrap();
        let rows = (0..n)
            .map(|i| {
                let start = NaiveDate::from_ymd_opt(2017, 1, 1)
                    .unwrap()
                    .and_hms_opt(0, 0, 0)
                    .unwrap();
                Trip {
                    start_time: start,
                    end_time: start + chrono::Duration::seconds(60),
                    duration_secs: 60.0,
                    start_station: format!("Station {i}"),
                    end_station: "End".to_string(),
                    user_type: None,
                    gender: None,
                    birth_year: None,
                }
            })
            .collect();
        TripSet::new(city, rows)
    }

    fn run_pager(set: &TripSet, script: &str) -> (Answer<()>, String) {
        let mut input = Cursor::new(script.to_string());
        let mut out = Vec::new();
        let answer = page_trips(&mut input, &mut out, set).unwrap();
        (answer, String::from_utf8(out).unwrap())
    }

    #[test]
    fn twelve_rows_page_as_three_windows_then_the_completion_message() {
        let set = trips(12);
        let (answer, out) = run_pager(&set, "yes\nyes\n");

        assert!(matches!(answer, Answer::Value(())));
        for i in 0..12 {
            assert!(out.contains(&format!("Station {i}")), "row {i} missing");
        }
        assert!(out.contains(ALL_SEEN));
        // Two prompts: after [0,5) and after [5,10); none after the last window.
        assert_eq!(out.matches(MORE_DATA_QUESTION.trim()).count(), 2);
    }

    #[test]
    fn no_stops_without_printing_further_rows() {
        let set = trips(12);
        let (answer, out) = run_pager(&set, "no\n");
        assert!(matches!(answer, Answer::Value(())));
        assert!(out.contains("Station 4"));
        assert!(!out.contains("Station 5"));
        assert!(!out.contains(ALL_SEEN));
    }

    #[test]
    fn unrecognized_answers_reprompt_without_advancing() {
        let set = trips(12);
        let (_, out) = run_pager(&set, "more\nyes\nno\n");
        assert!(out.contains("You can answer only \"yes\", \"no\" or \"exit\""));
        assert!(out.contains("Station 9"));
        assert!(!out.contains("Station 10"));
    }

    #[test]
    fn exit_mid_paging_propagates() {
        let set = trips(12);
        let (answer, _) = run_pager(&set, "exit\n");
        assert!(matches!(answer, Answer::Exit));
    }

    #[test]
    fn short_sets_finish_without_prompting() {
        let set = trips(3);
        let (answer, out) = run_pager(&set, "");
        assert!(matches!(answer, Answer::Value(())));
        assert!(out.contains(ALL_SEEN));
        assert!(!out.contains("Would you like to see more data?"));
    }
}
