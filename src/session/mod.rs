//! The interactive session: one prompt → load → report → page → restart loop.
//!
//! Everything here is generic over [`BufRead`]/[`Write`] so tests can script
//! entire sessions with in-memory buffers. User-requested exits (the `exit`
//! sentinel or end of input) end the loop cleanly; loader failures propagate
//! to the caller.

mod pager;
mod prompt;

use std::io::{BufRead, Write};
use std::path::Path;

use log::debug;

use prompt::Answer;

use crate::error::ExplorerResult;
use crate::ingestion::load_trips;
use crate::stats;

const RAW_DATA_QUESTION: &str = "\nWould you like to see the data? Enter yes or no.\n";
const RESTART_QUESTION: &str = "\nWould you like to restart? Enter yes or no.\n";

/// Run prompt/report cycles until the user declines to restart or asks to
/// leave.
///
/// City files are resolved inside `data_dir`. Every user-input path ends in
/// `Ok(())`; only data-source failures return an error.
pub fn run_session<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    data_dir: impl AsRef<Path>,
) -> ExplorerResult<()> {
    let data_dir = data_dir.as_ref();

    loop {
        let selection = match prompt::prompt_filters(input, out)? {
            Answer::Value(selection) => selection,
            Answer::Exit => return Ok(()),
        };
        debug!(
            "session cycle: city={} month={:?} day={:?}",
            selection.city.name(),
            selection.month,
            selection.day
        );

        let trips = load_trips(data_dir, &selection)?;
        stats::render_all(out, &trips, &selection)?;

        match prompt::ask_once(input, out, RAW_DATA_QUESTION)? {
            Answer::Exit => return Ok(()),
            Answer::Value(answer) if answer == "yes" => {
                if let Answer::Exit = pager::page_trips(input, out, &trips)? {
                    return Ok(());
                }
            }
            // Any other answer moves straight on to the restart question.
            Answer::Value(_) => {}
        }

        match prompt::ask_yes_no(input, out, RESTART_QUESTION)? {
            Answer::Value(true) => {}
            Answer::Value(false) | Answer::Exit => return Ok(()),
        }
        debug!("session restarting");
    }
}
