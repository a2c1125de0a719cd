//! Interactive prompts: normalize, validate, re-prompt, honor the exit
//! sentinel.
//!
//! Every prompt reads one line, lowercases and trims it, and treats both the
//! literal `exit` and end-of-input as a request to leave. Invalid answers
//! echo the rejected value and ask again, with no retry limit.

use std::io::{self, BufRead, Write};

use crate::cities::City;
use crate::filters::{DayFilter, FilterSelection, MonthFilter};
use crate::stats::SEPARATOR;

/// Outcome of a prompt: an accepted value, or the user asking to leave.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Answer<T> {
    Value(T),
    Exit,
}

const WELCOME: &str =
    "Hello! Let's explore some US bikeshare data!\nOBS: You can type \"exit\" to end program\n";

const CITY_QUESTION: &str = "Choose between Chicago, New York City or Washington: ";
const MONTH_QUESTION: &str =
    "Choose a month between january and june or all for no month filter: ";
const DAY_QUESTION: &str =
    "Choose a day of the week between monday and sunday or all for no day filter: ";

const YES_NO_CORRECTION: &str = "\nYou can answer only \"yes\", \"no\" or \"exit\"";

/// Print `question`, read one line, lowercase and trim it.
///
/// `None` means end of input, which callers treat like `exit`.
fn read_answer<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    question: &str,
) -> io::Result<Option<String>> {
    write!(out, "{question}")?;
    out.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_lowercase()))
}

/// Ask `question` until `parse` accepts the normalized answer.
fn ask_until<R, W, T, N, P>(
    input: &mut R,
    out: &mut W,
    question: &str,
    normalize: N,
    parse: P,
) -> io::Result<Answer<T>>
where
    R: BufRead,
    W: Write,
    N: Fn(String) -> String,
    P: Fn(&str) -> Option<T>,
{
    loop {
        let answer = match read_answer(input, out, question)? {
            Some(answer) => normalize(answer),
            None => return Ok(Answer::Exit),
        };
        if answer == "exit" {
            return Ok(Answer::Exit);
        }
        match parse(&answer) {
            Some(value) => return Ok(Answer::Value(value)),
            None => writeln!(out, "You typed {answer}")?,
        }
    }
}

/// Run the welcome banner and the city/month/day prompts for one cycle.
pub(crate) fn prompt_filters<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
) -> io::Result<Answer<FilterSelection>> {
    writeln!(out, "{WELCOME}")?;

    // City input additionally turns spaces into underscores ("new york
    // city" -> "new_york_city") before validation and echo.
    let city = match ask_until(
        input,
        out,
        CITY_QUESTION,
        |answer| answer.replace(' ', "_"),
        City::from_input,
    )? {
        Answer::Value(city) => city,
        Answer::Exit => return Ok(Answer::Exit),
    };

    let month = match ask_until(input, out, MONTH_QUESTION, |answer| answer, MonthFilter::from_input)?
    {
        Answer::Value(month) => month,
        Answer::Exit => return Ok(Answer::Exit),
    };

    let day = match ask_until(input, out, DAY_QUESTION, |answer| answer, DayFilter::from_input)? {
        Answer::Value(day) => day,
        Answer::Exit => return Ok(Answer::Exit),
    };

    writeln!(out, "{SEPARATOR}")?;
    Ok(Answer::Value(FilterSelection { city, month, day }))
}

/// Ask `question` once and hand back the normalized answer.
pub(crate) fn ask_once<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    question: &str,
) -> io::Result<Answer<String>> {
    match read_answer(input, out, question)? {
        None => Ok(Answer::Exit),
        Some(answer) if answer == "exit" => Ok(Answer::Exit),
        Some(answer) => Ok(Answer::Value(answer)),
    }
}

/// Ask `question` until the answer is yes, no, or exit.
pub(crate) fn ask_yes_no<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    question: &str,
) -> io::Result<Answer<bool>> {
    loop {
        match read_answer(input, out, question)? {
            None => return Ok(Answer::Exit),
            Some(answer) => match answer.as_str() {
                "yes" => return Ok(Answer::Value(true)),
                "no" => return Ok(Answer::Value(false)),
                "exit" => return Ok(Answer::Exit),
                _ => writeln!(out, "{YES_NO_CORRECTION}")?,
            },
        }
    }
}
