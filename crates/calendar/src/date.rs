//! Canonical `YYYY-MM-DD` parsing and rendering, plus weekday helpers.

use chrono::{Datelike, Local, NaiveDate, Weekday};

use crate::error::SequenceError;

/// Canonical strftime layout used for parsing and rendering.
pub const CANONICAL_LAYOUT: &str = "%Y-%m-%d";

/// Returns the current local date, without time of day.
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Parses a strict `YYYY-MM-DD` string.
///
/// The year must have exactly four digits and the month and day exactly two,
/// separated by hyphens. Surrounding whitespace is rejected.
///
/// # Errors
///
/// Returns [`SequenceError::InvalidFormat`] when the input is not shaped like
/// `YYYY-MM-DD`, or [`SequenceError::InvalidDate`] when it is well shaped but
/// names a day that does not exist (e.g. month 13 or February 30).
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use dateseq_calendar::parse_date;
///
/// let date = parse_date("2006-01-02").unwrap();
/// assert_eq!(date, NaiveDate::from_ymd_opt(2006, 1, 2).unwrap());
/// assert!(parse_date("2006-1-2").is_err());
/// ```
pub fn parse_date(input: &str) -> Result<NaiveDate, SequenceError> {
    let bytes = input.as_bytes();
    let well_shaped = bytes.len() == 10
        && bytes.iter().enumerate().all(|(i, b)| match i {
            4 | 7 => *b == b'-',
            _ => b.is_ascii_digit(),
        });
    if !well_shaped {
        return Err(SequenceError::InvalidFormat {
            input: input.to_string(),
        });
    }

    NaiveDate::parse_from_str(input, CANONICAL_LAYOUT).map_err(|_| SequenceError::InvalidDate {
        input: input.to_string(),
    })
}

/// Renders a date in canonical `YYYY-MM-DD` form.
pub fn format_date(date: NaiveDate) -> String {
    date.format(CANONICAL_LAYOUT).to_string()
}

/// Returns `true` for Saturday and Sunday.
pub fn is_weekend(date: NaiveDate) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}
