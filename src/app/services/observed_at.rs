//! Observation timestamp resolution for export records
//!
//! Export rows always carry a date but may omit the time, and the formats
//! vary between exporting clients: some write ISO dates (2024-05-01), others
//! US-style slash dates (5/1/2024), with 12-hour clock times in either
//! zero-padded or unpadded form. The resolver picks a candidate layout list
//! from the date separator and tries the layouts in order, surfacing an error
//! that names the attempted layouts when none match. This is a best-effort
//! heuristic over observed export variance, not a grammar; unseen formats are
//! expected to fail here rather than be guessed at.

use crate::{Error, Result};
use chrono::{NaiveDate, NaiveDateTime};

/// Date layout for slash-separated exports (no leading zeros required)
const SLASH_DATE: &str = "%m/%d/%Y";

/// Date layout for ISO exports
const ISO_DATE: &str = "%Y-%m-%d";

/// Time-of-day suffix: 12-hour clock with AM/PM marker. chrono accepts both
/// padded and unpadded hours here, covering the mixed output of different
/// exporting clients.
const TIME_SUFFIX: &str = "%I:%M %p";

/// Resolve a record's raw date and time strings into a single instant.
///
/// An empty time string resolves the date alone to midnight. The date layout
/// is selected by separator: a slash means month/day/4-digit-year, anything
/// else is treated as ISO year-month-day.
pub fn resolve_observed(date: &str, time: &str) -> Result<NaiveDateTime> {
    let date_layout = if date.contains('/') { SLASH_DATE } else { ISO_DATE };

    if time.is_empty() {
        return NaiveDate::parse_from_str(date, date_layout)
            .map_err(|_| Error::timestamp_format(date, &[date_layout]))?
            .and_hms_opt(0, 0, 0)
            .ok_or_else(|| Error::timestamp_format(date, &[date_layout]));
    }

    let combined = format!("{} {}", date, time);
    let layout = format!("{} {}", date_layout, TIME_SUFFIX);
    NaiveDateTime::parse_from_str(&combined, &layout)
        .map_err(|_| Error::timestamp_format(&combined, &[layout.as_str()]))
}
