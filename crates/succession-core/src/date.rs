//! Calendar-date helpers.
//!
//! Every date in the system is a whole calendar day exchanged as ISO
//! `YYYY-MM-DD`. There is no time-of-day and no time zone.

use chrono::{NaiveDate, Utc};

use crate::{Error, Result};

/// The ISO format accepted for dataset fields and query parameters.
pub const ISO_FORMAT: &str = "%Y-%m-%d";

/// Seniority assigned to a person who has neither an ordination date nor a
/// dated role. Sorts after every real date.
pub fn far_future() -> NaiveDate {
  NaiveDate::from_ymd_opt(9999, 12, 31).unwrap_or(NaiveDate::MAX)
}

/// Today's calendar date in UTC.
pub fn today() -> NaiveDate { Utc::now().date_naive() }

/// Parse a strict `YYYY-MM-DD` string.
pub fn parse_date(value: &str) -> Result<NaiveDate> {
  parse_field("date", value)
}

/// Parse a strict `YYYY-MM-DD` string, naming `field` in the error.
pub(crate) fn parse_field(field: &'static str, value: &str) -> Result<NaiveDate> {
  NaiveDate::parse_from_str(value.trim(), ISO_FORMAT).map_err(|_| {
    Error::MalformedDate {
      field,
      value: value.to_string(),
    }
  })
}

/// Whether `date` falls in the half-open span `[start, end)`.
///
/// A missing `start` never contains anything; a missing `end` is open-ended.
/// Used for both role validity and a person's active span, so an assignment
/// ending on D and a death on D both take effect at the start of D.
pub fn within(
  date: NaiveDate,
  start: Option<NaiveDate>,
  end: Option<NaiveDate>,
) -> bool {
  let Some(start) = start else {
    return false;
  };
  start <= date && end.is_none_or(|end| date < end)
}
