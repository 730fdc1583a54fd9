//! Date-only handling for tenure classification.
//!
//! Dates arrive from the directory as loosely-formatted strings. Anything that
//! cannot be read as a calendar date is treated as absent, which the
//! date-scoped resolver interprets as "still serving".

use chrono::{DateTime, Local, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// Parse a directory date string, tolerating surrounding whitespace and
/// timestamp forms. Only the calendar date is kept.
///
/// Returns `None` for empty or unparseable input; never errors.
pub fn parse_date_lenient(raw: &str) -> Option<NaiveDate> {
  let raw = raw.trim();
  if raw.is_empty() {
    return None;
  }
  if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
    return Some(date);
  }
  if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
    return Some(ts.date_naive());
  }
  ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S%.f"]
    .iter()
    .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
    .map(|ts| ts.date())
}

/// The local calendar date. Time of day is discarded.
pub fn today() -> NaiveDate { Local::now().date_naive() }

/// Whether a person is still serving relative to a reference date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tenure {
  Current,
  Previous,
}

impl Tenure {
  /// Classify a leaving date against `as_of`.
  ///
  /// No leaving date, or one strictly after `as_of`, is current. Leaving on
  /// `as_of` itself counts as no longer serving.
  pub fn classify(leaving_date: Option<NaiveDate>, as_of: NaiveDate) -> Self {
    match leaving_date {
      Some(left) if left <= as_of => Self::Previous,
      _ => Self::Current,
    }
  }

  pub fn is_current(self) -> bool { self == Self::Current }
}
