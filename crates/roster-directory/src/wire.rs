//! Wire records as the backend serves them, and their lenient decoding into
//! core types.
//!
//! The backend is loose about types: years and ids sometimes arrive as
//! numeric strings, phone numbers as numbers, dates as timestamps or empty
//! strings. Payloads are decoded record by record: a malformed optional field
//! degrades to absent, a record that cannot be read at all (or has no usable
//! id) is skipped. Either way a warning is logged and the rest of the payload
//! survives.

use roster_core::{
  date::parse_date_lenient,
  person::{PeriodId, Person, PersonId, RoleType, TransitionPeriod},
};
use serde::{Deserialize, de::DeserializeOwned};
use serde_json::Value;
use tracing::warn;

// ─── Loose integers ──────────────────────────────────────────────────────────

/// An integer that may be sent as a JSON number or a numeric string.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum LooseInt {
  Number(i64),
  Text(String),
}

impl LooseInt {
  pub fn value(&self) -> Option<i64> {
    match self {
      Self::Number(n) => Some(*n),
      Self::Text(s) => s.trim().parse().ok(),
    }
  }

  fn is_blank(&self) -> bool { matches!(self, Self::Text(s) if s.trim().is_empty()) }
}

/// Free text that may be sent as a JSON number, e.g. a phone number.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum LooseText {
  Text(String),
  Number(serde_json::Number),
}

impl LooseText {
  fn into_text(self) -> Option<String> {
    match self {
      Self::Text(s) if s.trim().is_empty() => None,
      Self::Text(s) => Some(s),
      Self::Number(n) => Some(n.to_string()),
    }
  }
}

fn year(field: Option<&LooseInt>) -> Option<i32> {
  field.and_then(LooseInt::value).and_then(|y| i32::try_from(y).ok())
}

// ─── Transition period ───────────────────────────────────────────────────────

/// `GET /transition-periods` item, also embedded in member records.
#[derive(Debug, Clone, Deserialize)]
pub struct RawPeriod {
  pub id:         LooseInt,
  #[serde(default)]
  pub name:       Option<String>,
  #[serde(default)]
  pub start_date: Option<LooseInt>,
  #[serde(default)]
  pub end_date:   Option<LooseInt>,
}

impl RawPeriod {
  /// A period without a readable start year cannot be ordered and is
  /// dropped.
  pub fn decode(self) -> Option<TransitionPeriod> {
    let Some(id) = self.id.value() else {
      warn!(raw_id = ?self.id, "dropping transition period with an unreadable id");
      return None;
    };
    let Some(start_year) = year(self.start_date.as_ref()) else {
      warn!(period_id = id, "dropping transition period without a start year");
      return None;
    };
    let end_year = year(self.end_date.as_ref());
    if end_year.is_none() && self.end_date.as_ref().is_some_and(|e| !e.is_blank()) {
      warn!(period_id = id, "unreadable end year; treating period as open-ended");
    }
    Some(TransitionPeriod {
      id: PeriodId(id),
      label: self.name.filter(|n| !n.trim().is_empty()),
      start_year,
      end_year,
    })
  }
}

// ─── Member ──────────────────────────────────────────────────────────────────

/// `GET /members` item.
#[derive(Debug, Clone, Deserialize)]
pub struct RawMember {
  pub id:                   LooseInt,
  #[serde(default)]
  pub name:                 Option<String>,
  #[serde(default)]
  pub number:               Option<LooseText>,
  #[serde(default)]
  pub position:             Option<String>,
  #[serde(rename = "type", default)]
  pub kind:                 Option<String>,
  #[serde(default)]
  pub photo:                Option<String>,
  #[serde(default)]
  pub joining_date:         Option<String>,
  #[serde(default)]
  pub leaving_date:         Option<String>,
  #[serde(default)]
  pub transition_period_id: Option<LooseInt>,
  #[serde(default)]
  pub transition_period:    Option<RawPeriod>,
}

impl RawMember {
  /// `None` when the record has no usable id.
  pub fn decode(self) -> Option<Person> {
    let Some(id) = self.id.value() else {
      warn!(raw_id = ?self.id, "dropping member with an unreadable id");
      return None;
    };
    let period = self.transition_period.and_then(RawPeriod::decode);
    let period_id = self
      .transition_period_id
      .as_ref()
      .and_then(LooseInt::value)
      .map(PeriodId)
      .or_else(|| period.as_ref().map(|p| p.id));

    Some(Person {
      id: PersonId(id),
      name: self.name.unwrap_or_default(),
      role_type: RoleType::from(self.kind.unwrap_or_default()),
      position: self.position.unwrap_or_default(),
      contact_number: self.number.and_then(LooseText::into_text),
      photo_ref: self.photo.filter(|p| !p.trim().is_empty()),
      joining_date: decode_date(id, "joining_date", self.joining_date.as_deref()),
      leaving_date: decode_date(id, "leaving_date", self.leaving_date.as_deref()),
      period_id,
      period,
    })
  }
}

fn decode_date(member_id: i64, field: &str, raw: Option<&str>) -> Option<chrono::NaiveDate> {
  let raw = raw?;
  let date = parse_date_lenient(raw);
  if date.is_none() && !raw.trim().is_empty() {
    warn!(member_id, field, value = raw, "unreadable date; treating as absent");
  }
  date
}

// ─── Snapshot file ───────────────────────────────────────────────────────────

/// On-disk snapshot: the two endpoint payloads side by side.
#[derive(Debug, Default, Deserialize)]
pub struct RawSnapshot {
  #[serde(default)]
  pub members:            Vec<Value>,
  #[serde(default)]
  pub transition_periods: Vec<Value>,
}

// ─── Payload decoding ────────────────────────────────────────────────────────

fn record<T: DeserializeOwned>(kind: &'static str, value: Value) -> Option<T> {
  match serde_json::from_value(value) {
    Ok(record) => Some(record),
    Err(error) => {
      warn!(kind, %error, "skipping unreadable directory record");
      None
    }
  }
}

/// Decode a `members` payload, skipping records that cannot be read.
pub fn decode_members(raw: Vec<Value>) -> Vec<Person> {
  raw
    .into_iter()
    .filter_map(|v| record::<RawMember>("member", v))
    .filter_map(RawMember::decode)
    .collect()
}

/// Decode a `transition-periods` payload, skipping records that cannot be
/// read or ordered.
pub fn decode_periods(raw: Vec<Value>) -> Vec<TransitionPeriod> {
  raw
    .into_iter()
    .filter_map(|v| record::<RawPeriod>("transition period", v))
    .filter_map(RawPeriod::decode)
    .collect()
}
