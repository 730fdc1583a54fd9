//! Person and transition-period records, as supplied by the member directory.
//!
//! Both types are read-only snapshots. The resolver never mutates them; it
//! clones what it needs into the view models.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use strum::EnumString;

// ─── Identifiers ─────────────────────────────────────────────────────────────

/// Opaque identity of a [`Person`] as assigned by the directory.
#[derive(
  Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct PersonId(pub i64);

impl fmt::Display for PersonId {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { self.0.fmt(f) }
}

/// Opaque identity of a [`TransitionPeriod`].
#[derive(
  Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct PeriodId(pub i64);

impl fmt::Display for PeriodId {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { self.0.fmt(f) }
}

// ─── Role type ───────────────────────────────────────────────────────────────

/// The display category a person belongs to. Exactly one per record.
///
/// Anything the directory sends that is not one of the five known categories
/// lands in [`RoleType::Unknown`] and is excluded from every named section.
#[derive(Debug, Clone, PartialEq, Eq, Hash, EnumString)]
#[strum(serialize_all = "snake_case")]
pub enum RoleType {
  Board,
  Staff,
  Advisor,
  /// Audit committee (लेखा समिति).
  Lekha,
  PlanCommittee,
  #[strum(default)]
  Unknown(String),
}

impl RoleType {
  /// The wire spelling of this role type.
  pub fn as_str(&self) -> &str {
    match self {
      Self::Board => "board",
      Self::Staff => "staff",
      Self::Advisor => "advisor",
      Self::Lekha => "lekha",
      Self::PlanCommittee => "plan_committee",
      Self::Unknown(raw) => raw,
    }
  }

  pub fn is_known(&self) -> bool { !matches!(self, Self::Unknown(_)) }
}

impl From<String> for RoleType {
  fn from(raw: String) -> Self {
    // Matching is exact: no trimming, no case folding.
    match raw.parse() {
      Ok(role) => role,
      Err(_) => Self::Unknown(raw),
    }
  }
}

impl From<RoleType> for String {
  fn from(role: RoleType) -> Self { role.as_str().to_owned() }
}

impl fmt::Display for RoleType {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

impl Serialize for RoleType {
  fn serialize<S: serde::Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
    s.serialize_str(self.as_str())
  }
}

impl<'de> Deserialize<'de> for RoleType {
  fn deserialize<D: serde::Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
    String::deserialize(d).map(Self::from)
  }
}

// ─── Transition period ───────────────────────────────────────────────────────

/// A bounded organisational term, e.g. one board's multi-year tenure.
///
/// `end_year` is `None` for an open-ended (still running) period. An
/// `end_year` below `start_year` is a data-quality problem the resolver
/// tolerates rather than rejects.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransitionPeriod {
  pub id:         PeriodId,
  pub label:      Option<String>,
  pub start_year: i32,
  pub end_year:   Option<i32>,
}

impl TransitionPeriod {
  pub fn new(id: PeriodId, start_year: i32, end_year: Option<i32>) -> Self {
    Self {
      id,
      label: None,
      start_year,
      end_year,
    }
  }

  /// Whether `year` falls inside this period, bounds inclusive.
  pub fn contains_year(&self, year: i32) -> bool {
    self.start_year <= year && self.end_year.is_none_or(|end| year <= end)
  }
}

// ─── Person ──────────────────────────────────────────────────────────────────

/// One membership record: somebody holding (or having held) a position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
  pub id:             PersonId,
  pub name:           String,
  pub role_type:      RoleType,
  /// Free-text title, e.g. "अध्यक्ष" or "Chairman". Used for rank lookup and
  /// for recognising the chairperson across periods.
  pub position:       String,
  pub contact_number: Option<String>,
  /// Opaque photo reference (usually a storage path).
  pub photo_ref:      Option<String>,
  pub joining_date:   Option<NaiveDate>,
  /// `None` means "still serving" in the date-scoped view.
  pub leaving_date:   Option<NaiveDate>,
  /// When absent the person is scoped by dates alone.
  pub period_id:      Option<PeriodId>,
  /// The period record embedded by the directory alongside `period_id`.
  pub period:         Option<TransitionPeriod>,
}

impl Person {
  /// Convenience constructor with all optional fields left empty.
  pub fn new(
    id: PersonId,
    name: impl Into<String>,
    role_type: RoleType,
    position: impl Into<String>,
  ) -> Self {
    Self {
      id,
      name: name.into(),
      role_type,
      position: position.into(),
      contact_number: None,
      photo_ref: None,
      joining_date: None,
      leaving_date: None,
      period_id: None,
      period: None,
    }
  }

  pub fn with_leaving_date(mut self, date: NaiveDate) -> Self {
    self.leaving_date = Some(date);
    self
  }

  /// Attach the person to `period`, embedding the record and its id.
  pub fn in_period(mut self, period: &TransitionPeriod) -> Self {
    self.period_id = Some(period.id);
    self.period = Some(period.clone());
    self
  }
}
