//! Resolved view models handed to the presentation layer.
//!
//! These are never stored; they are recomputed from a full directory snapshot
//! on every call.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::person::{PeriodId, Person, TransitionPeriod};

// ─── Board rows ──────────────────────────────────────────────────────────────

/// The rank-sorted board split into the fixed 1-3-2-rest layout rows.
///
/// Renderers depend on this shape positionally, so it is exposed as
/// structure rather than as a flat list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardRows {
  pub first:  Option<Person>,
  pub second: Vec<Person>,
  pub third:  Vec<Person>,
  /// Everyone after the sixth member, shown as a flat grid.
  pub rest:   Vec<Person>,
}

impl BoardRows {
  pub const SECOND_ROW_LEN: usize = 3;
  pub const THIRD_ROW_LEN: usize = 2;

  /// Partition an already-sorted board list. Concatenating the rows gives
  /// back `sorted` exactly.
  pub fn from_sorted(sorted: Vec<Person>) -> Self {
    let mut members = sorted.into_iter();
    let first = members.next();
    let second = members.by_ref().take(Self::SECOND_ROW_LEN).collect();
    let third = members.by_ref().take(Self::THIRD_ROW_LEN).collect();
    let rest = members.collect();
    Self {
      first,
      second,
      third,
      rest,
    }
  }

  /// All board members in display order.
  pub fn iter(&self) -> impl Iterator<Item = &Person> {
    self
      .first
      .iter()
      .chain(&self.second)
      .chain(&self.third)
      .chain(&self.rest)
  }

  pub fn len(&self) -> usize {
    usize::from(self.first.is_some())
      + self.second.len()
      + self.third.len()
      + self.rest.len()
  }

  pub fn is_empty(&self) -> bool { self.first.is_none() }
}

// ─── Board view ──────────────────────────────────────────────────────────────

/// The board rows plus the committee sections, each displayed independently.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardView {
  pub rows:           BoardRows,
  pub advisors:       Vec<Person>,
  pub lekha:          Vec<Person>,
  pub plan_committee: Vec<Person>,
}

impl BoardView {
  pub fn len(&self) -> usize {
    self.rows.len()
      + self.advisors.len()
      + self.lekha.len()
      + self.plan_committee.len()
  }

  /// `true` when there is nothing to show: the documented empty state.
  pub fn is_empty(&self) -> bool { self.len() == 0 }
}

// ─── Date-scoped roster ──────────────────────────────────────────────────────

/// Board and committees split by tenure relative to `as_of`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateScopedRoster {
  pub as_of:    NaiveDate,
  pub current:  BoardView,
  pub previous: BoardView,
}

// ─── Period-scoped roster ────────────────────────────────────────────────────

/// Everyone who served in one transition period.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeriodGroup {
  pub period_id:            PeriodId,
  /// `None` when neither the period list nor any member carried a record for
  /// `period_id`.
  pub period:               Option<TransitionPeriod>,
  pub board:                BoardView,
  /// The chairperson of the immediately preceding period. Only ever set on
  /// the latest group.
  pub previous_chairperson: Option<Person>,
}

/// Members grouped by transition period, most recent period first.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeriodRoster {
  pub latest_period_id: Option<PeriodId>,
  /// Period ids by descending start year.
  pub order:            Vec<PeriodId>,
  pub periods:          BTreeMap<PeriodId, PeriodGroup>,
}

impl PeriodRoster {
  pub fn get(&self, id: PeriodId) -> Option<&PeriodGroup> { self.periods.get(&id) }

  /// The current (most recent) period.
  pub fn latest(&self) -> Option<&PeriodGroup> {
    self.latest_period_id.and_then(|id| self.get(id))
  }

  /// All groups in display order, latest first.
  pub fn in_order(&self) -> impl Iterator<Item = &PeriodGroup> {
    self.order.iter().filter_map(|id| self.periods.get(id))
  }

  /// Every period except the latest, most recent first.
  pub fn previous(&self) -> impl Iterator<Item = &PeriodGroup> {
    self.in_order().skip(1)
  }

  pub fn is_empty(&self) -> bool { self.periods.is_empty() }
}

// ─── Staff ───────────────────────────────────────────────────────────────────

/// Staff members split by tenure, in directory order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StaffView {
  pub current:  Vec<Person>,
  pub previous: Vec<Person>,
}
