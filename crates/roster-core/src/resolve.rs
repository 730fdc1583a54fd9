//! The roster resolvers.
//!
//! Two strategies coexist because the directory's data model evolved between
//! them:
//!
//! - [`resolve_date_scoped`] classifies people by comparing their leaving
//!   date with a reference date.
//! - [`resolve_period_scoped`] groups people by transition period and links
//!   the current board to the previous period's chairperson.
//!
//! Both share [`board_view`] for the rank sort, the 1-3-2-rest row split and
//! the committee sections. Every function here is pure: same snapshot in,
//! same view out, and no input is ever fatal.

use std::{cmp::Reverse, collections::HashMap};

use chrono::NaiveDate;
use tracing::{debug, warn};

use crate::{
  config::RosterConfig,
  date::Tenure,
  person::{PeriodId, Person, RoleType, TransitionPeriod},
  rank::sort_by_rank,
  view::{BoardRows, BoardView, DateScopedRoster, PeriodGroup, PeriodRoster, StaffView},
};

// ─── Shared helper ───────────────────────────────────────────────────────────

/// Bucket `members` by role type and lay out the board.
///
/// Staff are not part of a board view and are skipped. Unknown role types are
/// skipped with a warning.
pub fn board_view<I>(members: I, config: &RosterConfig) -> BoardView
where
  I: IntoIterator<Item = Person>,
{
  let mut board = Vec::new();
  let mut view = BoardView::default();

  for person in members {
    if let RoleType::Unknown(raw) = &person.role_type {
      warn!(person_id = %person.id, role_type = %raw, "skipping person with unknown role type");
      continue;
    }
    match person.role_type {
      RoleType::Board => board.push(person),
      RoleType::Advisor => view.advisors.push(person),
      RoleType::Lekha => view.lekha.push(person),
      RoleType::PlanCommittee => view.plan_committee.push(person),
      RoleType::Staff | RoleType::Unknown(_) => {}
    }
  }

  sort_by_rank(&mut board, config);
  view.rows = BoardRows::from_sorted(board);
  view
}

// ─── Date-scoped ─────────────────────────────────────────────────────────────

/// Split board and committee members into current and previous by their
/// leaving date relative to `as_of`. Staff are excluded.
pub fn resolve_date_scoped(
  persons: &[Person],
  as_of: NaiveDate,
  config: &RosterConfig,
) -> DateScopedRoster {
  let (current, previous): (Vec<Person>, Vec<Person>) = persons
    .iter()
    .filter(|p| p.role_type != RoleType::Staff)
    .cloned()
    .partition(|p| Tenure::classify(p.leaving_date, as_of).is_current());

  debug!(
    %as_of,
    current = current.len(),
    previous = previous.len(),
    "resolved date-scoped roster"
  );

  DateScopedRoster {
    as_of,
    current: board_view(current, config),
    previous: board_view(previous, config),
  }
}

/// Staff members classified with the same leaving-date rule, in input order.
pub fn resolve_staff(persons: &[Person], as_of: NaiveDate) -> StaffView {
  let (current, previous) = persons
    .iter()
    .filter(|p| p.role_type == RoleType::Staff)
    .cloned()
    .partition(|p| Tenure::classify(p.leaving_date, as_of).is_current());
  StaffView { current, previous }
}

// ─── Period-scoped ───────────────────────────────────────────────────────────

struct Group {
  period_id: PeriodId,
  period:    Option<TransitionPeriod>,
  members:   Vec<Person>,
}

/// Group board and committee members by transition period.
///
/// Groups are keyed by exactly the `period_id` values present among the
/// non-staff persons; people without one are left out of this view. Period
/// records come from `periods`, falling back to the record embedded in a
/// member. Groups are ordered by start year, most recent first; ties and
/// groups with no known record keep first-appearance order, the latter after
/// every dated group.
pub fn resolve_period_scoped(
  persons: &[Person],
  periods: &[TransitionPeriod],
  config: &RosterConfig,
) -> PeriodRoster {
  let mut known: HashMap<PeriodId, &TransitionPeriod> = HashMap::new();
  for period in periods {
    known.entry(period.id).or_insert(period);
  }

  let mut groups: Vec<Group> = Vec::new();
  let mut index: HashMap<PeriodId, usize> = HashMap::new();
  let mut unscoped = 0usize;

  for person in persons.iter().filter(|p| p.role_type != RoleType::Staff) {
    let Some(period_id) = person.period_id else {
      unscoped += 1;
      continue;
    };
    let slot = *index.entry(period_id).or_insert_with(|| {
      groups.push(Group {
        period_id,
        period: known.get(&period_id).map(|p| (*p).clone()),
        members: Vec::new(),
      });
      groups.len() - 1
    });
    let group = &mut groups[slot];
    if group.period.is_none() {
      group.period = person.period.clone().filter(|p| p.id == period_id);
    }
    group.members.push(person.clone());
  }

  for group in groups.iter().filter(|g| g.period.is_none()) {
    warn!(period_id = %group.period_id, "no transition period record for members' period");
  }
  if unscoped > 0 {
    debug!(unscoped, "persons without a transition period left out of period view");
  }

  groups.sort_by_key(|g| Reverse(g.period.as_ref().map(|p| p.start_year)));

  let mut previous_chairperson = groups.get(1).and_then(|preceding| {
    preceding
      .members
      .iter()
      .find(|p| config.is_chairperson(&p.position))
      .cloned()
  });

  let order: Vec<PeriodId> = groups.iter().map(|g| g.period_id).collect();
  let latest_period_id = order.first().copied();

  let periods = groups
    .into_iter()
    .enumerate()
    .map(|(position, group)| {
      let resolved = PeriodGroup {
        period_id:            group.period_id,
        period:               group.period,
        board:                board_view(group.members, config),
        previous_chairperson: if position == 0 {
          previous_chairperson.take()
        } else {
          None
        },
      };
      (resolved.period_id, resolved)
    })
    .collect();

  PeriodRoster {
    latest_period_id,
    order,
    periods,
  }
}

// ─── Supplementary views ─────────────────────────────────────────────────────

/// Board members holding a featured title in a period that contains `year`,
/// rank-sorted.
///
/// The period is looked up by `period_id` in `periods`, else taken from the
/// embedded record. People with no period are never featured.
pub fn featured_officers(
  persons: &[Person],
  periods: &[TransitionPeriod],
  year: i32,
  config: &RosterConfig,
) -> Vec<Person> {
  let period_of = |person: &Person| -> Option<TransitionPeriod> {
    let id = person.period_id?;
    periods
      .iter()
      .find(|p| p.id == id)
      .or(person.period.as_ref().filter(|p| p.id == id))
      .cloned()
  };

  let mut featured: Vec<Person> = persons
    .iter()
    .filter(|p| p.role_type == RoleType::Board && config.is_featured(&p.position))
    .filter(|&p| period_of(p).is_some_and(|period| period.contains_year(year)))
    .cloned()
    .collect();
  sort_by_rank(&mut featured, config);
  featured
}

/// Every board member, newest record first (descending id), for the
/// homepage strip. Positions and tenure are ignored.
pub fn recent_board(persons: &[Person]) -> Vec<Person> {
  let mut board: Vec<Person> = persons
    .iter()
    .filter(|p| p.role_type == RoleType::Board)
    .cloned()
    .collect();
  board.sort_by_key(|p| Reverse(p.id));
  board
}

/// Read a `type` filter as sent by callers: absent, empty or `all` selects
/// everyone, anything else is matched exactly.
pub fn role_filter(raw: Option<&str>) -> Option<RoleType> {
  raw
    .filter(|k| !k.is_empty() && *k != "all")
    .map(|k| RoleType::from(k.to_owned()))
}

/// The back office's role filter: everyone when `role` is `None`, otherwise
/// only matching persons, in input order.
pub fn filter_by_role(persons: &[Person], role: Option<&RoleType>) -> Vec<Person> {
  persons
    .iter()
    .filter(|p| role.is_none_or(|r| &p.role_type == r))
    .cloned()
    .collect()
}
