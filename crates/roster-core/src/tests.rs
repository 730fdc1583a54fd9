//! Resolver tests over small hand-built snapshots.

use chrono::NaiveDate;

use crate::{
  config::RosterConfig,
  person::{PeriodId, Person, PersonId, RoleType, TransitionPeriod},
  resolve::{
    board_view, featured_officers, filter_by_role, recent_board, resolve_date_scoped,
    resolve_period_scoped, resolve_staff, role_filter,
  },
};

fn d(s: &str) -> NaiveDate { NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap() }

fn config() -> RosterConfig {
  RosterConfig::with_ranks([
    "Chairman",
    "Vice Chairman",
    "Secretary",
    "Treasurer",
    "Joint Secretary",
    "Joint Treasurer",
  ])
}

fn person(id: i64, role: RoleType, position: &str) -> Person {
  Person::new(PersonId(id), format!("P{id}"), role, position)
}

fn board(id: i64, position: &str) -> Person { person(id, RoleType::Board, position) }

fn ids<'a>(people: impl IntoIterator<Item = &'a Person>) -> Vec<i64> {
  people.into_iter().map(|p| p.id.0).collect()
}

fn period(id: i64, start: i32, end: Option<i32>) -> TransitionPeriod {
  TransitionPeriod::new(PeriodId(id), start, end)
}

// ─── Date-scoped ─────────────────────────────────────────────────────────────

#[test]
fn chairman_current_secretary_previous() {
  let a = Person::new(PersonId(1), "A", RoleType::Board, "Chairman");
  let b = Person::new(PersonId(2), "B", RoleType::Board, "Secretary")
    .with_leaving_date(d("2020-01-01"));

  let roster = resolve_date_scoped(&[a, b], d("2021-01-01"), &config());

  assert_eq!(roster.current.rows.first.as_ref().map(|p| p.name.as_str()), Some("A"));
  assert!(roster.current.rows.second.is_empty());
  assert_eq!(roster.current.len(), 1);
  assert_eq!(ids(roster.previous.rows.iter()), vec![2]);
}

#[test]
fn leaving_on_reference_date_is_previous() {
  let as_of = d("2024-06-01");
  let persons = vec![
    board(1, "Chairman").with_leaving_date(as_of),
    board(2, "Secretary").with_leaving_date(d("2024-06-02")),
    board(3, "Treasurer"),
  ];

  let roster = resolve_date_scoped(&persons, as_of, &config());

  assert_eq!(ids(roster.current.rows.iter()), vec![2, 3]);
  assert_eq!(ids(roster.previous.rows.iter()), vec![1]);
}

#[test]
fn absent_leaving_date_is_always_current() {
  let persons: Vec<Person> = (0..8).map(|i| board(i, "Member")).collect();
  for as_of in [d("1990-01-01"), d("2024-02-29"), d("2199-12-31")] {
    let roster = resolve_date_scoped(&persons, as_of, &config());
    assert_eq!(roster.current.len(), 8);
    assert!(roster.previous.is_empty());
  }
}

#[test]
fn staff_are_excluded_from_board_view() {
  let persons = vec![
    person(1, RoleType::Staff, "Chairman"),
    board(2, "Chairman"),
    person(3, RoleType::Staff, "Accountant"),
  ];

  let roster = resolve_date_scoped(&persons, d("2024-01-01"), &config());

  assert_eq!(ids(roster.current.rows.iter()), vec![2]);
  assert_eq!(roster.current.len(), 1);
}

#[test]
fn committees_land_in_their_own_sections() {
  let persons = vec![
    person(1, RoleType::Advisor, "Chairman"),
    person(2, RoleType::Lekha, "Coordinator"),
    board(3, "Secretary"),
    person(4, RoleType::PlanCommittee, "Member"),
    person(5, RoleType::Advisor, "Advisor"),
  ];

  let roster = resolve_date_scoped(&persons, d("2024-01-01"), &config());
  let view = roster.current;

  assert_eq!(ids(view.rows.iter()), vec![3]);
  // Committee sections keep input order; rank applies to the board only.
  assert_eq!(ids(&view.advisors), vec![1, 5]);
  assert_eq!(ids(&view.lekha), vec![2]);
  assert_eq!(ids(&view.plan_committee), vec![4]);
}

#[test]
fn unknown_role_types_are_excluded() {
  let persons = vec![
    person(1, RoleType::Unknown("volunteer".into()), "Chairman"),
    board(2, "Secretary"),
  ];

  let roster = resolve_date_scoped(&persons, d("2024-01-01"), &config());

  assert_eq!(roster.current.len(), 1);
  assert_eq!(ids(roster.current.rows.iter()), vec![2]);
}

#[test]
fn board_is_rank_sorted_into_rows() {
  let persons = vec![
    board(1, "Member"),
    board(2, "Joint Treasurer"),
    board(3, "Secretary"),
    board(4, "Chairman"),
    board(5, "Member"),
    board(6, "Vice Chairman"),
    board(7, "Treasurer"),
    board(8, "Joint Secretary"),
  ];

  let roster = resolve_date_scoped(&persons, d("2024-01-01"), &config());
  let rows = &roster.current.rows;

  assert_eq!(rows.first.as_ref().map(|p| p.id.0), Some(4));
  assert_eq!(ids(&rows.second), vec![6, 3, 7]);
  assert_eq!(ids(&rows.third), vec![8, 2]);
  assert_eq!(ids(&rows.rest), vec![1, 5]);
}

#[test]
fn empty_input_yields_empty_shape() {
  let roster = resolve_date_scoped(&[], d("2024-01-01"), &config());
  assert!(roster.current.is_empty());
  assert!(roster.previous.is_empty());
  assert!(roster.current.rows.first.is_none());

  let periods = resolve_period_scoped(&[], &[], &config());
  assert!(periods.is_empty());
  assert_eq!(periods.latest_period_id, None);
  assert!(periods.order.is_empty());

  assert!(board_view(Vec::new(), &config()).is_empty());
}

// ─── Staff ───────────────────────────────────────────────────────────────────

#[test]
fn staff_view_splits_by_tenure_in_input_order() {
  let as_of = d("2024-01-01");
  let persons = vec![
    person(1, RoleType::Staff, "Accountant"),
    board(2, "Chairman"),
    person(3, RoleType::Staff, "Technician").with_leaving_date(d("2023-01-01")),
    person(4, RoleType::Staff, "Clerk"),
  ];

  let staff = resolve_staff(&persons, as_of);

  assert_eq!(ids(&staff.current), vec![1, 4]);
  assert_eq!(ids(&staff.previous), vec![3]);
}

// ─── Period-scoped ───────────────────────────────────────────────────────────

#[test]
fn periods_ordered_by_start_year_descending() {
  let p75 = period(10, 2075, Some(2079));
  let p80 = period(20, 2080, Some(2084));
  let p78 = period(30, 2078, Some(2079));
  let persons = vec![
    board(1, "Chairman").in_period(&p75),
    board(2, "Chairman").in_period(&p80),
    board(3, "Chairman").in_period(&p78),
  ];

  let roster =
    resolve_period_scoped(&persons, &[p75.clone(), p80.clone(), p78.clone()], &config());

  let years: Vec<i32> = roster
    .in_order()
    .filter_map(|g| g.period.as_ref().map(|p| p.start_year))
    .collect();
  assert_eq!(years, vec![2080, 2078, 2075]);
  assert_eq!(roster.latest_period_id, Some(PeriodId(20)));
  assert_eq!(
    roster.previous().map(|g| g.period_id).collect::<Vec<_>>(),
    vec![PeriodId(30), PeriodId(10)]
  );
}

#[test]
fn period_keys_are_exactly_the_present_ids() {
  let p1 = period(1, 2070, Some(2074));
  let p2 = period(2, 2075, Some(2079));
  let unused = period(3, 2080, None);
  let persons = vec![
    board(1, "Chairman").in_period(&p1),
    person(2, RoleType::Advisor, "Advisor").in_period(&p2),
    board(3, "Secretary").in_period(&p1),
    board(4, "Member"),
    person(5, RoleType::Staff, "Clerk").in_period(&unused),
  ];

  let roster = resolve_period_scoped(&persons, &[p1, p2, unused], &config());

  let keys: Vec<PeriodId> = roster.periods.keys().copied().collect();
  assert_eq!(keys, vec![PeriodId(1), PeriodId(2)]);
  assert_eq!(roster.order.len(), 2);
}

#[test]
fn start_year_ties_keep_input_order() {
  let a = period(5, 2080, Some(2084));
  let b = period(6, 2080, Some(2082));
  let persons = vec![board(1, "Member").in_period(&b), board(2, "Member").in_period(&a)];

  let roster = resolve_period_scoped(&persons, &[a, b], &config());

  assert_eq!(roster.order, vec![PeriodId(6), PeriodId(5)]);
}

#[test]
fn period_record_falls_back_to_embedded_copy() {
  let embedded = period(9, 2081, None);
  let older = period(4, 2076, Some(2080));
  let persons = vec![
    board(1, "Chairman").in_period(&older),
    board(2, "Chairman").in_period(&embedded),
  ];

  // Only the older period appears in the period list.
  let roster = resolve_period_scoped(&persons, &[older], &config());

  assert_eq!(roster.latest_period_id, Some(PeriodId(9)));
  assert_eq!(roster.latest().and_then(|g| g.period.clone()), Some(embedded));
}

#[test]
fn unknown_period_records_sort_last() {
  let dated = period(1, 2070, Some(2074));
  let mut orphan = board(2, "Member");
  orphan.period_id = Some(PeriodId(99));

  let persons = vec![orphan, board(1, "Member").in_period(&dated)];
  let roster = resolve_period_scoped(&persons, &[dated], &config());

  assert_eq!(roster.order, vec![PeriodId(1), PeriodId(99)]);
  assert!(roster.get(PeriodId(99)).is_some_and(|g| g.period.is_none()));
}

#[test]
fn previous_chairperson_comes_from_preceding_period() {
  let current = period(2, 2080, Some(2084));
  let preceding = period(1, 2075, Some(2079));
  let oldest = period(0, 2070, Some(2074));
  let persons = vec![
    board(10, "Chairman").in_period(&current),
    board(11, "Secretary").in_period(&preceding),
    board(12, "Chairman").in_period(&preceding),
    board(13, "Chairman").in_period(&oldest),
  ];

  let roster = resolve_period_scoped(&persons, &[current, preceding, oldest], &config());

  let latest = roster.latest().unwrap();
  assert_eq!(latest.previous_chairperson.as_ref().map(|p| p.id.0), Some(12));
  assert!(roster.previous().all(|g| g.previous_chairperson.is_none()));
}

#[test]
fn previous_chairperson_matches_any_configured_alias() {
  let current = period(2, 2080, None);
  let preceding = period(1, 2075, Some(2079));
  let persons = vec![
    board(1, "अध्यक्ष").in_period(&current),
    board(2, "Chairman ").in_period(&preceding),
  ];

  let roster =
    resolve_period_scoped(&persons, &[current, preceding], &RosterConfig::default());

  assert_eq!(
    roster.latest().and_then(|g| g.previous_chairperson.as_ref()).map(|p| p.id.0),
    Some(2)
  );
}

#[test]
fn previous_chairperson_absent_without_second_period() {
  let only = period(1, 2080, None);
  let persons = vec![board(1, "Chairman").in_period(&only)];

  let roster = resolve_period_scoped(&persons, &[only], &config());

  assert!(roster.latest().unwrap().previous_chairperson.is_none());
}

#[test]
fn previous_chairperson_absent_without_matching_position() {
  let current = period(2, 2080, None);
  let preceding = period(1, 2075, Some(2079));
  let persons = vec![
    board(1, "Chairman").in_period(&current),
    board(2, "Secretary").in_period(&preceding),
  ];

  let roster = resolve_period_scoped(&persons, &[current, preceding], &config());

  assert!(roster.latest().unwrap().previous_chairperson.is_none());
}

#[test]
fn period_groups_get_full_board_views() {
  let p = period(1, 2080, None);
  let persons = vec![
    board(1, "Secretary").in_period(&p),
    person(2, RoleType::Lekha, "Coordinator").in_period(&p),
    board(3, "Chairman").in_period(&p),
    person(4, RoleType::PlanCommittee, "Member").in_period(&p),
  ];

  let roster = resolve_period_scoped(&persons, std::slice::from_ref(&p), &config());
  let view = &roster.get(PeriodId(1)).unwrap().board;

  assert_eq!(ids(view.rows.iter()), vec![3, 1]);
  assert_eq!(ids(&view.lekha), vec![2]);
  assert_eq!(ids(&view.plan_committee), vec![4]);
}

// ─── Featured officers ───────────────────────────────────────────────────────

#[test]
fn featured_officers_require_title_and_running_period() {
  let running = period(1, 2080, Some(2084));
  let ended = period(2, 2075, Some(2079));
  let config = RosterConfig::default();
  let persons = vec![
    board(1, "Secretary").in_period(&running),
    board(2, "Treasurer").in_period(&running),
    board(3, "अध्यक्ष").in_period(&running),
    board(4, "Chairman").in_period(&ended),
    person(5, RoleType::Advisor, "Chairman").in_period(&running),
    board(6, "Vice Chairman"),
  ];

  let featured = featured_officers(&persons, &[running, ended], 2082, &config);

  assert_eq!(ids(&featured), vec![3, 1]);
}

#[test]
fn featured_officers_use_embedded_period_when_unlisted() {
  let open = period(1, 2080, None);
  let persons = vec![board(1, "Chairman").in_period(&open)];

  assert_eq!(
    ids(&featured_officers(&persons, &[], 2090, &RosterConfig::default())),
    vec![1]
  );
  assert!(featured_officers(&persons, &[], 2079, &RosterConfig::default()).is_empty());
}

// ─── Homepage board strip ────────────────────────────────────────────────────

#[test]
fn recent_board_is_board_only_newest_first() {
  let persons = vec![
    board(3, "Member"),
    person(9, RoleType::Staff, "Clerk"),
    board(7, "Chairman").with_leaving_date(d("2020-01-01")),
    person(8, RoleType::Advisor, "Advisor"),
    board(5, "Secretary"),
  ];

  assert_eq!(ids(&recent_board(&persons)), vec![7, 5, 3]);
  assert!(recent_board(&[]).is_empty());
}

// ─── Role filter ─────────────────────────────────────────────────────────────

#[test]
fn role_filter_treats_empty_and_all_as_everyone() {
  assert_eq!(role_filter(None), None);
  assert_eq!(role_filter(Some("")), None);
  assert_eq!(role_filter(Some("all")), None);
  assert_eq!(role_filter(Some("staff")), Some(RoleType::Staff));
  assert_eq!(
    role_filter(Some("volunteer")),
    Some(RoleType::Unknown("volunteer".into()))
  );
}

#[test]
fn role_filter_keeps_input_order() {
  let persons = vec![
    board(1, "Chairman"),
    person(2, RoleType::Staff, "Clerk"),
    board(3, "Member"),
  ];

  assert_eq!(ids(&filter_by_role(&persons, None)), vec![1, 2, 3]);
  assert_eq!(ids(&filter_by_role(&persons, Some(&RoleType::Board))), vec![1, 3]);
  assert_eq!(ids(&filter_by_role(&persons, Some(&RoleType::Staff))), vec![2]);
}
