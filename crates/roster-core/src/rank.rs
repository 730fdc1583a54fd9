//! Rank lookup and the stable rank sort applied to board members.

use serde::{Deserialize, Serialize};

use crate::{config::RosterConfig, person::Person};

/// A position's place in the rank table.
///
/// Variant order gives the total order: every ranked title sorts before
/// `Unranked`, and ranked titles sort by table index.
#[derive(
  Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Rank {
  Ranked(usize),
  Unranked,
}

impl RosterConfig {
  /// Look up the rank of a position title.
  ///
  /// The position is trimmed; after that only an exact match against a
  /// title or alias counts.
  pub fn rank(&self, position: &str) -> Rank {
    let position = position.trim();
    self
      .ranks
      .iter()
      .position(|entry| entry.titles().any(|t| t == position))
      .map_or(Rank::Unranked, Rank::Ranked)
  }
}

/// Sort `members` by rank, highest first. Equal ranks (including all
/// unranked positions) keep their input order.
pub fn sort_by_rank(members: &mut [Person], config: &RosterConfig) {
  members.sort_by_key(|p| config.rank(&p.position));
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::person::{PersonId, RoleType};

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

  fn board(id: i64, position: &str) -> Person {
    Person::new(PersonId(id), format!("P{id}"), RoleType::Board, position)
  }

  #[test]
  fn rank_is_table_index() {
    let c = config();
    assert_eq!(c.rank("Chairman"), Rank::Ranked(0));
    assert_eq!(c.rank("Joint Treasurer"), Rank::Ranked(5));
  }

  #[test]
  fn rank_lookup_trims_but_does_not_fold_case() {
    let c = config();
    assert_eq!(c.rank("  Secretary\t"), Rank::Ranked(2));
    assert_eq!(c.rank("secretary"), Rank::Unranked);
    assert_eq!(c.rank("Secretary General"), Rank::Unranked);
  }

  #[test]
  fn aliases_share_their_entry_rank() {
    let c = RosterConfig::default();
    assert_eq!(c.rank("अध्यक्ष"), Rank::Ranked(0));
    assert_eq!(c.rank("Chairman"), Rank::Ranked(0));
    assert_eq!(c.rank("Treasurer"), c.rank("कोषाधक्ष्य"));
  }

  #[test]
  fn unranked_sorts_after_every_rank() {
    assert!(Rank::Ranked(usize::MAX) < Rank::Unranked);
  }

  #[test]
  fn sort_is_stable_with_unranked_last() {
    // Ranks [2, 0, 1, unranked, unranked].
    let mut members = vec![
      board(0, "Secretary"),
      board(1, "Chairman"),
      board(2, "Vice Chairman"),
      board(3, "Member"),
      board(4, "Member"),
    ];
    sort_by_rank(&mut members, &config());
    let order: Vec<i64> = members.iter().map(|p| p.id.0).collect();
    assert_eq!(order, vec![1, 2, 0, 3, 4]);
  }

  #[test]
  fn equal_ranks_keep_input_order() {
    let mut members = vec![
      board(7, "Member"),
      board(3, "Chairman"),
      board(5, "Member"),
      board(1, "Chairman"),
    ];
    sort_by_rank(&mut members, &config());
    let order: Vec<i64> = members.iter().map(|p| p.id.0).collect();
    assert_eq!(order, vec![3, 1, 7, 5]);
  }
}
