//! Error types for `roster-core`.
//!
//! The resolvers never fail; these errors cover configuration validation
//! only.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("rank entry {0} has an empty title")]
  EmptyRankTitle(usize),

  #[error("position title {title:?} appears in rank entries {first} and {second}")]
  DuplicateRankTitle {
    title:  String,
    first:  usize,
    second: usize,
  },

  #[error("chairperson title list is empty")]
  NoChairpersonTitles,
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
