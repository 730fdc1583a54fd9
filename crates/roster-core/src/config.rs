//! Resolver configuration: the rank table and the title sets.
//!
//! Position titles are locale-specific strings, so they live here as data
//! rather than in the resolver. A [`RosterConfig`] is immutable once built and
//! is passed by reference into every resolver call.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// One rung of the rank table: a canonical title plus equivalent spellings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankEntry {
  pub title:   String,
  #[serde(default)]
  pub aliases: Vec<String>,
}

impl RankEntry {
  pub fn new(title: impl Into<String>) -> Self {
    Self {
      title:   title.into(),
      aliases: Vec::new(),
    }
  }

  pub fn with_alias(mut self, alias: impl Into<String>) -> Self {
    self.aliases.push(alias.into());
    self
  }

  /// The canonical title followed by its aliases.
  pub fn titles(&self) -> impl Iterator<Item = &str> {
    std::iter::once(self.title.as_str()).chain(self.aliases.iter().map(String::as_str))
  }
}

/// Immutable configuration for the roster resolvers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RosterConfig {
  /// Board positions from highest to lowest rank.
  pub ranks:              Vec<RankEntry>,
  /// Labels that all mean "chairperson"; used for the continuity link to the
  /// previous period.
  pub chairperson_titles: Vec<String>,
  /// Positions highlighted on the homepage.
  pub featured_titles:    Vec<String>,
}

impl Default for RosterConfig {
  fn default() -> Self {
    Self {
      ranks:              vec![
        RankEntry::new("अध्यक्ष").with_alias("Chairman"),
        RankEntry::new("उपाध्याक्ष").with_alias("Vice Chairman"),
        RankEntry::new("सचिब").with_alias("Secretary"),
        RankEntry::new("कोषाधक्ष्य").with_alias("Treasurer"),
        RankEntry::new("सहसचिब").with_alias("Joint Secretary"),
        RankEntry::new("सहकोषाधक्ष्य").with_alias("Joint Treasurer"),
      ],
      chairperson_titles: vec!["अध्यक्ष".into(), "Chairman".into()],
      featured_titles:    vec![
        "अध्यक्ष".into(),
        "उपाध्याक्ष".into(),
        "सचिब".into(),
        "Chairman".into(),
        "Vice Chairman".into(),
        "Secretary".into(),
      ],
    }
  }
}

impl RosterConfig {
  /// Build a configuration whose rank table is exactly `titles`, in order,
  /// with no aliases. The first title doubles as the chairperson title.
  pub fn with_ranks<I, T>(titles: I) -> Self
  where
    I: IntoIterator<Item = T>,
    T: Into<String>,
  {
    let ranks: Vec<RankEntry> = titles.into_iter().map(RankEntry::new).collect();
    let chairperson_titles = ranks.first().map(|r| r.title.clone()).into_iter().collect();
    Self {
      ranks,
      chairperson_titles,
      featured_titles: Vec::new(),
    }
  }

  /// Check the rank table is unambiguous: no empty titles, and no title
  /// claimed by two different rank entries.
  pub fn validate(&self) -> Result<()> {
    let mut seen: HashMap<&str, usize> = HashMap::new();
    for (index, entry) in self.ranks.iter().enumerate() {
      for title in entry.titles() {
        let title = title.trim();
        if title.is_empty() {
          return Err(Error::EmptyRankTitle(index));
        }
        if let Some(&first) = seen.get(title)
          && first != index
        {
          return Err(Error::DuplicateRankTitle {
            title: title.to_owned(),
            first,
            second: index,
          });
        }
        seen.insert(title, index);
      }
    }
    if self.chairperson_titles.iter().all(|t| t.trim().is_empty()) {
      return Err(Error::NoChairpersonTitles);
    }
    Ok(())
  }

  /// Whether `position` (trimmed) is one of the chairperson labels.
  pub fn is_chairperson(&self, position: &str) -> bool {
    contains_title(&self.chairperson_titles, position)
  }

  /// Whether `position` (trimmed) is one of the homepage-featured titles.
  pub fn is_featured(&self, position: &str) -> bool {
    contains_title(&self.featured_titles, position)
  }
}

fn contains_title(titles: &[String], position: &str) -> bool {
  let position = position.trim();
  titles.iter().any(|t| t == position)
}
