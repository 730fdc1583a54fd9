//! The `MemberDirectory` trait: where roster snapshots come from.
//!
//! The trait is implemented by directory backends (e.g. `roster-directory`).
//! Higher layers (`roster-api`, `roster-cli`) depend on this abstraction, not
//! on any concrete backend.

use std::{convert::Infallible, future::Future, sync::Arc};

use serde::{Deserialize, Serialize};

use crate::person::{Person, TransitionPeriod};

// ─── Trait ───────────────────────────────────────────────────────────────────

/// Read-only source of member and transition-period records.
///
/// Every call returns a full snapshot. Callers resolve from scratch each time
/// and never cache across calls.
///
/// All methods return `Send` futures so the trait can be used in multi-threaded
/// async runtimes (e.g. tokio with `axum`).
pub trait MemberDirectory: Send + Sync {
  type Error: std::error::Error + Send + Sync + 'static;

  /// Every person record, in directory order.
  fn fetch_members(
    &self,
  ) -> impl Future<Output = Result<Vec<Person>, Self::Error>> + Send + '_;

  /// Every transition period record.
  fn fetch_transition_periods(
    &self,
  ) -> impl Future<Output = Result<Vec<TransitionPeriod>, Self::Error>> + Send + '_;
}

// ─── Snapshot ────────────────────────────────────────────────────────────────

/// A complete directory snapshot.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
  #[serde(default)]
  pub members: Vec<Person>,
  #[serde(default)]
  pub periods: Vec<TransitionPeriod>,
}

// ─── In-memory directory ─────────────────────────────────────────────────────

/// A directory serving a fixed in-memory snapshot.
///
/// Cloning is cheap; the snapshot is reference-counted.
#[derive(Debug, Clone, Default)]
pub struct StaticDirectory {
  snapshot: Arc<Snapshot>,
}

impl StaticDirectory {
  pub fn new(snapshot: Snapshot) -> Self {
    Self {
      snapshot: Arc::new(snapshot),
    }
  }
}

impl From<Snapshot> for StaticDirectory {
  fn from(snapshot: Snapshot) -> Self { Self::new(snapshot) }
}

impl MemberDirectory for StaticDirectory {
  type Error = Infallible;

  async fn fetch_members(&self) -> Result<Vec<Person>, Infallible> {
    Ok(self.snapshot.members.clone())
  }

  async fn fetch_transition_periods(
    &self,
  ) -> Result<Vec<TransitionPeriod>, Infallible> {
    Ok(self.snapshot.periods.clone())
  }
}
