//! [`SnapshotDirectory`]: a JSON file in the backend's wire shape.

use std::path::{Path, PathBuf};

use roster_core::{
  directory::MemberDirectory,
  person::{Person, TransitionPeriod},
};

use crate::{
  Error, Result,
  wire::{self, RawSnapshot},
};

/// A [`MemberDirectory`] reading `{"members": [...], "transition_periods": [...]}`
/// from disk.
///
/// The file is re-read on every fetch, so edits show up on the next
/// resolution.
#[derive(Debug, Clone)]
pub struct SnapshotDirectory {
  path: PathBuf,
}

impl SnapshotDirectory {
  pub fn new(path: impl AsRef<Path>) -> Self {
    Self {
      path: path.as_ref().to_path_buf(),
    }
  }

  async fn load(&self) -> Result<RawSnapshot> {
    let bytes = tokio::fs::read(&self.path).await.map_err(|source| Error::Read {
      path: self.path.clone(),
      source,
    })?;
    Ok(serde_json::from_slice(&bytes)?)
  }
}

impl MemberDirectory for SnapshotDirectory {
  type Error = Error;

  async fn fetch_members(&self) -> Result<Vec<Person>> {
    Ok(wire::decode_members(self.load().await?.members))
  }

  async fn fetch_transition_periods(&self) -> Result<Vec<TransitionPeriod>> {
    Ok(wire::decode_periods(self.load().await?.transition_periods))
  }
}
