//! Picks the directory backend named by the settings.

use roster_core::{
  directory::MemberDirectory,
  person::{Person, TransitionPeriod},
};
use roster_directory::{Error, HttpConfig, HttpDirectory, SnapshotDirectory};

use crate::settings::Settings;

/// Either backend, behind one concrete type so the API router can be built
/// once.
#[derive(Clone)]
pub enum Source {
  Http(HttpDirectory),
  Snapshot(SnapshotDirectory),
}

impl Source {
  /// A snapshot file wins over the API URL when both are configured.
  pub fn from_settings(settings: &Settings) -> Result<Self, Error> {
    if let Some(path) = &settings.snapshot {
      tracing::info!(path = %path.display(), "reading members from snapshot file");
      return Ok(Self::Snapshot(SnapshotDirectory::new(path)));
    }
    tracing::info!(url = %settings.api_url, "reading members from backend API");
    let config = HttpConfig {
      base_url: settings.api_url.clone(),
      timeout:  settings.request_timeout(),
    };
    Ok(Self::Http(HttpDirectory::new(config)?))
  }
}

impl MemberDirectory for Source {
  type Error = Error;

  async fn fetch_members(&self) -> Result<Vec<Person>, Error> {
    match self {
      Self::Http(d) => d.fetch_members().await,
      Self::Snapshot(d) => d.fetch_members().await,
    }
  }

  async fn fetch_transition_periods(&self) -> Result<Vec<TransitionPeriod>, Error> {
    match self {
      Self::Http(d) => d.fetch_transition_periods().await,
      Self::Snapshot(d) => d.fetch_transition_periods().await,
    }
  }
}
