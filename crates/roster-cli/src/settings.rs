//! Runtime settings, read from `roster.toml` and `ROSTER_*` environment
//! variables.

use std::{
  path::{Path, PathBuf},
  time::Duration,
};

use anyhow::Context as _;
use roster_core::RosterConfig;
use serde::Deserialize;

/// Everything the binary needs besides its command line.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Settings {
  /// Base URL of the backend, e.g. `http://localhost:8000/api/`.
  pub api_url:              String,
  /// Read this wire-format JSON file instead of calling `api_url`.
  pub snapshot:             Option<PathBuf>,
  pub host:                 String,
  pub port:                 u16,
  /// Added to the local year when picking the running period, for period
  /// years kept in a different calendar.
  pub period_year_offset:   i32,
  pub request_timeout_secs: u64,
  pub roster:               RosterConfig,
}

impl Default for Settings {
  fn default() -> Self {
    Self {
      api_url:              "http://localhost:8000/api/".to_string(),
      snapshot:             None,
      host:                 "127.0.0.1".to_string(),
      port:                 8080,
      period_year_offset:   0,
      request_timeout_secs: 30,
      roster:               RosterConfig::default(),
    }
  }
}

impl Settings {
  /// Layer the optional file at `path` under `ROSTER_*` environment
  /// variables (nested keys use `__`, e.g. `ROSTER_ROSTER__FEATURED_TITLES`).
  /// Title lists are comma-separated.
  pub fn load(path: &Path) -> anyhow::Result<Self> { Self::load_with_env(path, None) }

  /// [`Settings::load`] reading variables from `env` instead of the process
  /// environment when given.
  fn load_with_env(path: &Path, env: Option<config::Map<String, String>>) -> anyhow::Result<Self> {
    let settings: Settings = config::Config::builder()
      .add_source(config::File::from(path).required(false))
      .add_source(
        config::Environment::with_prefix("ROSTER")
          .prefix_separator("_")
          .separator("__")
          .try_parsing(true)
          .list_separator(",")
          .with_list_parse_key("roster.chairperson_titles")
          .with_list_parse_key("roster.featured_titles")
          .source(env),
      )
      .build()
      .context("failed to read config file")?
      .try_deserialize()
      .context("failed to deserialise settings")?;

    settings
      .roster
      .validate()
      .context("invalid roster configuration")?;
    Ok(settings)
  }

  pub fn request_timeout(&self) -> Duration { Duration::from_secs(self.request_timeout_secs) }
}
