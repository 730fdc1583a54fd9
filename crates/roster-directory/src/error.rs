//! Error type for `roster-directory`.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("http error: {0}")]
  Http(#[from] reqwest::Error),

  #[error("GET {url} returned {status}")]
  Status {
    url:    String,
    status: reqwest::StatusCode,
  },

  #[error("json error: {0}")]
  Json(#[from] serde_json::Error),

  #[error("failed to read snapshot {path:?}: {source}")]
  Read {
    path:   PathBuf,
    #[source]
    source: std::io::Error,
  },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
