//! [`HttpDirectory`]: reads the organisation's REST backend.

use std::time::Duration;

use reqwest::Client;
use roster_core::{
  directory::MemberDirectory,
  person::{Person, TransitionPeriod},
};
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::debug;

use crate::{
  Error, Result,
  wire,
};

/// Connection settings for the backend API.
#[derive(Debug, Clone)]
pub struct HttpConfig {
  /// Base URL the endpoint names are appended to, e.g.
  /// `https://example.org/api/`.
  pub base_url: String,
  pub timeout:  Duration,
}

impl HttpConfig {
  pub fn new(base_url: impl Into<String>) -> Self {
    Self {
      base_url: base_url.into(),
      timeout:  Duration::from_secs(30),
    }
  }
}

/// A [`MemberDirectory`] backed by the `members` and `transition-periods`
/// endpoints.
///
/// Cheap to clone; the inner [`reqwest::Client`] is `Arc`-based.
#[derive(Clone)]
pub struct HttpDirectory {
  client: Client,
  config: HttpConfig,
}

impl HttpDirectory {
  pub fn new(config: HttpConfig) -> Result<Self> {
    let client = Client::builder().timeout(config.timeout).build()?;
    Ok(Self { client, config })
  }

  fn url(&self, endpoint: &str) -> String {
    format!("{}/{}", self.config.base_url.trim_end_matches('/'), endpoint)
  }

  async fn get_json<T: DeserializeOwned>(&self, endpoint: &str) -> Result<T> {
    let url = self.url(endpoint);
    let resp = self.client.get(&url).send().await?;

    let status = resp.status();
    if !status.is_success() {
      return Err(Error::Status { url, status });
    }

    let body = resp.bytes().await?;
    debug!(%url, bytes = body.len(), "fetched directory payload");
    Ok(serde_json::from_slice(&body)?)
  }
}

impl MemberDirectory for HttpDirectory {
  type Error = Error;

  /// `GET {base_url}/members`
  async fn fetch_members(&self) -> Result<Vec<Person>> {
    let raw: Vec<Value> = self.get_json("members").await?;
    Ok(wire::decode_members(raw))
  }

  /// `GET {base_url}/transition-periods`
  async fn fetch_transition_periods(&self) -> Result<Vec<TransitionPeriod>> {
    let raw: Vec<Value> = self.get_json("transition-periods").await?;
    Ok(wire::decode_periods(raw))
  }
}
