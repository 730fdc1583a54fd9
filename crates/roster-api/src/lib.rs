//! Read-only JSON API serving resolved roster view models.
//!
//! Exposes an axum [`Router`] backed by any
//! [`roster_core::directory::MemberDirectory`]. Every request fetches a fresh
//! snapshot and resolves it from scratch. Auth, TLS, and CRUD are the
//! backend's responsibility.
//!
//! # Mounting
//!
//! ```rust,ignore
//! .nest("/api", roster_api::api_router(state))
//! ```

pub mod error;
pub mod members;
pub mod roster;

use std::sync::Arc;

use axum::{Router, routing::get};
use roster_core::{RosterConfig, directory::MemberDirectory};
use tower_http::trace::TraceLayer;

pub use error::ApiError;

// ─── Application state ────────────────────────────────────────────────────────

/// Shared state threaded through all handlers.
pub struct ApiState<D> {
  pub directory:          Arc<D>,
  pub config:             Arc<RosterConfig>,
  /// Added to the local calendar year to get the year period records use.
  pub period_year_offset: i32,
}

impl<D> ApiState<D> {
  pub fn new(directory: D, config: RosterConfig) -> Self {
    Self {
      directory:          Arc::new(directory),
      config:             Arc::new(config),
      period_year_offset: 0,
    }
  }
}

// Manual impl: `D` itself need not be `Clone`.
impl<D> Clone for ApiState<D> {
  fn clone(&self) -> Self {
    Self {
      directory:          Arc::clone(&self.directory),
      config:             Arc::clone(&self.config),
      period_year_offset: self.period_year_offset,
    }
  }
}

// ─── Router ───────────────────────────────────────────────────────────────────

/// Build the roster API router for `state`.
///
/// The returned `Router<()>` can be nested into any parent router regardless
/// of its own state type.
pub fn api_router<D>(state: ApiState<D>) -> Router<()>
where
  D: MemberDirectory + 'static,
{
  Router::new()
    .route("/roster", get(roster::date_scoped::<D>))
    .route("/roster/periods", get(roster::period_scoped::<D>))
    .route("/roster/staff", get(roster::staff::<D>))
    .route("/roster/featured", get(roster::featured::<D>))
    .route("/roster/board", get(roster::recent_board::<D>))
    .route("/members", get(members::list::<D>))
    .layer(TraceLayer::new_for_http())
    .with_state(state)
}

// ─── Integration tests ────────────────────────────────────────────────────────
