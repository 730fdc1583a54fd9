//! Handlers for `/roster` endpoints.
//!
//! | Method | Path | Notes |
//! |--------|------|-------|
//! | `GET`  | `/roster` | Optional `?as_of=YYYY-MM-DD`; defaults to today |
//! | `GET`  | `/roster/periods` | Grouped by transition period, latest first |
//! | `GET`  | `/roster/staff` | Optional `?as_of=YYYY-MM-DD` |
//! | `GET`  | `/roster/featured` | Optional `?year=`; defaults to this year plus the configured offset |
//! | `GET`  | `/roster/board` | Homepage strip: board members, newest first |

use axum::{
  Json,
  extract::{Query, State},
};
use chrono::{Datelike, NaiveDate};
use roster_core::{
  date,
  directory::MemberDirectory,
  person::{Person, TransitionPeriod},
  resolve,
  view::{DateScopedRoster, PeriodRoster, StaffView},
};
use serde::Deserialize;

use crate::{ApiState, error::ApiError};

// ─── Params ──────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize, Default)]
pub struct AsOfParams {
  /// Reference date, `YYYY-MM-DD`. Defaults to the server's local date.
  pub as_of: Option<String>,
}

impl AsOfParams {
  /// Unlike directory data, a caller-supplied date must be well-formed.
  fn resolve(&self) -> Result<NaiveDate, ApiError> {
    match self.as_of.as_deref().map(str::trim) {
      None | Some("") => Ok(date::today()),
      Some(raw) => NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .map_err(|e| ApiError::BadRequest(format!("invalid as_of {raw:?}: {e}"))),
    }
  }
}

#[derive(Debug, Deserialize, Default)]
pub struct FeaturedParams {
  /// Period year. Defaults to this year plus the configured offset.
  pub year: Option<String>,
}

impl FeaturedParams {
  fn resolve(&self, period_year_offset: i32) -> Result<i32, ApiError> {
    match self.year.as_deref().map(str::trim) {
      None | Some("") => Ok(date::today().year() + period_year_offset),
      Some(raw) => raw
        .parse::<i32>()
        .map_err(|e| ApiError::BadRequest(format!("invalid year {raw:?}: {e}"))),
    }
  }
}

async fn members<D: MemberDirectory>(
  state: &ApiState<D>,
) -> Result<Vec<Person>, ApiError> {
  state
    .directory
    .fetch_members()
    .await
    .map_err(ApiError::directory)
}

async fn snapshot<D: MemberDirectory>(
  state: &ApiState<D>,
) -> Result<(Vec<Person>, Vec<TransitionPeriod>), ApiError> {
  tokio::try_join!(
    state.directory.fetch_members(),
    state.directory.fetch_transition_periods(),
  )
  .map_err(ApiError::directory)
}

// ─── Handlers ────────────────────────────────────────────────────────────────

/// `GET /roster[?as_of=YYYY-MM-DD]`
pub async fn date_scoped<D: MemberDirectory>(
  State(state): State<ApiState<D>>,
  Query(params): Query<AsOfParams>,
) -> Result<Json<DateScopedRoster>, ApiError> {
  let as_of = params.resolve()?;
  let persons = members(&state).await?;
  Ok(Json(resolve::resolve_date_scoped(&persons, as_of, &state.config)))
}

/// `GET /roster/periods`
pub async fn period_scoped<D: MemberDirectory>(
  State(state): State<ApiState<D>>,
) -> Result<Json<PeriodRoster>, ApiError> {
  let (persons, periods) = snapshot(&state).await?;
  Ok(Json(resolve::resolve_period_scoped(&persons, &periods, &state.config)))
}

/// `GET /roster/staff[?as_of=YYYY-MM-DD]`
pub async fn staff<D: MemberDirectory>(
  State(state): State<ApiState<D>>,
  Query(params): Query<AsOfParams>,
) -> Result<Json<StaffView>, ApiError> {
  let as_of = params.resolve()?;
  let persons = members(&state).await?;
  Ok(Json(resolve::resolve_staff(&persons, as_of)))
}

/// `GET /roster/featured[?year=<period year>]`
pub async fn featured<D: MemberDirectory>(
  State(state): State<ApiState<D>>,
  Query(params): Query<FeaturedParams>,
) -> Result<Json<Vec<Person>>, ApiError> {
  let year = params.resolve(state.period_year_offset)?;
  let (persons, periods) = snapshot(&state).await?;
  Ok(Json(resolve::featured_officers(
    &persons,
    &periods,
    year,
    &state.config,
  )))
}

/// `GET /roster/board`
pub async fn recent_board<D: MemberDirectory>(
  State(state): State<ApiState<D>>,
) -> Result<Json<Vec<Person>>, ApiError> {
  let persons = members(&state).await?;
  Ok(Json(resolve::recent_board(&persons)))
}
