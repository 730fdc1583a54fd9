//! Handler for `GET /members`, the back office's role-filtered listing.
//!
//! `?type=` takes a role type (`board`, `staff`, ...) or `all`. Unknown
//! values match nothing rather than erroring.

use axum::{
  Json,
  extract::{Query, State},
};
use roster_core::{
  directory::MemberDirectory,
  person::{Person, RoleType},
  resolve,
};
use serde::Deserialize;

use crate::{ApiState, error::ApiError};

#[derive(Debug, Deserialize, Default)]
pub struct ListParams {
  #[serde(rename = "type")]
  pub kind: Option<String>,
}

impl ListParams {
  fn role(&self) -> Option<RoleType> { resolve::role_filter(self.kind.as_deref()) }
}

/// `GET /members[?type=<role>|all]`
pub async fn list<D: MemberDirectory>(
  State(state): State<ApiState<D>>,
  Query(params): Query<ListParams>,
) -> Result<Json<Vec<Person>>, ApiError> {
  let persons = state
    .directory
    .fetch_members()
    .await
    .map_err(ApiError::directory)?;
  Ok(Json(resolve::filter_by_role(&persons, params.role().as_ref())))
}
