//! Handler for `GET /snapshot`.
//!
//! Snapshots are pure functions of the roster and the date, so every
//! response carries an `ETag` and a matching `If-None-Match` yields
//! `304 Not Modified`.

use axum::{
  Json,
  extract::{Query, State},
  http::{HeaderMap, StatusCode, header},
  response::{IntoResponse, Response},
};
use serde::Deserialize;
use succession_core::date::today;

use crate::{ApiState, date_param, error::ApiError, etag::snapshot_etag};

#[derive(Debug, Deserialize, Default)]
pub struct SnapshotParams {
  /// `YYYY-MM-DD`; defaults to today.
  pub date: Option<String>,
}

/// `GET /snapshot[?date=YYYY-MM-DD]`
pub async fn handler(
  State(state): State<ApiState>,
  Query(params): Query<SnapshotParams>,
  headers: HeaderMap,
) -> Result<Response, ApiError> {
  let date = match params.date.as_deref() {
    Some(raw) => date_param(raw)?,
    None => today(),
  };

  let tag = snapshot_etag(&state.fingerprint, date);
  let matches = headers
    .get(header::IF_NONE_MATCH)
    .and_then(|v| v.to_str().ok())
    .is_some_and(|v| v.split(',').any(|t| t.trim() == tag || t.trim() == "*"));
  if matches {
    return Ok((StatusCode::NOT_MODIFIED, [(header::ETAG, tag)]).into_response());
  }

  tracing::debug!(%date, "resolving snapshot");
  let snapshot = state.roster.snapshot(date);
  Ok(([(header::ETAG, tag)], Json(snapshot)).into_response())
}
