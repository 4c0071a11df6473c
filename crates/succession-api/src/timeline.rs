//! Handlers for the event timeline.
//!
//! | Method | Path | Notes |
//! |--------|------|-------|
//! | `GET`  | `/events` | Every event date, ascending |
//! | `GET`  | `/events/:date` | Sentences describing the changes on one date |
//! | `GET`  | `/navigate` | `?from=<date>&direction=previous\|next` |

use axum::{
  Json,
  extract::{Path, Query, State},
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use succession_core::timeline::EventIndex;

use crate::{ApiState, date_param, error::ApiError};

// ─── List ─────────────────────────────────────────────────────────────────────

/// `GET /events`
pub async fn list(State(state): State<ApiState>) -> Json<EventIndex> {
  Json(state.roster.event_dates())
}

// ─── On date ──────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct EventsOnDate {
  pub date:   NaiveDate,
  pub events: Vec<String>,
}

/// `GET /events/:date`
pub async fn on_date(
  State(state): State<ApiState>,
  Path(raw): Path<String>,
) -> Result<Json<EventsOnDate>, ApiError> {
  let date = date_param(&raw)?;
  Ok(Json(EventsOnDate {
    date,
    events: state.roster.describe_events_on(date),
  }))
}

// ─── Navigate ─────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
  Previous,
  Next,
}

#[derive(Debug, Deserialize)]
pub struct NavigateParams {
  pub from:      String,
  pub direction: Direction,
}

#[derive(Debug, Serialize)]
pub struct Navigation {
  pub from: NaiveDate,
  /// `null` when there is nowhere to go.
  pub date: Option<NaiveDate>,
}

/// `GET /navigate?from=<date>&direction=previous|next`
pub async fn navigate(
  State(state): State<ApiState>,
  Query(params): Query<NavigateParams>,
) -> Result<Json<Navigation>, ApiError> {
  let from = date_param(&params.from)?;
  let index = state.roster.event_dates();
  let date = match params.direction {
    Direction::Previous => index.previous(from),
    Direction::Next => index.next(from),
  };
  Ok(Json(Navigation { from, date }))
}
