//! Handlers for `/people` endpoints.
//!
//! | Method | Path | Notes |
//! |--------|------|-------|
//! | `GET`  | `/people` | Every person, in dataset order |
//! | `GET`  | `/people/:id` | 404 if not found |

use axum::{
  Json,
  extract::{Path, State},
  response::{IntoResponse, Response},
};

use crate::{ApiState, error::ApiError};

/// `GET /people`
pub async fn list(State(state): State<ApiState>) -> Response {
  Json(state.roster.all()).into_response()
}

/// `GET /people/:id`
pub async fn get_one(
  State(state): State<ApiState>,
  Path(id): Path<String>,
) -> Result<Response, ApiError> {
  let person = state
    .roster
    .get(&id)
    .ok_or_else(|| ApiError::NotFound(format!("person {id} not found")))?;
  Ok(Json(person).into_response())
}
