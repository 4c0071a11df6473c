//! JSON REST API for Succession.
//!
//! Exposes an axum [`Router`] over a shared, read-only [`Roster`]. Transport
//! concerns (binding, TLS, request tracing) are the caller's responsibility.
//!
//! # Mounting
//!
//! ```rust,ignore
//! .nest("/api", succession_api::api_router(roster.clone()))
//! ```

pub mod error;
pub mod etag;
pub mod people;
pub mod snapshot;
pub mod timeline;

use std::sync::Arc;

use axum::{Router, routing::get};
use chrono::NaiveDate;
use succession_core::{Roster, date::parse_date};

pub use error::ApiError;
use etag::Fingerprint;

/// State shared by every handler.
#[derive(Clone)]
pub struct ApiState {
  pub roster:      Arc<Roster>,
  /// Digest of the roster content, used to derive ETags.
  pub fingerprint: Arc<Fingerprint>,
}

impl ApiState {
  pub fn new(roster: Arc<Roster>) -> Self {
    let fingerprint = Arc::new(etag::roster_fingerprint(&roster));
    Self {
      roster,
      fingerprint,
    }
  }
}

/// Build the API router for `roster`.
///
/// The returned `Router<()>` can be nested into any parent router regardless
/// of its own state type.
pub fn api_router(roster: Arc<Roster>) -> Router<()> {
  Router::new()
    .route("/snapshot", get(snapshot::handler))
    // Timeline
    .route("/events", get(timeline::list))
    .route("/events/{date}", get(timeline::on_date))
    .route("/navigate", get(timeline::navigate))
    // People
    .route("/people", get(people::list))
    .route("/people/{id}", get(people::get_one))
    .with_state(ApiState::new(roster))
}

/// Parse a date supplied in a path or query string.
pub(crate) fn date_param(value: &str) -> Result<NaiveDate, ApiError> {
  Ok(parse_date(value)?)
}
