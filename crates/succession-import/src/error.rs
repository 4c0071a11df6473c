//! Error types for the raw-text importer.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("unrecognised date: {0:?}")]
  InvalidDate(String),

  #[error("JSON error: {0}")]
  Json(#[from] serde_json::Error),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
