//! Error types for `succession-core`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("malformed date in {field}: {value:?}")]
  MalformedDate { field: &'static str, value: String },

  #[error("unknown role type: {0:?}")]
  UnknownRole(String),

  #[error("dataset error: {0}")]
  Json(#[from] serde_json::Error),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
