//! HTTP server for the Succession API.
//!
//! Loads the roster dataset once at startup, reports anything odd about it
//! through `tracing`, and serves the read-only API under `/api`.

use std::{
  fs::File,
  io::BufReader,
  path::{Path, PathBuf},
  sync::Arc,
};

use anyhow::Context as _;
use axum::{Router, routing::get};
use serde::Deserialize;
use succession_core::Roster;
use tower_http::trace::TraceLayer;

// ─── Configuration ────────────────────────────────────────────────────────────

/// Runtime server configuration, deserialised from `config.toml` and
/// `SUCCESSION_*` environment variables.
#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
  #[serde(default = "default_host")]
  pub host:         String,
  #[serde(default = "default_port")]
  pub port:         u16,
  /// Path to the roster dataset (a JSON array of people).
  pub dataset_path: PathBuf,
}

fn default_host() -> String { "127.0.0.1".to_string() }

fn default_port() -> u16 { 5240 }

// ─── Dataset ──────────────────────────────────────────────────────────────────

/// Read the dataset at `path`, logging load warnings and audit findings.
///
/// Malformed individual records do not fail the load; an unreadable file or
/// a structurally invalid dataset does.
pub fn load_roster(path: &Path) -> anyhow::Result<Roster> {
  let file = File::open(path)
    .with_context(|| format!("failed to open dataset {}", path.display()))?;
  let loaded = Roster::load_reader(BufReader::new(file))
    .with_context(|| format!("failed to parse dataset {}", path.display()))?;

  for warning in &loaded.warnings {
    tracing::warn!(person = %warning.person_id, "{}", warning.error);
  }
  let findings = loaded.roster.audit();
  for finding in &findings {
    tracing::warn!("audit: {finding}");
  }
  tracing::info!(
    people = loaded.roster.len(),
    warnings = loaded.warnings.len(),
    findings = findings.len(),
    "loaded dataset {}",
    path.display()
  );

  Ok(loaded.roster)
}

// ─── Router ───────────────────────────────────────────────────────────────────

/// Build the server's router: the API under `/api` plus a liveness probe.
pub fn router(roster: Arc<Roster>) -> Router {
  Router::new()
    .route("/health", get(|| async { "ok" }))
    .nest("/api", succession_api::api_router(roster))
    .layer(TraceLayer::new_for_http())
}

#[cfg(test)]
mod tests {
  use std::io::Write as _;

  use axum::{
    body::Body,
    http::{Request, StatusCode},
  };
  use tower::ServiceExt as _;

  use super::*;

  const DATASET: &str = r#"[
    {"id": "pres", "name": "Name: Pres", "ordinationDate": "1990-01-01",
     "roles": [{"type": "President", "startDate": "2000-01-01", "endDate": null}]},
    {"id": "bad", "name": "Bad", "ordinationDate": "not a date", "roles": []}
  ]"#;

  fn write_temp(name: &str, contents: &str) -> PathBuf {
    let path = std::env::temp_dir()
      .join(format!("succession-server-{}-{name}", std::process::id()));
    let mut file = File::create(&path).unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    path
  }

  #[test]
  fn load_roster_keeps_malformed_records() {
    let path = write_temp("dataset.json", DATASET);
    let roster = load_roster(&path).unwrap();
    std::fs::remove_file(&path).ok();

    assert_eq!(roster.len(), 2);
    assert_eq!(roster.get("bad").unwrap().ordination_date, None);
  }

  #[test]
  fn load_roster_missing_file_is_an_error() {
    let err = load_roster(Path::new("/nonexistent/succession.json")).unwrap_err();
    assert!(err.to_string().contains("failed to open dataset"));
  }

  #[test]
  fn load_roster_rejects_non_array() {
    let path = write_temp("object.json", r#"{"people": []}"#);
    let result = load_roster(&path);
    std::fs::remove_file(&path).ok();
    assert!(result.is_err());
  }

  #[tokio::test]
  async fn api_is_nested_under_prefix() {
    let roster = Arc::new(Roster::load_json(DATASET).unwrap().roster);
    let req = Request::builder()
      .uri("/api/snapshot?date=2001-01-01")
      .body(Body::empty())
      .unwrap();
    let resp = router(roster).oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
      .await
      .unwrap();
    let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body["leadership"][0]["person"]["id"], "pres");
  }

  #[tokio::test]
  async fn health_probe() {
    let req = Request::builder().uri("/health").body(Body::empty()).unwrap();
    let resp = router(Arc::new(Roster::default())).oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
  }

  #[test]
  fn config_defaults() {
    let cfg: ServerConfig = config::Config::builder()
      .set_override("dataset_path", "data/apostles.json")
      .unwrap()
      .build()
      .unwrap()
      .try_deserialize()
      .unwrap();
    assert_eq!(cfg.host, "127.0.0.1");
    assert_eq!(cfg.port, 5240);
    assert_eq!(cfg.dataset_path, PathBuf::from("data/apostles.json"));
  }
}
