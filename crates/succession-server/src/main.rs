//! succession server binary.
//!
//! Reads `config.toml` (or the path given with `--config`), loads the roster
//! dataset, and serves the JSON API over HTTP.
//!
//! Every setting can also come from the environment, e.g.
//! `SUCCESSION_DATASET_PATH=data/apostles.json SUCCESSION_PORT=8080`.

use std::{path::PathBuf, sync::Arc};

use anyhow::Context as _;
use clap::Parser;
use succession_server::{ServerConfig, load_roster};
use tokio::net::TcpListener;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about = "Succession leadership timeline server")]
struct Cli {
  /// Path to the TOML configuration file.
  #[arg(short, long, default_value = "config.toml")]
  config: PathBuf,

  /// Dataset path; overrides `dataset_path` from the config file.
  #[arg(short, long)]
  dataset: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
  // Initialise tracing.
  tracing_subscriber::fmt()
    .with_env_filter(
      EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy(),
    )
    .init();

  let cli = Cli::parse();

  // Load configuration.
  let settings = config::Config::builder()
    .add_source(config::File::from(cli.config).required(false))
    .add_source(config::Environment::with_prefix("SUCCESSION"))
    .set_override_option(
      "dataset_path",
      cli.dataset.map(|p| p.to_string_lossy().into_owned()),
    )
    .context("invalid --dataset value")?
    .build()
    .context("failed to read config file")?;

  let server_cfg: ServerConfig = settings
    .try_deserialize()
    .context("failed to deserialise ServerConfig")?;

  let roster = load_roster(&server_cfg.dataset_path)?;
  let app = succession_server::router(Arc::new(roster));
  let address = format!("{}:{}", server_cfg.host, server_cfg.port);

  tracing::info!("Listening on http://{address}");
  let listener = TcpListener::bind(&address)
    .await
    .with_context(|| format!("failed to bind {address}"))?;

  axum::serve(listener, app).await.context("server error")?;

  Ok(())
}
