//! `succession`: command-line queries over a leadership roster.
//!
//! # Usage
//!
//! ```
//! succession --dataset apostles.json snapshot --date 1970-01-20
//! succession --dataset apostles.json events --date 2018-01-14
//! succession --config ~/.config/succession/config.toml previous --from 2018-01-14
//! succession import raw_data.txt --output apostles.json
//! ```

mod render;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use serde::{Deserialize, Serialize};
use succession_core::{Roster, date::parse_date};
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

// ─── CLI args ─────────────────────────────────────────────────────────────────

#[derive(Parser, Debug)]
#[command(name = "succession", about = "Who held which leadership role, and when")]
struct Args {
  /// Path to a TOML config file (`dataset = "..."`).
  #[arg(short, long, global = true, value_name = "FILE")]
  config: Option<PathBuf>,

  /// Roster dataset (JSON array of people).
  #[arg(long, global = true, env = "SUCCESSION_DATASET", value_name = "FILE")]
  dataset: Option<PathBuf>,

  /// Print machine-readable JSON instead of text.
  #[arg(long, global = true)]
  json: bool,

  #[command(subcommand)]
  command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
  /// Convert raw biographical text into a roster dataset.
  Import {
    input:  PathBuf,
    /// Write the dataset here instead of stdout.
    #[arg(short, long)]
    output: Option<PathBuf>,
  },
  #[command(flatten)]
  Query(Query),
}

/// Commands that read a roster dataset.
#[derive(Subcommand, Debug)]
enum Query {
  /// Leadership group and general pool on a date (default: today).
  Snapshot {
    #[arg(long, value_parser = date_arg)]
    date: Option<NaiveDate>,
  },
  /// Changes recorded on a date.
  Events {
    #[arg(long, value_parser = date_arg)]
    date: NaiveDate,
  },
  /// Every date on which something changes.
  Dates,
  /// The event to step back to from a date.
  Previous {
    #[arg(long, value_parser = date_arg)]
    from: NaiveDate,
  },
  /// The first event after a date.
  Next {
    #[arg(long, value_parser = date_arg)]
    from: NaiveDate,
  },
  /// Report data-quality problems in the dataset.
  Audit,
}

fn date_arg(value: &str) -> Result<NaiveDate, String> {
  parse_date(value).map_err(|e| e.to_string())
}

// ─── Config file ──────────────────────────────────────────────────────────────

/// Shape of the optional TOML config file.
#[derive(Deserialize, Default)]
struct ConfigFile {
  #[serde(default)]
  dataset: Option<PathBuf>,
}

// ─── Entry point ──────────────────────────────────────────────────────────────

fn main() -> Result<()> {
  tracing_subscriber::fmt()
    .with_writer(std::io::stderr)
    .with_env_filter(
      EnvFilter::builder()
        .with_default_directive(LevelFilter::WARN.into())
        .from_env_lossy(),
    )
    .init();

  let args = Args::parse();
  let query = match args.command {
    Command::Import { input, output } => return import(&input, output.as_deref()),
    Command::Query(query) => query,
  };

  // Load config file if provided.
  let file_cfg: ConfigFile = if let Some(path) = &args.config {
    let raw = std::fs::read_to_string(path)
      .with_context(|| format!("reading config file {}", path.display()))?;
    toml::from_str(&raw).context("parsing config file")?
  } else {
    ConfigFile::default()
  };

  // CLI flag (or env) overrides the config file.
  let dataset = args
    .dataset
    .or(file_cfg.dataset)
    .context("no dataset given; pass --dataset or set SUCCESSION_DATASET")?;
  let roster = load(&dataset)?;

  run(&roster, query, args.json)
}

fn load(path: &Path) -> Result<Roster> {
  let raw = std::fs::read_to_string(path)
    .with_context(|| format!("reading dataset {}", path.display()))?;
  let loaded = Roster::load_json(&raw)
    .with_context(|| format!("parsing dataset {}", path.display()))?;
  for warning in &loaded.warnings {
    tracing::warn!("{warning}");
  }
  Ok(loaded.roster)
}

fn run(roster: &Roster, query: Query, json: bool) -> Result<()> {
  match query {
    Query::Snapshot { date } => {
      let date = date.unwrap_or_else(succession_core::date::today);
      let snapshot = roster.snapshot(date);
      emit(json, &snapshot, || render::snapshot(&snapshot))
    }
    Query::Events { date } => {
      let events = roster.describe_events_on(date);
      emit(json, &events, || render::events(date, &events))
    }
    Query::Dates => {
      let index = roster.event_dates();
      emit(json, &index, || render::dates(&index))
    }
    Query::Previous { from } => {
      let target = roster.event_dates().previous(from);
      emit(json, &target, || render::navigation(target, "previous"))
    }
    Query::Next { from } => {
      let target = roster.event_dates().next(from);
      emit(json, &target, || render::navigation(target, "next"))
    }
    Query::Audit => {
      let findings: Vec<String> =
        roster.audit().iter().map(ToString::to_string).collect();
      emit(json, &findings, || render::findings(&findings))
    }
  }
}

/// Print `value` as JSON, or the text produced by `text`.
fn emit<T: Serialize>(
  json: bool,
  value: &T,
  text: impl FnOnce() -> String,
) -> Result<()> {
  if json {
    println!("{}", serde_json::to_string_pretty(value)?);
  } else {
    print!("{}", text());
  }
  Ok(())
}

fn import(input: &Path, output: Option<&Path>) -> Result<()> {
  let raw = std::fs::read_to_string(input)
    .with_context(|| format!("reading {}", input.display()))?;
  let people = succession_import::parse(&raw);
  tracing::info!(people = people.len(), "imported {}", input.display());
  let dataset = succession_import::to_dataset_json(&people)?;

  match output {
    Some(path) => std::fs::write(path, dataset + "\n")
      .with_context(|| format!("writing {}", path.display()))?,
    None => println!("{dataset}"),
  }
  Ok(())
}
