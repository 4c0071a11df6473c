//! Plain-text rendering for terminal output.

use std::fmt::Write as _;

use chrono::NaiveDate;
use succession_core::{snapshot::LeadershipSnapshot, timeline::EventIndex};

// ─── Snapshot ─────────────────────────────────────────────────────────────────

/// The leadership group followed by the ranked general pool.
pub fn snapshot(snapshot: &LeadershipSnapshot<'_>) -> String {
  let mut out = format!("{}\n\nFirst Presidency\n", snapshot.date);

  if snapshot.is_vacant() {
    out.push_str("  (vacant)\n");
  }
  let width = snapshot
    .leadership
    .iter()
    .map(|seat| seat.role.as_ref().len())
    .max()
    .unwrap_or(0);
  for seat in &snapshot.leadership {
    let _ = writeln!(
      out,
      "  {:<width$}  {}",
      seat.role.as_ref(),
      seat.person.display_name()
    );
  }

  let _ = writeln!(out, "\nApostles ({})", snapshot.pool.len());
  for member in &snapshot.pool {
    let _ = writeln!(
      out,
      "  {:>3}. {}  (since {})",
      member.rank,
      member.person.display_name(),
      member.seniority_date
    );
  }
  out
}

// ─── Timeline ─────────────────────────────────────────────────────────────────

pub fn events(date: NaiveDate, events: &[String]) -> String {
  let mut out = format!("{date}\n");
  if events.is_empty() {
    out.push_str("  No recorded events on this date\n");
  }
  for event in events {
    let _ = writeln!(out, "  {event}");
  }
  out
}

pub fn dates(index: &EventIndex) -> String {
  index.dates().iter().map(|d| format!("{d}\n")).collect()
}

/// A navigation result, or a note that there is nowhere to go.
pub fn navigation(target: Option<NaiveDate>, direction: &str) -> String {
  match target {
    Some(date) => format!("{date}\n"),
    None => format!("no {direction} event\n"),
  }
}

// ─── Audit ────────────────────────────────────────────────────────────────────

pub fn findings(findings: &[String]) -> String {
  if findings.is_empty() {
    return "No problems found\n".to_string();
  }
  findings.iter().map(|f| format!("{f}\n")).collect()
}

#[cfg(test)]
mod tests {
  use succession_core::{
    Roster,
    date::parse_date,
    person::{Person, RoleAssignment},
    role::RoleKind,
  };

  use super::*;

  fn d(s: &str) -> NaiveDate { parse_date(s).unwrap() }

  fn roster() -> Roster {
    let mut pres = Person::new("pres", "Name: Pres");
    pres.ordination_date = Some(d("1950-01-01"));
    pres.roles = vec![RoleAssignment::new(
      RoleKind::President,
      Some(d("1970-01-01")),
      None,
    )];
    let mut junior = Person::new("junior", "Junior");
    junior.ordination_date = Some(d("1960-01-01"));
    Roster::new(vec![pres, junior])
  }

  #[test]
  fn snapshot_lists_seats_and_pool() {
    let roster = roster();
    let text = snapshot(&roster.snapshot(d("1980-01-01")));
    assert!(text.starts_with("1980-01-01\n"));
    assert!(text.contains("  President  Pres\n"));
    assert!(text.contains("Apostles (1)\n"));
    assert!(text.contains("    1. Junior  (since 1960-01-01)\n"));
    assert!(!text.contains("(vacant)"));
  }

  #[test]
  fn vacant_snapshot_says_so() {
    let roster = roster();
    let text = snapshot(&roster.snapshot(d("1965-01-01")));
    assert!(text.contains("First Presidency\n  (vacant)\n"));
    assert!(text.contains("Apostles (2)\n"));
  }

  #[test]
  fn empty_events_have_a_placeholder() {
    assert_eq!(
      events(d("2000-01-01"), &[]),
      "2000-01-01\n  No recorded events on this date\n"
    );
    assert_eq!(
      events(d("2000-01-01"), &["Pres died".to_string()]),
      "2000-01-01\n  Pres died\n"
    );
  }

  #[test]
  fn dates_one_per_line() {
    let index = EventIndex::new([d("2000-01-02"), d("2000-01-01")]);
    assert_eq!(dates(&index), "2000-01-01\n2000-01-02\n");
  }

  #[test]
  fn navigation_without_target() {
    assert_eq!(navigation(None, "next"), "no next event\n");
    assert_eq!(navigation(Some(d("2000-01-01")), "next"), "2000-01-01\n");
  }

  #[test]
  fn no_findings() {
    assert_eq!(findings(&[]), "No problems found\n");
  }
}
