//! People and their dated role assignments.
//!
//! Field names serialise in camelCase to match the dataset.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::{
  date::{far_future, within},
  role::RoleKind,
};

/// Legacy prefix some source records carry in front of the name.
const NAME_PREFIX: &str = "Name: ";

// ─── RoleAssignment ──────────────────────────────────────────────────────────

/// A role held over a span of days.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoleAssignment {
  #[serde(rename = "type")]
  pub kind:       RoleKind,
  /// Free-text description from the source record, if any.
  #[serde(
    default,
    rename = "raw_role",
    skip_serializing_if = "Option::is_none"
  )]
  pub raw_role:   Option<String>,
  /// Assignments without a start date are never valid.
  pub start_date: Option<NaiveDate>,
  /// `None` means the assignment is ongoing.
  pub end_date:   Option<NaiveDate>,
}

impl RoleAssignment {
  pub fn new(
    kind: RoleKind,
    start_date: Option<NaiveDate>,
    end_date: Option<NaiveDate>,
  ) -> Self {
    Self {
      kind,
      raw_role: None,
      start_date,
      end_date,
    }
  }

  /// Whether the assignment is in force on `date` (end date exclusive).
  pub fn is_valid_on(&self, date: NaiveDate) -> bool {
    within(date, self.start_date, self.end_date)
  }
}

// ─── Person ──────────────────────────────────────────────────────────────────

/// One individual. Identity is stable across time; records are never
/// mutated after load.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Person {
  pub id:              String,
  pub name:            String,
  /// Used only to break seniority ties.
  pub birth_date:      Option<NaiveDate>,
  pub ordination_date: Option<NaiveDate>,
  /// `None` means still living.
  pub death_date:      Option<NaiveDate>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub image_url:       Option<String>,
  #[serde(default)]
  pub roles:           Vec<RoleAssignment>,
}

impl Person {
  /// A person with only an id and a name; every other field empty.
  pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
    Self {
      id:              id.into(),
      name:            name.into(),
      birth_date:      None,
      ordination_date: None,
      death_date:      None,
      image_url:       None,
      roles:           Vec::new(),
    }
  }

  /// The name without the legacy `"Name: "` prefix.
  pub fn display_name(&self) -> &str {
    self.name.strip_prefix(NAME_PREFIX).unwrap_or(&self.name)
  }

  /// The date the person entered the pool, if one can be derived: the
  /// ordination date, else the earliest dated role start.
  pub fn entry_date(&self) -> Option<NaiveDate> {
    self.ordination_date.or_else(|| {
      self.roles.iter().filter_map(|r| r.start_date).min()
    })
  }

  /// The date used to rank pool members. Falls back to `9999-12-31` when
  /// no entry date exists.
  pub fn seniority_date(&self) -> NaiveDate {
    self.entry_date().unwrap_or_else(far_future)
  }

  /// Whether the person has entered the pool and is still living on
  /// `date`. A death takes effect at the start of its day.
  pub fn is_active_on(&self, date: NaiveDate) -> bool {
    within(date, self.entry_date(), self.death_date)
  }

  /// The person's highest-precedence valid role on `date`.
  pub fn role_on(&self, date: NaiveDate) -> RoleKind {
    RoleKind::best(
      self
        .roles
        .iter()
        .filter(|r| r.is_valid_on(date))
        .map(|r| r.kind),
    )
  }

  /// Key for ordering pool members: seniority date, then birth date with a
  /// missing birth date sorting first.
  pub fn seniority_key(&self) -> (NaiveDate, Option<NaiveDate>) {
    (self.seniority_date(), self.birth_date)
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::date::parse_date;

  fn d(s: &str) -> NaiveDate { parse_date(s).unwrap() }

  fn with_roles(roles: Vec<RoleAssignment>) -> Person {
    let mut p = Person::new("p", "Name: Test Person");
    p.roles = roles;
    p
  }

  #[test]
  fn display_name_strips_prefix() {
    assert_eq!(with_roles(vec![]).display_name(), "Test Person");
    assert_eq!(Person::new("q", "Plain").display_name(), "Plain");
  }

  #[test]
  fn seniority_prefers_ordination() {
    let mut p = with_roles(vec![RoleAssignment::new(
      RoleKind::Apostle,
      Some(d("1990-04-01")),
      None,
    )]);
    p.ordination_date = Some(d("1995-10-01"));
    assert_eq!(p.seniority_date(), d("1995-10-01"));
  }

  #[test]
  fn seniority_falls_back_to_earliest_role() {
    let p = with_roles(vec![
      RoleAssignment::new(RoleKind::FirstCounselor, Some(d("2008-02-03")), None),
      RoleAssignment::new(RoleKind::Apostle, None, None),
      RoleAssignment::new(RoleKind::Apostle, Some(d("1994-04-07")), None),
    ]);
    assert_eq!(p.seniority_date(), d("1994-04-07"));
  }

  #[test]
  fn seniority_without_dates_is_far_future() {
    let p = with_roles(vec![RoleAssignment::new(RoleKind::Apostle, None, None)]);
    assert_eq!(p.seniority_date(), far_future());
    assert!(!p.is_active_on(far_future()));
  }

  #[test]
  fn death_takes_effect_same_day() {
    let mut p = Person::new("p", "P");
    p.ordination_date = Some(d("2000-01-01"));
    p.death_date = Some(d("2010-05-05"));
    assert!(p.is_active_on(d("2010-05-04")));
    assert!(!p.is_active_on(d("2010-05-05")));
    assert!(!p.is_active_on(d("2011-01-01")));
  }

  #[test]
  fn role_on_uses_precedence() {
    let p = with_roles(vec![
      RoleAssignment::new(RoleKind::Apostle, Some(d("1990-01-01")), None),
      RoleAssignment::new(
        RoleKind::SecondCounselor,
        Some(d("2000-01-01")),
        Some(d("2005-01-01")),
      ),
    ]);
    assert_eq!(p.role_on(d("1999-12-31")), RoleKind::Apostle);
    assert_eq!(p.role_on(d("2000-01-01")), RoleKind::SecondCounselor);
    assert_eq!(p.role_on(d("2005-01-01")), RoleKind::Apostle);
  }

  #[test]
  fn serde_uses_dataset_field_names() {
    let json = r#"{
      "id": "a-b",
      "name": "A B",
      "birthDate": "1930-02-02",
      "ordinationDate": null,
      "deathDate": null,
      "roles": [
        {"type": "Counselor", "startDate": "1980-01-01", "endDate": null}
      ]
    }"#;
    let p: Person = serde_json::from_str(json).unwrap();
    assert_eq!(p.birth_date, Some(d("1930-02-02")));
    assert_eq!(p.roles[0].kind, RoleKind::Counselor);

    let back = serde_json::to_value(&p).unwrap();
    assert_eq!(back["roles"][0]["type"], "Counselor");
    assert_eq!(back["roles"][0]["startDate"], "1980-01-01");
  }
}
