//! The roster store: an immutable collection of people in dataset order.
//!
//! Loading is fail-soft. A malformed date or an unknown role type affects
//! only the field or assignment it appears in; it is reported back as a
//! [`LoadWarning`] and the rest of the dataset loads normally.

use std::{io::Read, str::FromStr};

use chrono::NaiveDate;
use serde::Deserialize;
use serde_json::Value;

use crate::{
  Error, Result,
  date::parse_field,
  person::{Person, RoleAssignment},
  role::RoleKind,
};

// ─── Roster ──────────────────────────────────────────────────────────────────

/// Every known person, in the order the dataset lists them.
///
/// There is no way to mutate a roster once built; share it by reference or
/// behind an `Arc`.
#[derive(Debug, Clone, Default)]
pub struct Roster {
  people: Vec<Person>,
}

impl Roster {
  pub fn new(people: Vec<Person>) -> Self { Self { people } }

  /// All people, in dataset order.
  pub fn all(&self) -> &[Person] { &self.people }

  /// Look up a person by id.
  pub fn get(&self, id: &str) -> Option<&Person> {
    self.people.iter().find(|p| p.id == id)
  }

  pub fn len(&self) -> usize { self.people.len() }

  pub fn is_empty(&self) -> bool { self.people.is_empty() }

  /// Parse a dataset (a JSON array of person records).
  pub fn load_json(json: &str) -> Result<Loaded> {
    let raw: Vec<RawPerson> = serde_json::from_str(json)?;
    Ok(Loaded::from_raw(raw))
  }

  /// Parse a dataset from a reader.
  pub fn load_reader(reader: impl Read) -> Result<Loaded> {
    let raw: Vec<RawPerson> = serde_json::from_reader(reader)?;
    Ok(Loaded::from_raw(raw))
  }
}

impl From<Vec<Person>> for Roster {
  fn from(people: Vec<Person>) -> Self { Self::new(people) }
}

// ─── Load result ─────────────────────────────────────────────────────────────

/// A problem with one record that was worked around during loading.
#[derive(Debug)]
pub struct LoadWarning {
  pub person_id: String,
  pub error:     Error,
}

impl std::fmt::Display for LoadWarning {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    write!(f, "{}: {}", self.person_id, self.error)
  }
}

/// A loaded roster plus any warnings raised while building it.
#[derive(Debug)]
pub struct Loaded {
  pub roster:   Roster,
  pub warnings: Vec<LoadWarning>,
}

impl Loaded {
  fn from_raw(raw: Vec<RawPerson>) -> Self {
    let mut warnings = Vec::new();
    let people = raw
      .into_iter()
      .map(|r| r.into_person(&mut warnings))
      .collect();
    Self {
      roster: Roster::new(people),
      warnings,
    }
  }
}

// ─── Raw dataset records ─────────────────────────────────────────────────────

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawPerson {
  id:              String,
  name:            String,
  #[serde(default)]
  birth_date:      Option<Value>,
  #[serde(default)]
  ordination_date: Option<Value>,
  #[serde(default)]
  death_date:      Option<Value>,
  #[serde(default)]
  image_url:       Option<String>,
  #[serde(default)]
  roles:           Vec<RawRole>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawRole {
  #[serde(default, rename = "type")]
  kind:       Option<String>,
  #[serde(default, rename = "raw_role")]
  raw_role:   Option<String>,
  #[serde(default)]
  start_date: Option<Value>,
  #[serde(default)]
  end_date:   Option<Value>,
}

/// Collects warnings for one person while its fields are converted.
struct Sink<'a> {
  person_id: &'a str,
  warnings:  &'a mut Vec<LoadWarning>,
}

impl Sink<'_> {
  fn warn(&mut self, error: Error) {
    self.warnings.push(LoadWarning {
      person_id: self.person_id.to_string(),
      error,
    });
  }

  /// An absent, null or empty field is simply `None`; an unparseable or
  /// non-string one is `None` plus a warning.
  fn date(
    &mut self,
    field: &'static str,
    value: Option<Value>,
  ) -> Option<NaiveDate> {
    let parsed = match value? {
      Value::Null => return None,
      Value::String(s) if s.trim().is_empty() => return None,
      Value::String(s) => parse_field(field, &s),
      other => Err(Error::MalformedDate {
        field,
        value: other.to_string(),
      }),
    };
    match parsed {
      Ok(date) => Some(date),
      Err(e) => {
        self.warn(e);
        None
      }
    }
  }
}

impl RawPerson {
  fn into_person(self, warnings: &mut Vec<LoadWarning>) -> Person {
    let mut sink = Sink {
      person_id: &self.id,
      warnings,
    };

    let birth_date = sink.date("birthDate", self.birth_date);
    let ordination_date = sink.date("ordinationDate", self.ordination_date);
    let death_date = sink.date("deathDate", self.death_date);

    let mut roles = Vec::with_capacity(self.roles.len());
    for raw in self.roles {
      let raw_kind = raw.kind.unwrap_or_default();
      let Ok(kind) = RoleKind::from_str(&raw_kind) else {
        sink.warn(Error::UnknownRole(raw_kind));
        continue;
      };
      roles.push(RoleAssignment {
        kind,
        raw_role: raw.raw_role,
        start_date: sink.date("startDate", raw.start_date),
        end_date: sink.date("endDate", raw.end_date),
      });
    }

    Person {
      id: self.id,
      name: self.name,
      birth_date,
      ordination_date,
      death_date,
      image_url: self.image_url,
      roles,
    }
  }
}
