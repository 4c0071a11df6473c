//! ETag computation for snapshot responses.
//!
//! A snapshot is a pure function of the roster and the date, so its ETag is
//! a SHA-256 over a roster fingerprint and the date. The fingerprint is
//! computed once per roster by hashing every serialised person and assignment
//! field in dataset order.

use chrono::{Datelike, NaiveDate};
use sha2::{Digest, Sha256};
use succession_core::{Roster, person::Person};

/// A digest identifying the content of a roster.
pub type Fingerprint = [u8; 32];

/// Hash every field of every person, in dataset order.
pub fn roster_fingerprint(roster: &Roster) -> Fingerprint {
  let mut hasher = Sha256::new();
  for person in roster.all() {
    feed_person(&mut hasher, person);
  }
  hasher.finalize().into()
}

/// The quoted ETag for the snapshot of `date` under `fingerprint`.
pub fn snapshot_etag(fingerprint: &Fingerprint, date: NaiveDate) -> String {
  let mut hasher = Sha256::new();
  hasher.update(fingerprint);
  feed_date(&mut hasher, Some(date));
  format!("\"{}\"", hex::encode(hasher.finalize()))
}

fn feed_person(hasher: &mut Sha256, person: &Person) {
  feed_str(hasher, &person.id);
  feed_str(hasher, &person.name);
  feed_date(hasher, person.birth_date);
  feed_date(hasher, person.ordination_date);
  feed_date(hasher, person.death_date);
  feed_opt_str(hasher, person.image_url.as_deref());
  hasher.update((person.roles.len() as u64).to_le_bytes());
  for role in &person.roles {
    feed_str(hasher, role.kind.as_ref());
    feed_opt_str(hasher, role.raw_role.as_deref());
    feed_date(hasher, role.start_date);
    feed_date(hasher, role.end_date);
  }
}

/// Length-prefixed so adjacent strings cannot run together.
fn feed_str(hasher: &mut Sha256, s: &str) {
  hasher.update((s.len() as u64).to_le_bytes());
  hasher.update(s.as_bytes());
}

fn feed_opt_str(hasher: &mut Sha256, s: Option<&str>) {
  hasher.update([u8::from(s.is_some())]);
  if let Some(s) = s {
    feed_str(hasher, s);
  }
}

fn feed_date(hasher: &mut Sha256, date: Option<NaiveDate>) {
  let days = date.map_or(i32::MIN, |d| d.num_days_from_ce());
  hasher.update(days.to_le_bytes());
}

#[cfg(test)]
mod tests {
  use succession_core::{
    date::parse_date,
    person::{Person, RoleAssignment},
    role::RoleKind,
  };

  use super::*;

  fn d(s: &str) -> NaiveDate { parse_date(s).unwrap() }

  fn roster(end: Option<&str>) -> Roster {
    let mut p = Person::new("p", "P");
    p.roles = vec![RoleAssignment::new(
      RoleKind::President,
      Some(d("2000-01-01")),
      end.map(d),
    )];
    Roster::new(vec![p])
  }

  #[test]
  fn etag_is_stable() {
    let fp = roster_fingerprint(&roster(None));
    assert_eq!(
      snapshot_etag(&fp, d("2001-01-01")),
      snapshot_etag(&roster_fingerprint(&roster(None)), d("2001-01-01"))
    );
  }

  #[test]
  fn etag_is_quoted_hex() {
    let tag = snapshot_etag(&roster_fingerprint(&roster(None)), d("2001-01-01"));
    assert!(tag.starts_with('"') && tag.ends_with('"'));
    assert_eq!(tag.len(), 66);
  }

  #[test]
  fn etag_changes_with_date() {
    let fp = roster_fingerprint(&roster(None));
    assert_ne!(
      snapshot_etag(&fp, d("2001-01-01")),
      snapshot_etag(&fp, d("2001-01-02"))
    );
  }

  #[test]
  fn fingerprint_changes_with_content() {
    assert_ne!(
      roster_fingerprint(&roster(None)),
      roster_fingerprint(&roster(Some("2005-01-01")))
    );

    let mut people = roster(None).all().to_vec();
    people[0].image_url = Some("https://example.org/p.jpg".into());
    assert_ne!(
      roster_fingerprint(&roster(None)),
      roster_fingerprint(&Roster::new(people))
    );
  }
}
