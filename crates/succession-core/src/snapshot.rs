//! Leadership snapshots: who held which role on one date.

use chrono::NaiveDate;
use serde::Serialize;

use crate::{person::Person, role::RoleKind, roster::Roster};

/// A leadership-group member and the seat they fill.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Seat<'a> {
  pub role:   RoleKind,
  pub person: &'a Person,
}

/// A general-pool member with their place in seniority order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PoolMember<'a> {
  /// 1-based position in the sorted pool.
  pub rank:           usize,
  pub seniority_date: NaiveDate,
  pub person:         &'a Person,
}

/// The resolved leadership state for one date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LeadershipSnapshot<'a> {
  pub date:       NaiveDate,
  /// `[president, first?, second?, ...counselors]`; empty during a vacancy.
  pub leadership: Vec<Seat<'a>>,
  /// Everyone else who is active, most senior first.
  pub pool:       Vec<PoolMember<'a>>,
}

impl LeadershipSnapshot<'_> {
  /// No president is seated on this date.
  pub fn is_vacant(&self) -> bool { self.leadership.is_empty() }

  /// The seated president, if any.
  pub fn president(&self) -> Option<&Person> {
    self
      .leadership
      .first()
      .filter(|s| s.role == RoleKind::President)
      .map(|s| s.person)
  }
}

impl Roster {
  /// Resolve the leadership group and general pool on `date`.
  pub fn snapshot(&self, date: NaiveDate) -> LeadershipSnapshot<'_> {
    let resolved: Vec<(&Person, RoleKind)> = self
      .all()
      .iter()
      .filter(|p| p.is_active_on(date))
      .map(|p| (p, p.role_on(date)))
      .collect();

    // The president seat goes to the first holder in roster order; each
    // numbered counsellor seat goes to the last.
    let president = resolved
      .iter()
      .find(|(_, r)| *r == RoleKind::President)
      .map(|(p, _)| *p);
    let numbered = |role: RoleKind| {
      resolved.iter().rev().find(|(_, r)| *r == role).map(|(p, _)| *p)
    };

    let mut leadership = Vec::new();
    let pool: Vec<&Person> = match president {
      Some(president) => {
        leadership.push(Seat {
          role:   RoleKind::President,
          person: president,
        });
        for role in [RoleKind::FirstCounselor, RoleKind::SecondCounselor] {
          if let Some(person) = numbered(role) {
            leadership.push(Seat { role, person });
          }
        }
        leadership.extend(
          resolved
            .iter()
            .filter(|(_, r)| *r == RoleKind::Counselor)
            .map(|(person, role)| Seat {
              role:   *role,
              person: *person,
            }),
        );
        resolved
          .iter()
          .filter(|(_, r)| *r == RoleKind::Apostle)
          .map(|(p, _)| *p)
          .collect()
      }
      // Vacancy: the presidency is dissolved and every active person,
      // whatever label they still carry, returns to the pool.
      None => resolved.iter().map(|(p, _)| *p).collect(),
    };

    LeadershipSnapshot {
      date,
      leadership,
      pool: rank_by_seniority(pool),
    }
  }
}

/// Stable sort by seniority key and number the result from 1.
fn rank_by_seniority(mut people: Vec<&Person>) -> Vec<PoolMember<'_>> {
  people.sort_by_key(|p| p.seniority_key());
  people
    .into_iter()
    .enumerate()
    .map(|(i, person)| PoolMember {
      rank: i + 1,
      seniority_date: person.seniority_date(),
      person,
    })
    .collect()
}
