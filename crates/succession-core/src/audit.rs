//! Data-quality checks over a whole roster.
//!
//! The resolver trusts its input: it seats the first president it finds and
//! relies on counsellor ranges having been trimmed when a presidency ends.
//! An audit reports where a dataset breaks those assumptions. It never
//! changes what [`Roster::snapshot`] returns.

use std::{collections::HashSet, fmt};

use chrono::NaiveDate;

use crate::{person::Person, role::RoleKind, roster::Roster};

/// A data-quality condition, independent of when it was observed.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Issue {
  /// More than one active person resolves to President.
  ConcurrentPresidents { people: Vec<String> },
  /// More than one active person resolves to the same numbered counsellor
  /// seat.
  SlotConflict { role: RoleKind, people: Vec<String> },
  /// A counsellor label survives while no president is seated.
  CounselorWithoutPresident { role: RoleKind, person: String },
}

/// An issue and the first date of the run of dates on which it holds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Finding {
  pub date:  NaiveDate,
  pub issue: Issue,
}

impl fmt::Display for Finding {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match &self.issue {
      Issue::ConcurrentPresidents { people } => write!(
        f,
        "{}: {} people hold President at once: {}",
        self.date,
        people.len(),
        people.join(", ")
      ),
      Issue::SlotConflict { role, people } => write!(
        f,
        "{}: {role} is held by {} people: {}",
        self.date,
        people.len(),
        people.join(", ")
      ),
      Issue::CounselorWithoutPresident { role, person } => write!(
        f,
        "{}: {person} still resolves to {role} with no President seated",
        self.date
      ),
    }
  }
}

impl Roster {
  /// Check every date on which the roster changes.
  ///
  /// Resolved roles can only change on an event date, so checking those
  /// dates covers every date. A condition lasting several event dates is
  /// reported once, at the first of them.
  pub fn audit(&self) -> Vec<Finding> {
    let mut dates: Vec<NaiveDate> = self.change_dates().collect();
    dates.sort_unstable();
    dates.dedup();

    let mut findings = Vec::new();
    let mut previous: HashSet<Issue> = HashSet::new();
    for date in dates {
      let current = self.issues_on(date);
      findings.extend(
        current
          .iter()
          .filter(|issue| !previous.contains(*issue))
          .map(|issue| Finding {
            date,
            issue: issue.clone(),
          }),
      );
      previous = current.into_iter().collect();
    }
    findings
  }

  fn issues_on(&self, date: NaiveDate) -> Vec<Issue> {
    let resolved: Vec<(&Person, RoleKind)> = self
      .all()
      .iter()
      .filter(|p| p.is_active_on(date))
      .map(|p| (p, p.role_on(date)))
      .collect();
    let holders = |role: RoleKind| -> Vec<String> {
      resolved
        .iter()
        .filter(|(_, r)| *r == role)
        .map(|(p, _)| p.id.clone())
        .collect()
    };

    let mut issues = Vec::new();
    let presidents = holders(RoleKind::President);
    if presidents.len() > 1 {
      issues.push(Issue::ConcurrentPresidents { people: presidents.clone() });
    }
    for role in [RoleKind::FirstCounselor, RoleKind::SecondCounselor] {
      let people = holders(role);
      if people.len() > 1 {
        issues.push(Issue::SlotConflict { role, people });
      }
    }
    if presidents.is_empty() {
      issues.extend(
        resolved
          .iter()
          .filter(|(_, r)| r.is_subordinate())
          .map(|(p, role)| Issue::CounselorWithoutPresident {
            role:   *role,
            person: p.id.clone(),
          }),
      );
    }
    issues
  }
}
