//! Human-readable descriptions of what happened on a given date.

use std::fmt;

use chrono::NaiveDate;

use crate::{person::Person, role::RoleKind, roster::Roster};

/// The kind of change an event records.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventKind {
  Ordained,
  Died,
  Called(RoleKind),
  Released(RoleKind),
}

/// One change to one person on one date.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RosterEvent<'a> {
  pub date:   NaiveDate,
  pub person: &'a Person,
  pub kind:   EventKind,
}

impl fmt::Display for RosterEvent<'_> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let name = self.person.display_name();
    match self.kind {
      EventKind::Ordained => {
        write!(f, "{name} ordained as an {}", RoleKind::Apostle.title())
      }
      EventKind::Died => write!(f, "{name} died"),
      EventKind::Called(role) => write!(f, "{name} called as {}", role.title()),
      EventKind::Released(role) => {
        write!(f, "{name} released as {}", role.title())
      }
    }
  }
}

impl Roster {
  /// Every event on `date`, in roster order and then role order.
  ///
  /// A release that coincides with a death is reported alongside it, not
  /// folded into it.
  pub fn events_on(&self, date: NaiveDate) -> Vec<RosterEvent<'_>> {
    let mut events = Vec::new();
    for person in self.all() {
      let mut push = |kind| {
        events.push(RosterEvent { date, person, kind });
      };

      if person.ordination_date == Some(date) {
        push(EventKind::Ordained);
      }
      if person.death_date == Some(date) {
        push(EventKind::Died);
      }
      for role in &person.roles {
        // An Apostle assignment starting on the ordination date is already
        // covered by the ordination event.
        let duplicates_ordination = role.kind == RoleKind::Apostle
          && role.start_date == person.ordination_date;
        if role.start_date == Some(date) && !duplicates_ordination {
          push(EventKind::Called(role.kind));
        }
        if role.end_date == Some(date) {
          push(EventKind::Released(role.kind));
        }
      }
    }
    events
  }

  /// [`Roster::events_on`] rendered as sentences.
  pub fn describe_events_on(&self, date: NaiveDate) -> Vec<String> {
    self.events_on(date).iter().map(ToString::to_string).collect()
  }
}
