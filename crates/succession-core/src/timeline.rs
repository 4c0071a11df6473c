//! The global index of event dates and previous/next navigation over it.

use std::collections::BTreeSet;

use chrono::NaiveDate;
use serde::Serialize;

use crate::{date::today, roster::Roster};

/// Every date on which some tracked fact changes, ascending and distinct.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct EventIndex {
  dates: Vec<NaiveDate>,
}

impl EventIndex {
  /// Build an index from any collection of dates.
  pub fn new(dates: impl IntoIterator<Item = NaiveDate>) -> Self {
    let set: BTreeSet<NaiveDate> = dates.into_iter().collect();
    Self {
      dates: set.into_iter().collect(),
    }
  }

  pub fn dates(&self) -> &[NaiveDate] { &self.dates }

  pub fn len(&self) -> usize { self.dates.len() }

  pub fn is_empty(&self) -> bool { self.dates.is_empty() }

  pub fn contains(&self, date: NaiveDate) -> bool {
    self.dates.binary_search(&date).is_ok()
  }

  /// The event to step back to from `current`.
  ///
  /// Takes the first event on or after `current` and returns the one before
  /// it. If `current` is past every event the last event is returned; if the
  /// first event is already on or after `current`, the first event is
  /// returned. `None` only when the index is empty.
  pub fn previous(&self, current: NaiveDate) -> Option<NaiveDate> {
    let idx = self.dates.partition_point(|d| *d < current);
    match idx {
      0 => self.dates.first().copied(),
      i => self.dates.get(i - 1).copied(),
    }
  }

  /// The first event strictly after `current`.
  pub fn next(&self, current: NaiveDate) -> Option<NaiveDate> {
    let idx = self.dates.partition_point(|d| *d <= current);
    self.dates.get(idx).copied()
  }
}

impl Roster {
  /// Event dates with today's UTC date included.
  pub fn event_dates(&self) -> EventIndex { self.event_dates_as_of(today()) }

  /// Event dates with `today` included: every ordination, death, role start
  /// and role end in the roster.
  pub fn event_dates_as_of(&self, today: NaiveDate) -> EventIndex {
    EventIndex::new(std::iter::once(today).chain(self.change_dates()))
  }

  /// Every dated fact in the roster, unsorted and possibly repeated.
  pub(crate) fn change_dates(&self) -> impl Iterator<Item = NaiveDate> + '_ {
    let person_dates = self
      .all()
      .iter()
      .flat_map(|p| [p.ordination_date, p.death_date]);
    let role_dates = self
      .all()
      .iter()
      .flat_map(|p| &p.roles)
      .flat_map(|r| [r.start_date, r.end_date]);
    person_dates.chain(role_dates).flatten()
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::date::parse_date;

  fn d(s: &str) -> NaiveDate { parse_date(s).unwrap() }

  fn index() -> EventIndex {
    EventIndex::new([d("2000-01-01"), d("2010-01-01"), d("2020-01-01")])
  }

  #[test]
  fn new_sorts_and_dedupes() {
    let idx = EventIndex::new([d("2020-01-01"), d("2000-01-01"), d("2020-01-01")]);
    assert_eq!(idx.dates(), [d("2000-01-01"), d("2020-01-01")]);
  }

  #[test]
  fn previous_from_an_event_steps_back() {
    assert_eq!(index().previous(d("2010-01-01")), Some(d("2000-01-01")));
  }

  #[test]
  fn previous_between_events_goes_to_earlier() {
    assert_eq!(index().previous(d("2015-06-01")), Some(d("2010-01-01")));
  }

  #[test]
  fn previous_after_all_events_goes_to_last() {
    assert_eq!(index().previous(d("2030-01-01")), Some(d("2020-01-01")));
  }

  #[test]
  fn previous_at_or_before_first_stays_at_first() {
    assert_eq!(index().previous(d("2000-01-01")), Some(d("2000-01-01")));
    assert_eq!(index().previous(d("1990-01-01")), Some(d("2000-01-01")));
  }

  #[test]
  fn next_is_strictly_later() {
    assert_eq!(index().next(d("2000-01-01")), Some(d("2010-01-01")));
    assert_eq!(index().next(d("1999-01-01")), Some(d("2000-01-01")));
    assert_eq!(index().next(d("2020-01-01")), None);
  }

  #[test]
  fn empty_index_has_no_neighbours() {
    let idx = EventIndex::default();
    assert_eq!(idx.previous(d("2000-01-01")), None);
    assert_eq!(idx.next(d("2000-01-01")), None);
  }

  #[test]
  fn serialises_as_plain_list() {
    let json = serde_json::to_string(&index()).unwrap();
    assert_eq!(json, r#"["2000-01-01","2010-01-01","2020-01-01"]"#);
  }
}
