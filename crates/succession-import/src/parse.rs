//! Raw-text parser.
//!
//! Pipeline:
//!   raw &str
//!     └─ split_links()       → (entries text, links text)
//!          ├─ parse_links()  → reference number → URL
//!          └─ split_entries() → one block per `Name: ` line
//!               └─ parse_entry()     → Person
//!                    └─ parse_positions() → Vec<RoleAssignment>

use std::collections::HashMap;

use chrono::NaiveDate;
use succession_core::{
  person::{Person, RoleAssignment},
  role::RoleKind,
};

use crate::error::{Error, Result};

const NAME_PREFIX: &str = "Name: ";
const LINKS_HEADER: &str = "Name: Links";
const POSITIONS_PREFIX: &str = "Positions: ";

const MONTHS: [&str; 12] = [
  "January",
  "February",
  "March",
  "April",
  "May",
  "June",
  "July",
  "August",
  "September",
  "October",
  "November",
  "December",
];

// ─── Sections ────────────────────────────────────────────────────────────────

/// Split off the trailing `Name: Links` section, if any.
pub(crate) fn split_links(input: &str) -> (&str, &str) {
  let mut offset = 0;
  for line in input.split_inclusive('\n') {
    if line.trim() == LINKS_HEADER {
      return (&input[..offset], &input[offset + line.len()..]);
    }
    offset += line.len();
  }
  (input, "")
}

/// Map numbered references (`4. https://…`) to their URLs.
pub(crate) fn parse_links(section: &str) -> HashMap<String, String> {
  section
    .lines()
    .filter_map(|line| {
      let (num, rest) = line.trim_start().split_once('.')?;
      if num.is_empty() || !num.bytes().all(|b| b.is_ascii_digit()) {
        return None;
      }
      let url = rest.trim();
      (rest.starts_with(char::is_whitespace)
        && (url.starts_with("http://") || url.starts_with("https://")))
      .then(|| (num.to_string(), url.to_string()))
    })
    .collect()
}

/// Group lines into entries, each starting at a `Name: ` line. Text before
/// the first entry is ignored.
pub(crate) fn split_entries(section: &str) -> Vec<Vec<&str>> {
  let mut entries: Vec<Vec<&str>> = Vec::new();
  for line in section.lines() {
    if line.trim_start().starts_with(NAME_PREFIX) {
      entries.push(vec![line]);
    } else if let Some(entry) = entries.last_mut() {
      entry.push(line);
    }
  }
  entries
}

// ─── Entries ─────────────────────────────────────────────────────────────────

pub(crate) fn parse_entry(
  lines: &[&str],
  links: &HashMap<String, String>,
) -> Option<Person> {
  let (first, rest) = lines.split_first()?;
  let name = first.trim().replace(NAME_PREFIX, "").trim().to_string();

  let mut person = Person::new(slug(&name), name);
  let mut positions = Vec::new();
  for line in rest {
    let line = line.trim();
    if let Some(value) = line.strip_prefix("Born:") {
      person.birth_date = parse_date(value.trim()).ok();
    } else if let Some(value) = line.strip_prefix("Died:") {
      person.death_date = parse_date(value.trim()).ok();
    } else if let Some(value) = line.strip_prefix("Image:") {
      person.image_url = image_reference(value).and_then(|r| links.get(r).cloned());
    } else {
      positions.push(line);
    }
  }

  person.roles = parse_positions(&positions);
  if person.roles.is_empty() {
    return None;
  }
  person.ordination_date = person.roles.iter().filter_map(|r| r.start_date).min();
  Some(person)
}

/// `"Jane Q. Doe"` → `"jane-q-doe"`.
fn slug(name: &str) -> String {
  name.to_lowercase().replace('.', "").replace(' ', "-")
}

/// The reference number inside the first all-digit `[N]` in `value`.
fn image_reference(value: &str) -> Option<&str> {
  value.match_indices('[').find_map(|(open, _)| {
    let rest = &value[open + 1..];
    let digits = rest.bytes().take_while(u8::is_ascii_digit).count();
    (digits > 0 && rest[digits..].starts_with(']')).then(|| &rest[..digits])
  })
}

// ─── Positions ───────────────────────────────────────────────────────────────

/// Accumulate description text until a line carrying a dated range, then
/// emit one assignment per range.
fn parse_positions(lines: &[&str]) -> Vec<RoleAssignment> {
  let mut roles = Vec::new();
  let mut buffer = String::new();

  for line in lines.iter().map(|l| l.trim()).filter(|l| !l.is_empty()) {
    let Some(idx) = find_date_start(line) else {
      buffer.push(' ');
      buffer.push_str(line);
      continue;
    };

    let description = format!("{} {}", buffer, &line[..idx]);
    let description = clean_role_description(description.trim());
    let (start_date, end_date) = parse_range(&line[idx..]);

    roles.push(RoleAssignment {
      kind: classify(&description),
      raw_role: Some(description),
      start_date,
      end_date,
    });
    buffer.clear();
  }

  roles
}

/// Split `"<start> – <end>"` and parse each side. An end of `present` is
/// open-ended.
fn parse_range(text: &str) -> (Option<NaiveDate>, Option<NaiveDate>) {
  let parts: Vec<&str> = text
    .split(" – ")
    .flat_map(|p| p.split(" - "))
    .map(str::trim)
    .collect();

  let start = parts.first().and_then(|s| parse_date(s).ok());
  let end = match parts.as_slice() {
    [_, .., last] if last.to_lowercase().contains("present") => None,
    [_, .., last] => parse_date(last).ok(),
    _ => None,
  };
  (start, end)
}

fn clean_role_description(text: &str) -> String {
  let lower = text.to_ascii_lowercase();
  let cut = lower.find("called by").map(|i| {
    // Drop a separating comma along with the clause.
    text[..i].trim_end().trim_end_matches(',').len()
  });
  let text = cut.map_or(text, |i| &text[..i]);
  let text = text.strip_prefix(POSITIONS_PREFIX).unwrap_or(text);
  text.trim().trim_matches(',').to_string()
}

fn classify(description: &str) -> RoleKind {
  const RULES: [(&str, RoleKind); 4] = [
    ("President of the Church", RoleKind::President),
    ("First Counselor", RoleKind::FirstCounselor),
    ("Second Counselor", RoleKind::SecondCounselor),
    ("Counselor", RoleKind::Counselor),
  ];
  RULES
    .iter()
    .find(|(needle, _)| description.contains(needle))
    .map_or(RoleKind::Apostle, |(_, kind)| *kind)
}

// ─── Dates ───────────────────────────────────────────────────────────────────

/// Byte offset of the first `Month D, YYYY (YYYY-MM-DD)` in `line`.
fn find_date_start(line: &str) -> Option<usize> {
  MONTHS
    .iter()
    .flat_map(|month| {
      line
        .match_indices(month)
        .map(|(i, _)| i)
        .filter(|i| is_dated_at(&line[*i..]))
    })
    .min()
}

/// Whether `text` begins with `Month D, YYYY (YYYY-MM-DD)`.
fn is_dated_at(text: &str) -> bool {
  let Some((month, rest)) = text.split_once(char::is_whitespace) else {
    return false;
  };
  if !MONTHS.contains(&month) {
    return false;
  }
  let Some((day, rest)) = rest.trim_start().split_once(',') else {
    return false;
  };
  if day.is_empty() || day.len() > 2 || !day.bytes().all(|b| b.is_ascii_digit()) {
    return false;
  }
  let rest = rest.trim_start();
  let Some(year) = rest.get(..4) else {
    return false;
  };
  if !year.bytes().all(|b| b.is_ascii_digit()) {
    return false;
  }
  let rest = rest[4..].trim_start();
  rest
    .strip_prefix('(')
    .and_then(|r| r.get(..11))
    .and_then(|r| r.strip_suffix(')'))
    .is_some_and(|iso| NaiveDate::parse_from_str(iso, "%Y-%m-%d").is_ok())
}

/// Parse a date as written in the raw text.
///
/// Tried in order: an ISO date in parentheses, an ISO date-time in
/// parentheses, `Month D, YYYY`, `D Month YYYY`, and finally any four-digit
/// year, which becomes January 1st of that year.
pub fn parse_date(text: &str) -> Result<NaiveDate> {
  for (i, _) in text.match_indices('(') {
    let Some(close) = text[i..].find(')') else {
      break;
    };
    let inner = &text[i + 1..i + close];
    let date_part = inner.split_once('T').map_or(inner, |(d, _)| d);
    if let Ok(date) = NaiveDate::parse_from_str(date_part, "%Y-%m-%d") {
      return Ok(date);
    }
  }

  let clean = strip_parenthesised(text);
  for format in ["%B %d, %Y", "%d %B %Y"] {
    if let Ok(date) = NaiveDate::parse_from_str(clean.trim(), format) {
      return Ok(date);
    }
  }

  first_year(text)
    .and_then(|year| NaiveDate::from_ymd_opt(year, 1, 1))
    .ok_or_else(|| Error::InvalidDate(text.to_string()))
}

fn strip_parenthesised(text: &str) -> String {
  let mut out = String::with_capacity(text.len());
  let mut depth = 0usize;
  for c in text.chars() {
    match c {
      '(' => depth += 1,
      ')' if depth > 0 => depth -= 1,
      _ if depth == 0 => out.push(c),
      _ => {}
    }
  }
  out
}

/// The first four consecutive ASCII digits, read as a year.
fn first_year(text: &str) -> Option<i32> {
  let start = text
    .as_bytes()
    .windows(4)
    .position(|w| w.iter().all(u8::is_ascii_digit))?;
  text[start..start + 4].parse().ok()
}
