//! Importer for the raw biographical text format.
//!
//! Converts text of the form
//!
//! ```text
//! Name: Jane Doe
//! Born: March 3, 1901 (1901-03-03)
//! Died: June 1, 1980 (1980-06-01)
//! Image: portrait [4]
//! Quorum of the Twelve Apostles, called by John Roe
//! April 6, 1950 (1950-04-06) – June 1, 1980 (1980-06-01)
//!
//! Name: Links
//! 4. https://example.org/jane.jpg
//! ```
//!
//! into [`Person`] records ready to be written out as a roster dataset. Pure
//! synchronous; no file-system access.

pub mod error;
mod parse;

pub use error::{Error, Result};
pub use parse::parse_date;
use succession_core::person::Person;

/// Parse every entry in `input`.
///
/// Entries that yield no dated positions are skipped.
pub fn parse(input: &str) -> Vec<Person> {
  let (main, links) = parse::split_links(input);
  let links = parse::parse_links(links);
  parse::split_entries(main)
    .into_iter()
    .filter_map(|entry| parse::parse_entry(&entry, &links))
    .collect()
}

/// Serialise `people` as a pretty-printed roster dataset.
pub fn to_dataset_json(people: &[Person]) -> Result<String> {
  Ok(serde_json::to_string_pretty(people)?)
}
