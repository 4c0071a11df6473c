//! Core types and temporal queries for the Succession leadership timeline.
//!
//! This crate is deliberately free of HTTP, logging and file-system
//! dependencies. A [`Roster`] is built once from a dataset and every query
//! against it (snapshots, event dates, event descriptions, audits) is a pure
//! function of the roster and the requested date.

pub mod audit;
pub mod date;
pub mod error;
pub mod events;
pub mod person;
pub mod role;
pub mod roster;
pub mod snapshot;
pub mod timeline;

pub use error::{Error, Result};
pub use roster::{Loaded, LoadWarning, Roster};
