//! Domain model for otolith sampling records.
//!
//! # Responsibility
//! - Define the canonical record shape shared by CSV I/O, display and charts.
//! - Name the record fields once, with their display labels and CSV keys.
//!
//! # Invariants
//! - Records carry raw strings only; no field is validated or defaulted.
//! - Field catalog order matches the CSV column order used on save.

pub mod field;
pub mod record;
