//! Record display formatting.
//!
//! # Responsibility
//! - Define the single-capability formatter contract used by the repository.
//! - Provide built-in formatter variants selectable at construction time.
//!
//! # Invariants
//! - Formatters are stateless and never mutate the record they render.
//! - Field values are interpolated raw, without locale or number handling.

pub mod formatter;
