//! In-memory record repository.
//!
//! # Responsibility
//! - Own the ordered record sequence and its positional CRUD operations.
//! - Bridge the sequence to CSV storage and to a pluggable formatter.
//!
//! # Invariants
//! - Valid indices are `[0, len)`; out-of-range calls fail without mutation.
//! - Insertion order is display order.

pub mod record_repo;
