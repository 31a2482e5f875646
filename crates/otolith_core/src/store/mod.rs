//! Flat-file storage for otolith records.
//!
//! # Responsibility
//! - Read and write the bilingual otolith CSV layout.
//! - Translate file-system and CSV failures into semantic store errors.
//!
//! # Invariants
//! - Writes always emit the fixed header row first, even with zero records.
//! - Reads accept any header order and ignore unknown columns.
//! - File handles never outlive the call that opened them.

use std::error::Error;
use std::fmt::{Display, Formatter};
use std::io;
use std::path::PathBuf;

pub mod csv_store;

pub type StoreResult<T> = Result<T, StoreError>;

#[derive(Debug)]
pub enum StoreError {
    FileNotFound(PathBuf),
    MissingColumn(&'static str),
    Io(io::Error),
    Csv(csv::Error),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::FileNotFound(path) => write!(f, "file not found: {}", path.display()),
            Self::MissingColumn(column) => write!(f, "missing CSV column `{column}`"),
            Self::Io(err) => write!(f, "{err}"),
            Self::Csv(err) => match err.position() {
                Some(position) => write!(f, "CSV error on line {}: {err}", position.line()),
                None => write!(f, "CSV error: {err}"),
            },
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::FileNotFound(_) => None,
            Self::MissingColumn(_) => None,
            Self::Io(err) => Some(err),
            Self::Csv(err) => Some(err),
        }
    }
}

impl From<io::Error> for StoreError {
    fn from(value: io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<csv::Error> for StoreError {
    fn from(value: csv::Error) -> Self {
        Self::Csv(value)
    }
}
