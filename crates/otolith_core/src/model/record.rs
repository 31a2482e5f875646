//! Otolith record model.
//!
//! # Responsibility
//! - Hold one observation row from the otolith dataset.
//! - Map struct fields to the fixed bilingual CSV header keys.
//!
//! # Invariants
//! - Every field is an arbitrary string, empty values included.
//! - Records are replaced wholesale on edit, never patched field by field.

use serde::{Deserialize, Serialize};

/// One otolith sampling observation.
///
/// Serialized names follow the dataset header keys so CSV rows can be
/// deserialized regardless of column order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    /// Sampling program or survey the row comes from.
    pub source: String,
    #[serde(rename = "latin.name_nom.latin")]
    pub latin_name: String,
    #[serde(rename = "english.name_nom.anglais")]
    pub english_name: String,
    #[serde(rename = "french.name_nom.français")]
    pub french_name: String,
    /// Kept as text; the dataset is not guaranteed to hold numeric years.
    #[serde(rename = "year_année")]
    pub year: String,
    #[serde(rename = "month_mois")]
    pub month: String,
    /// Kept as text for the same reason as `year`.
    #[serde(rename = "number.otoliths_nombre.otolithes")]
    pub number_otoliths: String,
}

impl Record {
    /// Creates a record from the seven fields in dataset order.
    ///
    /// No field is trimmed or validated.
    pub fn new(
        source: impl Into<String>,
        latin_name: impl Into<String>,
        english_name: impl Into<String>,
        french_name: impl Into<String>,
        year: impl Into<String>,
        month: impl Into<String>,
        number_otoliths: impl Into<String>,
    ) -> Self {
        Self {
            source: source.into(),
            latin_name: latin_name.into(),
            english_name: english_name.into(),
            french_name: french_name.into(),
            year: year.into(),
            month: month.into(),
            number_otoliths: number_otoliths.into(),
        }
    }

    /// Returns field values in CSV column order.
    pub fn to_row(&self) -> [&str; 7] {
        [
            self.source.as_str(),
            self.latin_name.as_str(),
            self.english_name.as_str(),
            self.french_name.as_str(),
            self.year.as_str(),
            self.month.as_str(),
            self.number_otoliths.as_str(),
        ]
    }
}
