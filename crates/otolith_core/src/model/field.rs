//! Record field catalog.
//!
//! Single lookup table for attribute keys, display labels and CSV header keys.

use crate::model::record::Record;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// One of the seven record fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum RecordField {
    Source,
    LatinName,
    EnglishName,
    FrenchName,
    Year,
    Month,
    NumberOtoliths,
}

impl RecordField {
    /// All fields in CSV column order.
    pub const ALL: [RecordField; 7] = [
        Self::Source,
        Self::LatinName,
        Self::EnglishName,
        Self::FrenchName,
        Self::Year,
        Self::Month,
        Self::NumberOtoliths,
    ];

    /// Stable attribute key accepted by chart prompts.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Source => "source",
            Self::LatinName => "latin_name",
            Self::EnglishName => "english_name",
            Self::FrenchName => "french_name",
            Self::Year => "year",
            Self::Month => "month",
            Self::NumberOtoliths => "number_otoliths",
        }
    }

    /// User-facing label, also used as chart axis label.
    pub fn display_name(self) -> &'static str {
        match self {
            Self::Source => "Source",
            Self::LatinName => "Latin Name",
            Self::EnglishName => "English Name",
            Self::FrenchName => "French Name",
            Self::Year => "Year",
            Self::Month => "Month",
            Self::NumberOtoliths => "Number of Otoliths",
        }
    }

    /// Column key in the dataset header row.
    pub fn csv_header(self) -> &'static str {
        match self {
            Self::Source => "source",
            Self::LatinName => "latin.name_nom.latin",
            Self::EnglishName => "english.name_nom.anglais",
            Self::FrenchName => "french.name_nom.français",
            Self::Year => "year_année",
            Self::Month => "month_mois",
            Self::NumberOtoliths => "number.otoliths_nombre.otolithes",
        }
    }

    /// Borrows this field's value from `record`.
    pub fn value_of(self, record: &Record) -> &str {
        match self {
            Self::Source => &record.source,
            Self::LatinName => &record.latin_name,
            Self::EnglishName => &record.english_name,
            Self::FrenchName => &record.french_name,
            Self::Year => &record.year,
            Self::Month => &record.month,
            Self::NumberOtoliths => &record.number_otoliths,
        }
    }
}

impl Display for RecordField {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parses a field from its attribute key or CSV header key.
///
/// Input is trimmed and matched case-insensitively.
pub fn parse_record_field(value: &str) -> Result<RecordField, RecordFieldError> {
    let normalized = value.trim();
    if normalized.is_empty() {
        return Err(RecordFieldError::EmptyField);
    }

    let lowered = normalized.to_lowercase();
    RecordField::ALL
        .into_iter()
        .find(|field| field.as_str() == lowered || field.csv_header() == lowered)
        .ok_or_else(|| RecordFieldError::UnknownField(normalized.to_string()))
}

/// Field name parse errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordFieldError {
    EmptyField,
    UnknownField(String),
}

impl Display for RecordFieldError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyField => write!(f, "field name must not be empty"),
            Self::UnknownField(value) => write!(
                f,
                "unknown field `{value}`; expected one of {}",
                RecordField::ALL.map(RecordField::as_str).join(", ")
            ),
        }
    }
}

impl Error for RecordFieldError {}
