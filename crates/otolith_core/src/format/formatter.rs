//! Formatter contract and built-in variants.

use crate::model::record::Record;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Renders one record to a display string.
pub trait RecordFormatter {
    fn format_record(&self, record: &Record) -> String;
}

impl<F: RecordFormatter + ?Sized> RecordFormatter for Box<F> {
    fn format_record(&self, record: &Record) -> String {
        (**self).format_record(record)
    }
}

impl<F: RecordFormatter + ?Sized> RecordFormatter for &F {
    fn format_record(&self, record: &Record) -> String {
        (**self).format_record(record)
    }
}

/// Labeled single-line layout listing every field.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultRecordFormatter;

impl RecordFormatter for DefaultRecordFormatter {
    fn format_record(&self, record: &Record) -> String {
        format!(
            "Source: {}, Latin Name: {}, English Name: {}, French Name: {}, Year: {}, Month: {}, Number of Otoliths: {}",
            record.source,
            record.latin_name,
            record.english_name,
            record.french_name,
            record.year,
            record.month,
            record.number_otoliths
        )
    }
}

/// Short layout for scanning long listings.
#[derive(Debug, Clone, Copy, Default)]
pub struct CompactRecordFormatter;

impl RecordFormatter for CompactRecordFormatter {
    fn format_record(&self, record: &Record) -> String {
        format!(
            "{}/{} {} ({}): {} otoliths [{}]",
            record.year,
            record.month,
            record.english_name,
            record.latin_name,
            record.number_otoliths,
            record.source
        )
    }
}

/// Formatter variant selected by configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FormatterKind {
    #[default]
    Default,
    Compact,
}

impl FormatterKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Compact => "compact",
        }
    }

    /// Builds the formatter for this variant.
    pub fn build(self) -> Box<dyn RecordFormatter> {
        match self {
            Self::Default => Box::new(DefaultRecordFormatter),
            Self::Compact => Box::new(CompactRecordFormatter),
        }
    }
}

/// Parses a formatter variant name (`default|compact`, case-insensitive).
pub fn parse_formatter_kind(value: &str) -> Result<FormatterKind, FormatterKindError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "default" => Ok(FormatterKind::Default),
        "compact" => Ok(FormatterKind::Compact),
        other => Err(FormatterKindError(other.to_string())),
    }
}

/// Unsupported formatter variant name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatterKindError(pub String);

impl Display for FormatterKindError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "unsupported formatter `{}`; expected default|compact",
            self.0
        )
    }
}

impl Error for FormatterKindError {}

#[cfg(test)]
mod tests {
    use super::{
        parse_formatter_kind, CompactRecordFormatter, DefaultRecordFormatter, FormatterKind,
        FormatterKindError, RecordFormatter,
    };
    use crate::model::record::Record;

    fn sample() -> Record {
        Record::new(
            "Source",
            "Latin Name",
            "English Name",
            "French Name",
            "2024",
            "March",
            "24",
        )
    }

    #[test]
    fn default_formatter_uses_labeled_layout() {
        assert_eq!(
            DefaultRecordFormatter.format_record(&sample()),
            "Source: Source, Latin Name: Latin Name, English Name: English Name, French Name: French Name, Year: 2024, Month: March, Number of Otoliths: 24"
        );
    }

    #[test]
    fn default_formatter_keeps_empty_fields() {
        let formatted = DefaultRecordFormatter.format_record(&Record::default());
        assert_eq!(
            formatted,
            "Source: , Latin Name: , English Name: , French Name: , Year: , Month: , Number of Otoliths: "
        );
    }

    #[test]
    fn compact_formatter_layout() {
        assert_eq!(
            CompactRecordFormatter.format_record(&sample()),
            "2024/March English Name (Latin Name): 24 otoliths [Source]"
        );
    }

    #[test]
    fn boxed_formatter_delegates() {
        let formatter = FormatterKind::Compact.build();
        assert_eq!(
            formatter.format_record(&sample()),
            CompactRecordFormatter.format_record(&sample())
        );
    }

    #[test]
    fn parses_formatter_kinds() {
        assert_eq!(
            parse_formatter_kind(" Default ").expect("default parse"),
            FormatterKind::Default
        );
        assert_eq!(
            parse_formatter_kind("COMPACT").expect("compact parse"),
            FormatterKind::Compact
        );
        assert_eq!(
            parse_formatter_kind("fancy").expect_err("unknown must fail"),
            FormatterKindError("fancy".to_string())
        );
    }
}
