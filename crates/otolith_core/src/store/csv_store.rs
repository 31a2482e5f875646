//! CSV reader/writer for the otolith dataset layout.
//!
//! # Responsibility
//! - Stream records row by row so callers keep rows read before a failure.
//! - Write the fixed header plus one row per record in sequence order.
//!
//! # Invariants
//! - Header keys are exactly `CSV_HEADERS`; write order never changes.
//! - Input is decoded as UTF-8; a leading BOM is tolerated.

use super::{StoreError, StoreResult};
use crate::model::field::RecordField;
use crate::model::record::Record;
use log::{debug, error};
use std::fs::File;
use std::io::{self, BufReader, BufWriter, Read, Write};
use std::path::Path;

/// Dataset header keys in write order.
pub const CSV_HEADERS: [&str; 7] = [
    "source",
    "latin.name_nom.latin",
    "english.name_nom.anglais",
    "french.name_nom.français",
    "year_année",
    "month_mois",
    "number.otoliths_nombre.otolithes",
];

/// Row iterator over a CSV source.
///
/// Yields one `StoreResult<Record>` per data row; iteration may continue past
/// an error, but callers that want row-prefix semantics stop at the first one.
pub struct CsvRecordReader<R: Read> {
    rows: csv::DeserializeRecordsIntoIter<R, Record>,
}

impl CsvRecordReader<BufReader<File>> {
    /// Opens a dataset file for reading.
    ///
    /// # Errors
    /// - `StoreError::FileNotFound` when `path` does not exist.
    /// - `StoreError::Io` for other open failures.
    /// - Header errors as in [`CsvRecordReader::from_reader`].
    pub fn open(path: impl AsRef<Path>) -> StoreResult<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|err| {
            if err.kind() == io::ErrorKind::NotFound {
                StoreError::FileNotFound(path.to_path_buf())
            } else {
                StoreError::Io(err)
            }
        })?;
        debug!(
            "event=csv_open module=store status=ok path={}",
            path.display()
        );
        Self::from_reader(BufReader::new(file))
    }
}

impl<R: Read> CsvRecordReader<R> {
    /// Wraps any byte source and validates its header row.
    ///
    /// A completely empty source has no header and yields no rows.
    ///
    /// # Errors
    /// - `StoreError::MissingColumn` when a dataset column is absent.
    /// - `StoreError::Csv` when the header row cannot be decoded.
    pub fn from_reader(reader: R) -> StoreResult<Self> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .from_reader(reader);

        let headers = csv_reader.headers()?;
        if !headers.is_empty() {
            if let Some(missing) = RecordField::ALL
                .into_iter()
                .map(RecordField::csv_header)
                .find(|column| !headers.iter().any(|header| header == *column))
            {
                error!("event=csv_header module=store status=error missing_column={missing}");
                return Err(StoreError::MissingColumn(missing));
            }
        }

        Ok(Self {
            rows: csv_reader.into_deserialize(),
        })
    }
}

impl<R: Read> Iterator for CsvRecordReader<R> {
    type Item = StoreResult<Record>;

    fn next(&mut self) -> Option<Self::Item> {
        self.rows.next().map(|row| row.map_err(StoreError::from))
    }
}

/// Writes the header and every record to `writer`.
///
/// Returns the number of data rows written.
pub fn write_records<W: Write>(writer: W, records: &[Record]) -> StoreResult<usize> {
    let mut csv_writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);

    csv_writer.write_record(CSV_HEADERS)?;
    for record in records {
        csv_writer.write_record(record.to_row())?;
    }
    csv_writer.flush()?;

    Ok(records.len())
}

/// Creates (or truncates) `path` and writes all records to it.
pub fn save_records_to_path(path: impl AsRef<Path>, records: &[Record]) -> StoreResult<usize> {
    let path = path.as_ref();
    let file = File::create(path)?;
    let written = write_records(BufWriter::new(file), records)?;
    debug!(
        "event=csv_write module=store status=ok path={} rows={written}",
        path.display()
    );
    Ok(written)
}
