//! Record repository over an ordered `Vec<Record>`.
//!
//! # Responsibility
//! - Provide load/save/display/add/edit/delete/count over the record sequence.
//! - Report every outcome through `RepoResult` instead of printing.
//!
//! # Invariants
//! - Load replaces the sequence; rows read before a parse failure are kept.
//! - Delete preserves the relative order of the remaining records.
//! - Failed index lookups never touch the sequence.

use crate::format::formatter::RecordFormatter;
use crate::model::field::RecordField;
use crate::model::record::Record;
use crate::store::csv_store::{save_records_to_path, write_records, CsvRecordReader};
use crate::store::{StoreError, StoreResult};
use log::{error, info, warn};
use std::collections::HashMap;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::io::{Read, Write};
use std::path::Path;

/// Listing marks a group boundary after this many records.
pub const DISPLAY_GROUP_SIZE: usize = 10;

pub type RepoResult<T> = Result<T, RepoError>;

/// Repository error for storage and positional operations.
#[derive(Debug)]
pub enum RepoError {
    Store(StoreError),
    InvalidIndex { index: usize, len: usize },
}

impl RepoError {
    /// True when a load failed because the dataset file does not exist.
    pub fn is_file_not_found(&self) -> bool {
        matches!(self, Self::Store(StoreError::FileNotFound(_)))
    }
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Store(err) => write!(f, "{err}"),
            Self::InvalidIndex { index, len } => {
                write!(f, "invalid record index {index}; {len} records loaded")
            }
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Store(err) => Some(err),
            Self::InvalidIndex { .. } => None,
        }
    }
}

impl From<StoreError> for RepoError {
    fn from(value: StoreError) -> Self {
        Self::Store(value)
    }
}

/// One entry of a full listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListedRecord {
    /// 1-based position in the sequence.
    pub ordinal: usize,
    /// Formatter output for the record.
    pub text: String,
    /// Set on every `DISPLAY_GROUP_SIZE`-th record.
    pub closes_group: bool,
}

/// Occurrence count for one distinct field value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldCount {
    pub value: String,
    pub count: usize,
}

/// Ordered record store with an injected formatter.
pub struct RecordRepository<F: RecordFormatter> {
    records: Vec<Record>,
    formatter: F,
}

impl<F: RecordFormatter> RecordRepository<F> {
    /// Creates an empty repository using `formatter` for display.
    pub fn new(formatter: F) -> Self {
        Self::with_records(formatter, Vec::new())
    }

    /// Creates a repository seeded with `records`.
    pub fn with_records(formatter: F, records: Vec<Record>) -> Self {
        Self { records, formatter }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn get(&self, index: usize) -> Option<&Record> {
        self.records.get(index)
    }

    /// Replaces the sequence with rows from a CSV file.
    ///
    /// Returns the number of records loaded.
    ///
    /// # Errors
    /// - `FileNotFound` leaves the sequence empty.
    /// - Row parse failures keep rows read before the failing one.
    pub fn load_from_path(&mut self, path: impl AsRef<Path>) -> RepoResult<usize> {
        let path = path.as_ref();
        self.records.clear();

        let reader = match CsvRecordReader::open(path) {
            Ok(reader) => reader,
            Err(err) => {
                error!(
                    "event=records_load module=repo status=error path={} error={}",
                    path.display(),
                    err
                );
                return Err(err.into());
            }
        };

        let loaded = self.extend_from_rows(reader);
        self.log_load_outcome(&path.display().to_string(), &loaded);
        loaded
    }

    /// Replaces the sequence with rows from any CSV byte source.
    pub fn load_from_reader<R: Read>(&mut self, reader: R) -> RepoResult<usize> {
        self.records.clear();

        let loaded = match CsvRecordReader::from_reader(reader) {
            Ok(rows) => self.extend_from_rows(rows),
            Err(err) => Err(err.into()),
        };
        self.log_load_outcome("<reader>", &loaded);
        loaded
    }

    fn extend_from_rows(
        &mut self,
        rows: impl Iterator<Item = StoreResult<Record>>,
    ) -> RepoResult<usize> {
        for row in rows {
            self.records.push(row?);
        }
        Ok(self.records.len())
    }

    fn log_load_outcome(&self, origin: &str, outcome: &RepoResult<usize>) {
        match outcome {
            Ok(count) => info!(
                "event=records_load module=repo status=ok origin={origin} count={count}"
            ),
            Err(err) => error!(
                "event=records_load module=repo status=error origin={origin} kept={} error={err}",
                self.records.len()
            ),
        }
    }

    /// Writes the full sequence to a CSV file, header first.
    pub fn save_to_path(&self, path: impl AsRef<Path>) -> RepoResult<usize> {
        let path = path.as_ref();
        match save_records_to_path(path, &self.records) {
            Ok(written) => {
                info!(
                    "event=records_save module=repo status=ok path={} count={written}",
                    path.display()
                );
                Ok(written)
            }
            Err(err) => {
                error!(
                    "event=records_save module=repo status=error path={} error={err}",
                    path.display()
                );
                Err(err.into())
            }
        }
    }

    /// Writes the full sequence to any byte sink, header first.
    pub fn save_to_writer<W: Write>(&self, writer: W) -> RepoResult<usize> {
        Ok(write_records(writer, &self.records)?)
    }

    /// Formats the record at `index` with the active formatter.
    pub fn display(&self, index: usize) -> RepoResult<String> {
        let record = self.checked(index)?;
        Ok(self.formatter.format_record(record))
    }

    /// Formats every record in sequence order.
    pub fn display_all(&self) -> Vec<ListedRecord> {
        self.records
            .iter()
            .enumerate()
            .map(|(index, record)| {
                let ordinal = index + 1;
                ListedRecord {
                    ordinal,
                    text: self.formatter.format_record(record),
                    closes_group: ordinal % DISPLAY_GROUP_SIZE == 0,
                }
            })
            .collect()
    }

    /// Appends `record` and returns its index.
    pub fn add(&mut self, record: Record) -> usize {
        self.records.push(record);
        let index = self.records.len() - 1;
        info!("event=record_add module=repo status=ok index={index}");
        index
    }

    /// Replaces the record at `index` wholesale.
    pub fn edit(&mut self, index: usize, record: Record) -> RepoResult<()> {
        self.checked(index)?;
        self.records[index] = record;
        info!("event=record_edit module=repo status=ok index={index}");
        Ok(())
    }

    /// Removes and returns the record at `index`, shifting later records down.
    pub fn delete(&mut self, index: usize) -> RepoResult<Record> {
        self.checked(index)?;
        let removed = self.records.remove(index);
        info!(
            "event=record_delete module=repo status=ok index={index} remaining={}",
            self.records.len()
        );
        Ok(removed)
    }

    /// Counts occurrences of each distinct value of `field`.
    ///
    /// Values appear in first-seen order.
    pub fn count_by_field(&self, field: RecordField) -> Vec<FieldCount> {
        let mut positions: HashMap<&str, usize> = HashMap::new();
        let mut counts: Vec<FieldCount> = Vec::new();

        for record in &self.records {
            let value = field.value_of(record);
            match positions.get(value) {
                Some(&position) => counts[position].count += 1,
                None => {
                    positions.insert(value, counts.len());
                    counts.push(FieldCount {
                        value: value.to_string(),
                        count: 1,
                    });
                }
            }
        }

        counts
    }

    fn checked(&self, index: usize) -> RepoResult<&Record> {
        self.records.get(index).ok_or_else(|| {
            warn!(
                "event=record_lookup module=repo status=error error_code=invalid_index index={index} len={}",
                self.records.len()
            );
            RepoError::InvalidIndex {
                index,
                len: self.records.len(),
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::{RecordRepository, DISPLAY_GROUP_SIZE};
    use crate::format::formatter::DefaultRecordFormatter;
    use crate::model::record::Record;

    fn numbered(count: usize) -> Vec<Record> {
        (0..count)
            .map(|n| Record::new("s", "l", "e", "f", n.to_string(), "m", "1"))
            .collect()
    }

    #[test]
    fn display_all_marks_every_tenth_record() {
        let repo = RecordRepository::with_records(DefaultRecordFormatter, numbered(25));
        let listing = repo.display_all();

        assert_eq!(listing.len(), 25);
        assert_eq!(listing[0].ordinal, 1);
        let marked: Vec<usize> = listing
            .iter()
            .filter(|entry| entry.closes_group)
            .map(|entry| entry.ordinal)
            .collect();
        assert_eq!(marked, vec![DISPLAY_GROUP_SIZE, 2 * DISPLAY_GROUP_SIZE]);
    }

    #[test]
    fn load_from_reader_replaces_previous_records() {
        let mut repo = RecordRepository::with_records(DefaultRecordFormatter, numbered(3));
        let input = "source,latin.name_nom.latin,english.name_nom.anglais,french.name_nom.français,year_année,month_mois,number.otoliths_nombre.otolithes\n\
                     survey,Limanda ferruginea,Yellowtail,Limande,2001,June,4\n";

        let loaded = repo.load_from_reader(input.as_bytes()).expect("load ok");
        assert_eq!(loaded, 1);
        assert_eq!(repo.len(), 1);
        assert_eq!(repo.records()[0].year, "2001");
    }

    #[test]
    fn header_error_leaves_sequence_empty() {
        let mut repo = RecordRepository::with_records(DefaultRecordFormatter, numbered(2));
        let err = repo
            .load_from_reader("source\nx\n".as_bytes())
            .expect_err("missing columns must fail");
        assert!(!err.is_file_not_found());
        assert!(repo.is_empty());
    }
}
