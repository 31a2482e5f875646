//! Core record management for otolith sampling datasets.
//! Storage, display, editing and counting live here; interaction lives in the CLI.

pub mod chart;
pub mod format;
pub mod logging;
pub mod model;
pub mod repo;
pub mod store;

pub use chart::bar_chart::{BarChart, ChartRenderer, TextBarChartRenderer};
pub use chart::{ChartError, ChartResult};
pub use format::formatter::{
    parse_formatter_kind, CompactRecordFormatter, DefaultRecordFormatter, FormatterKind,
    FormatterKindError, RecordFormatter,
};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::field::{parse_record_field, RecordField, RecordFieldError};
pub use model::record::Record;
pub use repo::record_repo::{
    FieldCount, ListedRecord, RecordRepository, RepoError, RepoResult, DISPLAY_GROUP_SIZE,
};
pub use store::csv_store::{CsvRecordReader, CSV_HEADERS};
pub use store::{StoreError, StoreResult};
