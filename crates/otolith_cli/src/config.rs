//! Command-line configuration.

use clap::Parser;
use otolith_core::{parse_formatter_kind, FormatterKind};
use std::io;
use std::path::{Path, PathBuf};

pub const DEFAULT_DATASET: &str = "NAFO-4T-Yellowtail-Flounder-otoliths.csv";

/// Interactive manager for otolith sampling CSV datasets.
#[derive(Debug, Parser)]
#[command(name = "otolith", version, about)]
pub struct Cli {
    /// Dataset loaded at startup and by menu option 1.
    #[arg(long, value_name = "PATH", default_value = DEFAULT_DATASET)]
    pub data: PathBuf,

    /// Save all records to this CSV file on exit.
    #[arg(long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Record display layout.
    #[arg(long, value_name = "default|compact", default_value = "default", value_parser = parse_formatter_kind)]
    pub format: FormatterKind,

    /// Log level (trace|debug|info|warn|error); defaults per build mode.
    #[arg(long, value_name = "LEVEL")]
    pub log_level: Option<String>,

    /// Write rolling logs under this directory. Logging is off when omitted.
    #[arg(long, value_name = "DIR")]
    pub log_dir: Option<PathBuf>,
}

/// Resolves a relative `dir` against the working directory.
pub fn absolute_dir(dir: &Path) -> io::Result<PathBuf> {
    if dir.is_absolute() {
        return Ok(dir.to_path_buf());
    }
    Ok(std::env::current_dir()?.join(dir))
}
