//! Interactive menu shell.
//!
//! # Responsibility
//! - Read menu choices and record fields from a line-oriented input.
//! - Call repository and chart operations and report each outcome as text.
//!
//! # Invariants
//! - Repository and chart failures are reported and the loop continues.
//! - Only input/output failures on the terminal itself end the shell early.
//! - End of input behaves like choosing Exit.

use log::{info, warn};
use otolith_core::{
    parse_record_field, BarChart, ChartRenderer, Record, RecordField, RecordFormatter,
    RecordRepository, RepoError,
};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

const MENU: &[&str] = &[
    "1. Reload data from dataset",
    "2. Display all records",
    "3. Add a new record",
    "4. Select, display, and edit a record",
    "5. Delete a record",
    "6. Generate vertical bar chart",
    "7. Exit",
];

const INVALID_INDEX_MESSAGE: &str = "Invalid record index.";

/// Whether the menu loop keeps running.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Exit,
}

pub struct Shell<R, W, F, C>
where
    R: BufRead,
    W: Write,
    F: RecordFormatter,
    C: ChartRenderer,
{
    input: R,
    output: W,
    repo: RecordRepository<F>,
    renderer: C,
    data_path: PathBuf,
    save_path: Option<PathBuf>,
}

impl<R, W, F, C> Shell<R, W, F, C>
where
    R: BufRead,
    W: Write,
    F: RecordFormatter,
    C: ChartRenderer,
{
    pub fn new(
        input: R,
        output: W,
        repo: RecordRepository<F>,
        renderer: C,
        data_path: PathBuf,
    ) -> Self {
        Self {
            input,
            output,
            repo,
            renderer,
            data_path,
            save_path: None,
        }
    }

    /// Saves all records to `path` when the shell exits.
    pub fn save_on_exit(mut self, path: Option<PathBuf>) -> Self {
        self.save_path = path;
        self
    }

    #[cfg(test)]
    pub fn repository(&self) -> &RecordRepository<F> {
        &self.repo
    }

    /// Loads the dataset, then serves menu choices until Exit or end of input.
    ///
    /// Save-on-exit runs even when the terminal fails midway.
    pub fn run(&mut self) -> io::Result<()> {
        info!(
            "event=shell_start module=cli status=ok data={}",
            self.data_path.display()
        );
        let served = self.serve();
        if let Err(err) = &served {
            warn!("event=shell_loop module=cli status=error error={err}");
        }
        let finished = self.finish();
        served.and(finished)
    }

    fn serve(&mut self) -> io::Result<()> {
        self.reload()?;

        loop {
            self.print_menu()?;
            let Some(choice) = self.prompt("Enter your choice: ")? else {
                break;
            };
            let flow = match choice.trim() {
                "1" => self.reload().map(|()| Flow::Continue)?,
                "2" => self.display_all().map(|()| Flow::Continue)?,
                "3" => self.add_record()?,
                "4" => self.select_display_edit()?,
                "5" => self.delete_record()?,
                "6" => self.chart()?,
                "7" => Flow::Exit,
                _ => {
                    writeln!(self.output, "Invalid choice. Please try again.")?;
                    Flow::Continue
                }
            };
            if flow == Flow::Exit {
                break;
            }
        }
        Ok(())
    }

    fn print_menu(&mut self) -> io::Result<()> {
        writeln!(self.output)?;
        writeln!(self.output, "Otolith records ({} loaded)", self.repo.len())?;
        writeln!(self.output, "Menu:")?;
        for line in MENU {
            writeln!(self.output, "{line}")?;
        }
        Ok(())
    }

    /// Writes `label`, then reads one line without its terminator.
    ///
    /// Bytes that are not UTF-8 become U+FFFD. Returns `None` at end of input.
    fn prompt(&mut self, label: &str) -> io::Result<Option<String>> {
        write!(self.output, "{label}")?;
        self.output.flush()?;

        let mut raw = Vec::new();
        if self.input.read_until(b'\n', &mut raw)? == 0 {
            return Ok(None);
        }
        let line = String::from_utf8_lossy(&raw);
        Ok(Some(line.trim_end_matches(['\n', '\r']).to_string()))
    }

    fn reload(&mut self) -> io::Result<()> {
        match self.repo.load_from_path(&self.data_path) {
            Ok(count) => writeln!(
                self.output,
                "Loaded {count} records from {}.",
                self.data_path.display()
            ),
            Err(err) if err.is_file_not_found() => writeln!(self.output, "Error: File not found."),
            Err(err) => writeln!(
                self.output,
                "An error occurred: {err} ({} records kept)",
                self.repo.len()
            ),
        }
    }

    fn display_all(&mut self) -> io::Result<()> {
        let listing = self.repo.display_all();
        if listing.is_empty() {
            return writeln!(self.output, "No records loaded.");
        }
        for entry in listing {
            writeln!(self.output, "Record {}", entry.ordinal)?;
            writeln!(self.output, "{}", entry.text)?;
            if entry.closes_group {
                writeln!(self.output, "-- {} records shown --", entry.ordinal)?;
            }
        }
        Ok(())
    }

    /// Prompts for all seven fields; `None` when input ends midway.
    fn read_record(&mut self) -> io::Result<Option<Record>> {
        let mut values: [String; 7] = Default::default();
        for (slot, field) in values.iter_mut().zip(RecordField::ALL) {
            match self.prompt(&format!("Enter {}: ", field.display_name()))? {
                Some(value) => *slot = value,
                None => return Ok(None),
            }
        }

        let [source, latin_name, english_name, french_name, year, month, number_otoliths] = values;
        Ok(Some(Record::new(
            source,
            latin_name,
            english_name,
            french_name,
            year,
            month,
            number_otoliths,
        )))
    }

    fn add_record(&mut self) -> io::Result<Flow> {
        let Some(record) = self.read_record()? else {
            return Ok(Flow::Exit);
        };
        self.repo.add(record);
        writeln!(self.output, "Record added successfully.")?;
        Ok(Flow::Continue)
    }

    fn select_display_edit(&mut self) -> io::Result<Flow> {
        let Some(answer) = self.prompt("Enter record index to select: ")? else {
            return Ok(Flow::Exit);
        };
        let Some(index) = parse_ordinal(&answer) else {
            writeln!(self.output, "{INVALID_INDEX_MESSAGE}")?;
            return Ok(Flow::Continue);
        };

        match self.repo.display(index) {
            Ok(text) => writeln!(self.output, "{text}")?,
            Err(err) => {
                self.report_repo_error(&err)?;
                return Ok(Flow::Continue);
            }
        }

        let Some(confirm) = self.prompt("Do you want to edit this record? (yes/no): ")? else {
            return Ok(Flow::Exit);
        };
        if !confirm.trim().eq_ignore_ascii_case("yes") {
            return Ok(Flow::Continue);
        }

        let Some(record) = self.read_record()? else {
            return Ok(Flow::Exit);
        };
        match self.repo.edit(index, record) {
            Ok(()) => writeln!(self.output, "Record edited successfully.")?,
            Err(err) => self.report_repo_error(&err)?,
        }
        Ok(Flow::Continue)
    }

    fn delete_record(&mut self) -> io::Result<Flow> {
        let Some(answer) = self.prompt("Enter record index to delete: ")? else {
            return Ok(Flow::Exit);
        };
        match parse_ordinal(&answer).map(|index| self.repo.delete(index)) {
            Some(Ok(_)) => writeln!(self.output, "Record deleted successfully.")?,
            Some(Err(err)) => self.report_repo_error(&err)?,
            None => writeln!(self.output, "{INVALID_INDEX_MESSAGE}")?,
        }
        Ok(Flow::Continue)
    }

    fn chart(&mut self) -> io::Result<Flow> {
        let keys = RecordField::ALL.map(RecordField::as_str).join(", ");
        let Some(answer) = self.prompt(&format!(
            "Enter the column name for the x-axis ({keys}): "
        ))?
        else {
            return Ok(Flow::Exit);
        };

        let field = match parse_record_field(&answer) {
            Ok(field) => field,
            Err(err) => {
                writeln!(self.output, "Error: {err}")?;
                return Ok(Flow::Continue);
            }
        };

        let chart = BarChart::for_field(field, self.repo.count_by_field(field));
        if let Err(err) = self.renderer.render(&chart) {
            warn!("event=chart_render module=cli status=error field={field} error={err}");
            writeln!(
                self.output,
                "An error occurred while generating the bar chart: {err}"
            )?;
        }
        Ok(Flow::Continue)
    }

    fn report_repo_error(&mut self, err: &RepoError) -> io::Result<()> {
        match err {
            RepoError::InvalidIndex { .. } => writeln!(self.output, "{INVALID_INDEX_MESSAGE}"),
            other => writeln!(self.output, "An error occurred: {other}"),
        }
    }

    fn finish(&mut self) -> io::Result<()> {
        if let Some(path) = self.save_path.clone() {
            match self.repo.save_to_path(&path) {
                Ok(count) => writeln!(
                    self.output,
                    "Records saved successfully ({count} rows to {}).",
                    path.display()
                )?,
                Err(err) => writeln!(
                    self.output,
                    "An error occurred while saving records: {err}"
                )?,
            }
        }
        info!("event=shell_exit module=cli status=ok");
        self.output.flush()
    }
}

/// Converts a 1-based user ordinal into a 0-based index.
///
/// Zero, negatives and non-numbers have no index.
fn parse_ordinal(text: &str) -> Option<usize> {
    let ordinal: i64 = text.trim().parse().ok()?;
    usize::try_from(ordinal).ok()?.checked_sub(1)
}
