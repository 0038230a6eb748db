//! CSV-backed record store.
//!
//! The file is a flat table with the header `date,hours,payforaverage`. It is
//! read leniently: blank or non-numeric figures count as zero and rows whose
//! date cannot be read are left out. It is written with a UTF-8 byte order
//! mark so spreadsheet tools open it with the right encoding, through a
//! temporary file in the same directory that replaces the target on success.

use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::Deserialize;
use tempfile::NamedTempFile;
use tracing::{debug, info, warn};

use crate::error::{EngineError, EngineResult};
use crate::models::{WorkRecord, parse_record_date};

use super::RecordStore;

const UTF8_BOM: &str = "\u{feff}";
const HEADER: [&str; 3] = ["date", "hours", "payforaverage"];

/// A row as it appears in the file, before coercion.
#[derive(Debug, Default, Deserialize)]
struct CsvRow {
    #[serde(default)]
    date: Option<String>,
    #[serde(default)]
    hours: Option<String>,
    #[serde(default)]
    payforaverage: Option<String>,
}

/// A [`RecordStore`] persisting to a single CSV file.
///
/// # Example
///
/// ```no_run
/// use hours_analyzer::store::{CsvRecordStore, RecordStore};
///
/// let store = CsvRecordStore::new("data.csv");
/// let records = store.load().unwrap();
/// store.save(&records).unwrap();
/// ```
#[derive(Debug, Clone)]
pub struct CsvRecordStore {
    path: PathBuf,
}

impl CsvRecordStore {
    /// Creates a store for the file at `path`. The file need not exist yet.
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Returns the backing file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn error(&self, message: impl ToString) -> EngineError {
        EngineError::StoreError {
            path: self.path.display().to_string(),
            message: message.to_string(),
        }
    }

    fn parse(&self, content: &str) -> Vec<WorkRecord> {
        let content = content.strip_prefix(UTF8_BOM).unwrap_or(content);
        let mut reader = csv::ReaderBuilder::new()
            .flexible(true)
            .trim(csv::Trim::All)
            .from_reader(content.as_bytes());

        let mut records = Vec::new();
        for (index, row) in reader.deserialize::<CsvRow>().enumerate() {
            // header is line 1
            let line = index + 2;
            let row = match row {
                Ok(row) => row,
                Err(e) => {
                    warn!(path = %self.path.display(), line = line, error = %e, "Skipping unreadable row");
                    continue;
                }
            };

            let raw_date = row.date.unwrap_or_default();
            let Some(date) = parse_record_date(&raw_date) else {
                warn!(
                    path = %self.path.display(),
                    line = line,
                    value = %raw_date,
                    "Excluding record with unreadable date"
                );
                continue;
            };

            records.push(WorkRecord::new(
                date,
                coerce_number(row.hours.as_deref()),
                coerce_number(row.payforaverage.as_deref()),
            ));
        }

        records
    }

    fn write_to<W: Write>(&self, mut out: W, records: &[WorkRecord]) -> EngineResult<()> {
        out.write_all(UTF8_BOM.as_bytes())
            .map_err(|e| self.error(e))?;

        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(out);
        writer.write_record(HEADER).map_err(|e| self.error(e))?;
        for record in records {
            writer
                .write_record([
                    record.date.format("%Y-%m-%d").to_string(),
                    record.hours.normalize().to_string(),
                    record.pay.normalize().to_string(),
                ])
                .map_err(|e| self.error(e))?;
        }
        writer.flush().map_err(|e| self.error(e))?;
        Ok(())
    }
}

impl RecordStore for CsvRecordStore {
    fn load(&self) -> EngineResult<Vec<WorkRecord>> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "No record file yet, starting empty");
                return Ok(Vec::new());
            }
            Err(e) => return Err(self.error(e)),
        };

        let records = self.parse(&content);
        debug!(path = %self.path.display(), count = records.len(), "Loaded records");
        Ok(records)
    }

    fn save(&self, records: &[WorkRecord]) -> EngineResult<()> {
        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };

        // Dropped (and deleted) on any early return
        let mut staging = NamedTempFile::new_in(dir).map_err(|e| self.error(e))?;
        self.write_to(&mut staging, records)?;
        staging
            .persist(&self.path)
            .map_err(|e| self.error(e.error))?;

        info!(path = %self.path.display(), count = records.len(), "Saved records");
        Ok(())
    }
}

/// Parses a figure, treating anything blank or non-numeric as zero.
fn coerce_number(value: Option<&str>) -> Decimal {
    let value = value.map(str::trim).unwrap_or_default();
    Decimal::from_str(value)
        .or_else(|_| Decimal::from_scientific(value))
        .unwrap_or(Decimal::ZERO)
}
