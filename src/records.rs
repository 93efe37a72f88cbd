//! CSV record source
//!
//! Opens the input file, sizes the run by counting raw newlines before any
//! structured parsing, locates the required `name` and `url` columns, and
//! yields records one at a time.

use anyhow::{anyhow, Context, Result};
use csv::{Reader, ReaderBuilder, StringRecord};
use std::fs::File;
use std::path::Path;

/// One CSV data row under processing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub name: String,
    pub url: String,
}

/// Sequential pull source over the input CSV. Finite, not restartable.
#[derive(Debug)]
pub struct RecordSource {
    reader: Reader<File>,
    row: StringRecord,
    name_idx: usize,
    url_idx: usize,
    total: usize,
}

impl RecordSource {
    /// Open a CSV file and validate its shape.
    ///
    /// The total record count is the file's newline count minus one for
    /// the header row, fixed here and never revised even if a later read
    /// fails mid-run. Errors if the file is unreadable, contains no data
    /// rows, or lacks a column literally named `name` or `url`.
    pub fn open(path: &Path) -> Result<Self> {
        let raw = std::fs::read(path)
            .with_context(|| format!("failed to open CSV file {}", path.display()))?;

        // One line for the header
        let total_lines = raw.iter().filter(|&&b| b == b'\n').count();
        if total_lines <= 1 {
            return Err(anyhow!("CSV file does not contain any records to process"));
        }

        let file = File::open(path)
            .with_context(|| format!("failed to open CSV file {}", path.display()))?;
        let mut reader = ReaderBuilder::new().from_reader(file);

        let headers = reader
            .headers()
            .context("failed to read headers from CSV file")?;
        let name_idx = find_column(headers, "name")
            .ok_or_else(|| anyhow!("CSV does not contain required 'name' column"))?;
        let url_idx = find_column(headers, "url")
            .ok_or_else(|| anyhow!("CSV does not contain required 'url' column"))?;

        Ok(Self {
            reader,
            row: StringRecord::new(),
            name_idx,
            url_idx,
            total: total_lines - 1,
        })
    }

    /// Number of data rows, as counted at open time.
    pub fn total_records(&self) -> usize {
        self.total
    }
}

impl Iterator for RecordSource {
    type Item = Result<Record>;

    fn next(&mut self) -> Option<Self::Item> {
        match self.reader.read_record(&mut self.row) {
            Ok(false) => None,
            Ok(true) => Some(Ok(Record {
                name: self.row.get(self.name_idx).unwrap_or_default().to_string(),
                url: self.row.get(self.url_idx).unwrap_or_default().to_string(),
            })),
            Err(e) => Some(Err(e).context("failed to read a record from CSV file")),
        }
    }
}

/// Zero-based position of a column with exactly this header, if present.
fn find_column(headers: &StringRecord, column: &str) -> Option<usize> {
    headers.iter().position(|h| h == column)
}
