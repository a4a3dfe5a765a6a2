//! Streaming reader for the ETD CSV export.
//!
//! The export carries no header row and exactly six columns per row: title,
//! "surname, given-name(s)", year, degree name, identifier/link blob, source
//! UUID. Rows are surfaced one at a time with a 1-based line number for
//! diagnostics.

use std::fs::File;
use std::path::Path;

use csv::{ReaderBuilder, StringRecord};
use tracing::debug;

use etd_model::{EtdError, RawRecord, Result};

/// Columns expected in every export row.
pub const EXPORT_COLUMNS: usize = 6;

/// Sequential reader over one export file.
#[derive(Debug)]
pub struct ExportReader {
    reader: csv::Reader<File>,
    record: StringRecord,
    line: u64,
}

impl ExportReader {
    pub fn open(path: &Path) -> Result<Self> {
        let reader = ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_path(path)
            .map_err(|error| map_csv_error(0, error))?;
        debug!(path = %path.display(), "export opened");
        Ok(Self {
            reader,
            record: StringRecord::new(),
            line: 0,
        })
    }

    /// Read the next row, or `None` at end of input.
    pub fn next_record(&mut self) -> Option<Result<RawRecord>> {
        self.line += 1;
        match self.reader.read_record(&mut self.record) {
            Ok(false) => None,
            Ok(true) => Some(raw_record(self.line, &self.record)),
            Err(error) => Some(Err(map_csv_error(self.line, error))),
        }
    }
}

impl Iterator for ExportReader {
    type Item = Result<RawRecord>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_record()
    }
}

fn raw_record(line: u64, record: &StringRecord) -> Result<RawRecord> {
    if record.len() < EXPORT_COLUMNS {
        return Err(EtdError::record(
            line,
            format!(
                "expected {EXPORT_COLUMNS} columns, found {}",
                record.len()
            ),
        ));
    }
    let field = |index: usize| record.get(index).unwrap_or("").to_string();
    Ok(RawRecord {
        line,
        title: field(0),
        full_name: field(1),
        year: field(2),
        degree_name: field(3),
        identifier: field(4),
        source_uuid: field(5),
    })
}

fn map_csv_error(line: u64, error: csv::Error) -> EtdError {
    let message = error.to_string();
    match error.into_kind() {
        csv::ErrorKind::Io(io) => EtdError::Io(io),
        _ => EtdError::record(line, message),
    }
}
