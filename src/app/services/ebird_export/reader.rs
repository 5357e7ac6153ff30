//! Export file reading and record streaming
//!
//! The whole export is read into memory up front; row 1 is the header and
//! builds the column map, and the remaining rows become a single-pass lazy
//! stream of records. Unreadable, unparsable, and empty files are reported
//! as typed errors for the calling application to escalate; there is no
//! meaningful partial result from a broken export.

use std::path::Path;
use tracing::info;

use super::column_map::ColumnMap;
use super::record_decoder::decode_record;
use crate::app::models::Record;
use crate::{Error, Result};

/// First data row of an export file; line 1 is the header
const FIRST_DATA_LINE: usize = 2;

/// Open an export file and return a stream of its records.
///
/// The file is parsed eagerly with a flexible reader, since exports carry a
/// variable number of fields per row. Iteration afterwards performs no I/O,
/// and the consumer may stop early at any point.
pub fn read_records(path: &Path) -> Result<RecordStream> {
    let file = std::fs::File::open(path).map_err(|e| {
        Error::io(format!("failed to open export file {}", path.display()), e)
    })?;

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(file);

    let mut rows = Vec::new();
    for result in reader.records() {
        let row = result.map_err(|e| {
            Error::csv_parsing(
                path.display().to_string(),
                format!("failed at row {}", rows.len() + 1),
                Some(e),
            )
        })?;
        rows.push(row);
    }

    if rows.is_empty() {
        return Err(Error::empty_export(path.display().to_string()));
    }

    let columns = ColumnMap::from_header(&rows[0]);
    info!(
        "Read {} eBird observations from {}",
        rows.len() - 1,
        path.display()
    );

    Ok(RecordStream {
        columns,
        rows: rows.into_iter().skip(1),
        line: FIRST_DATA_LINE,
    })
}

/// Single-pass stream of records from one export file.
///
/// Yields records in file order, tagged with their 1-indexed line number.
/// The stream is forward-only; a second pass requires re-reading the file.
#[derive(Debug)]
pub struct RecordStream {
    columns: ColumnMap,
    rows: std::iter::Skip<std::vec::IntoIter<csv::StringRecord>>,
    line: usize,
}

impl RecordStream {
    /// Column map built from this export's header row
    pub fn columns(&self) -> &ColumnMap {
        &self.columns
    }
}

impl Iterator for RecordStream {
    type Item = Record;

    fn next(&mut self) -> Option<Record> {
        let row = self.rows.next()?;
        let line = self.line;
        self.line += 1;
        Some(decode_record(line, &row, &self.columns))
    }
}
