//! CSV event log backend.
//!
//! # CSV format
//!
//! ```csv
//! timestamp,car_id,event_type,cars_in_system
//! 0,1,Arriving,1
//! 62,2,Arriving,2
//! 97,1,Testing,2
//! ```
//!
//! `event_type` is one of `Arriving`, `Testing`, `Leaving`, `Rejecting`.
//! Rows are in processing order.

use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;

use csv::{Reader, Writer, WriterBuilder};
use dts_sim::{EventLog, LogEntry};

use crate::row::{HEADER, LogRow};
use crate::writer::LogWriter;
use crate::OutputResult;

// ── Writer ────────────────────────────────────────────────────────────────────

/// Writes the event log as CSV, one row per entry.
pub struct CsvLogWriter<W: Write = File> {
    inner:    Writer<W>,
    rows:     usize,
    finished: bool,
}

impl CsvLogWriter<File> {
    /// Create (or truncate) the file at `path` and write the header row.
    pub fn create(path: &Path) -> OutputResult<Self> {
        Self::from_writer(File::create(path)?)
    }
}

impl<W: Write> CsvLogWriter<W> {
    /// Wrap any `Write` and write the header row.
    ///
    /// The header is written up front so an empty log still yields it.
    pub fn from_writer(out: W) -> OutputResult<Self> {
        let mut inner = WriterBuilder::new().has_headers(false).from_writer(out);
        inner.write_record(HEADER)?;
        Ok(Self { inner, rows: 0, finished: false })
    }

    /// Write every entry of `log`.
    pub fn write_log(&mut self, log: &EventLog) -> OutputResult<()> {
        for entry in log {
            self.write_entry(entry)?;
        }
        Ok(())
    }

    /// Data rows written so far.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Flush and return the underlying writer.
    pub fn into_inner(mut self) -> OutputResult<W> {
        self.finish()?;
        self.inner.into_inner().map_err(|e| e.into_error().into())
    }
}

impl<W: Write> LogWriter for CsvLogWriter<W> {
    fn write_entry(&mut self, entry: &LogEntry) -> OutputResult<()> {
        self.inner.serialize(LogRow::from(entry))?;
        self.rows += 1;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.inner.flush()?;
        Ok(())
    }
}

// ── Reader ────────────────────────────────────────────────────────────────────

/// Load an event log previously written by [`CsvLogWriter`].
pub fn read_log_csv(path: &Path) -> OutputResult<EventLog> {
    read_log_reader(File::open(path)?)
}

/// Load an event log from any reader yielding CSV with a header row.
pub fn read_log_reader<R: Read>(reader: R) -> OutputResult<EventLog> {
    let mut rdr = Reader::from_reader(reader);
    let mut entries = Vec::new();
    for record in rdr.deserialize::<LogRow>() {
        entries.push(LogEntry::try_from(record?)?);
    }
    Ok(EventLog::from(entries))
}
