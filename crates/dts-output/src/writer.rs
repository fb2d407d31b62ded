//! The `LogWriter` trait implemented by event log backends.

use dts_sim::LogEntry;

use crate::OutputResult;

/// Sink for event log entries, fed one entry at a time as the run proceeds.
///
/// Errors are stored by [`StationOutputObserver`][crate::StationOutputObserver]
/// and surfaced after the run.
pub trait LogWriter {
    /// Append one entry.
    fn write_entry(&mut self, entry: &LogEntry) -> OutputResult<()>;

    /// Flush and close the underlying output.
    ///
    /// Safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}
