//! `StationOutputObserver<W>` bridges `SimObserver` to a `LogWriter`.

use std::io::{self, Stdout, Write};
use std::path::Path;

use dts_core::{SimTime, StationConfig};
use dts_event::{Event, StationQueue};
use dts_sim::{EventLog, LogEntry, Sim, SimObserver, SimOutcome, Statistics};
use log::info;

use crate::console::{print_log, print_summary};
use crate::csv::CsvLogWriter;
use crate::writer::LogWriter;
use crate::{OutputError, OutputResult};

/// A [`SimObserver`] that streams log entries to a [`LogWriter`] and, when
/// the run's config asks for it, prints the log table and counters to a
/// console stream (stdout unless replaced with
/// [`with_console`][Self::with_console]) at the end.
///
/// Errors from the writer are stored internally because `SimObserver` methods
/// have no return value.  After `sim.run()` returns, check for errors with
/// [`take_error`][Self::take_error]; a stored error means the export is
/// incomplete and must be treated as fatal.
pub struct StationOutputObserver<W: LogWriter, C: Write = Stdout> {
    writer:         W,
    console:        C,
    log_to_console: bool,
    last_error:     Option<OutputError>,
}

impl<W: LogWriter> StationOutputObserver<W> {
    pub fn new(writer: W) -> Self {
        Self { writer, console: io::stdout(), log_to_console: false, last_error: None }
    }
}

impl<W: LogWriter, C: Write> StationOutputObserver<W, C> {
    /// Print the console tables to `console` instead.
    pub fn with_console<C2: Write>(self, console: C2) -> StationOutputObserver<W, C2> {
        StationOutputObserver {
            writer: self.writer,
            console,
            log_to_console: self.log_to_console,
            last_error: self.last_error,
        }
    }

    /// Take the stored error (if any) after `sim.run()` returns.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Unwrap the inner writer.
    pub fn into_writer(self) -> W {
        self.writer
    }

    /// Unwrap the log writer and the console stream.
    pub fn into_parts(self) -> (W, C) {
        (self.writer, self.console)
    }

    fn print_console(&mut self, stats: &Statistics, log: &EventLog) -> io::Result<()> {
        print_log(log, &mut self.console)?;
        print_summary(stats, &mut self.console)?;
        self.console.flush()
    }

    fn store_err(&mut self, result: OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: LogWriter, C: Write> SimObserver for StationOutputObserver<W, C> {
    fn on_run_start(&mut self, config: &StationConfig, _pending: usize) {
        self.log_to_console = config.log_to_console;
    }

    fn on_event(&mut self, _event: &Event, entry: &LogEntry, _station: &StationQueue) {
        let result = self.writer.write_entry(entry);
        self.store_err(result);
    }

    fn on_sim_end(&mut self, stats: &Statistics, log: &EventLog, _final_time: SimTime) {
        if self.log_to_console {
            let printed = self.print_console(stats, log);
            self.store_err(printed.map_err(OutputError::from));
        }
        let result = self.writer.finish();
        self.store_err(result);
    }
}

/// Run `sim` to completion while exporting its log to the CSV file at `path`.
///
/// A write failure anywhere in the export fails the whole call, even though
/// the simulation itself finished.
pub fn run_and_export(sim: Sim, path: &Path) -> OutputResult<SimOutcome> {
    let mut obs = StationOutputObserver::new(CsvLogWriter::create(path)?);
    let outcome = sim.run(&mut obs)?;
    if let Some(e) = obs.take_error() {
        return Err(e);
    }
    info!("event log: {} rows written to {}", outcome.log.len(), path.display());
    Ok(outcome)
}
