//! `dts-output` — what happens to a run's results.
//!
//! | Module       | Contents                                                 |
//! |--------------|----------------------------------------------------------|
//! | [`csv`]      | `CsvLogWriter`, `read_log_csv`, `read_log_reader`        |
//! | [`console`]  | `print_log`, `print_summary`                             |
//! | [`analysis`] | `Analysis`, interval load, dwell times, histogram        |
//! | [`observer`] | `StationOutputObserver`, `run_and_export`                |
//! | [`row`]      | `LogRow`, the CSV record                                 |
//! | [`writer`]   | `LogWriter` trait                                        |
//!
//! # Usage
//!
//! ```rust,ignore
//! use dts_output::{Analysis, run_and_export};
//!
//! let sim = SimBuilder::new(config).build()?;
//! let outcome = run_and_export(sim, Path::new("event_log.csv"))?;
//! Analysis::from_run(&outcome.log, &outcome.stats).write_report(&mut std::io::stdout())?;
//! ```

pub mod analysis;
pub mod console;
pub mod csv;
pub mod error;
pub mod observer;
pub mod row;
pub mod writer;

#[cfg(test)]
mod tests;

pub use analysis::{Analysis, DwellTime, Histogram, INTERVAL_SECS, IntervalLoad};
pub use console::{print_log, print_summary};
pub use crate::csv::{CsvLogWriter, read_log_csv, read_log_reader};
pub use error::{OutputError, OutputResult};
pub use observer::{StationOutputObserver, run_and_export};
pub use row::LogRow;
pub use writer::LogWriter;
