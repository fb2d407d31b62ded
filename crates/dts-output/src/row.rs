//! The CSV record of one log entry.

use dts_core::{CarId, SimTime};
use dts_sim::LogEntry;
use serde::{Deserialize, Serialize};

use crate::OutputError;

/// Column order of the event log file.
pub const HEADER: [&str; 4] = ["timestamp", "car_id", "event_type", "cars_in_system"];

/// One row of `event_log.csv`, with plain column types.  Field order is the
/// column order of [`HEADER`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogRow {
    pub timestamp:      u64,
    pub car_id:         u32,
    pub event_type:     String,
    pub cars_in_system: usize,
}

impl From<&LogEntry> for LogRow {
    fn from(e: &LogEntry) -> Self {
        Self {
            timestamp:      e.at.0,
            car_id:         e.car.0,
            event_type:     e.kind.as_str().to_owned(),
            cars_in_system: e.cars_in_system,
        }
    }
}

impl TryFrom<LogRow> for LogEntry {
    type Error = OutputError;

    fn try_from(row: LogRow) -> Result<Self, Self::Error> {
        Ok(LogEntry {
            at:             SimTime(row.timestamp),
            car:            CarId(row.car_id),
            kind:           row.event_type.parse()?,
            cars_in_system: row.cars_in_system,
        })
    }
}
