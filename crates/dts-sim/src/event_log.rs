//! The event log: an append-only record of what happened at the station.
//!
//! One [`LogEntry`] is recorded per processed event.  A rejected arrival
//! records `Rejecting` instead of `Arriving`.  Entries are in processing
//! order, which is non-decreasing in time.

use std::fmt;
use std::str::FromStr;

use dts_core::{CarId, SimTime};
use thiserror::Error;

// ── EntryKind ─────────────────────────────────────────────────────────────────

/// The `event_type` column of the log.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum EntryKind {
    Arriving,
    Testing,
    Leaving,
    Rejecting,
}

impl EntryKind {
    pub const ALL: [EntryKind; 4] =
        [EntryKind::Arriving, EntryKind::Testing, EntryKind::Leaving, EntryKind::Rejecting];

    pub fn as_str(self) -> &'static str {
        match self {
            EntryKind::Arriving  => "Arriving",
            EntryKind::Testing   => "Testing",
            EntryKind::Leaving   => "Leaving",
            EntryKind::Rejecting => "Rejecting",
        }
    }
}

impl fmt::Display for EntryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown event type {0:?}")]
pub struct UnknownEntryKind(pub String);

impl FromStr for EntryKind {
    type Err = UnknownEntryKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        EntryKind::ALL
            .into_iter()
            .find(|k| k.as_str() == s)
            .ok_or_else(|| UnknownEntryKind(s.to_owned()))
    }
}

// ── LogEntry ──────────────────────────────────────────────────────────────────

/// One row of the event log.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct LogEntry {
    pub at:             SimTime,
    pub car:            CarId,
    pub kind:           EntryKind,
    /// Station queue length right after the event took effect.  For a
    /// rejection this is the length of the full queue.
    pub cars_in_system: usize,
}

// ── EventLog ──────────────────────────────────────────────────────────────────

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EventLog {
    entries: Vec<LogEntry>,
}

impl EventLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entry.
    pub fn record(&mut self, at: SimTime, car: CarId, kind: EntryKind, cars_in_system: usize) {
        self.entries.push(LogEntry { at, car, kind, cars_in_system });
    }

    pub fn entries(&self) -> &[LogEntry] {
        &self.entries
    }

    pub fn iter(&self) -> std::slice::Iter<'_, LogEntry> {
        self.entries.iter()
    }

    pub fn last(&self) -> Option<&LogEntry> {
        self.entries.last()
    }

    /// Entries of one car, in order.
    pub fn for_car(&self, car: CarId) -> impl Iterator<Item = &LogEntry> + '_ {
        self.entries.iter().filter(move |e| e.car == car)
    }

    /// Number of entries of the given kind.
    pub fn count(&self, kind: EntryKind) -> usize {
        self.entries.iter().filter(|e| e.kind == kind).count()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn into_entries(self) -> Vec<LogEntry> {
        self.entries
    }
}

impl From<Vec<LogEntry>> for EventLog {
    fn from(entries: Vec<LogEntry>) -> Self {
        Self { entries }
    }
}

impl<'a> IntoIterator for &'a EventLog {
    type Item = &'a LogEntry;
    type IntoIter = std::slice::Iter<'a, LogEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
