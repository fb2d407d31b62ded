//! Simulation observer trait for progress reporting and data collection.

use dts_core::{SimTime, StationConfig};
use dts_event::{Event, StationQueue};

use crate::{EventLog, LogEntry, Statistics};

/// Callbacks invoked by [`Sim::run`][crate::Sim::run] at key points of the
/// event loop.
///
/// All methods have default no-op implementations so implementors only need to
/// override what they care about.
///
/// # Example: rejection counter
///
/// ```rust,ignore
/// struct Rejections(usize);
///
/// impl SimObserver for Rejections {
///     fn on_event(&mut self, _event: &Event, entry: &LogEntry, _station: &StationQueue) {
///         if entry.kind == EntryKind::Rejecting {
///             self.0 += 1;
///         }
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called once before the first event is processed.
    ///
    /// `pending` is the number of events already queued (the whole arrival
    /// schedule for a generated run).
    fn on_run_start(&mut self, _config: &StationConfig, _pending: usize) {}

    /// Called after each processed event with the entry it logged and the
    /// station queue as the event left it.
    fn on_event(&mut self, _event: &Event, _entry: &LogEntry, _station: &StationQueue) {}

    /// Called once after the event queue has drained.
    fn on_sim_end(&mut self, _stats: &Statistics, _log: &EventLog, _final_time: SimTime) {}
}

/// A [`SimObserver`] that does nothing.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}
