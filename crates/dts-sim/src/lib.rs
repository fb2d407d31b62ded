//! `dts-sim` — the discrete-event loop of the drive-in test station.
//!
//! # Event loop
//!
//! ```text
//! build:  generate every Arrival up front (t = 0, then gap after gap while
//!         t <= simulation_duration) into the EventQueue
//! run:    while let Some(event) = queue.pop():
//!           clock.advance_to(event.at)
//!           match event.kind:
//!             Arrival → admit or reject; on admit schedule Testing (+check)
//!             Testing → schedule Leaving (+people × per-person time)
//!             Leaving → free the car's slot, count it as tested
//!           one LogEntry per event → observer.on_event
//!         observer.on_sim_end(stats, log)
//! ```
//!
//! # Cargo features
//!
//! | Feature    | Effect                                                  |
//! |------------|---------------------------------------------------------|
//! | `parallel` | Capacity sweep runs its engines on Rayon's thread pool. |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use dts_core::StationConfig;
//! use dts_sim::{NoopObserver, SimBuilder};
//!
//! let sim = SimBuilder::new(StationConfig::default()).seed(42).build()?;
//! let outcome = sim.run(&mut NoopObserver)?;
//! assert!(outcome.stats.is_balanced());
//! ```

pub mod builder;
pub mod error;
pub mod event_log;
pub mod observer;
pub mod process;
pub mod sim;
pub mod stats;
pub mod sweep;


pub use builder::SimBuilder;
pub use error::{SimError, SimResult};
pub use event_log::{EntryKind, EventLog, LogEntry, UnknownEntryKind};
pub use observer::{NoopObserver, SimObserver};
pub use process::{StationState, process_event};
pub use sim::{Sim, SimOutcome};
pub use stats::Statistics;
pub use sweep::{SweepPoint, capacity_sweep};
