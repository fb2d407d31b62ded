//! `dts-event` — car lifecycle events, event queue and station queue.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                  |
//! |-------------|-----------------------------------------------------------|
//! | [`event`]   | `Event`, `EventKind`                                      |
//! | [`queue`]   | `EventQueue` (min-heap keyed by `(SimTime, EventSeq)`)    |
//! | [`station`] | `StationQueue`, `Admission`                               |
//! | [`error`]   | `StationError`, `StationResult<T>`, `TimeOverflow`        |
//!
//! # Lifecycle (summary)
//!
//! ```text
//! Arrival ──admitted──▶ Testing ──▶ Leaving
//!    │
//!    └──queue full──▶ (rejected, lifecycle ends)
//! ```
//!
//! Each stage is one `Event` in the `EventQueue`.  Processing an event is the
//! engine's job (`dts-sim`); this crate only defines the data and the two
//! queues the engine mutates.

pub mod error;
pub mod event;
pub mod queue;
pub mod station;


pub use error::{StationError, StationResult, TimeOverflow};
pub use event::{Event, EventKind};
pub use queue::EventQueue;
pub use station::{Admission, StationQueue};
