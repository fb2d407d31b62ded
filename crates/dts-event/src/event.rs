//! Event types: `EventKind` and `Event`.
//!
//! The three stages of a car's visit form a closed set, so they are an enum
//! rather than a trait object.  The engine dispatches on [`EventKind`] with an
//! exhaustive `match`; adding a stage is a compile error everywhere it is not
//! handled.

use std::fmt;

use dts_core::{CarId, SimTime};

use crate::TimeOverflow;

// ── EventKind ─────────────────────────────────────────────────────────────────

/// Which stage of a car's visit an event represents.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EventKind {
    /// The car reaches the station and asks to join the queue.
    Arrival,
    /// The preregistration check is done; testing of the occupants begins.
    Testing,
    /// Testing is done; the car leaves and frees its queue slot.
    Leaving,
}

impl EventKind {
    /// The stage that follows `self`, or `None` after `Leaving`.
    pub fn successor(self) -> Option<EventKind> {
        match self {
            EventKind::Arrival => Some(EventKind::Testing),
            EventKind::Testing => Some(EventKind::Leaving),
            EventKind::Leaving => None,
        }
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            EventKind::Arrival => "arrival",
            EventKind::Testing => "testing",
            EventKind::Leaving => "leaving",
        };
        f.write_str(s)
    }
}

// ── Event ─────────────────────────────────────────────────────────────────────

/// One scheduled stage of one car's visit.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Event {
    /// When the event fires.
    pub at:         SimTime,
    pub car:        CarId,
    /// Occupants of the car; fixed for the whole visit.
    pub num_people: u32,
    pub kind:       EventKind,
}

impl Event {
    pub fn arrival(at: SimTime, car: CarId, num_people: u32) -> Self {
        Self { at, car, num_people, kind: EventKind::Arrival }
    }

    /// The next stage of the same car, fired `delay_secs` after `self`.
    ///
    /// Returns `Ok(None)` for a `Leaving` event.
    pub fn follow_up(&self, delay_secs: u64) -> Result<Option<Event>, TimeOverflow> {
        let Some(kind) = self.kind.successor() else {
            return Ok(None);
        };
        let at = self
            .at
            .checked_offset(delay_secs)
            .ok_or(TimeOverflow { car: self.car, at: self.at, delay_secs })?;
        Ok(Some(Event { at, car: self.car, num_people: self.num_people, kind }))
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} @ {} ({} people)", self.car, self.kind, self.at, self.num_people)
    }
}
