//! Simulation time model.
//!
//! # Design
//!
//! Time is a count of whole simulated seconds since the start of the run,
//! wrapped in `SimTime`.  Using an integer as the canonical unit keeps all
//! delay arithmetic exact and comparisons O(1).
//!
//! `SimClock` holds "now".  It only ever moves forward, and only to the
//! timestamp of the event the engine just popped.

use std::fmt;

// ── SimTime ───────────────────────────────────────────────────────────────────

/// An absolute simulation timestamp in seconds.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimTime(pub u64);

impl SimTime {
    pub const ZERO: SimTime = SimTime(0);

    /// Return the time `secs` seconds after `self`.
    #[inline]
    pub fn offset(self, secs: u64) -> SimTime {
        SimTime(self.0 + secs)
    }

    /// `self + secs`, or `None` if the sum does not fit.
    #[inline]
    pub fn checked_offset(self, secs: u64) -> Option<SimTime> {
        self.0.checked_add(secs).map(SimTime)
    }

    /// Seconds elapsed from `earlier` to `self`.
    ///
    /// # Panics
    /// Panics in debug mode if `earlier > self`.
    #[inline]
    pub fn since(self, earlier: SimTime) -> u64 {
        self.0 - earlier.0
    }

    /// Split into (hours, minutes, seconds) for human-readable output.
    pub fn hms(self) -> (u64, u32, u32) {
        let hours = self.0 / 3_600;
        let minutes = ((self.0 % 3_600) / 60) as u32;
        let seconds = (self.0 % 60) as u32;
        (hours, minutes, seconds)
    }
}

impl std::ops::Add<u64> for SimTime {
    type Output = SimTime;
    #[inline]
    fn add(self, rhs: u64) -> SimTime {
        SimTime(self.0 + rhs)
    }
}

impl std::ops::Sub for SimTime {
    type Output = u64;
    #[inline]
    fn sub(self, rhs: SimTime) -> u64 {
        self.0 - rhs.0
    }
}

impl fmt::Display for SimTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}s", self.0)
    }
}

// ── SimClock ──────────────────────────────────────────────────────────────────

/// The logical clock of one run.
#[derive(Clone, Debug, Default)]
pub struct SimClock {
    now: SimTime,
}

impl SimClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current simulation time.
    #[inline]
    pub fn now(&self) -> SimTime {
        self.now
    }

    /// Move the clock to `t`.
    ///
    /// # Panics
    /// Panics in debug mode if `t` is earlier than the current time.
    #[inline]
    pub fn advance_to(&mut self, t: SimTime) {
        debug_assert!(t >= self.now, "clock moved backwards: {} -> {}", self.now, t);
        self.now = t;
    }
}

impl fmt::Display for SimClock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (h, m, s) = self.now.hms();
        write!(f, "{} ({:02}:{:02}:{:02})", self.now, h, m, s)
    }
}
