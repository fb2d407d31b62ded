//! Station configuration.
//!
//! One immutable `StationConfig` is built per run and handed to the engine.
//! Nothing reads configuration from global state, so several engines with
//! different parameters can run side by side (the capacity sweep does).

use crate::{CoreError, CoreResult};

// ── UniformRange ──────────────────────────────────────────────────────────────

/// Closed interval `[min, max]` sampled uniformly by [`SimRng`][crate::SimRng].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UniformRange<T> {
    pub min: T,
    pub max: T,
}

impl<T: PartialOrd + Copy> UniformRange<T> {
    pub const fn new(min: T, max: T) -> Self {
        Self { min, max }
    }

    /// A range that always samples `value`.
    pub const fn fixed(value: T) -> Self {
        Self { min: value, max: value }
    }

    pub fn contains(&self, value: T) -> bool {
        self.min <= value && value <= self.max
    }

    fn check(&self, what: &str) -> CoreResult<()> {
        if self.max < self.min {
            return Err(CoreError::Config(format!("{what}: max is less than min")));
        }
        Ok(())
    }
}

// ── StationConfig ─────────────────────────────────────────────────────────────

/// Parameters of one drive-in test station run.
///
/// All durations are simulated seconds.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct StationConfig {
    /// Arrivals are generated at t = 0 and then while the next arrival time
    /// does not exceed this value.  Default: 7200 (two hours).
    pub simulation_duration_secs: u64,

    /// Gap between consecutive arrivals.  Default: 30–120.
    pub arrival_interval_secs: UniformRange<u64>,

    /// Preregistration check between admission and testing.  Default: 60–120.
    pub check_duration_secs: UniformRange<u64>,

    /// Fixed test time per occupant.  Default: 240.
    pub test_duration_per_person_secs: u64,

    /// Capacity of the station queue.  Default: 10.
    pub max_queue_size: usize,

    /// Occupants per car.  Default: 1–5.
    pub people_per_car: UniformRange<u32>,

    /// Print the event log table and the counters when the run ends.
    pub log_to_console: bool,

    /// Master RNG seed.  `None` draws a fresh seed per run.
    pub seed: Option<u64>,
}

impl Default for StationConfig {
    fn default() -> Self {
        Self {
            simulation_duration_secs:      7_200,
            arrival_interval_secs:         UniformRange::new(30, 120),
            check_duration_secs:           UniformRange::new(60, 120),
            test_duration_per_person_secs: 240,
            max_queue_size:                10,
            people_per_car:                UniformRange::new(1, 5),
            log_to_console:                false,
            seed:                          None,
        }
    }
}

impl StationConfig {
    /// Reject parameter sets that would produce a nonsensical schedule.
    ///
    /// A zero arrival gap would generate arrivals at the same instant forever,
    /// so the gap must be at least one second.  Check and test durations may
    /// be zero.  Every timestamp a generated run can reach must fit in a
    /// `SimTime`.
    pub fn validate(&self) -> CoreResult<()> {
        self.arrival_interval_secs.check("arrival_interval_secs")?;
        self.check_duration_secs.check("check_duration_secs")?;
        self.people_per_car.check("people_per_car")?;

        if self.arrival_interval_secs.min == 0 {
            return Err(CoreError::Config(
                "arrival_interval_secs: minimum gap must be at least 1 second".into(),
            ));
        }
        if self.people_per_car.min == 0 {
            return Err(CoreError::Config(
                "people_per_car: every car carries at least one person".into(),
            ));
        }
        if self.max_queue_size == 0 {
            return Err(CoreError::Config("max_queue_size must be at least 1".into()));
        }

        let visit = self.visit_secs(self.people_per_car.max).ok_or_else(|| {
            CoreError::Config("check plus test duration of the fullest car overflows".into())
        })?;
        let reach = self.arrival_interval_secs.max.max(visit);
        if self.simulation_duration_secs.checked_add(reach).is_none() {
            return Err(CoreError::Config(
                "simulation_duration_secs: last event time overflows".into(),
            ));
        }
        Ok(())
    }

    /// Test duration for a car carrying `num_people` occupants, saturating at
    /// `u64::MAX`.
    #[inline]
    pub fn test_duration_secs(&self, num_people: u32) -> u64 {
        u64::from(num_people).saturating_mul(self.test_duration_per_person_secs)
    }

    /// Longest possible stay of a car carrying `num_people`: the longest check
    /// plus its test.  `None` on overflow.
    pub fn visit_secs(&self, num_people: u32) -> Option<u64> {
        u64::from(num_people)
            .checked_mul(self.test_duration_per_person_secs)?
            .checked_add(self.check_duration_secs.max)
    }

    /// Copy of `self` with a different queue capacity.
    pub fn with_queue_size(&self, max_queue_size: usize) -> Self {
        Self { max_queue_size, ..self.clone() }
    }

    /// The configured seed, or a freshly drawn one.
    pub fn resolve_seed(&self) -> u64 {
        self.seed.unwrap_or_else(rand::random)
    }
}
