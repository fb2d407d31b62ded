//! Run counters.

use std::fmt;

/// Counters mutated during event processing.  All are monotonically
/// non-decreasing over a run.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Statistics {
    /// Every car that reached the station, admitted or not.
    pub total_cars:    u64,
    /// Cars that completed testing and left.
    pub tested_cars:   u64,
    /// Occupants of the tested cars.
    pub tested_people: u64,
    /// Cars turned away because the station queue was full.
    pub rejected_cars: u64,
}

impl Statistics {
    /// Cars admitted but not yet gone.  Zero once a run has finished.
    pub fn in_station(&self) -> u64 {
        self.total_cars - self.tested_cars - self.rejected_cars
    }

    /// `true` when every car was either tested or rejected.
    pub fn is_balanced(&self) -> bool {
        self.in_station() == 0
    }

    /// Mean occupants per tested car, `0.0` if none was tested.
    pub fn avg_people_per_car(&self) -> f64 {
        if self.tested_cars == 0 {
            return 0.0;
        }
        self.tested_people as f64 / self.tested_cars as f64
    }

    /// Fraction of arriving cars that were rejected, `0.0` if none arrived.
    pub fn rejection_rate(&self) -> f64 {
        if self.total_cars == 0 {
            return 0.0;
        }
        self.rejected_cars as f64 / self.total_cars as f64
    }
}

impl fmt::Display for Statistics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "total={} tested={} people={} rejected={}",
            self.total_cars, self.tested_cars, self.tested_people, self.rejected_cars
        )
    }
}
