//! `StationQueue`: cars currently waiting for or undergoing a test.
//!
//! The queue is the station's only capacity constraint: a car holds its slot
//! from admission until it leaves.  Departures remove the car by identity
//! rather than popping the front.  With the current delays cars leave in
//! arrival order anyway, but the queue does not rely on it.

use std::collections::VecDeque;

use dts_core::CarId;

use crate::{StationError, StationResult};

/// Outcome of an admission request.  Both variants carry the queue length
/// after the decision.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Admission {
    Admitted { cars_in_system: usize },
    Rejected { cars_in_system: usize },
}

impl Admission {
    pub fn is_admitted(self) -> bool {
        matches!(self, Admission::Admitted { .. })
    }

    pub fn cars_in_system(self) -> usize {
        match self {
            Admission::Admitted { cars_in_system } | Admission::Rejected { cars_in_system } => {
                cars_in_system
            }
        }
    }
}

/// Bounded FIFO of car identifiers.
///
/// Invariant: `len() <= limit()` at all times.
#[derive(Clone, Debug)]
pub struct StationQueue {
    cars:  VecDeque<CarId>,
    limit: usize,
}

impl StationQueue {
    pub fn new(limit: usize) -> Self {
        Self { cars: VecDeque::with_capacity(limit), limit }
    }

    /// Admit `car` if a slot is free, otherwise reject it.
    ///
    /// Rejection is a normal outcome, not an error; the only error is
    /// admitting a car that already holds a slot.
    pub fn admit(&mut self, car: CarId) -> StationResult<Admission> {
        if self.is_full() {
            return Ok(Admission::Rejected { cars_in_system: self.cars.len() });
        }
        if self.contains(car) {
            return Err(StationError::AlreadyInStation(car));
        }
        self.cars.push_back(car);
        Ok(Admission::Admitted { cars_in_system: self.cars.len() })
    }

    /// Remove `car` and return the queue length after its departure.
    pub fn depart(&mut self, car: CarId) -> StationResult<usize> {
        let pos = self
            .cars
            .iter()
            .position(|&c| c == car)
            .ok_or(StationError::CarNotInStation(car))?;
        self.cars.remove(pos);
        Ok(self.cars.len())
    }

    pub fn contains(&self, car: CarId) -> bool {
        self.cars.contains(&car)
    }

    /// The car that has been in the station longest.
    pub fn front(&self) -> Option<CarId> {
        self.cars.front().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = CarId> + '_ {
        self.cars.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.cars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cars.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.cars.len() >= self.limit
    }

    pub fn limit(&self) -> usize {
        self.limit
    }
}
