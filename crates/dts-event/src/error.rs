use dts_core::{CarId, SimTime};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum StationError {
    #[error("{0} is not in the station queue")]
    CarNotInStation(CarId),

    #[error("{0} is already in the station queue")]
    AlreadyInStation(CarId),
}

pub type StationResult<T> = Result<T, StationError>;

/// A follow-up event whose timestamp would not fit in a [`SimTime`].
#[derive(Debug, Error, PartialEq, Eq)]
#[error("{car}: {at} + {delay_secs}s is past the end of simulation time")]
pub struct TimeOverflow {
    pub car:        CarId,
    pub at:         SimTime,
    pub delay_secs: u64,
}
