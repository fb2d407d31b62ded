use dts_core::CoreError;
use dts_event::{StationError, TimeOverflow};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error(transparent)]
    Config(#[from] CoreError),

    #[error("station invariant violated: {0}")]
    Station(#[from] StationError),

    #[error(transparent)]
    TimeOverflow(#[from] TimeOverflow),

    #[error("capacity sweep: {0}")]
    Sweep(String),
}

pub type SimResult<T> = Result<T, SimError>;
