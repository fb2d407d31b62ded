//! Event processing: the state transitions of a car's visit.

use dts_core::{SimRng, StationConfig};
use dts_event::{Admission, Event, EventKind, StationQueue};
use log::debug;

use crate::{EntryKind, EventLog, SimResult, Statistics};

/// The mutable part of the engine that events act on.
#[derive(Clone, Debug)]
pub struct StationState {
    pub station: StationQueue,
    pub stats:   Statistics,
    pub log:     EventLog,
}

impl StationState {
    pub fn new(queue_limit: usize) -> Self {
        Self {
            station: StationQueue::new(queue_limit),
            stats:   Statistics::default(),
            log:     EventLog::new(),
        }
    }
}

/// Apply `event` to `state`, record its log entry and return the follow-up
/// event, if any.
///
/// Every successor fires no earlier than `event`: delays are unsigned, and a
/// successor past the end of simulation time is a
/// [`SimError::TimeOverflow`][crate::SimError::TimeOverflow].
pub fn process_event(
    event:  Event,
    state:  &mut StationState,
    config: &StationConfig,
    rng:    &mut SimRng,
) -> SimResult<Option<Event>> {
    match event.kind {
        EventKind::Arrival => on_arrival(event, state, config, rng),
        EventKind::Testing => on_testing(event, state, config),
        EventKind::Leaving => on_leaving(event, state).map(|()| None),
    }
}

fn on_arrival(
    event:  Event,
    state:  &mut StationState,
    config: &StationConfig,
    rng:    &mut SimRng,
) -> SimResult<Option<Event>> {
    state.stats.total_cars += 1;

    match state.station.admit(event.car)? {
        Admission::Rejected { cars_in_system } => {
            state.stats.rejected_cars += 1;
            state.log.record(event.at, event.car, EntryKind::Rejecting, cars_in_system);
            debug!("{} rejected at {}: station full ({cars_in_system})", event.car, event.at);
            Ok(None)
        }
        Admission::Admitted { cars_in_system } => {
            state.log.record(event.at, event.car, EntryKind::Arriving, cars_in_system);
            let check_delay = rng.sample(&config.check_duration_secs);
            debug!(
                "{} admitted at {} ({cars_in_system} in station), check {check_delay}s",
                event.car, event.at
            );
            Ok(event.follow_up(check_delay)?)
        }
    }
}

fn on_testing(
    event:  Event,
    state:  &mut StationState,
    config: &StationConfig,
) -> SimResult<Option<Event>> {
    state.log.record(event.at, event.car, EntryKind::Testing, state.station.len());
    Ok(event.follow_up(config.test_duration_secs(event.num_people))?)
}

fn on_leaving(event: Event, state: &mut StationState) -> SimResult<()> {
    let cars_in_system = state.station.depart(event.car)?;
    state.stats.tested_cars += 1;
    state.stats.tested_people += u64::from(event.num_people);
    state.log.record(event.at, event.car, EntryKind::Leaving, cars_in_system);
    debug!("{} left at {} ({cars_in_system} in station)", event.car, event.at);
    Ok(())
}
