//! The `Sim` struct and its event loop.

use dts_core::{CarId, CoreError, EventSeq, SimClock, SimRng, SimTime, StationConfig};
use dts_event::{Event, EventQueue, StationQueue};
use log::{info, trace};

use crate::{EventLog, SimObserver, SimResult, StationState, Statistics, process_event};

// ── SimOutcome ────────────────────────────────────────────────────────────────

/// Everything a finished run hands to the analysis side.
#[derive(Clone, Debug)]
pub struct SimOutcome {
    pub stats:            Statistics,
    pub log:              EventLog,
    /// Timestamp of the last processed event.
    pub final_time:       SimTime,
    /// Seed the run drew from; reuse it to reproduce the run.
    pub seed:             u64,
    pub events_processed: u64,
}

// ── Sim ───────────────────────────────────────────────────────────────────────

/// One drive-in test station run.
///
/// `Sim` owns the future event list, the station queue, the counters and the
/// log for the lifetime of the run.  [`run`][Self::run] consumes it, so every
/// run starts from a freshly built engine.
///
/// Create via [`SimBuilder`][crate::SimBuilder].  The configuration is fixed
/// once built; read it back through [`config`][Self::config].
///
/// ```compile_fail
/// use dts_core::StationConfig;
/// use dts_sim::SimBuilder;
///
/// let mut sim = SimBuilder::new(StationConfig::default()).seed(1).build().unwrap();
/// sim.config.max_queue_size = 0;
/// ```
pub struct Sim {
    /// Validated by the builder and never changed afterwards.
    pub(crate) config: StationConfig,

    /// Advanced only to the timestamp of the popped event.
    pub(crate) clock: SimClock,

    /// Future event list.
    pub(crate) events: EventQueue,

    /// Station queue, counters and log.
    pub(crate) state: StationState,

    pub(crate) seed:      u64,
    pub(crate) rng:       SimRng,
    pub(crate) next_car:  CarId,
    pub(crate) processed: u64,
}

impl Sim {
    pub(crate) fn new(config: StationConfig, seed: u64) -> Self {
        let state = StationState::new(config.max_queue_size);
        Self {
            config,
            clock: SimClock::new(),
            events: EventQueue::new(),
            state,
            seed,
            rng: SimRng::new(seed),
            next_car: CarId::FIRST,
            processed: 0,
        }
    }

    // ── Scheduling ────────────────────────────────────────────────────────

    /// Insert an event into the future event list unchecked.
    pub(crate) fn schedule(&mut self, event: Event) -> EventSeq {
        self.events.push(event)
    }

    /// Schedule the arrival of a new car and return its identifier.
    ///
    /// The car must carry at least one person, must not arrive before the
    /// current time, and its whole visit must end within simulation time.
    pub fn schedule_arrival(&mut self, at: SimTime, num_people: u32) -> SimResult<CarId> {
        if num_people == 0 {
            return Err(CoreError::Config(format!("arrival at {at} carries no people")).into());
        }
        if at < self.clock.now() {
            return Err(CoreError::Config(format!(
                "arrival at {at} is before the current time {}",
                self.clock.now()
            ))
            .into());
        }
        if self.config.visit_secs(num_people).and_then(|v| at.checked_offset(v)).is_none() {
            return Err(CoreError::Config(format!(
                "visit of {num_people} people arriving at {at} ends past the end of simulation time"
            ))
            .into());
        }

        let car = self.next_car;
        self.next_car = car.next();
        self.schedule(Event::arrival(at, car, num_people));
        Ok(car)
    }

    /// Generate the whole arrival schedule.
    ///
    /// The first car arrives at t = 0.  For each car the passenger count is
    /// drawn first, then the gap to the next car; generation stops once the
    /// next arrival time exceeds `simulation_duration_secs`.  Returns the
    /// number of arrivals scheduled.
    pub fn schedule_arrivals(&mut self) -> SimResult<usize> {
        let horizon = SimTime(self.config.simulation_duration_secs);
        let mut at = SimTime::ZERO;
        let mut count = 0;
        while at <= horizon {
            let num_people = self.rng.sample(&self.config.people_per_car);
            self.schedule_arrival(at, num_people)?;
            count += 1;
            let gap = self.rng.sample(&self.config.arrival_interval_secs);
            match at.checked_offset(gap) {
                Some(next) => at = next,
                None => break,
            }
        }
        Ok(count)
    }

    // ── Running ───────────────────────────────────────────────────────────

    /// Process the earliest pending event.
    ///
    /// Returns `Ok(false)` once the event list is empty.
    pub fn step<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<bool> {
        let Some(event) = self.events.pop() else {
            return Ok(false);
        };
        self.clock.advance_to(event.at);
        trace!("{} processing {event}", self.clock);

        if let Some(next) = process_event(event, &mut self.state, &self.config, &mut self.rng)? {
            self.events.push(next);
        }
        self.processed += 1;

        if let Some(entry) = self.state.log.last() {
            observer.on_event(&event, entry, &self.state.station);
        }
        Ok(true)
    }

    /// Run until the event list is empty and return the results.
    pub fn run<O: SimObserver>(mut self, observer: &mut O) -> SimResult<SimOutcome> {
        info!(
            "run start: {} events pending, queue limit {}, seed {}",
            self.events.len(),
            self.config.max_queue_size,
            self.seed
        );
        observer.on_run_start(&self.config, self.events.len());

        while self.step(observer)? {}

        let final_time = self.clock.now();
        observer.on_sim_end(&self.state.stats, &self.state.log, final_time);
        info!("run end at {}: {}", self.clock, self.state.stats);

        Ok(SimOutcome {
            stats: self.state.stats,
            log: self.state.log,
            final_time,
            seed: self.seed,
            events_processed: self.processed,
        })
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    pub fn config(&self) -> &StationConfig {
        &self.config
    }

    pub fn now(&self) -> SimTime {
        self.clock.now()
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn station(&self) -> &StationQueue {
        &self.state.station
    }

    pub fn stats(&self) -> &Statistics {
        &self.state.stats
    }

    pub fn log(&self) -> &EventLog {
        &self.state.log
    }

    /// Number of events still queued.
    pub fn pending(&self) -> usize {
        self.events.len()
    }

    /// Number of events processed so far.
    pub fn processed(&self) -> u64 {
        self.processed
    }
}
