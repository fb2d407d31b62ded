//! Fluent builder for constructing a [`Sim`].

use dts_core::{SimTime, StationConfig};

use crate::{Sim, SimResult};

/// Fluent builder for [`Sim`].
///
/// # Optional inputs (have defaults)
///
/// | Method          | Default                                          |
/// |-----------------|--------------------------------------------------|
/// | `.seed(s)`      | `config.seed`, else a freshly drawn seed         |
/// | `.arrivals(v)`  | Random schedule generated from the config        |
///
/// # Example
///
/// ```rust,ignore
/// let sim = SimBuilder::new(config)
///     .seed(7)
///     .arrivals(vec![(SimTime(0), 2), (SimTime(5), 1)])
///     .build()?;
/// let outcome = sim.run(&mut NoopObserver)?;
/// ```
pub struct SimBuilder {
    config:   StationConfig,
    seed:     Option<u64>,
    arrivals: Option<Vec<(SimTime, u32)>>,
}

impl SimBuilder {
    pub fn new(config: StationConfig) -> Self {
        Self { config, seed: None, arrivals: None }
    }

    /// Fix the RNG seed, overriding `config.seed`.
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Replace the generated arrival schedule with explicit
    /// `(time, num_people)` pairs.
    ///
    /// Car identifiers are assigned in the order given, starting at 1.  The
    /// check delays are still drawn from the config, so pin them with a
    /// fixed range when a test needs exact times.
    pub fn arrivals(mut self, arrivals: Vec<(SimTime, u32)>) -> Self {
        self.arrivals = Some(arrivals);
        self
    }

    /// Validate the configuration, schedule the arrivals and return a
    /// ready-to-run [`Sim`].
    pub fn build(self) -> SimResult<Sim> {
        self.config.validate()?;

        let seed = self.seed.unwrap_or_else(|| self.config.resolve_seed());
        let mut sim = Sim::new(self.config, seed);

        match self.arrivals {
            Some(arrivals) => {
                for (at, num_people) in arrivals {
                    sim.schedule_arrival(at, num_people)?;
                }
            }
            None => {
                sim.schedule_arrivals()?;
            }
        }

        Ok(sim)
    }
}
