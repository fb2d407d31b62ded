//! Queue-capacity sweep.
//!
//! Runs the same station with a range of queue limits and reports how the
//! counters change.  Every run uses the same seed, so the arrival schedule is
//! identical across limits and the differences come from capacity alone.

use dts_core::StationConfig;
use log::{info, warn};

use crate::{NoopObserver, SimBuilder, SimError, SimResult, Statistics};

/// Result of one run of a sweep.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct SweepPoint {
    pub queue_limit: usize,
    pub stats:       Statistics,
}

/// Run one fresh engine per queue limit in `start..=end` (by `step`).
///
/// Points come back ordered by queue limit.  With the `parallel` feature the
/// runs execute on Rayon's pool; each engine stays single-threaded.
pub fn capacity_sweep(
    base:  &StationConfig,
    start: usize,
    end:   usize,
    step:  usize,
) -> SimResult<Vec<SweepPoint>> {
    if step == 0 {
        return Err(SimError::Sweep("step must be at least 1".into()));
    }
    if start > end {
        return Err(SimError::Sweep(format!("start {start} is greater than end {end}")));
    }

    let seed = base.resolve_seed();
    let limits: Vec<usize> = (start..=end).step_by(step).collect();
    info!("capacity sweep over {} limits ({start}..={end} step {step}), seed {seed}", limits.len());

    #[cfg(not(feature = "parallel"))]
    let points = limits
        .iter()
        .map(|&limit| run_point(base, limit, seed))
        .collect::<SimResult<Vec<_>>>()?;

    #[cfg(feature = "parallel")]
    let points = {
        use rayon::prelude::*;

        limits
            .par_iter()
            .map(|&limit| run_point(base, limit, seed))
            .collect::<SimResult<Vec<_>>>()?
    };

    Ok(points)
}

fn run_point(base: &StationConfig, queue_limit: usize, seed: u64) -> SimResult<SweepPoint> {
    let outcome = SimBuilder::new(base.with_queue_size(queue_limit))
        .seed(seed)
        .build()?
        .run(&mut NoopObserver)?;

    if outcome.stats.rejection_rate() > 0.5 {
        warn!(
            "queue limit {queue_limit}: {} of {} cars rejected",
            outcome.stats.rejected_cars, outcome.stats.total_cars
        );
    }
    Ok(SweepPoint { queue_limit, stats: outcome.stats })
}
