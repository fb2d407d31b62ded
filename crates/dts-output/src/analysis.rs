//! Result analysis over a finished run's log and counters.
//!
//! Everything here is derived from the [`EventLog`] and [`Statistics`] a run
//! hands back; nothing reaches into the engine.

use std::collections::BTreeMap;
use std::io::{self, Write};

use dts_core::{CarId, SimTime};
use dts_sim::{EntryKind, EventLog, Statistics};

/// Width of one load bin in seconds (five minutes).
pub const INTERVAL_SECS: u64 = 300;

/// Bins in the dwell-time histogram of the text report.
const REPORT_BINS: usize = 20;

/// Widest bar of the text charts, in characters.
const BAR_WIDTH: usize = 40;

// ── Records ───────────────────────────────────────────────────────────────────

/// Mean station load over one five-minute interval.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct IntervalLoad {
    /// Minute at which the interval starts (0, 5, 10, …).
    pub start_minute: u64,
    /// Mean `cars_in_system` over the entries logged in the interval.
    pub mean_cars:    f64,
    /// Entries that fell into the interval.
    pub samples:      usize,
}

/// Time one car spent at the station.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct DwellTime {
    pub car:     CarId,
    pub arrived: SimTime,
    pub left:    SimTime,
}

impl DwellTime {
    pub fn secs(&self) -> u64 {
        self.left - self.arrived
    }
}

/// Equal-width histogram over `[lo, lo + width * counts.len()]`.
///
/// Every bin is half-open except the last, which also holds the maximum.
#[derive(Clone, Debug, PartialEq)]
pub struct Histogram {
    pub lo:     f64,
    pub width:  f64,
    pub counts: Vec<usize>,
}

impl Histogram {
    fn build(values: &[u64], bins: usize) -> Option<Self> {
        let min = *values.iter().min()? as f64;
        let max = *values.iter().max()? as f64;
        if bins == 0 {
            return None;
        }
        // A single distinct value gets a unit-wide range centred on it.
        let (lo, hi) = if min == max { (min - 0.5, max + 0.5) } else { (min, max) };
        let width = (hi - lo) / bins as f64;

        let mut counts = vec![0; bins];
        for &v in values {
            let idx = ((v as f64 - lo) / width) as usize;
            counts[idx.min(bins - 1)] += 1;
        }
        Some(Self { lo, width, counts })
    }

    /// `(low edge, high edge, count)` per bin.
    pub fn bins(&self) -> impl Iterator<Item = (f64, f64, usize)> + '_ {
        self.counts.iter().enumerate().map(|(i, &c)| {
            let low = self.lo + self.width * i as f64;
            (low, low + self.width, c)
        })
    }

    pub fn total(&self) -> usize {
        self.counts.iter().sum()
    }
}

// ── Analysis ──────────────────────────────────────────────────────────────────

/// Headline figures and series computed from one run.
#[derive(Clone, Debug, PartialEq)]
pub struct Analysis {
    /// Mean occupants per tested car.
    pub avg_people_per_car: f64,
    /// Mean `cars_in_system` over all log entries.
    pub avg_cars_in_system: f64,
    pub rejected_cars:      u64,
    /// Ascending by `start_minute`; intervals with no entries are absent.
    pub load_by_interval:   Vec<IntervalLoad>,
    /// Cars with both an `Arriving` and a `Leaving` entry, ascending by id.
    pub dwell_times:        Vec<DwellTime>,
}

impl Analysis {
    pub fn from_run(log: &EventLog, stats: &Statistics) -> Self {
        let avg_cars_in_system = if log.is_empty() {
            0.0
        } else {
            log.iter().map(|e| e.cars_in_system as f64).sum::<f64>() / log.len() as f64
        };

        Self {
            avg_people_per_car: stats.avg_people_per_car(),
            avg_cars_in_system,
            rejected_cars: stats.rejected_cars,
            load_by_interval: load_by_interval(log),
            dwell_times: dwell_times(log),
        }
    }

    /// Histogram of dwell times in seconds, or `None` when no car left or
    /// `bins` is zero.
    pub fn dwell_histogram(&self, bins: usize) -> Option<Histogram> {
        let secs: Vec<u64> = self.dwell_times.iter().map(DwellTime::secs).collect();
        Histogram::build(&secs, bins)
    }

    /// Mean dwell time in seconds, `0.0` when no car left.
    pub fn mean_dwell_secs(&self) -> f64 {
        if self.dwell_times.is_empty() {
            return 0.0;
        }
        self.dwell_times.iter().map(|d| d.secs() as f64).sum::<f64>() / self.dwell_times.len() as f64
    }

    /// Write the headline figures and the two charts as text.
    pub fn write_report<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out)?;
        writeln!(out, "Analysis Results:")?;
        writeln!(out, "1. Avg. people per car: {:.2}", self.avg_people_per_car)?;
        writeln!(out, "2. Avg. cars in system: {:.2}", self.avg_cars_in_system)?;
        writeln!(out, "3. Cars rejected due to full queue: {}", self.rejected_cars)?;

        writeln!(out)?;
        writeln!(out, "Avg. cars in system per 5-minute interval:")?;
        let peak = self.load_by_interval.iter().map(|l| l.mean_cars).fold(0.0, f64::max);
        for load in &self.load_by_interval {
            writeln!(
                out,
                "  {:>4} min | {:<w$} {:.2}",
                load.start_minute,
                bar(load.mean_cars, peak),
                load.mean_cars,
                w = BAR_WIDTH
            )?;
        }

        writeln!(out)?;
        writeln!(out, "Dwell time distribution (seconds, mean {:.0}):", self.mean_dwell_secs())?;
        match self.dwell_histogram(REPORT_BINS) {
            None => writeln!(out, "  no car completed its test")?,
            Some(hist) => {
                let tallest = hist.counts.iter().copied().max().unwrap_or(0) as f64;
                for (low, high, count) in hist.bins() {
                    writeln!(
                        out,
                        "  [{:>6.0}, {:>6.0}) | {:<w$} {}",
                        low,
                        high,
                        bar(count as f64, tallest),
                        count,
                        w = BAR_WIDTH
                    )?;
                }
            }
        }
        Ok(())
    }
}

// ── Helpers ───────────────────────────────────────────────────────────────────

fn load_by_interval(log: &EventLog) -> Vec<IntervalLoad> {
    let mut bins: BTreeMap<u64, (usize, usize)> = BTreeMap::new();
    for e in log {
        let minute = (e.at.0 / INTERVAL_SECS) * (INTERVAL_SECS / 60);
        let (sum, n) = bins.entry(minute).or_default();
        *sum += e.cars_in_system;
        *n += 1;
    }
    bins.into_iter()
        .map(|(start_minute, (sum, n))| IntervalLoad {
            start_minute,
            mean_cars: sum as f64 / n as f64,
            samples: n,
        })
        .collect()
}

fn dwell_times(log: &EventLog) -> Vec<DwellTime> {
    let mut arrived: BTreeMap<CarId, SimTime> = BTreeMap::new();
    let mut left: BTreeMap<CarId, SimTime> = BTreeMap::new();
    for e in log {
        match e.kind {
            EntryKind::Arriving => {
                arrived.insert(e.car, e.at);
            }
            EntryKind::Leaving => {
                left.insert(e.car, e.at);
            }
            EntryKind::Testing | EntryKind::Rejecting => {}
        }
    }
    arrived
        .into_iter()
        .filter_map(|(car, arrived)| left.get(&car).map(|&left| DwellTime { car, arrived, left }))
        .collect()
}

fn bar(value: f64, peak: f64) -> String {
    if peak <= 0.0 {
        return String::new();
    }
    let len = ((value / peak) * BAR_WIDTH as f64).round() as usize;
    "#".repeat(len.min(BAR_WIDTH))
}
