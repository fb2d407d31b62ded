//! drive-in — runs the drive-in test station simulation from the command line.
//!
//! Writes the event log to CSV, prints the analysis report and, with
//! `--sweep`, a table of counters across queue limits.

use std::fs::File;
use std::io::{self, BufReader};
use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result, bail};
use clap::Parser;
use log::info;

use dts_core::StationConfig;
use dts_output::{Analysis, run_and_export};
use dts_sim::{SimBuilder, capacity_sweep};

// ── CLI ───────────────────────────────────────────────────────────────────────

#[derive(Parser, Debug)]
#[command(name = "drive-in")]
#[command(about = "Discrete-event simulation of a drive-in test station")]
struct Cli {
    /// JSON station config; missing fields take their defaults
    #[arg(long)]
    config: Option<PathBuf>,

    /// Arrival horizon in seconds
    #[arg(long)]
    duration: Option<u64>,

    /// Capacity of the station queue
    #[arg(long)]
    queue_limit: Option<usize>,

    /// Master RNG seed
    #[arg(long)]
    seed: Option<u64>,

    /// Print the event log table and counters
    #[arg(long)]
    console: bool,

    /// Event log output file
    #[arg(long, default_value = "event_log.csv")]
    csv: PathBuf,

    /// Also sweep the queue limit over START..=END by STEP
    #[arg(long, num_args = 3, value_names = ["START", "END", "STEP"])]
    sweep: Option<Vec<usize>>,
}

impl Cli {
    /// Config file (or defaults) with the command-line overrides applied.
    fn station_config(&self) -> Result<StationConfig> {
        let mut config = match &self.config {
            Some(path) => load_config(path)?,
            None => StationConfig::default(),
        };
        if let Some(d) = self.duration {
            config.simulation_duration_secs = d;
        }
        if let Some(q) = self.queue_limit {
            config.max_queue_size = q;
        }
        if self.seed.is_some() {
            config.seed = self.seed;
        }
        config.log_to_console |= self.console;
        Ok(config)
    }
}

fn load_config(path: &Path) -> Result<StationConfig> {
    let file = File::open(path).with_context(|| format!("opening config {}", path.display()))?;
    serde_json::from_reader(BufReader::new(file))
        .with_context(|| format!("parsing config {}", path.display()))
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let mut config = cli.station_config()?;
    // Pin the seed so the sweep replays the same arrivals as the main run.
    let seed = config.resolve_seed();
    config.seed = Some(seed);

    println!("=== drive-in test station ===");
    println!(
        "Duration: {} s  |  Queue limit: {}  |  Seed: {seed}",
        config.simulation_duration_secs, config.max_queue_size
    );

    let sim = SimBuilder::new(config.clone()).build()?;
    let t0 = Instant::now();
    let outcome = run_and_export(sim, &cli.csv)?;
    info!("run finished in {:.3} s", t0.elapsed().as_secs_f64());

    println!(
        "Processed {} events up to {}; log written to {}",
        outcome.events_processed,
        outcome.final_time,
        cli.csv.display()
    );

    Analysis::from_run(&outcome.log, &outcome.stats).write_report(&mut io::stdout().lock())?;

    if let Some(range) = &cli.sweep {
        let [start, end, step] = range[..] else {
            bail!("--sweep takes exactly three values");
        };
        let points = capacity_sweep(&config, start, end, step)?;

        println!();
        println!("Queue capacity sweep:");
        println!("{:>6} | {:>6} | {:>6} | {:>8}", "Limit", "Total", "Tested", "Rejected");
        println!("{}", "-".repeat(35));
        for p in &points {
            println!(
                "{:>6} | {:>6} | {:>6} | {:>8}",
                p.queue_limit, p.stats.total_cars, p.stats.tested_cars, p.stats.rejected_cars
            );
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_without_flags() {
        let cli = Cli::try_parse_from(["drive-in"]).unwrap();
        assert_eq!(cli.csv, PathBuf::from("event_log.csv"));
        assert!(cli.sweep.is_none());
        assert_eq!(cli.station_config().unwrap(), StationConfig::default());
    }

    #[test]
    fn flags_override_defaults() {
        let cli = Cli::try_parse_from([
            "drive-in", "--duration", "600", "--queue-limit", "3", "--seed", "9", "--console",
        ])
        .unwrap();
        let config = cli.station_config().unwrap();
        assert_eq!(config.simulation_duration_secs, 600);
        assert_eq!(config.max_queue_size, 3);
        assert_eq!(config.seed, Some(9));
        assert!(config.log_to_console);
    }

    #[test]
    fn sweep_takes_three_values() {
        let cli = Cli::try_parse_from(["drive-in", "--sweep", "10", "20", "2"]).unwrap();
        assert_eq!(cli.sweep, Some(vec![10, 20, 2]));
        assert!(Cli::try_parse_from(["drive-in", "--sweep", "10", "20"]).is_err());
    }

    #[test]
    fn missing_config_file_is_an_error() {
        let cli = Cli::try_parse_from(["drive-in", "--config", "/nonexistent/station.json"]).unwrap();
        assert!(cli.station_config().is_err());
    }
}
