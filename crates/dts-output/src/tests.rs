//! Tests for dts-output.

use dts_core::{CarId, SimTime, StationConfig};
use dts_sim::{EntryKind, EventLog, SimBuilder, Statistics};

// ── Helpers ───────────────────────────────────────────────────────────────────

/// Limit-1 station: car 1 tested, car 2 rejected, car 3 still testing.
fn sample_log() -> EventLog {
    let mut log = EventLog::new();
    log.record(SimTime(0), CarId(1), EntryKind::Arriving, 1);
    log.record(SimTime(5), CarId(2), EntryKind::Rejecting, 1);
    log.record(SimTime(60), CarId(1), EntryKind::Testing, 1);
    log.record(SimTime(300), CarId(1), EntryKind::Leaving, 0);
    log.record(SimTime(310), CarId(3), EntryKind::Arriving, 1);
    log.record(SimTime(400), CarId(3), EntryKind::Testing, 1);
    log
}

fn sample_stats() -> Statistics {
    Statistics { total_cars: 3, tested_cars: 1, tested_people: 2, rejected_cars: 1 }
}

#[cfg(test)]
mod csv_tests {
    use tempfile::TempDir;

    use super::*;
    use crate::csv::{CsvLogWriter, read_log_csv, read_log_reader};
    use crate::row::{HEADER, LogRow};
    use crate::writer::LogWriter;
    use crate::{OutputError, run_and_export};

    fn tmp() -> TempDir {
        tempfile::tempdir().expect("create temp dir")
    }

    #[test]
    fn csv_header_correct() {
        let dir = tmp();
        let path = dir.path().join("event_log.csv");
        let mut w = CsvLogWriter::create(&path).unwrap();
        w.finish().unwrap();

        let mut rdr = ::csv::Reader::from_path(&path).unwrap();
        let headers: Vec<_> = rdr.headers().unwrap().iter().map(str::to_owned).collect();
        assert_eq!(headers, ["timestamp", "car_id", "event_type", "cars_in_system"]);
        assert_eq!(rdr.records().count(), 0);
    }

    #[test]
    fn csv_rows_in_log_order() {
        let mut w = CsvLogWriter::from_writer(Vec::new()).unwrap();
        w.write_log(&sample_log()).unwrap();
        assert_eq!(w.rows(), 6);
        let bytes = w.into_inner().unwrap();
        let text = String::from_utf8(bytes).unwrap();

        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "timestamp,car_id,event_type,cars_in_system");
        assert_eq!(lines[1], "0,1,Arriving,1");
        assert_eq!(lines[2], "5,2,Rejecting,1");
        assert_eq!(lines[4], "300,1,Leaving,0");
        assert_eq!(lines.len(), 7);
    }

    #[test]
    fn exported_run_reads_back_identical() {
        let dir = tmp();
        let path = dir.path().join("event_log.csv");
        let sim = SimBuilder::new(StationConfig::default()).seed(17).build().unwrap();
        let outcome = run_and_export(sim, &path).unwrap();

        let read = read_log_csv(&path).unwrap();
        assert!(!read.is_empty());
        assert_eq!(read, outcome.log);
    }

    #[test]
    fn unknown_event_type_rejected() {
        let data = "timestamp,car_id,event_type,cars_in_system\n0,1,Departing,0\n";
        let err = read_log_reader(data.as_bytes()).unwrap_err();
        assert!(matches!(err, OutputError::UnknownEventType(_)));
    }

    #[test]
    fn malformed_number_rejected() {
        let data = "timestamp,car_id,event_type,cars_in_system\n-3,1,Arriving,1\n";
        assert!(matches!(read_log_reader(data.as_bytes()), Err(OutputError::Csv(_))));
    }

    #[test]
    fn log_row_fields_follow_header() {
        let mut w = ::csv::Writer::from_writer(Vec::new());
        let entry = dts_sim::LogEntry {
            at:             SimTime(97),
            car:            CarId(1),
            kind:           EntryKind::Testing,
            cars_in_system: 2,
        };
        w.serialize(LogRow::from(&entry)).unwrap();
        let text = String::from_utf8(w.into_inner().unwrap()).unwrap();
        assert_eq!(text, format!("{}\n97,1,Testing,2\n", HEADER.join(",")));
    }

    #[test]
    fn csv_finish_idempotent() {
        let mut w = CsvLogWriter::from_writer(Vec::new()).unwrap();
        w.finish().unwrap();
        w.finish().unwrap();
    }

    #[test]
    fn export_to_missing_directory_fails() {
        let dir = tmp();
        let path = dir.path().join("no_such_dir").join("event_log.csv");
        let sim = SimBuilder::new(StationConfig::default()).seed(1).build().unwrap();
        assert!(matches!(run_and_export(sim, &path), Err(OutputError::Io(_))));
    }
}

#[cfg(test)]
mod observer_tests {
    use std::io;

    use super::*;
    use crate::writer::LogWriter;
    use crate::{OutputError, OutputResult, StationOutputObserver};

    /// Accepts `capacity` entries, then fails every write.
    struct LimitedWriter {
        written:  usize,
        capacity: usize,
        finished: bool,
    }

    impl LogWriter for LimitedWriter {
        fn write_entry(&mut self, _entry: &dts_sim::LogEntry) -> OutputResult<()> {
            if self.written == self.capacity {
                return Err(OutputError::Io(io::Error::other("disk full")));
            }
            self.written += 1;
            Ok(())
        }

        fn finish(&mut self) -> OutputResult<()> {
            self.finished = true;
            Ok(())
        }
    }

    #[test]
    fn streams_every_entry() {
        let writer = LimitedWriter { written: 0, capacity: usize::MAX, finished: false };
        let mut obs = StationOutputObserver::new(writer);
        let sim = SimBuilder::new(StationConfig::default()).seed(2).build().unwrap();
        let outcome = sim.run(&mut obs).unwrap();

        assert!(obs.take_error().is_none());
        let writer = obs.into_writer();
        assert_eq!(writer.written, outcome.log.len());
        assert!(writer.finished);
    }

    #[test]
    fn console_tables_printed_when_configured() {
        let config = StationConfig { log_to_console: true, ..StationConfig::default() };
        let writer = LimitedWriter { written: 0, capacity: usize::MAX, finished: false };
        let mut obs = StationOutputObserver::new(writer).with_console(Vec::new());
        let sim = SimBuilder::new(config).seed(4).build().unwrap();
        let outcome = sim.run(&mut obs).unwrap();

        assert!(obs.take_error().is_none());
        let (writer, console) = obs.into_parts();
        assert!(writer.finished);
        let text = String::from_utf8(console).unwrap();
        assert!(text.contains("Event Log:"));
        assert!(text.contains("Statistics:"));
        let rows = text.lines().filter(|l| l.matches(" | ").count() == 3).count();
        // Table header plus one row per entry.
        assert_eq!(rows, outcome.log.len() + 1);
    }

    #[test]
    fn console_silent_by_default() {
        let writer = LimitedWriter { written: 0, capacity: usize::MAX, finished: false };
        let mut obs = StationOutputObserver::new(writer).with_console(Vec::new());
        let sim = SimBuilder::new(StationConfig::default()).seed(4).build().unwrap();
        sim.run(&mut obs).unwrap();

        assert!(obs.take_error().is_none());
        let (_, console) = obs.into_parts();
        assert!(console.is_empty());
    }

    #[test]
    fn write_failure_is_kept_for_caller() {
        let writer = LimitedWriter { written: 0, capacity: 3, finished: false };
        let mut obs = StationOutputObserver::new(writer);
        let sim = SimBuilder::new(StationConfig::default()).seed(2).build().unwrap();
        sim.run(&mut obs).unwrap();

        let err = obs.take_error().expect("write error stored");
        assert!(err.to_string().contains("disk full"));
        assert!(obs.take_error().is_none());
        assert_eq!(obs.into_writer().written, 3);
    }
}

#[cfg(test)]
mod console_tests {
    use super::*;
    use crate::{print_log, print_summary};

    #[test]
    fn log_table_layout() {
        let mut out = Vec::new();
        print_log(&sample_log(), &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[1], "Event Log:");
        assert!(lines[2].contains("Car ID") && lines[2].contains("#Cars in System"));
        assert_eq!(lines[4], "    0 |      1 |   Arriving |                1");
        assert_eq!(lines[5], "    5 |      2 |  Rejecting |                1");
        assert_eq!(lines.len(), 4 + 6);
    }

    #[test]
    fn summary_lists_counters() {
        let mut out = Vec::new();
        print_summary(&sample_stats(), &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Total cars"));
        assert!(text.contains("Rejected cars"));
        assert!(text.lines().any(|l| l.starts_with("  Tested people") && l.ends_with('2')));
    }
}

#[cfg(test)]
mod analysis_tests {
    use super::*;
    use crate::{Analysis, DwellTime, IntervalLoad};

    #[test]
    fn headline_figures() {
        let a = Analysis::from_run(&sample_log(), &sample_stats());
        assert_eq!(a.avg_people_per_car, 2.0);
        assert!((a.avg_cars_in_system - 5.0 / 6.0).abs() < 1e-9);
        assert_eq!(a.rejected_cars, 1);
    }

    #[test]
    fn load_binned_by_five_minutes() {
        let a = Analysis::from_run(&sample_log(), &sample_stats());
        assert_eq!(a.load_by_interval.len(), 2);
        assert_eq!(
            a.load_by_interval[0],
            IntervalLoad { start_minute: 0, mean_cars: 1.0, samples: 3 }
        );
        assert_eq!(a.load_by_interval[1].start_minute, 5);
        assert!((a.load_by_interval[1].mean_cars - 2.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn dwell_excludes_rejected_and_unfinished_cars() {
        let a = Analysis::from_run(&sample_log(), &sample_stats());
        assert_eq!(
            a.dwell_times,
            vec![DwellTime { car: CarId(1), arrived: SimTime(0), left: SimTime(300) }]
        );
        assert_eq!(a.dwell_times[0].secs(), 300);
        assert_eq!(a.mean_dwell_secs(), 300.0);
    }

    #[test]
    fn empty_run() {
        let a = Analysis::from_run(&EventLog::new(), &Statistics::default());
        assert_eq!(a.avg_people_per_car, 0.0);
        assert_eq!(a.avg_cars_in_system, 0.0);
        assert!(a.load_by_interval.is_empty());
        assert!(a.dwell_histogram(20).is_none());
        assert_eq!(a.mean_dwell_secs(), 0.0);
    }

    #[test]
    fn histogram_equal_width_last_bin_closed() {
        let mut a = Analysis::from_run(&EventLog::new(), &Statistics::default());
        a.dwell_times = [100u64, 200, 300, 500]
            .iter()
            .enumerate()
            .map(|(i, &d)| DwellTime { car: CarId(i as u32 + 1), arrived: SimTime(0), left: SimTime(d) })
            .collect();

        let hist = a.dwell_histogram(4).unwrap();
        assert_eq!(hist.lo, 100.0);
        assert_eq!(hist.width, 100.0);
        assert_eq!(hist.counts, vec![1, 1, 1, 1]);
        assert_eq!(hist.total(), 4);
        let edges: Vec<(f64, f64)> = hist.bins().map(|(lo, hi, _)| (lo, hi)).collect();
        assert_eq!(edges[3], (400.0, 500.0));
        assert!(a.dwell_histogram(0).is_none());
    }

    #[test]
    fn histogram_single_value() {
        let a = Analysis::from_run(&sample_log(), &sample_stats());
        let hist = a.dwell_histogram(4).unwrap();
        assert_eq!(hist.counts, vec![0, 0, 1, 0]);
    }

    #[test]
    fn report_renders() {
        let sim = SimBuilder::new(StationConfig::default()).seed(6).build().unwrap();
        let outcome = sim.run(&mut dts_sim::NoopObserver).unwrap();
        let a = Analysis::from_run(&outcome.log, &outcome.stats);

        let mut out = Vec::new();
        a.write_report(&mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("1. Avg. people per car:"));
        assert!(text.contains("3. Cars rejected due to full queue:"));
        assert!(text.contains("   0 min |"));
        assert!(text.contains("Dwell time distribution"));
        assert_eq!(text.lines().filter(|l| l.trim_start().starts_with('[')).count(), 20);
    }
}
