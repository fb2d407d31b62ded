//! Console tables for the event log and the run counters.

use std::io::{self, Write};

use dts_sim::{EventLog, Statistics};

/// Print every log entry as a fixed-width table.
pub fn print_log<W: Write>(log: &EventLog, out: &mut W) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "Event Log:")?;
    writeln!(out, "{:>5} | {:>6} | {:>10} | {:>16}", "Time", "Car ID", "Event", "#Cars in System")?;
    writeln!(out, "{}", "-".repeat(47))?;
    for e in log {
        writeln!(out, "{:>5} | {:>6} | {:>10} | {:>16}", e.at.0, e.car.0, e.kind, e.cars_in_system)?;
    }
    Ok(())
}

/// Print the four run counters.
pub fn print_summary<W: Write>(stats: &Statistics, out: &mut W) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "Statistics:")?;
    writeln!(out, "  {:<16} {:>6}", "Total cars", stats.total_cars)?;
    writeln!(out, "  {:<16} {:>6}", "Tested cars", stats.tested_cars)?;
    writeln!(out, "  {:<16} {:>6}", "Tested people", stats.tested_people)?;
    writeln!(out, "  {:<16} {:>6}", "Rejected cars", stats.rejected_cars)?;
    Ok(())
}
