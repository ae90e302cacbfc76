// src/io/reporting.rs

use crate::model::report::{PlanReport, ScheduleEntry};
use std::error::Error;
use std::path::Path;

/// Writes a reconstructed schedule to a CSV file, one row per period.
/// Column names follow the `ScheduleEntry` field names exactly.
pub fn write_schedule_csv(file_path: &str, schedule: &[ScheduleEntry]) -> Result<(), Box<dyn Error>> {
    let path = Path::new(file_path);
    let mut wtr = csv::Writer::from_path(path)?;

    for entry in schedule {
        wtr.serialize(entry)?;
    }

    wtr.flush()?;
    Ok(())
}

/// Prints the optimal-vs-greedy comparison to stdout.
pub fn print_comparison(report: &PlanReport) {
    println!("\n=== Cost Analysis ===");
    println!("Optimal (DP) total cost: ${:.2}", report.minimal_total_cost);
    println!("Greedy baseline cost:    ${:.2}", report.greedy_total_cost);
    println!("Savings:                 ${:.2}", report.savings());

    let emergencies = report
        .schedule
        .iter()
        .filter(|e| e.emergency_qty > 0)
        .count();
    println!(
        "Emergency orders in optimal plan: {} ({} units)",
        emergencies,
        report.total_emergency_units()
    );

    println!("\nPeriod | Start | Order | Arrive | Emerg |  End | Cost");
    for e in &report.schedule {
        println!(
            "{:>6} | {:>5} | {:>5} | {:>6} | {:>5} | {:>4} | ${:.2}",
            e.period, e.start_inventory, e.order_qty, e.arrival_qty, e.emergency_qty,
            e.end_inventory, e.period_cost
        );
    }
}
