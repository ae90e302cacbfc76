use replenish::io::reporting;
use replenish::{plan, CostRates, Scenario, SolveStrategy};
use std::env;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=== Replenishment Planner (DP vs Greedy) ===");

    // 12-month medical-supply scenario: three-month delivery lead time,
    // seasonal demand spikes, premium emergency supplier.
    let scenario = Scenario {
        horizon: 12,
        demand: vec![15, 12, 35, 20, 10, 40, 15, 10, 10, 25, 15, 10],
        initial_inventory: 10,
        max_storage: 30,
        lead_time: 3,
        decision_step: 1,
        costs: CostRates {
            order_fixed: 100.0,
            order_unit: 10.0,
            storage: 2.0,
            emergency_fixed: 150.0,
            emergency_unit: 60.0,
        },
    };

    println!(
        "Horizon: {} months, lead time: {} months, capacity: {} units",
        scenario.horizon, scenario.lead_time, scenario.max_storage
    );
    println!("Demand: {:?}", scenario.demand);

    // Memoized strategy: with a 3-period pipeline only a fraction of the
    // dense grid is reachable from the initial state.
    let report = match plan(&scenario, SolveStrategy::Memoized) {
        Ok(report) => report,
        Err(e) => {
            eprintln!("Planning failed: {e}");
            std::process::exit(1);
        }
    };

    reporting::print_comparison(&report);

    let output_file = env::args()
        .nth(1)
        .unwrap_or_else(|| "optimal_schedule.csv".to_string());
    match reporting::write_schedule_csv(&output_file, &report.schedule) {
        Ok(()) => println!("\nOptimal schedule written to ./{output_file}"),
        Err(e) => eprintln!("Error writing CSV: {e}"),
    }
}
