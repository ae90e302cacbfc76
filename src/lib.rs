//! Deterministic replenishment planning for a single supply item.
//!
//! Given known per-period demand, a storage capacity, a delivery lead time
//! and ordering / holding / emergency cost rates, the solver computes the
//! cost-minimal ordering schedule over a finite horizon by dynamic
//! programming, then reconstructs the concrete period-by-period plan.
//! A greedy baseline policy is included for benchmarking the optimum.
//!
//! The whole computation is pure and single-threaded: identical inputs
//! always produce an identical cost and an identical schedule.

pub mod error;
pub mod io;
pub mod model;
pub mod solver;
pub mod strategy;

pub use error::PlanError;
pub use model::config::{CostRates, Scenario};
pub use model::report::{PlanOutcome, PlanReport, ScheduleEntry};
pub use solver::SolveStrategy;

use strategy::greedy::GreedyPolicy;
use strategy::optimal::OptimalPolicy;

/// Solves a scenario end to end: validates, runs the DP, reconstructs the
/// optimal schedule and the greedy baseline schedule.
pub fn plan(scenario: &Scenario, strategy: SolveStrategy) -> Result<PlanReport, PlanError> {
    scenario.validate()?;

    let solution = solver::solve(scenario, strategy)?;
    let optimal = solver::rollout::roll_forward(scenario, &mut OptimalPolicy::new(&solution))?;

    // Backtracked schedule cost must reproduce the value function exactly.
    if optimal.total_cost != solution.minimal_cost {
        return Err(PlanError::InternalInvariantViolation(format!(
            "reconstructed schedule cost {} does not match value function {}",
            optimal.total_cost, solution.minimal_cost
        )));
    }

    let greedy = solver::rollout::roll_forward(scenario, &mut GreedyPolicy)?;

    Ok(PlanReport {
        minimal_total_cost: optimal.total_cost,
        schedule: optimal.schedule,
        greedy_total_cost: greedy.total_cost,
        greedy_schedule: greedy.schedule,
    })
}
