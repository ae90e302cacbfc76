// src/model/report.rs

use serde::Serialize;

/// One period of a reconstructed plan. Field names are part of the output
/// contract consumed by the reporting layer; do not rename.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScheduleEntry {
    pub period: usize,
    /// On-hand stock plus the pipeline quantity arriving this period.
    pub start_inventory: u32,
    /// Regular order placed this period (arrives `lead_time` periods later).
    pub order_qty: u32,
    /// Units actually received this period.
    pub arrival_qty: u32,
    /// Residual shortfall covered at premium rates.
    pub emergency_qty: u32,
    pub end_inventory: u32,
    pub period_cost: f64,
}

/// A schedule together with its total cost, produced by one policy.
#[derive(Debug, Clone, Serialize)]
pub struct PlanOutcome {
    pub total_cost: f64,
    pub schedule: Vec<ScheduleEntry>,
}

/// Complete solver output: the optimal plan and the greedy baseline it is
/// benchmarked against.
#[derive(Debug, Clone, Serialize)]
pub struct PlanReport {
    pub minimal_total_cost: f64,
    pub schedule: Vec<ScheduleEntry>,
    pub greedy_total_cost: f64,
    pub greedy_schedule: Vec<ScheduleEntry>,
}

impl PlanReport {
    /// Savings of the optimal plan over the greedy baseline. Never negative
    /// for a correct solver.
    pub fn savings(&self) -> f64 {
        self.greedy_total_cost - self.minimal_total_cost
    }

    /// Total emergency units across the optimal schedule. Widened to u64:
    /// per-period quantities are u32 and a long schedule can exceed that
    /// range in aggregate.
    pub fn total_emergency_units(&self) -> u64 {
        self.schedule.iter().map(|e| u64::from(e.emergency_qty)).sum()
    }
}
